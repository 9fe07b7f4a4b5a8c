use tracing_subscriber::EnvFilter;

use nextbus::cli;
use nextbus::nextrip::{NexTripClient, NexTripConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr; stdout carries only the answer
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = match NexTripClient::new(NexTripConfig::from_env()) {
        Ok(client) => client,
        Err(e) => {
            println!("Error creating NexTrip client: {e}");
            return;
        }
    };

    println!("{}", cli::run(&client, std::env::args_os()).await);
}
