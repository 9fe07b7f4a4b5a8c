//! Command-line surface.

use clap::Parser;

use crate::nextrip::NexTripProvider;
use crate::pipeline::{Query, render, time_till_next_bus};

/// Printed when the argument count is wrong.
pub const USAGE: &str = "Not enough arguments. Use: nextbus [BusRoute] [BusStop] [Direction]";

/// Positional arguments: route label, stop name, direction.
#[derive(Debug, Parser)]
#[command(
    name = "nextbus",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Exact route label, e.g. "METRO Blue Line"
    #[arg(allow_hyphen_values = true)]
    pub route: String,

    /// Part of the stop name, case-sensitive
    #[arg(allow_hyphen_values = true)]
    pub stop: String,

    /// Part of the direction, lower case, e.g. "north"
    #[arg(allow_hyphen_values = true)]
    pub direction: String,
}

impl From<Args> for Query {
    fn from(args: Args) -> Self {
        Query::new(args.route, args.stop, args.direction)
    }
}

/// Parse the full argv (program name first). `None` on any mismatch.
pub fn parse_query<I, T>(argv: I) -> Option<Query>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Args::try_parse_from(argv).ok().map(Query::from)
}

/// Run one invocation and return the line to print.
///
/// No request is made unless the arguments parse.
pub async fn run<P, I, T>(provider: &P, argv: I) -> String
where
    P: NexTripProvider,
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let Some(query) = parse_query(argv) else {
        return USAGE.to_string();
    };

    render(&time_till_next_bus(provider, &query).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nextrip::MockNexTrip;

    #[test]
    fn parses_three_positionals() {
        let query = parse_query(["nextbus", "METRO Blue Line", "Target Field", "north"]);

        assert_eq!(
            query,
            Some(Query::new("METRO Blue Line", "Target Field", "north"))
        );
    }

    #[test]
    fn rejects_wrong_counts() {
        assert_eq!(parse_query(["nextbus"]), None);
        assert_eq!(parse_query(["nextbus", "METRO Blue Line", "Target Field"]), None);
        assert_eq!(parse_query(["nextbus", "a", "b", "c", "d"]), None);
    }

    #[test]
    fn hyphenated_values_are_arguments() {
        let query = parse_query(["nextbus", "Route-A", "-", "-north"]);

        assert_eq!(query, Some(Query::new("Route-A", "-", "-north")));
    }

    #[tokio::test]
    async fn wrong_count_prints_usage_without_requests() {
        let mock = MockNexTrip::new();

        let output = run(&mock, ["nextbus", "METRO Blue Line"]).await;

        assert_eq!(output, USAGE);
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn valid_arguments_reach_provider() {
        let mock = MockNexTrip::new();

        let output = run(&mock, ["nextbus", "METRO Blue Line", "Target Field", "north"]).await;

        assert_eq!(output, "Error: Route not found");
        assert_eq!(mock.calls().len(), 1);
    }
}
