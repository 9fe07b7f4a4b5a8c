//! Next bus countdown.
//!
//! Answers "how many minutes until the next bus for route R, stop S,
//! direction D?" using the Metro Transit NexTrip real-time API.

pub mod cli;
pub mod lookup;
pub mod nextrip;
pub mod pipeline;
