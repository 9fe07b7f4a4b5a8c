//! Metro Transit NexTrip client.
//!
//! This module provides an HTTP client for the NexTrip v2 API, which
//! publishes routes, directions, stops and live departures.
//!
//! Key characteristics of NexTrip:
//! - Unauthenticated, read-only JSON over HTTPS
//! - Directions and stops are scoped to a route (and direction)
//! - Departure times are epoch seconds, ordered by the server

mod client;
mod error;
mod mock;
mod provider;
mod types;

pub use client::{NexTripClient, NexTripConfig};
pub use error::NexTripError;
pub use mock::{Endpoint, MockCall, MockNexTrip};
pub use provider::NexTripProvider;
pub use types::{Departure, Route, RouteDepartures, RouteDirection, StopPlace};
