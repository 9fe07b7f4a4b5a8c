//! Abstraction over the NexTrip endpoints.

use std::future::Future;

use super::error::NexTripError;
use super::types::{Departure, Route, RouteDirection, StopPlace};

/// Trait for anything that can answer NexTrip queries.
///
/// Implemented by the HTTP [`NexTripClient`](super::NexTripClient) and by
/// [`MockNexTrip`](super::MockNexTrip) in tests. Every method is one remote
/// call; implementations must not cache between calls.
pub trait NexTripProvider {
    /// All routes, in server order.
    fn routes(&self) -> impl Future<Output = Result<Vec<Route>, NexTripError>> + Send;

    /// Directions served by a route.
    fn directions(
        &self,
        route_id: &str,
    ) -> impl Future<Output = Result<Vec<RouteDirection>, NexTripError>> + Send;

    /// Stops for a route travelling in one direction.
    fn stops(
        &self,
        route_id: &str,
        direction_id: i64,
    ) -> impl Future<Output = Result<Vec<StopPlace>, NexTripError>> + Send;

    /// Upcoming departures at a stop, in server order.
    fn departures(
        &self,
        route_id: &str,
        direction_id: i64,
        place_code: &str,
    ) -> impl Future<Output = Result<Vec<Departure>, NexTripError>> + Send;
}
