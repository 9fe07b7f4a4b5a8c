//! Mock NexTrip provider for testing without network access.
//!
//! Serves canned routes, directions, stops and departures from memory and
//! records every call so tests can assert which endpoints were reached.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::error::NexTripError;
use super::provider::NexTripProvider;
use super::types::{Departure, Route, RouteDirection, StopPlace};

/// One recorded call against [`MockNexTrip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Routes,
    Directions(String),
    Stops(String, i64),
    Departures(String, i64, String),
}

#[derive(Default)]
struct MockData {
    routes: Vec<Route>,
    directions: HashMap<String, Vec<RouteDirection>>,
    stops: HashMap<(String, i64), Vec<StopPlace>>,
    departures: HashMap<(String, i64, String), Vec<Departure>>,
    failing: Option<Endpoint>,
}

/// Endpoint selector for injected failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Routes,
    Directions,
    Stops,
    Departures,
}

/// Mock NexTrip provider backed by in-memory data.
///
/// Unknown keys behave like an empty server response rather than an error.
#[derive(Clone, Default)]
pub struct MockNexTrip {
    data: Arc<Mutex<MockData>>,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockNexTrip {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the route catalog.
    pub fn with_routes(self, routes: Vec<Route>) -> Self {
        self.lock_data().routes = routes;
        self
    }

    /// Set the directions served by `route_id`.
    pub fn with_directions(self, route_id: &str, directions: Vec<RouteDirection>) -> Self {
        self.lock_data()
            .directions
            .insert(route_id.to_string(), directions);
        self
    }

    /// Set the stops for `route_id` in `direction_id`.
    pub fn with_stops(self, route_id: &str, direction_id: i64, stops: Vec<StopPlace>) -> Self {
        self.lock_data()
            .stops
            .insert((route_id.to_string(), direction_id), stops);
        self
    }

    /// Set the departures at a stop.
    pub fn with_departures(
        self,
        route_id: &str,
        direction_id: i64,
        place_code: &str,
        departures: Vec<Departure>,
    ) -> Self {
        self.lock_data().departures.insert(
            (route_id.to_string(), direction_id, place_code.to_string()),
            departures,
        );
        self
    }

    /// Make `endpoint` fail with a 503 on every call.
    pub fn failing_at(self, endpoint: Endpoint) -> Self {
        self.lock_data().failing = Some(endpoint);
        self
    }

    /// Calls made so far, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn lock_data(&self) -> std::sync::MutexGuard<'_, MockData> {
        self.data.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, call: MockCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    fn check(&self, endpoint: Endpoint) -> Result<(), NexTripError> {
        if self.lock_data().failing == Some(endpoint) {
            return Err(NexTripError::Api {
                status: 503,
                message: format!("mock {endpoint:?} unavailable"),
            });
        }
        Ok(())
    }
}

impl NexTripProvider for MockNexTrip {
    async fn routes(&self) -> Result<Vec<Route>, NexTripError> {
        self.record(MockCall::Routes);
        self.check(Endpoint::Routes)?;
        Ok(self.lock_data().routes.clone())
    }

    async fn directions(&self, route_id: &str) -> Result<Vec<RouteDirection>, NexTripError> {
        self.record(MockCall::Directions(route_id.to_string()));
        self.check(Endpoint::Directions)?;
        Ok(self
            .lock_data()
            .directions
            .get(route_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn stops(
        &self,
        route_id: &str,
        direction_id: i64,
    ) -> Result<Vec<StopPlace>, NexTripError> {
        self.record(MockCall::Stops(route_id.to_string(), direction_id));
        self.check(Endpoint::Stops)?;
        Ok(self
            .lock_data()
            .stops
            .get(&(route_id.to_string(), direction_id))
            .cloned()
            .unwrap_or_default())
    }

    async fn departures(
        &self,
        route_id: &str,
        direction_id: i64,
        place_code: &str,
    ) -> Result<Vec<Departure>, NexTripError> {
        self.record(MockCall::Departures(
            route_id.to_string(),
            direction_id,
            place_code.to_string(),
        ));
        self.check(Endpoint::Departures)?;
        Ok(self
            .lock_data()
            .departures
            .get(&(route_id.to_string(), direction_id, place_code.to_string()))
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(id: &str, label: &str) -> Route {
        Route {
            id: id.to_string(),
            agency_id: 0,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn serves_configured_data() {
        let mock = MockNexTrip::new()
            .with_routes(vec![route("901", "METRO Blue Line")])
            .with_departures("901", 0, "TF1", vec![Departure::at(100)]);

        let routes = mock.routes().await.unwrap();
        assert_eq!(routes, vec![route("901", "METRO Blue Line")]);

        let departures = mock.departures("901", 0, "TF1").await.unwrap();
        assert_eq!(departures, vec![Departure::at(100)]);
    }

    #[tokio::test]
    async fn unknown_keys_are_empty() {
        let mock = MockNexTrip::new();

        assert!(mock.directions("999").await.unwrap().is_empty());
        assert!(mock.stops("999", 1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn records_calls_in_order() {
        let mock = MockNexTrip::new();

        let _ = mock.routes().await;
        let _ = mock.stops("901", 1).await;

        assert_eq!(
            mock.calls(),
            vec![MockCall::Routes, MockCall::Stops("901".to_string(), 1)]
        );
    }

    #[tokio::test]
    async fn injected_failure() {
        let mock = MockNexTrip::new().failing_at(Endpoint::Directions);

        let result = mock.directions("901").await;

        assert!(matches!(result, Err(NexTripError::Api { status: 503, .. })));
        assert_eq!(mock.calls(), vec![MockCall::Directions("901".to_string())]);
    }
}
