//! The route → direction → stop → departure pipeline.
//!
//! Each stage needs the previous stage's identifier, so the stages run
//! strictly in order and the first failure stops everything after it.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::lookup::{
    Countdown, LookupError, next_departure, resolve_direction, resolve_route, resolve_stop,
};
use crate::nextrip::NexTripProvider;

/// What the commuter asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Exact route label, e.g. "METRO Blue Line".
    pub route: String,
    /// Substring of the stop description, case-sensitive.
    pub stop: String,
    /// Substring of the lower-cased direction name, e.g. "north".
    pub direction: String,
}

impl Query {
    pub fn new(
        route: impl Into<String>,
        stop: impl Into<String>,
        direction: impl Into<String>,
    ) -> Self {
        Self {
            route: route.into(),
            stop: stop.into(),
            direction: direction.into(),
        }
    }
}

/// A pipeline failure, tagged with the stage that failed.
///
/// The `Display` text is what the user sees. Direction and stop failures
/// share a prefix but remain separate variants.
#[derive(Debug, thiserror::Error)]
pub enum NextBusError {
    #[error("Error retrieving routes: {0}")]
    Routes(#[source] LookupError),

    #[error("Error: Route not found")]
    RouteNotFound(#[source] LookupError),

    #[error("Error getting bus direction ID: {0}")]
    Direction(#[source] LookupError),

    #[error("Error getting bus direction ID: {0}")]
    Stop(#[source] LookupError),

    #[error("Error getting time till next bus stop: {0}")]
    Departure(#[source] LookupError),
}

impl NextBusError {
    /// The underlying lookup error.
    pub fn lookup(&self) -> &LookupError {
        match self {
            NextBusError::Routes(e)
            | NextBusError::RouteNotFound(e)
            | NextBusError::Direction(e)
            | NextBusError::Stop(e)
            | NextBusError::Departure(e) => e,
        }
    }
}

/// Minutes until the next bus, measured against the system clock.
pub async fn time_till_next_bus<P: NexTripProvider>(
    provider: &P,
    query: &Query,
) -> Result<Option<Countdown>, NextBusError> {
    time_till_next_bus_at(provider, query, Utc::now).await
}

/// Minutes until the next bus, with `now` read once the departures arrive.
///
/// `Ok(None)` means the stop resolved but nothing is scheduled.
pub async fn time_till_next_bus_at<P: NexTripProvider>(
    provider: &P,
    query: &Query,
    now: impl FnOnce() -> DateTime<Utc>,
) -> Result<Option<Countdown>, NextBusError> {
    debug!(?query, "looking up next bus");

    let route = resolve_route(provider, &query.route)
        .await
        .map_err(|e| match e {
            LookupError::RouteNotFound { .. } => NextBusError::RouteNotFound(e),
            e => NextBusError::Routes(e),
        })?;

    let direction_id = resolve_direction(provider, &route.id, &query.direction)
        .await
        .map_err(NextBusError::Direction)?;

    let place_code = resolve_stop(provider, &route.id, direction_id, &query.stop)
        .await
        .map_err(NextBusError::Stop)?;

    next_departure(provider, &route.id, direction_id, &place_code, now)
        .await
        .map_err(NextBusError::Departure)
}

/// Render a pipeline outcome as the single line printed to the user.
///
/// An empty board renders as an empty string.
pub fn render(outcome: &Result<Option<Countdown>, NextBusError>) -> String {
    match outcome {
        Ok(Some(countdown)) => countdown.to_string(),
        Ok(None) => String::new(),
        Err(e) => e.to_string(),
    }
}
