//! Lookup error types.
//!
//! A lookup either fails to reach NexTrip (`Fetch`) or reaches it and finds
//! nothing matching. The two are kept apart so callers can tell "the
//! service is down" from "no such stop".

use crate::nextrip::NexTripError;

/// Errors from resolving identifiers or reading departures.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The remote call itself failed
    #[error(transparent)]
    Fetch(#[from] NexTripError),

    /// No route carries this exact label
    #[error("Route not found")]
    RouteNotFound { label: String },

    /// No direction name of the route contains the input
    #[error("Route direction not found")]
    DirectionNotFound { route_id: String, direction: String },

    /// No stop description contains the input
    #[error("Bus stop place code not found")]
    StopNotFound {
        route_id: String,
        direction_id: i64,
        stop: String,
    },

    /// Departure timestamp cannot be represented as a date
    #[error("departure time {0} is out of range")]
    InvalidDepartureTime(i64),
}

impl LookupError {
    /// True when the lookup reached NexTrip but nothing matched.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LookupError::RouteNotFound { .. }
                | LookupError::DirectionNotFound { .. }
                | LookupError::StopNotFound { .. }
        )
    }
}
