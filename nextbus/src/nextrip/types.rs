//! NexTrip API response DTOs.
//!
//! These types map directly to the NexTrip v2 JSON responses. Field names
//! are renamed to read naturally in Rust; unknown fields are ignored.

use serde::Deserialize;

/// A transit route from `GET /routes`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Route {
    /// Agency-assigned route id (e.g. "901").
    #[serde(rename = "route_id")]
    pub id: String,

    /// Operating agency.
    #[serde(default)]
    pub agency_id: i64,

    /// Human-facing label (e.g. "METRO Blue Line").
    #[serde(rename = "route_label")]
    pub label: String,
}

/// One travel direction of a route, from `GET /directions/{route_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteDirection {
    /// Direction id, usually 0 or 1.
    #[serde(rename = "direction_id")]
    pub id: i64,

    /// e.g. "Northbound".
    #[serde(rename = "direction_name")]
    pub name: String,
}

/// A stop along a route in one direction, from `GET /stops/{route_id}/{direction_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StopPlace {
    /// Short place code (e.g. "TF1").
    #[serde(rename = "place_code")]
    pub code: String,

    /// Human-readable stop name.
    pub description: String,
}

/// Response from `GET /{route_id}/{direction_id}/{place_code}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteDepartures {
    /// Upcoming departures in the order the server returned them.
    #[serde(default)]
    pub departures: Vec<Departure>,
}

/// A single predicted or scheduled departure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Departure {
    /// Departure time as Unix epoch seconds.
    pub departure_time: i64,

    /// Board text, e.g. "5 Min" or "10:42".
    pub departure_text: Option<String>,

    /// Destination shown on the vehicle.
    pub description: Option<String>,

    pub route_short_name: Option<String>,
}

impl Departure {
    /// A departure with only a timestamp.
    pub fn at(departure_time: i64) -> Self {
        Self {
            departure_time,
            departure_text: None,
            description: None,
            route_short_name: None,
        }
    }
}
