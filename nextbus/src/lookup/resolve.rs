//! Route, direction and stop resolution.
//!
//! Each resolver makes one NexTrip call and scans the result in server
//! order. The first match wins; ambiguous inputs are not reported.

use tracing::debug;

use crate::nextrip::{NexTripProvider, Route};

use super::error::LookupError;

/// Return the first item satisfying `pred`, consuming the list.
pub fn find_first<T>(items: Vec<T>, pred: impl Fn(&T) -> bool) -> Option<T> {
    items.into_iter().find(|item| pred(item))
}

/// Find the route whose label equals `label` exactly.
pub async fn resolve_route<P: NexTripProvider>(
    provider: &P,
    label: &str,
) -> Result<Route, LookupError> {
    let routes = provider.routes().await?;
    let candidates = routes.len();

    match find_first(routes, |r| r.label == label) {
        Some(route) => {
            debug!(route_id = %route.id, label, "resolved route");
            Ok(route)
        }
        None => {
            debug!(label, candidates, "no route with this label");
            Err(LookupError::RouteNotFound {
                label: label.to_string(),
            })
        }
    }
}

/// Find the id of the first direction of `route_id` whose lower-cased name
/// contains `direction`.
///
/// `direction` is compared as given; callers wanting a case-insensitive
/// match pass it in lower case.
pub async fn resolve_direction<P: NexTripProvider>(
    provider: &P,
    route_id: &str,
    direction: &str,
) -> Result<i64, LookupError> {
    let directions = provider.directions(route_id).await?;
    let candidates = directions.len();

    match find_first(directions, |d| d.name.to_lowercase().contains(direction)) {
        Some(found) => {
            debug!(route_id, direction_id = found.id, name = %found.name, "resolved direction");
            Ok(found.id)
        }
        None => {
            debug!(route_id, direction, candidates, "no matching direction");
            Err(LookupError::DirectionNotFound {
                route_id: route_id.to_string(),
                direction: direction.to_string(),
            })
        }
    }
}

/// Find the place code of the first stop whose description contains `stop`
/// (case-sensitive).
pub async fn resolve_stop<P: NexTripProvider>(
    provider: &P,
    route_id: &str,
    direction_id: i64,
    stop: &str,
) -> Result<String, LookupError> {
    let stops = provider.stops(route_id, direction_id).await?;
    let candidates = stops.len();

    match find_first(stops, |s| s.description.contains(stop)) {
        Some(found) => {
            debug!(route_id, direction_id, place_code = %found.code, "resolved stop");
            Ok(found.code)
        }
        None => {
            debug!(route_id, direction_id, stop, candidates, "no matching stop");
            Err(LookupError::StopNotFound {
                route_id: route_id.to_string(),
                direction_id,
                stop: stop.to_string(),
            })
        }
    }
}
