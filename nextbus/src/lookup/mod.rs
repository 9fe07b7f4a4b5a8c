//! Identifier resolution.
//!
//! Turns the human-readable route label, direction and stop name into
//! NexTrip identifiers, one remote call per step, and reads the next
//! departure at the resolved stop.

mod departure;
mod error;
mod resolve;

pub use departure::{Countdown, minutes_until, next_departure};
pub use error::LookupError;
pub use resolve::{find_first, resolve_direction, resolve_route, resolve_stop};
