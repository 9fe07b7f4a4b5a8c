//! Next-departure countdown.

use std::fmt;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::nextrip::NexTripProvider;

use super::error::LookupError;

/// Whole minutes until a departure, truncated toward zero.
///
/// Negative when the departure is already in the past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Countdown {
    pub minutes: i64,
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Minutes", self.minutes)
    }
}

/// Minutes from `now` until the epoch-second `departure_time`.
pub fn minutes_until(departure_time: i64, now: DateTime<Utc>) -> Result<i64, LookupError> {
    let departs = DateTime::from_timestamp(departure_time, 0)
        .ok_or(LookupError::InvalidDepartureTime(departure_time))?;
    Ok((departs - now).num_minutes())
}

/// Countdown to the first departure at a stop.
///
/// Departures are trusted to arrive in chronological order. An empty board
/// is `Ok(None)`, not an error. `now` is read after the response arrives.
pub async fn next_departure<P: NexTripProvider>(
    provider: &P,
    route_id: &str,
    direction_id: i64,
    place_code: &str,
    now: impl FnOnce() -> DateTime<Utc>,
) -> Result<Option<Countdown>, LookupError> {
    let departures = provider
        .departures(route_id, direction_id, place_code)
        .await?;

    let Some(first) = departures.first() else {
        debug!(route_id, direction_id, place_code, "no upcoming departures");
        return Ok(None);
    };

    debug!(
        departure_time = first.departure_time,
        text = first.departure_text.as_deref().unwrap_or(""),
        destination = first.description.as_deref().unwrap_or(""),
        "next departure"
    );

    let minutes = minutes_until(first.departure_time, now())?;
    Ok(Some(Countdown { minutes }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nextrip::{Departure, Endpoint, MockNexTrip, NexTripError};

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_729_260_000, 0).unwrap()
    }

    fn in_secs(secs: i64) -> i64 {
        now().timestamp() + secs
    }

    #[test]
    fn countdown_display() {
        assert_eq!(Countdown { minutes: 5 }.to_string(), "5 Minutes");
        assert_eq!(Countdown { minutes: -2 }.to_string(), "-2 Minutes");
    }

    #[test]
    fn minutes_truncate_toward_zero() {
        assert_eq!(minutes_until(in_secs(125), now()).unwrap(), 2);
        assert_eq!(minutes_until(in_secs(90), now()).unwrap(), 1);
        assert_eq!(minutes_until(in_secs(59), now()).unwrap(), 0);
        assert_eq!(minutes_until(in_secs(0), now()).unwrap(), 0);
        assert_eq!(minutes_until(in_secs(-59), now()).unwrap(), 0);
        assert_eq!(minutes_until(in_secs(-61), now()).unwrap(), -1);
    }

    #[test]
    fn sub_second_clock_still_truncates() {
        let now = now() + chrono::Duration::milliseconds(500);
        assert_eq!(minutes_until(in_secs(120), now).unwrap(), 1);
    }

    #[test]
    fn out_of_range_timestamp() {
        let result = minutes_until(i64::MAX, now());
        assert!(matches!(result, Err(LookupError::InvalidDepartureTime(t)) if t == i64::MAX));
    }

    #[tokio::test]
    async fn uses_first_departure_only() {
        let mock = MockNexTrip::new().with_departures(
            "901",
            1,
            "TF12",
            vec![Departure::at(in_secs(600)), Departure::at(in_secs(60))],
        );

        let countdown = next_departure(&mock, "901", 1, "TF12", now).await.unwrap();

        assert_eq!(countdown, Some(Countdown { minutes: 10 }));
    }

    #[tokio::test]
    async fn empty_board_is_none() {
        let mock = MockNexTrip::new();

        let countdown = next_departure(&mock, "901", 1, "TF12", now).await.unwrap();

        assert_eq!(countdown, None);
    }

    #[tokio::test]
    async fn fetch_failure_propagates() {
        let mock = MockNexTrip::new().failing_at(Endpoint::Departures);

        let result = next_departure(&mock, "901", 1, "TF12", now).await;

        assert!(matches!(
            result,
            Err(LookupError::Fetch(NexTripError::Api { .. }))
        ));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Minutes equal the second difference divided by 60, truncated toward zero.
        #[test]
        fn matches_integer_division(base in 0i64..4_000_000_000, offset in -86_400i64..86_400) {
            let now = DateTime::from_timestamp(base, 0).unwrap();
            let minutes = minutes_until(base + offset, now).unwrap();
            prop_assert_eq!(minutes, offset / 60);
        }
    }
}
