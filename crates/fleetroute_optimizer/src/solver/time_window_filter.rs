use std::cmp::Ordering;

use jiff::Timestamp;
use tracing::debug;

use crate::problem::stop::Stop;

/// Drops the stops whose deadline is at or before `now` and sorts the rest by
/// ascending deadline. Stops without a deadline go last, in input order.
///
/// Geography is ignored here: the result is meant to be the stop pool of the
/// nearest-neighbor construction.
pub fn filter_and_order(stops: &[Stop], now: Timestamp) -> Vec<Stop> {
    let mut reachable: Vec<Stop> = stops
        .iter()
        .filter(|stop| !stop.time_window().is_expired(now))
        .cloned()
        .collect();

    let expired = stops.len() - reachable.len();
    if expired > 0 {
        debug!(expired, %now, "dropped stops past their deadline");
    }

    reachable.sort_by(|a, b| {
        match (a.time_window().latest(), b.time_window().latest()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });

    reachable
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;

    use crate::{problem::priority::Priority, test_utils};

    use super::*;

    #[test]
    fn test_filter_and_order() {
        let now: Timestamp = "2025-06-10T12:00:00Z".parse().unwrap();
        let stops = vec![
            test_utils::create_stop(1, 0.0, 0.1, Priority::Low, 10),
            test_utils::create_stop_with_deadline(2, now + SignedDuration::from_hours(3)),
            test_utils::create_stop_with_deadline(3, now - SignedDuration::from_mins(1)),
            test_utils::create_stop_with_deadline(4, now + SignedDuration::from_hours(1)),
        ];

        let filtered = filter_and_order(&stops, now);

        assert_eq!(
            filtered.iter().map(|stop| stop.id().get()).collect::<Vec<_>>(),
            vec![4, 2, 1]
        );
    }

    #[test]
    fn test_deadline_equal_to_now_is_expired() {
        let now: Timestamp = "2025-06-10T12:00:00Z".parse().unwrap();
        let stops = vec![test_utils::create_stop_with_deadline(1, now)];

        assert!(filter_and_order(&stops, now).is_empty());
    }

    #[test]
    fn test_undated_stops_keep_input_order() {
        let now: Timestamp = "2025-06-10T12:00:00Z".parse().unwrap();
        let stops = vec![
            test_utils::create_stop(3, 0.0, 0.1, Priority::Low, 0),
            test_utils::create_stop(1, 0.0, 0.2, Priority::Urgent, 0),
            test_utils::create_stop(2, 0.0, 0.3, Priority::Medium, 0),
        ];

        let filtered = filter_and_order(&stops, now);

        assert_eq!(filtered, stops);
    }
}
