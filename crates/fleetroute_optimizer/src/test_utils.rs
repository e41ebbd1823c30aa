use jiff::{SignedDuration, Timestamp};

use crate::problem::{
    location::Location,
    priority::Priority,
    stop::{Stop, StopBuilder, StopIdx},
    time_window::TimeWindowBuilder,
};

pub fn create_stop(id: u64, lat: f64, lon: f64, priority: Priority, minutes: i64) -> Stop {
    let mut builder = StopBuilder::default();
    builder
        .set_id(id)
        .set_location(Location::from_lat_lon(lat, lon))
        .set_priority(priority)
        .set_service_duration(SignedDuration::from_mins(minutes));

    builder.build().unwrap()
}

/// Medium priority stop on the equator whose delivery closes at `latest`.
pub fn create_stop_with_deadline(id: u64, latest: Timestamp) -> Stop {
    let mut builder = StopBuilder::default();
    builder
        .set_id(id)
        .set_location(Location::from_lat_lon(0.0, 0.01 * id as f64))
        .set_priority(Priority::Medium)
        .set_service_duration(SignedDuration::from_mins(10))
        .set_time_window(TimeWindowBuilder::default().with_latest(latest).build());

    builder.build().unwrap()
}

/// `n` stops on the equator east of `(0, 0)`, stop `k` at longitude `0.01 * (k + 1)`.
pub fn create_line_stops(n: usize, priority: Priority) -> Vec<Stop> {
    (0..n)
        .map(|k| create_stop(k as u64, 0.0, 0.01 * (k + 1) as f64, priority, 5))
        .collect()
}

/// Deterministic spread of stops around Santo Domingo with mixed priorities.
pub fn create_scattered_stops(n: usize) -> Vec<Stop> {
    const PRIORITIES: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    (0..n)
        .map(|k| {
            let lat = 18.42 + ((k * 37) % 17) as f64 * 0.007;
            let lon = -69.98 + ((k * 53) % 23) as f64 * 0.006;
            create_stop(k as u64 + 100, lat, lon, PRIORITIES[k % 4], 5 + (k as i64 % 4) * 5)
        })
        .collect()
}

pub fn ids(stops: &[Stop], order: &[StopIdx]) -> Vec<u64> {
    order.iter().map(|&idx| stops[idx].id().get()).collect()
}
