use fleetroute_optimizer::problem::{
    location::Location,
    priority::Priority,
    stop::{Stop, StopBuilder},
    time_window::TimeWindow,
};
use jiff::{SignedDuration, Timestamp};

pub fn stop(id: u64, lat: f64, lon: f64, priority: Priority, minutes: i64) -> Stop {
    let mut builder = StopBuilder::default();
    builder
        .set_id(id)
        .set_location(Location::from_lat_lon(lat, lon))
        .set_priority(priority)
        .set_service_duration(SignedDuration::from_mins(minutes));

    builder.build().unwrap()
}

pub fn stop_due(id: u64, lat: f64, lon: f64, latest: Option<Timestamp>) -> Stop {
    let mut builder = StopBuilder::default();
    builder
        .set_id(id)
        .set_location(Location::from_lat_lon(lat, lon))
        .set_priority(Priority::Medium)
        .set_time_window(TimeWindow::new(None, latest));

    builder.build().unwrap()
}

pub fn santo_domingo_depot() -> Location {
    Location::from_lat_lon(18.4861, -69.9312)
}
