use fleetroute_optimizer::{problem::kmh::Kmh, solver::strategy::Strategy};
use jiff::Timestamp;

pub fn parse_strategy(input: &str) -> Result<Strategy, String> {
    input.parse::<Strategy>().map_err(|error| error.to_string())
}

/// Accepts RFC 3339 timestamps and the literal `now`.
pub fn parse_timestamp(input: &str) -> Result<Timestamp, String> {
    if input.eq_ignore_ascii_case("now") {
        return Ok(Timestamp::now());
    }

    input
        .parse::<Timestamp>()
        .map_err(|error| format!("Invalid timestamp: {error}"))
}

pub fn parse_speed(input: &str) -> Result<Kmh, String> {
    let speed = input
        .parse::<f64>()
        .map_err(|_| String::from("Speed must be a positive number of km/h"))?;

    Kmh::try_new(speed).map_err(|error| error.to_string())
}
