use tracing::{Level, instrument};

use crate::problem::{
    location::Location,
    stop::{Stop, StopIdx},
};

/// Greedy construction from the depot.
///
/// At every step the unvisited stop minimising
/// `distance(current, stop) + stop.priority().bonus()` is appended. Ties keep
/// the input order, so the result is deterministic.
#[instrument(skip_all, level = Level::DEBUG, fields(stops = stops.len()))]
pub fn construct(depot: &Location, stops: &[Stop]) -> Vec<StopIdx> {
    let mut remaining: Vec<StopIdx> = (0..stops.len()).map(StopIdx::new).collect();
    let mut order = Vec::with_capacity(stops.len());
    let mut current = *depot;

    while !remaining.is_empty() {
        let mut best_position = 0;
        let mut best_score = f64::INFINITY;

        for (position, &idx) in remaining.iter().enumerate() {
            let stop = &stops[idx];
            let score = current.haversine_distance(stop.location()) + stop.priority().bonus();

            if score.value() < best_score {
                best_score = score.value();
                best_position = position;
            }
        }

        // `remove` keeps the remaining stops in input order for tie-breaking
        let next = remaining.remove(best_position);
        current = *stops[next].location();
        order.push(next);
    }

    order
}
