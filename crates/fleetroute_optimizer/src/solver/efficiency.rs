use crate::problem::stop::{Stop, StopIdx};

/// Score reported for the 2-opt strategy, which does not evaluate priorities.
pub const TWO_OPT_EFFICIENCY: f64 = 85.0;

/// Flat bonus the hybrid strategy adds on top of the nearest-neighbor score.
pub const HYBRID_EFFICIENCY_BONUS: f64 = 10.0;

pub const MAX_EFFICIENCY: f64 = 100.0;

/// Rewards orders that visit heavily weighted stops early.
///
/// The stop at position `k` in an order of `n` stops contributes
/// `weight * (n - k) / n`; the sum is normalised by the total weight so that
/// the result lies in `[0, 100]`.
pub fn priority_efficiency(stops: &[Stop], order: &[StopIdx]) -> f64 {
    if order.is_empty() {
        return 0.0;
    }

    let n = order.len() as f64;
    let (achieved, maximum) =
        order
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(achieved, maximum), (position, &idx)| {
                let weight = f64::from(stops[idx].priority().weight());
                let position_bonus = (n - position as f64) / n;

                (achieved + weight * position_bonus, maximum + weight)
            });

    if maximum > 0.0 {
        achieved / maximum * MAX_EFFICIENCY
    } else {
        0.0
    }
}

pub fn hybrid_efficiency(nearest_neighbor_efficiency: f64) -> f64 {
    (nearest_neighbor_efficiency + HYBRID_EFFICIENCY_BONUS).min(MAX_EFFICIENCY)
}
