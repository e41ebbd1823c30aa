use tracing::{Level, debug, instrument};

use crate::problem::stop::{Stop, StopIdx};

/// Improvements smaller than this are floating-point noise and are rejected,
/// which keeps equal-length reversals from oscillating.
const IMPROVEMENT_EPSILON_KM: f64 = 1e-9;

/// **Intra-Route 2-Opt**
///
/// Reverses the stops between `from` and `to` (inclusive) of an open path
/// that starts at the depot.
///
/// ```text
/// BEFORE:
///    ... (prev) --x--> [from] -> ... -> [to] --x--> (next) ...
///
/// AFTER (Sequence Reversed):
///    ... (prev) -----> [to] -> ... -> [from] -----> (next) ...
///
/// Edges Removed: (prev->from), (to->next)
/// Edges Added:   (prev->to),   (from->next)
/// ```
///
/// `next` does not exist when `to` is the last stop: the path does not
/// return to the depot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoOptMove {
    pub from: usize,
    pub to: usize,
}

impl TwoOptMove {
    pub fn new(from: usize, to: usize) -> Self {
        if from == 0 || from + 1 >= to {
            panic!("TwoOpt: expected 1 <= from and from + 1 < to")
        }

        TwoOptMove { from, to }
    }

    /// Change of the path length in kilometers if the move were applied.
    /// Distances are symmetric so the reversed segment keeps its length.
    pub fn delta(&self, stops: &[Stop], order: &[StopIdx]) -> f64 {
        let location = |position: usize| stops[order[position]].location();

        let prev = location(self.from - 1);
        let from = location(self.from);
        let to = location(self.to);
        let next = (self.to + 1 < order.len()).then(|| location(self.to + 1));

        let current_cost = prev.haversine_distance(from).value()
            + next.map_or(0.0, |next| to.haversine_distance(next).value());

        let new_cost = prev.haversine_distance(to).value()
            + next.map_or(0.0, |next| from.haversine_distance(next).value());

        new_cost - current_cost
    }

    pub fn apply(&self, order: &mut [StopIdx]) {
        order[self.from..=self.to].reverse();
    }
}

/// Local search over an existing visiting order.
///
/// The depot and the first stop are never moved, so the depot edge is the
/// same before and after every move and does not enter the deltas.
///
/// Every pass tries all non-adjacent reversals and keeps each one that
/// shortens the path. The search stops after a pass without improvement, so
/// the output is a fixed point of [`TwoOptRefiner::refine`].
pub struct TwoOptRefiner<'a> {
    stops: &'a [Stop],
}

impl<'a> TwoOptRefiner<'a> {
    pub fn new(stops: &'a [Stop]) -> Self {
        TwoOptRefiner { stops }
    }

    #[instrument(skip_all, level = Level::DEBUG, fields(stops = order.len()))]
    pub fn refine(&self, mut order: Vec<StopIdx>) -> Vec<StopIdx> {
        // need at least 4 stops to have two non-adjacent edges to exchange
        if order.len() < 4 {
            return order;
        }

        let mut passes = 0;
        let mut improved = true;

        while improved {
            improved = false;
            passes += 1;

            for from in 1..order.len() - 2 {
                for to in (from + 2)..order.len() {
                    let op = TwoOptMove::new(from, to);
                    let delta = op.delta(self.stops, &order);

                    if delta < -IMPROVEMENT_EPSILON_KM {
                        op.apply(&mut order);
                        improved = true;
                        debug!(from, to, delta, "accepted 2-opt move");
                    }
                }
            }
        }

        debug!(passes, "2-opt converged");
        order
    }
}
