use fxhash::FxHashSet;
use jiff::Timestamp;
use tracing::{Level, debug, instrument};

use crate::{
    error::OptimizerError,
    problem::{
        kmh::Kmh,
        location::Location,
        stop::{Stop, StopIdx},
    },
    solver::{
        construction::nearest_neighbor,
        efficiency::{self, TWO_OPT_EFFICIENCY},
        ls::two_opt::TwoOptRefiner,
        strategy::Strategy,
        time_window_filter,
        tour::{Tour, TruckId},
    },
};

#[derive(Clone, Debug)]
pub struct OptimizerParams {
    pub strategy: Strategy,

    /// Speed used to estimate driving time from the tour distance.
    pub average_speed: Kmh,
}

impl Default for OptimizerParams {
    fn default() -> Self {
        Self {
            strategy: Strategy::Hybrid,
            average_speed: Kmh::DEFAULT_AVERAGE_SPEED,
        }
    }
}

pub struct RouteOptimizer {
    params: OptimizerParams,
}

impl RouteOptimizer {
    pub fn new(params: OptimizerParams) -> Self {
        RouteOptimizer { params }
    }

    pub fn params(&self) -> &OptimizerParams {
        &self.params
    }

    pub fn optimize(&self, depot: &Location, stops: &[Stop]) -> Result<Tour, OptimizerError> {
        optimize(depot, stops, self.params.strategy)
    }

    pub fn optimize_with_time_windows(
        &self,
        depot: &Location,
        stops: &[Stop],
        now: Timestamp,
    ) -> Result<Tour, OptimizerError> {
        optimize_with_time_windows(depot, stops, now)
    }

    /// Runs a parsed request. The request strategy wins over the configured
    /// one; a request timestamp enables the time-window filter.
    pub fn solve(&self, request: &OptimizationRequest) -> Result<Tour, OptimizerError> {
        let strategy = request.strategy.unwrap_or(self.params.strategy);

        match request.now {
            Some(now) => {
                optimize_within_time_windows(&request.depot, &request.stops, now, strategy)
            }
            None => optimize(&request.depot, &request.stops, strategy),
        }
    }
}

/// Everything needed for one optimization call. Field values are typed, the
/// cross-stop checks run when it is solved.
#[derive(Debug, Clone)]
pub struct OptimizationRequest {
    pub truck_id: Option<TruckId>,
    pub depot: Location,
    pub stops: Vec<Stop>,
    pub strategy: Option<Strategy>,
    pub now: Option<Timestamp>,
}

impl Default for RouteOptimizer {
    fn default() -> Self {
        RouteOptimizer::new(OptimizerParams::default())
    }
}

/// Orders `stops` for a truck leaving `depot`.
///
/// The returned tour contains exactly the input stops. An empty input yields
/// [`Tour::empty`] whatever the strategy.
#[instrument(skip_all, level = Level::DEBUG, fields(stops = stops.len(), %strategy))]
pub fn optimize(
    depot: &Location,
    stops: &[Stop],
    strategy: Strategy,
) -> Result<Tour, OptimizerError> {
    validate(depot, stops)?;
    optimize_validated(depot, stops, strategy)
}

fn optimize_validated(
    depot: &Location,
    stops: &[Stop],
    strategy: Strategy,
) -> Result<Tour, OptimizerError> {
    if stops.is_empty() {
        return Ok(Tour::empty());
    }

    let tour = match strategy {
        Strategy::NearestNeighbor => {
            let order = nearest_neighbor::construct(depot, stops);
            let efficiency = efficiency::priority_efficiency(stops, &order);
            Tour::from_order(depot, stops, &order, efficiency)?
        }
        Strategy::TwoOpt => {
            let initial: Vec<StopIdx> = (0..stops.len()).map(StopIdx::new).collect();
            let order = TwoOptRefiner::new(stops).refine(initial);
            // TODO: replace the constant once a priority-aware score for the
            // 2-opt only path has been agreed on
            Tour::from_order(depot, stops, &order, TWO_OPT_EFFICIENCY)?
        }
        Strategy::Hybrid => {
            let constructed = nearest_neighbor::construct(depot, stops);
            let constructed_efficiency = efficiency::priority_efficiency(stops, &constructed);
            let order = TwoOptRefiner::new(stops).refine(constructed);
            Tour::from_order(
                depot,
                stops,
                &order,
                efficiency::hybrid_efficiency(constructed_efficiency),
            )?
        }
    };

    debug!(
        total_distance = tour.total_distance().value(),
        efficiency = tour.efficiency(),
        "optimized tour"
    );

    Ok(tour)
}

/// Removes the stops that can no longer be delivered at `now`, orders the
/// rest by deadline and builds a nearest-neighbor tour from them.
pub fn optimize_with_time_windows(
    depot: &Location,
    stops: &[Stop],
    now: Timestamp,
) -> Result<Tour, OptimizerError> {
    optimize_within_time_windows(depot, stops, now, Strategy::NearestNeighbor)
}

/// Runs the time-window filter and hands the deadline-ordered stops to
/// `strategy`. With [`Strategy::TwoOpt`] the deadline order is the order
/// being refined.
#[instrument(skip_all, level = Level::DEBUG, fields(stops = stops.len(), %now, %strategy))]
pub fn optimize_within_time_windows(
    depot: &Location,
    stops: &[Stop],
    now: Timestamp,
    strategy: Strategy,
) -> Result<Tour, OptimizerError> {
    validate(depot, stops)?;

    let reachable = time_window_filter::filter_and_order(stops, now);
    optimize_validated(depot, &reachable, strategy)
}

fn validate(depot: &Location, stops: &[Stop]) -> Result<(), OptimizerError> {
    Location::try_from_lat_lon(depot.lat(), depot.lon())?;

    let mut seen = FxHashSet::default();
    for stop in stops {
        let location = stop.location();
        Location::try_from_lat_lon(location.lat(), location.lon())?;

        if !seen.insert(stop.id()) {
            return Err(OptimizerError::DuplicateStopId(stop.id()));
        }
    }

    Ok(())
}
