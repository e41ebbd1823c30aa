use jiff::{SignedDuration, Timestamp};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    error::OptimizerError,
    problem::{
        kmh::Kmh,
        location::Location,
        priority::Priority,
        stop::{Stop, StopBuilder, StopId},
        time_window::TimeWindow,
    },
    solver::{
        optimizer::OptimizationRequest,
        strategy::Strategy,
        tour::{RoutePlan, Tour, TruckId},
    },
};

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "OptimizationRequest", rename_all = "camelCase")]
pub struct JsonOptimizationRequest {
    pub truck_id: Option<TruckId>,
    pub depot: JsonCoordinate,
    pub stops: Vec<JsonStop>,

    /// One of `nearest-neighbor`, `2-opt` or `hybrid`. Defaults to `hybrid`.
    pub algorithm: Option<String>,

    /// When set, stops whose latest delivery is at or before this instant are
    /// dropped and the rest are ordered by deadline first.
    pub now: Option<Timestamp>,
}

#[derive(Serialize, Deserialize, JsonSchema, Clone, Copy)]
#[serde(deny_unknown_fields, rename = "Coordinate")]
pub struct JsonCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl TryFrom<&JsonCoordinate> for Location {
    type Error = OptimizerError;

    fn try_from(value: &JsonCoordinate) -> Result<Self, Self::Error> {
        Location::try_from_lat_lon(value.latitude, value.longitude)
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Stop", rename_all = "camelCase")]
pub struct JsonStop {
    pub id: u64,
    pub latitude: f64,
    pub longitude: f64,

    /// One of `low`, `medium`, `high` or `urgent`.
    pub priority: String,

    /// Service time on site, in minutes.
    pub estimated_time: Option<i64>,
    pub earliest_delivery: Option<Timestamp>,
    pub latest_delivery: Option<Timestamp>,
}

impl TryFrom<JsonStop> for Stop {
    type Error = OptimizerError;

    fn try_from(value: JsonStop) -> Result<Self, Self::Error> {
        let id = StopId::new(value.id);
        let service_duration = value
            .estimated_time
            .unwrap_or(0)
            .checked_mul(60)
            .map(SignedDuration::from_secs)
            .ok_or(OptimizerError::ServiceTimeOutOfRange(id))?;

        let mut builder = StopBuilder::default();

        builder
            .set_id(id)
            .set_location(Location::try_from_lat_lon(value.latitude, value.longitude)?)
            .set_priority(value.priority.parse::<Priority>()?)
            .set_service_duration(service_duration)
            .set_time_window(TimeWindow::new(
                value.earliest_delivery,
                value.latest_delivery,
            ));

        builder.build()
    }
}

impl JsonOptimizationRequest {
    /// Converts the wire format into domain types. Unknown priorities and
    /// algorithm names are errors, an absent algorithm is not.
    #[instrument(skip_all, level = "debug")]
    pub fn build_request(self) -> Result<OptimizationRequest, OptimizerError> {
        let depot = Location::try_from(&self.depot)?;
        let strategy = self
            .algorithm
            .as_deref()
            .map(str::parse::<Strategy>)
            .transpose()?;

        let stops = self
            .stops
            .into_iter()
            .map(Stop::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(OptimizationRequest {
            truck_id: self.truck_id,
            depot,
            stops,
            strategy,
            now: self.now,
        })
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Tour", rename_all = "camelCase")]
pub struct JsonTour {
    pub algorithm: Strategy,
    pub stop_ids: Vec<u64>,

    /// Kilometers, depot included as the start point.
    pub total_distance: f64,

    /// Sum of the service times, in minutes.
    pub total_time: f64,

    /// Driving time at the configured average speed, in minutes.
    pub estimated_travel_time: i64,
    pub efficiency: f64,

    /// Present when the request named a truck.
    pub route: Option<RoutePlan>,
}

impl JsonTour {
    pub fn from_tour(
        tour: &Tour,
        algorithm: Strategy,
        average_speed: Kmh,
        truck_id: Option<TruckId>,
    ) -> Result<Self, OptimizerError> {
        Ok(JsonTour {
            algorithm,
            stop_ids: tour.stop_ids().map(|id| id.get()).collect(),
            total_distance: tour.total_distance().value(),
            total_time: tour.total_time().as_secs_f64() / 60.0,
            estimated_travel_time: tour.estimated_travel_time(average_speed)?.as_mins(),
            efficiency: tour.efficiency(),
            route: truck_id.map(|truck_id| tour.to_route_plan(truck_id)),
        })
    }
}
