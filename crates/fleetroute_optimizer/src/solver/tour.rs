use jiff::SignedDuration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::OptimizerError,
    problem::{
        kilometers::Kilometers,
        kmh::Kmh,
        location::Location,
        stop::{Stop, StopId, StopIdx},
    },
};

pub type TruckId = u64;

/// Length of the open path `depot -> stops[order[0]] -> ... -> stops[order[n - 1]]`.
pub fn route_length(depot: &Location, stops: &[Stop], order: &[StopIdx]) -> Kilometers {
    let mut current = depot;
    let mut total = Kilometers::ZERO;

    for &idx in order {
        let next = stops[idx].location();
        total += current.haversine_distance(next);
        current = next;
    }

    total
}

/// Ordered visiting sequence produced by the optimizer, with its metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    stops: Vec<Stop>,
    total_distance: Kilometers,
    total_time: SignedDuration,
    efficiency: f64,
}

impl Tour {
    pub fn empty() -> Self {
        Tour {
            stops: Vec::new(),
            total_distance: Kilometers::ZERO,
            total_time: SignedDuration::ZERO,
            efficiency: 0.0,
        }
    }

    pub(crate) fn from_order(
        depot: &Location,
        stops: &[Stop],
        order: &[StopIdx],
        efficiency: f64,
    ) -> Result<Self, OptimizerError> {
        let total_distance = route_length(depot, stops, order);

        let mut total_time = SignedDuration::ZERO;
        for &idx in order {
            let stop = &stops[idx];
            total_time = total_time
                .checked_add(stop.service_duration())
                .ok_or(OptimizerError::ServiceTimeOutOfRange(stop.id()))?;
        }

        Ok(Tour {
            stops: order.iter().map(|&idx| stops[idx].clone()).collect(),
            total_distance,
            total_time,
            efficiency,
        })
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn stop_ids(&self) -> impl Iterator<Item = StopId> + '_ {
        self.stops.iter().map(|stop| stop.id())
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn total_distance(&self) -> Kilometers {
        self.total_distance
    }

    /// Sum of the service times. Travel time is not part of it, see
    /// [`Tour::estimated_travel_time`].
    pub fn total_time(&self) -> SignedDuration {
        self.total_time
    }

    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    /// Driving time over the whole tour at a constant speed, rounded to the minute.
    pub fn estimated_travel_time(&self, speed: Kmh) -> Result<SignedDuration, OptimizerError> {
        self.total_distance.travel_time(speed)
    }

    pub fn to_route_plan(&self, truck_id: TruckId) -> RoutePlan {
        RoutePlan {
            truck_id,
            delivery_ids: self.stop_ids().map(|id| id.to_string()).collect(),
            total_distance: self.total_distance,
            estimated_time: self.total_time,
            status: RouteStatus::Planned,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RouteStatus {
    #[default]
    Planned,
    Active,
    Completed,
}

/// Route record handed to the storage layer once a tour has been computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    pub truck_id: TruckId,
    pub delivery_ids: Vec<String>,
    pub total_distance: Kilometers,
    pub estimated_time: SignedDuration,
    pub status: RouteStatus,
}
