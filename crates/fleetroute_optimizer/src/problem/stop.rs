use std::fmt::Display;

use jiff::SignedDuration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    define_index_newtype,
    error::OptimizerError,
    problem::{location::Location, priority::Priority, time_window::TimeWindow},
};

/// Identifier the caller uses for a stop, usually the delivery record id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct StopId(u64);

impl StopId {
    pub const fn new(id: u64) -> Self {
        StopId(id)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl Display for StopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StopId {
    fn from(id: u64) -> Self {
        StopId(id)
    }
}

// Position of a stop in the slice handed to the optimizer.
define_index_newtype!(StopIdx, Stop);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    id: StopId,
    location: Location,
    priority: Priority,
    service_duration: SignedDuration,
    time_window: TimeWindow,
}

impl Stop {
    pub fn id(&self) -> StopId {
        self.id
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Time spent on site, travel excluded.
    pub fn service_duration(&self) -> SignedDuration {
        self.service_duration
    }

    pub fn time_window(&self) -> &TimeWindow {
        &self.time_window
    }
}

#[derive(Default)]
pub struct StopBuilder {
    id: Option<StopId>,
    location: Option<Location>,
    priority: Option<Priority>,
    service_duration: Option<SignedDuration>,
    time_window: Option<TimeWindow>,
}

impl StopBuilder {
    pub fn set_id(&mut self, id: impl Into<StopId>) -> &mut StopBuilder {
        self.id = Some(id.into());
        self
    }

    pub fn set_location(&mut self, location: Location) -> &mut StopBuilder {
        self.location = Some(location);
        self
    }

    pub fn set_priority(&mut self, priority: Priority) -> &mut StopBuilder {
        self.priority = Some(priority);
        self
    }

    pub fn set_service_duration(&mut self, duration: SignedDuration) -> &mut StopBuilder {
        self.service_duration = Some(duration);
        self
    }

    pub fn set_time_window(&mut self, time_window: TimeWindow) -> &mut StopBuilder {
        self.time_window = Some(time_window);
        self
    }

    pub fn build(self) -> Result<Stop, OptimizerError> {
        let id = self.id.ok_or(OptimizerError::MissingField("stop id"))?;
        let service_duration = self.service_duration.unwrap_or(SignedDuration::ZERO);

        if service_duration.is_negative() {
            return Err(OptimizerError::NegativeServiceTime(id));
        }

        Ok(Stop {
            id,
            location: self
                .location
                .ok_or(OptimizerError::MissingField("stop location"))?,
            priority: self
                .priority
                .ok_or(OptimizerError::MissingField("stop priority"))?,
            service_duration,
            time_window: self.time_window.unwrap_or_default(),
        })
    }
}
