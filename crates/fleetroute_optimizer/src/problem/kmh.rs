use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OptimizerError;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize, JsonSchema)]
pub struct Kmh(f64);

impl Kmh {
    /// Average urban delivery speed used when nothing else is configured.
    pub const DEFAULT_AVERAGE_SPEED: Kmh = Kmh(40.0);

    /// Unchecked, see [`Kmh::try_new`] for values coming from the outside.
    pub fn new(value: f64) -> Self {
        Kmh(value)
    }

    pub fn try_new(value: f64) -> Result<Self, OptimizerError> {
        let speed = Kmh(value);
        if speed.is_valid() {
            Ok(speed)
        } else {
            Err(OptimizerError::InvalidSpeed(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Default for Kmh {
    fn default() -> Self {
        Kmh::DEFAULT_AVERAGE_SPEED
    }
}
