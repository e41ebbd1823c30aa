use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use jiff::SignedDuration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{error::OptimizerError, problem::kmh::Kmh};

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize, JsonSchema)]
pub struct Kilometers(f64);

impl Kilometers {
    pub const ZERO: Kilometers = Kilometers(0.0);

    pub fn new(value: f64) -> Self {
        Kilometers(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Time needed to cover the distance at a constant speed, rounded to the
    /// minute.
    pub fn travel_time(&self, speed: Kmh) -> Result<SignedDuration, OptimizerError> {
        if !speed.is_valid() {
            return Err(OptimizerError::InvalidSpeed(speed.value()));
        }

        let minutes = (self.0 / speed.value() * 60.0).round();
        SignedDuration::try_from_secs_f64(minutes * 60.0)
            .map_err(|_| OptimizerError::TravelTimeOutOfRange(self.0))
    }
}

impl PartialOrd for Kilometers {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Add for Kilometers {
    type Output = Kilometers;

    fn add(self, other: Kilometers) -> Kilometers {
        Kilometers(self.0 + other.0)
    }
}

impl Add<f64> for Kilometers {
    type Output = Kilometers;

    fn add(self, other: f64) -> Kilometers {
        Kilometers(self.0 + other)
    }
}

impl AddAssign for Kilometers {
    fn add_assign(&mut self, other: Kilometers) {
        self.0 += other.0;
    }
}

impl Sum for Kilometers {
    fn sum<I: Iterator<Item = Kilometers>>(iter: I) -> Kilometers {
        iter.fold(Kilometers::ZERO, |acc, x| acc + x)
    }
}
