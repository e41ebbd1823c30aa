use std::{fmt::Display, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OptimizerError;

/// Urgency of a delivery. Unknown labels are rejected when parsing, never
/// mapped onto a default level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const MAX_WEIGHT: u32 = 4;

    pub fn weight(&self) -> u32 {
        match self {
            Priority::Urgent => 4,
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    /// Penalty added to the travel distance when choosing the next stop.
    /// Urgent stops get the smallest one.
    pub fn bonus(&self) -> f64 {
        f64::from((Priority::MAX_WEIGHT + 1 - self.weight()) * 2)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = OptimizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            other => Err(OptimizerError::InvalidPriority(other.to_owned())),
        }
    }
}

impl TryFrom<String> for Priority {
    type Error = OptimizerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
