use std::{fmt::Display, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OptimizerError;

/// Which pipeline the optimizer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "String")]
pub enum Strategy {
    /// Greedy construction only.
    #[serde(rename = "nearest-neighbor")]
    NearestNeighbor,
    /// 2-opt applied to the order given by the caller.
    #[serde(rename = "2-opt")]
    TwoOpt,
    /// Greedy construction followed by 2-opt.
    #[default]
    #[serde(rename = "hybrid")]
    Hybrid,
}

impl Strategy {
    /// An absent name selects the default; a present but unknown one is an error.
    pub fn from_name(name: Option<&str>) -> Result<Strategy, OptimizerError> {
        name.map_or(Ok(Strategy::default()), |name| name.parse())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::NearestNeighbor => "nearest-neighbor",
            Strategy::TwoOpt => "2-opt",
            Strategy::Hybrid => "hybrid",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = OptimizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest-neighbor" => Ok(Strategy::NearestNeighbor),
            "2-opt" => Ok(Strategy::TwoOpt),
            "hybrid" => Ok(Strategy::Hybrid),
            other => Err(OptimizerError::InvalidStrategy(other.to_owned())),
        }
    }
}

impl TryFrom<String> for Strategy {
    type Error = OptimizerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
