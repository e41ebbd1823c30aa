use thiserror::Error;

use crate::problem::stop::StopId;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OptimizerError {
    #[error("InvalidPriority: unknown priority '{0}'")]
    InvalidPriority(String),

    #[error("InvalidStrategy: unknown strategy '{0}'")]
    InvalidStrategy(String),

    #[error("InvalidCoordinate: ({latitude}, {longitude}) is outside the valid range")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("DuplicateStopId: stop {0} appears more than once")]
    DuplicateStopId(StopId),

    #[error("NegativeServiceTime: stop {0} has a negative service time")]
    NegativeServiceTime(StopId),

    #[error("ServiceTimeOutOfRange: service time of stop {0} does not fit in a duration")]
    ServiceTimeOutOfRange(StopId),

    #[error("InvalidSpeed: {0} km/h is not a positive finite speed")]
    InvalidSpeed(f64),

    #[error("TravelTimeOutOfRange: {0} km cannot be expressed as a travel time")]
    TravelTimeOutOfRange(f64),

    #[error("MissingField: {0} is required")]
    MissingField(&'static str),
}

impl OptimizerError {
    /// Name of the error kind, suitable for mapping onto a client error response.
    pub fn kind(&self) -> &'static str {
        match self {
            OptimizerError::InvalidPriority(_) => "InvalidPriority",
            OptimizerError::InvalidStrategy(_) => "InvalidStrategy",
            OptimizerError::InvalidCoordinate { .. } => "InvalidCoordinate",
            OptimizerError::DuplicateStopId(_) => "DuplicateStopId",
            OptimizerError::NegativeServiceTime(_) => "NegativeServiceTime",
            OptimizerError::ServiceTimeOutOfRange(_) => "ServiceTimeOutOfRange",
            OptimizerError::InvalidSpeed(_) => "InvalidSpeed",
            OptimizerError::TravelTimeOutOfRange(_) => "TravelTimeOutOfRange",
            OptimizerError::MissingField(_) => "MissingField",
        }
    }
}
