use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Delivery window of a stop. Either bound may be open.
#[derive(Deserialize, Debug, Serialize, Clone, Copy, Default, PartialEq)]
pub struct TimeWindow {
    earliest: Option<Timestamp>,
    latest: Option<Timestamp>,
}

impl TimeWindow {
    pub fn new(earliest: Option<Timestamp>, latest: Option<Timestamp>) -> Self {
        TimeWindow { earliest, latest }
    }

    pub fn earliest(&self) -> Option<Timestamp> {
        self.earliest
    }

    pub fn latest(&self) -> Option<Timestamp> {
        self.latest
    }

    /// The deadline is at or before `now`.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        match self.latest {
            Some(latest) => latest <= now,
            None => false,
        }
    }
}

#[derive(Default)]
pub struct TimeWindowBuilder {
    earliest: Option<Timestamp>,
    latest: Option<Timestamp>,
}

impl TimeWindowBuilder {
    pub fn with_earliest(mut self, earliest: Timestamp) -> Self {
        self.earliest = Some(earliest);
        self
    }

    pub fn with_latest(mut self, latest: Timestamp) -> Self {
        self.latest = Some(latest);
        self
    }

    pub fn build(self) -> TimeWindow {
        TimeWindow {
            earliest: self.earliest,
            latest: self.latest,
        }
    }
}
