use geo::{Distance, Haversine};
use serde::{Deserialize, Serialize};

use crate::{error::OptimizerError, problem::kilometers::Kilometers};

const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Radius used by `geo::Haversine`, the GRS80 mean earth radius.
const GEO_MEAN_EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// A point on the earth surface, stored as `(lon, lat)` like `geo` does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    point: geo::Point,
}

impl Location {
    /// Builds a location without range checks, for coordinates that are
    /// already known to be valid.
    pub fn from_lat_lon(lat: f64, lon: f64) -> Self {
        Self {
            point: geo::Point::new(lon, lat),
        }
    }

    pub fn try_from_lat_lon(lat: f64, lon: f64) -> Result<Self, OptimizerError> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);

        if !valid {
            return Err(OptimizerError::InvalidCoordinate {
                latitude: lat,
                longitude: lon,
            });
        }

        Ok(Self::from_lat_lon(lat, lon))
    }

    pub fn lon(&self) -> f64 {
        self.point.x()
    }

    pub fn lat(&self) -> f64 {
        self.point.y()
    }

    /// Great-circle distance on a sphere of radius 6371 km.
    pub fn haversine_distance(&self, to: &Location) -> Kilometers {
        if self.point == to.point {
            return Kilometers::ZERO;
        }

        let meters = Haversine.distance(self.point, to.point);
        Kilometers::new(meters * EARTH_RADIUS_KM / GEO_MEAN_EARTH_RADIUS_METERS)
    }
}
