use serde::{Deserialize, Serialize};

use crate::{define_index_newtype, geopoint::GeoPoint};

define_index_newtype!(
    /// Position of a city in its [`crate::graph::CityGraph`]
    CityIdx => City
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    name: String,
    point: GeoPoint,
}

impl City {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        City {
            name: name.into(),
            point: GeoPoint::new(lat, lng),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn point(&self) -> &GeoPoint {
        &self.point
    }

    pub fn lat(&self) -> f64 {
        self.point.lat
    }

    pub fn lng(&self) -> f64 {
        self.point.lng
    }
}
