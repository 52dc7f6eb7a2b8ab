// Geo module
// Coordinates and map zoom planning for the schedule map

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised for malformed coordinates
#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    #[error("Latitude out of range [-90, 90]: {0}")]
    InvalidLatitude(f64),
    #[error("Longitude out of range [-180, 180]: {0}")]
    InvalidLongitude(f64),
    #[error("Coordinate component is not a finite number")]
    NotFinite,
}

/// A WGS84 point on the map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Create a coordinate, rejecting out-of-range or non-finite components
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        let coord = Self {
            latitude,
            longitude,
        };
        coord.validate()?;
        Ok(coord)
    }

    /// Check range and finiteness of both components
    pub fn validate(&self) -> Result<(), GeoError> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(GeoError::NotFinite);
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(GeoError::InvalidLatitude(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(GeoError::InvalidLongitude(self.longitude));
        }
        Ok(())
    }
}

/// A pair of map zoom levels used to animate a "fly to location" transition:
/// zoom out to `zoom_out`, pan, then settle at `zoom_in`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomPlan {
    pub zoom_out: u8,
    pub zoom_in: u8,
}
