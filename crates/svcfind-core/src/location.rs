//! Coordinate value type and great-circle distance.

use crate::validate::ValidationError;

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A validated WGS84 position. Construction goes through [`Coordinate::new`],
/// so a value of this type always holds a finite, in-range pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Builds a coordinate from a latitude in `[-90, 90]` and a longitude in
    /// `[-180, 180]`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::CoordinateOutOfRange`] when either component
    /// is non-finite or outside its range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        let lat_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        let lon_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);
        if !(lat_ok && lon_ok) {
            return Err(ValidationError::CoordinateOutOfRange {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[must_use]
    pub fn latitude(self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(self) -> f64 {
        self.longitude
    }
}

/// Haversine great-circle distance between two positions, in kilometres.
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.latitude().to_radians();
    let lat_b = b.latitude().to_radians();
    let delta_lat = (b.latitude() - a.latitude()).to_radians();
    let delta_lon = (b.longitude() - a.longitude()).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
