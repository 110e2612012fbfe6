//! Local tangent plane to geodetic conversion
//!
//! The local frame is north-east-up in centimeters, anchored at a GPS origin.
//! Geodetic coordinates use the MAVLink integer convention: latitude and
//! longitude in degrees * 1e7, altitude in centimeters.
//!
//! The conversion is a flat-earth approximation, accurate for the short
//! distances covered by a mission preset.

use libm::{cosf, roundf};
use nalgebra::Vector3;

/// Centimeters spanned by 1e-7 degree of longitude at the equator
pub const DISTANCE_BETWEEN_TWO_LONGITUDE_POINTS_AT_EQUATOR: f32 = 1.113_195;

/// Geodetic position (lat/lon in degrees * 1e7, altitude in cm)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeoPoint {
    pub lat: i32,
    pub lon: i32,
    pub alt: i32,
}

impl GeoPoint {
    pub const fn new(lat: i32, lon: i32, alt: i32) -> Self {
        Self { lat, lon, alt }
    }

    /// Latitude in degrees
    pub fn latitude(&self) -> f64 {
        self.lat as f64 / 1e7
    }

    /// Longitude in degrees
    pub fn longitude(&self) -> f64 {
        self.lon as f64 / 1e7
    }
}

/// Origin of the local navigation frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsOrigin {
    /// Latitude in degrees * 1e7
    pub lat: i32,
    /// Longitude in degrees * 1e7
    pub lon: i32,
    /// Altitude in cm
    pub alt: i32,
    /// Longitude scale factor, cos(latitude)
    pub scale: f32,
    pub valid: bool,
}

impl Default for GpsOrigin {
    fn default() -> Self {
        Self::invalid()
    }
}

impl GpsOrigin {
    /// Create a valid origin, deriving the longitude scale from latitude
    pub fn new(lat: i32, lon: i32, alt: i32) -> Self {
        let lat_rad = (lat as f32 / 1e7).to_radians();
        Self {
            lat,
            lon,
            alt,
            scale: cosf(lat_rad).max(0.01),
            valid: true,
        }
    }

    /// Origin not yet established
    pub const fn invalid() -> Self {
        Self {
            lat: 0,
            lon: 0,
            alt: 0,
            scale: 1.0,
            valid: false,
        }
    }

    /// Convert a local NEU position (cm) to geodetic coordinates.
    ///
    /// Returns `None` until the origin is established.
    pub fn local_to_geodetic(&self, pos: &Vector3<f32>) -> Option<GeoPoint> {
        if !self.valid {
            return None;
        }

        Some(GeoPoint {
            lat: self.lat + roundf(pos.x / DISTANCE_BETWEEN_TWO_LONGITUDE_POINTS_AT_EQUATOR) as i32,
            lon: self.lon
                + roundf(pos.y / (DISTANCE_BETWEEN_TWO_LONGITUDE_POINTS_AT_EQUATOR * self.scale))
                    as i32,
            alt: self.alt + roundf(pos.z) as i32,
        })
    }
}
