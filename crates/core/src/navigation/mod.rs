//! Navigation types and utilities
//!
//! This module contains the coordinate types shared between the preset
//! synthesizer and the mission list.

pub mod geo;

pub use geo::{GeoPoint, GpsOrigin, DISTANCE_BETWEEN_TWO_LONGITUDE_POINTS_AT_EQUATOR};
