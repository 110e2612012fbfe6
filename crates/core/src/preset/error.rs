//! Mission preset error types

use core::fmt;

use crate::mission::MissionError;

/// Errors from loading a mission preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetError {
    /// Configured preset type has no pattern
    UnsupportedType(u8),
    /// Local frame has no GPS origin to convert waypoints against
    NoGpsOrigin,
    /// Mission list rejected a synthesized waypoint
    Mission(MissionError),
}

impl PresetError {
    /// Short reason, usable as a defmt string literal
    pub fn as_str(&self) -> &'static str {
        match self {
            PresetError::UnsupportedType(_) => "unsupported type",
            PresetError::NoGpsOrigin => "no gps origin",
            PresetError::Mission(_) => "mission write rejected",
        }
    }
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetError::UnsupportedType(raw) => write!(f, "unsupported preset type {}", raw),
            PresetError::NoGpsOrigin => write!(f, "gps origin not valid"),
            PresetError::Mission(err) => write!(f, "mission write failed: {}", err),
        }
    }
}

impl From<MissionError> for PresetError {
    fn from(err: MissionError) -> Self {
        PresetError::Mission(err)
    }
}
