//! Preset mission patterns
//!
//! A pattern turns the preset configuration and the current heading into a
//! list of legs: waypoint actions with offsets relative to the vehicle
//! position at activation. Patterns know nothing about the GPS origin or the
//! mission list; the synthesizer resolves offsets to geodetic waypoints.

use heapless::Vec;
use nalgebra::Vector3;

use super::error::PresetError;
use crate::mission::{WaypointAction, WaypointFlag};
use crate::parameters::MissionPresetParams;

/// Maximum legs a pattern may produce
pub const MAX_PRESET_LEGS: usize = 8;

/// One leg of a preset mission
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetLeg {
    pub action: WaypointAction,
    pub flag: WaypointFlag,
    /// Offset from the activation position (NEU, cm)
    pub offset: Vector3<f32>,
}

impl PresetLeg {
    pub fn waypoint(offset: Vector3<f32>) -> Self {
        Self {
            action: WaypointAction::Waypoint,
            flag: WaypointFlag::None,
            offset,
        }
    }

    pub fn return_to_home() -> Self {
        Self {
            action: WaypointAction::ReturnToHome,
            flag: WaypointFlag::Last,
            offset: Vector3::zeros(),
        }
    }
}

/// Legs produced by a pattern, in upload order
pub type PresetLegs = Vec<PresetLeg, MAX_PRESET_LEGS>;

/// Mission shape selectable through a trigger slot
pub trait PresetPattern {
    /// Build the legs for the given configuration and heading.
    ///
    /// The final leg must carry [`WaypointFlag::Last`].
    fn legs(&self, config: &MissionPresetParams, cos_yaw: f32, sin_yaw: f32) -> PresetLegs;
}

/// Known preset patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetType {
    /// Climb, fly out along the heading, return home
    Vector,
}

impl PresetType {
    /// Return variant name as a static string (usable with defmt on embedded)
    pub fn as_str(&self) -> &'static str {
        match self {
            PresetType::Vector => "Vector",
        }
    }

    pub fn pattern(&self) -> &'static dyn PresetPattern {
        match self {
            PresetType::Vector => &VectorPattern,
        }
    }
}

impl TryFrom<u8> for PresetType {
    type Error = PresetError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(PresetType::Vector),
            other => Err(PresetError::UnsupportedType(other)),
        }
    }
}

/// Climb in place, fly an outbound leg, return to home.
///
/// The outbound offset uses the same expression on both horizontal axes,
/// `distance * cos(yaw) - distance * sin(yaw)`. Heading north this flies
/// north-east rather than straight ahead.
#[derive(Debug, Clone, Copy, Default)]
pub struct VectorPattern;

impl PresetPattern for VectorPattern {
    fn legs(&self, config: &MissionPresetParams, cos_yaw: f32, sin_yaw: f32) -> PresetLegs {
        let altitude = config.altitude as f32;
        let distance = config.distance as f32;
        let outbound = distance * cos_yaw - distance * sin_yaw;

        let mut legs = PresetLegs::new();
        // Capacity exceeds the three legs pushed here
        let _ = legs.push(PresetLeg::waypoint(Vector3::new(0.0, 0.0, altitude)));
        let _ = legs.push(PresetLeg::waypoint(Vector3::new(outbound, outbound, altitude)));
        let _ = legs.push(PresetLeg::return_to_home());
        legs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_type_from_raw() {
        assert_eq!(PresetType::try_from(0), Ok(PresetType::Vector));
        assert_eq!(
            PresetType::try_from(1),
            Err(PresetError::UnsupportedType(1))
        );
        assert_eq!(
            PresetType::try_from(255),
            Err(PresetError::UnsupportedType(255))
        );
        assert_eq!(PresetType::Vector.as_str(), "Vector");
    }

    #[test]
    fn test_vector_legs_default_heading_north() {
        let config = MissionPresetParams::default();
        let legs = VectorPattern.legs(&config, 1.0, 0.0);

        assert_eq!(legs.len(), 3);

        assert_eq!(legs[0].action, WaypointAction::Waypoint);
        assert_eq!(legs[0].flag, WaypointFlag::None);
        assert_eq!(legs[0].offset, Vector3::new(0.0, 0.0, 1000.0));

        assert_eq!(legs[1].action, WaypointAction::Waypoint);
        assert_eq!(legs[1].flag, WaypointFlag::None);
        assert_eq!(legs[1].offset, Vector3::new(5000.0, 5000.0, 1000.0));

        assert_eq!(legs[2].action, WaypointAction::ReturnToHome);
        assert_eq!(legs[2].flag, WaypointFlag::Last);
        assert_eq!(legs[2].offset, Vector3::zeros());
    }

    #[test]
    fn test_vector_outbound_heading_east() {
        let config = MissionPresetParams::default();
        let legs = VectorPattern.legs(&config, 0.0, 1.0);
        assert_eq!(legs[1].offset, Vector3::new(-5000.0, -5000.0, 1000.0));
    }

    #[test]
    fn test_vector_outbound_heading_north_east_cancels() {
        let config = MissionPresetParams::default();
        let c = core::f32::consts::FRAC_1_SQRT_2;
        let legs = VectorPattern.legs(&config, c, c);
        assert!(legs[1].offset.x.abs() < 1e-3);
        assert!(legs[1].offset.y.abs() < 1e-3);
        assert!((legs[1].offset.z - 1000.0).abs() < 1e-3);
    }

    #[test]
    fn test_vector_uses_configured_lengths() {
        let config = MissionPresetParams {
            altitude: 2500,
            distance: 20_000,
            ..MissionPresetParams::default()
        };
        let legs = VectorPattern.legs(&config, 1.0, 0.0);
        assert_eq!(legs[0].offset.z, 2500.0);
        assert_eq!(legs[1].offset, Vector3::new(20_000.0, 20_000.0, 2500.0));
    }

    #[test]
    fn test_every_pattern_terminates_with_last() {
        let config = MissionPresetParams::default();
        let legs = PresetType::Vector.pattern().legs(&config, 1.0, 0.0);
        let (last, rest) = legs.split_last().unwrap();
        assert_eq!(last.flag, WaypointFlag::Last);
        assert!(rest.iter().all(|leg| leg.flag == WaypointFlag::None));
    }
}
