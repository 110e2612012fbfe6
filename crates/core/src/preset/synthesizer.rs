//! Waypoint synthesis
//!
//! Resolves a pattern's legs against the current position and GPS origin and
//! uploads them to the mission list. Every waypoint is computed before the
//! list is touched, so an unsupported preset or a lost GPS origin leaves the
//! existing mission intact.

use heapless::Vec;

use super::error::PresetError;
use super::pattern::{PresetLeg, PresetType, MAX_PRESET_LEGS};
use crate::mission::{MissionList, Waypoint, WaypointAction};
use crate::navigation::GpsOrigin;
use crate::parameters::MissionPresetParams;
use crate::traits::NavigationState;
use nalgebra::Vector3;

/// Materializes preset patterns into the mission list
pub struct WaypointSynthesizer;

impl WaypointSynthesizer {
    /// Replace the mission with the given preset.
    ///
    /// Returns the number of waypoints written.
    pub fn load<N: NavigationState>(
        preset: u8,
        config: &MissionPresetParams,
        nav: &N,
        mission: &mut MissionList,
    ) -> Result<u8, PresetError> {
        let preset = PresetType::try_from(preset)?;

        let (cos_yaw, sin_yaw) = nav.heading_cos_sin();
        let position = nav.local_position();
        let origin = nav.gps_origin();

        let mut waypoints: Vec<Waypoint, MAX_PRESET_LEGS> = Vec::new();
        for leg in preset.pattern().legs(config, cos_yaw, sin_yaw).iter() {
            let waypoint = Self::resolve_leg(leg, &position, &origin)?;
            // Legs are bounded by MAX_PRESET_LEGS
            let _ = waypoints.push(waypoint);
        }

        mission.reset();
        for (index, waypoint) in (1u8..).zip(waypoints.iter()) {
            mission.set_waypoint(index, *waypoint)?;
        }

        Ok(waypoints.len() as u8)
    }

    /// Convert a leg to an absolute waypoint.
    ///
    /// Return-to-home legs carry zero coordinates.
    fn resolve_leg(
        leg: &PresetLeg,
        position: &Vector3<f32>,
        origin: &GpsOrigin,
    ) -> Result<Waypoint, PresetError> {
        match leg.action {
            WaypointAction::ReturnToHome => Ok(Waypoint::return_to_home(leg.flag)),
            action => {
                let point = origin
                    .local_to_geodetic(&(position + leg.offset))
                    .ok_or(PresetError::NoGpsOrigin)?;
                Ok(Waypoint::new(action, leg.flag, point))
            }
        }
    }
}
