//! Navigation state queries consumed by the preset subsystem.
//!
//! The position estimator, arming tracker and navigation mode checks are
//! owned by the firmware. The preset logic only needs a read-only view of
//! them for a single tick, which this trait provides.

use nalgebra::Vector3;

use crate::navigation::GpsOrigin;

/// Read-only view of the vehicle navigation state.
///
/// Positions are in the local tangent plane (north, east, up) in centimeters,
/// relative to the GPS origin returned by [`gps_origin`](Self::gps_origin).
pub trait NavigationState {
    /// Vehicle is armed.
    fn is_armed(&self) -> bool;

    /// Altitude hold could be engaged (valid altitude estimate).
    fn can_activate_alt_hold(&self) -> bool;

    /// Position hold could be engaged (valid, locked position and heading).
    fn can_activate_pos_hold(&self) -> bool;

    /// Position estimate is referenced to a global frame (GPS).
    fn has_global_reference(&self) -> bool;

    /// The GPS origin used for local/geodetic conversion is valid.
    fn has_valid_gps_origin(&self) -> bool;

    /// Current estimated local position (NEU, cm).
    fn local_position(&self) -> Vector3<f32>;

    /// Cosine and sine of the current yaw estimate.
    fn heading_cos_sin(&self) -> (f32, f32);

    /// Origin of the local frame.
    fn gps_origin(&self) -> GpsOrigin;
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock navigation state with directly settable fields.
///
/// The default is a disarmed vehicle at the local origin, heading north,
/// with every precondition for loading a preset satisfied.
#[derive(Debug, Clone)]
pub struct MockNavigation {
    pub armed: bool,
    pub alt_hold: bool,
    pub pos_hold: bool,
    pub global_reference: bool,
    pub position: Vector3<f32>,
    pub cos_yaw: f32,
    pub sin_yaw: f32,
    pub origin: GpsOrigin,
}

impl Default for MockNavigation {
    fn default() -> Self {
        Self {
            armed: false,
            alt_hold: true,
            pos_hold: true,
            global_reference: true,
            position: Vector3::zeros(),
            cos_yaw: 1.0,
            sin_yaw: 0.0,
            // 35.6762 N, 139.6503 E, 40 m
            origin: GpsOrigin::new(356_762_000, 1_396_503_000, 4_000),
        }
    }
}

impl MockNavigation {
    /// Set heading from a yaw angle in degrees
    pub fn set_yaw_deg(&mut self, yaw_deg: f32) {
        let yaw = yaw_deg.to_radians();
        self.cos_yaw = libm::cosf(yaw);
        self.sin_yaw = libm::sinf(yaw);
    }
}

impl NavigationState for MockNavigation {
    fn is_armed(&self) -> bool {
        self.armed
    }

    fn can_activate_alt_hold(&self) -> bool {
        self.alt_hold
    }

    fn can_activate_pos_hold(&self) -> bool {
        self.pos_hold
    }

    fn has_global_reference(&self) -> bool {
        self.global_reference
    }

    fn has_valid_gps_origin(&self) -> bool {
        self.origin.valid
    }

    fn local_position(&self) -> Vector3<f32> {
        self.position
    }

    fn heading_cos_sin(&self) -> (f32, f32) {
        (self.cos_yaw, self.sin_yaw)
    }

    fn gps_origin(&self) -> GpsOrigin {
        self.origin
    }
}
