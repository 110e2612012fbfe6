//! Mission Waypoint List
//!
//! Pure data structures for the navigation mission list.
//!
//! # Mission Storage
//!
//! - Fixed-size waypoint array (max 60 waypoints)
//! - In-memory storage, 1-based indices
//! - Validity tracks whether the most recent write terminated the list
//!
//! # Upload Rules
//!
//! A waypoint may only be written at index 1 (starting a new mission) or at
//! `count + 1` (continuing the current upload). Each write truncates the
//! list to the written index and marks it valid only if the waypoint carries
//! [`WaypointFlag::Last`]. A list with waypoints but no terminating entry is
//! never flown.
//!
//! # Note
//!
//! This module contains only pure data types. Global state management
//! and Embassy-specific wrappers are provided by the firmware crate.

pub mod error;

use heapless::Vec;

use crate::navigation::GeoPoint;

pub use error::MissionError;

/// Maximum number of waypoints in a mission
pub const MAX_WAYPOINTS: usize = 60;

/// Waypoint action, discriminant is the raw action id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum WaypointAction {
    /// Fly to the waypoint position
    #[default]
    Waypoint = 1,
    /// Return to home; coordinates are ignored by the navigation engine
    ReturnToHome = 4,
}

/// Waypoint list terminator flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum WaypointFlag {
    #[default]
    None = 0,
    /// Final waypoint of the mission
    Last = 0xA5,
}

/// Mission waypoint
///
/// Latitude and longitude in degrees * 1e7, altitude in cm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Waypoint {
    pub action: WaypointAction,
    pub flag: WaypointFlag,
    pub lat: i32,
    pub lon: i32,
    pub alt: i32,
    /// Action-specific parameters (unused by presets)
    pub p1: i16,
    pub p2: i16,
    pub p3: i16,
}

impl Waypoint {
    /// Create a waypoint at the given geodetic position
    pub fn new(action: WaypointAction, flag: WaypointFlag, position: GeoPoint) -> Self {
        Self {
            action,
            flag,
            lat: position.lat,
            lon: position.lon,
            alt: position.alt,
            ..Self::default()
        }
    }

    /// Return-to-home marker; carries no position
    pub fn return_to_home(flag: WaypointFlag) -> Self {
        Self::new(WaypointAction::ReturnToHome, flag, GeoPoint::default())
    }

    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon, self.alt)
    }

    pub fn is_last(&self) -> bool {
        self.flag == WaypointFlag::Last
    }
}

/// Mission list
///
/// Ordered waypoints, a count and a validity flag. Indices are 1-based.
#[derive(Debug, Clone)]
pub struct MissionList {
    waypoints: Vec<Waypoint, MAX_WAYPOINTS>,
    valid: bool,
}

impl Default for MissionList {
    fn default() -> Self {
        Self::new()
    }
}

impl MissionList {
    /// Create a new empty mission list (const fn for static initialization)
    pub const fn new() -> Self {
        Self {
            waypoints: Vec::new(),
            valid: false,
        }
    }

    /// Number of waypoints
    pub fn count(&self) -> u8 {
        self.waypoints.len() as u8
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// The last written waypoint carried [`WaypointFlag::Last`]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Clear all waypoints and invalidate the list
    pub fn reset(&mut self) {
        self.waypoints.clear();
        self.valid = false;
    }

    /// Write a waypoint at a 1-based index.
    ///
    /// Accepts index 1 or `count + 1`. On success the count becomes `index`
    /// and validity follows the waypoint flag. Rejected writes leave the list
    /// unchanged.
    pub fn set_waypoint(&mut self, index: u8, waypoint: Waypoint) -> Result<(), MissionError> {
        if index == 0 || index as usize > MAX_WAYPOINTS {
            return Err(MissionError::IndexOutOfRange(index));
        }

        let next = self.count() + 1;
        if index != 1 && index != next {
            return Err(MissionError::OutOfSequence {
                index,
                expected: next,
            });
        }

        self.waypoints.truncate(index as usize - 1);
        // Capacity checked above
        let _ = self.waypoints.push(waypoint);
        self.valid = waypoint.is_last();
        Ok(())
    }

    /// Get a waypoint by 1-based index
    pub fn get_waypoint(&self, index: u8) -> Option<&Waypoint> {
        if index == 0 {
            return None;
        }
        self.waypoints.get(index as usize - 1)
    }

    /// Get all waypoints as slice
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wp(lat: i32, flag: WaypointFlag) -> Waypoint {
        Waypoint::new(
            WaypointAction::Waypoint,
            flag,
            GeoPoint::new(lat, 1_396_503_000, 1_000),
        )
    }

    #[test]
    fn test_mission_list_creation() {
        let list = MissionList::new();
        assert_eq!(list.count(), 0);
        assert!(list.is_empty());
        assert!(!list.is_valid());
    }

    #[test]
    fn test_sequential_upload_terminated_by_last() {
        let mut list = MissionList::new();
        list.set_waypoint(1, wp(1, WaypointFlag::None)).unwrap();
        assert_eq!(list.count(), 1);
        assert!(!list.is_valid());

        list.set_waypoint(2, wp(2, WaypointFlag::None)).unwrap();
        assert!(!list.is_valid());

        list.set_waypoint(3, Waypoint::return_to_home(WaypointFlag::Last))
            .unwrap();
        assert_eq!(list.count(), 3);
        assert!(list.is_valid());
    }

    #[test]
    fn test_missing_last_flag_leaves_list_invalid() {
        let mut list = MissionList::new();
        list.set_waypoint(1, wp(1, WaypointFlag::None)).unwrap();
        list.set_waypoint(2, wp(2, WaypointFlag::None)).unwrap();
        assert_eq!(list.count(), 2);
        assert!(!list.is_valid());
    }

    #[test]
    fn test_out_of_sequence_write_rejected() {
        let mut list = MissionList::new();
        list.set_waypoint(1, wp(1, WaypointFlag::None)).unwrap();

        let err = list.set_waypoint(3, wp(3, WaypointFlag::Last)).unwrap_err();
        assert_eq!(
            err,
            MissionError::OutOfSequence {
                index: 3,
                expected: 2
            }
        );
        assert_eq!(list.count(), 1);
        assert!(!list.is_valid());
    }

    #[test]
    fn test_index_zero_rejected() {
        let mut list = MissionList::new();
        assert_eq!(
            list.set_waypoint(0, wp(1, WaypointFlag::Last)),
            Err(MissionError::IndexOutOfRange(0))
        );
        assert!(list.is_empty());
    }

    #[test]
    fn test_index_beyond_capacity_rejected() {
        let mut list = MissionList::new();
        let index = MAX_WAYPOINTS as u8 + 1;
        assert_eq!(
            list.set_waypoint(index, wp(1, WaypointFlag::None)),
            Err(MissionError::IndexOutOfRange(index))
        );
    }

    #[test]
    fn test_rewrite_first_truncates_list() {
        let mut list = MissionList::new();
        list.set_waypoint(1, wp(1, WaypointFlag::None)).unwrap();
        list.set_waypoint(2, wp(2, WaypointFlag::Last)).unwrap();
        assert!(list.is_valid());

        // Writing index 1 starts a new mission, count follows the index
        list.set_waypoint(1, wp(10, WaypointFlag::None)).unwrap();
        assert_eq!(list.count(), 1);
        assert!(!list.is_valid());
        assert_eq!(list.get_waypoint(1).unwrap().lat, 10);
        assert!(list.get_waypoint(2).is_none());
    }

    #[test]
    fn test_reset_clears_count_and_validity() {
        let mut list = MissionList::new();
        list.set_waypoint(1, wp(1, WaypointFlag::Last)).unwrap();
        assert!(list.is_valid());

        list.reset();
        assert_eq!(list.count(), 0);
        assert!(!list.is_valid());
    }

    #[test]
    fn test_fill_to_capacity() {
        let mut list = MissionList::new();
        for i in 1..=MAX_WAYPOINTS as u8 {
            let flag = if i as usize == MAX_WAYPOINTS {
                WaypointFlag::Last
            } else {
                WaypointFlag::None
            };
            list.set_waypoint(i, wp(i as i32, flag)).unwrap();
        }
        assert_eq!(list.count() as usize, MAX_WAYPOINTS);
        assert!(list.is_valid());
    }

    #[test]
    fn test_get_waypoint_is_one_based() {
        let mut list = MissionList::new();
        list.set_waypoint(1, wp(7, WaypointFlag::Last)).unwrap();
        assert!(list.get_waypoint(0).is_none());
        assert_eq!(list.get_waypoint(1).unwrap().lat, 7);
        assert_eq!(list.waypoints().len(), 1);
    }

    #[test]
    fn test_raw_discriminants() {
        assert_eq!(WaypointAction::Waypoint as u8, 1);
        assert_eq!(WaypointAction::ReturnToHome as u8, 4);
        assert_eq!(WaypointFlag::None as u8, 0);
        assert_eq!(WaypointFlag::Last as u8, 0xA5);
    }

    #[test]
    fn test_return_to_home_has_no_position() {
        let rth = Waypoint::return_to_home(WaypointFlag::Last);
        assert_eq!(rth.action, WaypointAction::ReturnToHome);
        assert_eq!(rth.position(), GeoPoint::default());
        assert!(rth.is_last());
    }
}
