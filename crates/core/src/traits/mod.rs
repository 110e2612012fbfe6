//! Core traits for platform-agnostic autopilot functionality.
//!
//! This module provides trait abstractions that decouple the mission preset
//! logic from the estimator, RC decoder, arming tracker and beeper that live
//! in the firmware.
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Platform implementations live in the firmware crate

pub mod beeper;
pub mod navigation;
pub mod rc;

pub use beeper::{Beeper, BeeperTone, MockBeeper};
pub use navigation::{MockNavigation, NavigationState};
pub use rc::{MockRcModes, RcModes};
