#![cfg_attr(not(test), no_std)]

//! mission_presets - Firmware-side wiring for RC mission presets
//!
//! The preset logic itself lives in `mission_presets_core`. This crate adds
//! the pieces that depend on the runtime: logging macros, synchronized
//! access to the shared mission list, and the per-tick task wrapper.

// Core systems: logging and synchronization traits
#[macro_use]
pub mod core;

// Navigation subsystem tasks
pub mod navigation;

pub use mission_presets_core as preset_core;
