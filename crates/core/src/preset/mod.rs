//! Mission presets
//!
//! Lets the operator load a pre-programmed mission with an RC switch instead
//! of uploading waypoints. Three trigger slots each map to a configured
//! preset pattern; loading is gated on valid navigation and only happens
//! once per switch activation while disarmed.
//!
//! # Components
//!
//! - [`PresetGate`]: precondition latch, fires on the switch edge
//! - [`PresetSelector`]: slot priority and slot-to-preset lookup
//! - [`PresetPattern`]: offset legs for a preset shape
//! - [`WaypointSynthesizer`]: resolves legs and writes the mission list
//! - [`MissionPresets`]: per-tick orchestration and beeper feedback

pub mod error;
pub mod gate;
pub mod pattern;
pub mod selector;
pub mod synthesizer;
pub mod update;

pub use error::PresetError;
pub use gate::{PresetGate, PresetPreconditions};
pub use pattern::{
    PresetLeg, PresetLegs, PresetPattern, PresetType, VectorPattern, MAX_PRESET_LEGS,
};
pub use selector::{PresetSelector, TriggerSlot};
pub use synthesizer::WaypointSynthesizer;
pub use update::{MissionPresets, PresetOutcome, PresetTrigger};
