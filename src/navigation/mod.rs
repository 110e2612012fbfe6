//! Navigation subsystem tasks
//!
//! Re-exports the preset types from `mission_presets_core` alongside the
//! firmware task that drives them.

pub mod presets;

pub use mission_presets_core::mission::{MissionList, Waypoint, WaypointAction, WaypointFlag};
pub use mission_presets_core::preset::{PresetOutcome, TriggerSlot};
pub use presets::PresetTask;
