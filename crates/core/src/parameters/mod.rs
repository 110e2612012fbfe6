//! Parameter management types
//!
//! This module provides the parameter store and the mission preset
//! parameter block. Flash persistence lives in the firmware.

pub mod error;
pub mod mission_preset;
pub mod storage;

pub use error::ParameterError;
pub use mission_preset::MissionPresetParams;
pub use storage::{ParamValue, ParameterStore};
