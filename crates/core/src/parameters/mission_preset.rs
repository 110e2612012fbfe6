//! Mission Preset Parameter Definitions
//!
//! # Parameters
//!
//! - `MIS_PRESET1_TYPE` - Preset pattern loaded by trigger slot 1 (0 = vector)
//! - `MIS_PRESET2_TYPE` - Preset pattern loaded by trigger slot 2
//! - `MIS_PRESET3_TYPE` - Preset pattern loaded by trigger slot 3
//! - `MIS_PRESET_ALT` - Climb height above the activation point in cm
//! - `MIS_PRESET_DIST` - Outbound leg length in cm
//!
//! Values are loaded once at boot. The preset subsystem holds a shared
//! reference to the loaded [`MissionPresetParams`] and never writes it.

use super::error::ParameterError;
use super::storage::{ParamValue, ParameterStore};
use crate::preset::{PresetType, TriggerSlot};

/// Default preset type for every slot (vector)
const DEFAULT_TYPE: u8 = 0;

/// Default climb height in cm
const DEFAULT_ALTITUDE: i32 = 1000;

/// Default outbound distance in cm
const DEFAULT_DISTANCE: i32 = 5000;

/// Maximum climb height in cm
const MAX_ALTITUDE: i32 = 50_000;

/// Maximum outbound distance in cm
const MAX_DISTANCE: i32 = 1_000_000;

const TYPE_PARAM_NAMES: [&str; TriggerSlot::COUNT] =
    ["MIS_PRESET1_TYPE", "MIS_PRESET2_TYPE", "MIS_PRESET3_TYPE"];

/// Mission preset parameters loaded from parameter store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionPresetParams {
    /// Raw preset type per trigger slot; unknown values fail at load time
    pub preset_types: [u8; TriggerSlot::COUNT],
    /// Climb height in cm
    pub altitude: i32,
    /// Outbound leg length in cm
    pub distance: i32,
}

impl Default for MissionPresetParams {
    fn default() -> Self {
        Self {
            preset_types: [DEFAULT_TYPE; TriggerSlot::COUNT],
            altitude: DEFAULT_ALTITUDE,
            distance: DEFAULT_DISTANCE,
        }
    }
}

impl MissionPresetParams {
    /// Register mission preset parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        for name in TYPE_PARAM_NAMES {
            store.register(name, ParamValue::Int(DEFAULT_TYPE as i32))?;
        }

        store.register("MIS_PRESET_ALT", ParamValue::Int(DEFAULT_ALTITUDE))?;
        store.register("MIS_PRESET_DIST", ParamValue::Int(DEFAULT_DISTANCE))?;

        Ok(())
    }

    /// Load mission preset parameters from parameter store
    ///
    /// Missing or non-numeric entries fall back to defaults. Lengths are
    /// clamped to their allowed range; preset types are kept as stored.
    pub fn from_store(store: &ParameterStore) -> Self {
        let mut preset_types = [DEFAULT_TYPE; TriggerSlot::COUNT];
        for (slot_type, name) in preset_types.iter_mut().zip(TYPE_PARAM_NAMES) {
            *slot_type = match store.get(name).and_then(ParamValue::as_i32) {
                Some(v) => v.clamp(0, u8::MAX as i32) as u8,
                None => DEFAULT_TYPE,
            };
        }

        let altitude = store
            .get("MIS_PRESET_ALT")
            .and_then(ParamValue::as_i32)
            .map_or(DEFAULT_ALTITUDE, |v| v.clamp(0, MAX_ALTITUDE));

        let distance = store
            .get("MIS_PRESET_DIST")
            .and_then(ParamValue::as_i32)
            .map_or(DEFAULT_DISTANCE, |v| v.clamp(0, MAX_DISTANCE));

        Self {
            preset_types,
            altitude,
            distance,
        }
    }

    /// Configured preset type for a trigger slot
    pub fn preset_type(&self, slot: TriggerSlot) -> u8 {
        self.preset_types[slot.index()]
    }

    /// Validate mission preset parameters
    ///
    /// # Returns
    ///
    /// true if every slot names a known pattern and lengths are in range
    pub fn is_valid(&self) -> bool {
        if self
            .preset_types
            .iter()
            .any(|raw| PresetType::try_from(*raw).is_err())
        {
            return false;
        }

        (0..=MAX_ALTITUDE).contains(&self.altitude) && (0..=MAX_DISTANCE).contains(&self.distance)
    }
}
