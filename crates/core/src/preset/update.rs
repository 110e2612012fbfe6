//! Mission preset orchestrator
//!
//! Runs once per navigation tick: skips while armed, evaluates the gate,
//! resolves the fired slot to a preset, loads it and reports the result on
//! the beeper.

use super::error::PresetError;
use super::gate::PresetGate;
use super::selector::{PresetSelector, TriggerSlot};
use super::synthesizer::WaypointSynthesizer;
use crate::mission::MissionList;
use crate::parameters::MissionPresetParams;
use crate::traits::{Beeper, BeeperTone, NavigationState, RcModes};

/// Gate decision for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetTrigger {
    /// Vehicle armed, nothing evaluated
    Inert,
    /// Gate evaluated, nothing fired
    Idle,
    /// Gate fired for this slot
    Fire(TriggerSlot),
}

/// Result of one preset tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetOutcome {
    /// Vehicle armed, nothing evaluated
    Inert,
    /// Gate evaluated, nothing fired
    Idle,
    /// Preset loaded into the mission list
    Loaded {
        slot: TriggerSlot,
        preset: u8,
        waypoints: u8,
    },
    /// Gate fired but the preset could not be loaded
    Failed {
        slot: TriggerSlot,
        preset: u8,
        error: PresetError,
    },
}

impl PresetOutcome {
    /// Operator feedback for this outcome
    pub fn tone(&self) -> Option<BeeperTone> {
        match self {
            PresetOutcome::Inert | PresetOutcome::Idle => None,
            PresetOutcome::Loaded { .. } => Some(BeeperTone::ActionSuccess),
            PresetOutcome::Failed { .. } => Some(BeeperTone::ActionFail),
        }
    }
}

/// Mission preset subsystem state
///
/// Owns the activation gate and borrows the loaded preset configuration.
pub struct MissionPresets<'a> {
    config: &'a MissionPresetParams,
    gate: PresetGate,
}

impl<'a> MissionPresets<'a> {
    pub fn new(config: &'a MissionPresetParams) -> Self {
        Self {
            config,
            gate: PresetGate::new(),
        }
    }

    pub fn config(&self) -> &MissionPresetParams {
        self.config
    }

    pub fn gate(&self) -> &PresetGate {
        &self.gate
    }

    /// Evaluate the gate without touching the mission list.
    pub fn poll<N: NavigationState, R: RcModes>(&mut self, nav: &N, rc: &R) -> PresetTrigger {
        // Presets can't be changed while armed
        if nav.is_armed() {
            return PresetTrigger::Inert;
        }

        match self.gate.evaluate(PresetSelector::active_slot(rc), nav) {
            Some(slot) => PresetTrigger::Fire(slot),
            None => PresetTrigger::Idle,
        }
    }

    /// Load the preset configured for a fired slot.
    pub fn load<N: NavigationState>(
        &self,
        slot: TriggerSlot,
        nav: &N,
        mission: &mut MissionList,
    ) -> PresetOutcome {
        let preset = PresetSelector::new(self.config).resolve(slot);
        match WaypointSynthesizer::load(preset, self.config, nav, mission) {
            Ok(waypoints) => PresetOutcome::Loaded {
                slot,
                preset,
                waypoints,
            },
            Err(error) => PresetOutcome::Failed {
                slot,
                preset,
                error,
            },
        }
    }

    /// Run one tick.
    ///
    /// The mission list is only mutated when the gate fires for a supported
    /// preset.
    pub fn update<N, R, B>(
        &mut self,
        nav: &N,
        rc: &R,
        mission: &mut MissionList,
        beeper: &mut B,
    ) -> PresetOutcome
    where
        N: NavigationState,
        R: RcModes,
        B: Beeper,
    {
        let outcome = match self.poll(nav, rc) {
            PresetTrigger::Inert => PresetOutcome::Inert,
            PresetTrigger::Idle => PresetOutcome::Idle,
            PresetTrigger::Fire(slot) => self.load(slot, nav, mission),
        };

        if let Some(tone) = outcome.tone() {
            beeper.beep(tone);
        }
        outcome
    }
}
