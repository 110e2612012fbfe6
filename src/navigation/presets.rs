//! Mission preset task
//!
//! Runs the preset subsystem once per navigation tick against the shared
//! mission list.
//!
//! # Locking
//!
//! The gate is evaluated without the mission list lock. The lock is taken
//! only when the gate fires, around the reset and waypoint writes of the
//! load, so the navigation engine never observes a half-written mission.
//! Beeper feedback is issued after the lock is released.

use mission_presets_core::mission::MissionList;
use mission_presets_core::parameters::MissionPresetParams;
use mission_presets_core::preset::{
    MissionPresets, PresetGate, PresetOutcome, PresetTrigger, PresetType,
};
use mission_presets_core::traits::{Beeper, NavigationState, RcModes};

use crate::core::traits::SharedState;

/// Firmware wrapper around [`MissionPresets`]
pub struct PresetTask<'a> {
    presets: MissionPresets<'a>,
    /// Gate readiness on the previous tick, for transition logging
    was_ready: bool,
}

impl<'a> PresetTask<'a> {
    pub fn new(config: &'a MissionPresetParams) -> Self {
        if !config.is_valid() {
            log_warn!(
                "presets: config has unsupported types [{}, {}, {}]",
                config.preset_types[0],
                config.preset_types[1],
                config.preset_types[2]
            );
        }

        Self {
            presets: MissionPresets::new(config),
            was_ready: false,
        }
    }

    pub fn gate(&self) -> &PresetGate {
        self.presets.gate()
    }

    /// Run one tick.
    pub fn update<N, R, B, M>(&mut self, nav: &N, rc: &R, mission: &M, beeper: &mut B) -> PresetOutcome
    where
        N: NavigationState,
        R: RcModes,
        B: Beeper,
        M: SharedState<MissionList>,
    {
        let outcome = match self.presets.poll(nav, rc) {
            PresetTrigger::Inert => PresetOutcome::Inert,
            PresetTrigger::Idle => PresetOutcome::Idle,
            PresetTrigger::Fire(slot) => {
                let presets = &self.presets;
                mission.with_mut(|list| presets.load(slot, nav, list))
            }
        };

        if let Some(tone) = outcome.tone() {
            log_debug!("presets: beep {}", tone.as_str());
            beeper.beep(tone);
        }

        self.report(&outcome);
        outcome
    }

    fn report(&mut self, outcome: &PresetOutcome) {
        let gate = self.presets.gate();
        let ready = gate.is_ready();

        match outcome {
            PresetOutcome::Inert => {}
            PresetOutcome::Idle => {
                if ready != self.was_ready {
                    if ready {
                        log_debug!("presets: gate ready");
                    } else {
                        log_debug!(
                            "presets: gate not ready, missing 0x{:x}",
                            gate.last_sample().missing().bits()
                        );
                    }
                }
            }
            PresetOutcome::Loaded {
                slot,
                preset,
                waypoints,
            } => {
                let name = PresetType::try_from(*preset).map_or("?", |kind| kind.as_str());
                log_info!(
                    "presets: slot {} loaded {} preset ({} waypoints)",
                    slot.number(),
                    name,
                    *waypoints
                );
            }
            PresetOutcome::Failed {
                slot,
                preset,
                error,
            } => {
                log_error!(
                    "presets: slot {} failed to load preset {}: {}",
                    slot.number(),
                    *preset,
                    error.as_str()
                );
            }
        }

        self.was_ready = ready;
    }
}
