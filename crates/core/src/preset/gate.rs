//! Preset activation gate
//!
//! Single-shot latch deciding whether a preset request may load a mission.
//!
//! # Behavior
//!
//! - No trigger active: readiness is re-sampled from the navigation
//!   preconditions every tick.
//! - Trigger active: readiness is frozen. A ready gate fires once for the
//!   active slot and drops to not-ready; a not-ready gate does nothing for as
//!   long as the trigger stays active.
//!
//! A held switch therefore never fires twice, and never fires because
//! preconditions recovered while it was held. The caller skips evaluation
//! entirely while the vehicle is armed.

use bitflags::bitflags;

use super::selector::TriggerSlot;
use crate::traits::NavigationState;

bitflags! {
    /// Navigation capabilities required before a preset may be loaded
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PresetPreconditions: u8 {
        /// Valid altitude estimate
        const ALT_HOLD = 0b0001;
        /// Valid position and heading estimate
        const POS_HOLD = 0b0010;
        /// Position referenced to a global frame
        const GLOBAL_REFERENCE = 0b0100;
        /// GPS origin established for local/geodetic conversion
        const GPS_ORIGIN = 0b1000;
    }
}

impl PresetPreconditions {
    /// Sample the current navigation state
    pub fn sample<N: NavigationState>(nav: &N) -> Self {
        let mut met = Self::empty();
        met.set(Self::ALT_HOLD, nav.can_activate_alt_hold());
        met.set(Self::POS_HOLD, nav.can_activate_pos_hold());
        met.set(Self::GLOBAL_REFERENCE, nav.has_global_reference());
        met.set(Self::GPS_ORIGIN, nav.has_valid_gps_origin());
        met
    }

    /// Every precondition holds
    pub fn satisfied(&self) -> bool {
        self.is_all()
    }

    /// Preconditions not met
    pub fn missing(&self) -> Self {
        self.complement()
    }
}

/// Edge-triggered preset gate
#[derive(Debug, Clone, Copy)]
pub struct PresetGate {
    ready: bool,
    last_sample: PresetPreconditions,
}

impl Default for PresetGate {
    fn default() -> Self {
        Self::new()
    }
}

impl PresetGate {
    /// Create a gate in the not-ready state
    pub const fn new() -> Self {
        Self {
            ready: false,
            last_sample: PresetPreconditions::empty(),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Preconditions seen on the most recent idle tick
    pub fn last_sample(&self) -> PresetPreconditions {
        self.last_sample
    }

    /// Evaluate one tick.
    ///
    /// Returns the slot to load when the gate fires.
    pub fn evaluate<N: NavigationState>(
        &mut self,
        active: Option<TriggerSlot>,
        nav: &N,
    ) -> Option<TriggerSlot> {
        match active {
            None => {
                self.last_sample = PresetPreconditions::sample(nav);
                self.ready = self.last_sample.satisfied();
                None
            }
            Some(slot) if self.ready => {
                self.ready = false;
                Some(slot)
            }
            Some(_) => None,
        }
    }
}
