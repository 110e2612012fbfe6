//! RC mode switch queries.

use crate::preset::TriggerSlot;

/// Decoded RC mode switches relevant to mission presets.
pub trait RcModes {
    /// Mode box for the given preset trigger slot is active.
    fn is_active(&self, slot: TriggerSlot) -> bool;
}

/// Mock RC mode decoder with one boolean per trigger slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockRcModes {
    pub active: [bool; TriggerSlot::COUNT],
}

impl MockRcModes {
    /// No preset switch active
    pub fn released() -> Self {
        Self::default()
    }

    /// Only the given slot active
    pub fn with(slot: TriggerSlot) -> Self {
        let mut modes = Self::default();
        modes.set(slot, true);
        modes
    }

    pub fn set(&mut self, slot: TriggerSlot, active: bool) {
        self.active[slot.index()] = active;
    }
}

impl RcModes for MockRcModes {
    fn is_active(&self, slot: TriggerSlot) -> bool {
        self.active[slot.index()]
    }
}
