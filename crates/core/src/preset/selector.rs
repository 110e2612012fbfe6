//! Trigger slot resolution
//!
//! Three RC mode boxes request a preset. They are expected to be mutually
//! exclusive; when several are active anyway the lowest slot number wins.

use crate::parameters::MissionPresetParams;
use crate::traits::RcModes;

/// Preset trigger slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerSlot {
    One,
    Two,
    Three,
}

impl TriggerSlot {
    /// Number of trigger slots
    pub const COUNT: usize = 3;

    /// All slots in priority order
    pub const ALL: [TriggerSlot; Self::COUNT] =
        [TriggerSlot::One, TriggerSlot::Two, TriggerSlot::Three];

    /// Zero-based index into per-slot tables
    pub fn index(&self) -> usize {
        match self {
            TriggerSlot::One => 0,
            TriggerSlot::Two => 1,
            TriggerSlot::Three => 2,
        }
    }

    /// One-based slot number as shown to the operator
    pub fn number(&self) -> u8 {
        self.index() as u8 + 1
    }
}

/// Maps trigger slots to configured preset types
#[derive(Debug, Clone, Copy)]
pub struct PresetSelector<'a> {
    config: &'a MissionPresetParams,
}

impl<'a> PresetSelector<'a> {
    pub fn new(config: &'a MissionPresetParams) -> Self {
        Self { config }
    }

    /// Highest-priority active slot, if any
    pub fn active_slot<R: RcModes>(rc: &R) -> Option<TriggerSlot> {
        TriggerSlot::ALL
            .into_iter()
            .find(|slot| rc.is_active(*slot))
    }

    /// Raw preset type configured for a slot
    pub fn resolve(&self, slot: TriggerSlot) -> u8 {
        self.config.preset_type(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockRcModes;

    #[test]
    fn test_slot_numbering() {
        assert_eq!(TriggerSlot::One.number(), 1);
        assert_eq!(TriggerSlot::Two.number(), 2);
        assert_eq!(TriggerSlot::Three.number(), 3);
        assert_eq!(TriggerSlot::Three.index(), 2);
    }

    #[test]
    fn test_no_active_slot() {
        let rc = MockRcModes::released();
        assert_eq!(PresetSelector::active_slot(&rc), None);
    }

    #[test]
    fn test_single_active_slot() {
        for slot in TriggerSlot::ALL {
            let rc = MockRcModes::with(slot);
            assert_eq!(PresetSelector::active_slot(&rc), Some(slot));
        }
    }

    #[test]
    fn test_slot_one_beats_slot_two() {
        let mut rc = MockRcModes::with(TriggerSlot::Two);
        rc.set(TriggerSlot::One, true);
        assert_eq!(PresetSelector::active_slot(&rc), Some(TriggerSlot::One));
    }

    #[test]
    fn test_slot_two_beats_slot_three() {
        let mut rc = MockRcModes::with(TriggerSlot::Three);
        rc.set(TriggerSlot::Two, true);
        assert_eq!(PresetSelector::active_slot(&rc), Some(TriggerSlot::Two));
    }

    #[test]
    fn test_resolve_uses_slot_config() {
        let config = MissionPresetParams {
            preset_types: [0, 7, 9],
            ..MissionPresetParams::default()
        };
        let selector = PresetSelector::new(&config);
        assert_eq!(selector.resolve(TriggerSlot::One), 0);
        assert_eq!(selector.resolve(TriggerSlot::Two), 7);
        assert_eq!(selector.resolve(TriggerSlot::Three), 9);
    }
}
