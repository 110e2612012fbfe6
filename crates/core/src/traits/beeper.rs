//! Audible operator feedback.

use heapless::Vec;

/// Feedback tones emitted by the preset subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeeperTone {
    /// Requested action completed
    ActionSuccess,
    /// Requested action rejected or failed
    ActionFail,
}

impl BeeperTone {
    /// Return variant name as a static string (usable with defmt on embedded)
    pub fn as_str(&self) -> &'static str {
        match self {
            BeeperTone::ActionSuccess => "ActionSuccess",
            BeeperTone::ActionFail => "ActionFail",
        }
    }
}

/// Beeper device driven by the firmware.
pub trait Beeper {
    /// Queue a feedback tone. Must not block.
    fn beep(&mut self, tone: BeeperTone);
}

/// Maximum tones recorded by [`MockBeeper`]
pub const MOCK_BEEPER_CAPACITY: usize = 16;

/// Mock beeper recording every requested tone.
///
/// Tones beyond [`MOCK_BEEPER_CAPACITY`] are dropped.
#[derive(Debug, Clone, Default)]
pub struct MockBeeper {
    tones: Vec<BeeperTone, MOCK_BEEPER_CAPACITY>,
}

impl MockBeeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// All tones requested so far, oldest first
    pub fn tones(&self) -> &[BeeperTone] {
        &self.tones
    }

    /// Most recent tone
    pub fn last(&self) -> Option<BeeperTone> {
        self.tones.last().copied()
    }

    pub fn clear(&mut self) {
        self.tones.clear();
    }
}

impl Beeper for MockBeeper {
    fn beep(&mut self, tone: BeeperTone) {
        let _ = self.tones.push(tone);
    }
}
