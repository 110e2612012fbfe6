//! Mission list error types

use core::fmt;

/// Errors from mission list writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionError {
    /// Index is zero or beyond the list capacity
    IndexOutOfRange(u8),
    /// Index is neither 1 (new mission) nor the next free slot
    OutOfSequence {
        /// Rejected index
        index: u8,
        /// Next index the list would accept
        expected: u8,
    },
}

impl fmt::Display for MissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissionError::IndexOutOfRange(index) => {
                write!(f, "waypoint index {} out of range", index)
            }
            MissionError::OutOfSequence { index, expected } => {
                write!(
                    f,
                    "waypoint index {} out of sequence (expected 1 or {})",
                    index, expected
                )
            }
        }
    }
}
