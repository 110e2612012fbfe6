//! Core systems
//!
//! Logging macros and synchronized state access used by the firmware tasks.

#[macro_use]
pub mod logging;

pub mod traits;
