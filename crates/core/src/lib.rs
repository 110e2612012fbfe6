//! mission_presets_core - Pure no_std mission preset logic
//!
//! This crate contains the platform-agnostic gate, pattern and waypoint
//! synthesis logic for loading pre-programmed missions from RC switches.
//! It can be tested on host without any feature flags or embassy
//! dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Navigation state, RC modes and beeper injected via traits
//!
//! # Modules
//!
//! - [`traits`]: Collaborator traits and their mocks
//! - [`parameters`]: Parameter store and mission preset parameters
//! - [`navigation`]: GPS origin and local/geodetic conversion
//! - [`mission`]: Mission waypoint list
//! - [`preset`]: Gate, selector, patterns, synthesizer and orchestrator

#![no_std]

pub mod mission;
pub mod navigation;
pub mod parameters;
pub mod preset;
pub mod traits;
