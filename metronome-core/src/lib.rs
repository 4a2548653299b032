//! Board-agnostic core logic for the metronome firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Tempo and pendulum state
//! - Self re-arming beat and animation schedulers
//! - Button-to-command mapping
//! - Presentation helpers (BPM text, pendulum geometry)
//! - Platform traits (alarms, display, haptic actuator)
//! - Configuration types and the configuration file parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod input;
pub mod metronome;
pub mod render;
pub mod scheduler;
pub mod state;
pub mod traits;

pub use metronome::Metronome;
