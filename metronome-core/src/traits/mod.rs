//! Platform abstraction traits
//!
//! These traits define the interface between the metronome logic and
//! the services the board provides: one-shot alarms, the display and
//! the vibration motor.

pub mod display;
pub mod haptic;
pub mod timer;

pub use display::MetronomeDisplay;
pub use haptic::{Haptic, PulseOutput};
pub use timer::AlarmService;

/// Everything the metronome needs from the board
pub trait Platform: AlarmService + MetronomeDisplay + Haptic {}

// Blanket implementation for any type providing all three services
impl<T: AlarmService + MetronomeDisplay + Haptic> Platform for T {}
