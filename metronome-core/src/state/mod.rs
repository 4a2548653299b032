//! Metronome runtime state
//!
//! Two small pieces of state live for the whole process: the tempo
//! (with the running flag) and the pendulum position. Events drive every
//! change to them.

pub mod events;
pub mod pendulum;
pub mod tempo;

pub use events::Event;
pub use pendulum::PendulumState;
pub use tempo::TempoState;
