//! Beat and animation scheduling
//!
//! Both schedulers are built on one-shot alarms that re-arm themselves
//! on every fire, so the period is re-sampled from the tempo each cycle.

pub mod alarm;
pub mod beat;
pub mod frame;

pub use alarm::{Alarm, AlarmKind, AlarmToken};
pub use beat::{BeatPhase, BeatScheduler};
pub use frame::AnimationScheduler;
