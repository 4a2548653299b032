//! Animation scheduler
//!
//! Subdivides each beat into `frames_per_beat` frames. It is restarted
//! whenever the beat alarm is armed and re-arms itself after every frame
//! from the current tempo. There is no frame limit per beat: the beat
//! snap absorbs any drift.

use super::alarm::{Alarm, AlarmKind, AlarmToken};
use crate::state::TempoState;
use crate::traits::AlarmService;

/// Self re-arming animation-frame alarm
#[derive(Debug, Clone)]
pub struct AnimationScheduler {
    alarm: Alarm,
    frames_per_beat: u16,
}

impl AnimationScheduler {
    pub const fn new(frames_per_beat: u16) -> Self {
        Self {
            alarm: Alarm::new(AlarmKind::Frame),
            frames_per_beat,
        }
    }

    /// Check if a frame is pending
    pub fn is_armed(&self) -> bool {
        self.alarm.is_armed()
    }

    /// Arm the next frame one frame period from now
    ///
    /// Returns the delay used, in milliseconds.
    pub fn arm<T: AlarmService + ?Sized>(&mut self, tempo: &TempoState, timer: &mut T) -> u32 {
        let delay_ms = tempo.frame_period_ms(self.frames_per_beat);
        self.alarm.arm(delay_ms, timer);
        delay_ms
    }

    /// Stop animating; a fire already in flight becomes stale
    pub fn stop<T: AlarmService + ?Sized>(&mut self, timer: &mut T) {
        self.alarm.cancel(timer);
    }

    /// Validate a frame fire, as [`BeatScheduler::accept`](super::BeatScheduler::accept)
    pub fn accept(&mut self, token: AlarmToken, tempo: &TempoState) -> bool {
        self.alarm.accept(token) && tempo.is_running()
    }
}
