//! Beat scheduler
//!
//! Fires once per beat. The period is sampled from the tempo each time
//! the alarm is armed, so a tempo change lands on the next beat boundary
//! and never stretches or cuts the beat in flight.

use super::alarm::{Alarm, AlarmKind, AlarmToken};
use crate::state::TempoState;
use crate::traits::AlarmService;

/// Beat scheduler states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BeatPhase {
    /// No beat pending
    Stopped,
    /// A beat alarm is pending
    Armed,
}

/// Self re-arming beat alarm
#[derive(Debug, Clone)]
pub struct BeatScheduler {
    alarm: Alarm,
}

impl Default for BeatScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl BeatScheduler {
    pub const fn new() -> Self {
        Self {
            alarm: Alarm::new(AlarmKind::Beat),
        }
    }

    /// Current phase
    pub fn phase(&self) -> BeatPhase {
        if self.alarm.is_armed() {
            BeatPhase::Armed
        } else {
            BeatPhase::Stopped
        }
    }

    /// Arm the next beat one period from now
    ///
    /// Returns the delay used, in milliseconds.
    pub fn arm<T: AlarmService + ?Sized>(&mut self, tempo: &TempoState, timer: &mut T) -> u32 {
        let delay_ms = tempo.period_ms();
        self.alarm.arm(delay_ms, timer);
        delay_ms
    }

    /// Stop beating; a fire already in flight becomes stale
    pub fn stop<T: AlarmService + ?Sized>(&mut self, timer: &mut T) {
        self.alarm.cancel(timer);
    }

    /// Validate a beat fire
    ///
    /// Only the pending request's token is accepted, and only while the
    /// metronome is running.
    pub fn accept(&mut self, token: AlarmToken, tempo: &TempoState) -> bool {
        self.alarm.accept(token) && tempo.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TempoConfig;
    use crate::scheduler::alarm::tests::FakeTimer;

    #[test]
    fn test_arm_uses_current_period() {
        let mut timer = FakeTimer::default();
        let mut tempo = TempoState::new(&TempoConfig::default());
        let mut beat = BeatScheduler::new();

        assert_eq!(beat.phase(), BeatPhase::Stopped);
        assert_eq!(beat.arm(&tempo, &mut timer), 500);
        assert_eq!(beat.phase(), BeatPhase::Armed);

        tempo.set_bpm(60);
        assert_eq!(beat.arm(&tempo, &mut timer), 1000);
    }

    #[test]
    fn test_stop_rejects_pending_fire() {
        let mut timer = FakeTimer::default();
        let mut tempo = TempoState::new(&TempoConfig::default());
        tempo.set_running(true);
        let mut beat = BeatScheduler::new();

        beat.arm(&tempo, &mut timer);
        let (_, _, token) = timer.scheduled[0];
        beat.stop(&mut timer);

        assert_eq!(beat.phase(), BeatPhase::Stopped);
        assert!(!beat.accept(token, &tempo));
    }

    #[test]
    fn test_accept_requires_running() {
        let mut timer = FakeTimer::default();
        let tempo = TempoState::new(&TempoConfig::default());
        let mut beat = BeatScheduler::new();

        beat.arm(&tempo, &mut timer);
        let (_, _, token) = timer.scheduled[0];
        assert!(!beat.accept(token, &tempo));
    }
}
