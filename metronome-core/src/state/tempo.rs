//! Tempo state
//!
//! Holds the BPM and the running flag. The BPM is integer-valued but
//! stored as `f64` so the beat period can be derived without rounding.

use crate::config::TempoConfig;

/// Milliseconds in one minute
const MS_PER_MINUTE: f64 = 60_000.0;

/// Current tempo and run flag
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TempoState {
    bpm: f64,
    running: bool,
    min_bpm: f64,
    max_bpm: f64,
}

impl TempoState {
    /// Create a stopped tempo at the configured initial BPM
    pub fn new(config: &TempoConfig) -> Self {
        Self {
            bpm: config.initial_bpm as f64,
            running: false,
            min_bpm: config.min_bpm as f64,
            max_bpm: config.max_bpm as f64,
        }
    }

    /// Current tempo in beats per minute
    pub fn bpm(&self) -> f64 {
        self.bpm
    }

    /// Whether the metronome is ticking
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub(crate) fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Raise the tempo by one BPM, saturating at the maximum
    ///
    /// Returns `true` if the tempo changed.
    pub fn increase(&mut self) -> bool {
        if self.bpm < self.max_bpm {
            self.bpm += 1.0;
            true
        } else {
            false
        }
    }

    /// Lower the tempo by one BPM, saturating at the minimum
    ///
    /// Returns `true` if the tempo changed.
    pub fn decrease(&mut self) -> bool {
        if self.bpm > self.min_bpm {
            self.bpm -= 1.0;
            true
        } else {
            false
        }
    }

    /// Set the tempo directly, clamped to the configured range
    ///
    /// With an inverted range the maximum wins.
    pub fn set_bpm(&mut self, bpm: u16) {
        self.bpm = (bpm as f64).max(self.min_bpm).min(self.max_bpm);
    }

    /// Beat period in seconds (`60 / bpm`)
    pub fn current_period(&self) -> f64 {
        60.0 / self.bpm
    }

    /// Beat period in whole milliseconds, truncated
    pub fn period_ms(&self) -> u32 {
        (MS_PER_MINUTE / self.bpm) as u32
    }

    /// One animation frame in whole milliseconds, truncated
    ///
    /// Never zero, so a frame alarm cannot spin.
    pub fn frame_period_ms(&self, frames_per_beat: u16) -> u32 {
        let frames = frames_per_beat.max(1) as f64;
        ((MS_PER_MINUTE / (self.bpm * frames)) as u32).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tempo() -> TempoState {
        TempoState::new(&TempoConfig::default())
    }

    #[test]
    fn test_initial_state() {
        let t = tempo();
        assert_eq!(t.bpm(), 120.0);
        assert!(!t.is_running());
        assert_eq!(t.current_period(), 0.5);
        assert_eq!(t.period_ms(), 500);
    }

    #[test]
    fn test_set_bpm_with_inverted_range() {
        let mut t = TempoState::new(&TempoConfig {
            min_bpm: 200,
            max_bpm: 100,
            initial_bpm: 150,
        });
        t.set_bpm(50);
        assert_eq!(t.bpm(), 100.0);
        t.set_bpm(250);
        assert_eq!(t.bpm(), 100.0);
    }

    #[test]
    fn test_increase_five_times() {
        let mut t = tempo();
        for _ in 0..5 {
            assert!(t.increase());
        }
        assert_eq!(t.bpm(), 125.0);
        assert_eq!(t.period_ms(), 480);
    }

    #[test]
    fn test_increase_clamps_at_max() {
        let mut t = tempo();
        for _ in 0..5 {
            t.increase();
        }
        for _ in 0..200 {
            t.increase();
        }
        assert_eq!(t.bpm(), 240.0);
        assert!(!t.increase());
        assert_eq!(t.period_ms(), 250);
    }

    #[test]
    fn test_decrease_clamps_at_min() {
        let mut t = tempo();
        t.set_bpm(20);
        assert!(!t.decrease());
        assert_eq!(t.bpm(), 20.0);
        assert_eq!(t.period_ms(), 3000);
    }

    #[test]
    fn test_set_bpm_clamps() {
        let mut t = tempo();
        t.set_bpm(5);
        assert_eq!(t.bpm(), 20.0);
        t.set_bpm(999);
        assert_eq!(t.bpm(), 240.0);
    }

    #[test]
    fn test_frame_period() {
        let t = tempo();
        // 500 ms / 12 = 41.67 ms, truncated
        assert_eq!(t.frame_period_ms(12), 41);
        assert_eq!(t.frame_period_ms(1), 500);
    }

    proptest! {
        #[test]
        fn prop_bpm_stays_in_range(steps in proptest::collection::vec(any::<bool>(), 0..600)) {
            let mut t = tempo();
            for up in steps {
                if up { t.increase(); } else { t.decrease(); }
                prop_assert!(t.bpm() >= 20.0 && t.bpm() <= 240.0);
                prop_assert_eq!(t.bpm().fract(), 0.0);
            }
        }

        #[test]
        fn prop_period_is_sixty_over_bpm(bpm in 20u16..=240) {
            let mut t = tempo();
            t.set_bpm(bpm);
            prop_assert_eq!(t.current_period(), 60.0 / bpm as f64);
            prop_assert_eq!(t.period_ms(), 60_000 / bpm as u32);
        }
    }
}
