//! Pendulum position
//!
//! The pendulum glides across its track once per beat and reverses at
//! every beat. The offset is kept within `[0, travel]`.

use crate::config::PendulumConfig;

/// Pendulum offset and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PendulumState {
    left_offset: i32,
    moving_rightward: bool,
}

impl Default for PendulumState {
    fn default() -> Self {
        Self::new()
    }
}

impl PendulumState {
    /// Pendulum at the left extreme, heading right
    pub const fn new() -> Self {
        Self {
            left_offset: 0,
            moving_rightward: true,
        }
    }

    /// Pixel offset of the pendulum's left edge within the track
    pub fn left_offset(&self) -> i32 {
        self.left_offset
    }

    /// Direction of travel
    pub fn is_moving_rightward(&self) -> bool {
        self.moving_rightward
    }

    /// Return to the left extreme, heading right
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Beat action: snap to the extreme being approached, then reverse
    pub fn on_beat(&mut self, geometry: &PendulumConfig) {
        self.left_offset = if self.moving_rightward {
            geometry.travel().max(0)
        } else {
            0
        };
        self.moving_rightward = !self.moving_rightward;
    }

    /// Frame action: advance one step in the current direction
    ///
    /// The offset saturates at the extremes; the next beat realigns it.
    /// A pendulum wider than its track has no travel and stays at 0.
    pub fn advance_frame(&mut self, geometry: &PendulumConfig) {
        let step = geometry.step_size();
        let next = if self.moving_rightward {
            self.left_offset + step
        } else {
            self.left_offset - step
        };
        self.left_offset = next.max(0).min(geometry.travel().max(0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_beat_alternates_extremes() {
        let geometry = PendulumConfig::default();
        let mut p = PendulumState::new();

        p.on_beat(&geometry);
        assert_eq!(p.left_offset(), 120);
        assert!(!p.is_moving_rightward());

        p.on_beat(&geometry);
        assert_eq!(p.left_offset(), 0);
        assert!(p.is_moving_rightward());
    }

    #[test]
    fn test_beat_snaps_after_drift() {
        let geometry = PendulumConfig::default();
        let mut p = PendulumState::new();
        for _ in 0..7 {
            p.advance_frame(&geometry);
        }
        assert_eq!(p.left_offset(), 70);

        p.on_beat(&geometry);
        assert_eq!(p.left_offset(), 120);
    }

    #[test]
    fn test_oversized_pendulum_stays_put() {
        let geometry = PendulumConfig {
            pendulum_width: 200,
            ..PendulumConfig::default()
        };
        let mut p = PendulumState::new();

        p.advance_frame(&geometry);
        assert_eq!(p.left_offset(), 0);

        p.on_beat(&geometry);
        assert_eq!(p.left_offset(), 0);
        p.advance_frame(&geometry);
        assert_eq!(p.left_offset(), 0);
    }

    #[test]
    fn test_frames_move_by_step() {
        let geometry = PendulumConfig::default();
        let mut p = PendulumState::new();

        p.advance_frame(&geometry);
        assert_eq!(p.left_offset(), 10);

        p.on_beat(&geometry);
        p.advance_frame(&geometry);
        assert_eq!(p.left_offset(), 110);
    }

    #[test]
    fn test_reset() {
        let geometry = PendulumConfig::default();
        let mut p = PendulumState::new();
        p.on_beat(&geometry);
        p.advance_frame(&geometry);
        p.reset();
        assert_eq!(p, PendulumState::new());
    }

    proptest! {
        #[test]
        fn prop_offset_within_track(actions in proptest::collection::vec(0u8..3, 0..200)) {
            let geometry = PendulumConfig::default();
            let mut p = PendulumState::new();
            for action in actions {
                match action {
                    0 => p.on_beat(&geometry),
                    1 => p.advance_frame(&geometry),
                    _ => p.reset(),
                }
                prop_assert!(p.left_offset() >= 0);
                prop_assert!(p.left_offset() <= geometry.travel());
            }
        }
    }
}
