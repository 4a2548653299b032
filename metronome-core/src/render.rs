//! Presentation helpers
//!
//! Pure functions turning metronome state into what the display shows.

use core::fmt::Write;

use heapless::String;

use crate::config::PendulumConfig;
use crate::state::PendulumState;

/// Maximum BPM label length
pub const BPM_TEXT_LEN: usize = 8;

/// Format a tempo as a truncated (not rounded) integer
pub fn format_bpm(bpm: f64) -> String<BPM_TEXT_LEN> {
    let mut text = String::new();
    // u32 fits any tempo; the buffer fits any u32
    let _ = write!(text, "{}", bpm as u32);
    text
}

/// Rectangle covering the pendulum block, relative to the track origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PendulumRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PendulumRect {
    /// Where to paint `pendulum` on a track with the given geometry
    pub fn locate(pendulum: &PendulumState, geometry: &PendulumConfig) -> Self {
        Self {
            x: pendulum.left_offset(),
            y: 0,
            width: geometry.pendulum_width as u32,
            height: geometry.pendulum_height as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_truncates() {
        assert_eq!(format_bpm(120.0).as_str(), "120");
        assert_eq!(format_bpm(20.0).as_str(), "20");
        assert_eq!(format_bpm(99.9).as_str(), "99");
    }

    #[test]
    fn test_pendulum_rect() {
        let geometry = PendulumConfig::default();
        let mut pendulum = PendulumState::new();
        let rect = PendulumRect::locate(&pendulum, &geometry);
        assert_eq!(
            rect,
            PendulumRect {
                x: 0,
                y: 0,
                width: 8,
                height: 8
            }
        );

        pendulum.on_beat(&geometry);
        assert_eq!(PendulumRect::locate(&pendulum, &geometry).x, 120);
    }
}
