//! Configuration type definitions
//!
//! Every tunable constant of the metronome lives here. The defaults are
//! the values the firmware ships with.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tempo limits and the tempo shown at power-on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TempoConfig {
    /// Slowest selectable tempo (BPM)
    pub min_bpm: u16,
    /// Fastest selectable tempo (BPM)
    pub max_bpm: u16,
    /// Tempo at power-on (BPM)
    pub initial_bpm: u16,
}

impl Default for TempoConfig {
    fn default() -> Self {
        Self {
            min_bpm: 20,
            max_bpm: 240,
            initial_bpm: 120,
        }
    }
}

/// Pendulum track geometry, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PendulumConfig {
    /// Width of the track the pendulum glides along
    pub track_width: u16,
    /// Width of the pendulum block
    pub pendulum_width: u16,
    /// Height of the pendulum block
    pub pendulum_height: u16,
    /// Animation frames per beat
    pub frames_per_beat: u16,
}

impl PendulumConfig {
    /// Distance between the two track extremes
    pub const fn travel(&self) -> i32 {
        self.track_width as i32 - self.pendulum_width as i32
    }

    /// Pixels advanced per animation frame (integer division)
    pub const fn step_size(&self) -> i32 {
        if self.frames_per_beat == 0 {
            return 0;
        }
        self.travel() / self.frames_per_beat as i32
    }
}

impl Default for PendulumConfig {
    fn default() -> Self {
        Self {
            track_width: 128,
            pendulum_width: 8,
            pendulum_height: 8,
            frames_per_beat: 12,
        }
    }
}

/// Vibration pulse played on every beat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HapticConfig {
    /// Pulse length in milliseconds
    pub pulse_ms: u32,
}

impl Default for HapticConfig {
    fn default() -> Self {
        Self { pulse_ms: 100 }
    }
}

/// Button timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonConfig {
    /// Interval between repeated clicks while up/down is held
    pub repeat_interval_ms: u32,
    /// Hold time before the first repeated click
    pub repeat_delay_ms: u32,
    /// Contact bounce settle time
    pub debounce_ms: u32,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            repeat_interval_ms: 50,
            repeat_delay_ms: 400,
            debounce_ms: 20,
        }
    }
}

/// Complete metronome configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MetronomeConfig {
    pub tempo: TempoConfig,
    pub pendulum: PendulumConfig,
    pub haptic: HapticConfig,
    pub buttons: ButtonConfig,
}

/// Reasons a configuration is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Minimum tempo must be at least 1 BPM
    ZeroTempo,
    /// Minimum tempo above maximum tempo
    InvertedTempoRange,
    /// Initial tempo outside the selectable range
    InitialTempoOutOfRange,
    /// Pendulum does not fit inside its track
    PendulumTooWide,
    /// Frames per beat must be non-zero
    NoFrames,
    /// Repeat interval must be non-zero
    ZeroRepeatInterval,
}

impl MetronomeConfig {
    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tempo = &self.tempo;
        if tempo.min_bpm == 0 {
            return Err(ConfigError::ZeroTempo);
        }
        if tempo.min_bpm > tempo.max_bpm {
            return Err(ConfigError::InvertedTempoRange);
        }
        if tempo.initial_bpm < tempo.min_bpm || tempo.initial_bpm > tempo.max_bpm {
            return Err(ConfigError::InitialTempoOutOfRange);
        }
        if self.pendulum.pendulum_width >= self.pendulum.track_width {
            return Err(ConfigError::PendulumTooWide);
        }
        if self.pendulum.frames_per_beat == 0 {
            return Err(ConfigError::NoFrames);
        }
        if self.buttons.repeat_interval_ms == 0 {
            return Err(ConfigError::ZeroRepeatInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = MetronomeConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.tempo.initial_bpm, 120);
        assert_eq!(config.pendulum.frames_per_beat, 12);
    }

    #[test]
    fn test_step_size() {
        let pendulum = PendulumConfig::default();
        assert_eq!(pendulum.travel(), 120);
        assert_eq!(pendulum.step_size(), 10);

        let odd = PendulumConfig {
            track_width: 144,
            pendulum_width: 20,
            frames_per_beat: 12,
            ..Default::default()
        };
        // 124 / 12 truncates
        assert_eq!(odd.step_size(), 10);
    }

    #[test]
    fn test_rejects_bad_tempo_range() {
        let mut config = MetronomeConfig::default();
        config.tempo.min_bpm = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroTempo));

        let mut config = MetronomeConfig::default();
        config.tempo.min_bpm = 250;
        assert_eq!(config.validate(), Err(ConfigError::InvertedTempoRange));

        let mut config = MetronomeConfig::default();
        config.tempo.initial_bpm = 10;
        assert_eq!(config.validate(), Err(ConfigError::InitialTempoOutOfRange));
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let mut config = MetronomeConfig::default();
        config.pendulum.pendulum_width = 128;
        assert_eq!(config.validate(), Err(ConfigError::PendulumTooWide));

        let mut config = MetronomeConfig::default();
        config.pendulum.frames_per_beat = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoFrames));
    }

    #[test]
    fn test_rejects_zero_repeat_interval() {
        let mut config = MetronomeConfig::default();
        config.buttons.repeat_interval_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroRepeatInterval));
    }
}
