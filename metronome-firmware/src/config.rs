//! Embedded configuration loading
//!
//! build.rs has already checked metronome.toml, so a parse failure here
//! means the two validators disagree. Fall back to defaults rather than
//! refusing to boot.

use defmt::*;

use metronome_core::config::{parse_config, MetronomeConfig};

/// Parse the embedded configuration, or use defaults on error
pub fn load(source: &str) -> MetronomeConfig {
    match parse_config(source) {
        Ok(config) => {
            info!(
                "Config: {}-{} BPM (start {}), {} frames/beat, {}ms pulse",
                config.tempo.min_bpm,
                config.tempo.max_bpm,
                config.tempo.initial_bpm,
                config.pendulum.frames_per_beat,
                config.haptic.pulse_ms
            );
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            warn!("Using default configuration");
            MetronomeConfig::default()
        }
    }
}
