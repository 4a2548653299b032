//! Build script for metronome-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates metronome.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// SH1106 panel width in pixels
const PANEL_WIDTH: i64 = 128;

/// Rows left below the tempo text for the pendulum
const MAX_PENDULUM_HEIGHT: i64 = 16;

/// Known sections, the largest value their keys hold, and the keys
const SCHEMA: &[(&str, i64, &[&str])] = &[
    ("tempo", u16::MAX as i64, &["min_bpm", "max_bpm", "initial_bpm"]),
    (
        "pendulum",
        u16::MAX as i64,
        &[
            "track_width",
            "pendulum_width",
            "pendulum_height",
            "frames_per_beat",
        ],
    ),
    ("haptic", u32::MAX as i64, &["pulse_ms"]),
    (
        "buttons",
        u32::MAX as i64,
        &["repeat_interval_ms", "repeat_delay_ms", "debounce_ms"],
    ),
];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate metronome.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=metronome.toml");

    let config_path = Path::new("metronome.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: metronome.toml not found!                                ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds metronome.toml at build time.               ║\n\
            ║  Please create one in the metronome-firmware directory.          ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read metronome.toml                            ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in metronome.toml                    ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = validate_schema(&config);
    if errors.is_empty() {
        errors.extend(validate_tempo(&config));
        errors.extend(validate_pendulum(&config));
        errors.extend(validate_buttons(&config));
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid configuration in metronome.toml                  ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=metronome.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reject unknown sections, unknown keys and out-of-range values
///
/// The firmware parser only understands flat sections of non-negative
/// integers, so anything else would fail on the device.
fn validate_schema(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let root = match config.as_table() {
        Some(t) => t,
        None => return errors,
    };

    for (section, value) in root {
        let (max, keys) = match SCHEMA.iter().find(|(name, _, _)| *name == section.as_str()) {
            Some((_, max, keys)) => (*max, keys),
            None => {
                errors.push(format!("unknown section [{}]", section));
                continue;
            }
        };

        let table = match value.as_table() {
            Some(t) => t,
            None => {
                errors.push(format!("[{}] must be a table", section));
                continue;
            }
        };

        for (key, value) in table {
            if !keys.contains(&key.as_str()) {
                errors.push(format!("[{}] unknown key '{}'", section, key));
                continue;
            }
            match value.as_integer() {
                Some(n) if (0..=max).contains(&n) => {}
                _ => errors.push(format!(
                    "[{}] {} must be an integer in 0-{}",
                    section, key, max
                )),
            }
        }
    }

    errors
}

/// Read `section.key`, falling back to the firmware default
fn int(config: &toml::Value, section: &str, key: &str, default: i64) -> i64 {
    config
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_integer())
        .unwrap_or(default)
}

fn validate_tempo(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let min = int(config, "tempo", "min_bpm", 20);
    let max = int(config, "tempo", "max_bpm", 240);
    let initial = int(config, "tempo", "initial_bpm", 120);

    if min == 0 {
        errors.push("[tempo] min_bpm must be at least 1".to_string());
    }
    if min > max {
        errors.push(format!("[tempo] min_bpm {} exceeds max_bpm {}", min, max));
    }
    if initial < min || initial > max {
        errors.push(format!(
            "[tempo] initial_bpm must be within {}-{}",
            min, max
        ));
    }

    errors
}

fn validate_pendulum(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let track = int(config, "pendulum", "track_width", 128);
    let width = int(config, "pendulum", "pendulum_width", 8);
    let height = int(config, "pendulum", "pendulum_height", 8);
    let frames = int(config, "pendulum", "frames_per_beat", 12);

    if track > PANEL_WIDTH {
        errors.push(format!(
            "[pendulum] track_width must fit the {}px panel",
            PANEL_WIDTH
        ));
    }
    if width == 0 || width >= track {
        errors.push("[pendulum] pendulum_width must be 1..track_width".to_string());
    }
    if height == 0 || height > MAX_PENDULUM_HEIGHT {
        errors.push(format!(
            "[pendulum] pendulum_height must be 1-{}",
            MAX_PENDULUM_HEIGHT
        ));
    }
    if frames == 0 {
        errors.push("[pendulum] frames_per_beat must be at least 1".to_string());
    }

    errors
}

fn validate_buttons(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    if int(config, "buttons", "repeat_interval_ms", 50) == 0 {
        errors.push("[buttons] repeat_interval_ms must be at least 1".to_string());
    }

    errors
}
