//! Minimal TOML parser for the metronome configuration
//!
//! Handles only the subset the configuration file uses. It does NOT
//! support the full TOML spec.
//!
//! Supported features:
//! - `[tempo]`, `[pendulum]`, `[haptic]` and `[buttons]` section headers
//! - `key = integer` pairs
//! - Comments (# ...) on their own line or after a value
//!
//! Keys that are absent keep their default value.

use super::types::{ConfigError, MetronomeConfig};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header (line number, 1-based)
    InvalidSection(usize),
    /// Key not valid in the current section
    UnknownKey(usize),
    /// Value is not an unsigned integer that fits the field
    InvalidValue(usize),
    /// Line is neither a header nor a `key = value` pair
    Syntax(usize),
    /// File parsed but the values are inconsistent
    Invalid(ConfigError),
}

impl From<ConfigError> for ParseError {
    fn from(e: ConfigError) -> Self {
        ParseError::Invalid(e)
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Tempo,
    Pendulum,
    Haptic,
    Buttons,
}

/// Parse TOML configuration into a validated `MetronomeConfig`
pub fn parse_config(input: &str) -> Result<MetronomeConfig, ParseError> {
    let mut config = MetronomeConfig::default();
    let mut section = Section::Root;

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = strip_comment(line).trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])
                .ok_or(ParseError::InvalidSection(line_no))?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::Syntax(line_no))?;
        apply_value(section, key, value, &mut config, line_no)?;
    }

    config.validate()?;
    Ok(config)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_section_header(header: &str) -> Option<Section> {
    match header.trim() {
        "tempo" => Some(Section::Tempo),
        "pendulum" => Some(Section::Pendulum),
        "haptic" => Some(Section::Haptic),
        "buttons" => Some(Section::Buttons),
        _ => None,
    }
}

/// Split a "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_int<T: core::str::FromStr>(value: &str, line_no: usize) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue(line_no))
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut MetronomeConfig,
    line_no: usize,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Tempo, "min_bpm") => config.tempo.min_bpm = parse_int(value, line_no)?,
        (Section::Tempo, "max_bpm") => config.tempo.max_bpm = parse_int(value, line_no)?,
        (Section::Tempo, "initial_bpm") => config.tempo.initial_bpm = parse_int(value, line_no)?,

        (Section::Pendulum, "track_width") => {
            config.pendulum.track_width = parse_int(value, line_no)?
        }
        (Section::Pendulum, "pendulum_width") => {
            config.pendulum.pendulum_width = parse_int(value, line_no)?
        }
        (Section::Pendulum, "pendulum_height") => {
            config.pendulum.pendulum_height = parse_int(value, line_no)?
        }
        (Section::Pendulum, "frames_per_beat") => {
            config.pendulum.frames_per_beat = parse_int(value, line_no)?
        }

        (Section::Haptic, "pulse_ms") => config.haptic.pulse_ms = parse_int(value, line_no)?,

        (Section::Buttons, "repeat_interval_ms") => {
            config.buttons.repeat_interval_ms = parse_int(value, line_no)?
        }
        (Section::Buttons, "repeat_delay_ms") => {
            config.buttons.repeat_delay_ms = parse_int(value, line_no)?
        }
        (Section::Buttons, "debounce_ms") => {
            config.buttons.debounce_ms = parse_int(value, line_no)?
        }

        _ => return Err(ParseError::UnknownKey(line_no)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
# Wrist metronome
[tempo]
min_bpm = 30
max_bpm = 200
initial_bpm = 90   # andante

[pendulum]
track_width = 144
pendulum_width = 24
frames_per_beat = 10

[haptic]
pulse_ms = 60
"#;

    #[test]
    fn test_parse_sample() {
        let config = parse_config(SAMPLE).unwrap();
        assert_eq!(config.tempo.min_bpm, 30);
        assert_eq!(config.tempo.max_bpm, 200);
        assert_eq!(config.tempo.initial_bpm, 90);
        assert_eq!(config.pendulum.track_width, 144);
        assert_eq!(config.pendulum.pendulum_width, 24);
        assert_eq!(config.pendulum.frames_per_beat, 10);
        assert_eq!(config.haptic.pulse_ms, 60);
        // Untouched section keeps defaults
        assert_eq!(config.buttons.repeat_interval_ms, 50);
        // Untouched key keeps default
        assert_eq!(config.pendulum.pendulum_height, 8);
    }

    #[test]
    fn test_empty_input_is_default() {
        assert_eq!(parse_config("").unwrap(), MetronomeConfig::default());
    }

    #[test]
    fn test_unknown_section() {
        assert_eq!(
            parse_config("[tempo]\nmin_bpm = 20\n[audio]\n"),
            Err(ParseError::InvalidSection(3))
        );
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            parse_config("[haptic]\nstrength = 3\n"),
            Err(ParseError::UnknownKey(2))
        );
        // Keys outside any section are rejected too
        assert_eq!(parse_config("pulse_ms = 3\n"), Err(ParseError::UnknownKey(1)));
    }

    #[test]
    fn test_invalid_value() {
        assert_eq!(
            parse_config("[tempo]\nmax_bpm = fast\n"),
            Err(ParseError::InvalidValue(2))
        );
        assert_eq!(
            parse_config("[tempo]\nmax_bpm = -1\n"),
            Err(ParseError::InvalidValue(2))
        );
    }

    #[test]
    fn test_syntax_error() {
        assert_eq!(parse_config("[tempo]\nmax_bpm\n"), Err(ParseError::Syntax(2)));
    }

    #[test]
    fn test_semantic_validation() {
        assert_eq!(
            parse_config("[pendulum]\nframes_per_beat = 0\n"),
            Err(ParseError::Invalid(ConfigError::NoFrames))
        );
    }
}
