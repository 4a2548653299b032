//! Input mapping
//!
//! Three buttons drive the metronome: select starts and stops it, up and
//! down adjust the tempo. Tempo buttons auto-repeat while held; select
//! fires once per press.

use crate::config::ButtonConfig;

/// Physical buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Select,
    Up,
    Down,
}

/// Operation requested by a button click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    ToggleRunning,
    IncreaseTempo,
    DecreaseTempo,
}

/// How presses of a button turn into clicks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClickMode {
    /// One click per press
    Single,
    /// One click on press, then repeated clicks while held
    Repeating { delay_ms: u32, interval_ms: u32 },
}

/// Maps buttons to commands and click behaviour
#[derive(Debug, Clone, Copy)]
pub struct InputMapper {
    config: ButtonConfig,
}

impl InputMapper {
    pub fn new(config: ButtonConfig) -> Self {
        Self { config }
    }

    /// Command issued by one click of `button`
    pub fn command(button: Button) -> Command {
        match button {
            Button::Select => Command::ToggleRunning,
            Button::Up => Command::IncreaseTempo,
            Button::Down => Command::DecreaseTempo,
        }
    }

    /// Click behaviour for `button`
    pub fn click_mode(&self, button: Button) -> ClickMode {
        match button {
            Button::Select => ClickMode::Single,
            Button::Up | Button::Down => ClickMode::Repeating {
                delay_ms: self.config.repeat_delay_ms,
                interval_ms: self.config.repeat_interval_ms,
            },
        }
    }

    /// Debounce time applied after each edge
    pub fn debounce_ms(&self) -> u32 {
        self.config.debounce_ms
    }
}

/// Hold-to-repeat timing for a single press
///
/// The first repeat comes after `delay_ms`, the rest every `interval_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RepeatTimer {
    delay_ms: u32,
    interval_ms: u32,
    repeats: u32,
}

impl RepeatTimer {
    /// Start timing a press; returns `None` for single-click buttons
    pub fn for_mode(mode: ClickMode) -> Option<Self> {
        match mode {
            ClickMode::Single => None,
            ClickMode::Repeating {
                delay_ms,
                interval_ms,
            } => Some(Self {
                delay_ms,
                interval_ms,
                repeats: 0,
            }),
        }
    }

    /// Time to wait (while still held) before the next repeated click
    pub fn next_wait_ms(&self) -> u32 {
        if self.repeats == 0 {
            self.delay_ms
        } else {
            self.interval_ms
        }
    }

    /// Record that a repeated click was emitted
    pub fn fired(&mut self) {
        self.repeats = self.repeats.saturating_add(1);
    }

    /// Number of repeated clicks emitted so far
    pub fn repeats(&self) -> u32 {
        self.repeats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands() {
        assert_eq!(InputMapper::command(Button::Select), Command::ToggleRunning);
        assert_eq!(InputMapper::command(Button::Up), Command::IncreaseTempo);
        assert_eq!(InputMapper::command(Button::Down), Command::DecreaseTempo);
    }

    #[test]
    fn test_click_modes() {
        let mapper = InputMapper::new(ButtonConfig::default());
        assert_eq!(mapper.click_mode(Button::Select), ClickMode::Single);
        assert_eq!(
            mapper.click_mode(Button::Up),
            ClickMode::Repeating {
                delay_ms: 400,
                interval_ms: 50
            }
        );
        assert_eq!(mapper.click_mode(Button::Down), mapper.click_mode(Button::Up));
    }

    #[test]
    fn test_select_never_repeats() {
        let mapper = InputMapper::new(ButtonConfig::default());
        assert!(RepeatTimer::for_mode(mapper.click_mode(Button::Select)).is_none());
    }

    #[test]
    fn test_repeat_timing() {
        let mapper = InputMapper::new(ButtonConfig::default());
        let mut timer = RepeatTimer::for_mode(mapper.click_mode(Button::Up)).unwrap();

        assert_eq!(timer.next_wait_ms(), 400);
        timer.fired();
        assert_eq!(timer.next_wait_ms(), 50);
        timer.fired();
        assert_eq!(timer.next_wait_ms(), 50);
        assert_eq!(timer.repeats(), 2);
    }
}
