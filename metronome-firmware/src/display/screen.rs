//! Screen model
//!
//! Everything the face shows, independent of how it is drawn.

use heapless::String;

use metronome_core::render::BPM_TEXT_LEN;
use metronome_core::state::PendulumState;

/// Current contents of the metronome face
#[derive(Debug, Clone)]
pub struct Screen {
    bpm: String<BPM_TEXT_LEN>,
    running: bool,
    pendulum: PendulumState,
}

impl Screen {
    /// Blank, stopped face with the pendulum at the left
    pub const fn new() -> Self {
        Self {
            bpm: String::new(),
            running: false,
            pendulum: PendulumState::new(),
        }
    }

    pub fn bpm_text(&self) -> &str {
        self.bpm.as_str()
    }

    pub fn set_bpm_text(&mut self, text: &str) {
        self.bpm.clear();
        for ch in text.chars() {
            if self.bpm.push(ch).is_err() {
                break;
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Last pendulum position handed over by the controller
    pub fn pendulum(&self) -> &PendulumState {
        &self.pendulum
    }

    pub fn set_pendulum(&mut self, pendulum: PendulumState) {
        self.pendulum = pendulum;
    }
}
