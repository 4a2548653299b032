//! Board platform adapter
//!
//! Implements the core's service traits on top of the inter-task
//! channels. Every call returns immediately; the alarm, haptic and
//! display tasks do the actual waiting and I/O.

use embassy_time::{Duration, Instant};

use metronome_core::scheduler::{AlarmKind, AlarmToken};
use metronome_core::state::PendulumState;
use metronome_core::traits::{AlarmService, Haptic, MetronomeDisplay};

use crate::channels::{alarm_signal, AlarmCommand, DISPLAY_REFRESH, HAPTIC_PULSE, SCREEN};
use crate::display::Screen;

/// Platform services for the controller task
pub struct BoardPlatform;

impl BoardPlatform {
    fn update_screen(&mut self, update: impl FnOnce(&mut Screen)) {
        SCREEN.lock(|screen| update(&mut screen.borrow_mut()));
        DISPLAY_REFRESH.signal(());
    }
}

impl AlarmService for BoardPlatform {
    fn schedule_after(&mut self, kind: AlarmKind, delay_ms: u32, token: AlarmToken) {
        // Deadline is taken here so time spent in the controller is not added
        let deadline = Instant::now() + Duration::from_millis(delay_ms as u64);
        alarm_signal(kind).signal(AlarmCommand::Arm { deadline, token });
    }

    fn cancel(&mut self, kind: AlarmKind) {
        alarm_signal(kind).signal(AlarmCommand::Cancel);
    }
}

impl MetronomeDisplay for BoardPlatform {
    fn set_bpm_text(&mut self, text: &str) {
        self.update_screen(|screen| screen.set_bpm_text(text));
    }

    fn request_pendulum_redraw(&mut self, pendulum: &PendulumState) {
        let pendulum = *pendulum;
        self.update_screen(|screen| screen.set_pendulum(pendulum));
    }

    fn set_running(&mut self, running: bool) {
        self.update_screen(|screen| screen.set_running(running));
    }
}

impl Haptic for BoardPlatform {
    fn pulse(&mut self, duration_ms: u32) {
        HAPTIC_PULSE.signal(duration_ms);
    }
}
