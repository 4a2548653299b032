//! Metronome controller
//!
//! The application object. It owns all metronome state and is the only
//! thing that mutates it; every button click and alarm fire comes through
//! [`Metronome::handle`] and runs to completion before the next event.

use crate::config::MetronomeConfig;
use crate::input::{Command, InputMapper};
use crate::render::format_bpm;
use crate::scheduler::{AlarmToken, AnimationScheduler, BeatPhase, BeatScheduler};
use crate::state::{Event, PendulumState, TempoState};
use crate::traits::Platform;

/// Metronome state and schedulers
#[derive(Debug, Clone)]
pub struct Metronome {
    config: MetronomeConfig,
    tempo: TempoState,
    pendulum: PendulumState,
    beat: BeatScheduler,
    frames: AnimationScheduler,
}

impl Metronome {
    /// Create a stopped metronome at the configured initial tempo
    pub fn new(config: MetronomeConfig) -> Self {
        Self {
            tempo: TempoState::new(&config.tempo),
            pendulum: PendulumState::new(),
            beat: BeatScheduler::new(),
            frames: AnimationScheduler::new(config.pendulum.frames_per_beat),
            config,
        }
    }

    pub fn tempo(&self) -> &TempoState {
        &self.tempo
    }

    pub fn pendulum(&self) -> &PendulumState {
        &self.pendulum
    }

    pub fn is_running(&self) -> bool {
        self.tempo.is_running()
    }

    pub fn beat_phase(&self) -> BeatPhase {
        self.beat.phase()
    }

    /// Check if the animation alarm is pending
    pub fn is_animating(&self) -> bool {
        self.frames.is_armed()
    }

    /// Paint the initial face
    pub fn boot<P: Platform + ?Sized>(&mut self, io: &mut P) {
        self.render_bpm(io);
        io.set_running(false);
        io.request_pendulum_redraw(&self.pendulum);
    }

    /// Process one event
    pub fn handle<P: Platform + ?Sized>(&mut self, event: Event, io: &mut P) {
        match event {
            Event::Button(button) => self.execute(InputMapper::command(button), io),
            Event::BeatAlarm(token) => {
                self.on_beat_fire(token, io);
            }
            Event::FrameAlarm(token) => {
                self.on_frame_fire(token, io);
            }
        }
    }

    /// Run a button command
    pub fn execute<P: Platform + ?Sized>(&mut self, command: Command, io: &mut P) {
        match command {
            Command::ToggleRunning => self.toggle_running(io),
            Command::IncreaseTempo => self.increase(io),
            Command::DecreaseTempo => self.decrease(io),
        }
    }

    /// Start if stopped, stop if running
    pub fn toggle_running<P: Platform + ?Sized>(&mut self, io: &mut P) {
        if self.tempo.is_running() {
            self.stop(io);
        } else {
            self.start(io);
        }
        self.render_bpm(io);
    }

    /// Begin beating one period from now, pendulum at the left heading right
    pub fn start<P: Platform + ?Sized>(&mut self, io: &mut P) {
        if self.tempo.is_running() {
            return;
        }

        self.tempo.set_running(true);
        self.pendulum.reset();
        io.set_running(true);
        io.request_pendulum_redraw(&self.pendulum);
        self.arm(io);
    }

    /// Stop beating; pending and in-flight fires become no-ops
    pub fn stop<P: Platform + ?Sized>(&mut self, io: &mut P) {
        if !self.tempo.is_running() {
            return;
        }

        self.tempo.set_running(false);
        self.beat.stop(io);
        self.frames.stop(io);
        io.set_running(false);
    }

    /// One BPM faster, saturating
    pub fn increase<P: Platform + ?Sized>(&mut self, io: &mut P) {
        self.tempo.increase();
        self.render_bpm(io);
    }

    /// One BPM slower, saturating
    pub fn decrease<P: Platform + ?Sized>(&mut self, io: &mut P) {
        self.tempo.decrease();
        self.render_bpm(io);
    }

    /// Jump to a tempo, clamped to the configured range
    ///
    /// Like the step operations, this takes effect at the next beat.
    pub fn set_bpm<P: Platform + ?Sized>(&mut self, bpm: u16, io: &mut P) {
        self.tempo.set_bpm(bpm);
        self.render_bpm(io);
    }

    /// Beat alarm fired
    ///
    /// Returns `false` if the fire was stale and ignored.
    pub fn on_beat_fire<P: Platform + ?Sized>(&mut self, token: AlarmToken, io: &mut P) -> bool {
        if !self.beat.accept(token, &self.tempo) {
            return false;
        }

        self.pendulum.on_beat(&self.config.pendulum);
        io.request_pendulum_redraw(&self.pendulum);
        io.pulse(self.config.haptic.pulse_ms);
        self.render_bpm(io);
        self.arm(io);
        true
    }

    /// Frame alarm fired
    ///
    /// Returns `false` if the fire was stale and ignored.
    pub fn on_frame_fire<P: Platform + ?Sized>(&mut self, token: AlarmToken, io: &mut P) -> bool {
        if !self.frames.accept(token, &self.tempo) {
            return false;
        }

        self.pendulum.advance_frame(&self.config.pendulum);
        io.request_pendulum_redraw(&self.pendulum);
        self.frames.arm(&self.tempo, io);
        true
    }

    /// Arm the next beat and restart the frames in phase with it
    fn arm<P: Platform + ?Sized>(&mut self, io: &mut P) {
        self.beat.arm(&self.tempo, io);
        self.frames.arm(&self.tempo, io);
    }

    fn render_bpm<P: Platform + ?Sized>(&self, io: &mut P) {
        io.set_bpm_text(&format_bpm(self.tempo.bpm()));
    }
}
