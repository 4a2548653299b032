//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use embassy_time::Instant;

use metronome_core::scheduler::{AlarmKind, AlarmToken};
use metronome_core::state::Event;

use crate::display::Screen;

/// Channel capacity for controller events
const EVENT_CHANNEL_SIZE: usize = 16;

/// Request to an alarm task
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum AlarmCommand {
    /// Fire `token` at `deadline`, replacing anything pending
    Arm { deadline: Instant, token: AlarmToken },
    /// Drop the pending alarm
    Cancel,
}

/// Button clicks and alarm fires, consumed by the controller in order
pub static EVENT_CHANNEL: Channel<CriticalSectionRawMutex, Event, EVENT_CHANNEL_SIZE> =
    Channel::new();

/// Beat alarm commands (updated by controller)
pub static BEAT_ALARM: Signal<CriticalSectionRawMutex, AlarmCommand> = Signal::new();

/// Animation frame alarm commands (updated by controller)
pub static FRAME_ALARM: Signal<CriticalSectionRawMutex, AlarmCommand> = Signal::new();

/// Haptic pulse request, value is the pulse length in milliseconds
pub static HAPTIC_PULSE: Signal<CriticalSectionRawMutex, u32> = Signal::new();

/// Signal that the screen model changed and needs redrawing
pub static DISPLAY_REFRESH: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// What the display should show, written by the controller
pub static SCREEN: Mutex<CriticalSectionRawMutex, RefCell<Screen>> =
    Mutex::new(RefCell::new(Screen::new()));

/// Command signal for an alarm kind
pub fn alarm_signal(kind: AlarmKind) -> &'static Signal<CriticalSectionRawMutex, AlarmCommand> {
    match kind {
        AlarmKind::Beat => &BEAT_ALARM,
        AlarmKind::Frame => &FRAME_ALARM,
    }
}
