//! Alarm tasks
//!
//! One task per alarm kind. Each holds at most one pending deadline; a new
//! command always replaces it, so a cancelled or superseded alarm never
//! reaches the controller from here. Fires already queued in the event
//! channel are filtered by their token in the core.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Instant, Timer};

use metronome_core::scheduler::{AlarmKind, AlarmToken};
use metronome_core::state::Event;

use crate::channels::{AlarmCommand, EVENT_CHANNEL};

/// Alarm task - turns arm commands into timed events
#[embassy_executor::task(pool_size = 2)]
pub async fn alarm_task(
    kind: AlarmKind,
    commands: &'static Signal<CriticalSectionRawMutex, AlarmCommand>,
) {
    info!("{:?} alarm task started", kind);

    let mut pending: Option<(Instant, AlarmToken)> = None;

    loop {
        let command = match pending {
            None => commands.wait().await,
            Some((deadline, token)) => {
                match select(Timer::at(deadline), commands.wait()).await {
                    Either::First(()) => {
                        pending = None;
                        EVENT_CHANNEL.send(fire_event(kind, token)).await;
                        continue;
                    }
                    Either::Second(command) => command,
                }
            }
        };

        pending = match command {
            AlarmCommand::Arm { deadline, token } => Some((deadline, token)),
            AlarmCommand::Cancel => None,
        };
    }
}

fn fire_event(kind: AlarmKind, token: AlarmToken) -> Event {
    match kind {
        AlarmKind::Beat => Event::BeatAlarm(token),
        AlarmKind::Frame => Event::FrameAlarm(token),
    }
}
