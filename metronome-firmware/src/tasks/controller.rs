//! Controller task
//!
//! Sole owner of the [`Metronome`]. Events are handled strictly in arrival
//! order, each one running to completion before the next is received.

use defmt::*;

use metronome_core::config::MetronomeConfig;
use metronome_core::state::Event;
use metronome_core::Metronome;

use crate::channels::EVENT_CHANNEL;
use crate::platform::BoardPlatform;

/// Controller task - drives the metronome from button and alarm events
#[embassy_executor::task]
pub async fn controller_task(config: MetronomeConfig) {
    info!("Controller task started");

    let mut metronome = Metronome::new(config);
    let mut platform = BoardPlatform;
    metronome.boot(&mut platform);

    loop {
        let event = EVENT_CHANNEL.receive().await;

        match event {
            Event::Button(button) => {
                debug!("Button: {:?}", button);
                let was_running = metronome.is_running();
                metronome.handle(event, &mut platform);

                if metronome.is_running() != was_running {
                    if metronome.is_running() {
                        info!("Started at {} BPM", metronome.tempo().bpm() as u32);
                    } else {
                        info!("Stopped");
                    }
                }
            }
            Event::BeatAlarm(token) => {
                if !metronome.on_beat_fire(token, &mut platform) {
                    debug!("Ignoring stale beat alarm {:?}", token);
                }
            }
            Event::FrameAlarm(token) => {
                if !metronome.on_frame_fire(token, &mut platform) {
                    trace!("Ignoring stale frame alarm {:?}", token);
                }
            }
        }
    }
}
