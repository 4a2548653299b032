//! Button tasks
//!
//! One task per button. A press is debounced, then sent to the controller
//! as a click. Tempo buttons keep clicking while held: first after the
//! repeat delay, then at the repeat interval until release.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{with_timeout, Duration, Timer};

use metronome_core::input::{Button, InputMapper, RepeatTimer};
use metronome_core::state::Event;

use crate::channels::EVENT_CHANNEL;

/// Button task - buttons are active low with pull-ups
#[embassy_executor::task(pool_size = 3)]
pub async fn button_task(mut pin: Input<'static>, button: Button, mapper: InputMapper) {
    info!("{:?} button task started", button);

    let debounce = Duration::from_millis(mapper.debounce_ms() as u64);

    loop {
        pin.wait_for_falling_edge().await;
        Timer::after(debounce).await;
        if pin.is_high() {
            // Bounce or glitch
            continue;
        }

        EVENT_CHANNEL.send(Event::Button(button)).await;

        match RepeatTimer::for_mode(mapper.click_mode(button)) {
            Some(mut repeat) => {
                loop {
                    let wait = Duration::from_millis(repeat.next_wait_ms() as u64);
                    match with_timeout(wait, pin.wait_for_high()).await {
                        Ok(()) => break,
                        Err(_) => {
                            repeat.fired();
                            EVENT_CHANNEL.send(Event::Button(button)).await;
                        }
                    }
                }
                trace!("{:?} released after {} repeats", button, repeat.repeats());
            }
            None => pin.wait_for_high().await,
        }

        Timer::after(debounce).await;
    }
}
