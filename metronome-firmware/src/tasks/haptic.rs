//! Haptic task
//!
//! Drives the vibration motor for each pulse request. A request arriving
//! mid-pulse starts a fresh pulse once the current one ends.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::Delay;

use metronome_drivers::haptic::VibrationMotor;

use crate::channels::HAPTIC_PULSE;

/// Haptic task - one motor pulse per beat
#[embassy_executor::task]
pub async fn haptic_task(mut motor: VibrationMotor<Output<'static>>) {
    info!("Haptic task started");

    loop {
        let duration_ms = HAPTIC_PULSE.wait().await;
        motor.buzz(&mut Delay, duration_ms).await;
    }
}
