//! Display task
//!
//! Waits for the controller to mark the screen dirty, then redraws the
//! whole face. Refresh requests that arrive during a flush coalesce into
//! one redraw.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;

use metronome_core::config::PendulumConfig;
use metronome_drivers::display::Sh1106;

use crate::channels::{DISPLAY_REFRESH, SCREEN};
use crate::display::draw_face;

/// Display task - renders the screen model to the SH1106
#[embassy_executor::task]
pub async fn display_task(
    mut display: Sh1106<I2c<'static, I2C0, Async>>,
    geometry: PendulumConfig,
) {
    info!("Display task started");

    if let Err(e) = display.init().await {
        error!("Display init failed: {:?}", e);
    }

    loop {
        DISPLAY_REFRESH.wait().await;

        let screen = SCREEN.lock(|screen| screen.borrow().clone());

        // Drawing into the frame buffer cannot fail
        let _ = draw_face(&mut display, &screen, &geometry);

        if let Err(e) = display.flush().await {
            warn!("Display flush failed: {:?}", e);
        }
    }
}
