//! Wrist metronome firmware
//!
//! Main firmware binary for RP2040-based wrist metronomes: three buttons,
//! a vibration motor and a 128x64 SH1106 OLED showing the tempo and a
//! pendulum sweeping in time with the beat.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use {defmt_rtt as _, panic_probe as _};

use metronome_core::input::{Button, InputMapper};
use metronome_core::scheduler::AlarmKind;
use metronome_drivers::display::Sh1106;
use metronome_drivers::haptic::{MotorDrive, VibrationMotor};

/// Embedded configuration (compiled into firmware)
/// Edit metronome.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../metronome.toml");

/// SH1106 I2C bus speed
const DISPLAY_I2C_HZ: u32 = 400_000;

mod channels;
mod config;
mod display;
mod platform;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Metronome firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load(EMBEDDED_CONFIG);

    // Board wiring:
    //   GPIO4/GPIO5  I2C0 SDA/SCL to the SH1106
    //   GPIO12       select button (to ground)
    //   GPIO13       up button (to ground)
    //   GPIO14       down button (to ground)
    //   GPIO15       vibration motor driver, active high
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = DISPLAY_I2C_HZ;
    let i2c = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c_config);
    let display = Sh1106::new(i2c);

    let motor = VibrationMotor::new(Output::new(p.PIN_15, Level::Low), MotorDrive::ActiveHigh);

    let select = Input::new(p.PIN_12, Pull::Up);
    let up = Input::new(p.PIN_13, Pull::Up);
    let down = Input::new(p.PIN_14, Pull::Up);
    let mapper = InputMapper::new(config.buttons);

    spawner
        .spawn(tasks::alarm_task(AlarmKind::Beat, &channels::BEAT_ALARM))
        .unwrap();
    spawner
        .spawn(tasks::alarm_task(AlarmKind::Frame, &channels::FRAME_ALARM))
        .unwrap();
    spawner.spawn(tasks::haptic_task(motor)).unwrap();
    spawner
        .spawn(tasks::display_task(display, config.pendulum))
        .unwrap();
    spawner
        .spawn(tasks::button_task(select, Button::Select, mapper))
        .unwrap();
    spawner
        .spawn(tasks::button_task(up, Button::Up, mapper))
        .unwrap();
    spawner
        .spawn(tasks::button_task(down, Button::Down, mapper))
        .unwrap();

    // Controller last so its boot paint lands after the display task is waiting
    spawner.spawn(tasks::controller_task(config)).unwrap();

    info!("All tasks spawned");
}
