//! GPIO vibration motor
//!
//! An ERM motor switched through a transistor (or a driver chip with an
//! enable input) on one GPIO. The motor has no speed control here: each
//! beat is a fixed-length buzz.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use metronome_core::traits::PulseOutput;

/// Pin level that spins the motor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorDrive {
    /// NPN low-side switch or active-high enable
    ActiveHigh,
    /// PNP high-side switch or active-low enable
    ActiveLow,
}

/// Vibration motor on a GPIO pin
pub struct VibrationMotor<P> {
    pin: P,
    drive: MotorDrive,
    spinning: bool,
}

impl<P: OutputPin<Error = Infallible>> VibrationMotor<P> {
    /// Take over `pin`; the motor is stopped immediately
    pub fn new(pin: P, drive: MotorDrive) -> Self {
        let mut motor = Self {
            pin,
            drive,
            spinning: false,
        };
        motor.set_active(false);
        motor
    }

    /// Spin the motor for `duration_ms`, then stop it
    pub async fn buzz<D: DelayNs>(&mut self, delay: &mut D, duration_ms: u32) {
        self.set_active(true);
        delay.delay_ms(duration_ms).await;
        self.set_active(false);
    }
}

impl<P: OutputPin<Error = Infallible>> PulseOutput for VibrationMotor<P> {
    fn set_active(&mut self, active: bool) {
        self.spinning = active;

        let high = match self.drive {
            MotorDrive::ActiveHigh => active,
            MotorDrive::ActiveLow => !active,
        };
        // Infallible
        let _ = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }

    fn is_active(&self) -> bool {
        self.spinning
    }
}
