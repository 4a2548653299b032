//! Haptic actuators

pub mod vibration;

pub use vibration::{MotorDrive, VibrationMotor};
