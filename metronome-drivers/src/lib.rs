//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in metronome-core:
//!
//! - Vibration motor on a GPIO (haptic beat pulse)
//! - SH1106 128x64 OLED over I2C (an `embedded-graphics` draw target)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod haptic;
