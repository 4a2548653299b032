//! Haptic actuator trait

/// Vibration actuator
pub trait Haptic {
    /// Vibrate for `duration_ms`; fire and forget
    fn pulse(&mut self, duration_ms: u32);
}

/// Output stage switched by a haptic driver
pub trait PulseOutput {
    /// Turn the actuator on or off
    fn set_active(&mut self, active: bool);

    /// Check if the actuator is currently on
    fn is_active(&self) -> bool;
}
