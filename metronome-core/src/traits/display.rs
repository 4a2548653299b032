//! Display trait for the metronome face

use crate::state::PendulumState;

/// Display surface
///
/// Implementations only record what to show and request a repaint; the
/// actual drawing happens later, in the display's own paint pass.
pub trait MetronomeDisplay {
    /// Replace the tempo label
    fn set_bpm_text(&mut self, text: &str);

    /// Mark the pendulum layer dirty at the given position
    fn request_pendulum_redraw(&mut self, pendulum: &PendulumState);

    /// Show or hide the running indicator
    fn set_running(&mut self, running: bool);
}
