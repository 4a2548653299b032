//! Events processed by the metronome controller

use crate::input::Button;
use crate::scheduler::AlarmToken;

/// Events that drive the metronome
///
/// All events are handled one at a time, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A button click (or an auto-repeat click while held)
    Button(Button),
    /// The beat alarm armed with this token expired
    BeatAlarm(AlarmToken),
    /// The frame alarm armed with this token expired
    FrameAlarm(AlarmToken),
}
