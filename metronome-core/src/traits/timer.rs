//! One-shot alarm service

use crate::scheduler::{AlarmKind, AlarmToken};

/// Schedules one-shot alarms
///
/// When an alarm expires the platform delivers the matching alarm event
/// carrying `token` back to the metronome. At most one request per
/// `AlarmKind` is outstanding; scheduling again replaces the previous
/// request.
pub trait AlarmService {
    /// Fire the `kind` alarm after `delay_ms` milliseconds
    fn schedule_after(&mut self, kind: AlarmKind, delay_ms: u32, token: AlarmToken);

    /// Drop the pending `kind` alarm, if any
    ///
    /// A fire already queued for delivery may still arrive; the
    /// metronome discards it by token.
    fn cancel(&mut self, kind: AlarmKind);
}
