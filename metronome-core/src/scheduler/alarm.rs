//! One-shot alarm bookkeeping
//!
//! Each logical timer keeps a generation counter. Arming bumps it and
//! hands the new value to the platform as an [`AlarmToken`]; a fire is
//! honoured only if it carries the token of the request still pending.
//! Superseded and cancelled requests are also cancelled on the platform,
//! so a stale fire can only come from one already in flight.

use crate::traits::AlarmService;

/// Logical alarms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmKind {
    /// One fire per beat
    Beat,
    /// One fire per animation frame
    Frame,
}

/// Validity token captured when an alarm is armed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmToken(u32);

impl AlarmToken {
    pub const fn new(generation: u32) -> Self {
        Self(generation)
    }
}

/// A single self re-arming one-shot alarm
#[derive(Debug, Clone)]
pub struct Alarm {
    kind: AlarmKind,
    generation: u32,
    pending: Option<AlarmToken>,
}

impl Alarm {
    pub const fn new(kind: AlarmKind) -> Self {
        Self {
            kind,
            generation: 0,
            pending: None,
        }
    }

    /// Check if a request is outstanding
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Schedule a fire after `delay_ms`, replacing any outstanding request
    pub fn arm<T: AlarmService + ?Sized>(&mut self, delay_ms: u32, timer: &mut T) -> AlarmToken {
        if self.pending.take().is_some() {
            timer.cancel(self.kind);
        }

        self.generation = self.generation.wrapping_add(1);
        let token = AlarmToken(self.generation);
        timer.schedule_after(self.kind, delay_ms, token);
        self.pending = Some(token);
        token
    }

    /// Drop the outstanding request
    ///
    /// Returns `true` if something was pending.
    pub fn cancel<T: AlarmService + ?Sized>(&mut self, timer: &mut T) -> bool {
        match self.pending.take() {
            Some(_) => {
                timer.cancel(self.kind);
                true
            }
            None => false,
        }
    }

    /// Consume a fire
    ///
    /// Returns `true` exactly once, for the token of the pending request.
    pub fn accept(&mut self, token: AlarmToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}
