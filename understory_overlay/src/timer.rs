// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-shot deadline driven by host timestamps.

/// A cancellable one-shot timer carrying a payload.
///
/// Time is whatever monotonic millisecond clock the host passes in; the timer
/// only compares numbers, so tests can advance it by hand.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Timer<T = ()> {
    pending: Option<(u64, T)>,
}

impl<T: Copy> Timer<T> {
    pub(crate) const fn new() -> Self {
        Self { pending: None }
    }

    /// Arm (or re-arm) the timer to expire `delay_ms` after `now`.
    pub(crate) fn arm(&mut self, now: u64, delay_ms: u64, payload: T) {
        self.pending = Some((now.saturating_add(delay_ms), payload));
    }

    /// Cancel the timer. Returns `true` if it was armed.
    pub(crate) fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub(crate) fn deadline(&self) -> Option<u64> {
        self.pending.map(|(at, _)| at)
    }

    /// Payload of the armed timer.
    pub(crate) fn payload(&self) -> Option<T> {
        self.pending.map(|(_, payload)| payload)
    }

    /// Disarm and return the payload if the deadline has passed.
    pub(crate) fn fire(&mut self, now: u64) -> Option<T> {
        match self.pending {
            Some((at, payload)) if now >= at => {
                self.pending = None;
                Some(payload)
            }
            _ => None,
        }
    }
}
