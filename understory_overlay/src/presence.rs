// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presence: keep content mounted for the length of its enter and exit transitions.
//!
//! ## Sequencing
//!
//! - Enter: emit [`PresenceEvent::Mount`], wait `enter_frames` animation frames so the
//!   initial styles are committed, then emit `Animating(true)`.
//! - Exit: emit `Animating(false)` right away, then [`PresenceEvent::Unmount`] once
//!   `exit_ms` has elapsed.
//!
//! Entering again while an exit is in flight cancels the pending unmount; the content
//! is never unmounted and remounted in that case.
//!
//! ## Minimal example
//!
//! ```
//! use understory_overlay::presence::{Presence, PresenceEvent};
//!
//! let mut p = Presence::new(2, 300);
//! assert_eq!(p.enter(), vec![PresenceEvent::Mount]);
//! assert_eq!(p.frame(), None);
//! assert_eq!(p.frame(), Some(PresenceEvent::Animating(true)));
//!
//! assert_eq!(p.exit(1_000), vec![PresenceEvent::Animating(false)]);
//! assert_eq!(p.advance(1_299), None);
//! assert_eq!(p.advance(1_300), Some(PresenceEvent::Unmount));
//! ```

use alloc::vec::Vec;

use crate::timer::Timer;

/// Lifecycle phase of presented content.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PresencePhase {
    /// Nothing is mounted.
    Unmounted,
    /// Mounted, waiting for animation frames before animating in.
    Entering {
        /// Frames still to wait.
        frames_left: u8,
    },
    /// Mounted and animated in.
    Entered,
    /// Animating out; unmounts when the exit timer expires.
    Exiting,
}

/// Output of a [`Presence`] transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PresenceEvent {
    /// Mount the content.
    Mount,
    /// Switch the "open" transition styles on or off.
    Animating(bool),
    /// Remove the content.
    Unmount,
}

/// Mount/animate/unmount sequencer.
#[derive(Clone, Debug)]
pub struct Presence {
    enter_frames: u8,
    exit_ms: u64,
    phase: PresencePhase,
    exit_timer: Timer,
}

impl Presence {
    /// Create an unmounted presence.
    ///
    /// `enter_frames` is the number of [`Presence::frame`] calls between mount and
    /// animating in; `exit_ms` is the exit transition duration.
    pub const fn new(enter_frames: u8, exit_ms: u64) -> Self {
        Self {
            enter_frames,
            exit_ms,
            phase: PresencePhase::Unmounted,
            exit_timer: Timer::new(),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> PresencePhase {
        self.phase
    }

    /// Whether content is mounted (in any phase but `Unmounted`).
    pub fn is_mounted(&self) -> bool {
        self.phase != PresencePhase::Unmounted
    }

    /// Whether the "open" transition styles are applied.
    pub fn is_animating(&self) -> bool {
        self.phase == PresencePhase::Entered
    }

    /// Deadline of the pending unmount, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.exit_timer.deadline()
    }

    /// Start presenting.
    pub fn enter(&mut self) -> Vec<PresenceEvent> {
        let mut out = Vec::new();
        match self.phase {
            PresencePhase::Unmounted => out.push(PresenceEvent::Mount),
            PresencePhase::Exiting => {
                self.exit_timer.cancel();
            }
            PresencePhase::Entering { .. } | PresencePhase::Entered => return out,
        }
        if self.enter_frames == 0 {
            self.phase = PresencePhase::Entered;
            out.push(PresenceEvent::Animating(true));
        } else {
            self.phase = PresencePhase::Entering {
                frames_left: self.enter_frames,
            };
        }
        out
    }

    /// Stop presenting; unmounts after the exit transition.
    pub fn exit(&mut self, now: u64) -> Vec<PresenceEvent> {
        let mut out = Vec::new();
        match self.phase {
            PresencePhase::Unmounted | PresencePhase::Exiting => return out,
            PresencePhase::Entered => out.push(PresenceEvent::Animating(false)),
            PresencePhase::Entering { .. } => {}
        }
        if self.exit_ms == 0 {
            self.phase = PresencePhase::Unmounted;
            out.push(PresenceEvent::Unmount);
        } else {
            self.phase = PresencePhase::Exiting;
            self.exit_timer.arm(now, self.exit_ms, ());
        }
        out
    }

    /// An animation frame elapsed.
    pub fn frame(&mut self) -> Option<PresenceEvent> {
        let PresencePhase::Entering { frames_left } = self.phase else {
            return None;
        };
        if frames_left <= 1 {
            self.phase = PresencePhase::Entered;
            Some(PresenceEvent::Animating(true))
        } else {
            self.phase = PresencePhase::Entering {
                frames_left: frames_left - 1,
            };
            None
        }
    }

    /// Fire the exit timer if it has expired.
    pub fn advance(&mut self, now: u64) -> Option<PresenceEvent> {
        self.exit_timer.fire(now)?;
        self.phase = PresencePhase::Unmounted;
        Some(PresenceEvent::Unmount)
    }

    /// Unmount immediately, skipping any transition.
    pub fn cancel(&mut self) -> Option<PresenceEvent> {
        self.exit_timer.cancel();
        let was_mounted = self.is_mounted();
        self.phase = PresencePhase::Unmounted;
        was_mounted.then_some(PresenceEvent::Unmount)
    }
}
