// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bookkeeping for attached listeners, so every attach is paired with one detach.

use crate::host::{Events, ListenerHost, ListenerTarget};

/// Records which [`Events`] are attached to each [`ListenerTarget`].
///
/// Attaching a flag that is already attached is a no-op, and so is detaching one
/// that is not, so the host sees each `(target, flag)` pair at most once until it
/// is detached again.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ListenerSet {
    attached: [Events; 4],
}

impl ListenerSet {
    /// An empty set.
    pub const fn new() -> Self {
        Self {
            attached: [Events::empty(); 4],
        }
    }

    /// Events currently attached to `target`.
    pub fn attached(&self, target: ListenerTarget) -> Events {
        self.attached[slot(target)]
    }

    /// Returns `true` when nothing is attached anywhere.
    pub fn is_empty(&self) -> bool {
        self.attached.iter().all(|e| e.is_empty())
    }

    /// Attach every flag in `events` that is not attached to `target` yet.
    pub fn attach<H: ListenerHost + ?Sized>(
        &mut self,
        host: &mut H,
        target: ListenerTarget,
        events: Events,
    ) {
        let current = &mut self.attached[slot(target)];
        for flag in events.difference(*current).iter() {
            host.listen(target, flag);
        }
        current.insert(events);
    }

    /// Detach every flag in `events` that is attached to `target`.
    pub fn detach<H: ListenerHost + ?Sized>(
        &mut self,
        host: &mut H,
        target: ListenerTarget,
        events: Events,
    ) {
        let current = &mut self.attached[slot(target)];
        for flag in events.intersection(*current).iter() {
            host.unlisten(target, flag);
        }
        current.remove(events);
    }

    /// Detach everything from every target.
    pub fn detach_all<H: ListenerHost + ?Sized>(&mut self, host: &mut H) {
        for target in ListenerTarget::ALL {
            self.detach(host, target, Events::all());
        }
    }
}

const fn slot(target: ListenerTarget) -> usize {
    match target {
        ListenerTarget::Trigger => 0,
        ListenerTarget::Overlay => 1,
        ListenerTarget::Document => 2,
        ListenerTarget::Window => 3,
    }
}
