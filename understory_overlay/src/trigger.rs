// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger modes and the listeners each one needs on the trigger element.
//!
//! | Mode          | Trigger listeners               | Document listeners while visible |
//! |---------------|---------------------------------|----------------------------------|
//! | `hover`       | enter, leave, focus, blur       | pointer move, key down           |
//! | `click`       | click                           | pointer move, key down, click    |
//! | `focus`       | focus, blur                     | pointer move, key down           |
//! | `contextMenu` | context menu                    | pointer move, key down, click    |
//!
//! Scroll and resize are always tracked on the window while an overlay is visible.

use core::fmt;
use core::str::FromStr;

use crate::host::{Events, ListenerHost, ListenerTarget};
use crate::listeners::ListenerSet;

/// Which interaction opens an overlay.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum TriggerMode {
    /// Pointer hover, with focus as a keyboard fallback.
    #[default]
    Hover,
    /// Click toggles; clicking outside closes.
    Click,
    /// Keyboard or pointer focus.
    Focus,
    /// Context menu request; clicking outside closes.
    ContextMenu,
}

impl TriggerMode {
    /// All modes, in declaration order.
    pub const ALL: [Self; 4] = [Self::Hover, Self::Click, Self::Focus, Self::ContextMenu];

    /// Listeners attached to the trigger element for this mode.
    pub const fn trigger_events(self) -> Events {
        match self {
            Self::Hover => Events::POINTER_ENTER
                .union(Events::POINTER_LEAVE)
                .union(Events::FOCUS)
                .union(Events::BLUR),
            Self::Click => Events::CLICK,
            Self::Focus => Events::FOCUS.union(Events::BLUR),
            Self::ContextMenu => Events::CONTEXT_MENU,
        }
    }

    /// Listeners attached to the document while an overlay in this mode is visible.
    pub const fn document_events(self) -> Events {
        let base = Events::POINTER_MOVE.union(Events::KEY_DOWN);
        if self.closes_on_outside_click() {
            base.union(Events::CLICK)
        } else {
            base
        }
    }

    /// Whether a click outside the trigger and overlay dismisses the overlay.
    pub const fn closes_on_outside_click(self) -> bool {
        matches!(self, Self::Click | Self::ContextMenu)
    }

    /// The camelCase name of this mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hover => "hover",
            Self::Click => "click",
            Self::Focus => "focus",
            Self::ContextMenu => "contextMenu",
        }
    }
}

impl fmt::Display for TriggerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a trigger mode.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unsupported trigger mode name")]
pub struct ParseTriggerModeError;

impl FromStr for TriggerMode {
    type Err = ParseTriggerModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or(ParseTriggerModeError)
    }
}

/// A native event delivered from the trigger element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TriggerEvent {
    /// Pointer entered the trigger.
    PointerEnter,
    /// Pointer left the trigger.
    PointerLeave,
    /// Trigger was clicked.
    Click,
    /// Trigger gained focus.
    Focus,
    /// Trigger lost focus.
    Blur,
    /// Context menu was requested on the trigger.
    ContextMenu,
}

impl TriggerEvent {
    /// The listener flag this event arrives through.
    pub const fn flag(self) -> Events {
        match self {
            Self::PointerEnter => Events::POINTER_ENTER,
            Self::PointerLeave => Events::POINTER_LEAVE,
            Self::Click => Events::CLICK,
            Self::Focus => Events::FOCUS,
            Self::Blur => Events::BLUR,
            Self::ContextMenu => Events::CONTEXT_MENU,
        }
    }
}

/// Listeners bound to a trigger element for one [`TriggerMode`].
///
/// Changing the mode goes through [`TriggerBinding::rebind`], which removes the
/// whole previous set before attaching the new one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriggerBinding {
    mode: TriggerMode,
    listeners: ListenerSet,
}

impl TriggerBinding {
    /// An unbound binding for `mode`.
    pub const fn new(mode: TriggerMode) -> Self {
        Self {
            mode,
            listeners: ListenerSet::new(),
        }
    }

    /// Current mode.
    pub fn mode(&self) -> TriggerMode {
        self.mode
    }

    /// Events currently attached to the trigger.
    pub fn attached(&self) -> Events {
        self.listeners.attached(ListenerTarget::Trigger)
    }

    /// Whether `event` is delivered through an attached listener.
    pub fn accepts(&self, event: TriggerEvent) -> bool {
        self.attached().contains(event.flag())
    }

    /// Attach the listeners for the current mode.
    pub fn bind<H: ListenerHost + ?Sized>(&mut self, host: &mut H) {
        self.listeners
            .attach(host, ListenerTarget::Trigger, self.mode.trigger_events());
    }

    /// Remove every listener, then bind for `mode`.
    pub fn rebind<H: ListenerHost + ?Sized>(&mut self, host: &mut H, mode: TriggerMode) {
        self.unbind(host);
        self.mode = mode;
        self.bind(host);
        tracing::debug!(mode = mode.as_str(), "trigger rebound");
    }

    /// Remove every listener.
    pub fn unbind<H: ListenerHost + ?Sized>(&mut self, host: &mut H) {
        self.listeners.detach_all(host);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Log {
        live: Vec<Events>,
    }

    impl ListenerHost for Log {
        fn listen(&mut self, target: ListenerTarget, event: Events) {
            assert_eq!(target, ListenerTarget::Trigger, "trigger only");
            assert!(!self.live.contains(&event), "double attach of {event:?}");
            self.live.push(event);
        }
        fn unlisten(&mut self, _target: ListenerTarget, event: Events) {
            let i = self.live.iter().position(|e| *e == event);
            assert!(i.is_some(), "detach of unknown {event:?}");
            self.live.remove(i.unwrap());
        }
    }

    #[test]
    fn mode_sets() {
        assert_eq!(
            TriggerMode::Hover.trigger_events(),
            Events::POINTER_ENTER | Events::POINTER_LEAVE | Events::FOCUS | Events::BLUR
        );
        assert_eq!(TriggerMode::Click.trigger_events(), Events::CLICK);
        assert_eq!(
            TriggerMode::Focus.trigger_events(),
            Events::FOCUS | Events::BLUR
        );
        assert_eq!(
            TriggerMode::ContextMenu.trigger_events(),
            Events::CONTEXT_MENU
        );
        assert!(TriggerMode::Click.document_events().contains(Events::CLICK));
        assert!(!TriggerMode::Hover.document_events().contains(Events::CLICK));
    }

    #[test]
    fn rebind_removes_previous_set_first() {
        let mut host = Log::default();
        let mut b = TriggerBinding::new(TriggerMode::Hover);
        b.bind(&mut host);
        assert_eq!(host.live.len(), 4);

        for mode in [
            TriggerMode::Click,
            TriggerMode::ContextMenu,
            TriggerMode::Focus,
            TriggerMode::Hover,
        ] {
            b.rebind(&mut host, mode);
            assert_eq!(b.attached(), mode.trigger_events());
            assert_eq!(host.live.len(), mode.trigger_events().iter().count());
        }

        b.unbind(&mut host);
        assert!(host.live.is_empty());
        assert!(!b.accepts(TriggerEvent::PointerEnter));
    }

    #[test]
    fn accepts_only_bound_events() {
        let mut host = Log::default();
        let mut b = TriggerBinding::new(TriggerMode::Focus);
        b.bind(&mut host);
        assert!(b.accepts(TriggerEvent::Focus));
        assert!(b.accepts(TriggerEvent::Blur));
        assert!(!b.accepts(TriggerEvent::Click));
        assert!(!b.accepts(TriggerEvent::PointerEnter));
    }

    #[test]
    fn parse_names() {
        assert_eq!("contextMenu".parse::<TriggerMode>(), Ok(TriggerMode::ContextMenu));
        assert_eq!("hover".parse::<TriggerMode>(), Ok(TriggerMode::Hover));
        assert_eq!("manual".parse::<TriggerMode>(), Err(ParseTriggerModeError));
    }
}
