// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer controller: an edge-docked modal panel with a slide transition.
//!
//! ## Overview
//!
//! The owner controls `open`. The drawer sequences the slide transition through
//! [`Presence`] (mount, two animation frames, animate in; animate out, wait for the
//! transition, unmount), holds the page [`ScrollLock`] while open, and listens for
//! Escape. It never closes itself: mask clicks, the close button and Escape queue
//! [`DrawerEvent::CloseRequested`] and the owner decides.

use alloc::vec::Vec;

use kurbo::{Rect, Size, Vec2};

use crate::host::{Events, Key, ListenerHost, ListenerTarget};
use crate::listeners::ListenerSet;
use crate::presence::{Presence, PresenceEvent};
use crate::scroll_lock::{ScrollBackend, ScrollLock, ScrollLockGuard};

/// Animation frames between mount and sliding in.
pub const DRAWER_ENTER_FRAMES: u8 = 2;

/// Default slide transition duration in milliseconds.
pub const DRAWER_TRANSITION_MS: u64 = 300;

/// Viewport edge a drawer docks to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum DrawerPlacement {
    /// Docked to the top edge.
    Top,
    /// Docked to the right edge.
    #[default]
    Right,
    /// Docked to the bottom edge.
    Bottom,
    /// Docked to the left edge.
    Left,
}

impl DrawerPlacement {
    /// Whether the panel's size applies to its width (left/right docking).
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Panel extent along the docking axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum DrawerSize {
    /// 256px.
    Sm,
    /// 384px.
    #[default]
    Md,
    /// 736px.
    Lg,
    /// The whole viewport.
    Full,
}

impl DrawerSize {
    /// Extent in pixels, or `None` for [`DrawerSize::Full`].
    pub const fn extent(self) -> Option<f64> {
        match self {
            Self::Sm => Some(256.0),
            Self::Md => Some(384.0),
            Self::Lg => Some(736.0),
            Self::Full => None,
        }
    }
}

/// Drawer configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct DrawerConfig {
    /// Docking edge.
    pub placement: DrawerPlacement,
    /// Panel size.
    pub size: DrawerSize,
    /// Render a mask behind the panel.
    pub mask: bool,
    /// Clicking the mask requests close.
    pub mask_closable: bool,
    /// Show a close button.
    pub closable: bool,
    /// Stacking order of the panel; the mask sits one below.
    pub z_index: i32,
    /// Slide transition duration in milliseconds.
    pub transition_ms: u64,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            placement: DrawerPlacement::Right,
            size: DrawerSize::Md,
            mask: true,
            mask_closable: true,
            closable: true,
            z_index: 1000,
            transition_ms: DRAWER_TRANSITION_MS,
        }
    }
}

impl DrawerConfig {
    /// Set the docking edge.
    #[must_use]
    pub fn placement(mut self, placement: DrawerPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the panel size.
    #[must_use]
    pub fn size(mut self, size: DrawerSize) -> Self {
        self.size = size;
        self
    }

    /// Set whether a mask is rendered.
    #[must_use]
    pub fn mask(mut self, mask: bool) -> Self {
        self.mask = mask;
        self
    }

    /// Set whether clicking the mask requests close.
    #[must_use]
    pub fn mask_closable(mut self, closable: bool) -> Self {
        self.mask_closable = closable;
        self
    }

    /// Set whether the close button is shown.
    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Set the panel stacking order.
    #[must_use]
    pub fn z_index(mut self, z: i32) -> Self {
        self.z_index = z;
        self
    }

    /// Set the slide transition duration.
    #[must_use]
    pub fn transition_ms(mut self, ms: u64) -> Self {
        self.transition_ms = ms;
        self
    }
}

/// Output queued by a [`Drawer`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawerEvent {
    /// Mount the mask and panel.
    Mount,
    /// Slide in (`true`) or out (`false`).
    Animating(bool),
    /// Remove the mask and panel.
    Unmount,
    /// The user asked to close; the owner should set `open` to `false`.
    CloseRequested,
    /// `open` changed.
    AfterOpenChange(bool),
}

impl From<PresenceEvent> for DrawerEvent {
    fn from(e: PresenceEvent) -> Self {
        match e {
            PresenceEvent::Mount => Self::Mount,
            PresenceEvent::Animating(on) => Self::Animating(on),
            PresenceEvent::Unmount => Self::Unmount,
        }
    }
}

/// Panel rectangle for a drawer docked at `placement` inside `viewport`.
///
/// When `shown` is `false` the panel is translated fully past its edge, which is
/// where it slides in from and out to.
pub fn panel_rect(
    placement: DrawerPlacement,
    size: DrawerSize,
    viewport: Size,
    shown: bool,
) -> Rect {
    let full = Rect::from_origin_size((0.0, 0.0), viewport);
    let Some(extent) = size.extent() else {
        return if shown {
            full
        } else {
            full + slide_out(placement, viewport)
        };
    };
    let panel = match placement {
        DrawerPlacement::Top => {
            Rect::new(0.0, 0.0, viewport.width, extent.min(viewport.height))
        }
        DrawerPlacement::Bottom => Rect::new(
            0.0,
            viewport.height - extent.min(viewport.height),
            viewport.width,
            viewport.height,
        ),
        DrawerPlacement::Left => {
            Rect::new(0.0, 0.0, extent.min(viewport.width), viewport.height)
        }
        DrawerPlacement::Right => Rect::new(
            viewport.width - extent.min(viewport.width),
            0.0,
            viewport.width,
            viewport.height,
        ),
    };
    if shown {
        panel
    } else {
        panel + slide_out(placement, panel.size())
    }
}

fn slide_out(placement: DrawerPlacement, by: Size) -> Vec2 {
    match placement {
        DrawerPlacement::Top => Vec2::new(0.0, -by.height),
        DrawerPlacement::Bottom => Vec2::new(0.0, by.height),
        DrawerPlacement::Left => Vec2::new(-by.width, 0.0),
        DrawerPlacement::Right => Vec2::new(by.width, 0.0),
    }
}

/// Controller for one drawer.
pub struct Drawer<H: ListenerHost, B: ScrollBackend> {
    host: H,
    config: DrawerConfig,
    open: bool,
    presence: Presence,
    scroll_lock: ScrollLock<B>,
    guard: Option<ScrollLockGuard<B>>,
    listeners: ListenerSet,
    events: Vec<DrawerEvent>,
}

impl<H: ListenerHost, B: ScrollBackend> core::fmt::Debug for Drawer<H, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Drawer")
            .field("config", &self.config)
            .field("open", &self.open)
            .field("presence", &self.presence)
            .finish_non_exhaustive()
    }
}

impl<H: ListenerHost, B: ScrollBackend> Drawer<H, B> {
    /// Create a closed drawer sharing `scroll_lock` with other modal surfaces.
    pub fn new(host: H, scroll_lock: ScrollLock<B>, config: DrawerConfig) -> Self {
        Self {
            host,
            presence: Presence::new(DRAWER_ENTER_FRAMES, config.transition_ms),
            config,
            open: false,
            scroll_lock,
            guard: None,
            listeners: ListenerSet::new(),
            events: Vec::new(),
        }
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Current configuration.
    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    /// Whether the owner has the drawer open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the mask and panel are mounted (including while sliding out).
    pub fn is_rendered(&self) -> bool {
        self.presence.is_mounted()
    }

    /// Whether the panel is slid in.
    pub fn is_animating(&self) -> bool {
        self.presence.is_animating()
    }

    /// Pending unmount deadline, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.presence.next_deadline()
    }

    /// Stacking order for the mask, one below the panel.
    pub fn mask_z_index(&self) -> i32 {
        self.config.z_index.saturating_sub(1)
    }

    /// Current panel rectangle inside a viewport of `viewport` size.
    pub fn panel_rect(&self, viewport: Size) -> Rect {
        panel_rect(
            self.config.placement,
            self.config.size,
            viewport,
            self.is_animating(),
        )
    }

    /// Take the queued events.
    pub fn drain_events(&mut self) -> Vec<DrawerEvent> {
        core::mem::take(&mut self.events)
    }

    /// Open or close the drawer.
    pub fn set_open(&mut self, open: bool, now: u64) {
        if open == self.open {
            return;
        }
        self.open = open;
        if open {
            for e in self.presence.enter() {
                self.events.push(e.into());
            }
            self.listeners
                .attach(&mut self.host, ListenerTarget::Document, Events::KEY_DOWN);
            self.guard = Some(self.scroll_lock.acquire());
        } else {
            for e in self.presence.exit(now) {
                self.events.push(e.into());
            }
            self.listeners.detach_all(&mut self.host);
            self.guard = None;
        }
        self.events.push(DrawerEvent::AfterOpenChange(open));
        tracing::debug!(open, "drawer open changed");
    }

    /// An animation frame elapsed.
    pub fn frame(&mut self) {
        if let Some(e) = self.presence.frame() {
            self.events.push(e.into());
        }
    }

    /// Fire the unmount timer if it has expired.
    pub fn advance(&mut self, now: u64) {
        if let Some(e) = self.presence.advance(now) {
            self.events.push(e.into());
        }
    }

    /// A key was pressed while the Escape listener was attached.
    pub fn key_down(&mut self, key: Key) {
        if self.open && key == Key::Escape {
            self.events.push(DrawerEvent::CloseRequested);
        }
    }

    /// The mask was clicked.
    pub fn mask_clicked(&mut self) {
        if self.open && self.config.mask && self.config.mask_closable {
            self.events.push(DrawerEvent::CloseRequested);
        }
    }

    /// The close button was clicked.
    pub fn close_clicked(&mut self) {
        if self.open && self.config.closable {
            self.events.push(DrawerEvent::CloseRequested);
        }
    }
}

impl<H: ListenerHost, B: ScrollBackend> Drop for Drawer<H, B> {
    fn drop(&mut self) {
        self.listeners.detach_all(&mut self.host);
        self.guard = None;
        let _ = self.presence.cancel();
    }
}
