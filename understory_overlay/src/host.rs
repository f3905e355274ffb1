// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the engine and a toolkit: listener registration and live measurements.
//!
//! ## Overview
//!
//! The engine never touches a DOM or a window system directly. A host implements
//! [`ListenerHost`] (and [`OverlayHost`] for anchored overlays) and forwards the
//! native events it receives back into the engine.
//!
//! Every [`ListenerHost::listen`] call is matched by exactly one
//! [`ListenerHost::unlisten`] call with the same target and flag before the owning
//! controller is dropped. Each call carries exactly one [`Events`] flag.

use kurbo::{Rect, Size};
use understory_placement::Viewport;

bitflags::bitflags! {
    /// Native event kinds the engine may ask a host to listen for.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Events: u16 {
        /// Pointer enters the element.
        const POINTER_ENTER = 1 << 0;
        /// Pointer leaves the element.
        const POINTER_LEAVE = 1 << 1;
        /// Primary click.
        const CLICK         = 1 << 2;
        /// Element gains focus.
        const FOCUS         = 1 << 3;
        /// Element loses focus.
        const BLUR          = 1 << 4;
        /// Context menu request (usually a secondary click).
        const CONTEXT_MENU  = 1 << 5;
        /// Pointer moves anywhere in the document.
        const POINTER_MOVE  = 1 << 6;
        /// The viewport scrolls.
        const SCROLL        = 1 << 7;
        /// The viewport is resized.
        const RESIZE        = 1 << 8;
        /// A key is pressed.
        const KEY_DOWN      = 1 << 9;
    }
}

/// Element a listener is attached to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// The element that triggers the overlay.
    Trigger,
    /// The overlay body.
    Overlay,
    /// The document (or the toolkit's root input surface).
    Document,
    /// The window (or the scroll container designated as render container).
    Window,
}

impl ListenerTarget {
    /// All targets, in declaration order.
    pub const ALL: [Self; 4] = [Self::Trigger, Self::Overlay, Self::Document, Self::Window];
}

/// Attach and detach native listeners.
pub trait ListenerHost {
    /// Start delivering `event` (a single flag) from `target` to the engine.
    fn listen(&mut self, target: ListenerTarget, event: Events);
    /// Stop delivering `event` (a single flag) from `target`.
    fn unlisten(&mut self, target: ListenerTarget, event: Events);
}

/// Live geometry read when an overlay position is recomputed.
///
/// All values are in the render container's content space (see
/// [`Viewport::to_content`]).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Measurements {
    /// Trigger element bounding box.
    pub trigger: Rect,
    /// Rendered overlay size.
    pub overlay: Size,
    /// Window or custom render container.
    pub viewport: Viewport,
}

/// Host for anchored overlays: listeners plus measurement.
pub trait OverlayHost: ListenerHost {
    /// Measure the trigger, the overlay and the render container.
    ///
    /// Returns `None` when no rendering environment is available (for example
    /// during server-side rendering) or the elements are not mounted yet; positioning
    /// is skipped in that case.
    fn measure(&self) -> Option<Measurements>;

    /// Whether a render container exists to mount overlay content into.
    fn has_render_container(&self) -> bool {
        true
    }
}

/// Keys the engine reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The Escape key.
    Escape,
    /// Any other key.
    Other,
}

/// Where a document-level click landed, as classified by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClickTarget {
    /// Inside the trigger element.
    Trigger,
    /// Inside the overlay body.
    Overlay,
    /// Anywhere else.
    Outside,
}

/// What the host should do with the native event after the engine handled it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// Suppress the native default action (for example the browser context menu).
    pub prevent_default: bool,
    /// Stop the native event from propagating further.
    pub stop_propagation: bool,
}

impl EventResponse {
    /// Leave the native event alone.
    pub const IGNORED: Self = Self {
        prevent_default: false,
        stop_propagation: false,
    };
}
