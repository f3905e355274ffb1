// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_overlay --heading-base-level=0

//! Understory Overlay: a headless, `no_std` lifecycle engine for floating overlays.
//!
//! ## Overview
//!
//! Tooltips, popovers, context menus and drawers share the same bookkeeping: delayed
//! show and hide, trigger listeners that must be attached and removed in pairs, position
//! tracking while visible, and mount/unmount timing that waits for transitions.
//! This crate implements that bookkeeping without touching a DOM or window system.
//! Geometry comes from [`understory_placement`].
//!
//! ## Pieces
//!
//! - [`Overlay`](crate::overlay::Overlay): the lifecycle controller for an anchored
//!   overlay (`Hidden → PendingShow → Visible → PendingHide → Hidden`).
//! - [`TriggerBinding`](crate::trigger::TriggerBinding): which listeners a
//!   [`TriggerMode`](crate::trigger::TriggerMode) needs on the trigger element.
//! - [`Presence`](crate::presence::Presence): mount → animate → unmount sequencing.
//! - [`ScrollLock`](crate::scroll_lock::ScrollLock): reference-counted page scroll lock.
//! - [`Drawer`](crate::drawer::Drawer): an edge-docked modal panel built from the above.
//!
//! ## Hosts
//!
//! A toolkit implements [`ListenerHost`](crate::host::ListenerHost) and
//! [`OverlayHost`](crate::host::OverlayHost): attach and detach native listeners on
//! request, and measure the trigger, overlay and render container. It forwards native
//! events into the controller, passes a monotonic millisecond timestamp with each
//! input, and applies the queued events to its rendering layer.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect, Size, Vec2};
//! use understory_overlay::host::{Events, ListenerHost, ListenerTarget, Measurements, OverlayHost};
//! use understory_overlay::overlay::{Overlay, OverlayConfig, OverlayEvent, OverlayState};
//! use understory_overlay::trigger::TriggerEvent;
//! use understory_placement::Viewport;
//!
//! struct Host;
//!
//! impl ListenerHost for Host {
//!     fn listen(&mut self, _target: ListenerTarget, _event: Events) {}
//!     fn unlisten(&mut self, _target: ListenerTarget, _event: Events) {}
//! }
//!
//! impl OverlayHost for Host {
//!     fn measure(&self) -> Option<Measurements> {
//!         Some(Measurements {
//!             trigger: Rect::from_origin_size((100.0, 100.0), (50.0, 20.0)),
//!             overlay: Size::new(80.0, 30.0),
//!             viewport: Viewport::window(Size::new(1024.0, 768.0), Vec2::ZERO),
//!         })
//!     }
//! }
//!
//! let mut tip = Overlay::bind(Host, OverlayConfig::default().delay_ms(200), 0);
//! tip.handle_trigger(TriggerEvent::PointerEnter, 0);
//! assert_eq!(tip.state(), OverlayState::PendingShow);
//!
//! tip.advance(200);
//! assert_eq!(tip.state(), OverlayState::Visible);
//! assert_eq!(
//!     tip.drain_events(),
//!     vec![
//!         OverlayEvent::VisibleChange(true),
//!         OverlayEvent::Mount,
//!         OverlayEvent::Animating(true),
//!         OverlayEvent::Reposition(Point::new(85.0, 62.0)),
//!     ]
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod drawer;
pub mod host;
pub mod listeners;
pub mod overlay;
pub mod presence;
pub mod scroll_lock;
pub mod trigger;

mod timer;
