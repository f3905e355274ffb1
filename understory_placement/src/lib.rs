// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_placement --heading-base-level=0

//! Understory Placement: Kurbo-native geometry for floating overlays.
//!
//! Tooltips, popovers and context menus all need the same two steps:
//!
//! 1) [`place`]: attach the overlay to one of the twelve [`Placement`]s around a trigger
//!    rectangle, leaving a [`GAP`] between the facing edges.
//! 2) [`resolve`]: translate the result so the overlay stays inside a [`Viewport`]
//!    (the window or a scroll container), keeping [`VIEWPORT_MARGIN`] from each edge.
//!
//! [`compute`] runs both.
//!
//! ## Coordinate spaces
//!
//! All rectangles and points are in the viewport's content space, where the visible
//! region spans `scroll .. scroll + size`. Bounding boxes read from live elements are
//! usually in client space; convert them with [`Viewport::to_content`].
//!
//! ## Not a layout engine
//!
//! Overlay sizes are inputs. This crate does not measure content, and it never flips
//! a placement to the opposite side when space runs out; it only translates.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Point, Rect, Size, Vec2};
//! use understory_placement::{Placement, Viewport, compute};
//!
//! let trigger = Rect::from_origin_size((100.0, 100.0), (50.0, 20.0));
//! let viewport = Viewport::window(Size::new(1024.0, 768.0), Vec2::ZERO);
//!
//! let origin = compute(
//!     trigger,
//!     Size::new(80.0, 30.0),
//!     "top".parse::<Placement>().unwrap(),
//!     Vec2::ZERO,
//!     &viewport,
//! );
//! assert_eq!(origin, Point::new(85.0, 62.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod collision;
mod geometry;
mod types;

pub use collision::{VIEWPORT_MARGIN, fits, resolve};
pub use geometry::{GAP, place, place_at_cursor};
pub use types::{Align, ParsePlacementError, Placement, Side, Viewport};

use kurbo::{Point, Rect, Size, Vec2};

/// [`place`] the overlay around `trigger`, then [`resolve`] it into `viewport`.
pub fn compute(
    trigger: Rect,
    overlay: Size,
    placement: Placement,
    offset: Vec2,
    viewport: &Viewport,
) -> Point {
    resolve(place(trigger, overlay, placement, offset), overlay, viewport)
}
