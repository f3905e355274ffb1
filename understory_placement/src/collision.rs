// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport collision: translate a candidate position so the overlay stays visible.
//!
//! The resolver only translates. It never switches to the opposite placement when
//! there is not enough room; an overlay that does not fit is pinned to the start
//! edge (left or top) of the viewport instead.

use kurbo::{Point, Size};

use crate::types::Viewport;

/// Minimum distance kept between the overlay and each viewport edge.
pub const VIEWPORT_MARGIN: f64 = 8.0;

/// Clamp `candidate` (overlay origin) so an overlay of `overlay` size lies inside
/// `viewport`, inset by [`VIEWPORT_MARGIN`] on every edge.
///
/// When the overlay is larger than the inset viewport on an axis, the start edge
/// wins: the origin is placed at `scroll + VIEWPORT_MARGIN`.
///
/// ```
/// use kurbo::{Point, Size, Vec2};
/// use understory_placement::{Viewport, resolve};
///
/// let vp = Viewport::window(Size::new(300.0, 200.0), Vec2::ZERO);
/// let p = resolve(Point::new(-40.0, 190.0), Size::new(80.0, 30.0), &vp);
/// assert_eq!(p, Point::new(8.0, 162.0));
/// ```
pub fn resolve(candidate: Point, overlay: Size, viewport: &Viewport) -> Point {
    Point::new(
        clamp_axis(
            candidate.x,
            overlay.width,
            viewport.scroll.x,
            viewport.size.width,
        ),
        clamp_axis(
            candidate.y,
            overlay.height,
            viewport.scroll.y,
            viewport.size.height,
        ),
    )
}

/// Returns `true` when an overlay of this size fits inside the inset viewport.
pub fn fits(overlay: Size, viewport: &Viewport) -> bool {
    overlay.width <= viewport.size.width - 2.0 * VIEWPORT_MARGIN
        && overlay.height <= viewport.size.height - 2.0 * VIEWPORT_MARGIN
}

fn clamp_axis(pos: f64, extent: f64, scroll: f64, span: f64) -> f64 {
    let min = scroll + VIEWPORT_MARGIN;
    let max = scroll + span - extent - VIEWPORT_MARGIN;
    // `min` may exceed `max`; apply the upper bound first so the lower one wins.
    pos.min(max).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Rect, Vec2};

    fn inside(o: Rect, vp: &Viewport) -> bool {
        let v = vp.visible_rect();
        o.x0 >= v.x0 + VIEWPORT_MARGIN
            && o.x1 <= v.x1 - VIEWPORT_MARGIN
            && o.y0 >= v.y0 + VIEWPORT_MARGIN
            && o.y1 <= v.y1 - VIEWPORT_MARGIN
    }

    #[test]
    fn in_bounds_candidate_is_untouched() {
        let vp = Viewport::window(Size::new(800.0, 600.0), Vec2::ZERO);
        let p = Point::new(85.0, 62.0);
        assert_eq!(resolve(p, Size::new(80.0, 30.0), &vp), p);
    }

    #[test]
    fn clamped_output_stays_inside_for_fitting_overlays() {
        let viewports = [
            Viewport::window(Size::new(800.0, 600.0), Vec2::ZERO),
            Viewport::window(Size::new(320.0, 480.0), Vec2::new(0.0, 1200.0)),
            Viewport::window(Size::new(120.0, 60.0), Vec2::new(37.5, 12.0)),
        ];
        let size = Size::new(80.0, 30.0);
        for vp in &viewports {
            assert!(fits(size, vp));
            for x in [-1000.0, -8.0, 0.0, 50.0, 790.0, 5000.0] {
                for y in [-1000.0, 0.0, 7.9, 300.0, 1700.0, 9000.0] {
                    let p = resolve(Point::new(x, y), size, vp);
                    let o = Rect::from_origin_size(p, size);
                    assert!(inside(o, vp), "({x}, {y}) -> {p:?} in {vp:?}");
                }
            }
        }
    }

    #[test]
    fn scrolled_viewport_offsets_bounds() {
        let vp = Viewport::window(Size::new(400.0, 300.0), Vec2::new(100.0, 500.0));
        let p = resolve(Point::new(0.0, 0.0), Size::new(50.0, 50.0), &vp);
        assert_eq!(p, Point::new(108.0, 508.0));
        let p = resolve(Point::new(1000.0, 1000.0), Size::new(50.0, 50.0), &vp);
        assert_eq!(p, Point::new(442.0, 742.0));
    }

    #[test]
    fn oversized_overlay_pins_start_edge() {
        let vp = Viewport::window(Size::new(100.0, 100.0), Vec2::new(0.0, 40.0));
        let big = Size::new(300.0, 250.0);
        assert!(!fits(big, &vp));
        for candidate in [Point::new(-50.0, -50.0), Point::new(500.0, 500.0)] {
            assert_eq!(resolve(candidate, big, &vp), Point::new(8.0, 48.0));
        }
    }

    #[test]
    fn container_viewport_uses_container_scroll() {
        let vp = Viewport::container(Rect::new(200.0, 100.0, 500.0, 400.0), Vec2::new(0.0, 60.0));
        let p = resolve(Point::new(290.0, 0.0), Size::new(40.0, 20.0), &vp);
        assert_eq!(p, Point::new(252.0, 68.0));
    }
}
