// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchored geometry: where an overlay goes for a given trigger and placement.
//!
//! Everything here is a pure function of its inputs. Rectangles are in the
//! viewport's content space (see [`Viewport::to_content`](crate::Viewport::to_content)).

use kurbo::{Point, Rect, Size, Vec2};

use crate::types::{Align, Placement, Side};

/// Distance between the overlay's facing edge and the trigger's edge.
pub const GAP: f64 = 8.0;

/// Compute the overlay origin (top-left corner) for `placement` around `trigger`.
///
/// The overlay is separated from the trigger by [`GAP`] on the placement's side and
/// aligned along the cross axis per [`Placement::align`]. `offset` is added last.
///
/// ```
/// use kurbo::{Point, Rect, Size, Vec2};
/// use understory_placement::{Placement, place};
///
/// let trigger = Rect::from_origin_size((100.0, 100.0), (50.0, 20.0));
/// let origin = place(trigger, Size::new(80.0, 30.0), Placement::Top, Vec2::ZERO);
/// assert_eq!(origin, Point::new(85.0, 62.0));
/// ```
pub fn place(trigger: Rect, overlay: Size, placement: Placement, offset: Vec2) -> Point {
    let align = placement.align();
    let origin = match placement.side() {
        Side::Top => Point::new(
            cross(trigger.x0, trigger.x1, overlay.width, align),
            trigger.y0 - overlay.height - GAP,
        ),
        Side::Bottom => Point::new(
            cross(trigger.x0, trigger.x1, overlay.width, align),
            trigger.y1 + GAP,
        ),
        Side::Left => Point::new(
            trigger.x0 - overlay.width - GAP,
            cross(trigger.y0, trigger.y1, overlay.height, align),
        ),
        Side::Right => Point::new(
            trigger.x1 + GAP,
            cross(trigger.y0, trigger.y1, overlay.height, align),
        ),
    };
    origin + offset
}

/// Overlay origin when following the pointer: [`GAP`] right of and below it.
pub fn place_at_cursor(cursor: Point) -> Point {
    cursor + Vec2::new(GAP, GAP)
}

fn cross(start: f64, end: f64, extent: f64, align: Align) -> f64 {
    match align {
        Align::Center => start + (end - start) / 2.0 - extent / 2.0,
        Align::Start => start,
        Align::End => end - extent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn overlay_rect(origin: Point, size: Size) -> Rect {
        Rect::from_origin_size(origin, size)
    }

    /// Signed distance between the overlay's facing edge and the trigger edge it faces.
    fn facing_gap(trigger: Rect, overlay: Rect, side: Side) -> f64 {
        match side {
            Side::Top => trigger.y0 - overlay.y1,
            Side::Bottom => overlay.y0 - trigger.y1,
            Side::Left => trigger.x0 - overlay.x1,
            Side::Right => overlay.x0 - trigger.x1,
        }
    }

    #[test]
    fn every_placement_leaves_the_gap() {
        let triggers = [
            Rect::from_origin_size((100.0, 100.0), (50.0, 20.0)),
            Rect::from_origin_size((0.0, 0.0), (1.0, 1.0)),
            Rect::from_origin_size((-30.5, 812.25), (333.0, 17.5)),
        ];
        let sizes = [Size::new(80.0, 30.0), Size::new(10.0, 200.0)];
        for trigger in triggers {
            for size in sizes {
                for p in Placement::ALL {
                    let o = overlay_rect(place(trigger, size, p, Vec2::ZERO), size);
                    let gap = facing_gap(trigger, o, p.side());
                    assert!((gap - GAP).abs() < EPS, "{p}: gap {gap} for {trigger:?}");
                }
            }
        }
    }

    #[test]
    fn base_placements_center_on_cross_axis() {
        let trigger = Rect::from_origin_size((100.0, 100.0), (50.0, 20.0));
        let size = Size::new(80.0, 30.0);
        for p in [Placement::Top, Placement::Bottom] {
            let o = overlay_rect(place(trigger, size, p, Vec2::ZERO), size);
            assert!((o.center().x - trigger.center().x).abs() < EPS, "{p}");
        }
        for p in [Placement::Left, Placement::Right] {
            let o = overlay_rect(place(trigger, size, p, Vec2::ZERO), size);
            assert!((o.center().y - trigger.center().y).abs() < EPS, "{p}");
        }
    }

    #[test]
    fn edge_variants_align_flush() {
        let trigger = Rect::from_origin_size((100.0, 100.0), (50.0, 20.0));
        let size = Size::new(80.0, 30.0);
        let at = |p| overlay_rect(place(trigger, size, p, Vec2::ZERO), size);

        assert_eq!(at(Placement::TopLeft).x0, trigger.x0);
        assert_eq!(at(Placement::BottomLeft).x0, trigger.x0);
        assert_eq!(at(Placement::TopRight).x1, trigger.x1);
        assert_eq!(at(Placement::BottomRight).x1, trigger.x1);
        assert_eq!(at(Placement::LeftTop).y0, trigger.y0);
        assert_eq!(at(Placement::RightTop).y0, trigger.y0);
        assert_eq!(at(Placement::LeftBottom).y1, trigger.y1);
        assert_eq!(at(Placement::RightBottom).y1, trigger.y1);
    }

    #[test]
    fn offset_applies_to_both_axes() {
        let trigger = Rect::from_origin_size((100.0, 100.0), (50.0, 20.0));
        let size = Size::new(80.0, 30.0);
        let offset = Vec2::new(4.0, -6.0);
        for p in Placement::ALL {
            let base = place(trigger, size, p, Vec2::ZERO);
            assert_eq!(place(trigger, size, p, offset), base + offset, "{p}");
        }
    }

    #[test]
    fn right_and_bottom_values() {
        let trigger = Rect::from_origin_size((100.0, 100.0), (50.0, 20.0));
        let size = Size::new(80.0, 30.0);
        assert_eq!(
            place(trigger, size, Placement::Bottom, Vec2::ZERO),
            Point::new(85.0, 128.0)
        );
        assert_eq!(
            place(trigger, size, Placement::Right, Vec2::ZERO),
            Point::new(158.0, 95.0)
        );
        assert_eq!(
            place(trigger, size, Placement::LeftBottom, Vec2::ZERO),
            Point::new(12.0, 90.0)
        );
    }

    #[test]
    fn cursor_placement() {
        assert_eq!(
            place_at_cursor(Point::new(10.0, 20.0)),
            Point::new(18.0, 28.0)
        );
    }
}
