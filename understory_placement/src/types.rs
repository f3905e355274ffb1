// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for placement: the twelve compass placements, their side/alignment
//! decomposition, and the viewport an overlay is clamped into.

use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect, Size, Vec2};

/// Where an overlay sits relative to its trigger.
///
/// The first word names the [`Side`] of the trigger the overlay is attached to.
/// The optional second word names the trigger edge the overlay aligns flush with;
/// without it the overlay is centered along that edge.
///
/// Parses from (and displays as) the camelCase names used by web toolkits,
/// for example `"topLeft"` or `"rightBottom"`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Placement {
    /// Above the trigger, horizontally centered.
    #[default]
    Top,
    /// Above the trigger, left edges aligned.
    TopLeft,
    /// Above the trigger, right edges aligned.
    TopRight,
    /// Below the trigger, horizontally centered.
    Bottom,
    /// Below the trigger, left edges aligned.
    BottomLeft,
    /// Below the trigger, right edges aligned.
    BottomRight,
    /// Left of the trigger, vertically centered.
    Left,
    /// Left of the trigger, top edges aligned.
    LeftTop,
    /// Left of the trigger, bottom edges aligned.
    LeftBottom,
    /// Right of the trigger, vertically centered.
    Right,
    /// Right of the trigger, top edges aligned.
    RightTop,
    /// Right of the trigger, bottom edges aligned.
    RightBottom,
}

/// The trigger side an overlay is attached to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Overlay sits above the trigger.
    Top,
    /// Overlay sits below the trigger.
    Bottom,
    /// Overlay sits left of the trigger.
    Left,
    /// Overlay sits right of the trigger.
    Right,
}

impl Side {
    /// Returns `true` for [`Side::Top`] and [`Side::Bottom`].
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Alignment along the axis perpendicular to the [`Side`].
///
/// `Start` is the left edge for vertical sides and the top edge for horizontal sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Align {
    /// Centered on the trigger.
    Center,
    /// Flush with the trigger's left (or top) edge.
    Start,
    /// Flush with the trigger's right (or bottom) edge.
    End,
}

impl Placement {
    /// All twelve placements, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Top,
        Self::TopLeft,
        Self::TopRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::BottomRight,
        Self::Left,
        Self::LeftTop,
        Self::LeftBottom,
        Self::Right,
        Self::RightTop,
        Self::RightBottom,
    ];

    /// The trigger side this placement attaches to.
    pub const fn side(self) -> Side {
        match self {
            Self::Top | Self::TopLeft | Self::TopRight => Side::Top,
            Self::Bottom | Self::BottomLeft | Self::BottomRight => Side::Bottom,
            Self::Left | Self::LeftTop | Self::LeftBottom => Side::Left,
            Self::Right | Self::RightTop | Self::RightBottom => Side::Right,
        }
    }

    /// Alignment along the cross axis.
    pub const fn align(self) -> Align {
        match self {
            Self::Top | Self::Bottom | Self::Left | Self::Right => Align::Center,
            Self::TopLeft | Self::BottomLeft | Self::LeftTop | Self::RightTop => Align::Start,
            Self::TopRight | Self::BottomRight | Self::LeftBottom | Self::RightBottom => {
                Align::End
            }
        }
    }

    /// The camelCase name of this placement.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::TopLeft => "topLeft",
            Self::TopRight => "topRight",
            Self::Bottom => "bottom",
            Self::BottomLeft => "bottomLeft",
            Self::BottomRight => "bottomRight",
            Self::Left => "left",
            Self::LeftTop => "leftTop",
            Self::LeftBottom => "leftBottom",
            Self::Right => "right",
            Self::RightTop => "rightTop",
            Self::RightBottom => "rightBottom",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when a string does not name one of the twelve placements.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unsupported placement name")]
pub struct ParsePlacementError;

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or(ParsePlacementError)
    }
}

/// The visible region an overlay is kept inside.
///
/// Describes either the window or a designated scroll container:
/// - `size` is the visible extent (`width`, `height`),
/// - `scroll` is the scroll offset (`scrollLeft`, `scrollTop`),
/// - `origin` is where the viewport's top-left corner sits in client space
///   (zero for the window, the container's bounding box origin otherwise).
///
/// Overlay positions are expressed in the viewport's content space, where the
/// visible region spans `scroll .. scroll + size`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Visible extent.
    pub size: Size,
    /// Scroll offset of the content.
    pub scroll: Vec2,
    /// Client-space origin of the visible region.
    pub origin: Point,
}

impl Viewport {
    /// A window viewport with the given inner size and page scroll offset.
    pub fn window(inner_size: Size, page_offset: Vec2) -> Self {
        Self {
            size: inner_size,
            scroll: page_offset,
            origin: Point::ZERO,
        }
    }

    /// A scroll container viewport from its client-space bounding box and scroll offset.
    pub fn container(bounds: Rect, scroll: Vec2) -> Self {
        Self {
            size: bounds.size(),
            scroll,
            origin: bounds.origin(),
        }
    }

    /// The visible region in content space.
    pub fn visible_rect(&self) -> Rect {
        Rect::from_origin_size(self.scroll.to_point(), self.size)
    }

    /// Convert a client-space bounding box (as read from a live element) to content space.
    pub fn to_content(&self, client: Rect) -> Rect {
        client - self.origin.to_vec2() + self.scroll
    }

    /// Convert a client-space point (for example a pointer position) to content space.
    pub fn point_to_content(&self, client: Point) -> Point {
        client - self.origin.to_vec2() + self.scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_and_align_decomposition() {
        assert_eq!(Placement::Top.side(), Side::Top);
        assert_eq!(Placement::Top.align(), Align::Center);
        assert_eq!(Placement::TopLeft.align(), Align::Start);
        assert_eq!(Placement::TopRight.align(), Align::End);
        assert_eq!(Placement::LeftTop.side(), Side::Left);
        assert_eq!(Placement::LeftTop.align(), Align::Start);
        assert_eq!(Placement::RightBottom.side(), Side::Right);
        assert_eq!(Placement::RightBottom.align(), Align::End);
        assert!(Placement::BottomLeft.side().is_vertical());
        assert!(!Placement::Right.side().is_vertical());
    }

    #[test]
    fn names_parse_back() {
        for p in Placement::ALL {
            assert_eq!(p.as_str().parse::<Placement>(), Ok(p), "placement {p}");
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!("center".parse::<Placement>(), Err(ParsePlacementError));
        // Names are case sensitive, matching the web API.
        assert_eq!("TopLeft".parse::<Placement>(), Err(ParsePlacementError));
    }

    #[test]
    fn container_conversion_subtracts_origin_and_adds_scroll() {
        let vp = Viewport::container(
            Rect::new(50.0, 40.0, 450.0, 340.0),
            Vec2::new(0.0, 120.0),
        );
        assert_eq!(vp.size, Size::new(400.0, 300.0));
        let client = Rect::new(60.0, 50.0, 110.0, 70.0);
        assert_eq!(vp.to_content(client), Rect::new(10.0, 130.0, 60.0, 150.0));
        assert_eq!(
            vp.point_to_content(Point::new(50.0, 40.0)),
            Point::new(0.0, 120.0)
        );
        assert_eq!(vp.visible_rect(), Rect::new(0.0, 120.0, 400.0, 420.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_camel_case_names() {
        let json = serde_json::to_string(&Placement::BottomRight).unwrap();
        assert_eq!(json, "\"bottomRight\"");
        let p: Placement = serde_json::from_str("\"leftTop\"").unwrap();
        assert_eq!(p, Placement::LeftTop);
    }
}
