// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Every placement around one trigger, then clamped into a small viewport.
//!
//! Run:
//! - `cargo run -p understory_overlay_demos --example placement_basics`

use kurbo::{Rect, Size, Vec2};
use understory_placement::{Placement, Viewport, compute, place};

fn main() {
    let trigger = Rect::from_origin_size((100.0, 100.0), (50.0, 20.0));
    let overlay = Size::new(80.0, 30.0);

    println!("unclamped:");
    for p in Placement::ALL {
        let origin = place(trigger, overlay, p, Vec2::ZERO);
        println!("  {p:<12} -> ({:>6.1}, {:>6.1})", origin.x, origin.y);
    }

    // A 200x140 window: several placements collide and get pulled back inside.
    let viewport = Viewport::window(Size::new(200.0, 140.0), Vec2::ZERO);
    println!("clamped into {:?}:", viewport.visible_rect());
    for p in Placement::ALL {
        let origin = compute(trigger, overlay, p, Vec2::ZERO, &viewport);
        println!("  {p:<12} -> ({:>6.1}, {:>6.1})", origin.x, origin.y);
    }

    // Parsing accepts the camelCase names used in configuration.
    let parsed: Placement = "rightBottom".parse().unwrap();
    assert_eq!(parsed, Placement::RightBottom);
}
