// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A hover tooltip driven by a scripted pointer and a fake clock.
//!
//! The host prints every listener change; the loop prints the queued events the
//! rendering layer would apply.
//!
//! Run:
//! - `cargo run -p understory_overlay_demos --example overlay_tooltip`

use kurbo::{Point, Rect, Size, Vec2};
use understory_overlay::host::{Events, ListenerHost, ListenerTarget, Measurements, OverlayHost};
use understory_overlay::overlay::{Overlay, OverlayConfig};
use understory_overlay::trigger::TriggerEvent;
use understory_placement::{Placement, Viewport};

struct PrintHost {
    viewport: Viewport,
}

impl ListenerHost for PrintHost {
    fn listen(&mut self, target: ListenerTarget, event: Events) {
        println!("    + {target:?} {event:?}");
    }
    fn unlisten(&mut self, target: ListenerTarget, event: Events) {
        println!("    - {target:?} {event:?}");
    }
}

impl OverlayHost for PrintHost {
    fn measure(&self) -> Option<Measurements> {
        Some(Measurements {
            trigger: Rect::from_origin_size((40.0, 20.0), (60.0, 24.0)),
            overlay: Size::new(120.0, 40.0),
            viewport: self.viewport,
        })
    }
}

enum Input {
    Enter,
    Leave,
    Move(Point),
}

fn main() {
    let host = PrintHost {
        viewport: Viewport::window(Size::new(640.0, 480.0), Vec2::ZERO),
    };
    let config = OverlayConfig::default()
        .placement(Placement::Top)
        .delay_ms(300)
        .transition_ms(150);

    println!("bind");
    let mut tip = Overlay::bind(host, config, 0);

    // The trigger sits near the top edge, so `top` is clamped down to the margin.
    let script = [
        (0, Input::Move(Point::new(60.0, 30.0))),
        (0, Input::Enter),
        (120, Input::Leave),
        (200, Input::Enter),
        (700, Input::Move(Point::new(300.0, 300.0))),
        (720, Input::Leave),
    ];

    for (now, input) in script {
        while let Some(deadline) = tip.next_deadline().filter(|d| *d <= now) {
            tip.advance(deadline);
            report(deadline, "timer", &mut tip);
        }
        let label = match input {
            Input::Enter => {
                tip.handle_trigger(TriggerEvent::PointerEnter, now);
                "enter"
            }
            Input::Leave => {
                tip.handle_trigger(TriggerEvent::PointerLeave, now);
                "leave"
            }
            Input::Move(p) => {
                tip.pointer_moved(p, now);
                "move"
            }
        };
        report(now, label, &mut tip);
    }
    while let Some(deadline) = tip.next_deadline() {
        tip.advance(deadline);
        report(deadline, "timer", &mut tip);
    }
}

fn report(now: u64, what: &str, tip: &mut Overlay<PrintHost>) {
    println!("t={now:>4} {what:<6} state={:?}", tip.state());
    for e in tip.drain_events() {
        println!("    -> {e:?}");
    }
}
