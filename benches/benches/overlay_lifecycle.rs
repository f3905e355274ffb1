// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use understory_overlay::host::{Events, ListenerHost, ListenerTarget, Measurements, OverlayHost};
use understory_overlay::overlay::{Overlay, OverlayConfig};
use understory_overlay::trigger::{TriggerEvent, TriggerMode};
use understory_placement::Viewport;

struct Host;

impl ListenerHost for Host {
    fn listen(&mut self, _target: ListenerTarget, _event: Events) {}
    fn unlisten(&mut self, _target: ListenerTarget, _event: Events) {}
}

impl OverlayHost for Host {
    fn measure(&self) -> Option<Measurements> {
        Some(Measurements {
            trigger: Rect::from_origin_size((300.0, 200.0), (60.0, 24.0)),
            overlay: Size::new(160.0, 48.0),
            viewport: Viewport::window(Size::new(1280.0, 800.0), Vec2::ZERO),
        })
    }
}

fn bench_hover_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay");
    group.bench_function("hover_show_hide_cycle", |b| {
        b.iter_batched(
            || Overlay::bind(Host, OverlayConfig::default().delay_ms(100), 0),
            |mut tip| {
                let mut now = 0;
                for _ in 0..64 {
                    tip.handle_trigger(TriggerEvent::PointerEnter, now);
                    now += 100;
                    tip.advance(now);
                    tip.handle_trigger(TriggerEvent::PointerLeave, now);
                    now += 100;
                    tip.advance(now);
                }
                black_box(tip.drain_events());
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("pointer_move_while_visible", |b| {
        let mut tip = Overlay::bind(
            Host,
            OverlayConfig::default()
                .trigger(TriggerMode::Click)
                .follow_cursor(true),
            0,
        );
        tip.handle_trigger(TriggerEvent::Click, 0);
        let mut i = 0_u32;
        b.iter(|| {
            i = i.wrapping_add(1);
            let p = Point::new(300.0 + f64::from(i % 60), 200.0 + f64::from(i % 24));
            tip.pointer_moved(p, 1);
            black_box(tip.drain_events());
        })
    });
    group.finish();
}

criterion_group!(benches, bench_hover_cycle);
criterion_main!(benches);
