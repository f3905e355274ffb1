// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size, Vec2};
use understory_placement::{Placement, Viewport, compute, place, resolve};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Triggers scattered across (and partly beyond) a 1920x1080 page.
fn gen_triggers(count: usize) -> Vec<Rect> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            let x0 = rng.next_f64() * 2000.0 - 40.0;
            let y0 = rng.next_f64() * 1160.0 - 40.0;
            let w = 20.0 + rng.next_f64() * 120.0;
            let h = 16.0 + rng.next_f64() * 32.0;
            Rect::from_origin_size((x0, y0), (w, h))
        })
        .collect()
}

fn bench_place(c: &mut Criterion) {
    let mut group = c.benchmark_group("place");
    let triggers = gen_triggers(1024);
    let overlay = Size::new(160.0, 48.0);
    group.throughput(Throughput::Elements(
        (triggers.len() * Placement::ALL.len()) as u64,
    ));
    group.bench_function("all_placements", |b| {
        b.iter(|| {
            for t in &triggers {
                for p in Placement::ALL {
                    black_box(place(*t, overlay, p, Vec2::new(0.0, 4.0)));
                }
            }
        })
    });
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let triggers = gen_triggers(1024);
    let overlay = Size::new(160.0, 48.0);
    for (name, viewport) in [
        (
            "window",
            Viewport::window(Size::new(1920.0, 1080.0), Vec2::new(0.0, 300.0)),
        ),
        (
            "container",
            Viewport::container(
                Rect::new(200.0, 100.0, 800.0, 500.0),
                Vec2::new(0.0, 1200.0),
            ),
        ),
    ] {
        group.throughput(Throughput::Elements(triggers.len() as u64));
        group.bench_function(format!("clamp_{name}"), |b| {
            b.iter(|| {
                for t in &triggers {
                    black_box(resolve(t.origin(), overlay, &viewport));
                }
            })
        });
        group.bench_function(format!("compute_top_{name}"), |b| {
            b.iter(|| {
                for t in &triggers {
                    let r = viewport.to_content(*t);
                    black_box(compute(r, overlay, Placement::Top, Vec2::ZERO, &viewport));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_place, bench_resolve);
criterion_main!(benches);
