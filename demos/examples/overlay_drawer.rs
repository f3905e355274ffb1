// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two stacked drawers sharing one page scroll lock.
//!
//! Run:
//! - `cargo run -p understory_overlay_demos --example overlay_drawer`

use kurbo::Size;
use understory_overlay::drawer::{Drawer, DrawerConfig, DrawerEvent, DrawerPlacement, DrawerSize};
use understory_overlay::host::{Events, Key, ListenerHost, ListenerTarget};
use understory_overlay::scroll_lock::{ScrollBackend, ScrollLock};

struct Quiet;

impl ListenerHost for Quiet {
    fn listen(&mut self, _target: ListenerTarget, _event: Events) {}
    fn unlisten(&mut self, _target: ListenerTarget, _event: Events) {}
}

struct Page {
    scroll_y: f64,
}

impl ScrollBackend for Page {
    fn scroll_offset(&self) -> f64 {
        self.scroll_y
    }
    fn lock(&mut self, saved: f64) {
        println!("  page locked at {saved}");
    }
    fn unlock(&mut self, restore: f64) {
        self.scroll_y = restore;
        println!("  page unlocked, scrolled back to {restore}");
    }
}

fn main() {
    let viewport = Size::new(1280.0, 800.0);
    let lock = ScrollLock::new(Page { scroll_y: 420.0 });

    let mut settings = Drawer::new(Quiet, lock.clone(), DrawerConfig::default());
    let mut filters = Drawer::new(
        Quiet,
        lock.clone(),
        DrawerConfig::default()
            .placement(DrawerPlacement::Left)
            .size(DrawerSize::Sm)
            .z_index(1100),
    );

    println!("open settings");
    settings.set_open(true, 0);
    settings.frame();
    settings.frame();
    print_events("settings", &mut settings);
    println!("  panel {:?}", settings.panel_rect(viewport));

    println!("open filters on top");
    filters.set_open(true, 10);
    filters.frame();
    filters.frame();
    print_events("filters", &mut filters);
    println!("  lock holders: {}", lock.holders());

    // Escape only asks; the owner closes.
    filters.key_down(Key::Escape);
    if filters.drain_events().contains(&DrawerEvent::CloseRequested) {
        println!("filters asked to close");
        filters.set_open(false, 20);
    }
    filters.advance(320);
    print_events("filters", &mut filters);

    println!("close settings");
    settings.set_open(false, 400);
    settings.advance(700);
    print_events("settings", &mut settings);
}

fn print_events<H: ListenerHost, B: ScrollBackend>(name: &str, d: &mut Drawer<H, B>) {
    for e in d.drain_events() {
        println!("  {name}: {e:?}");
    }
}
