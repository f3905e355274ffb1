// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay lifecycle controller for tooltips, popovers and context menus.
//!
//! ## State machine
//!
//! ```text
//! Hidden ──show──▶ PendingShow ──delay──▶ Visible ──hide──▶ PendingHide ──hide delay──▶ Hidden
//!    ▲                  │                    ▲                    │
//!    └──────hide────────┘                    └───────show─────────┘
//! ```
//!
//! Zero delays skip the pending states. `show` always cancels a pending hide and
//! `hide` always cancels a pending show, so at most one timer is armed at a time.
//! A show that is cancelled before its delay elapses goes straight back to `Hidden`
//! without the overlay ever becoming visible.
//!
//! ## Time
//!
//! Every input takes `now`, a monotonic timestamp in milliseconds supplied by the host.
//! Timers only fire from [`Overlay::advance`]; hosts call it from their timer or frame
//! callback, using [`Overlay::next_deadline`] to know when.
//!
//! ## Controlled visibility
//!
//! With [`OverlayConfig::visible`] set (or [`Overlay::set_controlled`]), the state
//! mirrors the supplied flag. `show`/`hide` then only queue
//! [`OverlayEvent::VisibleChange`] requests for the owner to act on.
//!
//! ## Teardown
//!
//! [`Overlay::teardown`] (also run on drop) cancels every timer and detaches every
//! listener. Nothing is emitted or scheduled afterwards.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Vec2};
use understory_placement::{Placement, place, place_at_cursor, resolve};

use crate::host::{ClickTarget, EventResponse, Events, Key, ListenerTarget, OverlayHost};
use crate::listeners::ListenerSet;
use crate::presence::{Presence, PresenceEvent};
use crate::timer::Timer;
use crate::trigger::{TriggerBinding, TriggerEvent, TriggerMode};

/// Lower bound on the hide delay after the pointer leaves the trigger, so the
/// pointer can cross the gap between trigger and overlay.
pub const MIN_POINTER_LEAVE_DELAY_MS: u64 = 100;

/// Visibility state of an overlay.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    /// Not shown.
    #[default]
    Hidden,
    /// Show delay running.
    PendingShow,
    /// Shown.
    Visible,
    /// Shown, hide delay running.
    PendingHide,
}

impl OverlayState {
    /// Whether the overlay is currently shown (`Visible` or `PendingHide`).
    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Visible | Self::PendingHide)
    }
}

/// Why a hide was requested.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HideCause {
    /// Pointer left the trigger (or an interactive overlay body).
    PointerLeave,
    /// Trigger lost focus.
    Blur,
    /// Trigger clicked while shown.
    Toggle,
    /// Click landed outside trigger and overlay.
    OutsideClick,
    /// Escape pressed.
    Escape,
    /// Requested by the owner through [`Overlay::hide`].
    Api,
}

impl HideCause {
    /// Pointer-driven hides re-check pointer residency when their delay expires.
    pub const fn checks_residency(self) -> bool {
        matches!(self, Self::PointerLeave)
    }
}

/// Output queued by an [`Overlay`], drained with [`Overlay::drain_events`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum OverlayEvent {
    /// Visibility changed (uncontrolled) or should change (controlled).
    VisibleChange(bool),
    /// Mount the overlay content into the render container.
    Mount,
    /// Remove the overlay content.
    Unmount,
    /// Switch the open transition styles on or off.
    Animating(bool),
    /// Move the overlay origin (content space).
    Reposition(Point),
}

impl From<PresenceEvent> for OverlayEvent {
    fn from(e: PresenceEvent) -> Self {
        match e {
            PresenceEvent::Mount => Self::Mount,
            PresenceEvent::Animating(on) => Self::Animating(on),
            PresenceEvent::Unmount => Self::Unmount,
        }
    }
}

/// Per-overlay configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct OverlayConfig {
    /// Placement around the trigger.
    pub placement: Placement,
    /// Interaction that opens the overlay.
    pub trigger: TriggerMode,
    /// Show delay in milliseconds.
    pub delay_ms: u64,
    /// Hide delay in milliseconds (at least [`MIN_POINTER_LEAVE_DELAY_MS`] after pointer leave).
    pub hide_delay_ms: u64,
    /// Offset added to the computed position.
    pub offset: Vec2,
    /// Disabled overlays never show.
    pub disabled: bool,
    /// Interactive overlays keep themselves open while the pointer is over their body.
    pub interactive: bool,
    /// Controlled visibility; `None` lets the controller own it.
    pub visible: Option<bool>,
    /// Initial visibility when uncontrolled.
    pub default_visible: bool,
    /// Place the overlay next to the pointer instead of the trigger.
    pub follow_cursor: bool,
    /// Exit transition duration; content stays mounted this long after hiding.
    pub transition_ms: u64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            placement: Placement::Top,
            trigger: TriggerMode::Hover,
            delay_ms: 0,
            hide_delay_ms: 0,
            offset: Vec2::ZERO,
            disabled: false,
            interactive: false,
            visible: None,
            default_visible: false,
            follow_cursor: false,
            transition_ms: 0,
        }
    }
}

impl OverlayConfig {
    /// Set the placement.
    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the trigger mode.
    #[must_use]
    pub fn trigger(mut self, trigger: TriggerMode) -> Self {
        self.trigger = trigger;
        self
    }

    /// Set the show delay.
    #[must_use]
    pub fn delay_ms(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }

    /// Set the hide delay.
    #[must_use]
    pub fn hide_delay_ms(mut self, ms: u64) -> Self {
        self.hide_delay_ms = ms;
        self
    }

    /// Set the position offset.
    #[must_use]
    pub fn offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Set whether the overlay is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether the overlay body is interactive.
    #[must_use]
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Control visibility externally.
    #[must_use]
    pub fn visible(mut self, visible: Option<bool>) -> Self {
        self.visible = visible;
        self
    }

    /// Set the initial visibility when uncontrolled.
    #[must_use]
    pub fn default_visible(mut self, visible: bool) -> Self {
        self.default_visible = visible;
        self
    }

    /// Follow the pointer.
    #[must_use]
    pub fn follow_cursor(mut self, follow: bool) -> Self {
        self.follow_cursor = follow;
        self
    }

    /// Set the exit transition duration.
    #[must_use]
    pub fn transition_ms(mut self, ms: u64) -> Self {
        self.transition_ms = ms;
        self
    }
}

/// Lifecycle controller for one anchored overlay.
///
/// ## Usage
///
/// - Construct with [`Overlay::bind`]; trigger listeners are attached right away.
/// - Forward native events: [`Overlay::handle_trigger`] for trigger events,
///   [`Overlay::pointer_moved`], [`Overlay::scrolled`], [`Overlay::resized`],
///   [`Overlay::document_clicked`] and [`Overlay::key_down`] for global ones, and
///   [`Overlay::overlay_pointer_entered`]/[`Overlay::overlay_pointer_left`] for the body.
/// - After applying [`OverlayEvent::Mount`] (once the overlay can be measured), call
///   [`Overlay::update_position`].
/// - Call [`Overlay::advance`] when [`Overlay::next_deadline`] passes.
/// - Apply [`Overlay::drain_events`] to the rendering layer.
///
/// Misuse (showing a disabled or empty overlay, events for unbound listeners, input
/// after teardown) is ignored.
pub struct Overlay<H: OverlayHost> {
    host: H,
    config: OverlayConfig,
    state: OverlayState,
    has_content: bool,
    torn_down: bool,
    show_timer: Timer,
    hide_timer: Timer<HideCause>,
    presence: Presence,
    trigger: TriggerBinding,
    globals: ListenerSet,
    pointer: Option<Point>,
    position: Option<Point>,
    events: Vec<OverlayEvent>,
}

impl<H: OverlayHost> core::fmt::Debug for Overlay<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Overlay")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("position", &self.position)
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}

impl<H: OverlayHost> Overlay<H> {
    /// Bind an overlay to `host`, attaching the trigger listeners for `config.trigger`.
    ///
    /// Starts visible when `config.visible` is `Some(true)`, or when uncontrolled with
    /// `config.default_visible`. Neither emits a `VisibleChange`.
    pub fn bind(host: H, config: OverlayConfig, now: u64) -> Self {
        let mut this = Self {
            host,
            trigger: TriggerBinding::new(config.trigger),
            presence: Presence::new(0, config.transition_ms),
            config,
            state: OverlayState::Hidden,
            has_content: true,
            torn_down: false,
            show_timer: Timer::new(),
            hide_timer: Timer::new(),
            globals: ListenerSet::new(),
            pointer: None,
            position: None,
            events: Vec::new(),
        };
        this.trigger.bind(&mut this.host);
        if this.config.visible.is_some() {
            this.sync_controlled(now);
        } else if this.config.default_visible && this.can_show() {
            this.enter_visible(false);
        }
        this
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, for example to update what it measures.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Current configuration.
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Whether the overlay counts as visible: the controlled flag when controlled,
    /// otherwise `Visible` or `PendingHide`.
    ///
    /// A controlled `Some(true)` still reads `false` while the overlay cannot show
    /// (disabled, no content, no render container, torn down).
    pub fn is_visible(&self) -> bool {
        match self.config.visible {
            Some(visible) => visible && self.can_show(),
            None => self.state.is_shown(),
        }
    }

    /// Whether overlay content is mounted (including during the exit transition).
    pub fn is_mounted(&self) -> bool {
        self.presence.is_mounted()
    }

    /// Whether the open transition styles are applied.
    pub fn is_animating(&self) -> bool {
        self.presence.is_animating()
    }

    /// Resolved overlay origin while shown.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Whether [`Overlay::teardown`] has run.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Listeners currently attached to `target`.
    pub fn listeners(&self, target: ListenerTarget) -> Events {
        match target {
            ListenerTarget::Trigger => self.trigger.attached(),
            _ => self.globals.attached(target),
        }
    }

    /// Earliest pending timer deadline, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        [
            self.show_timer.deadline(),
            self.hide_timer.deadline(),
            self.presence.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Take the queued events.
    pub fn drain_events(&mut self) -> Vec<OverlayEvent> {
        core::mem::take(&mut self.events)
    }

    /// Request the overlay to show, after the configured delay.
    pub fn show(&mut self, now: u64) {
        if !self.can_show() {
            tracing::trace!("show ignored: overlay cannot show");
            return;
        }
        if self.config.visible.is_some() {
            self.events.push(OverlayEvent::VisibleChange(true));
            return;
        }
        self.hide_timer.cancel();
        match self.state {
            OverlayState::Visible | OverlayState::PendingShow => {}
            OverlayState::PendingHide => {
                self.state = OverlayState::Visible;
                tracing::trace!("pending hide cancelled by show");
            }
            OverlayState::Hidden if self.config.delay_ms == 0 => self.enter_visible(true),
            OverlayState::Hidden => {
                self.show_timer.arm(now, self.config.delay_ms, ());
                self.state = OverlayState::PendingShow;
                tracing::trace!(delay_ms = self.config.delay_ms, "show scheduled");
            }
        }
    }

    /// Request the overlay to hide, after the configured hide delay.
    pub fn hide(&mut self, now: u64, cause: HideCause) {
        if self.torn_down {
            return;
        }
        if self.config.visible.is_some() {
            self.events.push(OverlayEvent::VisibleChange(false));
            return;
        }
        match self.state {
            OverlayState::Hidden => {}
            OverlayState::PendingShow => {
                self.show_timer.cancel();
                self.state = OverlayState::Hidden;
                tracing::trace!(?cause, "pending show cancelled by hide");
            }
            OverlayState::Visible | OverlayState::PendingHide => {
                let delay = self.hide_delay_for(cause);
                if delay == 0 {
                    self.leave_visible(now, true);
                } else if self.state == OverlayState::Visible || !cause.checks_residency() {
                    // A repeated pointer-leave keeps the deadline already running.
                    self.hide_timer.arm(now, delay, cause);
                    self.state = OverlayState::PendingHide;
                    tracing::trace!(?cause, delay_ms = delay, "hide scheduled");
                }
            }
        }
    }

    /// Fire expired timers.
    pub fn advance(&mut self, now: u64) {
        if self.torn_down {
            return;
        }
        if self.show_timer.fire(now).is_some() {
            self.enter_visible(true);
        }
        if let Some(cause) = self.hide_timer.fire(now) {
            if cause.checks_residency() && self.pointer_resident() {
                self.state = OverlayState::Visible;
                tracing::trace!("hide aborted: pointer over trigger or overlay");
            } else {
                self.leave_visible(now, true);
            }
        }
        if let Some(e) = self.presence.advance(now) {
            self.events.push(e.into());
        }
    }

    /// Handle a native event from the trigger element.
    pub fn handle_trigger(&mut self, event: TriggerEvent, now: u64) -> EventResponse {
        if self.torn_down || !self.trigger.accepts(event) {
            return EventResponse::IGNORED;
        }
        match event {
            TriggerEvent::PointerEnter | TriggerEvent::Focus => {
                self.show(now);
                EventResponse::IGNORED
            }
            TriggerEvent::PointerLeave => {
                self.hide(now, HideCause::PointerLeave);
                EventResponse::IGNORED
            }
            TriggerEvent::Blur => {
                self.hide(now, HideCause::Blur);
                EventResponse::IGNORED
            }
            TriggerEvent::Click => {
                if self.is_visible() {
                    self.hide(now, HideCause::Toggle);
                } else {
                    self.show(now);
                }
                EventResponse {
                    prevent_default: true,
                    stop_propagation: true,
                }
            }
            TriggerEvent::ContextMenu => {
                self.show(now);
                EventResponse {
                    prevent_default: true,
                    stop_propagation: false,
                }
            }
        }
    }

    /// The pointer moved to `point` (content space).
    pub fn pointer_moved(&mut self, point: Point, now: u64) {
        if self.torn_down {
            return;
        }
        self.pointer = Some(point);
        if !self.state.is_shown() {
            return;
        }
        self.reposition();
        if self.trigger.mode() == TriggerMode::Hover
            && self.config.visible.is_none()
            && self.state == OverlayState::Visible
            && !self.pointer_resident()
        {
            self.hide(now, HideCause::PointerLeave);
        }
    }

    /// Recompute the position from fresh measurements.
    ///
    /// The position is computed when the overlay becomes visible, but the overlay
    /// size is usually unknown until the host has mounted it; hosts call this after
    /// applying [`OverlayEvent::Mount`]. Ignored while hidden.
    pub fn update_position(&mut self) {
        if !self.torn_down && self.state.is_shown() {
            self.reposition();
        }
    }

    /// The viewport scrolled.
    pub fn scrolled(&mut self, _now: u64) {
        if !self.torn_down && self.state.is_shown() {
            self.reposition();
        }
    }

    /// The viewport was resized.
    pub fn resized(&mut self, _now: u64) {
        if !self.torn_down && self.state.is_shown() {
            self.reposition();
        }
    }

    /// A click landed somewhere in the document.
    pub fn document_clicked(&mut self, target: ClickTarget, now: u64) {
        if self.torn_down
            || target != ClickTarget::Outside
            || !self
                .globals
                .attached(ListenerTarget::Document)
                .contains(Events::CLICK)
        {
            return;
        }
        self.hide(now, HideCause::OutsideClick);
    }

    /// A key was pressed.
    pub fn key_down(&mut self, key: Key, now: u64) {
        if !self.torn_down && key == Key::Escape && self.is_visible() {
            self.hide(now, HideCause::Escape);
        }
    }

    /// The pointer entered the overlay body.
    pub fn overlay_pointer_entered(&mut self, _now: u64) {
        if self.torn_down || !self.config.interactive {
            return;
        }
        // Only a pointer-leave hide is undone; dismissals stand.
        let pointer_hide = self
            .hide_timer
            .payload()
            .is_some_and(HideCause::checks_residency);
        if self.state == OverlayState::PendingHide && pointer_hide {
            self.hide_timer.cancel();
            self.state = OverlayState::Visible;
            tracing::trace!("pending hide cancelled: pointer entered overlay");
        }
    }

    /// The pointer left the overlay body.
    pub fn overlay_pointer_left(&mut self, now: u64) {
        if !self.torn_down && self.config.interactive && self.trigger.mode() == TriggerMode::Hover
        {
            self.hide(now, HideCause::PointerLeave);
        }
    }

    /// Switch trigger mode, rebinding every trigger listener.
    pub fn set_trigger(&mut self, mode: TriggerMode) {
        if self.torn_down || mode == self.trigger.mode() {
            return;
        }
        self.config.trigger = mode;
        self.trigger.rebind(&mut self.host, mode);
        if self.state.is_shown() {
            self.globals
                .detach(&mut self.host, ListenerTarget::Document, Events::all());
            self.globals
                .attach(&mut self.host, ListenerTarget::Document, mode.document_events());
        }
    }

    /// Change the placement; repositions when shown.
    pub fn set_placement(&mut self, placement: Placement) {
        self.config.placement = placement;
        if !self.torn_down && self.state.is_shown() {
            self.reposition();
        }
    }

    /// Change the offset; repositions when shown.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.config.offset = offset;
        if !self.torn_down && self.state.is_shown() {
            self.reposition();
        }
    }

    /// Enable or disable the overlay. Disabling hides it immediately.
    pub fn set_disabled(&mut self, disabled: bool, now: u64) {
        self.config.disabled = disabled;
        self.enforce_can_show(now);
    }

    /// Tell the controller whether there is content to show. Empty overlays hide.
    pub fn set_content(&mut self, present: bool, now: u64) {
        self.has_content = present;
        self.enforce_can_show(now);
    }

    /// Switch between controlled (`Some`) and uncontrolled (`None`) visibility.
    pub fn set_controlled(&mut self, visible: Option<bool>, now: u64) {
        if self.torn_down {
            return;
        }
        self.config.visible = visible;
        self.show_timer.cancel();
        self.hide_timer.cancel();
        match visible {
            Some(_) => self.sync_controlled(now),
            None => {
                // Settle pending states now that their timers are gone.
                self.state = match self.state {
                    OverlayState::PendingShow => OverlayState::Hidden,
                    OverlayState::PendingHide => OverlayState::Visible,
                    s => s,
                };
            }
        }
    }

    /// Cancel all timers, detach all listeners and unmount. Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.show_timer.cancel();
        self.hide_timer.cancel();
        self.trigger.unbind(&mut self.host);
        self.globals.detach_all(&mut self.host);
        if let Some(e) = self.presence.cancel() {
            self.events.push(e.into());
        }
        self.state = OverlayState::Hidden;
        self.position = None;
        tracing::debug!("overlay torn down");
    }

    fn can_show(&self) -> bool {
        !self.torn_down
            && !self.config.disabled
            && self.has_content
            && self.host.has_render_container()
    }

    fn hide_delay_for(&self, cause: HideCause) -> u64 {
        match cause {
            HideCause::PointerLeave => self.config.hide_delay_ms.max(MIN_POINTER_LEAVE_DELAY_MS),
            _ => self.config.hide_delay_ms,
        }
    }

    fn enforce_can_show(&mut self, now: u64) {
        if self.torn_down {
            return;
        }
        if self.config.visible.is_some() {
            self.sync_controlled(now);
            return;
        }
        if self.can_show() {
            return;
        }
        match self.state {
            OverlayState::Hidden => {}
            OverlayState::PendingShow => {
                self.show_timer.cancel();
                self.state = OverlayState::Hidden;
            }
            OverlayState::Visible | OverlayState::PendingHide => self.leave_visible(now, true),
        }
    }

    fn sync_controlled(&mut self, now: u64) {
        let want = self.config.visible == Some(true) && self.can_show();
        match (want, self.state.is_shown()) {
            (true, false) => self.enter_visible(false),
            (false, true) => self.leave_visible(now, false),
            (true, true) => self.state = OverlayState::Visible,
            (false, false) => self.state = OverlayState::Hidden,
        }
    }

    fn enter_visible(&mut self, notify: bool) {
        self.show_timer.cancel();
        self.hide_timer.cancel();
        self.state = OverlayState::Visible;
        let mode = self.trigger.mode();
        self.globals
            .attach(&mut self.host, ListenerTarget::Document, mode.document_events());
        self.globals.attach(
            &mut self.host,
            ListenerTarget::Window,
            Events::SCROLL | Events::RESIZE,
        );
        if self.config.interactive {
            self.globals.attach(
                &mut self.host,
                ListenerTarget::Overlay,
                Events::POINTER_ENTER | Events::POINTER_LEAVE,
            );
        }
        if notify {
            self.events.push(OverlayEvent::VisibleChange(true));
        }
        for e in self.presence.enter() {
            self.events.push(e.into());
        }
        tracing::trace!("overlay visible");
        self.reposition();
    }

    fn leave_visible(&mut self, now: u64, notify: bool) {
        self.show_timer.cancel();
        self.hide_timer.cancel();
        self.state = OverlayState::Hidden;
        self.position = None;
        self.globals.detach_all(&mut self.host);
        if notify {
            self.events.push(OverlayEvent::VisibleChange(false));
        }
        for e in self.presence.exit(now) {
            self.events.push(e.into());
        }
        tracing::trace!("overlay hidden");
    }

    fn reposition(&mut self) {
        let Some(m) = self.host.measure() else {
            tracing::trace!("no measurements; positioning skipped");
            return;
        };
        let candidate = match self.pointer {
            Some(cursor) if self.config.follow_cursor => place_at_cursor(cursor),
            _ => place(
                m.trigger,
                m.overlay,
                self.config.placement,
                self.config.offset,
            ),
        };
        let origin = resolve(candidate, m.overlay, &m.viewport);
        if self.position != Some(origin) {
            self.position = Some(origin);
            self.events.push(OverlayEvent::Reposition(origin));
        }
    }

    fn pointer_resident(&self) -> bool {
        let Some(p) = self.pointer else {
            return false;
        };
        let Some(m) = self.host.measure() else {
            return false;
        };
        if contains(m.trigger, p) {
            return true;
        }
        self.position
            .is_some_and(|origin| contains(Rect::from_origin_size(origin, m.overlay), p))
    }
}

impl<H: OverlayHost> Drop for Overlay<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Edge-inclusive containment; a pointer on the border still counts as inside.
fn contains(r: Rect, p: Point) -> bool {
    p.x >= r.x0 && p.x <= r.x1 && p.y >= r.y0 && p.y <= r.y1
}
