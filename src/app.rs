//! Application - reactive wiring and the event loop.
//!
//! One derived composes the screen from the model snapshot and the view
//! state; one effect renders it and publishes the frame's region map for
//! hit-testing. The event loop polls input at the tick interval, routes
//! events to the store, and uses the same tick to flush throttled drag
//! updates and expire the "copied" marker.
//!
//! All state mutation happens on this thread; the effect re-runs
//! synchronously inside each signal write, so the controller never mutates a
//! signal while it holds a borrow of the published frame.

use std::cell::{Cell as StdCell, RefCell};
use std::io::{self, stdout};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, size as terminal_size, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use spark_signals::{derived, effect, signal, Signal};

use crate::clipboard;
use crate::export;
use crate::gesture::{DragKind, DragSession};
use crate::input::{self, AppEvent, Key, KeyInput, PointerAction, PointerEvent};
use crate::model::RadiusStore;
use crate::presets::DESIGN_PRESETS;
use crate::types::Corner;
use crate::ui::diff::DiffRenderer;
use crate::ui::regions::Region;
use crate::ui::render::{compose, slider_value, track_value, ScreenFrame};
use crate::ui::{cell_to_px, CopyTarget, PanelTab, SliderId, UiView};

/// Tick interval: input poll timeout, throttle window, feedback expiry.
const TICK: Duration = Duration::from_millis(16);

/// How long the "copied" marker stays visible.
const COPIED_FEEDBACK: Duration = Duration::from_secs(2);

// =============================================================================
// Terminal session guard
// =============================================================================

/// Raw-mode/alternate-screen session, restored on drop so every exit path
/// (including panics unwinding through `run`) leaves the terminal usable.
struct TerminalSession;

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide)?;
        input::enable_mouse()?;
        Ok(Self)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = input::disable_mouse();
        let _ = execute!(stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

// =============================================================================
// View state
// =============================================================================

/// UI state that is not part of the value model, held in signals so the
/// screen derived tracks it like any other input.
#[derive(Clone)]
struct ViewState {
    active_tab: Signal<PanelTab>,
    focus: Signal<SliderId>,
    copied: Signal<Option<CopyTarget>>,
    dragging: Signal<Option<DragKind>>,
    size: Signal<(u16, u16)>,
}

impl ViewState {
    fn new(size: (u16, u16)) -> Self {
        let defaults = UiView::default();
        Self {
            active_tab: signal(defaults.active_tab),
            focus: signal(defaults.focus),
            copied: signal(defaults.copied),
            dragging: signal(defaults.dragging),
            size: signal(size),
        }
    }
}

// =============================================================================
// App
// =============================================================================

/// The interactive calculator application.
pub struct App {
    store: RadiusStore,
    view: ViewState,
    frame: Rc<RefCell<Option<ScreenFrame>>>,
    running: Rc<StdCell<bool>>,
    drag: Option<DragSession>,
    active_slider: Option<SliderId>,
    copied_until: Option<Instant>,
}

impl App {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            store: RadiusStore::new(),
            view: ViewState::new(terminal_size()?),
            frame: Rc::new(RefCell::new(None)),
            running: Rc::new(StdCell::new(true)),
            drag: None,
            active_slider: None,
            copied_until: None,
        })
    }

    /// Run until the user quits. The terminal is restored on every exit path.
    pub fn run(&mut self) -> io::Result<()> {
        let _session = TerminalSession::enter()?;

        // The one render effect: re-runs whenever the screen derived's
        // inputs change, writes the diff, publishes the frame.
        let screen_derived = {
            let snapshot = self.store.snapshot_derived();
            let view = self.view.clone();
            derived(move || {
                let snap = snapshot.get();
                let ui = UiView {
                    active_tab: view.active_tab.get(),
                    focus: view.focus.get(),
                    copied: view.copied.get(),
                    dragging: view.dragging.get(),
                };
                let (w, h) = view.size.get();
                compose(&snap, &ui, w, h)
            })
        };

        let stop_render = {
            let frame_slot = self.frame.clone();
            let running = self.running.clone();
            let mut renderer = DiffRenderer::new();
            effect(move || {
                if !running.get() {
                    return;
                }
                let frame = screen_derived.get();
                if let Err(err) = renderer.render(&frame.buffer) {
                    log::error!("render failed: {err}");
                }
                *frame_slot.borrow_mut() = Some(frame);
            })
        };

        while self.running.get() {
            if let Some(event) = input::poll_event(TICK)? {
                self.handle_event(event, Instant::now());
            }
            self.tick(Instant::now());
        }

        stop_render();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Event routing
    // -------------------------------------------------------------------------

    fn handle_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Pointer(pointer) => self.handle_pointer(pointer, now),
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Resize(w, h) => {
                self.view.size.set((w, h));
            }
            AppEvent::None => {}
        }
    }

    fn handle_pointer(&mut self, pointer: PointerEvent, now: Instant) {
        match pointer.action {
            PointerAction::Down => self.pointer_down(pointer, now),
            PointerAction::Drag | PointerAction::Move => self.pointer_moved(pointer, now),
            PointerAction::Up => self.pointer_up(),
        }
    }

    fn pointer_down(&mut self, pointer: PointerEvent, now: Instant) {
        // Copy what we need out of the published frame before any signal
        // write can re-enter the render effect.
        let (region, center) = {
            let frame = self.frame.borrow();
            match frame.as_ref() {
                Some(f) => (f.regions.hit_test(pointer.x, pointer.y), f.preview_center),
                None => return,
            }
        };

        let Some(region) = region else { return };
        match region {
            Region::RadiusHandle => {
                self.drag = Some(DragSession::begin(DragKind::Radius, center));
                self.view.dragging.set(Some(DragKind::Radius));
            }
            Region::PaddingRing => {
                self.drag = Some(DragSession::begin(DragKind::Padding, center));
                self.view.dragging.set(Some(DragKind::Padding));
            }
            Region::Slider(id) => {
                self.active_slider = Some(id);
                self.view.focus.set(id);
                self.set_slider_from_track(id, pointer.x);
            }
            Region::Tab(tab) => {
                self.view.active_tab.set(tab);
            }
            Region::CornerToggle => self.toggle_per_corner(),
            Region::Preset(index) => {
                if let Some(preset) = DESIGN_PRESETS.get(index) {
                    self.store.apply_preset(preset);
                }
            }
            Region::Quick(which) => self.copy(CopyTarget::Quick(which), now),
            Region::Export(format) => self.copy(CopyTarget::Format(format), now),
        }

        // A click anywhere lands in the drag session too: the first position
        // sets the value immediately (window is open on a fresh throttle).
        if self.drag.is_some() {
            self.pointer_moved(pointer, now);
        }
    }

    fn pointer_moved(&mut self, pointer: PointerEvent, now: Instant) {
        if let Some(session) = self.drag.as_mut() {
            let pos = cell_to_px(pointer.x, pointer.y);
            let max_padding = self.store.max_padding();
            if let Some(value) = session.pointer_moved(now, pos, max_padding) {
                let kind = session.kind();
                self.apply_drag(kind, value);
            }
        } else if let Some(id) = self.active_slider {
            self.set_slider_from_track(id, pointer.x);
        }
    }

    fn pointer_up(&mut self) {
        // Gesture ends; the trailing position is applied, not dropped.
        if let Some(session) = self.drag.take() {
            let kind = session.kind();
            if let Some(value) = session.finish() {
                self.apply_drag(kind, value);
            }
            self.view.dragging.set(None);
        }
        self.active_slider = None;
    }

    fn handle_key(&mut self, key: KeyInput) {
        match key.key {
            Key::Char('q') | Key::Escape => self.running.set(false),
            Key::Char('c') if key.ctrl => self.running.set(false),
            Key::Char('c') => self.toggle_per_corner(),
            Key::Tab => {
                let tab = self.view.active_tab.get();
                self.view.active_tab.set(tab.next());
            }
            Key::BackTab => {
                let tab = self.view.active_tab.get();
                self.view.active_tab.set(tab.prev());
            }
            Key::Up => self.move_focus(-1),
            Key::Down => self.move_focus(1),
            Key::Left => self.nudge_focused(-if key.shift { 10 } else { 1 }),
            Key::Right => self.nudge_focused(if key.shift { 10 } else { 1 }),
            _ => {}
        }
    }

    // -------------------------------------------------------------------------
    // Ticks
    // -------------------------------------------------------------------------

    fn tick(&mut self, now: Instant) {
        // Trailing drag update once the throttle window reopens.
        if let Some(session) = self.drag.as_mut() {
            if let Some(value) = session.flush(now) {
                let kind = session.kind();
                self.apply_drag(kind, value);
            }
        }

        // "Copied" marker expiry.
        if let Some(deadline) = self.copied_until {
            if now >= deadline {
                self.copied_until = None;
                self.view.copied.set(None);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------------

    fn apply_drag(&self, kind: DragKind, value: u16) {
        match kind {
            DragKind::Radius => self.store.set_outer_radius(value),
            DragKind::Padding => self.store.set_padding(value),
        }
    }

    fn set_slider_from_track(&self, id: SliderId, x: u16) {
        let snap = self.store.snapshot();
        let (width, _) = self.view.size.get();
        let value = track_value(id, &snap, width, x);
        self.set_slider(id, value);
    }

    fn set_slider(&self, id: SliderId, value: u16) {
        match id {
            SliderId::Radius => self.store.set_outer_radius(value),
            SliderId::CornerRadius(corner) => self.store.set_corner_radius(corner, value),
            SliderId::Padding => self.store.set_padding(value),
            SliderId::Dimension => self.store.set_dimension(value),
        }
    }

    fn toggle_per_corner(&self) {
        let enabled = !self.store.per_corner();
        self.store.set_per_corner(enabled);

        // Keep the keyboard focus on a slider that still exists.
        let focus = self.view.focus.get();
        match (enabled, focus) {
            (true, SliderId::Radius) => {
                self.view.focus.set(SliderId::CornerRadius(Corner::TopLeft));
            }
            (false, SliderId::CornerRadius(_)) => {
                self.view.focus.set(SliderId::Radius);
            }
            _ => {}
        }
    }

    fn copy(&mut self, target: CopyTarget, now: Instant) {
        let snap = self.store.snapshot();
        let text = match target {
            CopyTarget::Quick(which) => export::quick_value(which, &snap),
            CopyTarget::Format(format) => export::render(format, &snap),
        };
        clipboard::copy(&text);
        self.view.copied.set(Some(target));
        self.copied_until = Some(now + COPIED_FEEDBACK);
    }

    fn move_focus(&self, step: i32) {
        let order = focus_order(self.store.per_corner());
        let focus = self.view.focus.get();
        let index = order.iter().position(|&id| id == focus).unwrap_or(0) as i32;
        let next = (index + step).rem_euclid(order.len() as i32) as usize;
        self.view.focus.set(order[next]);
    }

    fn nudge_focused(&self, delta: i32) {
        let focus = self.view.focus.get();
        let snap = self.store.snapshot();
        let current = slider_value(focus, &snap) as i32;
        self.set_slider(focus, (current + delta).max(0) as u16);
    }
}

/// Slider traversal order for the current mode.
fn focus_order(per_corner: bool) -> Vec<SliderId> {
    let mut order = Vec::with_capacity(6);
    if per_corner {
        order.extend(Corner::ALL.map(SliderId::CornerRadius));
    } else {
        order.push(SliderId::Radius);
    }
    order.push(SliderId::Padding);
    order.push(SliderId::Dimension);
    order
}

/// Entry point used by the binary.
pub fn run() -> io::Result<()> {
    App::new()?.run()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_order_uniform() {
        let order = focus_order(false);
        assert_eq!(
            order,
            vec![SliderId::Radius, SliderId::Padding, SliderId::Dimension]
        );
    }

    #[test]
    fn test_focus_order_per_corner() {
        let order = focus_order(true);
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], SliderId::CornerRadius(Corner::TopLeft));
        assert_eq!(order[4], SliderId::Padding);
        assert_eq!(order[5], SliderId::Dimension);
    }
}
