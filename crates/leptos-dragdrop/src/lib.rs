//! Leptos DragDrop Utilities
//!
//! Drag-to-reorder for flat lists in Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.

mod machine;

pub use machine::{DragMachine, DragPhase, DropOutcome, DRAG_THRESHOLD_PX};

use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// How long a finished drag suppresses the trailing click
const CLICK_SUPPRESS_MS: u64 = 100;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub machine: RwSignal<DragMachine>,
    /// Set briefly after a drag ends so the row click handler can ignore it
    pub drag_just_ended: RwSignal<bool>,
}

pub fn create_dnd_signals() -> DndSignals {
    DndSignals {
        machine: RwSignal::new(DragMachine::new()),
        drag_just_ended: RwSignal::new(false),
    }
}

impl DndSignals {
    /// Whether row `index` is the one being dragged (tracked)
    pub fn is_dragging(&self, index: usize) -> bool {
        self.machine.with(|m| m.dragging_index() == Some(index))
    }

    /// Whether row `index` is the current drop target (tracked)
    pub fn is_drop_target(&self, index: usize) -> bool {
        self.machine.with(|m| m.is_dragging() && m.over_index() == Some(index))
    }

    /// Whether any drag is in progress (tracked)
    pub fn any_dragging(&self) -> bool {
        self.machine.with(|m| m.is_dragging())
    }

    /// True right after a drag finished; use to swallow the click that follows
    pub fn drag_just_ended(&self) -> bool {
        self.drag_just_ended.get_untracked()
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.drag_just_ended.set(true);
    let clear = dnd.drag_just_ended;
    set_timeout(move || clear.set(false), Duration::from_millis(CLICK_SUPPRESS_MS));
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.machine.update(|m| m.press(index, ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for rows (become drop target)
pub fn make_on_row_mouseenter(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        // Also tracked while pending, so a fast move lands on the right row
        if dnd.machine.get_untracked().phase() != DragPhase::Idle {
            dnd.machine.update(|m| m.enter(index));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.machine.get_untracked().is_dragging() {
            dnd.machine.update(|m| m.leave());
        }
    }
}

/// Bind document-level mousemove/mouseup handlers for the lifetime of the
/// calling component. `on_drop(from, to)` runs once per valid drop.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(usize, usize) + 'static,
{
    let move_handle = window_event_listener(ev::mousemove, move |ev: web_sys::MouseEvent| {
        if matches!(dnd.machine.get_untracked().phase(), DragPhase::Pending { .. }) {
            dnd.machine.update(|m| {
                m.move_to(ev.client_x(), ev.client_y());
            });
        }
    });

    let up_handle = window_event_listener(ev::mouseup, move |_ev: web_sys::MouseEvent| {
        if dnd.machine.get_untracked().phase() == DragPhase::Idle {
            return;
        }
        let outcome = dnd
            .machine
            .try_update(|m| m.release())
            .unwrap_or(DropOutcome::Click);

        match outcome {
            DropOutcome::Valid { from, to } => {
                end_drag(&dnd);
                on_drop(from, to);
            }
            DropOutcome::Invalid => end_drag(&dnd),
            // Click event will fire naturally on the element
            DropOutcome::Click => {}
        }
    });

    on_cleanup(move || {
        move_handle.remove();
        up_handle.remove();
    });
}
