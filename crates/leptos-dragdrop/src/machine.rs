//! Drag State Machine
//!
//! Pure gesture tracking for a flat ordered list, independent of the DOM.
//! `idle → pending → dragging → (dropped-valid | dropped-invalid) → idle`.

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Current phase of a drag gesture
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Mouse is down on row `index` but has not moved past the threshold;
    /// `over` is the last row the pointer entered
    Pending { index: usize, over: usize, start_x: i32, start_y: i32 },
    /// Row `from` is being dragged; `over` is the row under the pointer
    Dragging { from: usize, over: Option<usize> },
}

/// Result of releasing the mouse button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// Released over a row: move `from` to `to`
    Valid { from: usize, to: usize },
    /// Released outside any row, nothing to do
    Invalid,
    /// Mouse went up before a drag started, i.e. a plain click
    Click,
}

impl DropOutcome {
    /// The `(source, destination)` pair, only for a valid drop
    pub fn indices(self) -> Option<(usize, usize)> {
        match self {
            DropOutcome::Valid { from, to } => Some((from, to)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragMachine {
    phase: DragPhase,
}

impl DragMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Index of the row being dragged
    pub fn dragging_index(&self) -> Option<usize> {
        match self.phase {
            DragPhase::Dragging { from, .. } => Some(from),
            _ => None,
        }
    }

    /// Index of the row currently hovered during a drag
    pub fn over_index(&self) -> Option<usize> {
        match self.phase {
            DragPhase::Dragging { over, .. } => over,
            _ => None,
        }
    }

    /// Primary button pressed on row `index`
    pub fn press(&mut self, index: usize, x: i32, y: i32) {
        if self.phase == DragPhase::Idle {
            self.phase = DragPhase::Pending { index, over: index, start_x: x, start_y: y };
        }
    }

    /// Pointer moved; starts the drag once past the threshold.
    /// Returns true when this move started the drag.
    pub fn move_to(&mut self, x: i32, y: i32) -> bool {
        if let DragPhase::Pending { index, over, start_x, start_y } = self.phase {
            let dx = (x - start_x).abs();
            let dy = (y - start_y).abs();
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                self.phase = DragPhase::Dragging { from: index, over: Some(over) };
                return true;
            }
        }
        false
    }

    /// Pointer entered row `index`
    pub fn enter(&mut self, index: usize) {
        match &mut self.phase {
            DragPhase::Pending { over, .. } => *over = index,
            DragPhase::Dragging { over, .. } => *over = Some(index),
            DragPhase::Idle => {}
        }
    }

    /// Pointer left the row it was over
    pub fn leave(&mut self) {
        if let DragPhase::Dragging { from, .. } = self.phase {
            self.phase = DragPhase::Dragging { from, over: None };
        }
    }

    /// Mouse released. Always returns to idle.
    pub fn release(&mut self) -> DropOutcome {
        let outcome = match self.phase {
            DragPhase::Idle | DragPhase::Pending { .. } => DropOutcome::Click,
            DragPhase::Dragging { from, over: Some(to) } => DropOutcome::Valid { from, to },
            DragPhase::Dragging { over: None, .. } => DropOutcome::Invalid,
        };
        self.phase = DragPhase::Idle;
        outcome
    }

    /// Abandon any gesture in progress
    pub fn cancel(&mut self) {
        self.phase = DragPhase::Idle;
    }
}
