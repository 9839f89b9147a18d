//! Pointer drag and wheel handling.
//!
//! A drag is a two-state machine on [`ViewerState::gesture`]:
//!
//! - `Idle -> Dragging` on primary-button pointer-down over the viewport.
//!   The active slot records `pointer - position` as its drag anchor.
//! - `Dragging -> Dragging` on pointer move. The movement since the previous
//!   frame is routed as a pan, then the active slot is re-anchored so every
//!   move produces a fresh per-frame delta.
//! - `Dragging -> Idle` on pointer-up or pointer-leave, whichever comes
//!   first. All anchors are dropped.

use super::geometry::{ContainerSize, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use super::state::{GesturePhase, ViewerState};
use super::sync::{self, ViewOp};
use super::transform::{DragAnchor, Slot, TransformModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    Up,
    Down,
}

impl WheelDirection {
    /// DOM convention: positive `delta_y` scrolls down.
    pub fn from_delta_y(delta_y: f32) -> Option<Self> {
        if delta_y > 0.0 {
            Some(WheelDirection::Down)
        } else if delta_y < 0.0 {
            Some(WheelDirection::Up)
        } else {
            None
        }
    }

    pub fn zoom_factor(self) -> f32 {
        match self {
            WheelDirection::Up => ZOOM_IN_FACTOR,
            WheelDirection::Down => ZOOM_OUT_FACTOR,
        }
    }
}

fn anchor_at(model: &mut TransformModel, slot: Slot, x: f32, y: f32) {
    model.update(slot, |t| {
        t.drag_anchor = Some(DragAnchor {
            start_x: x - t.x,
            start_y: y - t.y,
        });
    });
}

/// Starts a drag. Returns true when the gesture entered `Dragging`.
pub fn pointer_down(
    state: &mut ViewerState,
    model: &mut TransformModel,
    button: PointerButton,
    x: f32,
    y: f32,
) -> bool {
    if button != PointerButton::Primary || state.is_dragging() || model.pair().is_none() {
        return false;
    }

    anchor_at(model, state.active_slot, x, y);
    state.gesture = GesturePhase::Dragging;
    log::trace!("drag started on {} at ({x}, {y})", state.active_slot.label());
    true
}

/// Moves the dragged image(s). Returns true when anything moved.
pub fn pointer_move(state: &mut ViewerState, model: &mut TransformModel, x: f32, y: f32) -> bool {
    if !state.is_dragging() {
        return false;
    }

    let active = state.active_slot;
    let Some(t) = model.get(active).copied() else {
        state.gesture = GesturePhase::Idle;
        return false;
    };

    // Active slot switched mid-drag: pick up from here without a jump.
    let Some(anchor) = t.drag_anchor else {
        anchor_at(model, active, x, y);
        return false;
    };

    let dx = x - anchor.start_x - t.x;
    let dy = y - anchor.start_y - t.y;
    sync::apply(state, model, ViewOp::Pan { dx, dy });
    anchor_at(model, active, x, y);
    true
}

pub fn pointer_up(state: &mut ViewerState, model: &mut TransformModel) {
    end_drag(state, model);
}

pub fn pointer_leave(state: &mut ViewerState, model: &mut TransformModel) {
    end_drag(state, model);
}

fn end_drag(state: &mut ViewerState, model: &mut TransformModel) {
    if !state.is_dragging() {
        return;
    }
    clear_anchors(model);
    state.gesture = GesturePhase::Idle;
    log::trace!("drag ended");
}

fn clear_anchors(model: &mut TransformModel) {
    for slot in Slot::BOTH {
        model.update(slot, |t| t.drag_anchor = None);
    }
}

/// Makes `slot` active. Mid-drag every anchor is dropped, so the next move
/// re-anchors whichever slot is active without moving it.
pub fn select_slot(state: &mut ViewerState, model: &mut TransformModel, slot: Slot) {
    if state.is_dragging() && state.active_slot != slot {
        clear_anchors(model);
    }
    state.active_slot = slot;
    model.publish(slot);
}

/// Zooms by `factor` around the container center. Without a measured
/// container the origin is used.
pub fn zoom_at_center(
    state: &ViewerState,
    model: &mut TransformModel,
    container: Option<ContainerSize>,
    factor: f32,
) -> bool {
    let (anchor_x, anchor_y) = container.map(|c| c.center()).unwrap_or((0.0, 0.0));
    let before = model.get(state.active_slot).copied();
    let zoomed = sync::apply(state, model, ViewOp::Zoom { factor, anchor_x, anchor_y });

    // Keep the pointer where it was relative to the zoomed image, so the
    // next move continues from the new position.
    if let (true, Some(before)) = (state.is_dragging(), before) {
        model.update(state.active_slot, |t| {
            if let Some(anchor) = t.drag_anchor.as_mut() {
                anchor.start_x += before.x - t.x;
                anchor.start_y += before.y - t.y;
            }
        });
    }
    zoomed
}

pub fn wheel(
    state: &ViewerState,
    model: &mut TransformModel,
    container: Option<ContainerSize>,
    direction: WheelDirection,
) -> bool {
    zoom_at_center(state, model, container, direction.zoom_factor())
}
