use super::geometry::{apply_pan_delta, zoom_around_point};
use super::state::ViewerState;
use super::transform::{Slot, TransformModel};

/// A geometric change requested by a gesture or a button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewOp {
    Zoom { factor: f32, anchor_x: f32, anchor_y: f32 },
    Pan { dx: f32, dy: f32 },
}

/// Slots an operation applies to: the active one when locked, otherwise both.
/// Overlay mode has no say in routing.
pub fn target_slots(state: &ViewerState) -> Vec<Slot> {
    if state.is_locked {
        vec![state.active_slot]
    } else {
        Slot::BOTH.to_vec()
    }
}

/// Routes `op` through the geometry functions and publishes the active
/// slot's transform. Each slot is computed from its own scale and position.
///
/// Returns false when there is no image pair to act on.
pub fn apply(state: &ViewerState, model: &mut TransformModel, op: ViewOp) -> bool {
    if model.pair().is_none() {
        return false;
    }

    for slot in target_slots(state) {
        model.update(slot, |t| {
            *t = match op {
                ViewOp::Zoom { factor, anchor_x, anchor_y } => {
                    zoom_around_point(t, anchor_x, anchor_y, factor)
                }
                ViewOp::Pan { dx, dy } => apply_pan_delta(t, dx, dy),
            };
        });
    }

    model.publish(state.active_slot);
    log::trace!("{:?} applied in {} mode", op, state.mode());
    true
}
