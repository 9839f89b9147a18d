use super::geometry::{center_in_container, ContainerSize};
use super::state::ViewerState;
use super::transform::{Slot, Transform, TransformModel, TransformPair};

/// Outcome of trying to center both images together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconcile {
    Centered,
    /// At least one slot has not reported its dimensions yet.
    AwaitingImages,
    /// Both slots are loaded but the container has not been measured.
    AwaitingContainer,
}

/// Centers `t` and drops any drag anchor, so a drag in progress resumes
/// from the new position instead of snapping back under the pointer.
fn recenter(t: &Transform, container: ContainerSize) -> Transform {
    Transform {
        drag_anchor: None,
        ..center_in_container(t, container)
    }
}

/// Drops the previous pair and starts over with two identity transforms.
pub fn accept_new_pair(state: &mut ViewerState, model: &mut TransformModel) {
    model.replace(TransformPair::default());
    state.reset();
    log::debug!("new image pair accepted, view state reset");
}

/// Records natural dimensions for `slot`. The first report wins; repeats
/// are ignored. Centers both images once both have reported.
pub fn image_ready(
    state: &ViewerState,
    model: &mut TransformModel,
    slot: Slot,
    width: u32,
    height: u32,
    container: Option<ContainerSize>,
) -> Reconcile {
    match model.get(slot) {
        None => return Reconcile::AwaitingImages,
        Some(t) if t.loaded => {
            log::debug!("{} already loaded, ignoring repeated ready signal", slot.label());
        }
        Some(_) => {
            model.update(slot, |t| {
                t.width = width;
                t.height = height;
                t.loaded = true;
            });
            log::debug!("{} ready: {width}x{height}", slot.label());
        }
    }

    center_when_ready(state, model, container)
}

/// Centers each slot on its own dimensions and scale, but only once both
/// are loaded and the container is known.
pub fn center_when_ready(
    state: &ViewerState,
    model: &mut TransformModel,
    container: Option<ContainerSize>,
) -> Reconcile {
    if !model.pair().is_some_and(TransformPair::all_loaded) {
        return Reconcile::AwaitingImages;
    }
    let Some(container) = container else {
        return Reconcile::AwaitingContainer;
    };

    for slot in Slot::BOTH {
        model.update(slot, |t| *t = recenter(t, container));
    }
    model.publish(state.active_slot);
    Reconcile::Centered
}

/// Back to scale 1 at the origin for both slots, then re-centered.
pub fn reset_view(
    state: &ViewerState,
    model: &mut TransformModel,
    container: Option<ContainerSize>,
) -> Reconcile {
    for slot in Slot::BOTH {
        model.update(slot, |t| *t = t.reset_view());
    }
    model.publish(state.active_slot);
    center_when_ready(state, model, container)
}

/// Centers the active slot only. No-op while it is unloaded or the
/// container is unmeasured.
pub fn center_active(
    state: &ViewerState,
    model: &mut TransformModel,
    container: Option<ContainerSize>,
) -> bool {
    let Some(container) = container else {
        return false;
    };
    let active = state.active_slot;
    if !model.get(active).is_some_and(|t| t.loaded) {
        return false;
    }

    model.update(active, |t| *t = recenter(t, container));
    model.publish(active);
    true
}
