use super::geometry::{ContainerSize, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use super::interaction::{self, PointerButton, WheelDirection};
use super::lifecycle::{self, Reconcile};
use super::presentation::{self, SlotView, StatusLine};
use super::state::ViewerState;
use super::transform::{Slot, Transform, TransformModel};

/// Owns everything a comparison needs and is the only thing that mutates
/// it. Every input event maps to one method call.
#[derive(Debug, Default)]
pub struct ComparisonSession {
    state: ViewerState,
    model: TransformModel,
    container: Option<ContainerSize>,
    names: Option<[String; 2]>,
    center_pending: bool,
    generation: u64,
}

impl ComparisonSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn transform(&self, slot: Slot) -> Option<&Transform> {
        self.model.get(slot)
    }

    pub fn current_transform(&self) -> Option<&Transform> {
        self.model.current()
    }

    pub fn container(&self) -> Option<ContainerSize> {
        self.container
    }

    pub fn names(&self) -> Option<&[String; 2]> {
        self.names.as_ref()
    }

    pub fn has_pair(&self) -> bool {
        self.model.pair().is_some()
    }

    pub fn is_ready(&self) -> bool {
        self.model.pair().is_some_and(|pair| pair.all_loaded())
    }

    /// Bumped on every accepted pair so late image-ready signals from a
    /// replaced pair can be told apart.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn can_toggle(&self) -> bool {
        self.has_pair() && !self.state.is_overlay_mode
    }

    // Lifecycle

    pub fn accept_pair(&mut self, names: [String; 2]) -> u64 {
        lifecycle::accept_new_pair(&mut self.state, &mut self.model);
        self.names = Some(names);
        self.center_pending = false;
        self.generation += 1;
        self.generation
    }

    pub fn clear(&mut self) {
        self.model.clear();
        self.state.reset();
        self.names = None;
        self.center_pending = false;
        self.generation += 1;
    }

    /// Returns false for signals from an older generation.
    pub fn image_ready(&mut self, generation: u64, slot: Slot, width: u32, height: u32) -> bool {
        if generation != self.generation {
            log::debug!("dropping stale ready signal for {} (generation {generation})", slot.label());
            return false;
        }
        let outcome = lifecycle::image_ready(&self.state, &mut self.model, slot, width, height, self.container);
        self.track(outcome);
        true
    }

    /// Records the viewport size. Runs a centering that was skipped for lack
    /// of geometry; later resizes leave the images where they are.
    pub fn set_container(&mut self, width: f32, height: f32) {
        let Some(container) = ContainerSize::measured(width, height) else {
            return;
        };
        if self.container == Some(container) {
            return;
        }
        self.container = Some(container);

        if self.center_pending {
            let outcome = lifecycle::center_when_ready(&self.state, &mut self.model, self.container);
            self.track(outcome);
        }
    }

    pub fn reset_view(&mut self) {
        let outcome = lifecycle::reset_view(&self.state, &mut self.model, self.container);
        self.track(outcome);
    }

    pub fn center_active(&mut self) -> bool {
        lifecycle::center_active(&self.state, &mut self.model, self.container)
    }

    fn track(&mut self, outcome: Reconcile) {
        self.center_pending = outcome == Reconcile::AwaitingContainer;
        if outcome == Reconcile::Centered {
            log::debug!("images centered in {:?}", self.container);
        }
    }

    // Gestures

    pub fn pointer_down(&mut self, button: PointerButton, x: f32, y: f32) -> bool {
        interaction::pointer_down(&mut self.state, &mut self.model, button, x, y)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        interaction::pointer_move(&mut self.state, &mut self.model, x, y)
    }

    pub fn pointer_up(&mut self) {
        interaction::pointer_up(&mut self.state, &mut self.model);
    }

    pub fn pointer_leave(&mut self) {
        interaction::pointer_leave(&mut self.state, &mut self.model);
    }

    pub fn wheel(&mut self, direction: WheelDirection) -> bool {
        interaction::wheel(&self.state, &mut self.model, self.container, direction)
    }

    pub fn zoom_in(&mut self) -> bool {
        interaction::zoom_at_center(&self.state, &mut self.model, self.container, ZOOM_IN_FACTOR)
    }

    pub fn zoom_out(&mut self) -> bool {
        interaction::zoom_at_center(&self.state, &mut self.model, self.container, ZOOM_OUT_FACTOR)
    }

    // Modes

    /// Disabled while overlaid or without images.
    pub fn toggle_active(&mut self) -> bool {
        if !self.can_toggle() {
            return false;
        }
        self.select_slot(self.state.active_slot.other());
        true
    }

    pub fn select_slot(&mut self, slot: Slot) {
        interaction::select_slot(&mut self.state, &mut self.model, slot);
    }

    pub fn toggle_lock(&mut self) {
        self.state.is_locked = !self.state.is_locked;
        self.model.publish(self.state.active_slot);
    }

    pub fn toggle_overlay(&mut self) {
        self.state.is_overlay_mode = !self.state.is_overlay_mode;
        self.model.publish(self.state.active_slot);
    }

    // Rendering boundary

    pub fn slot_views(&self) -> Vec<SlotView> {
        presentation::slot_views(&self.state, &self.model)
    }

    pub fn status(&self) -> Option<StatusLine> {
        let names = self.names.as_ref()?;
        presentation::status_line(&self.state, &self.model, names)
    }
}
