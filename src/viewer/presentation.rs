use super::state::{ViewMode, ViewerState};
use super::transform::{Slot, TransformModel};

/// Opacity of both images while overlaid.
pub const OVERLAY_OPACITY: f32 = 0.5;

/// What the renderer needs for one slot: translate by `(x, y)`, then scale,
/// origin at the container's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotView {
    pub slot: Slot,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub width: u32,
    pub height: u32,
    pub loaded: bool,
    pub visible: bool,
    pub opacity: f32,
}

impl SlotView {
    /// Visible and loaded.
    pub fn should_draw(&self) -> bool {
        self.visible && self.loaded
    }
}

pub fn is_visible(state: &ViewerState, slot: Slot) -> bool {
    state.is_overlay_mode || state.active_slot == slot
}

pub fn opacity(state: &ViewerState) -> f32 {
    if state.is_overlay_mode {
        OVERLAY_OPACITY
    } else {
        1.0
    }
}

/// Render order: the active slot is drawn last so it ends up on top.
pub fn slot_views(state: &ViewerState, model: &TransformModel) -> Vec<SlotView> {
    let Some(pair) = model.pair() else {
        return Vec::new();
    };

    let order = [state.active_slot.other(), state.active_slot];
    order
        .into_iter()
        .map(|slot| {
            let t = &pair[slot];
            SlotView {
                slot,
                x: t.x,
                y: t.y,
                scale: t.scale,
                width: t.width,
                height: t.height,
                loaded: t.loaded,
                visible: is_visible(state, slot),
                opacity: opacity(state),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    pub active_name: String,
    pub zoom_percent: i32,
    /// Per-slot zoom, only reported while unlocked.
    pub slot_zoom: Option<[i32; 2]>,
    pub mode: ViewMode,
}

impl StatusLine {
    pub fn zoom_text(&self) -> String {
        match self.slot_zoom {
            Some([first, second]) => format!("Zoom: {first}% | {second}%"),
            None => format!("Zoom: {}%", self.zoom_percent),
        }
    }

    pub fn mode_text(&self) -> String {
        format!("Mode: {}", self.mode)
    }
}

pub fn status_line(state: &ViewerState, model: &TransformModel, names: &[String; 2]) -> Option<StatusLine> {
    let pair = model.pair()?;
    let current = model.current().copied().unwrap_or(pair[state.active_slot]);

    let slot_zoom = (!state.is_locked)
        .then(|| [pair[Slot::First].zoom_percent(), pair[Slot::Second].zoom_percent()]);

    Some(StatusLine {
        active_name: names[state.active_slot.index()].clone(),
        zoom_percent: current.zoom_percent(),
        slot_zoom,
        mode: state.mode(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::transform::{Transform, TransformPair};

    fn names() -> [String; 2] {
        ["before.png".to_string(), "after.png".to_string()]
    }

    fn model() -> TransformModel {
        let mut model = TransformModel::new();
        model.replace(TransformPair::new(
            Transform { scale: 1.1, loaded: true, width: 8, height: 6, ..Transform::identity() },
            Transform { scale: 2.0, loaded: false, ..Transform::identity() },
        ));
        model
    }

    #[test]
    fn test_single_mode_shows_active_only() {
        let state = ViewerState { active_slot: Slot::Second, ..Default::default() };
        let views = slot_views(&state, &model());
        assert_eq!(views.len(), 2);
        assert_eq!(views[1].slot, Slot::Second);
        assert!(views[1].visible);
        assert!(!views[0].visible);
        assert!(views.iter().all(|v| v.opacity == 1.0));
        // Visible but still loading.
        assert!(!views[1].should_draw());
    }

    #[test]
    fn test_overlay_shows_both_at_half_opacity() {
        let state = ViewerState { is_overlay_mode: true, ..Default::default() };
        let views = slot_views(&state, &model());
        assert!(views.iter().all(|v| v.visible && v.opacity == OVERLAY_OPACITY));
        assert_eq!(views[1].slot, Slot::First);
    }

    #[test]
    fn test_no_pair_no_views() {
        let state = ViewerState::default();
        assert!(slot_views(&state, &TransformModel::new()).is_empty());
        assert!(status_line(&state, &TransformModel::new(), &names()).is_none());
    }

    #[test]
    fn test_status_line_unlocked_reports_both() {
        let state = ViewerState::default();
        let mut model = model();
        model.publish(Slot::First);

        let status = status_line(&state, &model, &names()).unwrap();
        assert_eq!(status.active_name, "before.png");
        assert_eq!(status.zoom_percent, 110);
        assert_eq!(status.zoom_text(), "Zoom: 110% | 200%");
        assert_eq!(status.mode_text(), "Mode: Synchronized");
    }

    #[test]
    fn test_status_line_locked_reports_current() {
        let state = ViewerState { is_locked: true, active_slot: Slot::Second, ..Default::default() };
        let mut model = model();
        model.publish(Slot::Second);

        let status = status_line(&state, &model, &names()).unwrap();
        assert_eq!(status.active_name, "after.png");
        assert_eq!(status.slot_zoom, None);
        assert_eq!(status.zoom_text(), "Zoom: 200%");
        assert_eq!(status.mode, ViewMode::Individual);
    }
}
