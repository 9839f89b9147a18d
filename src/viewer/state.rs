use std::fmt;

use super::transform::Slot;

/// Drag gesture phase. Anchors only exist while `Dragging`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Overlay,
    Individual,
    Synchronized,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Overlay => "Overlay",
            ViewMode::Individual => "Individual",
            ViewMode::Synchronized => "Synchronized",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewerState {
    pub active_slot: Slot,
    /// Zoom and pan touch only the active slot.
    pub is_locked: bool,
    /// Both slots drawn at reduced opacity; toggling is disabled.
    pub is_overlay_mode: bool,
    pub gesture: GesturePhase,
}

impl ViewerState {
    pub fn is_dragging(&self) -> bool {
        self.gesture == GesturePhase::Dragging
    }

    pub fn mode(&self) -> ViewMode {
        if self.is_overlay_mode {
            ViewMode::Overlay
        } else if self.is_locked {
            ViewMode::Individual
        } else {
            ViewMode::Synchronized
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
