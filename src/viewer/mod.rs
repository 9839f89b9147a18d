pub mod geometry;
pub mod interaction;
pub mod lifecycle;
pub mod presentation;
pub mod session;
pub mod state;
pub mod sync;
pub mod transform;

pub use geometry::{ContainerSize, MAX_SCALE, MIN_SCALE, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
pub use interaction::{PointerButton, WheelDirection};
pub use presentation::{SlotView, StatusLine, OVERLAY_OPACITY};
pub use session::ComparisonSession;
pub use state::{GesturePhase, ViewMode, ViewerState};
pub use transform::{DragAnchor, Slot, Transform, TransformModel, TransformPair};
