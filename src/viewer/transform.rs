use std::ops::{Index, IndexMut};

/// One of the two fixed image positions in a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Slot {
    #[default]
    First,
    Second,
}

impl Slot {
    pub const BOTH: [Slot; 2] = [Slot::First, Slot::Second];

    pub fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Slot> {
        match index {
            0 => Some(Slot::First),
            1 => Some(Slot::Second),
            _ => None,
        }
    }

    pub fn other(self) -> Slot {
        match self {
            Slot::First => Slot::Second,
            Slot::Second => Slot::First,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Slot::First => "Image 1",
            Slot::Second => "Image 2",
        }
    }
}

/// Pointer offset relative to the slot origin, recorded when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    pub start_x: f32,
    pub start_y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub x: f32,
    pub y: f32,
    /// Natural pixel dimensions, zero until the image reports ready.
    pub width: u32,
    pub height: u32,
    pub loaded: bool,
    pub drag_anchor: Option<DragAnchor>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            x: 0.0,
            y: 0.0,
            width: 0,
            height: 0,
            loaded: false,
            drag_anchor: None,
        }
    }

    /// Back to scale 1 at the origin, keeping what is known about the image.
    pub fn reset_view(self) -> Self {
        Self {
            scale: 1.0,
            x: 0.0,
            y: 0.0,
            drag_anchor: None,
            ..self
        }
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn zoom_percent(&self) -> i32 {
        (self.scale * 100.0).round() as i32
    }
}

/// The two transforms of a comparison, addressed by [`Slot`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformPair([Transform; 2]);

impl TransformPair {
    pub fn new(first: Transform, second: Transform) -> Self {
        Self([first, second])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, &Transform)> {
        Slot::BOTH.into_iter().zip(self.0.iter())
    }

    pub fn all_loaded(&self) -> bool {
        self.0.iter().all(|t| t.loaded)
    }
}

impl Index<Slot> for TransformPair {
    type Output = Transform;

    fn index(&self, slot: Slot) -> &Transform {
        &self.0[slot.index()]
    }
}

impl IndexMut<Slot> for TransformPair {
    fn index_mut(&mut self, slot: Slot) -> &mut Transform {
        &mut self.0[slot.index()]
    }
}

/// Storage for the transform pair plus the published "current" transform.
///
/// Holds no invariants of its own; callers clamp scale and decide when to
/// publish.
#[derive(Debug, Clone, Default)]
pub struct TransformModel {
    pair: Option<TransformPair>,
    current: Option<Transform>,
}

impl TransformModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pair(&self) -> Option<&TransformPair> {
        self.pair.as_ref()
    }

    pub fn get(&self, slot: Slot) -> Option<&Transform> {
        self.pair.as_ref().map(|pair| &pair[slot])
    }

    pub fn replace(&mut self, pair: TransformPair) {
        self.pair = Some(pair);
        self.current = None;
    }

    pub fn clear(&mut self) {
        self.pair = None;
        self.current = None;
    }

    /// Applies `f` to one slot. Returns false when there is no pair.
    pub fn update<F>(&mut self, slot: Slot, f: F) -> bool
    where
        F: FnOnce(&mut Transform),
    {
        match self.pair.as_mut() {
            Some(pair) => {
                f(&mut pair[slot]);
                true
            }
            None => false,
        }
    }

    /// The transform last published for the active slot.
    pub fn current(&self) -> Option<&Transform> {
        self.current.as_ref()
    }

    pub fn publish(&mut self, active: Slot) {
        self.current = self.get(active).copied();
    }
}
