use super::transform::Transform;

pub const MIN_SCALE: f32 = 0.1;
pub const MAX_SCALE: f32 = 10.0;

/// One wheel notch or one button press.
pub const ZOOM_IN_FACTOR: f32 = 1.1;
pub const ZOOM_OUT_FACTOR: f32 = 0.9;

/// Measured size of the viewport the images are drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerSize {
    pub width: f32,
    pub height: f32,
}

impl ContainerSize {
    /// Returns `None` until the container has a usable, non-empty size.
    pub fn measured(width: f32, height: f32) -> Option<Self> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Some(Self { width, height })
        } else {
            None
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

pub fn clamp_scale(scale: f32) -> f32 {
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// Image-space coordinate currently under the container point `(x, y)`.
pub fn image_point_at(t: &Transform, x: f32, y: f32) -> (f32, f32) {
    ((x - t.x) / t.scale, (y - t.y) / t.scale)
}

/// Scales `t` by `factor` while keeping the image point under
/// `(anchor_x, anchor_y)` in place.
pub fn zoom_around_point(t: &Transform, anchor_x: f32, anchor_y: f32, factor: f32) -> Transform {
    let (img_x, img_y) = image_point_at(t, anchor_x, anchor_y);
    let scale = clamp_scale(t.scale * factor);

    Transform {
        scale,
        x: anchor_x - img_x * scale,
        y: anchor_y - img_y * scale,
        ..*t
    }
}

/// Centers the image in the container at its current scale.
/// Unloaded transforms come back unchanged.
pub fn center_in_container(t: &Transform, container: ContainerSize) -> Transform {
    if !t.loaded {
        return *t;
    }

    Transform {
        x: (container.width - t.width as f32 * t.scale) / 2.0,
        y: (container.height - t.height as f32 * t.scale) / 2.0,
        ..*t
    }
}

pub fn apply_pan_delta(t: &Transform, dx: f32, dy: f32) -> Transform {
    Transform {
        x: t.x + dx,
        y: t.y + dy,
        ..*t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn loaded(width: u32, height: u32) -> Transform {
        Transform {
            width,
            height,
            loaded: true,
            ..Transform::identity()
        }
    }

    #[test]
    fn test_zoom_keeps_anchor_fixed() {
        let t = Transform { scale: 1.7, x: -35.0, y: 62.5, ..loaded(800, 600) };
        let anchors = [(0.0, 0.0), (500.0, 400.0), (-120.0, 900.0)];

        for (ax, ay) in anchors {
            for factor in [ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR, 3.0] {
                let before = image_point_at(&t, ax, ay);
                let zoomed = zoom_around_point(&t, ax, ay, factor);
                let after = image_point_at(&zoomed, ax, ay);
                assert!((before.0 - after.0).abs() < EPS, "x drifted at ({ax}, {ay})");
                assert!((before.1 - after.1).abs() < EPS, "y drifted at ({ax}, {ay})");
            }
        }
    }

    #[test]
    fn test_zoom_clamps_scale() {
        let mut t = loaded(100, 100);
        for _ in 0..100 {
            t = zoom_around_point(&t, 50.0, 50.0, ZOOM_IN_FACTOR);
            assert!(t.scale <= MAX_SCALE);
        }
        assert_eq!(t.scale, MAX_SCALE);

        for _ in 0..200 {
            t = zoom_around_point(&t, 50.0, 50.0, ZOOM_OUT_FACTOR);
            assert!(t.scale >= MIN_SCALE);
        }
        assert_eq!(t.scale, MIN_SCALE);
    }

    #[test]
    fn test_zoom_at_clamp_does_not_move() {
        let t = Transform { scale: MAX_SCALE, x: 10.0, y: 20.0, ..loaded(100, 100) };
        let zoomed = zoom_around_point(&t, 300.0, 200.0, ZOOM_IN_FACTOR);
        assert_eq!(zoomed.scale, MAX_SCALE);
        assert!((zoomed.x - 10.0).abs() < EPS);
        assert!((zoomed.y - 20.0).abs() < EPS);
    }

    #[test]
    fn test_center_in_container() {
        let container = ContainerSize { width: 1000.0, height: 800.0 };
        let centered = center_in_container(&loaded(800, 600), container);
        assert_eq!(centered.position(), (100.0, 100.0));

        let scaled = Transform { scale: 2.0, ..loaded(400, 300) };
        let centered = center_in_container(&scaled, container);
        assert_eq!(centered.position(), (100.0, 100.0));
        assert_eq!(centered.scale, 2.0);
    }

    #[test]
    fn test_center_is_idempotent() {
        let container = ContainerSize { width: 1280.0, height: 720.0 };
        let t = Transform { scale: 1.3, x: 77.0, y: -9.0, ..loaded(1920, 1080) };
        let once = center_in_container(&t, container);
        let twice = center_in_container(&once, container);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_center_ignores_unloaded() {
        let t = Transform { x: 5.0, y: 6.0, ..Transform::identity() };
        let container = ContainerSize { width: 1000.0, height: 800.0 };
        assert_eq!(center_in_container(&t, container), t);
    }

    #[test]
    fn test_pan_leaves_scale_alone() {
        let t = Transform { scale: 2.5, x: 1.0, y: 2.0, ..loaded(10, 10) };
        let panned = apply_pan_delta(&t, 50.0, -30.0);
        assert_eq!(panned.position(), (51.0, -28.0));
        assert_eq!(panned.scale, 2.5);
    }

    #[test]
    fn test_container_measured() {
        assert!(ContainerSize::measured(0.0, 100.0).is_none());
        assert!(ContainerSize::measured(100.0, f32::NAN).is_none());
        let c = ContainerSize::measured(1000.0, 800.0).unwrap();
        assert_eq!(c.center(), (500.0, 400.0));
    }
}
