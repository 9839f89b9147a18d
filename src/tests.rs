use crate::viewer::{
    ComparisonSession, PointerButton, Slot, WheelDirection, MAX_SCALE, MIN_SCALE,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const EPS: f32 = 1e-3;

fn names() -> [String; 2] {
    ["left.png".to_string(), "right.png".to_string()]
}

/// Two images of 800x600 and 400x300 dropped into a 1000x800 viewport.
fn loaded_session() -> ComparisonSession {
    let mut session = ComparisonSession::new();
    session.set_container(1000.0, 800.0);
    let generation = session.accept_pair(names());
    session.image_ready(generation, Slot::First, 800, 600);
    session.image_ready(generation, Slot::Second, 400, 300);
    session
}

fn xys(session: &ComparisonSession, slot: Slot) -> (f32, f32, f32) {
    let t = session.transform(slot).unwrap();
    (t.x, t.y, t.scale)
}

#[test]
fn test_both_images_centered_after_load() {
    let session = loaded_session();
    assert_eq!(xys(&session, Slot::First), (100.0, 100.0, 1.0));
    assert_eq!(xys(&session, Slot::Second), (300.0, 250.0, 1.0));
}

#[test]
fn test_locked_wheel_zoom_touches_active_only() {
    let mut session = loaded_session();
    session.toggle_lock();

    assert!(session.wheel(WheelDirection::Up));
    let (x, y, scale) = xys(&session, Slot::First);
    assert!((scale - 1.1).abs() < 1e-6);
    assert!((x - 60.0).abs() < EPS);
    assert!((y - 70.0).abs() < EPS);
    assert_eq!(xys(&session, Slot::Second), (300.0, 250.0, 1.0));
}

#[test]
fn test_unlocked_drag_moves_both() {
    let mut session = loaded_session();

    session.pointer_down(PointerButton::Primary, 500.0, 400.0);
    session.pointer_move(520.0, 390.0);
    session.pointer_move(550.0, 370.0);
    session.pointer_up();

    assert_eq!(xys(&session, Slot::First), (150.0, 70.0, 1.0));
    assert_eq!(xys(&session, Slot::Second), (350.0, 220.0, 1.0));
    assert!(!session.state().is_dragging());
}

#[test]
fn test_drag_ends_when_pointer_leaves() {
    let mut session = loaded_session();
    session.pointer_down(PointerButton::Primary, 500.0, 400.0);
    session.pointer_leave();
    assert!(!session.pointer_move(900.0, 900.0));
    assert_eq!(xys(&session, Slot::First), (100.0, 100.0, 1.0));
}

#[test]
fn test_image_ready_during_drag() {
    let mut session = ComparisonSession::new();
    session.set_container(1000.0, 800.0);
    let generation = session.accept_pair(names());
    session.image_ready(generation, Slot::First, 800, 600);

    session.pointer_down(PointerButton::Primary, 10.0, 10.0);
    session.pointer_move(20.0, 20.0);
    session.image_ready(generation, Slot::Second, 400, 300);
    // Centering lands between moves; the gesture picks up from there.
    assert_eq!(xys(&session, Slot::First), (100.0, 100.0, 1.0));
    assert!(!session.pointer_move(30.0, 25.0));
    session.pointer_move(40.0, 30.0);
    session.pointer_up();

    assert_eq!(xys(&session, Slot::First), (110.0, 105.0, 1.0));
    assert_eq!(xys(&session, Slot::Second), (310.0, 255.0, 1.0));
}

#[test]
fn test_toggling_back_mid_drag_keeps_image_in_place() {
    let mut session = loaded_session();
    session.toggle_lock();

    session.pointer_down(PointerButton::Primary, 10.0, 10.0);
    session.pointer_move(20.0, 10.0);
    assert!(session.toggle_active());
    session.pointer_move(500.0, 10.0);
    session.pointer_move(510.0, 10.0);
    assert!(session.toggle_active());

    assert!(!session.pointer_move(520.0, 10.0));
    assert_eq!(xys(&session, Slot::First), (110.0, 100.0, 1.0));
    assert!(session.pointer_move(530.0, 10.0));
    assert_eq!(xys(&session, Slot::First), (120.0, 100.0, 1.0));
    assert_eq!(xys(&session, Slot::Second), (310.0, 250.0, 1.0));
}

#[test]
fn test_wheel_mid_drag_does_not_jump() {
    let mut session = loaded_session();
    session.toggle_lock();

    session.pointer_down(PointerButton::Primary, 500.0, 400.0);
    session.pointer_move(510.0, 400.0);
    session.wheel(WheelDirection::Up);
    let (x, y, _) = xys(&session, Slot::First);
    assert!((x - 71.0).abs() < EPS && (y - 70.0).abs() < EPS);

    session.pointer_move(511.0, 400.0);
    let (x, y, scale) = xys(&session, Slot::First);
    assert!((x - 72.0).abs() < EPS && (y - 70.0).abs() < EPS);
    assert!((scale - 1.1).abs() < 1e-6);
}

#[test]
fn test_scale_stays_clamped_under_random_input() {
    let mut rng = StdRng::seed_from_u64(0x1ce_c0ffee);
    let mut session = loaded_session();

    for _ in 0..2_000 {
        match rng.gen_range(0..8) {
            0 => {
                session.zoom_in();
            }
            1 => {
                session.zoom_out();
            }
            2 => {
                let direction = if rng.gen_bool(0.5) {
                    WheelDirection::Up
                } else {
                    WheelDirection::Down
                };
                session.wheel(direction);
            }
            3 => session.toggle_lock(),
            4 => {
                session.toggle_active();
            }
            5 => session.toggle_overlay(),
            6 => {
                let (x, y) = (rng.gen_range(0.0..1000.0), rng.gen_range(0.0..800.0));
                session.pointer_down(PointerButton::Primary, x, y);
                session.pointer_move(x + rng.gen_range(-50.0..50.0), y + rng.gen_range(-50.0..50.0));
                session.pointer_up();
            }
            _ => session.reset_view(),
        }

        for slot in Slot::BOTH {
            let scale = session.transform(slot).unwrap().scale;
            assert!((MIN_SCALE..=MAX_SCALE).contains(&scale), "scale {scale} out of range");
        }
    }
}

#[test]
fn test_reset_after_random_input_recenters() {
    let mut session = loaded_session();
    session.toggle_lock();
    for _ in 0..7 {
        session.zoom_in();
    }
    session.toggle_lock();
    session.pointer_down(PointerButton::Primary, 0.0, 0.0);
    session.pointer_move(-300.0, 120.0);
    session.pointer_up();

    session.reset_view();
    assert_eq!(xys(&session, Slot::First), (100.0, 100.0, 1.0));
    assert_eq!(xys(&session, Slot::Second), (300.0, 250.0, 1.0));
}

#[test]
fn test_overlay_renders_both_half_transparent() {
    let mut session = loaded_session();
    session.toggle_overlay();

    let drawn: Vec<_> = session.slot_views().into_iter().filter(|v| v.should_draw()).collect();
    assert_eq!(drawn.len(), 2);
    assert!(drawn.iter().all(|v| v.opacity == 0.5));

    session.toggle_overlay();
    let drawn: Vec<_> = session.slot_views().into_iter().filter(|v| v.should_draw()).collect();
    assert_eq!(drawn.len(), 1);
    assert_eq!(drawn[0].slot, Slot::First);
    assert_eq!(drawn[0].opacity, 1.0);
}
