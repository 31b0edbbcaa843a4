// Host-side tests for the stage aggregate and the pointer math.

use fx_core::config::StageConfig;
use fx_core::events::InputEvent;
use fx_core::input::{magnetic_offset, normalized_signed, parallax_shift};
use fx_core::stage::Stage;
use glam::Vec2;

fn test_stage() -> Stage {
    Stage::new(
        StageConfig::default(),
        vec![Vec2::new(90.0, 32.0); 4],
        Vec2::new(1000.0, 700.0),
        7,
    )
}

#[test]
fn pointer_moves_reach_pointer_cursor_and_aurora() {
    let mut stage = test_stage();
    stage.handle_event(InputEvent::PointerMoved { x: 300.0, y: 200.0 });

    assert!(stage.pointer.inside);
    assert_eq!(stage.pointer.pos, Vec2::new(300.0, 200.0));
    assert!(stage.cursor.is_visible());
    assert_eq!(stage.cursor.dot_pos(), Vec2::new(300.0, 200.0));

    // The aurora keeps easing toward the last pointer position.
    for _ in 0..600 {
        stage.tick();
    }
    assert!(stage.aurora.primary_pos().distance(Vec2::new(300.0, 200.0)) < 1.0);
}

#[test]
fn pointer_leaving_hides_the_cursor() {
    let mut stage = test_stage();
    stage.handle_event(InputEvent::PointerMoved { x: 300.0, y: 200.0 });
    stage.handle_event(InputEvent::PointerLeft);

    assert!(!stage.pointer.inside);
    assert!(!stage.cursor.is_visible());
}

#[test]
fn resize_remaps_the_ring_without_resetting_anything_else() {
    let mut stage = test_stage();
    assert!(stage.orbit.start());
    for _ in 0..30 {
        stage.tick();
    }
    let offset = stage.orbit.angle_offset();
    let sky = stage.starfield.stars()[0].pos;

    stage.handle_event(InputEvent::Resized {
        width: 500.0,
        height: 400.0,
    });

    assert_eq!(stage.viewport(), Vec2::new(500.0, 400.0));
    assert_eq!(stage.orbit.angle_offset(), offset);
    assert_eq!(stage.orbit.count(), 4);
    assert!((stage.orbit.center().x - 250.0).abs() < 1e-4);
    assert!((stage.orbit.center().y - 400.0 * 0.47).abs() < 1e-3);
    assert!((stage.orbit.radii().x - 210.0).abs() < 1e-3);
    assert!((stage.orbit.radii().y - 80.0).abs() < 1e-3);
    // Star positions are viewport fractions, untouched by a resize.
    assert_eq!(stage.starfield.stars()[0].pos, sky);
}

#[test]
fn ring_only_spins_after_start() {
    let mut stage = test_stage();
    for _ in 0..5 {
        stage.tick();
    }
    assert_eq!(stage.orbit.angle_offset(), 0.0);

    assert!(stage.orbit.start());
    for _ in 0..5 {
        stage.tick();
    }
    let speed = stage.config.orbit.angular_speed;
    assert_eq!(stage.orbit.angle_offset(), 5.0_f32 * speed);
}

#[test]
fn normalized_pointer_spans_minus_one_to_one() {
    let vp = Vec2::new(800.0, 600.0);
    assert_eq!(normalized_signed(Vec2::ZERO, vp), Vec2::new(-1.0, -1.0));
    assert_eq!(normalized_signed(vp * 0.5, vp), Vec2::ZERO);
    assert_eq!(normalized_signed(vp, vp), Vec2::new(1.0, 1.0));
    // A zero viewport reports a centered pointer instead of dividing by zero.
    assert_eq!(normalized_signed(Vec2::new(5.0, 5.0), Vec2::ZERO), Vec2::ZERO);
}

#[test]
fn magnetic_pull_is_proportional_to_the_center_offset() {
    let pull = magnetic_offset(
        Vec2::new(110.0, 60.0),
        Vec2::new(50.0, 20.0),
        Vec2::new(100.0, 40.0),
        0.18,
    );
    assert!((pull.x - 1.8).abs() < 1e-5);
    assert!((pull.y - 3.6).abs() < 1e-5);

    // Pointer dead on the button center: no pull at all.
    let centered = magnetic_offset(
        Vec2::new(100.0, 40.0),
        Vec2::new(50.0, 20.0),
        Vec2::new(100.0, 40.0),
        0.18,
    );
    assert_eq!(centered, Vec2::ZERO);
}

#[test]
fn parallax_moves_against_the_pointer_for_negative_shift() {
    let shift = parallax_shift(Vec2::new(1.0, -0.5), Vec2::new(-10.0, -6.0));
    assert_eq!(shift, Vec2::new(-10.0, 3.0));
    assert_eq!(parallax_shift(Vec2::ZERO, Vec2::new(-10.0, -6.0)), Vec2::ZERO);
}
