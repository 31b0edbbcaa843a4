// Host-side tests for the orbit layout engine.

use fx_core::config::OrbitParams;
use fx_core::constants::CONTENT_Z;
use fx_core::orbit::OrbitRing;
use glam::Vec2;
use std::f32::consts::TAU;

fn zero_sizes(n: usize) -> Vec<Vec2> {
    vec![Vec2::ZERO; n]
}

/// Params that put the focal point at the viewport center with a circular,
/// untilted ring of radius 100 for a 200x200 viewport.
fn circular_params() -> OrbitParams {
    OrbitParams {
        center_y_frac: 0.5,
        radius_x_frac: 0.5,
        radius_x_max: 1000.0,
        radius_y_frac: 0.5,
        radius_y_max: 1000.0,
        tilt: 0.0,
        ..OrbitParams::default()
    }
}

#[test]
fn base_angles_are_uniformly_spaced() {
    let ring = OrbitRing::new(zero_sizes(8), Vec2::new(200.0, 200.0), circular_params());
    let placements = ring.placements();
    assert_eq!(placements.len(), 8);
    for (i, p) in placements.iter().enumerate() {
        let angle = (i as f32 / 8.0) * TAU;
        let expected_x = 100.0 + 100.0 * angle.cos();
        let expected_y = 100.0 + 100.0 * angle.sin();
        assert!(
            (p.left - expected_x).abs() < 1e-3,
            "tag {i}: left {} vs {expected_x}",
            p.left
        );
        assert!(
            (p.top - expected_y).abs() < 1e-3,
            "tag {i}: top {} vs {expected_y}",
            p.top
        );
    }
}

#[test]
fn scale_and_opacity_stay_within_configured_bounds() {
    // Spin fast enough to sweep several full revolutions.
    let params = OrbitParams {
        angular_speed: 0.1,
        ..OrbitParams::default()
    };
    let (scale_min, scale_max) = (params.scale_min, params.scale_max);
    let (op_min, op_max) = (params.opacity_min, params.opacity_max);
    let mut ring = OrbitRing::new(
        vec![Vec2::new(80.0, 30.0); 5],
        Vec2::new(1200.0, 800.0),
        params,
    );
    assert!(ring.start());
    for _ in 0..400 {
        ring.tick();
        for p in ring.placements() {
            assert!(p.scale >= scale_min - 1e-6 && p.scale <= scale_max + 1e-6);
            let alpha = p.opacity.expect("no reveal gate configured");
            assert!(alpha >= op_min - 1e-6 && alpha <= op_max + 1e-6);
        }
    }
}

#[test]
fn stacking_follows_depth_sign() {
    let params = circular_params();
    let (z_front, z_back) = (params.z_front, params.z_back);
    let ring = OrbitRing::new(zero_sizes(4), Vec2::new(200.0, 200.0), params);
    let placements = ring.placements();
    // Angles 0, pi/2, pi, 3pi/2: only the second tag has sin(angle) > 0.
    assert_eq!(placements[0].z_index, z_back);
    assert_eq!(placements[1].z_index, z_front);
    assert_eq!(placements[2].z_index, z_back);
    assert_eq!(placements[3].z_index, z_back);
    assert!(z_front < CONTENT_Z);
    assert!(z_back < z_front);
}

#[test]
fn resize_changes_geometry_but_not_phase_or_count() {
    let mut ring = OrbitRing::new(
        zero_sizes(6),
        Vec2::new(1200.0, 800.0),
        OrbitParams::default(),
    );
    assert!(ring.start());
    for _ in 0..50 {
        ring.tick();
    }
    let offset_before = ring.angle_offset();

    ring.on_resize(Vec2::new(800.0, 600.0));

    assert_eq!(ring.angle_offset(), offset_before);
    assert_eq!(ring.count(), 6);
    assert!((ring.center().x - 400.0).abs() < 1e-4);
    assert!((ring.center().y - 600.0 * 0.47).abs() < 1e-4);
    assert!((ring.radii().x - 800.0 * 0.42).abs() < 1e-3);
    assert!((ring.radii().y - 600.0 * 0.20).abs() < 1e-3);
}

#[test]
fn size_refresh_requires_a_matching_count() {
    let mut ring = OrbitRing::new(zero_sizes(2), Vec2::new(200.0, 200.0), circular_params());
    let placements = ring.placements();
    let before = (placements[0].left, placements[0].top);

    // The count is fixed at init, so a mismatched slice is dropped.
    ring.set_sizes(&[Vec2::new(40.0, 20.0); 3]);
    assert_eq!(ring.count(), 2);
    let placements = ring.placements();
    assert_eq!((placements[0].left, placements[0].top), before);

    // A matching slice is picked up: corners shift by the new half-sizes.
    ring.set_sizes(&[Vec2::new(40.0, 20.0); 2]);
    let placements = ring.placements();
    assert!((placements[0].left - (before.0 - 20.0)).abs() < 1e-4);
    assert!((placements[0].top - (before.1 - 10.0)).abs() < 1e-4);
}

#[test]
fn rotation_is_exact_over_many_ticks() {
    let mut ring = OrbitRing::new(
        zero_sizes(3),
        Vec2::new(1000.0, 700.0),
        OrbitParams::default(),
    );
    // Inactive ticks must not advance the phase.
    for _ in 0..10 {
        ring.tick();
    }
    assert_eq!(ring.angle_offset(), 0.0);

    assert!(ring.start());
    for _ in 0..1000 {
        ring.tick();
    }
    let speed = OrbitParams::default().angular_speed;
    assert_eq!(ring.angle_offset(), 1000.0_f32 * speed);
}

#[test]
fn starting_twice_does_not_double_the_rate() {
    let mut ring = OrbitRing::new(
        zero_sizes(3),
        Vec2::new(1000.0, 700.0),
        OrbitParams::default(),
    );
    assert!(ring.start());
    assert!(!ring.start(), "second start must report already-active");
    for _ in 0..200 {
        ring.tick();
    }
    let speed = OrbitParams::default().angular_speed;
    assert_eq!(ring.angle_offset(), 200.0_f32 * speed);

    ring.stop();
    assert!(!ring.is_active());
    ring.tick();
    assert_eq!(ring.angle_offset(), 200.0_f32 * speed);
}

#[test]
fn clamp_keeps_tags_inside_the_padded_viewport() {
    let params = OrbitParams {
        center_y_frac: 0.5,
        radius_x_frac: 1.0,
        radius_x_max: 600.0,
        radius_y_frac: 0.1,
        radius_y_max: 170.0,
        tilt: 0.0,
        clamp_to_viewport: true,
        clamp_pad: 16.0,
        ..OrbitParams::default()
    };
    // One tag at angle 0: unclamped corner x would be 150 + 300 - 40 = 410.
    let ring = OrbitRing::new(
        vec![Vec2::new(80.0, 40.0)],
        Vec2::new(300.0, 200.0),
        params,
    );
    let placements = ring.placements();
    let p = &placements[0];
    assert!((p.left - (300.0 - 80.0 - 16.0)).abs() < 1e-4);
    // Vertical position (100 - 20 = 80) is already inside [16, 144].
    assert!((p.top - 80.0).abs() < 1e-4);
}

#[test]
fn clamp_leaves_in_bounds_tags_untouched() {
    let params = OrbitParams {
        center_y_frac: 0.5,
        radius_x_frac: 0.1,
        radius_x_max: 600.0,
        radius_y_frac: 0.1,
        radius_y_max: 170.0,
        tilt: 0.0,
        clamp_to_viewport: true,
        clamp_pad: 16.0,
        ..OrbitParams::default()
    };
    let ring = OrbitRing::new(
        vec![Vec2::new(20.0, 10.0)],
        Vec2::new(300.0, 200.0),
        params,
    );
    let placements = ring.placements();
    // Corner 150 + 30 - 10 = 170, inside [16, 264].
    assert!((placements[0].left - 170.0).abs() < 1e-4);
}

#[test]
fn reveal_gate_withholds_opacity_until_opened() {
    let params = OrbitParams {
        reveal_gate: true,
        ..OrbitParams::default()
    };
    let (op_min, op_max) = (params.opacity_min, params.opacity_max);
    let mut ring = OrbitRing::new(zero_sizes(1), Vec2::new(1000.0, 700.0), params);
    assert!(!ring.is_revealed());

    for _ in 0..3 {
        for p in ring.placements() {
            assert!(p.opacity.is_none(), "gated ring must not drive opacity");
        }
        ring.tick();
    }

    ring.reveal();
    assert!(ring.is_revealed());
    let placements = ring.placements();
    // Single tag at angle 0: depth 0, so mid-range opacity.
    let expected = (op_min + op_max) * 0.5;
    assert!((placements[0].opacity.unwrap() - expected).abs() < 1e-5);
    assert!((ring.depth_opacity(0) - expected).abs() < 1e-5);
}

#[test]
fn degenerate_rings_never_fail() {
    let empty = OrbitRing::new(vec![], Vec2::new(1200.0, 800.0), OrbitParams::default());
    assert_eq!(empty.count(), 0);
    assert!(empty.placements().is_empty());

    let params = OrbitParams {
        clamp_to_viewport: true,
        ..OrbitParams::default()
    };
    let collapsed = OrbitRing::new(vec![Vec2::new(40.0, 20.0); 3], Vec2::ZERO, params);
    for p in collapsed.placements() {
        assert!(p.left.is_finite() && p.top.is_finite());
        assert!(p.scale.is_finite());
    }
}

#[test]
fn end_to_end_scenario_matches_the_worked_numbers() {
    // 6 tags, 1200x800 viewport, rx = min(1200*0.46, 700) = 552,
    // ry = min(800*0.32, 280) = 256, tilt -12 degrees, focal (600, 368).
    let params = OrbitParams {
        center_y_frac: 0.46,
        radius_x_frac: 0.46,
        radius_x_max: 700.0,
        radius_y_frac: 0.32,
        radius_y_max: 280.0,
        tilt: (-12.0_f32).to_radians(),
        ..OrbitParams::default()
    };
    let ring = OrbitRing::new(zero_sizes(6), Vec2::new(1200.0, 800.0), params);
    assert!((ring.radii().x - 552.0).abs() < 1e-2);
    assert!((ring.radii().y - 256.0).abs() < 1e-2);
    assert!((ring.center().x - 600.0).abs() < 1e-3);
    assert!((ring.center().y - 368.0).abs() < 1e-2);

    // Tag 0 sits at angle 0: ellipse offset (552, 0) rotated by -12 degrees.
    let placements = ring.placements();
    let p = &placements[0];
    assert!((p.left - 1139.94).abs() < 0.1, "left {}", p.left);
    assert!((p.top - 253.23).abs() < 0.1, "top {}", p.top);
    // Depth sin(0) = 0: mid-range scale and opacity, far-half stacking.
    assert!((p.scale - 0.9).abs() < 1e-5);
    assert!((p.opacity.unwrap() - 0.55).abs() < 1e-5);
    assert_eq!(p.z_index, OrbitParams::default().z_back);
}
