// Host-side tests for the pure pixel helpers.
// The web crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod pixel {
    include!("../src/pixel.rs");
}

use pixel::*;

#[test]
fn backing_size_scales_by_dpr_and_never_hits_zero() {
    assert_eq!(backing_px(800.0, 2.0), 1600);
    assert_eq!(backing_px(800.0, 1.0), 800);
    assert_eq!(backing_px(0.0, 2.0), 1);
    assert_eq!(backing_px(10.0, 0.0), 1);
}

#[test]
fn style_values_carry_their_units() {
    assert_eq!(px(12.5), "12.5px");
    assert_eq!(px(-40.0), "-40px");
    assert_eq!(scale_transform(0.9), "scale(0.9)");
}

#[test]
fn star_fractions_map_onto_the_canvas() {
    let center = star_center(glam::Vec2::new(0.5, 0.25), glam::Vec2::new(800.0, 400.0));
    assert_eq!(center, glam::Vec2::new(400.0, 100.0));
}
