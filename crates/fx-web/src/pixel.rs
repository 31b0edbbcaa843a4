// Pure pixel math for the style writers and the canvas painter.
// No platform types here so the host-side tests can include this file.

use glam::Vec2;

/// Canvas backing size for a CSS size under a device pixel ratio. Never zero
/// so the 2D context always has a surface to draw on.
#[inline]
pub fn backing_px(css: f64, dpr: f64) -> u32 {
    ((css * dpr) as u32).max(1)
}

/// `left`/`top` style value.
#[inline]
pub fn px(value: f32) -> String {
    format!("{value}px")
}

/// `transform` style value for an orbit tag.
#[inline]
pub fn scale_transform(value: f32) -> String {
    format!("scale({value})")
}

/// Map a viewport-fraction position onto the canvas backing store.
#[inline]
pub fn star_center(frac: Vec2, canvas: Vec2) -> Vec2 {
    frac * canvas
}
