use glam::Vec2;

#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub pos: Vec2,
    /// False until the first move, and again after the pointer leaves the
    /// document.
    pub inside: bool,
}

/// Map a viewport point into [-1, 1] per axis, 0 at the center.
/// A degenerate viewport maps everything to the center.
#[inline]
pub fn normalized_signed(pos: Vec2, viewport: Vec2) -> Vec2 {
    let nx = if viewport.x > 0.0 {
        (pos.x / viewport.x - 0.5) * 2.0
    } else {
        0.0
    };
    let ny = if viewport.y > 0.0 {
        (pos.y / viewport.y - 0.5) * 2.0
    } else {
        0.0
    };
    Vec2::new(nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0))
}

/// Pull for a magnetic element: pointer offset from the element's center,
/// scaled down. The external tween animates the element to this value.
#[inline]
pub fn magnetic_offset(pointer: Vec2, rect_origin: Vec2, rect_size: Vec2, strength: f32) -> Vec2 {
    (pointer - rect_origin - rect_size * 0.5) * strength
}

/// Parallax drift for the hero image given the signed normalized pointer.
#[inline]
pub fn parallax_shift(normalized: Vec2, shift: Vec2) -> Vec2 {
    normalized * shift
}
