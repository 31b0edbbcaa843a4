//! Elliptical tag carousel with faked depth.
//!
//! A fixed set of decorative tags sits on a tilted ellipse around a focal
//! point below the hero image. Each tag's angular slot is its index; the whole
//! ring drifts by a constant angle per frame. Depth is faked from the ellipse
//! parameterization itself: `sin(angle)` is -1 at the far point and +1 at the
//! near point, and scale, opacity and stacking are mapped straight off it.
//! The ring computes placements only; the web frontend owns the style writes.

use std::f32::consts::TAU;

use glam::Vec2;
use smallvec::SmallVec;

use crate::config::OrbitParams;

/// Computed visual state for one tag. `left`/`top` are the element's top-left
/// corner in CSS pixels (the ellipse point is the element's center).
#[derive(Clone, Copy, Debug)]
pub struct TagPlacement {
    pub left: f32,
    pub top: f32,
    pub scale: f32,
    /// `None` while a reveal gate is closed; the element keeps whatever
    /// opacity the entrance tween left on it.
    pub opacity: Option<f32>,
    pub z_index: i32,
}

/// Placement buffer; rings are small so this stays on the stack.
pub type Placements = SmallVec<[TagPlacement; 8]>;

/// The ring itself. One instance per page, owned by the stage; the element
/// handles stay on the web side in the same order as `sizes`.
pub struct OrbitRing {
    /// Measured element sizes, indexed like the page's tag elements. The
    /// count is fixed for the ring's lifetime.
    sizes: Vec<Vec2>,
    /// Frames advanced so far. The rotation phase is derived as
    /// `ticks * angular_speed`, which keeps property checks exact (no
    /// accumulated float error) and makes the phase monotonic by
    /// construction.
    ticks: u64,
    center: Vec2,
    radii: Vec2,
    viewport: Vec2,
    params: OrbitParams,
    active: bool,
    revealed: bool,
}

impl OrbitRing {
    /// Build the ring and size it to the viewport. The caller is expected to
    /// apply `placements()` once right away so tags start on the ellipse even
    /// before the ring spins.
    pub fn new(sizes: Vec<Vec2>, viewport: Vec2, params: OrbitParams) -> Self {
        let revealed = !params.reveal_gate;
        let mut ring = Self {
            sizes,
            ticks: 0,
            center: Vec2::ZERO,
            radii: Vec2::ZERO,
            viewport: Vec2::ZERO,
            params,
            active: false,
            revealed,
        };
        ring.on_resize(viewport);
        ring
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.sizes.len()
    }

    /// Accumulated rotation phase in radians. Monotonic, never reset;
    /// trigonometric periodicity handles the wraparound.
    #[inline]
    pub fn angle_offset(&self) -> f32 {
        self.params.angular_speed * self.ticks as f32
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn radii(&self) -> Vec2 {
        self.radii
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Recompute the focal point and semi-axes for a new viewport. Leaves the
    /// rotation phase and tag count alone, and does not place anything: while
    /// the ring is inactive, on-screen positions go stale until the next
    /// placement pass.
    pub fn on_resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        self.center = Vec2::new(viewport.x * 0.5, viewport.y * self.params.center_y_frac);
        self.radii = Vec2::new(
            (viewport.x * self.params.radius_x_frac).min(self.params.radius_x_max),
            (viewport.y * self.params.radius_y_frac).min(self.params.radius_y_max),
        );
    }

    /// Refresh measured tag sizes after a resize. The count is immutable, so
    /// a mismatched slice is ignored.
    pub fn set_sizes(&mut self, sizes: &[Vec2]) {
        if sizes.len() == self.sizes.len() {
            self.sizes.copy_from_slice(sizes);
        }
    }

    /// Advance one frame while active.
    #[inline]
    pub fn tick(&mut self) {
        if self.active {
            self.ticks += 1;
        }
    }

    /// Begin spinning. Returns false when the ring was already active, so a
    /// second caller knows not to drive it again.
    pub fn start(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        log::debug!("[orbit] started, {} tags", self.count());
        true
    }

    pub fn stop(&mut self) {
        self.active = false;
        log::debug!("[orbit] stopped");
    }

    /// Open the opacity gate. One-way: once the entrance sequence has
    /// finished, placements drive opacity for the rest of the session.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Depth-derived opacity for one tag, ignoring the reveal gate. The
    /// entrance tween needs this as its end value so the handoff to the
    /// placement loop is seamless.
    pub fn depth_opacity(&self, index: usize) -> f32 {
        let n = self.count();
        if n == 0 {
            return self.params.opacity_min;
        }
        let angle = (index as f32 / n as f32) * TAU + self.angle_offset();
        let t = (angle.sin() + 1.0) * 0.5;
        self.params.opacity_min + (self.params.opacity_max - self.params.opacity_min) * t
    }

    /// Compute every tag's visual state from the current phase. Pure with
    /// respect to the ring; never fails. Zero tags yield an empty buffer and
    /// a zero-sized viewport just collapses everything onto the padding.
    pub fn placements(&self) -> Placements {
        let mut out = Placements::new();
        let n = self.count();
        if n == 0 {
            return out;
        }
        let offset = self.angle_offset();
        let (tilt_sin, tilt_cos) = self.params.tilt.sin_cos();
        for (i, size) in self.sizes.iter().enumerate() {
            let angle = (i as f32 / n as f32) * TAU + offset;

            // Ellipse-local offset, then the tilt rotation, then the focal
            // translation.
            let ex = angle.cos() * self.radii.x;
            let ey = angle.sin() * self.radii.y;
            let x = self.center.x + ex * tilt_cos - ey * tilt_sin;
            let y = self.center.y + ex * tilt_sin + ey * tilt_cos;

            // -1 = far point, +1 = near point.
            let depth = angle.sin();
            let t = (depth + 1.0) * 0.5;
            let scale =
                self.params.scale_min + (self.params.scale_max - self.params.scale_min) * t;
            let alpha =
                self.params.opacity_min + (self.params.opacity_max - self.params.opacity_min) * t;
            let z_index = if depth > 0.0 {
                self.params.z_front
            } else {
                self.params.z_back
            };

            let mut corner = Vec2::new(x - size.x * 0.5, y - size.y * 0.5);
            if self.params.clamp_to_viewport {
                corner = clamp_corner(corner, *size, self.viewport, self.params.clamp_pad);
            }

            out.push(TagPlacement {
                left: corner.x,
                top: corner.y,
                scale,
                opacity: self.revealed.then_some(alpha),
                z_index,
            });
        }
        out
    }
}

/// Keep a tag's corner inside the padded viewport, per axis. When the
/// viewport is too small for the element the lower bound wins.
#[inline]
fn clamp_corner(corner: Vec2, size: Vec2, viewport: Vec2, pad: f32) -> Vec2 {
    let hi_x = (viewport.x - size.x - pad).max(pad);
    let hi_y = (viewport.y - size.y - pad).max(pad);
    Vec2::new(corner.x.clamp(pad, hi_x), corner.y.clamp(pad, hi_y))
}
