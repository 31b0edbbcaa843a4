//! Tuning for the effect family.
//!
//! The shipped page variants differ only in these numbers (ellipse fractions,
//! rotation speed, tilt, reveal gating, viewport clamping), so each variant is
//! a `StageConfig` value, not its own code path. Two concrete presets are kept:
//! [`StageConfig::default`] matches the earliest page, [`StageConfig::showcase`]
//! the latest one with the reveal gate, viewport clamp, starfield and cursor.

use glam::Vec2;

/// Ellipse, depth and lifecycle parameters for the orbiting tag ring.
#[derive(Clone, Debug)]
pub struct OrbitParams {
    /// Ring focal point: x is always the viewport midline, y this fraction of
    /// the viewport height.
    pub center_y_frac: f32,
    /// Horizontal semi-axis as a fraction of viewport width, and its cap in px.
    pub radius_x_frac: f32,
    pub radius_x_max: f32,
    /// Vertical semi-axis as a fraction of viewport height, and its cap in px.
    /// Kept well below the horizontal pair so the ring reads as a tilted
    /// circle seen edge-on rather than a true circle.
    pub radius_y_frac: f32,
    pub radius_y_max: f32,
    /// Fixed ellipse rotation in radians; the sign picks which half of the
    /// ring reads as "near".
    pub tilt: f32,
    /// Radians advanced per animation frame while the ring is active.
    pub angular_speed: f32,
    /// Scale range mapped from depth -1..1.
    pub scale_min: f32,
    pub scale_max: f32,
    /// Opacity range mapped from depth -1..1.
    pub opacity_min: f32,
    pub opacity_max: f32,
    /// Stacking values for the near and far halves of the ring. Both must stay
    /// below `constants::CONTENT_Z` so tags never cover the hero copy.
    pub z_front: i32,
    pub z_back: i32,
    /// When set, computed opacity is withheld until `OrbitRing::reveal` is
    /// called, so the entrance tween owns opacity during page load.
    pub reveal_gate: bool,
    /// When set, tag corners are clamped into the padded viewport so no tag
    /// renders partly off-screen.
    pub clamp_to_viewport: bool,
    pub clamp_pad: f32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            center_y_frac: 0.47,
            radius_x_frac: 0.42,
            radius_x_max: 620.0,
            radius_y_frac: 0.20,
            radius_y_max: 170.0,
            tilt: (-10.0_f32).to_radians(),
            angular_speed: 0.0003,
            scale_min: 0.75,
            scale_max: 1.05,
            opacity_min: 0.30,
            opacity_max: 0.80,
            z_front: 8,
            z_back: 3,
            reveal_gate: false,
            clamp_to_viewport: false,
            clamp_pad: 16.0,
        }
    }
}

impl OrbitParams {
    /// Ring parameters of the late page variants: wider and taller ellipse,
    /// steeper tilt, slightly faster spin, reveal gate and clamp enabled.
    pub fn showcase() -> Self {
        Self {
            center_y_frac: 0.46,
            radius_x_frac: 0.46,
            radius_x_max: 700.0,
            radius_y_frac: 0.32,
            radius_y_max: 280.0,
            tilt: (-12.0_f32).to_radians(),
            angular_speed: 0.00045,
            reveal_gate: true,
            clamp_to_viewport: true,
            ..Self::default()
        }
    }
}

/// Smoothing factors for the two trailing glow elements.
#[derive(Clone, Debug)]
pub struct AuroraConfig {
    pub primary_ease: f32,
    pub secondary_ease: f32,
    /// Fixed offset applied to the secondary glow so the two blobs never
    /// fully overlap.
    pub secondary_offset: Vec2,
}

impl Default for AuroraConfig {
    fn default() -> Self {
        Self {
            primary_ease: 0.035,
            secondary_ease: 0.018,
            secondary_offset: Vec2::new(100.0, -80.0),
        }
    }
}

/// Custom cursor: the dot tracks the pointer directly, the ring trails it.
#[derive(Clone, Debug)]
pub struct CursorConfig {
    pub ring_ease: f32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self { ring_ease: 0.15 }
    }
}

/// Star population and twinkle ranges; positions are viewport fractions so a
/// resize keeps the layout.
#[derive(Clone, Debug)]
pub struct StarfieldConfig {
    pub count: usize,
    pub radius_min: f32,
    pub radius_max: f32,
    pub alpha_min: f32,
    pub alpha_max: f32,
    pub twinkle_amp: f32,
    /// Phase advance per frame, sampled per star from this range.
    pub speed_min: f32,
    pub speed_max: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 140,
            radius_min: 0.4,
            radius_max: 1.4,
            alpha_min: 0.25,
            alpha_max: 0.70,
            twinkle_amp: 0.30,
            speed_min: 0.005,
            speed_max: 0.02,
        }
    }
}

/// Everything one page variant needs.
#[derive(Clone, Debug)]
pub struct StageConfig {
    pub orbit: OrbitParams,
    pub aurora: AuroraConfig,
    pub cursor: CursorConfig,
    pub starfield: StarfieldConfig,
    /// Pull factor for magnetic buttons: local pointer offset times this.
    pub magnetic_strength: f32,
    /// Hero image drift in px at the viewport corners, per axis. Negative
    /// values move the image against the pointer.
    pub parallax_shift: Vec2,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            orbit: OrbitParams::default(),
            aurora: AuroraConfig::default(),
            cursor: CursorConfig::default(),
            starfield: StarfieldConfig::default(),
            magnetic_strength: 0.18,
            parallax_shift: Vec2::new(-10.0, -6.0),
        }
    }
}

impl StageConfig {
    pub fn showcase() -> Self {
        Self {
            orbit: OrbitParams::showcase(),
            ..Self::default()
        }
    }
}
