//! Twinkling star state for the background canvas.
//!
//! Positions are viewport fractions so the field survives a resize without
//! reseeding; the web side multiplies them out to device pixels when drawing.

use glam::Vec2;
use rand::prelude::*;

use crate::config::StarfieldConfig;

#[derive(Clone, Copy, Debug)]
pub struct Star {
    /// Position as fractions of the canvas, both in [0, 1).
    pub pos: Vec2,
    /// Dot radius in CSS pixels.
    pub radius: f32,
    /// Resting opacity the twinkle oscillates around.
    pub base_alpha: f32,
    /// Twinkle strength.
    pub amp: f32,
    /// Current sine phase, radians.
    pub phase: f32,
    /// Phase advance per frame.
    pub speed: f32,
}

impl Star {
    /// Current opacity, clamped to [0, 1] at both ends. The sum can exceed
    /// 1.0 for a bright star at its peak, and an over-range opacity is
    /// environment-dependent, so we never let it out.
    #[inline]
    pub fn alpha(&self) -> f32 {
        (self.base_alpha + self.phase.sin() * self.amp).clamp(0.0, 1.0)
    }
}

pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    /// Seeded so a given seed always yields the same sky; the frontend feeds
    /// the clock in, tests pin it.
    pub fn new(cfg: &StarfieldConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = (0..cfg.count)
            .map(|_| Star {
                pos: Vec2::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)),
                radius: rng.gen_range(cfg.radius_min..cfg.radius_max),
                base_alpha: rng.gen_range(cfg.alpha_min..cfg.alpha_max),
                amp: cfg.twinkle_amp,
                phase: rng.gen_range(0.0..std::f32::consts::TAU),
                speed: rng.gen_range(cfg.speed_min..cfg.speed_max),
            })
            .collect();
        Self { stars }
    }

    pub fn tick(&mut self) {
        for star in &mut self.stars {
            star.phase += star.speed;
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}
