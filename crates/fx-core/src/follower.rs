//! Exponential pointer followers: the aurora glows and the custom cursor.

use glam::Vec2;

use crate::config::{AuroraConfig, CursorConfig};

/// One point easing toward a target by a fixed per-frame fraction.
#[derive(Clone, Copy, Debug)]
pub struct Follower {
    pos: Vec2,
    factor: f32,
}

impl Follower {
    pub fn new(start: Vec2, factor: f32) -> Self {
        Self { pos: start, factor }
    }

    #[inline]
    pub fn step(&mut self, target: Vec2) {
        self.pos += (target - self.pos) * self.factor;
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }
}

/// Two glow blobs trailing the pointer at different speeds. Both start at the
/// viewport center so the page loads with the glow behind the hero.
pub struct Aurora {
    primary: Follower,
    secondary: Follower,
    secondary_offset: Vec2,
    target: Vec2,
}

impl Aurora {
    pub fn new(viewport: Vec2, cfg: &AuroraConfig) -> Self {
        let center = viewport * 0.5;
        Self {
            primary: Follower::new(center, cfg.primary_ease),
            secondary: Follower::new(center, cfg.secondary_ease),
            secondary_offset: cfg.secondary_offset,
            target: center,
        }
    }

    pub fn set_target(&mut self, p: Vec2) {
        self.target = p;
    }

    pub fn tick(&mut self) {
        self.primary.step(self.target);
        self.secondary.step(self.target);
    }

    pub fn primary_pos(&self) -> Vec2 {
        self.primary.pos()
    }

    pub fn secondary_pos(&self) -> Vec2 {
        self.secondary.pos() + self.secondary_offset
    }
}

/// Custom cursor: the dot snaps to the pointer, the ring trails it. Hidden
/// until the pointer first moves and again when it leaves the document.
pub struct CursorTrail {
    dot: Vec2,
    ring: Follower,
    visible: bool,
}

impl CursorTrail {
    pub fn new(cfg: &CursorConfig) -> Self {
        Self {
            dot: Vec2::ZERO,
            ring: Follower::new(Vec2::ZERO, cfg.ring_ease),
            visible: false,
        }
    }

    pub fn set_target(&mut self, p: Vec2) {
        if !self.visible {
            // First sighting: snap the ring too, no swoop-in from the origin.
            self.ring = Follower::new(p, self.ring.factor);
            self.visible = true;
        }
        self.dot = p;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn tick(&mut self) {
        if self.visible {
            self.ring.step(self.dot);
        }
    }

    pub fn dot_pos(&self) -> Vec2 {
        self.dot
    }

    pub fn ring_pos(&self) -> Vec2 {
        self.ring.pos()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
