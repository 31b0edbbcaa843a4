//! One owner for every effect on the page.
//!
//! A single stage instance is built at init and shared with the frame loop,
//! so nothing lives in module-level state. All mutation happens in two
//! places: `handle_event` for discrete input and `tick` once per animation
//! frame, which keeps the whole system on the cooperative single-callback
//! schedule the effects assume.

use glam::Vec2;

use crate::config::StageConfig;
use crate::events::InputEvent;
use crate::follower::{Aurora, CursorTrail};
use crate::input::PointerState;
use crate::orbit::OrbitRing;
use crate::starfield::Starfield;

pub struct Stage {
    pub config: StageConfig,
    pub orbit: OrbitRing,
    pub aurora: Aurora,
    pub cursor: CursorTrail,
    pub starfield: Starfield,
    pub pointer: PointerState,
    viewport: Vec2,
}

impl Stage {
    /// `tag_sizes` come pre-measured from the page, in the same order as the
    /// tag elements; an empty list degenerates to a no-op ring.
    pub fn new(config: StageConfig, tag_sizes: Vec<Vec2>, viewport: Vec2, seed: u64) -> Self {
        let orbit = OrbitRing::new(tag_sizes, viewport, config.orbit.clone());
        let aurora = Aurora::new(viewport, &config.aurora);
        let cursor = CursorTrail::new(&config.cursor);
        let starfield = Starfield::new(&config.starfield, seed);
        log::debug!(
            "[stage] {} tags, {} stars, viewport {}x{}",
            orbit.count(),
            starfield.stars().len(),
            viewport.x,
            viewport.y
        );
        Self {
            config,
            orbit,
            aurora,
            cursor,
            starfield,
            pointer: PointerState::default(),
            viewport,
        }
    }

    #[inline]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn handle_event(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::PointerMoved { x, y } => {
                let p = Vec2::new(x, y);
                self.pointer.pos = p;
                self.pointer.inside = true;
                self.aurora.set_target(p);
                self.cursor.set_target(p);
            }
            InputEvent::PointerLeft => {
                self.pointer.inside = false;
                self.cursor.hide();
            }
            InputEvent::Resized { width, height } => {
                self.viewport = Vec2::new(width, height);
                self.orbit.on_resize(self.viewport);
            }
        }
    }

    /// One cooperative frame step for every effect. The ring only advances
    /// while its own gate is open.
    pub fn tick(&mut self) {
        self.aurora.tick();
        self.cursor.tick();
        self.starfield.tick();
        self.orbit.tick();
    }
}
