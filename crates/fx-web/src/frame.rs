//! The per-frame driver: drain input, advance the stage, write styles.

use fx_core::orbit::OrbitRing;
use fx_core::{InputEvent, Stage};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::events::EventQueue;
use crate::pixel;
use crate::starfield::Painter;

pub struct FrameContext {
    pub stage: Rc<RefCell<Stage>>,
    pub page: dom::PageElements,
    pub queue: EventQueue,
    pub painter: Option<Painter>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut stage = self.stage.borrow_mut();

        let mut resized = false;
        for ev in self.queue.borrow_mut().drain(..) {
            if matches!(ev, InputEvent::Resized { .. }) {
                resized = true;
            }
            stage.handle_event(ev);
        }
        if resized {
            // Tag boxes and the canvas backing store both depend on layout.
            stage.orbit.set_sizes(&self.page.measure_tags());
            if let Some(p) = &self.painter {
                p.sync_backing();
            }
        }

        stage.tick();

        if let Some(el) = &self.page.aurora_primary {
            let pos = stage.aurora.primary_pos();
            dom::place(el, pos.x, pos.y);
        }
        if let Some(el) = &self.page.aurora_secondary {
            let pos = stage.aurora.secondary_pos();
            dom::place(el, pos.x, pos.y);
        }

        let cursor_alpha = if stage.cursor.is_visible() { "1" } else { "0" };
        if let Some(el) = &self.page.cursor_dot {
            let pos = stage.cursor.dot_pos();
            dom::place(el, pos.x, pos.y);
            dom::set_style(el, "opacity", cursor_alpha);
        }
        if let Some(el) = &self.page.cursor_ring {
            let pos = stage.cursor.ring_pos();
            dom::place(el, pos.x, pos.y);
            dom::set_style(el, "opacity", cursor_alpha);
        }

        if let Some(p) = &self.painter {
            p.draw(stage.starfield.stars());
        }

        // The ring writes only while spinning: the init pass placed it idle,
        // and the entrance tween owns the tags in between.
        if stage.orbit.is_active() {
            write_placements(&self.page.tags, &stage.orbit);
        }
    }
}

/// One style pass over every tag from the ring's current placements.
pub fn write_placements(tags: &[web::HtmlElement], ring: &OrbitRing) {
    for (el, p) in tags.iter().zip(ring.placements()) {
        dom::place(el, p.left, p.top);
        dom::set_style(el, "transform", &pixel::scale_transform(p.scale));
        if let Some(alpha) = p.opacity {
            dom::set_style(el, "opacity", &alpha.to_string());
        }
        dom::set_style(el, "z-index", &p.z_index.to_string());
    }
}

/// Self-rescheduling requestAnimationFrame loop driving [`FrameContext`].
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
