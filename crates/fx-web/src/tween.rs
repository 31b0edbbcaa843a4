//! Boundary to the page's external tween engine (the `gsap` global and its
//! ScrollTrigger plugin).
//!
//! The engine is a page dependency, not ours: it arrives via classic script
//! tags and is looked up on the JS global at call time. Every helper checks
//! for it first and no-ops when the page did not load it, so a missing engine
//! costs the flourish, never the frame loop.

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    /// Handle returned by `gsap.timeline`.
    pub type Timeline;

    #[wasm_bindgen(js_namespace = gsap, js_name = to)]
    fn gsap_to(target: &JsValue, vars: &js_sys::Object);

    #[wasm_bindgen(js_namespace = gsap, js_name = fromTo)]
    fn gsap_from_to(target: &JsValue, from: &js_sys::Object, to: &js_sys::Object);

    #[wasm_bindgen(js_namespace = gsap, js_name = timeline)]
    fn gsap_timeline(vars: &js_sys::Object) -> Timeline;

    #[wasm_bindgen(js_namespace = gsap, js_name = registerPlugin)]
    fn gsap_register_plugin(plugin: &JsValue);

    /// `timeline.to(target, vars)`, appended at the end of the timeline.
    #[wasm_bindgen(method, js_name = to)]
    pub fn to(this: &Timeline, target: &JsValue, vars: &js_sys::Object);

    /// `timeline.to(target, vars, position)` with a position like `"-=2.2"`.
    #[wasm_bindgen(method, js_name = to)]
    pub fn to_at(this: &Timeline, target: &JsValue, vars: &js_sys::Object, position: &str);

    /// `timeline.call(callback, params, position)`.
    #[wasm_bindgen(method, js_name = call)]
    pub fn call_at(this: &Timeline, callback: &js_sys::Function, params: &JsValue, position: &str);
}

/// Whether the page loaded the tween engine at all.
pub fn engine_loaded() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("gsap")).unwrap_or(false)
}

/// Registers ScrollTrigger with the engine; false when either global is
/// missing, in which case scroll reveals are skipped.
pub fn register_scroll_trigger() -> bool {
    if !engine_loaded() {
        return false;
    }
    match js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("ScrollTrigger")) {
        Ok(plugin) if !plugin.is_undefined() => {
            gsap_register_plugin(&plugin);
            true
        }
        _ => false,
    }
}

/// New timeline with a default ease for every child tween; `None` when the
/// page did not load the engine.
pub fn timeline(default_ease: &str) -> Option<Timeline> {
    if !engine_loaded() {
        return None;
    }
    let defaults = Vars::new().str("ease", default_ease).build();
    Some(gsap_timeline(&Vars::new().js("defaults", defaults.as_ref()).build()))
}

pub fn play(target: &JsValue, vars: js_sys::Object) {
    if engine_loaded() {
        gsap_to(target, &vars);
    }
}

pub fn play_from(target: &JsValue, from: js_sys::Object, to: js_sys::Object) {
    if engine_loaded() {
        gsap_from_to(target, &from, &to);
    }
}

/// One eased pull toward the pointer for a magnetic element.
pub fn magnetic_pull(el: &web::HtmlElement, pull: Vec2) {
    let vars = Vars::new()
        .num("x", pull.x as f64)
        .num("y", pull.y as f64)
        .num("duration", 0.4)
        .str("ease", "power2.out")
        .build();
    play(el.as_ref(), vars);
}

/// Springy return to rest when the pointer leaves a magnetic element.
pub fn magnetic_release(el: &web::HtmlElement) {
    let vars = Vars::new()
        .num("x", 0.0)
        .num("y", 0.0)
        .num("duration", 0.7)
        .str("ease", "elastic.out(1, 0.4)")
        .build();
    play(el.as_ref(), vars);
}

/// Slow drift of the hero image toward its parallax offset.
pub fn parallax_drift(el: &web::HtmlElement, shift: Vec2) {
    let vars = Vars::new()
        .num("x", shift.x as f64)
        .num("y", shift.y as f64)
        .num("duration", 2.5)
        .str("ease", "power2.out")
        .build();
    play(el.as_ref(), vars);
}

/// Builder for the plain JS objects the engine takes as tween vars.
pub struct Vars {
    obj: js_sys::Object,
}

impl Vars {
    pub fn new() -> Self {
        Self {
            obj: js_sys::Object::new(),
        }
    }

    pub fn num(self, key: &str, value: f64) -> Self {
        self.js(key, &JsValue::from_f64(value))
    }

    pub fn str(self, key: &str, value: &str) -> Self {
        self.js(key, &JsValue::from_str(value))
    }

    pub fn flag(self, key: &str, value: bool) -> Self {
        self.js(key, &JsValue::from_bool(value))
    }

    pub fn js(self, key: &str, value: &JsValue) -> Self {
        let _ = js_sys::Reflect::set(&self.obj, &JsValue::from_str(key), value);
        self
    }

    pub fn build(self) -> js_sys::Object {
        self.obj
    }
}

impl Default for Vars {
    fn default() -> Self {
        Self::new()
    }
}
