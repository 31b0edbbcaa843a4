//! DOM lookup and style plumbing.
//!
//! Every decorative element is optional: lookups return `Option`/empty and
//! each effect silently stands down when its element is missing. Style writes
//! ignore failures the same way.

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::pixel;

/// Handles to everything on the page the effects touch, in document order
/// where order matters (the orbit tags).
pub struct PageElements {
    pub tags: Vec<web::HtmlElement>,
    pub aurora_primary: Option<web::HtmlElement>,
    pub aurora_secondary: Option<web::HtmlElement>,
    pub cursor_dot: Option<web::HtmlElement>,
    pub cursor_ring: Option<web::HtmlElement>,
    pub starfield: Option<web::HtmlCanvasElement>,
    pub hero_img: Option<web::HtmlElement>,
}

impl PageElements {
    pub fn discover(document: &web::Document) -> Self {
        // The ring belongs to the hero section; without it there is nothing
        // to orbit, whatever else carries the tag class.
        let tags = if document.get_element_by_id("hero").is_some() {
            html_elements(document, ".orbit-tag")
        } else {
            Vec::new()
        };
        Self {
            tags,
            aurora_primary: html_by_id(document, "aurora"),
            aurora_secondary: html_by_id(document, "aurora-2"),
            cursor_dot: html_by_id(document, "cursor-dot"),
            cursor_ring: html_by_id(document, "cursor-ring"),
            starfield: canvas_by_id(document, "starfield"),
            hero_img: html_by_id(document, "hero-img"),
        }
    }

    /// Tag boxes as laid out, before any transform is applied.
    pub fn measure_tags(&self) -> Vec<Vec2> {
        self.tags
            .iter()
            .map(|el| Vec2::new(el.offset_width() as f32, el.offset_height() as f32))
            .collect()
    }
}

#[inline]
pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

pub fn html_elements(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list
                .get(i)
                .and_then(|node| node.dyn_into::<web::HtmlElement>().ok())
            {
                out.push(el);
            }
        }
    }
    out
}

#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    let _ = el.style().set_property(prop, value);
}

/// Move an absolutely positioned element by its top-left corner.
#[inline]
pub fn place(el: &web::HtmlElement, left: f32, top: f32) {
    set_style(el, "left", &pixel::px(left));
    set_style(el, "top", &pixel::px(top));
}

pub fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

/// Keep the canvas backing store at CSS size times devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        canvas.set_width(pixel::backing_px(rect.width(), dpr));
        canvas.set_height(pixel::backing_px(rect.height(), dpr));
    }
}
