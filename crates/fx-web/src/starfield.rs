//! Canvas 2D painter for the starfield.

use fx_core::starfield::Star;
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::dom;
use crate::pixel;

pub struct Painter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Painter {
    /// None when the 2D context is unavailable; the effect then stands down.
    pub fn new(canvas: web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        dom::sync_canvas_backing_size(&canvas);
        Some(Self { canvas, ctx })
    }

    pub fn sync_backing(&self) {
        dom::sync_canvas_backing_size(&self.canvas);
    }

    /// Clear, then one filled arc per star. Positions are viewport fractions
    /// mapped onto the backing store; radii are CSS pixels scaled by the
    /// device pixel ratio.
    pub fn draw(&self, stars: &[Star]) {
        let size = Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32);
        self.ctx
            .clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
        set_fill_style(&self.ctx, "#ffffff");
        let dpr = web::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        for star in stars {
            let center = pixel::star_center(star.pos, size);
            self.ctx.set_global_alpha(star.alpha() as f64);
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                center.x as f64,
                center.y as f64,
                star.radius as f64 * dpr,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.fill();
        }
        self.ctx.set_global_alpha(1.0);
    }
}

fn set_fill_style(ctx: &web::CanvasRenderingContext2d, value: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("fillStyle"),
        &JsValue::from_str(value),
    );
}
