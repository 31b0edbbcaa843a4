#![cfg(target_arch = "wasm32")]
//! WASM entrypoint for the landing-stage effects: build the stage from the
//! page, run the entrance, wire the listeners, start the frame loop.

mod dom;
mod events;
mod frame;
mod hero;
mod pixel;
mod starfield;
mod tween;

use fx_core::{Stage, StageConfig};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

static STARTED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("[init] effects already running; ignoring repeat start");
        return Ok(());
    }
    log::info!("fx-web starting");
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let page = dom::PageElements::discover(&document);
    let viewport = dom::viewport_size(&window);
    let seed = js_sys::Date::now() as u64;
    let stage = Rc::new(RefCell::new(Stage::new(
        StageConfig::showcase(),
        page.measure_tags(),
        viewport,
        seed,
    )));

    // One synchronous placement before anything is shown: the tags sit on
    // the ring, still transparent, waiting for the entrance.
    frame::write_placements(&page.tags, &stage.borrow().orbit);

    let painter = page.starfield.clone().and_then(starfield::Painter::new);

    let queue: events::EventQueue = Rc::new(RefCell::new(Vec::new()));
    events::install_listeners(&window, &document, &queue);
    {
        let st = stage.borrow();
        events::install_magnetic(&document, st.config.magnetic_strength);
        if let Some(img) = page.hero_img.clone() {
            events::install_parallax(&document, img, st.config.parallax_shift);
        }
    }

    if !hero::run_entrance(&page, &stage) {
        // No tween engine on the page: skip the flourish and open the ring.
        let mut st = stage.borrow_mut();
        st.orbit.reveal();
        st.orbit.start();
        log::info!("[init] tween engine missing; ring started without entrance");
    }
    hero::install_scroll_reveals(&document);

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        stage,
        page,
        queue,
        painter,
    })));
    log::info!("[init] effects running");
    Ok(())
}
