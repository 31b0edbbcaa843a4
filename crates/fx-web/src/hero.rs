//! The scripted hero entrance and the scroll reveals.
//!
//! Pure sequencing against the external tween engine: the image un-clips,
//! nav and copy slide in, then each orbit tag fades up from its pre-placed
//! position. The last tag's completion is what opens the ring's reveal gate
//! and starts the spin, so the entrance and the orbit never fight over
//! opacity.

use fx_core::Stage;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::dom;
use crate::tween::{self, Vars};

/// Plays the entrance. Returns false when the tween engine is missing, in
/// which case the caller opens the ring immediately instead.
pub fn run_entrance(page: &dom::PageElements, stage: &Rc<RefCell<Stage>>) -> bool {
    let tl = match tween::timeline("power3.out") {
        Some(tl) => tl,
        None => return false,
    };

    // 1. Circular image reveal with a parallel settle of the image scale.
    tl.to(
        &JsValue::from_str("#hero-img-wrap"),
        &Vars::new()
            .str("clipPath", "circle(90% at 50% 45%)")
            .num("duration", 3.0)
            .str("ease", "power2.inOut")
            .num("delay", 0.3)
            .build(),
    );
    tl.to_at(
        &JsValue::from_str(".hero-img"),
        &Vars::new()
            .num("scale", 1.0)
            .num("duration", 3.5)
            .str("ease", "power2.out")
            .build(),
        "<",
    );

    // 2. Nav. The tween's y-transform would clobber the CSS centering
    // transform, so clear it on completion and restore translateX(-50%).
    let recenter = Closure::wrap(Box::new(|| {
        if let Some(doc) = web::window().and_then(|w| w.document()) {
            if let Some(nav) = dom::html_by_id(&doc, "nav") {
                dom::set_style(&nav, "transform", "translateX(-50%)");
            }
        }
    }) as Box<dyn FnMut()>);
    tl.to_at(
        &JsValue::from_str("#nav"),
        &Vars::new()
            .num("opacity", 1.0)
            .num("y", 0.0)
            .num("duration", 0.7)
            .str("clearProps", "transform")
            .js("onComplete", recenter.as_ref())
            .build(),
        "-=2.2",
    );
    recenter.forget();

    // 3-6. Eyebrow, staggered title words, subtitle, buttons.
    tl.to_at(
        &JsValue::from_str(".hero-eyebrow"),
        &Vars::new()
            .num("opacity", 1.0)
            .num("y", 0.0)
            .num("duration", 0.6)
            .build(),
        "-=1.6",
    );
    tl.to_at(
        &JsValue::from_str(".h1-word"),
        &Vars::new()
            .num("opacity", 1.0)
            .num("y", 0.0)
            .num("duration", 1.1)
            .num("stagger", 0.2)
            .str("ease", "power4.out")
            .build(),
        "-=1.3",
    );
    tl.to_at(
        &JsValue::from_str(".hero-sub"),
        &Vars::new()
            .num("opacity", 1.0)
            .num("y", 0.0)
            .num("duration", 0.7)
            .build(),
        "-=0.5",
    );
    tl.to_at(
        &JsValue::from_str(".hero-btns"),
        &Vars::new()
            .num("opacity", 1.0)
            .num("y", 0.0)
            .num("duration", 0.65)
            .build(),
        "-=0.35",
    );

    // 7. Tags fade up from the positions the init pass already wrote.
    let tags = page.tags.clone();
    let stage_for_tags = stage.clone();
    let reveal_tags = Closure::wrap(Box::new(move || {
        play_tag_reveals(&tags, &stage_for_tags);
    }) as Box<dyn FnMut()>);
    tl.call_at(reveal_tags.as_ref().unchecked_ref(), &JsValue::NULL, "-=0.3");
    reveal_tags.forget();

    true
}

fn play_tag_reveals(tags: &[web::HtmlElement], stage: &Rc<RefCell<Stage>>) {
    let (targets, count) = {
        let st = stage.borrow();
        let targets: Vec<(f32, f32)> = st
            .orbit
            .placements()
            .iter()
            .enumerate()
            .map(|(i, p)| (st.orbit.depth_opacity(i), p.scale))
            .collect();
        (targets, st.orbit.count())
    };
    for (i, (el, (opacity, scale))) in tags.iter().zip(targets).enumerate() {
        let from = Vars::new().num("opacity", 0.0).num("scale", 0.5).build();
        let mut to = Vars::new()
            .num("opacity", opacity as f64)
            .num("scale", scale as f64)
            .num("duration", 0.8)
            .num("delay", i as f64 * 0.08)
            .str("ease", "back.out(1.5)");
        // Equal durations, increasing delays: the last tween finishes last,
        // so its completion opens the gate and starts the spin.
        if i + 1 == count {
            let stage = stage.clone();
            let open = Closure::wrap(Box::new(move || {
                let mut st = stage.borrow_mut();
                st.orbit.reveal();
                if st.orbit.start() {
                    log::info!("[orbit] ring started");
                }
            }) as Box<dyn FnMut()>);
            to = to.js("onComplete", open.as_ref());
            open.forget();
        }
        tween::play_from(el.as_ref(), from, to.build());
    }
}

/// Play-once rises for `.reveal` sections as they scroll into view. Skipped
/// entirely when the ScrollTrigger plugin is not on the page.
pub fn install_scroll_reveals(document: &web::Document) {
    if !tween::register_scroll_trigger() {
        return;
    }
    for el in dom::html_elements(document, ".reveal") {
        let trigger = Vars::new()
            .js("trigger", el.as_ref())
            .str("start", "top 85%")
            .flag("once", true)
            .build();
        let from = Vars::new().num("opacity", 0.0).num("y", 24.0).build();
        let to = Vars::new()
            .num("opacity", 1.0)
            .num("y", 0.0)
            .num("duration", 0.9)
            .str("ease", "power3.out")
            .js("scrollTrigger", trigger.as_ref())
            .build();
        tween::play_from(el.as_ref(), from, to);
    }
}
