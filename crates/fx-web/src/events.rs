//! DOM listeners feeding the stage, plus the hand-offs to the tween engine.
//!
//! Pointer and resize listeners only translate DOM events into `InputEvent`s
//! on a shared queue; the frame callback drains it before each tick, so all
//! state mutation stays inside the single frame callback. The magnetic and
//! parallax listeners instead hand a target straight to the tween engine,
//! which owns their easing entirely.

use fx_core::input::{magnetic_offset, normalized_signed, parallax_shift};
use fx_core::InputEvent;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::tween;

pub type EventQueue = Rc<RefCell<Vec<InputEvent>>>;

pub fn install_listeners(window: &web::Window, document: &web::Document, queue: &EventQueue) {
    // Pointer position in CSS pixels, tracked over the whole document.
    {
        let queue = queue.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            queue.borrow_mut().push(InputEvent::PointerMoved {
                x: ev.client_x() as f32,
                y: ev.client_y() as f32,
            });
        }) as Box<dyn FnMut(_)>);
        let _ = document
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let queue = queue.clone();
        let closure = Closure::wrap(Box::new(move || {
            queue.borrow_mut().push(InputEvent::PointerLeft);
        }) as Box<dyn FnMut()>);
        let _ = document
            .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let queue = queue.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(w) = web::window() {
                let size = dom::viewport_size(&w);
                queue.borrow_mut().push(InputEvent::Resized {
                    width: size.x,
                    height: size.y,
                });
            }
        }) as Box<dyn FnMut()>);
        let _ =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Wires every `[data-magnetic]` element: pointer over it pulls it toward the
/// pointer, leaving springs it back.
pub fn install_magnetic(document: &web::Document, strength: f32) {
    for el in dom::html_elements(document, "[data-magnetic]") {
        {
            let target = el.clone();
            let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
                let rect = target.get_bounding_client_rect();
                let pull = magnetic_offset(
                    Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
                    Vec2::new(rect.left() as f32, rect.top() as f32),
                    Vec2::new(rect.width() as f32, rect.height() as f32),
                    strength,
                );
                tween::magnetic_pull(&target, pull);
            }) as Box<dyn FnMut(_)>);
            let _ =
                el.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let target = el.clone();
            let closure = Closure::wrap(Box::new(move || {
                tween::magnetic_release(&target);
            }) as Box<dyn FnMut()>);
            let _ = el
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

/// Drifts the hero image against the pointer. The tween engine re-eases on
/// every event, so this listener stays outside the frame loop.
pub fn install_parallax(document: &web::Document, img: web::HtmlElement, shift: Vec2) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if let Some(w) = web::window() {
            let normalized = normalized_signed(
                Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
                dom::viewport_size(&w),
            );
            tween::parallax_drift(&img, parallax_shift(normalized, shift));
        }
    }) as Box<dyn FnMut(_)>);
    let _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}
