use super::Listener;
use crate::constants::{POINTER_LEAVE_EVENT, POINTER_MOVE_EVENT, RESIZE_EVENT};
use crate::dom;
use crate::frame::FrameContext;
use card_core::Message;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub frame_ctx: Rc<RefCell<FrameContext>>,
}

/// Listen on the whole window so the card follows the pointer anywhere on
/// screen, not only while hovered.
pub fn wire_input_handlers(w: InputWiring) -> Vec<Listener> {
    [
        wire_pointermove(&w),
        wire_pointerleave(&w),
        wire_resize(&w),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn wire_pointermove(w: &InputWiring) -> Option<Listener> {
    let frame_ctx = w.frame_ctx.clone();
    Listener::attach(&w.window, POINTER_MOVE_EVENT, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let mut ctx = frame_ctx.borrow_mut();
        let at_ms = ctx.now_ms();
        ctx.dispatch(Message::PointerMoved {
            client_x: ev.client_x() as f32,
            client_y: ev.client_y() as f32,
            viewport: dom::viewport(),
            at_ms,
        });
    })
}

fn wire_pointerleave(w: &InputWiring) -> Option<Listener> {
    let frame_ctx = w.frame_ctx.clone();
    Listener::attach(&w.window, POINTER_LEAVE_EVENT, move |_ev: web::Event| {
        frame_ctx.borrow_mut().dispatch(Message::PointerLeft);
    })
}

fn wire_resize(w: &InputWiring) -> Option<Listener> {
    let frame_ctx = w.frame_ctx.clone();
    Listener::attach(&w.window, RESIZE_EVENT, move |_ev: web::Event| {
        frame_ctx.borrow_mut().resize();
    })
}
