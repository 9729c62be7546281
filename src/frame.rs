use crate::dom;
use crate::prism::CanvasPrism;
use crate::sink::StyleSink;
use card_core::{Engine, Message};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Engine,
    pub sink: StyleSink,
    pub prism: Option<CanvasPrism>,
    pub started: Instant,
}

impl FrameContext {
    /// Engine clock shared by pointer timestamps and ticks.
    pub fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    pub fn dispatch(&mut self, msg: Message) {
        if let Err(e) = self.engine.update(msg, &mut self.sink) {
            log::warn!("[engine] rejected update: {}", e);
        }
    }

    pub fn frame(&mut self) {
        let now = self.now_ms();
        self.engine.tick(now, &mut self.sink);
        if let Some(prism) = &mut self.prism {
            self.engine.paint_stripes(prism);
        }
    }

    /// Re-measure the card and resize the stripe surface to match.
    pub fn resize(&mut self) {
        let size = dom::surface_size(self.sink.card());
        self.dispatch(Message::Resized(size));
        if let Some(prism) = &self.prism {
            prism.resize(size);
        }
    }

    pub fn apply_all(&mut self) {
        self.engine.apply_all(&mut self.sink);
    }

    pub fn apply_settings(&mut self) {
        self.engine.apply_settings(&mut self.sink);
    }

    pub fn apply_preset(&mut self, id: &str) -> bool {
        self.engine.apply_preset(id, &mut self.sink)
    }
}

/// Handle to a running `requestAnimationFrame` loop.
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl LoopHandle {
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Cancel the pending frame and release the tick closure.
    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(w), Some(id)) = (web::window(), self.raf_id.take()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, raf_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            raf_id.set(Some(id));
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let running = Rc::new(Cell::new(true));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let raf_id_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &raf_id_tick);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &raf_id);

    LoopHandle {
        running,
        raf_id,
        tick,
    }
}
