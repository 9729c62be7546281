#![cfg(target_arch = "wasm32")]
use card_core::{CardDetails, Engine, Look, Message, PresetRegistry, SettingField};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod prism;
mod sink;

use constants::{DEFAULT_CARD_ID, DEFAULT_PRISM_CANVAS_ID};
use frame::FrameContext;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("card-lighting starting");
    Ok(())
}

/// A mounted card: engine, listeners and the animation loop.
///
/// Dropping or disposing the handle stops the loop and detaches every
/// listener.
#[wasm_bindgen]
pub struct CardLighting {
    frame_ctx: Rc<RefCell<FrameContext>>,
    frame_loop: frame::LoopHandle,
    listeners: Vec<events::Listener>,
}

#[wasm_bindgen]
impl CardLighting {
    /// Attach to `#card` (and optionally a prism canvas). Returns `undefined`
    /// and does nothing when the card element is missing.
    pub fn mount(card_id: Option<String>, canvas_id: Option<String>) -> Option<CardLighting> {
        let card_id = card_id.unwrap_or_else(|| DEFAULT_CARD_ID.to_string());
        let canvas_id = canvas_id.unwrap_or_else(|| DEFAULT_PRISM_CANVAS_ID.to_string());
        match mount_card(&card_id, &canvas_id) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::debug!("card lighting stays inert: {:#}", e);
                None
            }
        }
    }

    /// Set one numeric setting by its panel key (e.g. `tiltX`) and republish.
    pub fn set_setting(&self, name: &str, value: f32) -> Result<(), JsValue> {
        let field: SettingField = name.parse().map_err(to_js)?;
        let mut ctx = self.frame_ctx.borrow_mut();
        let ctx = &mut *ctx;
        ctx.engine
            .update(Message::SettingChanged { field, value }, &mut ctx.sink)
            .map_err(to_js)
    }

    pub fn select_look(&self, name: &str) -> Result<(), JsValue> {
        let look: Look = name.parse().map_err(to_js)?;
        self.frame_ctx
            .borrow_mut()
            .dispatch(Message::LookSelected(look));
        Ok(())
    }

    pub fn apply_settings(&self) {
        self.frame_ctx.borrow_mut().apply_settings();
    }

    /// Switch to preset `id`; returns `false` and changes nothing if unknown.
    pub fn apply_preset(&self, id: &str) -> bool {
        self.frame_ctx.borrow_mut().apply_preset(id)
    }

    pub fn apply_card_details(&self, number: String, holder: String, expiry: String) {
        self.frame_ctx
            .borrow_mut()
            .dispatch(Message::CardDetailsChanged(CardDetails {
                number,
                holder,
                expiry,
            }));
    }

    /// `[id, label]` pairs in catalogue order, for populating a preset picker.
    pub fn presets(&self) -> js_sys::Array {
        self.frame_ctx
            .borrow()
            .engine
            .registry()
            .iter()
            .map(|p| {
                js_sys::Array::of2(&JsValue::from_str(p.id), &JsValue::from_str(p.label))
            })
            .collect()
    }

    /// `[name, label]` pairs for every look.
    pub fn looks() -> js_sys::Array {
        Look::ALL
            .iter()
            .map(|l| js_sys::Array::of2(&JsValue::from_str(l.name()), &JsValue::from_str(l.label())))
            .collect()
    }

    /// `"Active"` or `"Idle"`, as decided by the last frame.
    pub fn mode(&self) -> String {
        format!("{:?}", self.frame_ctx.borrow().engine.mode())
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    pub fn dispose(&mut self) {
        self.frame_loop.stop();
        self.listeners.clear();
        log::info!("card-lighting disposed");
    }
}

impl Drop for CardLighting {
    fn drop(&mut self) {
        self.frame_loop.stop();
    }
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn mount_card(card_id: &str, canvas_id: &str) -> anyhow::Result<CardLighting> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let card: web::HtmlElement = dom::element_by_id(&document, card_id)?;

    // The stripe overlay is optional; without it the card still tilts and shines.
    let prism = match dom::element_by_id::<web::HtmlCanvasElement>(&document, canvas_id)
        .and_then(prism::CanvasPrism::new)
    {
        Ok(p) => Some(p),
        Err(e) => {
            log::debug!("no prism overlay: {:#}", e);
            None
        }
    };

    let settings = dom::read_settings(&card);
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let engine = Engine::new(settings, PresetRegistry::builtin(), seed);
    log::info!(
        "[engine] look={} preset={} prism={} phase={:.2}",
        engine.settings().look.name(),
        engine.settings().preset_id,
        prism.is_some(),
        engine.orbit().phase()
    );

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        engine,
        sink: sink::StyleSink::new(card),
        prism,
        started: Instant::now(),
    }));
    {
        let mut ctx = frame_ctx.borrow_mut();
        ctx.resize();
        ctx.apply_all();
    }

    let listeners = events::wire_input_handlers(events::InputWiring {
        window,
        frame_ctx: frame_ctx.clone(),
    });
    let frame_loop = frame::start_loop(frame_ctx.clone());

    Ok(CardLighting {
        frame_ctx,
        frame_loop,
        listeners,
    })
}
