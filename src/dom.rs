use crate::constants::{FALLBACK_DPR, LOOK_ATTRIBUTE, PRESET_ATTRIBUTE};
use card_core::{Look, SettingField, Settings, SurfaceSize, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up an element by id and cast it to the expected type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has the wrong element type: {:?}", id, e))
}

/// Current viewport size in CSS px.
pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::new(1.0, 1.0);
    };
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0) as f32
    };
    Viewport::new(dim(w.inner_width()), dim(w.inner_height()))
}

pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|dpr| *dpr > 0.0)
        .unwrap_or(FALLBACK_DPR)
}

/// Bounding box of `el` in CSS px together with the device pixel ratio.
pub fn surface_size(el: &web::Element) -> SurfaceSize {
    let rect = el.get_bounding_client_rect();
    SurfaceSize::new(
        rect.width() as f32,
        rect.height() as f32,
        device_pixel_ratio() as f32,
    )
}

/// Match the canvas backing store to `size`, keeping its CSS size unchanged.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, size: SurfaceSize) {
    let (w_px, h_px) = size.backing();
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", size.width));
    _ = style.set_property("height", &format!("{}px", size.height));
}

/// Default settings overridden by `data-*` attributes on the card element.
///
/// Malformed values are logged and skipped.
pub fn read_settings(card: &web::Element) -> Settings {
    let mut settings = Settings::default();
    for field in SettingField::ALL {
        let Some(raw) = card.get_attribute(field.data_attribute()) else {
            continue;
        };
        if let Err(e) = field
            .parse_value(&raw)
            .and_then(|v| settings.set(field, v))
        {
            log::warn!("[config] {}", e);
        }
    }
    if let Some(raw) = card.get_attribute(LOOK_ATTRIBUTE) {
        match raw.parse::<Look>() {
            Ok(look) => settings.look = look,
            Err(e) => log::warn!("[config] {}", e),
        }
    }
    if let Some(id) = card.get_attribute(PRESET_ATTRIBUTE) {
        settings.preset_id = id;
    }
    settings
}
