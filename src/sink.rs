use crate::constants::SLOT_ATTRIBUTE;
use card_core::{ParameterSink, TextSlot};
use web_sys as web;

/// Writes engine output onto the card element: CSS custom properties on its
/// inline style, data attributes, and the text of `[data-slot]` children.
pub struct StyleSink {
    card: web::HtmlElement,
}

impl StyleSink {
    pub fn new(card: web::HtmlElement) -> Self {
        Self { card }
    }

    pub fn card(&self) -> &web::HtmlElement {
        &self.card
    }
}

impl ParameterSink for StyleSink {
    fn set_property(&mut self, name: &str, value: &str) {
        _ = self.card.style().set_property(name, value);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        _ = self.card.set_attribute(name, value);
    }

    fn set_text(&mut self, slot: TextSlot, value: &str) {
        let selector = format!("[{}=\"{}\"]", SLOT_ATTRIBUTE, slot.name());
        if let Ok(Some(el)) = self.card.query_selector(&selector) {
            el.set_text_content(Some(value));
        }
    }
}
