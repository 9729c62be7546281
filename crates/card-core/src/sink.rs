//! Publishing engine values to the render surface.
//!
//! The surface is abstract: the browser front end writes CSS custom
//! properties, data attributes and text nodes, tests record the writes.

use crate::card::{split_card_number, TextSlot};
use crate::channels::{format_channel, Channel, ChannelVector};
use crate::presets::CardAttributes;
use crate::settings::{CardDetails, Settings};
use smallvec::SmallVec;

pub trait ParameterSink {
    /// Write a CSS custom property (e.g. `--rx`).
    fn set_property(&mut self, name: &str, value: &str);
    /// Write a categorical attribute (e.g. `data-rarity`).
    fn set_attribute(&mut self, name: &str, value: &str);
    /// Replace the text of a card-face slot.
    fn set_text(&mut self, slot: TextSlot, value: &str);
}

/// One frame's worth of channel writes; sized so it never spills to the heap.
pub type PropertyBatch = SmallVec<[(&'static str, String); Channel::COUNT]>;

pub fn channel_properties(state: &ChannelVector) -> PropertyBatch {
    state
        .iter()
        .map(|(c, v)| (c.property(), format_channel(c, v)))
        .collect()
}

pub fn publish_state<S: ParameterSink + ?Sized>(state: &ChannelVector, sink: &mut S) {
    for (name, value) in channel_properties(state) {
        sink.set_property(name, &value);
    }
}

pub fn publish_settings<S: ParameterSink + ?Sized>(settings: &Settings, sink: &mut S) {
    for (name, value) in settings.properties() {
        sink.set_property(name, &value);
    }
}

pub fn publish_attributes<S: ParameterSink + ?Sized>(attrs: &CardAttributes, sink: &mut S) {
    for (name, value) in attrs.data_attributes() {
        sink.set_attribute(name, &value);
    }
}

pub fn publish_card_details<S: ParameterSink + ?Sized>(details: &CardDetails, sink: &mut S) {
    for (i, group) in split_card_number(&details.number).iter().enumerate() {
        sink.set_text(TextSlot::NumberGroup(i), group);
    }
    sink.set_text(TextSlot::Holder, &details.holder);
    sink.set_text(TextSlot::Expiry, &details.expiry);
}
