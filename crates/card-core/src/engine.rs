//! The card lighting engine: one instance per card.
//!
//! Input arrives as [`Message`] values and only ever touches `target` (or the
//! stripe surface size); [`Engine::tick`] is the only writer of `state`. The
//! caller supplies the clock, so tests can drive it with fake time.

use crate::card::TextSlot;
use crate::channels::ChannelVector;
use crate::idle::IdleOrbit;
use crate::input::{sample_pointer, Viewport};
use crate::presets::{CardAttributes, PresetRegistry};
use crate::scheduler::{IdleDetector, Mode};
use crate::settings::{CardDetails, Look, SettingField, Settings, SettingsError};
use crate::sink::{self, ParameterSink};
use crate::smoothing;
use crate::stripes::{StripeCanvas, StripeRenderer, SurfaceSize};

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    PointerMoved {
        client_x: f32,
        client_y: f32,
        viewport: Viewport,
        at_ms: f64,
    },
    PointerLeft,
    Resized(SurfaceSize),
    PresetSelected(String),
    SettingChanged { field: SettingField, value: f32 },
    LookSelected(Look),
    CardDetailsChanged(CardDetails),
}

pub struct Engine {
    state: ChannelVector,
    target: ChannelVector,
    settings: Settings,
    registry: PresetRegistry,
    attributes: CardAttributes,
    orbit: IdleOrbit,
    idle: IdleDetector,
    mode: Mode,
    stripes: StripeRenderer,
}

impl Engine {
    pub fn new(settings: Settings, registry: PresetRegistry, seed: u64) -> Self {
        Self {
            state: ChannelVector::NEUTRAL,
            target: ChannelVector::NEUTRAL,
            settings: settings.sanitized(),
            registry,
            attributes: CardAttributes::default(),
            orbit: IdleOrbit::new(seed),
            idle: IdleDetector::default(),
            mode: Mode::Active,
            stripes: StripeRenderer::default(),
        }
    }

    pub fn state(&self) -> &ChannelVector {
        &self.state
    }

    pub fn target(&self) -> &ChannelVector {
        &self.target
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn registry(&self) -> &PresetRegistry {
        &self.registry
    }

    pub fn attributes(&self) -> &CardAttributes {
        &self.attributes
    }

    /// Mode decided by the most recent tick.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn orbit(&self) -> &IdleOrbit {
        &self.orbit
    }

    pub fn stripe_surface(&self) -> Option<SurfaceSize> {
        self.stripes.size()
    }

    pub fn update<S: ParameterSink + ?Sized>(
        &mut self,
        msg: Message,
        sink: &mut S,
    ) -> Result<(), SettingsError> {
        match msg {
            Message::PointerMoved {
                client_x,
                client_y,
                viewport,
                at_ms,
            } => {
                self.target = sample_pointer(client_x, client_y, viewport, &self.settings);
                self.idle.record_input(at_ms);
            }
            Message::PointerLeft => {
                self.target = ChannelVector::NEUTRAL;
            }
            Message::Resized(size) => {
                self.stripes.resize(size);
            }
            Message::PresetSelected(id) => {
                self.apply_preset(&id, sink);
            }
            Message::SettingChanged { field, value } => {
                self.settings.set(field, value)?;
                self.apply_settings(sink);
            }
            Message::LookSelected(look) => {
                self.settings.look = look;
                self.apply_settings(sink);
            }
            Message::CardDetailsChanged(details) => {
                self.settings.card = details;
                self.apply_card_details(sink);
            }
        }
        Ok(())
    }

    /// Publish the effect magnitudes derived from the current settings.
    pub fn apply_settings<S: ParameterSink + ?Sized>(&self, sink: &mut S) {
        sink::publish_settings(&self.settings, sink);
    }

    /// Switch categorical attributes to the preset `id`.
    ///
    /// Unknown ids leave everything as it was and return `false`.
    pub fn apply_preset<S: ParameterSink + ?Sized>(&mut self, id: &str, sink: &mut S) -> bool {
        let Some(descriptor) = self.registry.get(id) else {
            log::debug!("[preset] unknown id {:?}, keeping {:?}", id, self.attributes.rarity);
            return false;
        };
        self.attributes = CardAttributes::from(descriptor);
        self.settings.preset_id = descriptor.id.to_string();
        sink::publish_attributes(&self.attributes, sink);
        log::debug!("[preset] {} -> {}", descriptor.id, descriptor.rarity);
        true
    }

    pub fn apply_card_details<S: ParameterSink + ?Sized>(&self, sink: &mut S) {
        sink::publish_card_details(&self.settings.card, sink);
    }

    /// Publish everything that is not per-frame: settings, the selected preset
    /// and the card text.
    pub fn apply_all<S: ParameterSink + ?Sized>(&mut self, sink: &mut S) {
        self.apply_settings(sink);
        let preset = self.settings.preset_id.clone();
        self.apply_preset(&preset, sink);
        self.apply_card_details(sink);
    }

    /// Advance one frame at `now_ms` of engine time.
    ///
    /// Decides the mode, lets the idle orbit write the target if idle, smooths
    /// `state` toward `target` and publishes every channel.
    pub fn tick<S: ParameterSink + ?Sized>(&mut self, now_ms: f64, sink: &mut S) -> Mode {
        let mode = self.idle.mode_at(now_ms);
        if mode != self.mode {
            log::debug!("[scheduler] {:?} -> {:?} at {:.0}ms", self.mode, mode, now_ms);
            self.mode = mode;
        }
        if mode == Mode::Idle {
            self.target = self.orbit.sample(now_ms / 1000.0, &self.settings);
        }
        smoothing::step(&mut self.state, &self.target);
        sink::publish_state(&self.state, sink);
        mode
    }

    /// Repaint the prism overlay from the current state.
    pub fn paint_stripes<C: StripeCanvas + ?Sized>(&self, canvas: &mut C) -> usize {
        self.stripes.paint(&self.state, &self.settings, canvas)
    }
}

/// A sink that drops every write, for driving the engine without a surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl ParameterSink for NullSink {
    fn set_property(&mut self, _name: &str, _value: &str) {}
    fn set_attribute(&mut self, _name: &str, _value: &str) {}
    fn set_text(&mut self, _slot: TextSlot, _value: &str) {}
}
