//! Tunable scalars edited by the settings panel, plus the card's text fields.

use crate::channels::format_fixed;
use crate::constants::PRISM_STRENGTH_FLOOR;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("unknown setting `{0}`")]
    UnknownField(String),
    #[error("unknown look `{0}`")]
    UnknownLook(String),
    #[error("setting `{field}` needs a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("setting `{field}` needs a number, got `{raw}`")]
    NotANumber { field: &'static str, raw: String },
}

/// Which effect layers a card shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Look {
    Standard,
    Holo,
    Parallel,
    #[default]
    Hybrid,
}

impl Look {
    pub const ALL: [Look; 4] = [Look::Standard, Look::Holo, Look::Parallel, Look::Hybrid];

    pub fn name(self) -> &'static str {
        match self {
            Look::Standard => "standard",
            Look::Holo => "holo",
            Look::Parallel => "parallel",
            Look::Hybrid => "hybrid",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Look::Standard => "Standard",
            Look::Holo => "Holo",
            Look::Parallel => "Parallel",
            Look::Hybrid => "Hybrid",
        }
    }

    pub fn holo_enabled(self) -> bool {
        matches!(self, Look::Holo | Look::Hybrid)
    }

    pub fn prism_enabled(self) -> bool {
        matches!(self, Look::Parallel | Look::Hybrid)
    }
}

impl FromStr for Look {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Look::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SettingsError::UnknownLook(s.to_string()))
    }
}

/// A numeric setting the panel can edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingField {
    TiltX,
    TiltY,
    ShineMax,
    FoilMax,
    HoloStrength,
    PrismStrength,
    PrismDensity,
}

impl SettingField {
    pub const ALL: [SettingField; 7] = [
        SettingField::TiltX,
        SettingField::TiltY,
        SettingField::ShineMax,
        SettingField::FoilMax,
        SettingField::HoloStrength,
        SettingField::PrismStrength,
        SettingField::PrismDensity,
    ];

    /// Panel binding key.
    pub fn key(self) -> &'static str {
        match self {
            SettingField::TiltX => "tiltX",
            SettingField::TiltY => "tiltY",
            SettingField::ShineMax => "shineMax",
            SettingField::FoilMax => "foilMax",
            SettingField::HoloStrength => "holoStrength",
            SettingField::PrismStrength => "prismStrength",
            SettingField::PrismDensity => "prismDensity",
        }
    }

    /// Name of the `data-*` attribute that can seed the value from markup.
    pub fn data_attribute(self) -> &'static str {
        match self {
            SettingField::TiltX => "data-tilt-x",
            SettingField::TiltY => "data-tilt-y",
            SettingField::ShineMax => "data-shine-max",
            SettingField::FoilMax => "data-foil-max",
            SettingField::HoloStrength => "data-holo-strength",
            SettingField::PrismStrength => "data-prism-strength",
            SettingField::PrismDensity => "data-prism-density",
        }
    }

    /// Inclusive range the panel allows; values outside are clamped.
    pub fn range(self) -> (f32, f32) {
        match self {
            SettingField::TiltX => (4.0, 24.0),
            SettingField::TiltY => (4.0, 28.0),
            SettingField::ShineMax => (0.05, 0.6),
            SettingField::FoilMax => (0.02, 0.18),
            SettingField::HoloStrength => (0.2, 1.2),
            SettingField::PrismStrength => (0.1, 1.4),
            SettingField::PrismDensity => (6.0, 20.0),
        }
    }

    /// Parse a raw textual value (e.g. from a data attribute) for this field.
    pub fn parse_value(self, raw: &str) -> Result<f32, SettingsError> {
        raw.trim()
            .parse::<f32>()
            .map_err(|_| SettingsError::NotANumber {
                field: self.key(),
                raw: raw.to_string(),
            })
    }
}

impl FromStr for SettingField {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SettingField::ALL
            .into_iter()
            .find(|f| f.key() == wanted || f.data_attribute().trim_start_matches("data-") == wanted)
            .ok_or_else(|| SettingsError::UnknownField(s.to_string()))
    }
}

/// Free-text fields rendered on the card face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardDetails {
    pub number: String,
    pub holder: String,
    pub expiry: String,
}

impl Default for CardDetails {
    fn default() -> Self {
        Self {
            number: "5248 1903 7741 0826".to_string(),
            holder: "ALEX MORGAN".to_string(),
            expiry: "08/29".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Max rotation around X in degrees.
    pub tilt_x: f32,
    /// Max rotation around Y in degrees.
    pub tilt_y: f32,
    pub shine_max: f32,
    pub foil_max: f32,
    pub holo_strength: f32,
    pub prism_strength: f32,
    pub prism_density: f32,
    pub look: Look,
    pub preset_id: String,
    pub card: CardDetails,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tilt_x: 12.0,
            tilt_y: 14.0,
            shine_max: 0.35,
            foil_max: 0.08,
            holo_strength: 0.65,
            prism_strength: 0.45,
            prism_density: 6.0,
            look: Look::default(),
            preset_id: "rare-holo".to_string(),
            card: CardDetails::default(),
        }
    }
}

impl Settings {
    pub fn get(&self, field: SettingField) -> f32 {
        match field {
            SettingField::TiltX => self.tilt_x,
            SettingField::TiltY => self.tilt_y,
            SettingField::ShineMax => self.shine_max,
            SettingField::FoilMax => self.foil_max,
            SettingField::HoloStrength => self.holo_strength,
            SettingField::PrismStrength => self.prism_strength,
            SettingField::PrismDensity => self.prism_density,
        }
    }

    /// Store a value, clamped to the field's range. Returns the stored value.
    pub fn set(&mut self, field: SettingField, value: f32) -> Result<f32, SettingsError> {
        if !value.is_finite() {
            return Err(SettingsError::NotFinite {
                field: field.key(),
                value,
            });
        }
        let (lo, hi) = field.range();
        let v = value.clamp(lo, hi);
        let slot = match field {
            SettingField::TiltX => &mut self.tilt_x,
            SettingField::TiltY => &mut self.tilt_y,
            SettingField::ShineMax => &mut self.shine_max,
            SettingField::FoilMax => &mut self.foil_max,
            SettingField::HoloStrength => &mut self.holo_strength,
            SettingField::PrismStrength => &mut self.prism_strength,
            SettingField::PrismDensity => &mut self.prism_density,
        };
        *slot = v;
        Ok(v)
    }

    /// Clamp every numeric field to its range, falling back to the default
    /// for values that are not finite.
    pub fn sanitized(mut self) -> Self {
        let defaults = Settings::default();
        for field in SettingField::ALL {
            if let Err(e) = self.set(field, self.get(field)) {
                log::warn!("[config] {}, using default", e);
                let _ = self.set(field, defaults.get(field));
            }
        }
        self
    }

    /// `1` when the look shows the holo layer, `0` otherwise.
    pub fn effective_holo(&self) -> f32 {
        if self.look.holo_enabled() {
            1.0
        } else {
            0.0
        }
    }

    /// Prism strength published to the surface: floored when the look enables
    /// the prism layer, zero when it does not.
    pub fn effective_prism(&self) -> f32 {
        if self.look.prism_enabled() {
            self.prism_strength.max(PRISM_STRENGTH_FLOOR)
        } else {
            0.0
        }
    }

    /// The custom properties written by `apply_settings`, in write order.
    pub fn properties(&self) -> [(&'static str, String); 8] {
        [
            ("--tilt-x-max", format_fixed(self.tilt_x, 2, "")),
            ("--tilt-y-max", format_fixed(self.tilt_y, 2, "")),
            ("--shine-max", format_fixed(self.shine_max, 3, "")),
            ("--foil-max", format_fixed(self.foil_max, 3, "")),
            ("--holo-intensity", format!("{}", self.effective_holo() as u8)),
            ("--holo-strength", format_fixed(self.holo_strength, 2, "")),
            ("--prism-strength", format_fixed(self.effective_prism(), 2, "")),
            ("--prism-density", format_fixed(self.prism_density, 1, "")),
        ]
    }
}
