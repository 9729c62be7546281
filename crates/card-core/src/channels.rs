//! The channel vector shared by the smoothed `state` and the desired `target`.
//!
//! Both live instances are the same struct, so they can never disagree on the
//! channel set. The struct is `#[repr(C)]` and all-`f32`, which lets the
//! interpolator walk it as a flat array via `bytemuck`.

use crate::constants::*;

/// Output unit of a channel, used when formatting CSS values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Deg,
    Percent,
    Px,
    Unitless,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Deg => "deg",
            Unit::Percent => "%",
            Unit::Px => "px",
            Unit::Unitless => "",
        }
    }
}

/// One named scalar tracked in both `state` and `target`.
///
/// Variant order matches the field order of [`ChannelVector`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    RotateX,
    RotateY,
    LightX,
    LightY,
    TranslateX,
    TranslateY,
    Scale,
    Hover,
    Proximity,
    LightAngle,
    LightStrength,
}

impl Channel {
    pub const COUNT: usize = 11;

    pub const ALL: [Channel; Channel::COUNT] = [
        Channel::RotateX,
        Channel::RotateY,
        Channel::LightX,
        Channel::LightY,
        Channel::TranslateX,
        Channel::TranslateY,
        Channel::Scale,
        Channel::Hover,
        Channel::Proximity,
        Channel::LightAngle,
        Channel::LightStrength,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// CSS custom property the channel is published to.
    pub fn property(self) -> &'static str {
        match self {
            Channel::RotateX => "--rx",
            Channel::RotateY => "--ry",
            Channel::LightX => "--mx",
            Channel::LightY => "--my",
            Channel::TranslateX => "--tx",
            Channel::TranslateY => "--ty",
            Channel::Scale => "--scale",
            Channel::Hover => "--hover",
            Channel::Proximity => "--hyp",
            Channel::LightAngle => "--light-angle",
            Channel::LightStrength => "--light-strength",
        }
    }

    pub fn unit(self) -> Unit {
        match self {
            Channel::RotateX | Channel::RotateY | Channel::LightAngle => Unit::Deg,
            Channel::LightX | Channel::LightY => Unit::Percent,
            Channel::TranslateX | Channel::TranslateY => Unit::Px,
            Channel::Scale | Channel::Hover | Channel::Proximity | Channel::LightStrength => {
                Unit::Unitless
            }
        }
    }

    /// Decimal places used when the value is written out.
    pub fn precision(self) -> usize {
        match self {
            Channel::LightX
            | Channel::LightY
            | Channel::TranslateX
            | Channel::TranslateY
            | Channel::LightAngle => 2,
            _ => 3,
        }
    }

    /// Fraction of the remaining error closed on every tick.
    pub fn smoothing(self) -> f32 {
        match self {
            Channel::RotateX | Channel::RotateY => ROTATION_SMOOTHING,
            Channel::LightX | Channel::LightY => POSITION_SMOOTHING,
            Channel::TranslateX | Channel::TranslateY => TRANSLATE_SMOOTHING,
            Channel::Scale => SCALE_SMOOTHING,
            Channel::Hover => HOVER_SMOOTHING,
            Channel::Proximity => PROXIMITY_SMOOTHING,
            Channel::LightAngle => LIGHT_ANGLE_SMOOTHING,
            Channel::LightStrength => LIGHT_STRENGTH_SMOOTHING,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ChannelVector {
    /// Degrees.
    pub rotate_x: f32,
    /// Degrees.
    pub rotate_y: f32,
    /// Percent of card width.
    pub light_x: f32,
    /// Percent of card height.
    pub light_y: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
    pub hover: f32,
    /// Normalized pointer distance from center, 0..1.
    pub proximity: f32,
    pub light_angle: f32,
    pub light_strength: f32,
}

impl ChannelVector {
    /// Resting pose: centered light, no rotation or translation, unit scale.
    pub const NEUTRAL: ChannelVector = ChannelVector {
        rotate_x: 0.0,
        rotate_y: 0.0,
        light_x: 50.0,
        light_y: 50.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        hover: 0.0,
        proximity: 0.0,
        light_angle: 0.0,
        light_strength: 1.0,
    };

    #[inline]
    pub fn as_array(&self) -> &[f32; Channel::COUNT] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [f32; Channel::COUNT] {
        bytemuck::cast_mut(self)
    }

    #[inline]
    pub fn get(&self, channel: Channel) -> f32 {
        self.as_array()[channel.index()]
    }

    #[inline]
    pub fn set(&mut self, channel: Channel, value: f32) {
        self.as_array_mut()[channel.index()] = value;
    }

    /// Iterate `(channel, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, f32)> + '_ {
        Channel::ALL.iter().map(move |&c| (c, self.get(c)))
    }
}

impl Default for ChannelVector {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Format a channel value the way it is written to the render surface.
pub fn format_channel(channel: Channel, value: f32) -> String {
    format_fixed(value, channel.precision(), channel.unit().suffix())
}

/// Fixed-point formatting that never prints a negative zero.
pub fn format_fixed(value: f32, decimals: usize, suffix: &str) -> String {
    let mut text = format!("{:.*}", decimals, value);
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text.remove(0);
    }
    text.push_str(suffix);
    text
}
