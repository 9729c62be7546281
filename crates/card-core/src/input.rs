//! Pointer sampling: viewport coordinates to a target channel vector.

use crate::channels::ChannelVector;
use crate::constants::{ACTIVE_SCALE_LIFT, LIGHT_RADIUS, TRANSLATE_MAX_PX};
use crate::settings::Settings;
use glam::Vec2;

/// Size of the viewport the pointer coordinates are relative to, in CSS px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Normalize client coordinates into `[0, 1]²`.
///
/// Degenerate viewports are treated as 1 px wide so the division is defined;
/// coordinates outside the viewport clamp to its edges.
#[inline]
pub fn normalize(client_x: f32, client_y: f32, viewport: Viewport) -> Vec2 {
    let vw = viewport.width.max(1.0);
    let vh = viewport.height.max(1.0);
    let x = (client_x / vw).clamp(0.0, 1.0);
    let y = (client_y / vh).clamp(0.0, 1.0);
    // NaN input survives clamp; park it at the center instead
    Vec2::new(
        if x.is_nan() { 0.5 } else { x },
        if y.is_nan() { 0.5 } else { y },
    )
}

/// Light angle in degrees and strength in `[0, 1]` for a centered offset.
#[inline]
pub fn light_polar(offset: Vec2) -> (f32, f32) {
    let angle = offset.y.atan2(offset.x).to_degrees();
    let dist = offset.length().min(LIGHT_RADIUS);
    (angle, 1.0 - dist / LIGHT_RADIUS)
}

/// Fill every position-derived channel from a normalized position.
///
/// Shared by the pointer sampler and the idle orbit, which supplies its own
/// rotation afterwards.
pub fn derive_from_position(pos: Vec2, settings: &Settings, hover: f32) -> ChannelVector {
    let offset = pos - Vec2::splat(0.5);
    let proximity = (offset.length() * 2.0).clamp(0.0, 1.0);
    let (light_angle, light_strength) = light_polar(offset);
    ChannelVector {
        rotate_x: -offset.y * settings.tilt_x,
        rotate_y: offset.x * settings.tilt_y,
        light_x: pos.x * 100.0,
        light_y: pos.y * 100.0,
        translate_x: offset.x * TRANSLATE_MAX_PX,
        translate_y: offset.y * TRANSLATE_MAX_PX,
        scale: 1.0 + ACTIVE_SCALE_LIFT * (1.0 - proximity),
        hover,
        proximity,
        light_angle,
        light_strength,
    }
}

/// Target for a pointer at `(client_x, client_y)` inside `viewport`.
pub fn sample_pointer(
    client_x: f32,
    client_y: f32,
    viewport: Viewport,
    settings: &Settings,
) -> ChannelVector {
    derive_from_position(normalize(client_x, client_y, viewport), settings, 1.0)
}
