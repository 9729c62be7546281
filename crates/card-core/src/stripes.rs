//! Procedural prism stripes painted over the card.
//!
//! Layout is computed here in CSS pixels; the actual drawing goes through
//! [`StripeCanvas`], which the browser implements on a 2D canvas context.

use crate::channels::ChannelVector;
use crate::constants::*;
use crate::settings::Settings;
use glam::Vec2;

/// Host element box in CSS px plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
    pub dpr: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32, dpr: f32) -> Self {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            dpr,
        }
    }

    /// Backing-store size in device pixels.
    pub fn backing(&self) -> (u32, u32) {
        (
            (self.width * self.dpr).round() as u32,
            (self.height * self.dpr).round() as u32,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub rgb: [u8; 3],
    pub alpha: f32,
}

impl GradientStop {
    pub fn css(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("rgba({},{},{},{:.3})", r, g, b, self.alpha)
    }
}

/// A rotated, gradient-filled rectangle centered on `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stripe {
    pub center: Vec2,
    pub angle: f32,
    pub length: f32,
    pub width: f32,
    pub alpha: f32,
}

impl Stripe {
    /// White → cyan → pink → white along the stripe's length.
    pub fn stops(&self) -> [GradientStop; 4] {
        let a = self.alpha;
        [
            GradientStop {
                offset: 0.0,
                rgb: [255, 255, 255],
                alpha: a * 0.6,
            },
            GradientStop {
                offset: 0.35,
                rgb: [120, 220, 255],
                alpha: a * 0.9,
            },
            GradientStop {
                offset: 0.65,
                rgb: [255, 180, 220],
                alpha: a * 0.9,
            },
            GradientStop {
                offset: 1.0,
                rgb: [255, 255, 255],
                alpha: a * 0.6,
            },
        ]
    }
}

/// Inputs for one layout pass, all in CSS px where positional.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripeParams {
    pub density: f32,
    pub prism_strength: f32,
    pub light: Vec2,
    pub light_strength: f32,
    pub hover: f32,
}

impl StripeParams {
    pub fn from_state(state: &ChannelVector, settings: &Settings, size: SurfaceSize) -> Self {
        Self {
            density: settings.prism_density,
            prism_strength: settings.prism_strength,
            light: Vec2::new(
                state.light_x / 100.0 * size.width,
                state.light_y / 100.0 * size.height,
            ),
            light_strength: state.light_strength,
            hover: state.hover,
        }
    }
}

/// Stripes for a `width × height` surface.
///
/// Candidates sit on a grid with step `density · 8` (never finer than
/// [`STRIPE_MIN_STEP`]); only the half of the surface nearer the light draws,
/// and faint stripes are dropped.
pub fn layout(width: f32, height: f32, params: &StripeParams) -> Vec<Stripe> {
    let step = params.density * STRIPE_STEP_PER_DENSITY;
    let mut out = Vec::new();
    if step.is_nan() || step <= 0.0 || width <= 0.0 || height <= 0.0 {
        return out;
    }
    let step = step.max(STRIPE_MIN_STEP);
    let length = STRIPE_MIN_LENGTH.max(params.density * STRIPE_LENGTH_PER_DENSITY);
    let stripe_width = STRIPE_MIN_WIDTH.max(params.density * STRIPE_WIDTH_PER_DENSITY);
    let max_dist = Vec2::new(width, height).length() * 0.5;
    let hover_gain = STRIPE_HOVER_BASE + STRIPE_HOVER_SPAN * params.hover;

    let mut y = 0.0;
    while y < height + step {
        let mut x = 0.0;
        while x < width + step {
            let center = Vec2::new(x + step * STRIPE_OFFSET_X, y + step * STRIPE_OFFSET_Y);
            let normalized = 1.0 - (center.distance(params.light) / max_dist).min(1.0);
            if normalized >= STRIPE_MIN_PROXIMITY {
                let strength = normalized * params.light_strength;
                let alpha = params.prism_strength
                    * (STRIPE_ALPHA_BASE + STRIPE_ALPHA_STRENGTH * strength)
                    * hover_gain;
                if alpha > STRIPE_MIN_ALPHA {
                    out.push(Stripe {
                        center,
                        angle: STRIPE_ANGLE_RAD,
                        length,
                        width: stripe_width,
                        alpha,
                    });
                }
            }
            x += step;
        }
        y += step;
    }
    out
}

pub trait StripeCanvas {
    /// Erase the whole surface.
    fn clear(&mut self, size: SurfaceSize);
    fn fill_stripe(&mut self, stripe: &Stripe);
}

/// Keeps the surface size between resizes and repaints the overlay each frame.
#[derive(Clone, Debug, Default)]
pub struct StripeRenderer {
    size: Option<SurfaceSize>,
}

impl StripeRenderer {
    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = Some(size);
    }

    pub fn size(&self) -> Option<SurfaceSize> {
        self.size
    }

    /// Clear and repaint. Returns the number of stripes drawn.
    pub fn paint<C: StripeCanvas + ?Sized>(
        &self,
        state: &ChannelVector,
        settings: &Settings,
        canvas: &mut C,
    ) -> usize {
        let Some(size) = self.size else {
            return 0;
        };
        canvas.clear(size);
        if !settings.look.prism_enabled() || size.is_empty() {
            return 0;
        }
        let params = StripeParams::from_state(state, settings, size);
        let stripes = layout(size.width, size.height, &params);
        for stripe in &stripes {
            canvas.fill_stripe(stripe);
        }
        stripes.len()
    }
}
