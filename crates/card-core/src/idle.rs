//! Synthetic drift used while the pointer is idle.

use crate::channels::ChannelVector;
use crate::constants::*;
use crate::input::derive_from_position;
use crate::settings::Settings;
use glam::Vec2;
use rand::prelude::*;

/// Time-driven orbit target.
///
/// The only retained value is a phase picked once at construction; every
/// sample is a pure function of elapsed time, so leaving and re-entering idle
/// never needs a reset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleOrbit {
    phase: f32,
}

impl IdleOrbit {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self {
            phase: rng.gen_range(0.0..std::f32::consts::TAU),
        }
    }

    pub fn with_phase(phase: f32) -> Self {
        Self { phase }
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Target at `t_sec` seconds of engine time.
    pub fn sample(&self, t_sec: f64, settings: &Settings) -> ChannelVector {
        let pos = Vec2::new(
            self.angle(ORBIT_FREQ_MX, t_sec).sin() * ORBIT_LIGHT_X_AMPLITUDE + 0.5,
            self.angle(ORBIT_FREQ_MY, t_sec).cos() * ORBIT_LIGHT_Y_AMPLITUDE + 0.5,
        );
        let mut target = derive_from_position(pos, settings, IDLE_HOVER);
        target.rotate_y =
            self.angle(ORBIT_FREQ_RY, t_sec).sin() * ORBIT_TILT_Y_SHARE * settings.tilt_y;
        target.rotate_x =
            self.angle(ORBIT_FREQ_RX, t_sec).cos() * ORBIT_TILT_X_SHARE * settings.tilt_x;
        target
    }

    /// `freq · t + phase` wrapped to one turn. Kept in f64 until wrapped so
    /// the orbit still moves on pages that stay open for weeks.
    fn angle(&self, freq: f32, t_sec: f64) -> f32 {
        (f64::from(freq) * t_sec + f64::from(self.phase)).rem_euclid(std::f64::consts::TAU) as f32
    }
}
