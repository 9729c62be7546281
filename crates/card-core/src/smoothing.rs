use crate::channels::{Channel, ChannelVector};

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Advance `state` one tick toward `target` with each channel's constant.
///
/// First-order exponential smoothing: no velocity, no overshoot, and no clamp
/// afterwards.
pub fn step(state: &mut ChannelVector, target: &ChannelVector) {
    let goal = target.as_array();
    for (i, value) in state.as_array_mut().iter_mut().enumerate() {
        *value = lerp(*value, goal[i], Channel::ALL[i].smoothing());
    }
}

/// Remaining error fraction after `ticks` steps with constant `k`.
#[inline]
pub fn remaining_error(k: f32, ticks: u32) -> f32 {
    (1.0 - k).powi(ticks as i32)
}
