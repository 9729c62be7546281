use crate::constants::IDLE_TIMEOUT_MS;

/// Who writes the target vector this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// The pointer moved recently; the sampler owns the target.
    Active,
    /// No movement for longer than the timeout; the idle orbit owns the target.
    Idle,
}

/// Passive idle check: a time difference compared on every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleDetector {
    last_input_ms: f64,
    timeout_ms: f64,
}

impl IdleDetector {
    pub fn new(timeout_ms: f64) -> Self {
        Self {
            last_input_ms: 0.0,
            timeout_ms,
        }
    }

    pub fn record_input(&mut self, at_ms: f64) {
        self.last_input_ms = at_ms;
    }

    pub fn last_input_ms(&self) -> f64 {
        self.last_input_ms
    }

    pub fn mode_at(&self, now_ms: f64) -> Mode {
        if now_ms - self.last_input_ms > self.timeout_ms {
            Mode::Idle
        } else {
            Mode::Active
        }
    }
}

impl Default for IdleDetector {
    fn default() -> Self {
        Self::new(IDLE_TIMEOUT_MS)
    }
}
