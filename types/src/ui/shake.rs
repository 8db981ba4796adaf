//! Shake effect for the keypad region after a penalty roll.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};

#[derive(Debug, Clone)]
pub struct ShakeEffect {
    timer: EffectTimer,
}

impl ShakeEffect {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }
}
