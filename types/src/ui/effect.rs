//! Screen-level animation effects.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEffectKind {
    /// Whole screen fades in after a stage change.
    FadeIn,
    /// Horizontal shake used to reject invalid input.
    Shake,
}

#[derive(Debug, Clone)]
pub struct ScreenEffect {
    kind: ScreenEffectKind,
    timer: EffectTimer,
}

impl ScreenEffect {
    #[must_use]
    pub fn fade_in(duration: Duration) -> Self {
        Self {
            kind: ScreenEffectKind::FadeIn,
            timer: EffectTimer::new(duration),
        }
    }

    #[must_use]
    pub fn shake(duration: Duration) -> Self {
        Self {
            kind: ScreenEffectKind::Shake,
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
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    #[must_use]
    pub fn kind(&self) -> ScreenEffectKind {
        self.kind
    }
}
