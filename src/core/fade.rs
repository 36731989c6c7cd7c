//! Whole-grid fade blanket.
//!
//! Entry and exit run at different speeds: any pointer motion hides the
//! blanket quickly, leaving the grid reveals it over the configured
//! `fade_out` duration. Each call restarts from the current opacity.

use crate::core::constants::{FADE_HIDE_SEC, FADE_INITIAL_OPACITY};
use crate::core::ease::{Ease, EaseDir, EaseFamily};
use crate::core::tween::Tween;

const BLANKET_EASE: Ease = Ease::new(EaseFamily::Power(1), EaseDir::Out);

#[derive(Clone, Debug)]
pub struct FadeBlanket {
    reveal_sec: f64,
    hide_sec: f64,
    tween: Tween<f32>,
}

impl FadeBlanket {
    pub fn new(reveal_sec: f64) -> Self {
        Self {
            reveal_sec,
            hide_sec: FADE_HIDE_SEC,
            tween: Tween::new(
                FADE_INITIAL_OPACITY,
                FADE_INITIAL_OPACITY,
                0.0,
                0.0,
                BLANKET_EASE,
            ),
        }
    }

    /// Pointer left the grid: fade in to 1 over `reveal_sec`.
    pub fn reveal(&mut self, now: f64) {
        self.transition_to(1.0, self.reveal_sec, now);
    }

    /// Pointer over the grid: fade out to 0 over the short fixed duration.
    pub fn hide(&mut self, now: f64) {
        self.transition_to(0.0, self.hide_sec, now);
    }

    fn transition_to(&mut self, target: f32, duration: f64, now: f64) {
        let from = self.opacity(now);
        self.tween = Tween::new(from, target, now, duration, BLANKET_EASE);
    }

    pub fn opacity(&self, now: f64) -> f32 {
        self.tween.sample(now)
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.tween.target
    }

    #[inline]
    pub fn is_animating(&self, now: f64) -> bool {
        !self.tween.is_complete(now)
    }
}
