//! Time-based interpolation state.
//!
//! A [`Tween`] stores `{start, target, start_time, duration, ease}` and is
//! evaluated from wall-clock time on every query, so sampling at irregular
//! frame intervals never accumulates drift.

use crate::core::ease::Ease;
use glam::Vec2;

/// Values that can be linearly blended.
pub trait Lerp: Copy {
    fn lerp_to(self, other: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp_to(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp_to(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<T: Lerp> {
    pub start: T,
    pub target: T,
    pub start_time: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl<T: Lerp> Tween<T> {
    pub fn new(start: T, target: T, start_time: f64, duration: f64, ease: Ease) -> Self {
        Self {
            start,
            target,
            start_time,
            duration,
            ease,
        }
    }

    /// Normalized linear progress in `[0, 1]`.
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start_time) / self.duration).clamp(0.0, 1.0) as f32
    }

    pub fn sample(&self, now: f64) -> T {
        let p = self.progress(now);
        if p >= 1.0 {
            // Exact target at and after the end, no float residue.
            return self.target;
        }
        self.start.lerp_to(self.target, self.ease.apply(p))
    }

    #[inline]
    pub fn is_complete(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    /// A new tween toward `target` that starts wherever this one is at `now`.
    pub fn retarget(&self, target: T, now: f64) -> Self {
        Self::new(self.sample(now), target, now, self.duration, self.ease)
    }
}
