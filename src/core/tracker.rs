//! Damped cursor-following position.
//!
//! Raw pointer samples become eased transitions. A new target always
//! restarts from the value the tracker shows *right now*, so motion stays
//! continuous however often the pointer moves. Newest target wins; nothing
//! is queued.

use crate::core::constants::CONVERGE_EPSILON_PX;
use crate::core::ease::Ease;
use crate::core::tween::Tween;
use glam::Vec2;

#[derive(Clone, Debug)]
pub struct DampedTracker {
    duration: f64,
    ease: Ease,
    rest: Option<Vec2>,
    tween: Option<Tween<Vec2>>,
}

impl DampedTracker {
    pub fn new(duration: f64, ease: Ease) -> Self {
        Self {
            duration,
            ease,
            rest: None,
            tween: None,
        }
    }

    #[inline]
    pub fn is_measured(&self) -> bool {
        self.rest.is_some()
    }

    /// Place the tracker at `pos` with no transition.
    pub fn place(&mut self, pos: Vec2) {
        self.rest = Some(pos);
        self.tween = None;
    }

    /// Start a transition toward `target`. Returns `false` and does nothing
    /// until the tracker has been placed.
    pub fn set_target(&mut self, target: Vec2, now: f64) -> bool {
        let Some(current) = self.current(now) else {
            return false;
        };
        if self.tween.is_none() && current.distance(target) <= CONVERGE_EPSILON_PX {
            return true;
        }
        self.tween = Some(match &self.tween {
            Some(t) => t.retarget(target, now),
            None => Tween::new(current, target, now, self.duration, self.ease),
        });
        true
    }

    /// Instantaneous eased position, `None` before measurement.
    pub fn current(&self, now: f64) -> Option<Vec2> {
        match &self.tween {
            Some(t) => Some(t.sample(now)),
            None => self.rest,
        }
    }

    #[inline]
    pub fn target(&self) -> Option<Vec2> {
        self.tween.as_ref().map(|t| t.target).or(self.rest)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Advance one frame. Yields the position to publish while a transition
    /// is in flight, including the final landing frame; `None` when at rest.
    pub fn step(&mut self, now: f64) -> Option<Vec2> {
        let tween = self.tween?;
        let pos = tween.sample(now);
        if tween.is_complete(now) {
            self.rest = Some(tween.target);
            self.tween = None;
        }
        Some(pos)
    }
}
