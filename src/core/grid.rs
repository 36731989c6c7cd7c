//! Grid container state machine.
//!
//! Owns the tracker, fade blanket, mask renderer and the per-card layers.
//! Platform code feeds it pointer events and animation-frame timestamps and
//! applies the [`FrameOutput`] it returns; the engine itself touches nothing
//! but its coordinate channels.
//!
//! ```text
//! Unmeasured -> Idle{entered:false} -> Tracking <-> Idle{entered:true}
//!        any -> Released
//! ```

use crate::core::card::{Card, CardId, CardLayer, CardStyle, Navigator};
use crate::core::config::AnimationConfig;
use crate::core::constants::MEASURE_POLL_FRAMES;
use crate::core::fade::FadeBlanket;
use crate::core::geometry::Rect;
use crate::core::mask::{MaskFrame, MaskRenderer};
use crate::core::publisher::{CoordinateChannels, CoordinatePublisher};
use crate::core::tracker::DampedTracker;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridPhase {
    Unmeasured,
    /// `entered` is false until the pointer first enters the container.
    Idle { entered: bool },
    Tracking,
    Released,
}

/// What the platform layer should apply after a frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameOutput {
    /// Position written to the coordinate channels this frame.
    pub position: Option<Vec2>,
    pub mask: Option<MaskFrame>,
    pub blanket_opacity: Option<f32>,
    /// The container still needs a valid bounding box.
    pub needs_measure: bool,
    /// Request another frame.
    pub keep_running: bool,
}

#[derive(Debug)]
pub struct GridEngine<C: CoordinateChannels> {
    config: AnimationConfig,
    phase: GridPhase,
    rect: Option<Rect>,
    tracker: DampedTracker,
    blanket: FadeBlanket,
    mask: MaskRenderer,
    publisher: CoordinatePublisher<C>,
    cards: Vec<CardLayer<C>>,
    mask_dirty: bool,
    unmeasured_frames: u32,
}

impl<C: CoordinateChannels> GridEngine<C> {
    pub fn new(
        config: AnimationConfig,
        cards: Vec<Card>,
        grid_channels: C,
        mut card_channels: impl FnMut(CardId) -> C,
    ) -> Self {
        let cards = cards
            .into_iter()
            .enumerate()
            .map(|(id, card)| CardLayer::new(id, card, card_channels(id)))
            .collect();
        Self {
            config,
            phase: GridPhase::Unmeasured,
            rect: None,
            tracker: DampedTracker::new(config.damping, config.ease),
            blanket: FadeBlanket::new(config.fade_out),
            mask: MaskRenderer::new(config.radius),
            publisher: CoordinatePublisher::new(grid_channels),
            cards,
            mask_dirty: false,
            unmeasured_frames: 0,
        }
    }

    #[inline]
    pub fn phase(&self) -> GridPhase {
        self.phase
    }

    #[inline]
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    #[inline]
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    pub fn current(&self, now: f64) -> Option<Vec2> {
        self.tracker.current(now)
    }

    pub fn blanket_opacity(&self, now: f64) -> f32 {
        self.blanket.opacity(now)
    }

    pub fn card(&self, id: CardId) -> Option<&CardLayer<C>> {
        self.cards.get(id)
    }

    pub fn publisher(&self) -> &CoordinatePublisher<C> {
        &self.publisher
    }

    /// Record the container's box. The first valid box centres the tracker;
    /// later ones only update the box used for client-to-local conversion.
    pub fn measure(&mut self, rect: Rect) -> bool {
        if self.phase == GridPhase::Released || !rect.is_measurable() {
            return false;
        }
        self.rect = Some(rect);
        if self.phase == GridPhase::Unmeasured {
            let center = rect.local_center();
            self.tracker.place(center);
            self.publisher.publish(center);
            self.mask_dirty = true;
            self.phase = GridPhase::Idle { entered: false };
            log::info!(
                "[grid] measured {:.0}x{:.0}, centre=({:.1},{:.1})",
                rect.width,
                rect.height,
                center.x,
                center.y
            );
        }
        true
    }

    /// Pointer moved over the container, in client coordinates.
    pub fn pointer_move(&mut self, client: Vec2, now: f64) {
        let Some(rect) = self.rect else {
            return;
        };
        if matches!(self.phase, GridPhase::Unmeasured | GridPhase::Released) {
            return;
        }
        self.tracker.set_target(rect.to_local(client), now);
        self.blanket.hide(now);
        self.phase = GridPhase::Tracking;
    }

    /// Pointer left the container itself (not just a card).
    pub fn pointer_leave(&mut self, now: f64) {
        if matches!(self.phase, GridPhase::Unmeasured | GridPhase::Released) {
            return;
        }
        self.blanket.reveal(now);
        self.phase = GridPhase::Idle { entered: true };
    }

    /// Advance one animation frame.
    pub fn frame(&mut self, now: f64) -> FrameOutput {
        match self.phase {
            GridPhase::Released => return FrameOutput::default(),
            GridPhase::Unmeasured => {
                // Polling is bounded; a hidden host is picked up again by
                // the next pointer or resize event.
                self.unmeasured_frames = self.unmeasured_frames.saturating_add(1);
                return FrameOutput {
                    needs_measure: true,
                    keep_running: self.unmeasured_frames < MEASURE_POLL_FRAMES,
                    ..FrameOutput::default()
                };
            }
            _ => {}
        }
        let stepped = self.tracker.step(now);
        if let Some(pos) = stepped {
            self.publisher.publish(pos);
        }
        let mask_center = match stepped {
            Some(pos) => Some(pos),
            None if self.mask_dirty => self.tracker.current(now),
            None => None,
        };
        self.mask_dirty = false;
        FrameOutput {
            position: stepped,
            mask: mask_center.map(|c| self.mask.render(c)),
            blanket_opacity: Some(self.blanket.opacity(now)),
            needs_measure: false,
            keep_running: self.tracker.is_animating() || self.blanket.is_animating(now),
        }
    }

    /// Raw pointer inside a card, relative to that card's top-left corner.
    /// Returns the card's visual state.
    pub fn card_pointer_move(&mut self, id: CardId, local: Vec2) -> Option<CardStyle> {
        let layer = self.live_card(id)?;
        layer.on_pointer_move(local);
        Some(layer.style())
    }

    pub fn card_enter(&mut self, id: CardId) -> Option<CardStyle> {
        let layer = self.live_card(id)?;
        layer.on_enter();
        Some(layer.style())
    }

    pub fn card_leave(&mut self, id: CardId) -> Option<CardStyle> {
        let layer = self.live_card(id)?;
        layer.on_leave();
        Some(layer.style())
    }

    /// Returns whether a navigation was issued.
    pub fn card_click(&mut self, id: CardId, nav: &impl Navigator) -> bool {
        match self.live_card(id) {
            Some(layer) => layer.click(nav),
            None => false,
        }
    }

    fn live_card(&mut self, id: CardId) -> Option<&mut CardLayer<C>> {
        if self.phase == GridPhase::Released {
            return None;
        }
        let layer = self.cards.get_mut(id);
        if layer.is_none() {
            log::debug!("[card] ignoring event for unknown card {}", id);
        }
        layer
    }

    /// Stop all channel writes for good.
    pub fn release(&mut self) {
        if self.phase == GridPhase::Released {
            return;
        }
        self.phase = GridPhase::Released;
        self.publisher.release();
        for layer in &mut self.cards {
            layer.release();
        }
        log::info!("[grid] released");
    }
}
