//! Two named scalar channels for the styling layer.

use glam::Vec2;

/// Sink for an `(x, y)` pair in pixels. The DOM implementation writes CSS
/// custom properties; tests record the writes.
pub trait CoordinateChannels {
    fn publish_x(&self, px: f32);
    fn publish_y(&self, px: f32);
}

/// Wraps a channel pair so it can be switched off for good at teardown.
#[derive(Debug)]
pub struct CoordinatePublisher<C: CoordinateChannels> {
    channels: C,
    released: bool,
}

impl<C: CoordinateChannels> CoordinatePublisher<C> {
    pub fn new(channels: C) -> Self {
        Self {
            channels,
            released: false,
        }
    }

    /// Write both channels. Dropped after release or for non-finite input.
    pub fn publish(&self, pos: Vec2) {
        if self.released || !pos.is_finite() {
            return;
        }
        self.channels.publish_x(pos.x);
        self.channels.publish_y(pos.y);
    }

    pub fn release(&mut self) {
        self.released = true;
    }

    #[inline]
    pub fn is_released(&self) -> bool {
        self.released
    }
}
