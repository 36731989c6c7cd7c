//! Platform-independent engine. Nothing in here touches `web_sys`, so the
//! host test suite can mount this module tree directly.

pub mod card;
pub mod config;
pub mod constants;
pub mod ease;
pub mod error;
pub mod fade;
pub mod geometry;
pub mod grid;
pub mod lenient;
pub mod mask;
pub mod publisher;
pub mod tracker;
pub mod tween;

pub use card::{
    demo_cards, Card, CardId, CardLayer, CardLocalPointer, CardStyle, Navigator,
};
pub use config::{AnimationConfig, GridOptions, ResolvedOptions};
pub use ease::Ease;
pub use error::ConfigError;
pub use geometry::Rect;
pub use grid::{FrameOutput, GridEngine, GridPhase};
pub use publisher::{CoordinateChannels, CoordinatePublisher};
