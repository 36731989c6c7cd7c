//! Cards and their local spotlight state.
//!
//! Each [`CardLayer`] tracks the raw pointer inside its own box and owns its
//! own channel pair. Nothing here is shared between cards or with the
//! grid-level tracker, and nothing is damped.

use crate::core::constants::DEFAULT_BORDER_COLOR;
use crate::core::lenient;
use crate::core::publisher::{CoordinateChannels, CoordinatePublisher};
use glam::Vec2;
use serde::Deserialize;

/// Position of a card in render order.
pub type CardId = usize;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Card {
    #[serde(deserialize_with = "lenient::or_default")]
    pub image: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub title: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub subtitle: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub handle: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub border_color: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub gradient: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub url: Option<String>,
}

impl Card {
    pub fn border_color(&self) -> &str {
        non_empty(&self.border_color).unwrap_or(DEFAULT_BORDER_COLOR)
    }

    pub fn gradient(&self) -> Option<&str> {
        non_empty(&self.gradient)
    }

    pub fn handle(&self) -> Option<&str> {
        non_empty(&self.handle)
    }

    pub fn location(&self) -> Option<&str> {
        non_empty(&self.location)
    }

    /// Click-through destination; blank strings count as absent.
    pub fn link(&self) -> Option<&str> {
        non_empty(&self.url)
    }
}

#[inline]
fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Keys that activate a focused card.
#[inline]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Opens a destination without replacing the current page.
pub trait Navigator {
    fn open(&self, url: &str);
}

/// Last pointer position inside a card, relative to its top-left corner.
/// Holds its value after the pointer leaves.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardLocalPointer {
    pub x: f32,
    pub y: f32,
}

/// Visual state the DOM layer applies to a card after an event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardStyle {
    pub spotlight_opacity: f32,
    /// Raised with a drop shadow while hovered.
    pub lifted: bool,
}

#[derive(Debug)]
pub struct CardLayer<C: CoordinateChannels> {
    pub id: CardId,
    pub card: Card,
    pointer: CardLocalPointer,
    hovered: bool,
    publisher: CoordinatePublisher<C>,
}

impl<C: CoordinateChannels> CardLayer<C> {
    pub fn new(id: CardId, card: Card, channels: C) -> Self {
        Self {
            id,
            card,
            pointer: CardLocalPointer::default(),
            hovered: false,
            publisher: CoordinatePublisher::new(channels),
        }
    }

    /// Pointer moved inside this card; republish immediately.
    pub fn on_pointer_move(&mut self, local: Vec2) {
        self.pointer = CardLocalPointer {
            x: local.x,
            y: local.y,
        };
        self.hovered = true;
        self.publisher.publish(local);
    }

    pub fn on_enter(&mut self) {
        self.hovered = true;
    }

    pub fn on_leave(&mut self) {
        self.hovered = false;
    }

    #[inline]
    pub fn pointer(&self) -> CardLocalPointer {
        self.pointer
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Spotlight is binary: shown while hovered, hidden the instant the
    /// pointer leaves.
    #[inline]
    pub fn spotlight_opacity(&self) -> f32 {
        if self.hovered {
            1.0
        } else {
            0.0
        }
    }

    pub fn style(&self) -> CardStyle {
        CardStyle {
            spotlight_opacity: self.spotlight_opacity(),
            lifted: self.hovered,
        }
    }

    pub fn click_target(&self) -> Option<&str> {
        self.card.link()
    }

    /// Returns whether a navigation was issued.
    pub fn click(&self, nav: &impl Navigator) -> bool {
        match self.click_target() {
            Some(url) => {
                log::info!("[card] open {} -> {}", self.id, url);
                nav.open(url);
                true
            }
            None => false,
        }
    }

    pub fn release(&mut self) {
        self.hovered = false;
        self.publisher.release();
    }

    pub fn publisher(&self) -> &CoordinatePublisher<C> {
        &self.publisher
    }
}

fn demo(
    img: u32,
    title: &str,
    subtitle: &str,
    handle: &str,
    border: &str,
    gradient: &str,
    url: &str,
) -> Card {
    Card {
        image: format!("https://i.pravatar.cc/300?img={img}"),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        handle: Some(handle.to_string()),
        location: None,
        border_color: Some(border.to_string()),
        gradient: Some(gradient.to_string()),
        url: Some(url.to_string()),
    }
}

/// Placeholder sequence shown when no items are supplied.
pub fn demo_cards() -> Vec<Card> {
    vec![
        demo(8, "Alex Rivera", "Full Stack Developer", "@alexrivera", "#facc15",
            "linear-gradient(145deg,#facc15,#fffbee)", "https://github.com/"),
        demo(11, "Jordan Chen", "DevOps Engineer", "@jordanchen", "#fbbf24",
            "linear-gradient(210deg,#fbbf24,#fff8a0)", "https://linkedin.com/in/"),
        demo(3, "Morgan Blake", "UI/UX Designer", "@morganblake", "#fde047",
            "linear-gradient(165deg,#fde047,#fffbee)", "https://dribbble.com/"),
        demo(16, "Casey Park", "Data Scientist", "@caseypark", "#eab308",
            "linear-gradient(195deg,#eab308,#fff9c2)", "https://kaggle.com/"),
        demo(25, "Sam Kim", "Mobile Developer", "@thesamkim", "#f59e0b",
            "linear-gradient(225deg,#f59e0b,#fff8a0)", "https://github.com/"),
        demo(60, "Tyler Rodriguez", "Cloud Architect", "@tylerrod", "#facc15",
            "linear-gradient(135deg,#facc15,#fffbee)", "https://aws.amazon.com/"),
    ]
}
