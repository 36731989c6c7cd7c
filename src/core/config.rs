//! Construction options and their resolved form.
//!
//! Options arrive from the page as loosely-typed JSON. Only unparseable text
//! is an error; a wrongly-typed field or card is logged and replaced by its
//! default, and resolution never fails.

use crate::core::card::{demo_cards, Card};
use crate::core::constants::{
    DEFAULT_DAMPING_SEC, DEFAULT_EASE, DEFAULT_FADE_OUT_SEC, DEFAULT_RADIUS_PX,
};
use crate::core::ease::Ease;
use crate::core::error::ConfigError;
use crate::core::lenient;
use serde::Deserialize;
use serde_json::Value;

/// Fixed for the lifetime of a mounted grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    pub radius: f32,
    pub damping: f64,
    pub fade_out: f64,
    pub ease: Ease,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS_PX,
            damping: DEFAULT_DAMPING_SEC,
            fade_out: DEFAULT_FADE_OUT_SEC,
            ease: Ease::default(),
        }
    }
}

/// Raw options as supplied by the page.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridOptions {
    #[serde(deserialize_with = "lenient::cards")]
    pub items: Option<Vec<Card>>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub radius: Option<f64>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub damping: Option<f64>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub fade_out: Option<f64>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub ease: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub class_name: Option<String>,
}

/// Everything a grid needs to mount.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedOptions {
    pub config: AnimationConfig,
    pub cards: Vec<Card>,
    pub class_name: Option<String>,
}

impl GridOptions {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() || json.trim() == "null" || json.trim() == "undefined" {
            return Ok(Self::default());
        }
        serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Parse, falling back to defaults on malformed input.
    pub fn from_json_or_default(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|e| {
            log::warn!("[grid] {}; using defaults", e);
            Self::default()
        })
    }

    pub fn resolve(self) -> ResolvedOptions {
        // Narrowed first so values beyond f32 range count as invalid.
        let radius = self.radius.map(|r| f64::from(r as f32));
        let config = AnimationConfig {
            radius: or_default(positive("radius", radius), DEFAULT_RADIUS_PX as f64) as f32,
            damping: or_default(positive("damping", self.damping), DEFAULT_DAMPING_SEC),
            fade_out: or_default(positive("fadeOut", self.fade_out), DEFAULT_FADE_OUT_SEC),
            ease: resolve_ease(self.ease.as_deref()),
        };
        let cards = match self.items {
            Some(items) if !items.is_empty() => items,
            _ => demo_cards(),
        };
        let class_name = self
            .class_name
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        ResolvedOptions {
            config,
            cards,
            class_name,
        }
    }
}

/// Parse a bare card list, as passed to `setItems`.
pub fn items_from_json(json: &str) -> Result<Option<Vec<Card>>, ConfigError> {
    let raw: Value =
        serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
    Ok(lenient::cards_from_value(&raw))
}

/// Validates an optional numeric option; absence is not an error.
fn positive(name: &'static str, value: Option<f64>) -> Result<Option<f64>, ConfigError> {
    match value {
        Some(v) if !(v.is_finite() && v > 0.0) => Err(ConfigError::NotPositive { name, value: v }),
        other => Ok(other),
    }
}

fn or_default(value: Result<Option<f64>, ConfigError>, default: f64) -> f64 {
    match value {
        Ok(Some(v)) => v,
        Ok(None) => default,
        Err(e) => {
            log::warn!("[grid] {}; using {}", e, default);
            default
        }
    }
}

fn resolve_ease(name: Option<&str>) -> Ease {
    let name = name.unwrap_or(DEFAULT_EASE);
    name.parse().unwrap_or_else(|e: ConfigError| {
        log::warn!("[grid] {}; using {}", e, DEFAULT_EASE);
        Ease::default()
    })
}
