//! Field deserializers that never fail on a wrongly-typed value.
//!
//! Options come from untyped page code. A bad field is logged and replaced
//! by its default so the rest of the object survives.

use crate::core::card::Card;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `T`, or `T::default()` when the value has the wrong shape.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(T::deserialize(&raw).unwrap_or_else(|e| {
        if !raw.is_null() {
            log::warn!("[grid] ignoring option value {}: {}", raw, e);
        }
        T::default()
    }))
}

/// Card list; an entry that is not a card object is dropped on its own.
pub fn cards<'de, D>(deserializer: D) -> Result<Option<Vec<Card>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(cards_from_value(&raw))
}

pub fn cards_from_value(raw: &Value) -> Option<Vec<Card>> {
    let items = match raw {
        Value::Null => return None,
        Value::Array(items) => items,
        other => {
            log::warn!("[grid] items must be an array, got {}", other);
            return None;
        }
    };
    let cards = items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| match Card::deserialize(item) {
            Ok(card) => Some(card),
            Err(e) => {
                log::warn!("[grid] dropping item {}: {}", i, e);
                None
            }
        })
        .collect();
    Some(cards)
}
