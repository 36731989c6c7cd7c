// Host-side tests for option parsing and resolution.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::constants::{DEFAULT_DAMPING_SEC, DEFAULT_FADE_OUT_SEC, DEFAULT_RADIUS_PX};
use crate::core::config::items_from_json;
use crate::core::{demo_cards, AnimationConfig, ConfigError, Ease, GridOptions};

#[test]
fn absent_options_resolve_to_defaults() {
    for json in ["", "  ", "null", "undefined", "{}"] {
        let opts = GridOptions::from_json(json).unwrap();
        assert_eq!(opts, GridOptions::default(), "input {:?}", json);
        let resolved = opts.resolve();
        assert_eq!(resolved.config, AnimationConfig::default());
        assert_eq!(resolved.class_name, None);
    }
}

#[test]
fn defaults_match_documented_values() {
    let cfg = AnimationConfig::default();
    assert_eq!(cfg.radius, DEFAULT_RADIUS_PX);
    assert_eq!(cfg.damping, DEFAULT_DAMPING_SEC);
    assert_eq!(cfg.fade_out, DEFAULT_FADE_OUT_SEC);
    assert_eq!(cfg.ease.to_string(), "power3.out");
}

#[test]
fn camel_case_fields_are_read() {
    let opts = GridOptions::from_json(
        r#"{"radius":220,"damping":0.3,"fadeOut":1.2,"ease":"sine.inOut","className":"  team  "}"#,
    )
    .unwrap();
    let resolved = opts.resolve();
    assert_eq!(resolved.config.radius, 220.0);
    assert_eq!(resolved.config.damping, 0.3);
    assert_eq!(resolved.config.fade_out, 1.2);
    assert_eq!(resolved.config.ease, "sine.inOut".parse::<Ease>().unwrap());
    assert_eq!(resolved.class_name.as_deref(), Some("team"));
}

#[test]
fn invalid_numbers_fall_back_individually() {
    let resolved = GridOptions::from_json(r#"{"radius":0,"damping":-1,"fadeOut":2}"#)
        .unwrap()
        .resolve();
    assert_eq!(resolved.config.radius, DEFAULT_RADIUS_PX);
    assert_eq!(resolved.config.damping, DEFAULT_DAMPING_SEC);
    assert_eq!(resolved.config.fade_out, 2.0);
}

#[test]
fn unknown_ease_falls_back_to_default() {
    let resolved = GridOptions::from_json(r#"{"ease":"bounce.out"}"#)
        .unwrap()
        .resolve();
    assert_eq!(resolved.config.ease, Ease::default());
}

#[test]
fn blank_class_name_is_dropped() {
    let resolved = GridOptions::from_json(r#"{"className":"   "}"#)
        .unwrap()
        .resolve();
    assert_eq!(resolved.class_name, None);
}

#[test]
fn missing_or_empty_items_use_demo_cards() {
    let demo = demo_cards();
    assert_eq!(demo.len(), 6);
    for json in ["{}", r#"{"items":[]}"#, r#"{"items":null}"#] {
        let resolved = GridOptions::from_json(json).unwrap().resolve();
        assert_eq!(resolved.cards, demo, "input {}", json);
    }
}

#[test]
fn supplied_items_are_kept_in_order() {
    let resolved = GridOptions::from_json(
        r#"{"items":[{"title":"One","image":"a.png"},{"title":"Two","url":"https://two"}]}"#,
    )
    .unwrap()
    .resolve();
    let titles: Vec<_> = resolved.cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["One", "Two"]);
    assert_eq!(resolved.cards[0].link(), None);
    assert_eq!(resolved.cards[1].link(), Some("https://two"));
}

#[test]
fn malformed_json_is_an_error() {
    let err = GridOptions::from_json("{radius:").unwrap_err();
    assert!(matches!(err, ConfigError::Malformed(_)));
    let err = GridOptions::from_json("42").unwrap_err();
    assert!(matches!(err, ConfigError::Malformed(_)));
}

#[test]
fn wrongly_typed_option_keeps_the_page_cards() {
    let resolved = GridOptions::from_json_or_default(
        r#"{"items":[{"title":"Mine","image":"x"}],"radius":"300","damping":0.2}"#,
    )
    .resolve();
    assert_eq!(resolved.cards.len(), 1);
    assert_eq!(resolved.cards[0].title, "Mine");
    assert_eq!(resolved.config.radius, DEFAULT_RADIUS_PX);
    assert_eq!(resolved.config.damping, 0.2);
}

#[test]
fn wrongly_typed_card_field_only_defaults_that_field() {
    let resolved = GridOptions::from_json(
        r#"{"damping":0.2,"items":[{"title":"Mine","handle":42,"url":"https://mine"}]}"#,
    )
    .unwrap()
    .resolve();
    assert_eq!(resolved.config.damping, 0.2);
    let card = &resolved.cards[0];
    assert_eq!(card.title, "Mine");
    assert_eq!(card.handle(), None);
    assert_eq!(card.link(), Some("https://mine"));
}

#[test]
fn non_object_items_are_dropped_individually() {
    let resolved = GridOptions::from_json(r#"{"items":[7,{"title":"Kept"},"x"]}"#)
        .unwrap()
        .resolve();
    let titles: Vec<_> = resolved.cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["Kept"]);

    // A non-array falls back to the demo set without touching other fields.
    let resolved = GridOptions::from_json(r#"{"items":"cards","ease":"expo.in"}"#)
        .unwrap()
        .resolve();
    assert_eq!(resolved.cards, demo_cards());
    assert_eq!(resolved.config.ease, "expo.in".parse::<Ease>().unwrap());
}

#[test]
fn item_lists_parse_on_their_own() {
    let cards = items_from_json(r#"[{"title":"A"},null,{"title":"B","location":5}]"#)
        .unwrap()
        .unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[1].title, "B");
    assert_eq!(cards[1].location(), None);
    assert_eq!(items_from_json("null").unwrap(), None);
    assert!(items_from_json("[").is_err());
}

#[test]
fn radius_beyond_f32_range_falls_back() {
    let resolved = GridOptions::from_json(r#"{"radius":1e39}"#).unwrap().resolve();
    assert_eq!(resolved.config.radius, DEFAULT_RADIUS_PX);
    assert!(resolved.config.radius.is_finite());
}

#[test]
fn malformed_json_can_fall_back_to_defaults() {
    assert_eq!(
        GridOptions::from_json_or_default("not json"),
        GridOptions::default()
    );
}
