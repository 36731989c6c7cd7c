// Host-side tests for easing curves.
// The main crate is wasm-only, so we mount the pure engine modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::ease::{Ease, EaseDir, EaseFamily};
use crate::core::ConfigError;

fn all_eases() -> Vec<Ease> {
    let families = [
        EaseFamily::Linear,
        EaseFamily::Power(1),
        EaseFamily::Power(2),
        EaseFamily::Power(3),
        EaseFamily::Power(4),
        EaseFamily::Sine,
        EaseFamily::Expo,
        EaseFamily::Circ,
    ];
    let dirs = [EaseDir::In, EaseDir::Out, EaseDir::InOut];
    families
        .iter()
        .flat_map(|&f| dirs.iter().map(move |&d| Ease::new(f, d)))
        .collect()
}

#[test]
fn every_curve_starts_at_zero_and_ends_at_one() {
    for e in all_eases() {
        assert_eq!(e.apply(0.0), 0.0, "{:?} at 0", e);
        assert_eq!(e.apply(1.0), 1.0, "{:?} at 1", e);
    }
}

#[test]
fn every_curve_is_monotonic() {
    for e in all_eases() {
        let mut prev = e.apply(0.0);
        for i in 1..=200 {
            let v = e.apply(i as f32 / 200.0);
            assert!(v + 1e-6 >= prev, "{:?} decreased at step {}", e, i);
            prev = v;
        }
    }
}

#[test]
fn input_outside_unit_range_is_clamped() {
    let e = Ease::default();
    assert_eq!(e.apply(-3.0), 0.0);
    assert_eq!(e.apply(7.5), 1.0);
    assert_eq!(e.apply(f32::NAN), 0.0);
}

#[test]
fn default_is_power3_out() {
    let e = Ease::default();
    assert_eq!(e, Ease::new(EaseFamily::Power(3), EaseDir::Out));
    // 1 - (1 - t)^4
    assert!((e.apply(0.5) - 0.9375).abs() < 1e-6);
}

#[test]
fn out_curves_lead_linear_time() {
    let out: Ease = "power2.out".parse().unwrap();
    let inn: Ease = "power2.in".parse().unwrap();
    assert!(out.apply(0.3) > 0.3);
    assert!(inn.apply(0.3) < 0.3);
}

#[test]
fn parse_accepts_known_names() {
    assert_eq!("power3.out".parse::<Ease>().unwrap(), Ease::default());
    assert_eq!("Power3.OUT".parse::<Ease>().unwrap(), Ease::default());
    assert_eq!("quart.out".parse::<Ease>().unwrap(), Ease::default());
    assert_eq!("power3".parse::<Ease>().unwrap(), Ease::default());
    assert_eq!("none".parse::<Ease>().unwrap(), Ease::LINEAR);
    assert_eq!("linear".parse::<Ease>().unwrap(), Ease::LINEAR);
    assert_eq!(
        "sine.inOut".parse::<Ease>().unwrap(),
        Ease::new(EaseFamily::Sine, EaseDir::InOut)
    );
    assert_eq!(
        "expo.in".parse::<Ease>().unwrap(),
        Ease::new(EaseFamily::Expo, EaseDir::In)
    );
}

#[test]
fn parse_rejects_unknown_names() {
    assert_eq!(
        "bounce.out".parse::<Ease>(),
        Err(ConfigError::UnknownEase("bounce.out".to_string()))
    );
    assert!("power3.sideways".parse::<Ease>().is_err());
    assert!("".parse::<Ease>().is_err());
}

#[test]
fn display_round_trips_through_parse() {
    for name in ["power1.out", "power3.in", "sine.inOut", "circ.out", "none"] {
        let e: Ease = name.parse().unwrap();
        assert_eq!(e.to_string(), name);
    }
}
