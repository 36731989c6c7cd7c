// Host-side tests for the vignette mask and the fade blanket.
// The main crate is wasm-only, so we mount the pure engine modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::constants::{DEFAULT_FADE_OUT_SEC, FADE_HIDE_SEC};
use crate::core::fade::FadeBlanket;
use crate::core::mask::MaskRenderer;
use glam::Vec2;

#[test]
fn vignette_is_clear_at_centre_and_opaque_at_radius() {
    let frame = MaskRenderer::new(100.0).render(Vec2::new(50.0, 50.0));
    let v = &frame.vignette;
    assert_eq!(v.alpha_at(Vec2::new(50.0, 50.0)), 0.0);
    // Inner 15% stays fully transparent.
    assert_eq!(v.alpha_at(Vec2::new(60.0, 50.0)), 0.0);
    assert!((v.alpha_at(Vec2::new(150.0, 50.0)) - 1.0).abs() < 1e-6);
    assert_eq!(v.alpha_at(Vec2::new(400.0, 400.0)), 1.0);
}

#[test]
fn vignette_interpolates_between_bands() {
    let frame = MaskRenderer::new(100.0).render(Vec2::ZERO);
    let v = &frame.vignette;
    assert!((v.alpha_at(Vec2::new(30.0, 0.0)) - 0.04).abs() < 1e-3);
    assert!((v.alpha_at(Vec2::new(22.5, 0.0)) - 0.02).abs() < 1e-3);
    assert!((v.alpha_at(Vec2::new(0.0, 60.0)) - 0.12).abs() < 1e-3);
    // Monotonic outward.
    let mut prev = 0.0;
    for r in 0..=120 {
        let a = v.alpha_at(Vec2::new(r as f32, 0.0));
        assert!(a + 1e-6 >= prev, "alpha dropped at r={r}");
        prev = a;
    }
}

#[test]
fn blanket_mask_is_the_inverse_ramp() {
    let frame = MaskRenderer::new(100.0).render(Vec2::ZERO);
    let b = &frame.blanket;
    assert_eq!(b.alpha_at(Vec2::ZERO), 1.0);
    assert_eq!(b.alpha_at(Vec2::new(100.0, 0.0)), 0.0);
    assert_eq!(b.alpha_at(Vec2::new(300.0, 0.0)), 0.0);
}

#[test]
fn both_layers_share_centre_and_radius() {
    let renderer = MaskRenderer::new(240.0);
    let frame = renderer.render(Vec2::new(12.0, 34.0));
    assert_eq!(frame.vignette.center, frame.blanket.center);
    assert_eq!(frame.vignette.radius, 240.0);
    assert_eq!(frame.blanket.radius, 240.0);
    assert_eq!(renderer.radius(), 240.0);
}

#[test]
fn css_descriptor_is_centred_on_the_position() {
    let frame = MaskRenderer::new(300.0).render(Vec2::new(10.0, 20.5));
    let css = frame.vignette.to_css();
    assert!(css.starts_with("radial-gradient(circle 300.00px at 10.00px 20.50px"), "{css}");
    assert!(css.contains("rgba(0, 0, 0, 0) 15%"), "{css}");
    assert!(css.contains("rgba(0, 0, 0, 0.26) 88%"), "{css}");
    assert!(css.ends_with("rgba(255, 255, 255, 1) 100%)"), "{css}");

    let blanket = frame.blanket.to_css();
    assert!(blanket.contains("rgba(255, 255, 255, 0.92) 30%"), "{blanket}");
    assert!(blanket.ends_with("rgba(0, 0, 0, 0) 100%)"), "{blanket}");
}

#[test]
fn moving_the_centre_changes_the_descriptor() {
    let r = MaskRenderer::new(300.0);
    assert_ne!(r.render(Vec2::new(1.0, 1.0)), r.render(Vec2::new(2.0, 1.0)));
}

#[test]
fn blanket_starts_fully_visible() {
    let b = FadeBlanket::new(DEFAULT_FADE_OUT_SEC);
    assert_eq!(b.opacity(0.0), 1.0);
    assert!(!b.is_animating(0.0));
}

#[test]
fn hide_is_fast_and_reveal_takes_fade_out() {
    let fade_out = 0.6;
    let mut b = FadeBlanket::new(fade_out);

    b.hide(0.0);
    assert!(b.opacity(0.1) < 1.0);
    assert_eq!(b.opacity(FADE_HIDE_SEC), 0.0);
    assert!(!b.is_animating(FADE_HIDE_SEC));

    b.reveal(1.0);
    // Still climbing after the short hide duration has elapsed.
    assert!(b.opacity(1.0 + FADE_HIDE_SEC) < 1.0);
    assert!(b.is_animating(1.0 + FADE_HIDE_SEC));
    assert_eq!(b.opacity(1.0 + fade_out), 1.0);
    assert!(!b.is_animating(1.0 + fade_out));
}

#[test]
fn motion_mid_reveal_turns_back_toward_zero_immediately() {
    let mut b = FadeBlanket::new(0.6);
    b.hide(0.0);
    b.reveal(1.0);
    let partial = b.opacity(1.3);
    assert!(partial > 0.0 && partial < 1.0);

    b.hide(1.3);
    assert!((b.opacity(1.3) - partial).abs() < 1e-6, "no jump on interrupt");
    assert!(b.opacity(1.35) < partial);
    assert_eq!(b.target(), 0.0);
    assert_eq!(b.opacity(1.3 + FADE_HIDE_SEC + 0.01), 0.0);
}

#[test]
fn repeated_leave_does_not_restart_from_zero() {
    let mut b = FadeBlanket::new(0.6);
    b.hide(0.0);
    b.reveal(1.0);
    let before = b.opacity(1.2);
    b.reveal(1.2);
    assert!((b.opacity(1.2) - before).abs() < 1e-6);
    assert_eq!(b.opacity(1.81), 1.0);
}
