use crate::constants::{
    CARD_LIFT_SHADOW, CARD_LIFT_TRANSFORM, SPOTLIGHT_REVEAL_TRANSITION, VAR_MOUSE_X, VAR_MOUSE_Y,
    VAR_X, VAR_Y,
};
use crate::core::mask::MaskFrame;
use crate::core::{CardStyle, CoordinateChannels, FrameOutput};
use crate::dom;
use crate::render::{CardView, GridView, OverlayView};
use web_sys as web;

/// Coordinate channels backed by two CSS custom properties on one element.
pub struct StyleChannels {
    el: web::HtmlElement,
    x_var: &'static str,
    y_var: &'static str,
}

impl StyleChannels {
    pub fn grid(root: &web::HtmlElement) -> Self {
        Self {
            el: root.clone(),
            x_var: VAR_X,
            y_var: VAR_Y,
        }
    }

    pub fn card(article: &web::HtmlElement) -> Self {
        Self {
            el: article.clone(),
            x_var: VAR_MOUSE_X,
            y_var: VAR_MOUSE_Y,
        }
    }
}

impl CoordinateChannels for StyleChannels {
    #[inline]
    fn publish_x(&self, px: f32) {
        dom::set_px(&self.el, self.x_var, px);
    }

    #[inline]
    fn publish_y(&self, px: f32) {
        dom::set_px(&self.el, self.y_var, px);
    }
}

fn set_mask(el: &web::HtmlElement, css: &str) {
    dom::set_styles(el, &[("mask-image", css), ("-webkit-mask-image", css)]);
}

pub fn apply_mask(overlay: &OverlayView, mask: &MaskFrame) {
    set_mask(&overlay.vignette, &mask.vignette.to_css());
    set_mask(&overlay.blanket, &mask.blanket.to_css());
}

/// Opacity is driven per frame, so CSS transitions stay off.
pub fn apply_blanket(overlay: &OverlayView, opacity: f32) {
    dom::set_styles(
        &overlay.blanket,
        &[("transition", "none"), ("opacity", &format!("{:.4}", opacity))],
    );
}

/// Reveal eases in; hiding on leave is immediate.
fn apply_spotlight(card: &CardView, opacity: f32) {
    let transition = if opacity > 0.0 {
        SPOTLIGHT_REVEAL_TRANSITION
    } else {
        "none"
    };
    dom::set_styles(
        &card.spotlight,
        &[("transition", transition), ("opacity", &format!("{}", opacity))],
    );
}

/// Empty values clear the inline override so the card settles back.
fn apply_lift(card: &CardView, lifted: bool) {
    let (transform, shadow) = if lifted {
        (CARD_LIFT_TRANSFORM, CARD_LIFT_SHADOW)
    } else {
        ("", "")
    };
    dom::set_styles(&card.article, &[("transform", transform), ("box-shadow", shadow)]);
}

pub fn apply_card(card: &CardView, style: CardStyle) {
    apply_spotlight(card, style.spotlight_opacity);
    apply_lift(card, style.lifted);
}

pub fn apply_frame(view: &GridView, out: &FrameOutput) {
    if let Some(mask) = &out.mask {
        apply_mask(&view.overlay, mask);
    }
    if let Some(o) = out.blanket_opacity {
        apply_blanket(&view.overlay, o);
    }
}
