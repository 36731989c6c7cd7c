//! Builds the card grid markup under a host element and tears it down again.

use crate::constants::*;
use crate::core::constants::{SPOTLIGHT_COLOR, SPOTLIGHT_FALLOFF_PCT};
use crate::core::{AnimationConfig, Card};
use crate::dom;
use web_sys as web;

pub struct CardView {
    pub article: web::HtmlElement,
    pub spotlight: web::HtmlElement,
}

pub struct OverlayView {
    pub vignette: web::HtmlElement,
    pub blanket: web::HtmlElement,
}

pub struct GridView {
    pub root: web::HtmlElement,
    pub cards: Vec<CardView>,
    pub overlay: OverlayView,
    extra_classes: Vec<String>,
}

pub fn build(
    document: &web::Document,
    root: &web::HtmlElement,
    cards: &[Card],
    config: &AnimationConfig,
    class_name: Option<&str>,
) -> anyhow::Result<GridView> {
    let class_list = root.class_list();
    _ = class_list.add_1(CLASS_ROOT);
    let extra_classes: Vec<String> = class_name
        .map(|c| c.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();
    for c in &extra_classes {
        _ = class_list.add_1(c);
    }
    dom::set_styles(root, ROOT_STYLE);
    dom::set_px(root, VAR_RADIUS, config.radius);
    dom::set_var(root, VAR_X, "50%");
    dom::set_var(root, VAR_Y, "50%");

    let views = cards
        .iter()
        .map(|card| build_card(document, root, card))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let vignette = dom::append_child(document, root, "div", CLASS_OVERLAY)?;
    _ = vignette.set_attribute("style", VIGNETTE_STYLE);
    let blanket = dom::append_child(document, root, "div", CLASS_FADE)?;
    _ = blanket.set_attribute("style", BLANKET_STYLE);
    _ = blanket.style().set_property("opacity", "1");

    log::info!("[grid] rendered {} cards", views.len());
    Ok(GridView {
        root: root.clone(),
        cards: views,
        overlay: OverlayView { vignette, blanket },
        extra_classes,
    })
}

fn build_card(
    document: &web::Document,
    root: &web::HtmlElement,
    card: &Card,
) -> anyhow::Result<CardView> {
    let article = dom::append_child(document, root, "article", CLASS_CARD)?;
    _ = article.set_attribute("style", CARD_STYLE);
    dom::set_styles(&article, &[("border-color", card.border_color())]);
    if let Some(g) = card.gradient() {
        dom::set_styles(&article, &[("background", g)]);
    }
    dom::set_var(&article, VAR_SPOTLIGHT_COLOR, SPOTLIGHT_COLOR);
    if card.link().is_some() {
        _ = article.set_attribute("role", "link");
        article.set_tab_index(0);
    }

    let spotlight = dom::append_child(document, &article, "div", CLASS_SPOTLIGHT)?;
    _ = spotlight.set_attribute("style", SPOTLIGHT_STYLE);
    let spot_bg = format!(
        "radial-gradient(circle at var({}) var({}), var({}), transparent {}%)",
        VAR_MOUSE_X, VAR_MOUSE_Y, VAR_SPOTLIGHT_COLOR, SPOTLIGHT_FALLOFF_PCT
    );
    dom::set_styles(&spotlight, &[("background", spot_bg.as_str())]);

    let wrapper = dom::append_child(document, &article, "div", CLASS_IMG_WRAPPER)?;
    _ = wrapper.set_attribute("style", IMG_WRAPPER_STYLE);
    let img = dom::append_child(document, &wrapper, "img", "")?;
    _ = img.set_attribute("src", &card.image);
    _ = img.set_attribute("alt", &card.title);
    _ = img.set_attribute("loading", "lazy");
    _ = img.set_attribute("style", IMG_STYLE);

    let info = dom::append_child(document, &article, "footer", CLASS_INFO)?;
    _ = info.set_attribute("style", INFO_STYLE);
    let title = dom::append_child(document, &info, "h3", "")?;
    title.set_text_content(Some(&card.title));
    _ = title.set_attribute("style", "margin:0;font-size:1.05rem;font-weight:600;");
    if let Some(h) = card.handle() {
        let el = dom::append_child(document, &info, "span", CLASS_HANDLE)?;
        el.set_text_content(Some(h));
        _ = el.set_attribute("style", "font-size:0.95rem;opacity:0.7;text-align:right;");
    }
    let subtitle = dom::append_child(document, &info, "p", "")?;
    subtitle.set_text_content(Some(&card.subtitle));
    _ = subtitle.set_attribute("style", "margin:0;font-size:0.9rem;opacity:0.85;");
    if let Some(l) = card.location() {
        let el = dom::append_child(document, &info, "span", CLASS_LOCATION)?;
        el.set_text_content(Some(l));
        _ = el.set_attribute("style", "font-size:0.85rem;opacity:0.8;text-align:right;");
    }

    Ok(CardView { article, spotlight })
}

impl GridView {
    /// Remove everything `build` added to the host element.
    pub fn teardown(&self) {
        for c in &self.cards {
            dom::remove(&c.article);
        }
        dom::remove(&self.overlay.vignette);
        dom::remove(&self.overlay.blanket);
        let class_list = self.root.class_list();
        _ = class_list.remove_1(CLASS_ROOT);
        for c in &self.extra_classes {
            _ = class_list.remove_1(c);
        }
        let style = self.root.style();
        for name in [VAR_X, VAR_Y, VAR_RADIUS] {
            _ = style.remove_property(name);
        }
        for (name, _) in ROOT_STYLE {
            _ = style.remove_property(name);
        }
    }
}
