use crate::constants::{LINK_FEATURES, LINK_TARGET};
use crate::core::{Navigator, Rect};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn client_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

/// Measure only elements that are attached to a document.
#[inline]
pub fn measure(el: &web::Element) -> Option<Rect> {
    if !el.is_connected() {
        return None;
    }
    Some(client_rect(el)).filter(Rect::is_measurable)
}

#[inline]
pub fn set_var(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}

#[inline]
pub fn set_px(el: &web::HtmlElement, name: &str, px: f32) {
    set_var(el, name, &format!("{}px", px));
}

pub fn set_styles(el: &web::HtmlElement, styles: &[(&str, &str)]) {
    let style = el.style();
    for (k, v) in styles {
        _ = style.set_property(k, v);
    }
}

/// Create `<tag class=...>` under `parent`.
pub fn append_child(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    parent
        .append_child(&el)
        .map_err(|e| anyhow::anyhow!("append <{}>: {:?}", tag, e))?;
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("<{}> is not an HtmlElement: {:?}", tag, e))
}

#[inline]
pub fn remove(el: &web::Element) {
    el.remove();
}

/// Opens links in a new browsing context without opener or referrer.
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn open(&self, url: &str) {
        let Some(w) = web::window() else {
            return;
        };
        if let Err(e) = w.open_with_url_and_target_and_features(url, LINK_TARGET, LINK_FEATURES) {
            log::warn!("[card] window.open failed: {:?}", e);
        }
    }
}
