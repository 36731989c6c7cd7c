use super::{GridWiring, Listener};
use crate::core::card::is_activation_key;
use crate::dom::WindowNavigator;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Focused cards open their link on Enter/Space, like a click.
pub fn wire_card_keys(w: &GridWiring, id: usize) -> Option<Listener> {
    let card = w.view.cards.get(id)?;
    let wk = w.clone();
    Some(Listener::attach(&card.article, "keydown", move |ev: web::Event| {
        let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if !is_activation_key(&kev.key()) {
            return;
        }
        if wk.engine.borrow_mut().card_click(id, &WindowNavigator) {
            log::info!("[keys] activated card {}", id);
            kev.prevent_default();
        }
    }))
}
