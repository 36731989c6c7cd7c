use super::{GridWiring, Listener};
use crate::dom::{self, WindowNavigator};
use crate::overlay;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Pointer over the container drives the damped tracker; leaving the
/// container (not a card) reveals the fade blanket.
pub fn wire_grid_pointer(w: &GridWiring) -> Vec<Listener> {
    let root: &web::EventTarget = &w.view.root;

    let wm = w.clone();
    let on_move = Listener::attach(root, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let now = wm.clock.now();
        {
            let mut engine = wm.engine.borrow_mut();
            // Re-measure per event so scrolling and resizes are picked up.
            if let Some(rect) = dom::measure(&wm.view.root) {
                engine.measure(rect);
            }
            engine.pointer_move(client_pos(ev), now);
        }
        wm.frames.ensure_running();
    });

    let wl = w.clone();
    let on_leave = Listener::attach(root, "pointerleave", move |_ev: web::Event| {
        let now = wl.clock.now();
        wl.engine.borrow_mut().pointer_leave(now);
        wl.frames.ensure_running();
    });

    vec![on_move, on_leave]
}

/// Keep the container box current. The mask centre is left alone until the
/// next pointer event. The frame loop is kicked so a first measurement
/// still gets its initial mask drawn.
pub fn wire_resize(w: &GridWiring) -> Option<Listener> {
    let window = web::window()?;
    let wr = w.clone();
    Some(Listener::attach(&window, "resize", move |_ev: web::Event| {
        let Some(rect) = dom::measure(&wr.view.root) else {
            return;
        };
        if wr.engine.borrow_mut().measure(rect) {
            wr.frames.ensure_running();
        }
    }))
}

/// Raw, un-damped pointer tracking inside one card plus click-through.
pub fn wire_card_pointer(w: &GridWiring, id: usize) -> Vec<Listener> {
    let Some(card) = w.view.cards.get(id) else {
        return Vec::new();
    };
    let article: &web::EventTarget = &card.article;

    let wm = w.clone();
    let on_move = Listener::attach(article, "mousemove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let Some(view) = wm.view.cards.get(id) else {
            return;
        };
        let local = dom::client_rect(&view.article).to_local(client_pos(ev));
        if let Some(style) = wm.engine.borrow_mut().card_pointer_move(id, local) {
            overlay::apply_card(view, style);
        }
    });

    let we = w.clone();
    let on_enter = Listener::attach(article, "mouseenter", move |_ev: web::Event| {
        let style = we.engine.borrow_mut().card_enter(id);
        if let (Some(style), Some(view)) = (style, we.view.cards.get(id)) {
            overlay::apply_card(view, style);
        }
    });

    let wl = w.clone();
    let on_leave = Listener::attach(article, "mouseleave", move |_ev: web::Event| {
        let style = wl.engine.borrow_mut().card_leave(id);
        if let (Some(style), Some(view)) = (style, wl.view.cards.get(id)) {
            overlay::apply_card(view, style);
        }
    });

    let wc = w.clone();
    let on_click = Listener::attach(article, "click", move |_ev: web::Event| {
        wc.engine.borrow_mut().card_click(id, &WindowNavigator);
    });

    vec![on_move, on_enter, on_leave, on_click]
}
