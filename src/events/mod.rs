pub mod keyboard;
pub mod pointer;

use crate::core::GridEngine;
use crate::frame::{Clock, FrameLoop};
use crate::overlay::StyleChannels;
use crate::render::GridView;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub use keyboard::wire_card_keys;
pub use pointer::{wire_card_pointer, wire_grid_pointer, wire_resize};

/// Shared handles every listener closes over.
#[derive(Clone)]
pub struct GridWiring {
    pub engine: Rc<RefCell<GridEngine<StyleChannels>>>,
    pub view: Rc<GridView>,
    pub frames: Rc<FrameLoop>,
    pub clock: Clock,
}

/// An attached DOM listener; detached again on drop.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Wire every listener for a mounted grid.
pub fn wire_all(w: &GridWiring) -> Vec<Listener> {
    let mut listeners = wire_grid_pointer(w);
    listeners.extend(wire_resize(w));
    for id in 0..w.view.cards.len() {
        listeners.extend(wire_card_pointer(w, id));
        listeners.extend(wire_card_keys(w, id));
    }
    listeners
}
