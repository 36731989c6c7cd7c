#![cfg(target_arch = "wasm32")]
use crate::core::config::items_from_json;
use crate::core::{GridEngine, GridOptions, ResolvedOptions};
use crate::events::{GridWiring, Listener};
use crate::frame::{Clock, FrameLoop};
use crate::overlay::StyleChannels;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("chroma-grid loaded");
    Ok(())
}

/// JS value -> JSON text, treating `undefined`/`null` as absent.
fn to_json(value: &JsValue) -> Option<String> {
    if value.is_undefined() || value.is_null() {
        return None;
    }
    js_sys::JSON::stringify(value)
        .ok()
        .and_then(|s| s.as_string())
}

fn js_err(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

/// A live grid: engine, rendered nodes, frame loop and listeners.
struct Mounted {
    wiring: GridWiring,
    listeners: Vec<Listener>,
}

impl Mounted {
    fn mount(root: &web::HtmlElement, resolved: ResolvedOptions) -> anyhow::Result<Self> {
        let document = root
            .owner_document()
            .ok_or_else(|| anyhow::anyhow!("root element has no document"))?;
        let ResolvedOptions {
            config,
            cards,
            class_name,
        } = resolved;

        let view = Rc::new(render::build(
            &document,
            root,
            &cards,
            &config,
            class_name.as_deref(),
        )?);
        // `build` renders one view per card, in order.
        let engine = GridEngine::new(config, cards, StyleChannels::grid(&view.root), |id| {
            StyleChannels::card(&view.cards[id].article)
        });
        let engine = Rc::new(RefCell::new(engine));
        let clock = Clock::start();

        let frames = {
            let engine = engine.clone();
            let view = view.clone();
            let mut waiting_logged = false;
            Rc::new(FrameLoop::new(move || {
                let now = clock.now();
                let mut eng = engine.borrow_mut();
                let mut out = eng.frame(now);
                if out.needs_measure {
                    match dom::measure(&view.root) {
                        // One more frame draws the first mask.
                        Some(rect) => out.keep_running = eng.measure(rect),
                        None if !out.keep_running => {
                            log::info!("[grid] no layout yet; waiting for pointer or resize");
                        }
                        None if !waiting_logged => {
                            log::info!("[grid] waiting for layout before tracking");
                            waiting_logged = true;
                        }
                        None => {}
                    }
                }
                overlay::apply_frame(&view, &out);
                out.keep_running
            }))
        };

        if let Some(rect) = dom::measure(root) {
            engine.borrow_mut().measure(rect);
        }
        frames.ensure_running();

        let wiring = GridWiring {
            engine,
            view,
            frames,
            clock,
        };
        let listeners = events::wire_all(&wiring);
        log::info!(
            "[grid] mounted {} cards radius={} damping={}s fadeOut={}s ease={}",
            wiring.view.cards.len(),
            config.radius,
            config.damping,
            config.fade_out,
            config.ease
        );
        Ok(Self { wiring, listeners })
    }

    /// Stop writes first, then the frame subscription, then DOM teardown.
    fn release(self) {
        let Mounted { wiring, listeners } = self;
        wiring.engine.borrow_mut().release();
        wiring.frames.cancel();
        drop(listeners);
        wiring.view.teardown();
    }
}

#[wasm_bindgen]
pub struct ChromaGrid {
    root: web::HtmlElement,
    options: GridOptions,
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl ChromaGrid {
    /// Render into `root` and start tracking. `options` may be omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(root: web::HtmlElement, options: JsValue) -> Result<ChromaGrid, JsValue> {
        let options = to_json(&options)
            .map(|json| GridOptions::from_json_or_default(&json))
            .unwrap_or_default();
        let mut grid = ChromaGrid {
            root,
            options,
            mounted: None,
        };
        grid.remount().map_err(js_err)?;
        Ok(grid)
    }

    #[wasm_bindgen(js_name = mountById)]
    pub fn mount_by_id(id: &str, options: JsValue) -> Result<ChromaGrid, JsValue> {
        let document =
            dom::window_document().ok_or_else(|| JsValue::from_str("no window/document"))?;
        let root = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{}", id)))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| JsValue::from_str(&format!("#{} is not an HtmlElement: {:?}", id, e)))?;
        ChromaGrid::new(root, options)
    }

    /// Replace the card sequence. The current grid is fully released and
    /// rebuilt with the same animation options.
    #[wasm_bindgen(js_name = setItems)]
    pub fn set_items(&mut self, items: JsValue) -> Result<(), JsValue> {
        self.options.items = match to_json(&items) {
            Some(json) => match items_from_json(&json) {
                Ok(cards) => cards,
                Err(e) => {
                    log::warn!("[grid] malformed items: {}; using placeholders", e);
                    None
                }
            },
            None => None,
        };
        self.remount().map_err(js_err)
    }

    pub fn unmount(&mut self) {
        if let Some(m) = self.mounted.take() {
            m.release();
            log::info!("[grid] unmounted");
        }
    }

    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }
}

impl ChromaGrid {
    fn remount(&mut self) -> anyhow::Result<()> {
        self.unmount();
        let resolved = self.options.clone().resolve();
        self.mounted = Some(Mounted::mount(&self.root, resolved)?);
        Ok(())
    }
}

impl Drop for ChromaGrid {
    fn drop(&mut self) {
        self.unmount();
    }
}
