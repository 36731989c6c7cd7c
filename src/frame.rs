//! Cancellable `requestAnimationFrame` loop.
//!
//! The loop only runs while something is moving: the frame callback returns
//! whether it wants another frame, and input handlers call
//! [`FrameLoop::ensure_running`] to wake it. Cancelling (or dropping) the
//! loop cancels the pending frame and drops the callback, which also breaks
//! the callback's reference to itself.

use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameLoop {
    tick: Tick,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn new(mut on_frame: impl FnMut() -> bool + 'static) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        let tick_clone = tick.clone();
        let pending_clone = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_clone.set(None);
            if on_frame() {
                request(&tick_clone, &pending_clone);
            }
        }) as Box<dyn FnMut()>));
        Self { tick, pending }
    }

    /// Request a frame unless one is already pending.
    pub fn ensure_running(&self) {
        if self.pending.get().is_none() {
            request(&self.tick, &self.pending);
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
            log::debug!("[frame] cancelled pending frame {}", id);
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request(tick: &Tick, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    let tick_ref = tick.borrow();
    let Some(cb) = tick_ref.as_ref() else {
        // Cancelled; never reschedule.
        return;
    };
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => pending.set(Some(id)),
        Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
    }
}

/// Seconds since mount; shared by input handlers and frames so both sample
/// tweens on the same timeline.
#[derive(Clone, Copy)]
pub struct Clock(Instant);

impl Clock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    #[inline]
    pub fn now(&self) -> f64 {
        self.0.elapsed().as_secs_f64()
    }
}
