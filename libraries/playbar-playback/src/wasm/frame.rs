//! `requestAnimationFrame` loop

use super::js_error;
use crate::error::{PlaybackError, Result};
use crate::frame::{FrameCallback, FrameLoop, FrameScheduler};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Runs the frame callback from the browser's animation frames
#[derive(Debug, Default)]
pub struct AnimationFrameScheduler;

impl AnimationFrameScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn start(&mut self, mut on_frame: FrameCallback) -> Result<FrameLoop> {
        let window = web_sys::window()
            .ok_or_else(|| PlaybackError::FrameScheduler("no window".to_string()))?;

        let active = Rc::new(Cell::new(true));
        let request_id = Rc::new(Cell::new(None::<i32>));
        let slot: FrameClosure = Rc::new(RefCell::new(None));

        // The closure only holds a weak reference to itself; the FrameLoop owns it
        let weak_slot: Weak<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::downgrade(&slot);
        let frame_window = window.clone();
        let frame_active = Rc::clone(&active);
        let frame_request = Rc::clone(&request_id);
        *slot.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
            if !frame_active.get() {
                return;
            }
            on_frame();
            if !frame_active.get() {
                return;
            }
            let Some(slot) = weak_slot.upgrade() else {
                return;
            };
            let slot = slot.borrow();
            if let Some(closure) = slot.as_ref() {
                match request(&frame_window, closure) {
                    Ok(id) => frame_request.set(Some(id)),
                    Err(err) => warn!("Frame loop stopped: {}", err),
                }
            }
        }));

        {
            let first = slot.borrow();
            if let Some(closure) = first.as_ref() {
                request_id.set(Some(request(&window, closure)?));
            }
        }

        Ok(FrameLoop::new(move || {
            active.set(false);
            if let Some(id) = request_id.take() {
                if let Err(err) = window.cancel_animation_frame(id) {
                    warn!("cancelAnimationFrame failed: {}", js_error(&err));
                }
            }
            drop(slot);
        }))
    }
}

fn request(window: &Window, closure: &Closure<dyn FnMut()>) -> Result<i32> {
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .map_err(|e| PlaybackError::FrameScheduler(js_error(&e)))
}
