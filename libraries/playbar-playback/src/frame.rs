//! Display-frame scheduling
//!
//! The manager refreshes its position once per display frame for as long
//! as it is mounted. Starting the loop yields a [`FrameLoop`]; cancelling or
//! dropping that handle stops it exactly once.

use crate::error::Result;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Callback invoked once per display frame
pub type FrameCallback = Box<dyn FnMut()>;

/// Host capability for running a callback every display frame
pub trait FrameScheduler {
    /// Begin invoking `on_frame` every frame until the returned loop is cancelled
    fn start(&mut self, on_frame: FrameCallback) -> Result<FrameLoop>;
}

/// Cancellation handle for a running frame loop
pub struct FrameLoop {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl FrameLoop {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Whether the loop has not been cancelled yet
    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    /// Stop the loop
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for FrameLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameLoop")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Frame scheduler driven by the host calling [`ManualFrameScheduler::advance`]
///
/// Used by headless hosts and tests. Clones share the same loop.
#[derive(Clone, Default)]
pub struct ManualFrameScheduler {
    callback: Rc<RefCell<Option<FrameCallback>>>,
    running: Rc<Cell<bool>>,
}

impl ManualFrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a loop is currently registered
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Run `frames` frames, returning how many reached a callback
    pub fn advance(&self, frames: usize) -> usize {
        let mut delivered = 0;
        for _ in 0..frames {
            if !self.running.get() {
                break;
            }
            // Taken out so the callback may cancel or restart the loop
            let Some(mut callback) = self.callback.borrow_mut().take() else {
                break;
            };
            callback();
            delivered += 1;

            let mut slot = self.callback.borrow_mut();
            if self.running.get() && slot.is_none() {
                *slot = Some(callback);
            }
        }
        delivered
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn start(&mut self, on_frame: FrameCallback) -> Result<FrameLoop> {
        *self.callback.borrow_mut() = Some(on_frame);
        self.running.set(true);

        let slot = Rc::clone(&self.callback);
        let running = Rc::clone(&self.running);
        Ok(FrameLoop::new(move || {
            running.set(false);
            slot.borrow_mut().take();
        }))
    }
}
