//! Provider handle
//!
//! [`PlaybackHandle`] owns the manager for as long as the player is mounted.
//! Views receive a [`WeakPlaybackHandle`] at construction and go through it
//! for every read and action.

use crate::{
    error::{PlaybackError, Result},
    events::notify_all,
    frame::{FrameLoop, FrameScheduler},
    manager::PlaybackManager,
    resource::{MediaBackend, WakeFn},
    types::{PlaybackConfig, PlaybackSnapshot, Playlist},
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, warn};

/// Owning handle to a mounted playback manager
///
/// Dropping the handle (or calling [`unmount`](Self::unmount)) cancels the
/// frame loop and stops the audio resource.
pub struct PlaybackHandle {
    manager: Rc<RefCell<PlaybackManager>>,
    frame_loop: Option<FrameLoop>,
}

impl PlaybackHandle {
    /// Create the manager, load the first song and start the frame loop
    ///
    /// A first song that cannot be loaded does not fail the mount: the
    /// handle comes up with `load_error` set and navigation available.
    pub fn mount(
        playlist: Playlist,
        config: PlaybackConfig,
        backend: Box<dyn MediaBackend>,
        scheduler: &mut dyn FrameScheduler,
    ) -> Result<Self> {
        let manager = Rc::new(RefCell::new(PlaybackManager::new(playlist, config, backend)));
        manager.borrow_mut().defer_notifications();

        let weak = Rc::downgrade(&manager);
        let wake: WakeFn = Rc::new(move || {
            let Some(manager) = weak.upgrade() else {
                return;
            };
            // Busy means the manager is mid-action; it drains the inbox itself
            let processed = match manager.try_borrow_mut() {
                Ok(mut manager) => {
                    manager.process_media_events();
                    true
                }
                Err(_) => false,
            };
            if processed {
                deliver_snapshots(&manager);
            }
        });
        manager.borrow_mut().set_wake(wake);

        let weak = Rc::downgrade(&manager);
        let frame_loop = scheduler.start(Box::new(move || {
            let Some(manager) = weak.upgrade() else {
                return;
            };
            let ticked = match manager.try_borrow_mut() {
                Ok(mut manager) => {
                    manager.tick();
                    true
                }
                Err(_) => false,
            };
            if ticked {
                deliver_snapshots(&manager);
            } else {
                warn!("Skipped frame: playback manager busy");
            }
        }))?;
        debug!("Frame loop started");

        let loaded = manager.borrow_mut().load_current_track();
        if let Err(err) = loaded {
            warn!("Mounted without a playable first song: {}", err);
        }
        deliver_snapshots(&manager);

        Ok(Self {
            manager,
            frame_loop: Some(frame_loop),
        })
    }

    /// Reference for consumers
    pub fn downgrade(&self) -> WeakPlaybackHandle {
        WeakPlaybackHandle {
            manager: Rc::downgrade(&self.manager),
        }
    }

    /// Read the manager
    pub fn read<R>(&self, f: impl FnOnce(&PlaybackManager) -> R) -> R {
        f(&self.manager.borrow())
    }

    /// Mutate the manager
    ///
    /// Listeners see the change once `f` has returned.
    pub fn update<R>(&self, f: impl FnOnce(&mut PlaybackManager) -> R) -> R {
        let result = f(&mut self.manager.borrow_mut());
        deliver_snapshots(&self.manager);
        result
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.read(PlaybackManager::snapshot)
    }

    /// Cancel the frame loop and stop the resource
    pub fn unmount(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(frame_loop) = self.frame_loop.take() {
            frame_loop.cancel();
            debug!("Frame loop cancelled");
        }
        self.manager.borrow_mut().teardown();
    }
}

impl Drop for PlaybackHandle {
    fn drop(&mut self) {
        if self.frame_loop.is_some() {
            self.release();
        }
    }
}

/// Non-owning reference held by views
///
/// Every access fails with [`PlaybackError::ContextMissing`] once the
/// provider has been unmounted.
#[derive(Clone, Default)]
pub struct WeakPlaybackHandle {
    manager: Weak<RefCell<PlaybackManager>>,
}

impl WeakPlaybackHandle {
    /// Handle that was never mounted under a provider
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.manager.strong_count() > 0
    }

    /// Read the manager
    pub fn read<R>(&self, f: impl FnOnce(&PlaybackManager) -> R) -> Result<R> {
        let manager = self.manager.upgrade().ok_or(PlaybackError::ContextMissing)?;
        let manager = manager.borrow();
        Ok(f(&manager))
    }

    /// Mutate the manager
    pub fn update<R>(&self, f: impl FnOnce(&mut PlaybackManager) -> R) -> Result<R> {
        let manager = self.manager.upgrade().ok_or(PlaybackError::ContextMissing)?;
        let result = f(&mut manager.borrow_mut());
        deliver_snapshots(&manager);
        Ok(result)
    }

    pub fn snapshot(&self) -> Result<PlaybackSnapshot> {
        self.read(PlaybackManager::snapshot)
    }
}

/// Hand pending snapshots to listeners while the manager is not borrowed
///
/// Listeners may read or update the manager. An update made from a listener
/// is delivered by the next pass of the loop.
fn deliver_snapshots(manager: &RefCell<PlaybackManager>) {
    loop {
        let Ok(mut guard) = manager.try_borrow_mut() else {
            return;
        };
        let Some((snapshot, mut listeners)) = guard.take_notification() else {
            return;
        };
        drop(guard);

        notify_all(&mut listeners, &snapshot);

        // Listeners have returned, so no borrow is outstanding
        manager.borrow_mut().restore_listeners(listeners);
    }
}
