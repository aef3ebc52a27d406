//! Host media primitive traits
//!
//! Abstracts the platform audio element (an `HTMLAudioElement` in the
//! browser, a mock in tests). Decoding and buffering stay on the host side.

use crate::error::Result;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

/// Identifies one resource instance
///
/// Every track change hands out a fresh token, so events raised by a
/// discarded resource can be told apart from the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceToken(u64);

impl ResourceToken {
    pub(crate) fn new(generation: u64) -> Self {
        Self(generation)
    }

    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Events raised by the host for a resource
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Enough metadata is available to know the duration
    MetadataReady {
        /// Track length in seconds
        duration: f64,
    },

    /// Playback reached the end of the track
    Ended,

    /// The host gave up loading the source
    LoadFailed {
        /// Host-provided description
        message: String,
    },
}

pub(crate) type Inbox = RefCell<VecDeque<(ResourceToken, MediaEvent)>>;

/// Callback run after an event is queued, so the owner can process it
pub type WakeFn = Rc<dyn Fn()>;

/// Channel from a resource back to the playback manager
///
/// Handed to [`MediaBackend::create`]. Emitting after the manager is gone
/// is a no-op.
#[derive(Clone)]
pub struct MediaEventSink {
    token: ResourceToken,
    inbox: Weak<Inbox>,
    wake: Option<WakeFn>,
}

impl MediaEventSink {
    pub(crate) fn new(token: ResourceToken, inbox: Weak<Inbox>, wake: Option<WakeFn>) -> Self {
        Self { token, inbox, wake }
    }

    /// Token of the resource this sink belongs to
    pub fn token(&self) -> ResourceToken {
        self.token
    }

    /// Queue an event for the manager
    pub fn emit(&self, event: MediaEvent) {
        let Some(inbox) = self.inbox.upgrade() else {
            return;
        };
        inbox.borrow_mut().push_back((self.token, event));
        drop(inbox);

        if let Some(wake) = &self.wake {
            wake();
        }
    }
}

impl fmt::Debug for MediaEventSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaEventSink")
            .field("token", &self.token)
            .field("connected", &(self.inbox.strong_count() > 0))
            .finish()
    }
}

/// One loaded track on the host
///
/// Calls are fire-and-forget: the manager never waits for the host to
/// acknowledge them. Failures surface later as [`MediaEvent::LoadFailed`].
pub trait MediaResource {
    /// Start buffering the source
    fn load(&mut self);

    /// Start or resume playback
    fn play(&mut self);

    /// Halt playback, keeping the position
    fn pause(&mut self);

    /// Current playback position in seconds
    fn current_time(&self) -> f64;

    /// Move the playback position (the host clamps to the track)
    fn set_current_time(&mut self, seconds: f64);

    /// Apply a volume level (0.0-1.0)
    fn set_volume(&mut self, volume: f32);

    /// Track length once known
    fn duration(&self) -> Option<f64>;

    /// Unbind event handlers before the resource is discarded
    fn detach(&mut self) {}
}

/// Factory for host media resources
pub trait MediaBackend {
    /// Create a resource bound to `url`
    ///
    /// The resource reports metadata, end of playback and load failures
    /// through `events`.
    fn create(&mut self, url: &str, events: MediaEventSink) -> Result<Box<dyn MediaResource>>;
}
