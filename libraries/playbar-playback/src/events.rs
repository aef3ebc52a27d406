//! Playback Events
//!
//! Two channels keep views in sync with the manager:
//! - Snapshot listeners, called with a fresh [`PlaybackSnapshot`] after every
//!   mutation (including position refreshes)
//! - A typed change log of [`PlaybackEvent`]s, drained by the host

use crate::types::PlaybackSnapshot;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Play/pause flag changed
    StateChanged {
        /// Whether playback is now requested
        is_playing: bool,
    },

    /// Current song changed
    TrackChanged {
        /// Index of the new song
        index: usize,
        /// Index of the song that was current before
        previous_index: usize,
    },

    /// The active resource reported its length
    DurationChanged {
        /// Track length in seconds
        duration: f64,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume level (0.0-1.0)
        level: f32,
    },

    /// Track finished playing naturally (reached end)
    TrackFinished {
        /// Index of the finished song
        index: usize,
    },

    /// The last song finished and playback stopped
    PlaylistFinished,

    /// Error occurred during playback
    Error {
        /// Error message
        message: String,
    },
}

/// Identifies a snapshot listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Snapshot listener
///
/// Under a [`PlaybackHandle`](crate::PlaybackHandle), listeners run after the
/// manager is released and may read or update it through the handle.
pub type Listener = Box<dyn FnMut(&PlaybackSnapshot)>;

/// Listeners lent out for one notification round
pub(crate) type ListenerEntries = Vec<(SubscriptionId, Listener)>;

/// Registry of snapshot listeners
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: ListenerEntries,
    detached: bool,
    removed: Vec<SubscriptionId>,
}

impl Listeners {
    pub(crate) fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Returns whether the listener was registered
    ///
    /// While the entries are lent out, removal is recorded and applied when
    /// they come back.
    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        if self.entries.len() != before {
            return true;
        }
        if self.detached && id.0 < self.next_id && !self.removed.contains(&id) {
            self.removed.push(id);
            return true;
        }
        false
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_detached(&self) -> bool {
        self.detached
    }

    /// Lend out every entry for a notification round
    pub(crate) fn detach(&mut self) -> ListenerEntries {
        self.detached = true;
        std::mem::take(&mut self.entries)
    }

    /// Take lent entries back, ahead of any subscribed in the meantime
    pub(crate) fn reattach(&mut self, mut entries: ListenerEntries) {
        let removed = std::mem::take(&mut self.removed);
        entries.retain(|(id, _)| !removed.contains(id));
        entries.append(&mut self.entries);
        self.entries = entries;
        self.detached = false;
    }

    pub(crate) fn notify(&mut self, snapshot: &PlaybackSnapshot) {
        notify_all(&mut self.entries, snapshot);
    }
}

pub(crate) fn notify_all(entries: &mut [(SubscriptionId, Listener)], snapshot: &PlaybackSnapshot) {
    for (_, listener) in entries {
        listener(snapshot);
    }
}
