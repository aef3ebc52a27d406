//! Playback manager - core orchestration
//!
//! Owns the current song index, play flag, position, duration and volume,
//! and drives the single host media resource that plays the current song.

use crate::{
    error::Result,
    events::{Listener, ListenerEntries, Listeners, PlaybackEvent, SubscriptionId},
    resource::{Inbox, MediaBackend, MediaEvent, MediaEventSink, MediaResource, ResourceToken, WakeFn},
    types::{PlaybackConfig, PlaybackSnapshot, Playlist, PlaylistEntry},
    volume::Volume,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Direction of a track change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Permission to move one song back or forward
///
/// Only the manager hands these out, and only when a neighbouring song
/// exists, so navigating past either end of the playlist cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    direction: Direction,
}

impl Navigation {
    pub fn direction(self) -> Direction {
        self.direction
    }
}

/// The host resource currently bound to the current song
struct ActiveResource {
    token: ResourceToken,
    media: Box<dyn MediaResource>,
}

/// Central playback state
///
/// Single source of truth for the play bar:
/// - Current song index (always inside the playlist)
/// - Play/pause flag
/// - Position and duration, as reported by the host
/// - Volume (0.0-1.0)
///
/// Platform code supplies a [`MediaBackend`]; the manager creates one
/// resource per song and discards it on every track change.
pub struct PlaybackManager {
    // State
    playlist: Playlist,
    current_index: usize,
    is_playing: bool,
    current_time: f64,
    duration: f64,
    volume: Volume,
    load_error: Option<String>,

    // Settings
    config: PlaybackConfig,

    // Host media
    backend: Box<dyn MediaBackend>,
    resource: Option<ActiveResource>,
    next_generation: u64,
    inbox: Rc<Inbox>,
    wake: Option<WakeFn>,

    // UI synchronization
    listeners: Listeners,
    notify_deferred: bool,
    snapshot_dirty: bool,
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackManager {
    /// Create new playback manager
    ///
    /// No resource exists until [`load_current_track`](Self::load_current_track)
    /// is called.
    pub fn new(playlist: Playlist, config: PlaybackConfig, backend: Box<dyn MediaBackend>) -> Self {
        Self {
            playlist,
            current_index: 0,
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume: Volume::new(config.volume),
            load_error: None,
            config,
            backend,
            resource: None,
            next_generation: 0,
            inbox: Rc::new(RefCell::new(VecDeque::new())),
            wake: None,
            listeners: Listeners::default(),
            notify_deferred: false,
            snapshot_dirty: false,
            pending_events: Vec::new(),
        }
    }

    /// Callback run whenever a resource queues an event
    ///
    /// Only affects resources created afterwards.
    pub fn set_wake(&mut self, wake: WakeFn) {
        self.wake = Some(wake);
    }

    /// Create the resource for the current song
    pub fn load_current_track(&mut self) -> Result<()> {
        let result = self.replace_resource();
        self.process_media_events();
        self.publish();
        result
    }

    // ===== Playback Control =====

    /// Start or resume playback
    ///
    /// No-op if already playing, or if the current song failed to load.
    pub fn play(&mut self) {
        if self.resource.is_none() {
            debug!("play ignored: no resource for song {}", self.current_index);
            return;
        }
        if self.set_playing(true) {
            self.publish();
        }
    }

    /// Pause playback
    pub fn pause(&mut self) {
        if self.set_playing(false) {
            self.publish();
        }
    }

    /// Flip between playing and paused
    pub fn toggle_play(&mut self) {
        if self.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Move the playback position
    ///
    /// The host clamps to the track length; negative or NaN input becomes 0.
    /// Does not change the play flag.
    pub fn set_current_time(&mut self, seconds: f64) {
        let seconds = sanitize_seconds(seconds);
        if let Some(active) = self.resource.as_mut() {
            active.media.set_current_time(seconds);
        }
        self.current_time = seconds;
        self.publish();
    }

    // ===== Volume =====

    /// Set volume (clamped to 0.0-1.0) and apply it to the host right away
    pub fn set_volume(&mut self, level: f32) {
        let changed = self.volume.set_level(level);
        if let Some(active) = self.resource.as_mut() {
            active.media.set_volume(self.volume.level());
        }
        if changed {
            self.pending_events.push(PlaybackEvent::VolumeChanged {
                level: self.volume.level(),
            });
            self.publish();
        }
    }

    /// Get current volume level (0.0-1.0)
    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    // ===== Navigation =====

    /// Navigation to the previous song, absent on the first song
    pub fn previous_track(&self) -> Option<Navigation> {
        (self.current_index > 0).then_some(Navigation {
            direction: Direction::Previous,
        })
    }

    /// Navigation to the next song, absent on the last song
    pub fn next_track(&self) -> Option<Navigation> {
        (self.current_index < self.playlist.last_index()).then_some(Navigation {
            direction: Direction::Next,
        })
    }

    pub fn has_previous(&self) -> bool {
        self.previous_track().is_some()
    }

    pub fn has_next(&self) -> bool {
        self.next_track().is_some()
    }

    /// Move one song back or forward, clamped to the playlist
    ///
    /// The play flag is kept, so a playing manager starts the new song.
    pub fn navigate(&mut self, navigation: Navigation) -> Result<()> {
        let target = match navigation.direction {
            Direction::Previous => self.current_index.saturating_sub(1),
            Direction::Next => (self.current_index + 1).min(self.playlist.last_index()),
        };
        let result = self.change_track(target);
        self.process_media_events();
        self.publish();
        result
    }

    // ===== Host Events =====

    /// Apply one event raised by a resource
    ///
    /// Events from a resource that is no longer active are dropped.
    pub fn handle_media_event(&mut self, token: ResourceToken, event: MediaEvent) {
        self.apply_media_event(token, event);
        self.publish();
    }

    /// Apply every event queued through the resource sinks
    pub fn process_media_events(&mut self) {
        loop {
            let next = self.inbox.borrow_mut().pop_front();
            let Some((token, event)) = next else {
                break;
            };
            self.handle_media_event(token, event);
        }
    }

    /// Refresh the position from the host
    ///
    /// Called once per display frame, playing or not.
    pub fn tick(&mut self) {
        self.process_media_events();

        let Some(active) = self.resource.as_ref() else {
            return;
        };
        let position = sanitize_seconds(active.media.current_time());
        if position != self.current_time {
            self.current_time = position;
            self.publish();
        }
    }

    /// Stop and discard the resource
    ///
    /// Called when the owning provider is unmounted.
    pub fn teardown(&mut self) {
        self.is_playing = false;
        self.release_resource();
    }

    // ===== State Queries =====

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_entry(&self) -> &PlaylistEntry {
        &self.playlist.entries()[self.current_index]
    }

    /// Playback position in seconds
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Track length in seconds (0 until metadata loads)
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Load failure reported for the current song
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Token of the active resource, if one exists
    pub fn active_token(&self) -> Option<ResourceToken> {
        self.resource.as_ref().map(|active| active.token)
    }

    /// Build an immutable view of the current state
    pub fn snapshot(&self) -> PlaybackSnapshot {
        let entry = self.current_entry();
        PlaybackSnapshot {
            index: self.current_index,
            title: entry.title.clone(),
            thumbnail_url: entry.thumbnail_url.clone(),
            current_time: self.current_time,
            duration: self.duration,
            is_playing: self.is_playing,
            volume: self.volume.level(),
            has_previous: self.has_previous(),
            has_next: self.has_next(),
            load_error: self.load_error.clone(),
        }
    }

    // ===== Events =====

    /// Register a listener called with every new snapshot
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    /// Remove a listener, returning whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Hold snapshots back until the owner calls [`take_notification`](Self::take_notification)
    ///
    /// Used when the manager sits behind a `RefCell`, so listeners can run
    /// after the borrow ends and read the manager again.
    pub(crate) fn defer_notifications(&mut self) {
        self.notify_deferred = true;
    }

    /// Snapshot plus the listeners to call with it, if a change is waiting
    ///
    /// The listeners are lent out and must come back through
    /// [`restore_listeners`](Self::restore_listeners). While they are out,
    /// further changes stay queued.
    pub(crate) fn take_notification(&mut self) -> Option<(PlaybackSnapshot, ListenerEntries)> {
        if !self.snapshot_dirty || self.listeners.is_detached() {
            return None;
        }
        self.snapshot_dirty = false;
        if self.listeners.is_empty() {
            return None;
        }
        Some((self.snapshot(), self.listeners.detach()))
    }

    pub(crate) fn restore_listeners(&mut self, entries: ListenerEntries) {
        self.listeners.reattach(entries);
    }

    /// Drain all pending events
    ///
    /// Returns all events that have been emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    /// Set the play flag and start/stop the current resource
    ///
    /// Returns whether the flag changed.
    fn set_playing(&mut self, playing: bool) -> bool {
        if self.is_playing == playing {
            return false;
        }
        if let Some(active) = self.resource.as_mut() {
            if playing {
                active.media.play();
            } else {
                active.media.pause();
            }
        }
        self.is_playing = playing;
        self.pending_events
            .push(PlaybackEvent::StateChanged { is_playing: playing });
        true
    }

    fn change_track(&mut self, target: usize) -> Result<()> {
        if target == self.current_index {
            return Ok(());
        }
        let previous_index = self.current_index;
        self.current_index = target;
        info!("Track changed: {} -> {}", previous_index, target);
        self.pending_events.push(PlaybackEvent::TrackChanged {
            index: target,
            previous_index,
        });
        self.replace_resource()
    }

    /// Discard the old resource and bind a new one to the current song
    fn replace_resource(&mut self) -> Result<()> {
        self.release_resource();
        self.current_time = 0.0;
        self.duration = 0.0;
        self.load_error = None;

        self.next_generation += 1;
        let token = ResourceToken::new(self.next_generation);
        let sink = MediaEventSink::new(token, Rc::downgrade(&self.inbox), self.wake.clone());
        let url = self.current_entry().audio_url.clone();

        match self.backend.create(&url, sink) {
            Ok(mut media) => {
                debug!("Created resource {} for {}", token.generation(), url);
                media.set_volume(self.volume.level());
                if self.config.preload {
                    media.load();
                }
                if self.is_playing {
                    media.play();
                }
                self.resource = Some(ActiveResource { token, media });
                Ok(())
            }
            Err(err) => {
                warn!("Failed to create resource for {}: {}", url, err);
                self.load_error = Some(err.to_string());
                self.set_playing(false);
                self.pending_events.push(PlaybackEvent::Error {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    fn release_resource(&mut self) {
        if let Some(mut active) = self.resource.take() {
            active.media.pause();
            active.media.detach();
            debug!("Released resource {}", active.token.generation());
        }
    }

    fn apply_media_event(&mut self, token: ResourceToken, event: MediaEvent) {
        if self.active_token() != Some(token) {
            debug!(
                "Dropping {:?} from stale resource {}",
                event,
                token.generation()
            );
            return;
        }

        match event {
            MediaEvent::MetadataReady { duration } => {
                let duration = sanitize_seconds(duration);
                if duration != self.duration {
                    self.duration = duration;
                    self.pending_events
                        .push(PlaybackEvent::DurationChanged { duration });
                }
            }
            MediaEvent::Ended => self.handle_track_ended(),
            MediaEvent::LoadFailed { message } => {
                warn!("Song {} failed to load: {}", self.current_index, message);
                self.set_playing(false);
                self.load_error = Some(message.clone());
                self.pending_events.push(PlaybackEvent::Error { message });
            }
        }
    }

    /// Advance after the end of a song, or stop after the last one
    fn handle_track_ended(&mut self) {
        let finished = self.current_index;
        self.pending_events
            .push(PlaybackEvent::TrackFinished { index: finished });

        if finished == self.playlist.last_index() {
            info!("Playlist finished");
            self.set_playing(false);
            self.pending_events.push(PlaybackEvent::PlaylistFinished);
            return;
        }

        if !self.config.autoplay_next {
            self.set_playing(false);
        }
        if let Err(err) = self.change_track(finished + 1) {
            // Already recorded in load_error and the event log
            debug!("Advance after song {} failed: {}", finished, err);
        }
    }

    fn publish(&mut self) {
        if self.notify_deferred {
            self.snapshot_dirty = true;
            return;
        }
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        self.listeners.notify(&snapshot);
    }
}

impl Drop for PlaybackManager {
    fn drop(&mut self) {
        self.release_resource();
    }
}

/// Non-finite and negative positions collapse to 0
fn sanitize_seconds(seconds: f64) -> f64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}
