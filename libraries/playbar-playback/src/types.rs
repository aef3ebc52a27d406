//! Core types for playback management

use crate::error::{PlaybackError, Result};
use serde::{Deserialize, Serialize};

/// One song in the playlist
///
/// Supplied once by the application shell and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    /// Display title
    pub title: String,

    /// Artwork shown next to the title (may be empty)
    #[serde(default)]
    pub thumbnail_url: String,

    /// Source handed to the host media primitive
    pub audio_url: String,
}

impl PlaylistEntry {
    pub fn new(
        title: impl Into<String>,
        thumbnail_url: impl Into<String>,
        audio_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            thumbnail_url: thumbnail_url.into(),
            audio_url: audio_url.into(),
        }
    }
}

/// Ordered, non-empty list of playlist entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Playlist {
    entries: Vec<PlaylistEntry>,
}

impl Playlist {
    /// Build a playlist, rejecting an empty list
    pub fn new(entries: Vec<PlaylistEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(PlaybackError::EmptyPlaylist);
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed playlist
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the final entry
    pub fn last_index(&self) -> usize {
        self.entries.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&PlaylistEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[PlaylistEntry] {
        &self.entries
    }
}

impl TryFrom<Vec<PlaylistEntry>> for Playlist {
    type Error = PlaybackError;

    fn try_from(entries: Vec<PlaylistEntry>) -> Result<Self> {
        Self::new(entries)
    }
}

/// Immutable view of the playback state
///
/// Published by the manager after every mutation. Consumers derive their
/// presentation from it and never write back into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Index of the current song
    pub index: usize,

    /// Current song title
    pub title: String,

    /// Current song artwork
    pub thumbnail_url: String,

    /// Playback position in seconds
    pub current_time: f64,

    /// Track length in seconds (0 until metadata loads)
    pub duration: f64,

    /// Whether playback is requested
    pub is_playing: bool,

    /// Volume level (0.0-1.0)
    pub volume: f32,

    /// Whether a previous song exists
    pub has_previous: bool,

    /// Whether a next song exists
    pub has_next: bool,

    /// Set when the host could not load the current song
    pub load_error: Option<String>,
}

impl PlaybackSnapshot {
    /// Fraction of the track already played, 0 while the duration is unknown
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 && self.duration.is_finite() {
            (self.current_time / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Configuration for playback manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Initial volume (0.0-1.0, default: 1.0)
    pub volume: f32,

    /// Keep playing when a track ends and another follows (default: true)
    pub autoplay_next: bool,

    /// Ask the host to start buffering as soon as a track is selected (default: true)
    pub preload: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 1.0,
            autoplay_next: true,
            preload: true,
        }
    }
}
