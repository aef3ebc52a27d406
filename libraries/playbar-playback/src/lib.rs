//! Playbar - Playback Management
//!
//! Platform-agnostic playback state for a persistent play bar.
//!
//! This crate provides:
//! - Current song, play/pause, position, duration and volume in one manager
//! - Previous/next navigation that cannot run past the playlist edges
//! - Automatic advance when a song ends, stopping after the last one
//! - Snapshot listeners and a typed event log for views
//! - A per-frame position refresh with explicit start/cancel
//! - Settings loading (TOML file + environment)
//!
//! # Architecture
//!
//! `playbar-playback` never decodes audio. The host supplies a
//! [`MediaBackend`] (an `HTMLAudioElement` wrapper in the browser, see the
//! `wasm` feature) and a [`FrameScheduler`]; the manager creates one
//! [`MediaResource`] per song and discards it on every track change.
//!
//! # Example: Mounting a player
//!
//! ```rust
//! use playbar_playback::{
//!     ManualFrameScheduler, MediaBackend, MediaEventSink, MediaResource, PlaybackConfig,
//!     PlaybackHandle, Playlist, PlaylistEntry, Result,
//! };
//!
//! // Implement MediaResource for your platform
//! struct Silent;
//!
//! impl MediaResource for Silent {
//!     fn load(&mut self) {}
//!     fn play(&mut self) {}
//!     fn pause(&mut self) {}
//!     fn current_time(&self) -> f64 { 0.0 }
//!     fn set_current_time(&mut self, _seconds: f64) {}
//!     fn set_volume(&mut self, _volume: f32) {}
//!     fn duration(&self) -> Option<f64> { None }
//! }
//!
//! struct SilentBackend;
//!
//! impl MediaBackend for SilentBackend {
//!     fn create(&mut self, _url: &str, _events: MediaEventSink) -> Result<Box<dyn MediaResource>> {
//!         Ok(Box::new(Silent))
//!     }
//! }
//!
//! let playlist = Playlist::new(vec![
//!     PlaylistEntry::new("Song 1", "", "https://cdn.example/1.mp3"),
//!     PlaylistEntry::new("Song 2", "", "https://cdn.example/2.mp3"),
//! ])?;
//!
//! let mut frames = ManualFrameScheduler::new();
//! let handle = PlaybackHandle::mount(
//!     playlist,
//!     PlaybackConfig::default(),
//!     Box::new(SilentBackend),
//!     &mut frames,
//! )?;
//!
//! handle.update(|manager| {
//!     manager.play();
//!     if let Some(next) = manager.next_track() {
//!         manager.navigate(next)?;
//!     }
//!     Ok::<_, playbar_playback::PlaybackError>(())
//! })?;
//!
//! assert_eq!(handle.snapshot().title, "Song 2");
//! assert!(handle.snapshot().is_playing);
//! # Ok::<(), playbar_playback::PlaybackError>(())
//! ```

pub mod config;
mod error;
mod events;
mod frame;
mod handle;
mod manager;
mod resource;
pub mod types;
mod volume;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use config::PlayerSettings;
pub use error::{PlaybackError, Result};
pub use events::{Listener, PlaybackEvent, SubscriptionId};
pub use frame::{FrameCallback, FrameLoop, FrameScheduler, ManualFrameScheduler};
pub use handle::{PlaybackHandle, WeakPlaybackHandle};
pub use manager::{Direction, Navigation, PlaybackManager};
pub use resource::{MediaBackend, MediaEvent, MediaEventSink, MediaResource, ResourceToken, WakeFn};
pub use types::{PlaybackConfig, PlaybackSnapshot, Playlist, PlaylistEntry};
pub use volume::Volume;
