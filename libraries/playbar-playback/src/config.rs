//! Player settings
//!
//! Loaded from a TOML file and `PLAYBAR_`-prefixed environment variables:
//!
//! ```toml
//! [playback]
//! volume = 0.8
//!
//! [[playlist]]
//! title = "Song 1"
//! thumbnail_url = "https://cdn.example/1.jpg"
//! audio_url = "https://cdn.example/1.mp3"
//! ```

use crate::error::{PlaybackError, Result};
use crate::types::{PlaybackConfig, Playlist, PlaylistEntry};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix (`PLAYBAR_PLAYBACK__VOLUME=0.5`)
pub const ENV_PREFIX: &str = "PLAYBAR";

/// Everything needed to mount a player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSettings {
    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub playlist: Vec<PlaylistEntry>,
}

impl PlayerSettings {
    /// Load settings from a file, with environment overrides
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path.as_ref()))
            .add_source(Self::environment())
            .build()?;

        let settings: Self = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from TOML text, with environment overrides
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from_str(source, ::config::FileFormat::Toml))
            .add_source(Self::environment())
            .build()?;

        let settings: Self = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.playlist.is_empty() {
            return Err(PlaybackError::Config(
                "playlist needs at least one entry".to_string(),
            ));
        }

        let volume = self.playback.volume;
        if !(0.0..=1.0).contains(&volume) {
            return Err(PlaybackError::Config(format!(
                "volume must be within 0.0-1.0, got {volume}"
            )));
        }

        if let Some(entry) = self.playlist.iter().find(|e| e.audio_url.is_empty()) {
            return Err(PlaybackError::Config(format!(
                "entry {:?} has no audio_url",
                entry.title
            )));
        }

        Ok(())
    }

    /// Split into the pieces [`PlaybackHandle::mount`](crate::PlaybackHandle::mount) takes
    pub fn into_parts(self) -> Result<(Playlist, PlaybackConfig)> {
        Ok((Playlist::new(self.playlist)?, self.playback))
    }

    fn environment() -> ::config::Environment {
        ::config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }
}
