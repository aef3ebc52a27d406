//! Error types for playback management

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// A consumer outlived the playback provider it was mounted under
    #[error("No playback context found")]
    ContextMissing,

    /// A playlist needs at least one entry
    #[error("Playlist is empty")]
    EmptyPlaylist,

    /// The host media primitive could not create a resource
    #[error("Media resource error: {0}")]
    MediaResource(String),

    /// The frame loop could not be started
    #[error("Frame scheduler error: {0}")]
    FrameScheduler(String),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;

impl From<::config::ConfigError> for PlaybackError {
    fn from(err: ::config::ConfigError) -> Self {
        PlaybackError::Config(err.to_string())
    }
}
