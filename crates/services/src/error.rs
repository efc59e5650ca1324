//! Shared error types for the services crate.

use thiserror::Error;

use reveal_core::model::{MediaValidationError, ShowError, SlideError};

/// Errors emitted by playback collaborators.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PlaybackError {
    #[error("playback was rejected by the host: {0}")]
    Rejected(String),
    #[error("no playback surface is available")]
    Unavailable,
}

/// Errors emitted while loading a show definition.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ShowConfigError {
    #[error("failed to read show file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse show file")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Slide(#[from] SlideError),
    #[error(transparent)]
    Media(#[from] MediaValidationError),
    #[error(transparent)]
    Show(#[from] ShowError),
}
