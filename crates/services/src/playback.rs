use async_trait::async_trait;

use reveal_core::model::Slide;

use crate::error::PlaybackError;

/// The media-playback collaborator. The session never calls this itself;
/// the runner signals intent when an unlock or restart outcome asks for it.
///
/// Implementations are expected to be asynchronous and allowed to fail
/// (e.g. an autoplay policy rejecting `play`). Failures are swallowed and
/// logged at the runner boundary; they never feed back into the phase.
#[async_trait]
pub trait Playback {
    /// Load the slide's clip and start playing it from the beginning.
    async fn load_and_play(&self, slide: &Slide) -> Result<(), PlaybackError>;

    /// Stop whatever is in flight and rewind to the start.
    async fn stop_and_rewind(&self) -> Result<(), PlaybackError>;
}

/// A playback that does nothing. Useful for headless runs and view tests
/// where no media surface exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPlayback;

#[async_trait]
impl Playback for NullPlayback {
    async fn load_and_play(&self, _slide: &Slide) -> Result<(), PlaybackError> {
        Ok(())
    }

    async fn stop_and_rewind(&self) -> Result<(), PlaybackError> {
        Ok(())
    }
}
