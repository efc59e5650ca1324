use async_trait::async_trait;
use dioxus::document;

use reveal_core::model::Slide;
use services::{Playback, PlaybackError};

/// Playback collaborator backed by the webview `<video>` element.
///
/// The element's `src` is bound declaratively by the show view; this type
/// only issues the imperative half (`load`/`play`/`pause`/rewind) through
/// `document::eval`. The JS `play()` promise rejection (autoplay policy) is
/// swallowed inside the script, so a blocked start never reaches the state
/// machine; the viewer recovers with skip.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebviewPlayback;

impl WebviewPlayback {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Playback for WebviewPlayback {
    async fn load_and_play(&self, _slide: &Slide) -> Result<(), PlaybackError> {
        let _ = document::eval(&play_script());
        Ok(())
    }

    async fn stop_and_rewind(&self) -> Result<(), PlaybackError> {
        let _ = document::eval(&stop_and_rewind_script());
        Ok(())
    }
}

fn play_script() -> String {
    r#"(function() {
        const v = document.getElementById("show-video");
        if (!v) return;
        v.load();
        const p = v.play();
        if (p && p.catch) p.catch(() => {});
    })();"#
        .to_string()
}

fn stop_and_rewind_script() -> String {
    r#"(function() {
        const v = document.getElementById("show-video");
        if (!v) return;
        v.pause();
        v.currentTime = 0;
    })();"#
        .to_string()
}
