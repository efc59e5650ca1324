use std::fs;
use std::path::Path;

use serde::Deserialize;

use reveal_core::model::{MediaUri, Prompt, SecretWord, Show, Slide, SlideId};

use crate::error::ShowConfigError;

/// Raw show definition as it appears in a JSON show file. Unvalidated;
/// `validate` turns it into domain types.
#[derive(Debug, Clone, Deserialize)]
pub struct ShowFile {
    pub slides: Vec<SlideDraft>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlideDraft {
    pub id: u64,
    pub secret: String,
    pub media: String,
    pub prompt: String,
}

impl SlideDraft {
    fn validate(self) -> Result<Slide, ShowConfigError> {
        Ok(Slide::new(
            SlideId::new(self.id),
            SecretWord::parse(self.secret)?,
            MediaUri::parse(self.media)?,
            Prompt::parse(self.prompt)?,
        ))
    }
}

impl ShowFile {
    /// # Errors
    ///
    /// Returns `ShowConfigError` when any slide fails domain validation or
    /// the slide list itself is invalid.
    pub fn validate(self) -> Result<Show, ShowConfigError> {
        let slides = self
            .slides
            .into_iter()
            .map(SlideDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Show::new(slides)?)
    }
}

/// Loads a show from a JSON file. Read once at startup; shows are never
/// reloaded at runtime.
///
/// # Errors
///
/// Returns `ShowConfigError` for I/O, JSON, or validation failures.
pub fn load_show(path: &Path) -> Result<Show, ShowConfigError> {
    let raw = fs::read_to_string(path)?;
    let file: ShowFile = serde_json::from_str(&raw)?;
    file.validate()
}

/// The compiled-in default show.
#[must_use]
pub fn builtin_show() -> Show {
    let drafts = [
        (1, "running", "/videos/1.mp4", "What are the boys doing?"),
        (2, "eating", "/videos/2.mp4", "What are the children doing?"),
        (3, "singing", "/videos/3.mp4", "What is the girl doing?"),
        (4, "climbing", "/videos/4.mp4", "What is the boy doing?"),
        (5, "dancing", "/videos/5.mp4", "What is the girl doing?"),
    ];
    let slides = drafts
        .into_iter()
        .map(|(id, secret, media, prompt)| {
            SlideDraft {
                id,
                secret: secret.to_string(),
                media: media.to_string(),
                prompt: prompt.to_string(),
            }
            .validate()
        })
        .collect::<Result<Vec<_>, _>>()
        .expect("built-in slides are valid");
    Show::new(slides).expect("built-in show is valid")
}
