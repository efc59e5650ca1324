use thiserror::Error;

use crate::model::ids::SlideId;
use crate::model::media::MediaUri;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SlideError {
    #[error("secret word cannot be empty")]
    EmptySecret,

    #[error("secret word cannot contain whitespace")]
    SecretContainsWhitespace,

    #[error("prompt cannot be empty")]
    EmptyPrompt,
}

//
// ─── VALIDATED VALUE TYPES ─────────────────────────────────────────────────────
//

/// The literal word the viewer must type to unlock a slide.
///
/// Matching is case-insensitive, so the word is normalized to lowercase at
/// construction and every comparison works on the stored form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord(String);

impl SecretWord {
    pub fn parse(raw: impl Into<String>) -> Result<Self, SlideError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SlideError::EmptySecret);
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(SlideError::SecretContainsWhitespace);
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters the viewer has to type (not bytes).
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

/// The question shown while a slide waits to be unlocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn parse(raw: impl Into<String>) -> Result<Self, SlideError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(SlideError::EmptyPrompt);
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//
// ─── SLIDE ─────────────────────────────────────────────────────────────────────
//

/// One unit of the show: a secret word, the clip it unlocks, and a prompt.
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    id: SlideId,
    secret: SecretWord,
    media: MediaUri,
    prompt: Prompt,
}

impl Slide {
    #[must_use]
    pub fn new(id: SlideId, secret: SecretWord, media: MediaUri, prompt: Prompt) -> Self {
        Self {
            id,
            secret,
            media,
            prompt,
        }
    }

    #[must_use]
    pub fn id(&self) -> SlideId {
        self.id
    }

    #[must_use]
    pub fn secret(&self) -> &SecretWord {
        &self.secret
    }

    #[must_use]
    pub fn media(&self) -> &MediaUri {
        &self.media
    }

    #[must_use]
    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_word_is_normalized_to_lowercase() {
        let secret = SecretWord::parse("  RunNing ").unwrap();
        assert_eq!(secret.as_str(), "running");
        assert_eq!(secret.char_len(), 7);
    }

    #[test]
    fn secret_word_rejects_empty() {
        assert_eq!(SecretWord::parse("   "), Err(SlideError::EmptySecret));
    }

    #[test]
    fn secret_word_rejects_inner_whitespace() {
        assert_eq!(
            SecretWord::parse("two words"),
            Err(SlideError::SecretContainsWhitespace)
        );
    }

    #[test]
    fn prompt_rejects_empty() {
        assert_eq!(Prompt::parse(""), Err(SlideError::EmptyPrompt));
    }
}
