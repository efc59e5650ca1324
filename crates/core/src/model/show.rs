use std::collections::HashSet;
use thiserror::Error;

use crate::model::ids::SlideId;
use crate::model::slide::Slide;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShowError {
    #[error("a show needs at least one slide")]
    Empty,

    #[error("duplicate slide id: {0}")]
    DuplicateSlideId(SlideId),
}

//
// ─── SHOW ──────────────────────────────────────────────────────────────────────
//

/// The ordered slide sequence. Fixed for the lifetime of a session; the
/// session only ever walks it forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    slides: Vec<Slide>,
}

impl Show {
    /// Builds a show from an ordered slide list.
    ///
    /// # Errors
    ///
    /// Returns `ShowError::Empty` for an empty list and
    /// `ShowError::DuplicateSlideId` when two slides share an id.
    pub fn new(slides: Vec<Slide>) -> Result<Self, ShowError> {
        if slides.is_empty() {
            return Err(ShowError::Empty);
        }
        let mut seen = HashSet::new();
        for slide in &slides {
            if !seen.insert(slide.id()) {
                return Err(ShowError::DuplicateSlideId(slide.id()));
            }
        }
        Ok(Self { slides })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        // `new` rejects empty shows, but the std convention pair stays.
        self.slides.is_empty()
    }

    #[must_use]
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.slides.len() - 1
    }

    #[must_use]
    pub fn is_last(&self, index: usize) -> bool {
        index == self.last_index()
    }

    pub fn slides(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}
