use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShowSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("fewer keystrokes ({keystrokes}) than unlocked slides ({slides})")]
    ImpossibleKeystrokes { keystrokes: u32, slides: u32 },
}

/// Aggregate summary for one completed run through a show. In-memory only;
/// it feeds the completed screen and is dropped on restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowSummary {
    slides_unlocked: u32,
    keystrokes: u32,
    resets: u32,
    skips: u32,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl ShowSummary {
    /// Builds a summary from run counters.
    ///
    /// # Errors
    ///
    /// Returns `ShowSummaryError::InvalidTimeRange` if `completed_at` is
    /// before `started_at`, and `ShowSummaryError::ImpossibleKeystrokes`
    /// when the counters cannot describe a real run (every unlocked slide
    /// takes at least one keystroke).
    pub fn from_counts(
        slides_unlocked: u32,
        keystrokes: u32,
        resets: u32,
        skips: u32,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, ShowSummaryError> {
        if completed_at < started_at {
            return Err(ShowSummaryError::InvalidTimeRange);
        }
        if keystrokes < slides_unlocked {
            return Err(ShowSummaryError::ImpossibleKeystrokes {
                keystrokes,
                slides: slides_unlocked,
            });
        }

        Ok(Self {
            slides_unlocked,
            keystrokes,
            resets,
            skips,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn slides_unlocked(&self) -> u32 {
        self.slides_unlocked
    }

    #[must_use]
    pub fn keystrokes(&self) -> u32 {
        self.keystrokes
    }

    #[must_use]
    pub fn resets(&self) -> u32 {
        self.resets
    }

    #[must_use]
    pub fn skips(&self) -> u32 {
        self.skips
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Whole seconds between start and completion.
    #[must_use]
    pub fn duration_secs(&self) -> i64 {
        (self.completed_at - self.started_at).num_seconds()
    }
}
