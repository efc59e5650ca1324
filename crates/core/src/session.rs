use std::sync::Arc;

use crate::model::{SecretWord, Show, Slide};

/// Where the session is in the unlock/play/finish cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the current slide's secret word.
    Idle,
    /// The current slide's video is active.
    Playing,
    /// The final slide's video ended or was skipped.
    Completed,
}

/// What a key press did to the session. Collaborators act on the outcome;
/// the transition itself has no side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Out-of-phase or non-printable key. State untouched.
    Ignored,
    /// The key extended the matched prefix.
    Progress,
    /// The key broke the prefix; all progress cleared, the key discarded.
    Reset,
    /// The final character landed. Phase is now `Playing` and the observer
    /// should start playback for the current slide.
    Unlocked,
}

/// What a playback-ended signal (natural end or user skip, identically) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// The session was not `Playing`; stray signal, state untouched.
    Ignored,
    /// Advanced to the next slide, back to `Idle`.
    Advanced,
    /// That was the last slide. Phase is now `Completed`.
    Completed,
}

/// The session state machine: one mutable instance owning
/// `{slide_index, typed, phase}` over a fixed [`Show`].
///
/// Every transition happens synchronously inside the call for one event;
/// there is no queueing and no reordering. Playback and rendering observe
/// the returned outcomes and the read-only accessors, never the reverse.
#[derive(Debug, Clone)]
pub struct ShowSession {
    show: Arc<Show>,
    slide_index: usize,
    typed: String,
    phase: Phase,
}

impl ShowSession {
    #[must_use]
    pub fn new(show: Arc<Show>) -> Self {
        Self {
            show,
            slide_index: 0,
            typed: String::new(),
            phase: Phase::Idle,
        }
    }

    #[must_use]
    pub fn show(&self) -> &Arc<Show> {
        &self.show
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn slide_index(&self) -> usize {
        self.slide_index
    }

    /// The lowercase prefix of the current secret matched so far.
    #[must_use]
    pub fn typed(&self) -> &str {
        &self.typed
    }

    #[must_use]
    pub fn typed_char_len(&self) -> usize {
        self.typed.chars().count()
    }

    #[must_use]
    pub fn current_slide(&self) -> &Slide {
        self.show
            .slide(self.slide_index)
            .expect("session index stays within the show")
    }

    #[must_use]
    pub fn is_last_slide(&self) -> bool {
        self.show.is_last(self.slide_index)
    }

    /// Feeds one raw key value (a DOM-style `key` string) into the machine.
    ///
    /// Only has an effect while `Idle`. The value is lowercased; anything
    /// that is not a single character afterwards (named keys such as
    /// "Shift" or "Enter") is ignored. A key that breaks the prefix clears
    /// all progress and is itself discarded.
    pub fn press_key(&mut self, raw_key: &str) -> KeyOutcome {
        if self.phase != Phase::Idle {
            return KeyOutcome::Ignored;
        }
        let Some(key) = normalize_key(raw_key) else {
            return KeyOutcome::Ignored;
        };

        let show = Arc::clone(&self.show);
        let secret = show
            .slide(self.slide_index)
            .expect("session index stays within the show")
            .secret();

        let mut candidate = self.typed.clone();
        candidate.push(key);

        if !is_prefix_of(&candidate, secret) {
            self.typed.clear();
            return KeyOutcome::Reset;
        }

        self.typed = candidate;
        if self.typed.chars().count() == secret.char_len() {
            self.phase = Phase::Playing;
            KeyOutcome::Unlocked
        } else {
            KeyOutcome::Progress
        }
    }

    /// The active slide's video finished, or the viewer skipped it. The two
    /// are indistinguishable here.
    pub fn playback_ended(&mut self) -> PlaybackOutcome {
        if self.phase != Phase::Playing {
            return PlaybackOutcome::Ignored;
        }
        if self.show.is_last(self.slide_index) {
            self.phase = Phase::Completed;
            PlaybackOutcome::Completed
        } else {
            self.slide_index += 1;
            self.typed.clear();
            self.phase = Phase::Idle;
            PlaybackOutcome::Advanced
        }
    }

    /// Wholesale reset to `{0, "", Idle}`. Safe from any phase; the caller
    /// signals stop-and-rewind to the playback collaborator.
    pub fn restart(&mut self) {
        self.slide_index = 0;
        self.typed.clear();
        self.phase = Phase::Idle;
    }
}

/// Lowercases a raw key value and keeps it only if it is a single character.
fn normalize_key(raw: &str) -> Option<char> {
    let lowered = raw.to_lowercase();
    let mut chars = lowered.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

/// Position-by-position prefix check of `candidate` against the secret.
fn is_prefix_of(candidate: &str, secret: &SecretWord) -> bool {
    let mut expected = secret.chars();
    candidate.chars().all(|ch| expected.next() == Some(ch))
}
