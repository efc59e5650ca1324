use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::warn;

use reveal_core::model::{Show, Slide};
use reveal_core::session::{KeyOutcome, Phase, PlaybackOutcome, ShowSession};
use reveal_core::summary::ShowSummary;
use reveal_core::time::Clock;

use crate::playback::Playback;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct RunCounters {
    keystrokes: u32,
    resets: u32,
    skips: u32,
    unlocked: u32,
}

/// One run through a show: the session state machine plus the statistics
/// the completed screen reports. Created by [`ShowRunner::start_run`] and
/// reset wholesale by restart.
#[derive(Debug, Clone)]
pub struct ShowRun {
    session: ShowSession,
    counters: RunCounters,
    started_at: DateTime<Utc>,
    summary: Option<ShowSummary>,
}

impl ShowRun {
    #[must_use]
    pub fn session(&self) -> &ShowSession {
        &self.session
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.phase() == Phase::Completed
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Present once the final slide ended or was skipped.
    #[must_use]
    pub fn summary(&self) -> Option<&ShowSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn keystrokes(&self) -> u32 {
        self.counters.keystrokes
    }

    #[must_use]
    pub fn resets(&self) -> u32 {
        self.counters.resets
    }

    #[must_use]
    pub fn skips(&self) -> u32 {
        self.counters.skips
    }
}

/// Orchestrates a [`ShowSession`] against the playback collaborator:
/// transitions first, side effects second. Playback failures are logged
/// and swallowed; skip remains the recovery path.
#[derive(Clone)]
pub struct ShowRunner {
    clock: Clock,
    playback: Arc<dyn Playback + Send + Sync>,
}

impl ShowRunner {
    #[must_use]
    pub fn new(clock: Clock, playback: Arc<dyn Playback + Send + Sync>) -> Self {
        Self { clock, playback }
    }

    #[must_use]
    pub fn start_run(&self, show: Arc<Show>) -> ShowRun {
        ShowRun {
            session: ShowSession::new(show),
            counters: RunCounters::default(),
            started_at: self.clock.now(),
            summary: None,
        }
    }

    /// Feed one raw key value through the session. When the key completes
    /// the secret, playback for the unlocked slide is started.
    pub async fn press_key(&self, run: &mut ShowRun, raw_key: &str) -> KeyOutcome {
        let outcome = run.session.press_key(raw_key);
        match outcome {
            KeyOutcome::Progress => run.counters.keystrokes += 1,
            KeyOutcome::Reset => {
                run.counters.keystrokes += 1;
                run.counters.resets += 1;
            }
            KeyOutcome::Unlocked => {
                run.counters.keystrokes += 1;
                run.counters.unlocked += 1;
                self.start_playback(run.session.current_slide()).await;
            }
            KeyOutcome::Ignored => {}
        }
        outcome
    }

    /// The active slide's video finished on its own.
    pub fn playback_ended(&self, run: &mut ShowRun) -> PlaybackOutcome {
        self.end_playback(run, false)
    }

    /// The viewer skipped the active slide. Identical to a natural end for
    /// the session; only the run statistics tell the two apart.
    pub fn skip(&self, run: &mut ShowRun) -> PlaybackOutcome {
        self.end_playback(run, true)
    }

    /// Reset the run wholesale and rewind any in-flight media.
    pub async fn restart(&self, run: &mut ShowRun) {
        run.session.restart();
        run.counters = RunCounters::default();
        run.started_at = self.clock.now();
        run.summary = None;
        if let Err(err) = self.playback.stop_and_rewind().await {
            warn!("stop-and-rewind failed on restart: {err}");
        }
    }

    fn end_playback(&self, run: &mut ShowRun, skipped: bool) -> PlaybackOutcome {
        let outcome = run.session.playback_ended();
        if skipped && outcome != PlaybackOutcome::Ignored {
            run.counters.skips += 1;
        }
        if outcome == PlaybackOutcome::Completed {
            self.finish(run);
        }
        outcome
    }

    async fn start_playback(&self, slide: &Slide) {
        if let Err(err) = self.playback.load_and_play(slide).await {
            warn!(
                "playback start failed for slide {}: {err}; waiting for skip",
                slide.id()
            );
        }
    }

    fn finish(&self, run: &mut ShowRun) {
        let counters = run.counters;
        match ShowSummary::from_counts(
            counters.unlocked,
            counters.keystrokes,
            counters.resets,
            counters.skips,
            run.started_at,
            self.clock.now(),
        ) {
            Ok(summary) => run.summary = Some(summary),
            Err(err) => warn!("run summary discarded: {err}"),
        }
    }
}
