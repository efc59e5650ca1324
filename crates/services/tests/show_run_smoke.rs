use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;

use reveal_core::model::Slide;
use reveal_core::session::Phase;
use reveal_core::time::fixed_clock;
use services::{Playback, PlaybackError, ShowRunner, builtin_show};

/// Records every playback intent the runner emits.
#[derive(Default)]
struct RecordingPlayback {
    plays: Mutex<Vec<String>>,
    rewinds: Mutex<u32>,
}

#[async_trait]
impl Playback for RecordingPlayback {
    async fn load_and_play(&self, slide: &Slide) -> Result<(), PlaybackError> {
        self.plays
            .lock()
            .unwrap()
            .push(slide.secret().as_str().to_string());
        Ok(())
    }

    async fn stop_and_rewind(&self) -> Result<(), PlaybackError> {
        *self.rewinds.lock().unwrap() += 1;
        Ok(())
    }
}

/// A playback whose `play` always fails, like an autoplay policy would.
struct RejectingPlayback;

#[async_trait]
impl Playback for RejectingPlayback {
    async fn load_and_play(&self, _slide: &Slide) -> Result<(), PlaybackError> {
        Err(PlaybackError::Rejected("autoplay blocked".to_string()))
    }

    async fn stop_and_rewind(&self) -> Result<(), PlaybackError> {
        Ok(())
    }
}

#[tokio::test]
async fn full_run_through_the_builtin_show() {
    let playback = Arc::new(RecordingPlayback::default());
    let runner = ShowRunner::new(fixed_clock(), playback.clone());
    let show = Arc::new(builtin_show());
    let mut run = runner.start_run(Arc::clone(&show));

    for slide in show.slides() {
        let secret = slide.secret().as_str().to_string();
        for ch in secret.chars() {
            runner.press_key(&mut run, &ch.to_string()).await;
        }
        assert_eq!(run.session().phase(), Phase::Playing);
        runner.playback_ended(&mut run);
    }

    assert!(run.is_complete());
    let summary = run.summary().expect("summary after the final slide");
    assert_eq!(summary.slides_unlocked(), 5);
    assert_eq!(summary.resets(), 0);
    assert_eq!(summary.skips(), 0);

    let plays = playback.plays.lock().unwrap();
    assert_eq!(
        *plays,
        vec!["running", "eating", "singing", "climbing", "dancing"]
    );
}

#[tokio::test]
async fn restart_rewinds_playback_and_starts_over() {
    let playback = Arc::new(RecordingPlayback::default());
    let runner = ShowRunner::new(fixed_clock(), playback.clone());
    let show = Arc::new(builtin_show());
    let mut run = runner.start_run(show);

    for ch in "running".chars() {
        runner.press_key(&mut run, &ch.to_string()).await;
    }
    assert_eq!(run.session().phase(), Phase::Playing);

    runner.restart(&mut run).await;
    assert_eq!(run.session().phase(), Phase::Idle);
    assert_eq!(run.session().slide_index(), 0);
    assert_eq!(*playback.rewinds.lock().unwrap(), 1);
}

#[tokio::test]
async fn rejected_play_leaves_the_session_playing() {
    let runner = ShowRunner::new(fixed_clock(), Arc::new(RejectingPlayback));
    let show = Arc::new(builtin_show());
    let mut run = runner.start_run(show);

    for ch in "running".chars() {
        runner.press_key(&mut run, &ch.to_string()).await;
    }

    // The failure was swallowed; skip is the recovery path.
    assert_eq!(run.session().phase(), Phase::Playing);
    runner.skip(&mut run);
    assert_eq!(run.session().phase(), Phase::Idle);
    assert_eq!(run.session().slide_index(), 1);
    assert_eq!(run.skips(), 1);
}
