use std::sync::Arc;

use reveal_core::model::Show;
use reveal_core::session::Phase;
use services::{ShowRun, ShowRunner};

/// Everything the view can ask the controller to do. Keyboard input, the
/// video's `ended` event, and the two buttons all funnel through here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShowIntent {
    /// A raw key value from the keyboard source.
    Key(String),
    /// The active clip finished on its own.
    PlaybackEnded,
    /// The viewer pressed the skip control.
    Skip,
    /// The viewer pressed the restart control.
    Restart,
}

/// View model over one run: read-only projections for rendering plus a
/// single dispatch entry point.
pub struct ShowVm {
    run: ShowRun,
}

impl ShowVm {
    #[must_use]
    pub fn new(runner: &ShowRunner, show: Arc<Show>) -> Self {
        Self {
            run: runner.start_run(show),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.run.session().phase()
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        self.run.session().current_slide().prompt().as_str()
    }

    #[must_use]
    pub fn media_src(&self) -> String {
        self.run.session().current_slide().media().to_string()
    }

    #[must_use]
    pub fn slide_index(&self) -> usize {
        self.run.session().slide_index()
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.run.session().show().len()
    }

    #[must_use]
    pub fn is_last_slide(&self) -> bool {
        self.run.session().is_last_slide()
    }

    /// One entry per secret character: the typed letter once matched,
    /// `None` while the slot is still open.
    #[must_use]
    pub fn letter_slots(&self) -> Vec<Option<char>> {
        let session = self.run.session();
        let secret_len = session.current_slide().secret().char_len();
        let typed: Vec<char> = session.typed().chars().collect();
        (0..secret_len).map(|i| typed.get(i).copied()).collect()
    }

    /// Present on the completed screen only.
    #[must_use]
    pub fn summary_line(&self) -> Option<String> {
        self.run.summary().map(|summary| {
            format!(
                "{} slides unlocked with {} keystrokes in {}s.",
                summary.slides_unlocked(),
                summary.keystrokes(),
                summary.duration_secs()
            )
        })
    }

    pub async fn dispatch(&mut self, runner: &ShowRunner, intent: ShowIntent) {
        match intent {
            ShowIntent::Key(value) => {
                runner.press_key(&mut self.run, &value).await;
            }
            ShowIntent::PlaybackEnded => {
                runner.playback_ended(&mut self.run);
            }
            ShowIntent::Skip => {
                runner.skip(&mut self.run);
            }
            ShowIntent::Restart => {
                runner.restart(&mut self.run).await;
            }
        }
    }
}
