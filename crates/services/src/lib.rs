#![forbid(unsafe_code)]

pub mod error;
pub mod playback;
pub mod show_config;
pub mod show_runner;

pub use reveal_core::Clock;

pub use error::{PlaybackError, ShowConfigError};
pub use playback::{NullPlayback, Playback};
pub use show_config::{ShowFile, SlideDraft, builtin_show, load_show};
pub use show_runner::{ShowRun, ShowRunner};
