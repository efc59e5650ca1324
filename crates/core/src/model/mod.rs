mod ids;
mod media;
mod show;
mod slide;

pub use ids::SlideId;
pub use media::{MediaUri, MediaValidationError};
pub use show::{Show, ShowError};
pub use slide::{Prompt, SecretWord, Slide, SlideError};
