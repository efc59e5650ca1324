use thiserror::Error;

use crate::model::{MediaValidationError, ShowError, SlideError};
use crate::summary::ShowSummaryError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    MediaValidation(#[from] MediaValidationError),
    #[error(transparent)]
    SlideValidation(#[from] SlideError),
    #[error(transparent)]
    ShowValidation(#[from] ShowError),
    #[error(transparent)]
    Summary(#[from] ShowSummaryError),
}
