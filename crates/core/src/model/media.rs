use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

//
// ─── ERRORS (domain validation) ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaValidationError {
    #[error("Media URI cannot be empty.")]
    EmptyMediaUri,
}

//
// ─── MEDIA HANDLE ──────────────────────────────────────────────────────────────
//

/// Opaque handle for a slide's video clip. The playback collaborator decides
/// how to resolve it; the core never touches the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaUri {
    FilePath(PathBuf),
    Url(Url),
}

impl MediaUri {
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, MediaValidationError> {
        let p = path.into();
        if p.as_os_str().is_empty() {
            return Err(MediaValidationError::EmptyMediaUri);
        }
        Ok(MediaUri::FilePath(p))
    }

    pub fn from_url(url: impl AsRef<str>) -> Result<Self, MediaValidationError> {
        let s = url.as_ref().trim();
        if s.is_empty() {
            return Err(MediaValidationError::EmptyMediaUri);
        }
        let u = Url::parse(s).map_err(|_| MediaValidationError::EmptyMediaUri)?;
        Ok(MediaUri::Url(u))
    }

    /// Parses a raw reference: values with a scheme become URLs, everything
    /// else a file path.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, MediaValidationError> {
        let s = raw.as_ref().trim();
        if s.contains("://") {
            Self::from_url(s)
        } else {
            Self::from_file(s)
        }
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            MediaUri::FilePath(p) => Some(p.as_path()),
            _ => None,
        }
    }

    pub fn as_url(&self) -> Option<&Url> {
        match self {
            MediaUri::Url(u) => Some(u),
            _ => None,
        }
    }
}

impl fmt::Display for MediaUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaUri::FilePath(p) => write!(f, "{}", p.display()),
            MediaUri::Url(u) => write!(f, "{u}"),
        }
    }
}
