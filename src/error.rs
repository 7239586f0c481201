use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("{}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the no-messages option may silence this error's report.
    ///
    /// Only I/O errors qualify; a bad pattern is user error and is always
    /// reported. Suppression controls reporting, not whether the invocation
    /// aborts.
    pub fn is_suppressible(&self) -> bool {
        matches!(self, Error::Open { .. } | Error::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
