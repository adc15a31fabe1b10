use foregone_core::{DigitError, ErrorClass, case::VerifyError};
use std::{io, path::PathBuf};
use thiserror::Error as ThisError;

///
/// CliError
///
/// Anything that stops a batch run. Per-case failures carry the
/// 1-based case number they were raised for.
///

#[derive(Debug, ThisError)]
pub(crate) enum CliError {
    #[error("failed to open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("invalid case count {line:?}")]
    CaseCount { line: String },

    #[error("input ended after {found} of {expected} cases")]
    MissingCase { expected: usize, found: usize },

    #[error("case #{case}: {source}")]
    Case { case: usize, source: DigitError },

    #[error("case #{case} failed verification: {source}")]
    Verify { case: usize, source: VerifyError },

    #[error("failed to encode case #{case}: {source}")]
    Json {
        case: usize,
        source: serde_json::Error,
    },
}

impl CliError {
    /// Classification of the underlying digit error, when there is one.
    pub(crate) const fn digit_class(&self) -> Option<ErrorClass> {
        match self {
            Self::Case { source, .. } => Some(source.class()),
            _ => None,
        }
    }
}
