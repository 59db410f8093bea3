//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use drill_core::model::SessionError;

/// Errors emitted while loading the verb table.
///
/// All of them are terminal for the current flow; there is no retry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("failed to read verb table from {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch verb table from {url}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("verb table contains no usable questions")]
    EmptyPool,
}

/// Errors emitted by the quiz flow.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizFlowError {
    #[error("no missed questions to review")]
    NothingToReview,

    #[error(transparent)]
    Session(#[from] SessionError),
}
