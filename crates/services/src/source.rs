//! One-shot loading of the verb table into a question pool.
//!
//! The table is fetched exactly once, at startup, from a file path or a URL.
//! A failure here is terminal: the quiz never starts and the caller surfaces
//! a message instead.

use std::path::Path;

use drill_core::model::{QuestionRecord, build_questions};
use drill_core::table::parse_table;

use crate::error::SourceError;

/// Build the question pool from raw table text.
///
/// # Errors
///
/// Returns `SourceError::EmptyPool` when no row yields a usable question.
pub fn load_questions(text: &str) -> Result<Vec<QuestionRecord>, SourceError> {
    let entries = parse_table(text);
    let questions = build_questions(&entries);
    if questions.is_empty() {
        return Err(SourceError::EmptyPool);
    }

    tracing::info!(
        entries = entries.len(),
        questions = questions.len(),
        "verb table loaded"
    );
    Ok(questions)
}

/// Load the question pool from a file on disk.
///
/// # Errors
///
/// Returns `SourceError::Io` when the file cannot be read and
/// `SourceError::EmptyPool` when it yields no questions.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<QuestionRecord>, SourceError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_questions(&text)
}

/// Fetch the question pool from a URL.
///
/// # Errors
///
/// Returns `SourceError::Http` on request or status failures and
/// `SourceError::EmptyPool` when the body yields no questions.
pub async fn load_from_url(url: &str) -> Result<Vec<QuestionRecord>, SourceError> {
    let http_error = |source| SourceError::Http {
        url: url.to_string(),
        source,
    };

    let response = reqwest::get(url).await.map_err(http_error)?;
    let body = response
        .error_for_status()
        .map_err(http_error)?
        .text()
        .await
        .map_err(http_error)?;
    load_questions(&body)
}
