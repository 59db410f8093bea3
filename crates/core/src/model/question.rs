use serde::{Deserialize, Serialize};

use crate::table::VerbEntry;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Which inflected form a question asks for.
///
/// This marker is what keeps the two question kinds of a verb apart; the
/// rendered prompt is derived from it, never the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerbForm {
    Past,
    Progressive,
}

impl VerbForm {
    /// Display label used in prompts.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            VerbForm::Past => "過去形",
            VerbForm::Progressive => "進行形",
        }
    }
}

/// A single drill question: one verb, one form to produce.
///
/// `headword` identifies the originating table row; it is carried for
/// traceability, not as an identity key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    headword: String,
    form: VerbForm,
    answer: String,
}

impl QuestionRecord {
    #[must_use]
    pub fn new(headword: impl Into<String>, form: VerbForm, answer: impl Into<String>) -> Self {
        Self {
            headword: headword.into(),
            form,
            answer: answer.into().trim().to_string(),
        }
    }

    #[must_use]
    pub fn headword(&self) -> &str {
        &self.headword
    }

    #[must_use]
    pub fn form(&self) -> VerbForm {
        self.form
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Case-insensitive, whitespace-trimmed match of a typed answer.
    #[must_use]
    pub fn matches(&self, given: &str) -> bool {
        given.trim().to_lowercase() == self.answer.to_lowercase()
    }
}

//
// ─── QUESTION BUILDER ──────────────────────────────────────────────────────────
//

/// Derive drill questions from parsed verb entries.
///
/// Each entry contributes a past-form question and then a progressive-form
/// question, each only when the headword and that form are both non-empty.
/// Row order is preserved; repeated headwords are not deduplicated.
#[must_use]
pub fn build_questions(entries: &[VerbEntry]) -> Vec<QuestionRecord> {
    let mut questions = Vec::new();
    for entry in entries {
        if entry.headword.is_empty() {
            continue;
        }
        if !entry.past.is_empty() {
            questions.push(QuestionRecord::new(
                &entry.headword,
                VerbForm::Past,
                &entry.past,
            ));
        }
        if !entry.progressive.is_empty() {
            questions.push(QuestionRecord::new(
                &entry.headword,
                VerbForm::Progressive,
                &entry.progressive,
            ));
        }
    }
    questions
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
