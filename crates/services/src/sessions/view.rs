use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use drill_core::model::{QuestionRecord, QuizSession, Score, SessionError, VerbForm};

//
// ─── QUESTION VIEW ─────────────────────────────────────────────────────────────
//

/// Display data for the question currently being asked.
///
/// Carries ready-to-render strings plus the form marker so a renderer can
/// style the two question kinds differently without parsing the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub prompt: String,
    pub counter: String,
    pub form: VerbForm,
    pub is_last: bool,
}

impl QuestionView {
    /// Build the view for the session's current question.
    ///
    /// Returns `None` when the session is already complete.
    #[must_use]
    pub fn for_current(session: &QuizSession) -> Option<Self> {
        let question = session.current_question()?;
        let number = session.answered_count() + 1;
        let total = session.total_questions();

        Some(Self {
            prompt: prompt_text(question),
            counter: format!("問題 {number} / {total}"),
            form: question.form(),
            is_last: number == total,
        })
    }
}

pub(crate) fn prompt_text(question: &QuestionRecord) -> String {
    format!("{} の{}は？", question.headword(), question.form().label())
}

//
// ─── FINAL REPORT ──────────────────────────────────────────────────────────────
//

/// Five-tier outcome bucket used to pick the result visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OutcomeTier {
    Perfect,
    Great,
    Good,
    Fair,
    TryAgain,
}

impl OutcomeTier {
    /// Bucket an accuracy percentage: 100, then >=80, >=50, >=20, below.
    #[must_use]
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            100.. => OutcomeTier::Perfect,
            80.. => OutcomeTier::Great,
            50.. => OutcomeTier::Good,
            20.. => OutcomeTier::Fair,
            _ => OutcomeTier::TryAgain,
        }
    }

    /// Caption shown with the tier's visual indicator.
    #[must_use]
    pub fn caption(&self) -> &'static str {
        match self {
            OutcomeTier::Perfect => "Perfect!",
            OutcomeTier::Great => "Great!",
            OutcomeTier::Good => "Good",
            OutcomeTier::Fair => "Not Bad",
            OutcomeTier::TryAgain => "Try Again",
        }
    }
}

/// One row of the final per-question breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub prompt: String,
    pub given: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// Final report for a completed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizReport {
    /// Completion date, formatted as `YYYY年MM月DD日`.
    pub date_stamp: String,
    pub score_line: String,
    pub score: Score,
    pub tier: OutcomeTier,
    pub rows: Vec<ReportRow>,
    /// True when a review pass over missed questions should be offered.
    pub offer_review: bool,
}

impl QuizReport {
    /// Build the report for a completed session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Incomplete` while questions remain.
    pub fn from_session(
        session: &QuizSession,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        let score = session.score()?;

        let rows = session
            .questions()
            .iter()
            .zip(session.answers())
            .map(|(question, answer)| ReportRow {
                prompt: prompt_text(question),
                given: answer.given.clone(),
                correct_answer: question.answer().to_string(),
                is_correct: answer.is_correct,
            })
            .collect();

        Ok(Self {
            date_stamp: date_stamp(completed_at),
            score_line: format!(
                "正答率: {}% ({} / {})",
                score.accuracy_percent, score.correct, score.total
            ),
            score,
            tier: OutcomeTier::from_percent(score.accuracy_percent),
            rows,
            offer_review: !session.review_set().is_empty(),
        })
    }
}

/// Format a timestamp as the report date stamp (`YYYY年MM月DD日`).
#[must_use]
pub fn date_stamp(at: DateTime<Utc>) -> String {
    format!("{:04}年{:02}月{:02}日", at.year(), at.month(), at.day())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
