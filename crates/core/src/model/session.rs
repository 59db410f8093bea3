use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::question::QuestionRecord;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,

    #[error("session already completed")]
    Completed,

    #[error("session is not complete yet")]
    Incomplete,
}

/// One graded answer, parallel to the session's question list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedAnswer {
    pub given: String,
    pub is_correct: bool,
}

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

/// Final result of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
    /// `correct / total * 100`, rounded half-up.
    pub accuracy_percent: u32,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory drill session over a fixed question list.
///
/// Steps through the questions sequentially, grading each typed answer and
/// collecting missed questions for a later review pass. Constructing a
/// session is the start transition; restarting means replacing the value.
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<QuestionRecord>,
    position: usize,
    answers: Vec<SubmittedAnswer>,
    missed: Vec<QuestionRecord>,
}

impl QuizSession {
    /// Create a session over the given questions.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided.
    pub fn new(questions: Vec<QuestionRecord>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            questions,
            position: 0,
            answers: Vec::new(),
            missed: Vec::new(),
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &[SubmittedAnswer] {
        &self.answers
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions that have already been answered.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Number of remaining questions that have not been answered yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.questions.len().saturating_sub(self.position)
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            remaining: self.remaining(),
            is_complete: self.is_complete(),
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.questions.get(self.position)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.position >= self.questions.len()
    }

    /// Grade one typed answer against the current question and advance.
    ///
    /// The input is trimmed before it is stored; grading compares it to the
    /// correct answer case-insensitively. A mismatch records the question in
    /// the review set.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished.
    pub fn submit(&mut self, raw: &str) -> Result<&SubmittedAnswer, SessionError> {
        let Some(question) = self.questions.get(self.position) else {
            return Err(SessionError::Completed);
        };

        let given = raw.trim().to_string();
        let is_correct = question.matches(&given);
        if !is_correct {
            self.missed.push(question.clone());
        }

        self.answers.push(SubmittedAnswer { given, is_correct });
        self.position += 1;

        self.answers.last().ok_or(SessionError::Completed)
    }

    /// Final score of the session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Incomplete` while questions remain.
    pub fn score(&self) -> Result<Score, SessionError> {
        if !self.is_complete() {
            return Err(SessionError::Incomplete);
        }

        let total = self.questions.len();
        let correct = self.answers.iter().filter(|a| a.is_correct).count();
        let accuracy_percent = ((correct as f64 / total as f64) * 100.0).round() as u32;

        Ok(Score {
            correct,
            total,
            accuracy_percent,
        })
    }

    /// Missed questions in the order they were encountered.
    ///
    /// Duplicates in the question list stay duplicated here.
    #[must_use]
    pub fn review_set(&self) -> &[QuestionRecord] {
        &self.missed
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::question::VerbForm;

    fn build_question(headword: &str, answer: &str) -> QuestionRecord {
        QuestionRecord::new(headword, VerbForm::Past, answer)
    }

    fn build_session(pairs: &[(&str, &str)]) -> QuizSession {
        let questions = pairs
            .iter()
            .map(|(headword, answer)| build_question(headword, answer))
            .collect();
        QuizSession::new(questions).unwrap()
    }

    #[test]
    fn empty_session_returns_error() {
        let err = QuizSession::new(Vec::new()).unwrap_err();
        assert!(matches!(err, SessionError::Empty));
    }

    #[test]
    fn session_advances_and_completes() {
        let mut session = build_session(&[("run", "ran"), ("go", "went")]);

        assert!(!session.is_complete());
        assert_eq!(session.current_question().unwrap().headword(), "run");

        let first = session.submit("ran").unwrap();
        assert!(first.is_correct);
        assert!(!session.is_complete());
        assert_eq!(session.current_question().unwrap().headword(), "go");

        let second = session.submit("goed").unwrap();
        assert!(!second.is_correct);
        assert!(session.is_complete());
        assert!(session.current_question().is_none());
    }

    #[test]
    fn submit_after_completion_is_rejected() {
        let mut session = build_session(&[("run", "ran")]);
        session.submit("ran").unwrap();

        let err = session.submit("ran").unwrap_err();
        assert!(matches!(err, SessionError::Completed));
    }

    #[test]
    fn grading_trims_and_ignores_case() {
        let mut session = build_session(&[("run", "ran"), ("go", "went")]);

        assert!(session.submit("  RAN  ").unwrap().is_correct);
        assert!(!session.submit(" w e n t ").unwrap().is_correct);

        // The stored answer is the trimmed raw input.
        assert_eq!(session.answers()[0].given, "RAN");
        assert_eq!(session.answers()[1].given, "w e n t");
    }

    #[test]
    fn score_requires_completion() {
        let mut session = build_session(&[("run", "ran"), ("go", "went")]);
        session.submit("ran").unwrap();

        let err = session.score().unwrap_err();
        assert!(matches!(err, SessionError::Incomplete));
    }

    #[test]
    fn score_counts_and_rounds_half_up() {
        let mut session = build_session(&[("run", "ran"), ("go", "went"), ("see", "saw")]);
        session.submit("ran").unwrap();
        session.submit("nope").unwrap();
        session.submit("nope").unwrap();
        assert_eq!(session.score().unwrap().accuracy_percent, 33);

        let mut session = build_session(&[("run", "ran"), ("go", "went"), ("see", "saw")]);
        session.submit("ran").unwrap();
        session.submit("went").unwrap();
        session.submit("nope").unwrap();
        let score = session.score().unwrap();
        assert_eq!(score.correct, 2);
        assert_eq!(score.total, 3);
        assert_eq!(score.accuracy_percent, 67);
    }

    #[test]
    fn score_is_idempotent() {
        let mut session = build_session(&[("run", "ran"), ("go", "went")]);
        session.submit("ran").unwrap();
        session.submit("went").unwrap();

        assert_eq!(session.score().unwrap(), session.score().unwrap());
    }

    #[test]
    fn review_set_keeps_encounter_order_and_duplicates() {
        let mut session = build_session(&[("run", "ran"), ("go", "went"), ("run", "ran")]);
        session.submit("x").unwrap();
        session.submit("went").unwrap();
        session.submit("y").unwrap();

        let missed = session.review_set();
        assert_eq!(missed.len(), 2);
        assert_eq!(missed[0].headword(), "run");
        assert_eq!(missed[1].headword(), "run");
    }

    #[test]
    fn progress_tracks_answers() {
        let mut session = build_session(&[("run", "ran"), ("go", "went")]);
        session.submit("ran").unwrap();

        let progress = session.progress();
        assert_eq!(progress.total, 2);
        assert_eq!(progress.answered, 1);
        assert_eq!(progress.remaining, 1);
        assert!(!progress.is_complete);
    }

    #[test]
    fn round_trip_always_completes() {
        let pairs: Vec<(&str, &str)> = vec![("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")];
        let mut session = build_session(&pairs);
        for _ in 0..pairs.len() {
            session.submit("anything").unwrap();
        }

        assert!(session.is_complete());
        assert_eq!(session.score().unwrap().total, pairs.len());
    }
}
