use rand::Rng;

use drill_core::Clock;
use drill_core::model::{QuestionRecord, QuizSession, SessionError};

use super::draw::draw_questions;
use super::view::{QuestionView, QuizReport};
use crate::error::QuizFlowError;

/// Number of questions drawn into a fresh quiz by default.
pub const DEFAULT_QUIZ_SIZE: usize = 25;

/// Outcome of answering one question.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerStep {
    /// More questions remain; show this one next.
    Next(QuestionView),
    /// The session just finished; show the final report.
    Finished(QuizReport),
}

/// Orchestrates quiz start, answering and the review pass.
///
/// The session value itself is owned by the caller and passed back in by
/// reference; this service only decides transitions and builds view data.
#[derive(Debug, Clone)]
pub struct QuizLoopService {
    clock: Clock,
    sample_size: usize,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            sample_size: DEFAULT_QUIZ_SIZE,
        }
    }

    #[must_use]
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Start a fresh quiz over a random subset of the pool.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` (wrapped) when the pool is empty.
    pub fn start_quiz(&self, pool: &[QuestionRecord]) -> Result<QuizSession, QuizFlowError> {
        self.start_quiz_with_rng(pool, &mut rand::rng())
    }

    /// Start a fresh quiz using the provided random source.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` (wrapped) when the pool is empty.
    pub fn start_quiz_with_rng<R: Rng + ?Sized>(
        &self,
        pool: &[QuestionRecord],
        rng: &mut R,
    ) -> Result<QuizSession, QuizFlowError> {
        let questions = draw_questions(pool, self.sample_size, rng);
        let session = QuizSession::new(questions)?;
        tracing::debug!(total = session.total_questions(), "quiz session started");
        Ok(session)
    }

    /// Start a review pass over the questions missed in `session`.
    ///
    /// The finished session is left untouched; a new session over its missed
    /// questions is returned.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::NothingToReview` when nothing was missed.
    pub fn start_review(&self, session: &QuizSession) -> Result<QuizSession, QuizFlowError> {
        let missed = session.review_set();
        if missed.is_empty() {
            return Err(QuizFlowError::NothingToReview);
        }

        let review = QuizSession::new(missed.to_vec())?;
        tracing::debug!(total = review.total_questions(), "review session started");
        Ok(review)
    }

    /// Grade one typed answer and advance the session.
    ///
    /// While questions remain this yields the next question view; on the
    /// final answer it yields the completed report instead.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` (wrapped) when the session has
    /// already finished.
    pub fn answer_current(
        &self,
        session: &mut QuizSession,
        raw: &str,
    ) -> Result<AnswerStep, QuizFlowError> {
        session.submit(raw)?;

        if session.is_complete() {
            let report = QuizReport::from_session(session, self.clock.now())?;
            tracing::debug!(
                correct = report.score.correct,
                total = report.score.total,
                "quiz session completed"
            );
            return Ok(AnswerStep::Finished(report));
        }

        let Some(view) = QuestionView::for_current(session) else {
            return Err(SessionError::Completed.into());
        };
        Ok(AnswerStep::Next(view))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
