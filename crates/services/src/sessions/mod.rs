mod draw;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::QuizFlowError;
pub use view::{OutcomeTier, QuestionView, QuizReport, ReportRow, date_stamp};
pub use workflow::{AnswerStep, DEFAULT_QUIZ_SIZE, QuizLoopService};
