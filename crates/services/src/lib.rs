#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;
pub mod source;

pub use drill_core::Clock;

pub use error::{QuizFlowError, SourceError};
pub use sessions::{
    AnswerStep, DEFAULT_QUIZ_SIZE, OutcomeTier, QuestionView, QuizLoopService, QuizReport,
    ReportRow,
};
pub use source::{load_from_path, load_from_url, load_questions};
