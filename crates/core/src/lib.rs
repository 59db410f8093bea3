#![forbid(unsafe_code)]

pub mod model;
pub mod table;
pub mod time;

pub use time::Clock;

pub use model::{
    QuestionRecord, QuizSession, Score, SessionError, SessionProgress, SubmittedAnswer, VerbForm,
    build_questions,
};
pub use table::{VerbEntry, parse_row, parse_table};
