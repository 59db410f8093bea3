mod question;
mod session;

pub use question::{QuestionRecord, VerbForm, build_questions};
pub use session::{QuizSession, Score, SessionError, SessionProgress, SubmittedAnswer};
