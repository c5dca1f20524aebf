//! Quiz engine - linear multiple-choice quizzes with scored rewards

pub mod definitions;
pub mod question;
pub mod session;

pub use question::{QuizKind, QuizQuestion};
pub use session::{Advance, AnswerOutcome, QuizResult, QuizSession};
