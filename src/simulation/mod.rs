pub mod atom;
pub mod quiz;

pub use atom::Atom;
pub use quiz::{AnswerOutcome, Question, QuizState};
