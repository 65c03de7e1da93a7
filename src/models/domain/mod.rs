pub mod flashcard;
pub mod generated;
pub mod heuristics;
pub mod quiz_attempt;
pub mod quiz_item;
pub mod reviewer;
pub mod source_format;

pub use flashcard::Flashcard;
pub use generated::{GeneratedFlashcard, GeneratedQuizQuestion};
pub use quiz_attempt::QuizAttempt;
pub use quiz_item::QuizItem;
pub use reviewer::{GeneratedArtifacts, Reviewer};
pub use source_format::SourceFormat;
