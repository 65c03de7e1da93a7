#[cfg(test)]
pub mod fixtures {
    /// Lecture-style notes with enough long sentences for every generator.
    pub fn sample_document() -> String {
        [
            "Photosynthesis converts light energy into chemical energy inside plants.",
            "Chlorophyll absorbs mostly blue and red wavelengths of light.",
            "Oxygen is released as a byproduct of splitting water molecules.",
            "Glucose produced here fuels cellular respiration later on.",
            "Stomata regulate gas exchange between the leaf and the air.",
            "Ok.",
        ]
        .join(" ")
    }

    /// A well-formed flashcard reply wrapped the way models often wrap it.
    pub const FLASHCARD_REPLY: &str = r#"```json
[
  {"front": "What is ownership?", "back": "Each value has a single owner."},
  {"front": "What is borrowing?", "back": "Referencing a value without taking ownership."}
]
```"#;

    pub const QUIZ_REPLY: &str = r#"Here is your quiz:
[
  {
    "question": "Which mechanism lends access without moving a value?",
    "options": ["A) Ownership", "B) Borrowing", "C) Shadowing", "D) Cloning"],
    "correctAnswer": "B",
    "explanation": "Borrowing hands out references."
  }
]"#;
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::response_normalizer::parse_records;
    use crate::models::domain::{GeneratedFlashcard, GeneratedQuizQuestion};

    #[test]
    fn test_fixture_replies_parse() {
        let cards: Vec<GeneratedFlashcard> = parse_records(FLASHCARD_REPLY).unwrap();
        let questions: Vec<GeneratedQuizQuestion> = parse_records(QUIZ_REPLY).unwrap();

        assert_eq!(cards.len(), 2);
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn test_sample_document_has_short_trailing_sentence() {
        assert!(sample_document().ends_with("Ok."));
    }
}
