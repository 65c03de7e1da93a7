use std::collections::HashMap;

use serde::Deserialize;
use validator::Validate;

use crate::models::domain::heuristics::{Difficulty, GenerateOptions, GenerationMode};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReviewerRequest {
    #[validate(length(min = 1, max = 255))]
    pub file_name: String,

    #[validate(length(min = 1, message = "Text cannot be empty"))]
    pub text: String,

    #[serde(default)]
    pub mode: GenerationMode,

    pub min_sentence_length: Option<usize>,

    #[validate(range(min = 1, max = 50))]
    pub max_items: Option<usize>,

    pub difficulty: Option<Difficulty>,
}

impl CreateReviewerRequest {
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            min_sentence_length: self.min_sentence_length,
            max_items: self.max_items,
            difficulty: self.difficulty,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SummarizeRequest {
    #[validate(length(min = 1, message = "Text cannot be empty"))]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateFlashcardsRequest {
    #[validate(length(min = 1, message = "Text cannot be empty"))]
    pub text: String,

    #[serde(default = "default_flashcard_count")]
    #[validate(range(min = 1, max = 50, message = "Number of flashcards must be between 1 and 50"))]
    pub count: usize,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(length(min = 1, message = "Text cannot be empty"))]
    pub text: String,

    #[serde(default = "default_question_count")]
    #[validate(range(min = 1, max = 50, message = "Number of questions must be between 1 and 50"))]
    pub count: usize,

    #[serde(default)]
    pub difficulty: Difficulty,
}

/// Answers keyed by quiz item id. JSON object keys arrive as strings.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitQuizAttemptRequest {
    #[validate(length(min = 1, message = "At least one answer is required"))]
    pub answers: HashMap<u64, String>,
}

fn default_flashcard_count() -> usize {
    10
}

fn default_question_count() -> usize {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_reviewer_defaults_to_heuristic_mode() {
        let request: CreateReviewerRequest =
            serde_json::from_str(r#"{"file_name":"notes.txt","text":"Hello world."}"#).unwrap();

        assert_eq!(request.mode, GenerationMode::Heuristic);
        assert!(request.validate().is_ok());
        assert_eq!(request.options(), GenerateOptions::default());
    }

    #[test]
    fn create_reviewer_rejects_empty_text_and_out_of_range_items() {
        let request: CreateReviewerRequest = serde_json::from_str(
            r#"{"file_name":"notes.txt","text":"","mode":"ai","max_items":80}"#,
        )
        .unwrap();

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("text"));
        assert!(fields.contains_key("max_items"));
    }

    #[test]
    fn flashcard_count_is_bounded() {
        let ok: GenerateFlashcardsRequest = serde_json::from_str(r#"{"text":"t"}"#).unwrap();
        assert_eq!(ok.count, 10);
        assert!(ok.validate().is_ok());

        let bad: GenerateFlashcardsRequest =
            serde_json::from_str(r#"{"text":"t","count":51}"#).unwrap();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn quiz_request_parses_lowercase_difficulty() {
        let request: GenerateQuizRequest =
            serde_json::from_str(r#"{"text":"t","count":3,"difficulty":"hard"}"#).unwrap();
        assert_eq!(request.difficulty, Difficulty::Hard);
    }

    #[test]
    fn attempt_answers_accept_string_keys() {
        let request: SubmitQuizAttemptRequest =
            serde_json::from_str(r#"{"answers":{"12":"energy"}}"#).unwrap();
        assert_eq!(request.answers.get(&12).map(String::as_str), Some("energy"));
    }
}
