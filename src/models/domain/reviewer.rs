use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::{Flashcard, QuizItem};

/// One uploaded document together with everything generated from it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Reviewer {
    pub id: u64,
    pub file_name: String,
    pub original_text: String,
    pub summarized_text: String,
    pub flashcards: Vec<Flashcard>,
    pub quiz_items: Vec<QuizItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Reviewer {
    pub fn new(id: u64, file_name: &str, original_text: &str, artifacts: GeneratedArtifacts) -> Self {
        Reviewer {
            id,
            file_name: file_name.to_string(),
            original_text: original_text.to_string(),
            summarized_text: artifacts.summary,
            flashcards: artifacts.flashcards,
            quiz_items: artifacts.quiz_items,
            created_at: Some(Utc::now()),
        }
    }
}

/// Output of one pipeline run.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedArtifacts {
    pub summary: String,
    pub flashcards: Vec<Flashcard>,
    pub quiz_items: Vec<QuizItem>,
}
