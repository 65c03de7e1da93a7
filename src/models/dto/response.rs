use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{
    Flashcard, GeneratedFlashcard, GeneratedQuizQuestion, QuizAttempt, QuizItem, Reviewer,
};
use crate::services::response_normalizer::NormalizedBatch;

#[derive(Debug, Clone, Serialize)]
pub struct ReviewerDto {
    pub id: u64,
    pub file_name: String,
    pub summarized_text: String,
    pub flashcards: Vec<Flashcard>,
    pub quiz_items: Vec<QuizItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Reviewer> for ReviewerDto {
    fn from(reviewer: Reviewer) -> Self {
        ReviewerDto {
            id: reviewer.id,
            file_name: reviewer.file_name,
            summarized_text: reviewer.summarized_text,
            flashcards: reviewer.flashcards,
            quiz_items: reviewer.quiz_items,
            created_at: reviewer.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlashcardBatchResponse {
    pub flashcards: Vec<GeneratedFlashcard>,
    pub fallback: bool,
}

impl From<NormalizedBatch<GeneratedFlashcard>> for FlashcardBatchResponse {
    fn from(batch: NormalizedBatch<GeneratedFlashcard>) -> Self {
        FlashcardBatchResponse {
            fallback: batch.is_fallback(),
            flashcards: batch.records,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizBatchResponse {
    pub questions: Vec<GeneratedQuizQuestion>,
    pub fallback: bool,
}

impl From<NormalizedBatch<GeneratedQuizQuestion>> for QuizBatchResponse {
    fn from(batch: NormalizedBatch<GeneratedQuizQuestion>) -> Self {
        QuizBatchResponse {
            fallback: batch.is_fallback(),
            questions: batch.records,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizAttemptResponse {
    pub reviewer_id: u64,
    pub score: usize,
    pub total: usize,
}

impl From<QuizAttempt> for QuizAttemptResponse {
    fn from(attempt: QuizAttempt) -> Self {
        QuizAttemptResponse {
            reviewer_id: attempt.reviewer_id,
            score: attempt.score,
            total: attempt.total,
        }
    }
}
