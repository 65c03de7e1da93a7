use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::errors::{AppError, AppResult, CompletionError};
use crate::models::domain::heuristics::{
    Difficulty, GenerateOptions, GenerationMode, HeuristicConfig, SummaryConfig,
};
use crate::models::domain::{
    Flashcard, GeneratedArtifacts, GeneratedFlashcard, GeneratedQuizQuestion, QuizItem,
};
use crate::services::completion_client::{CompletionClient, CompletionRequest};
use crate::services::flashcard_generator::generate_flashcards;
use crate::services::id_source::IdSource;
use crate::services::prompt_builder::{flashcard_request, quiz_request, summary_request};
use crate::services::quiz_generator::generate_quiz_items;
use crate::services::response_normalizer::{normalize, NormalizedBatch};
use crate::services::segmenter::segment;
use crate::services::summarizer::{summarize_sentences, EMPTY_TEXT_SENTINEL};

pub const MIN_REQUESTED_ITEMS: usize = 1;
pub const MAX_REQUESTED_ITEMS: usize = 50;
pub const DEFAULT_AI_FLASHCARDS: usize = 10;
pub const DEFAULT_AI_QUESTIONS: usize = 5;

/// Sequences the pipeline for one request. Holds no per-request state; the
/// identifier source is the only shared mutable piece and is injected.
pub struct GenerationService {
    completion: Arc<dyn CompletionClient>,
    ids: Arc<dyn IdSource>,
    heuristics: HeuristicConfig,
    completion_timeout: Duration,
}

impl GenerationService {
    pub fn new(
        completion: Arc<dyn CompletionClient>,
        ids: Arc<dyn IdSource>,
        heuristics: HeuristicConfig,
        completion_timeout: Duration,
    ) -> Self {
        Self {
            completion,
            ids,
            heuristics,
            completion_timeout,
        }
    }

    pub fn heuristics(&self) -> &HeuristicConfig {
        &self.heuristics
    }

    pub async fn generate_artifacts(
        &self,
        text: &str,
        mode: GenerationMode,
        options: &GenerateOptions,
    ) -> AppResult<GeneratedArtifacts> {
        match mode {
            GenerationMode::Heuristic => self.generate_heuristic(text, options),
            GenerationMode::Ai => self.generate_ai(text, options).await,
        }
    }

    /// Segments once and feeds the same sentences to every generator.
    pub fn generate_heuristic(
        &self,
        text: &str,
        options: &GenerateOptions,
    ) -> AppResult<GeneratedArtifacts> {
        validate_text(text)?;
        if let Some(max) = options.max_items {
            validate_count(max, "items")?;
        }

        let config = self.heuristics.clone().with_options(options);
        let sentences = segment(text).collect_all();
        let mut rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let summary = summarize_sentences(text, &sentences, &config.summary);
        let flashcards = generate_flashcards(&sentences, &config.flashcards, self.ids.as_ref());
        let quiz_items =
            generate_quiz_items(&sentences, &config.quiz, self.ids.as_ref(), &mut rng);

        log::info!(
            "Heuristic generation produced {} flashcards and {} quiz items from {} sentences",
            flashcards.len(),
            quiz_items.len(),
            sentences.len()
        );

        Ok(GeneratedArtifacts {
            summary,
            flashcards,
            quiz_items,
        })
    }

    async fn generate_ai(
        &self,
        text: &str,
        options: &GenerateOptions,
    ) -> AppResult<GeneratedArtifacts> {
        let flashcard_count = options.max_items.unwrap_or(DEFAULT_AI_FLASHCARDS);
        let question_count = options.max_items.unwrap_or(DEFAULT_AI_QUESTIONS);
        let difficulty = options.difficulty.unwrap_or_default();

        // Input errors must surface before any completion call goes out
        validate_text(text)?;
        validate_count(flashcard_count, "flashcards")?;
        validate_count(question_count, "questions")?;

        let config = self.heuristics.clone().with_options(options);
        let (summary, flashcards, questions) = tokio::join!(
            self.summarize_with_model(text, &config.summary),
            self.generate_ai_flashcards(text, flashcard_count),
            self.generate_ai_quiz(text, question_count, difficulty),
        );

        Ok(GeneratedArtifacts {
            summary,
            flashcards: self.number_flashcards(flashcards?.records),
            quiz_items: self.number_quiz_items(questions?.records),
        })
    }

    pub async fn generate_ai_flashcards(
        &self,
        text: &str,
        count: usize,
    ) -> AppResult<NormalizedBatch<GeneratedFlashcard>> {
        validate_text(text)?;
        validate_count(count, "flashcards")?;
        log::info!("Generating {} flashcards", count);

        let reply = self.call(flashcard_request(text, count)).await;
        Ok(normalize(reply, count))
    }

    pub async fn generate_ai_quiz(
        &self,
        text: &str,
        count: usize,
        difficulty: Difficulty,
    ) -> AppResult<NormalizedBatch<GeneratedQuizQuestion>> {
        validate_text(text)?;
        validate_count(count, "questions")?;
        log::info!(
            "Generating quiz with {} questions, difficulty: {}",
            count,
            difficulty
        );

        let reply = self.call(quiz_request(text, count, difficulty)).await;
        Ok(normalize(reply, count))
    }

    /// Model-written summary. Falls back to the key-points summary of the
    /// same text when the completion call fails.
    pub async fn generate_ai_summary(&self, text: &str) -> String {
        self.summarize_with_model(text, &self.heuristics.summary).await
    }

    async fn summarize_with_model(&self, text: &str, fallback: &SummaryConfig) -> String {
        if text.trim().is_empty() {
            return EMPTY_TEXT_SENTINEL.to_string();
        }

        match self.call(summary_request(text)).await {
            Ok(summary) => summary.trim().to_string(),
            Err(err) => {
                log::warn!("AI summary unavailable, using key points instead: {}", err);
                let sentences = segment(text).collect_all();
                summarize_sentences(text, &sentences, fallback)
            }
        }
    }

    pub fn number_flashcards(&self, records: Vec<GeneratedFlashcard>) -> Vec<Flashcard> {
        records
            .into_iter()
            .map(|record| record.into_flashcard(self.ids.next_id()))
            .collect()
    }

    pub fn number_quiz_items(&self, records: Vec<GeneratedQuizQuestion>) -> Vec<QuizItem> {
        records
            .into_iter()
            .map(|record| record.into_quiz_item(self.ids.next_id()))
            .collect()
    }

    async fn call(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        match tokio::time::timeout(self.completion_timeout, self.completion.complete(request)).await
        {
            Ok(result) => result,
            Err(_) => {
                log::error!(
                    "Completion call exceeded {}s timeout",
                    self.completion_timeout.as_secs()
                );
                Err(CompletionError::Timeout(self.completion_timeout.as_secs()))
            }
        }
    }
}

fn validate_text(text: &str) -> AppResult<()> {
    if text.trim().is_empty() {
        return Err(AppError::ValidationError("Text cannot be empty".to_string()));
    }
    Ok(())
}

fn validate_count(count: usize, what: &str) -> AppResult<()> {
    if !(MIN_REQUESTED_ITEMS..=MAX_REQUESTED_ITEMS).contains(&count) {
        return Err(AppError::ValidationError(format!(
            "Number of {what} must be between {MIN_REQUESTED_ITEMS} and {MAX_REQUESTED_ITEMS}"
        )));
    }
    Ok(())
}
