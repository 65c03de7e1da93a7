use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Flashcard, QuizAttempt, QuizItem, Reviewer, SourceFormat},
    models::dto::request::{CreateReviewerRequest, SubmitQuizAttemptRequest},
    models::dto::response::{QuizAttemptResponse, ReviewerDto},
    repositories::ReviewerRepository,
    services::{
        generation_service::GenerationService, id_source::IdSource,
        quiz_attempt_service::QuizAttemptService,
    },
};

pub struct ReviewerService {
    repository: Arc<dyn ReviewerRepository>,
    generation: Arc<GenerationService>,
    ids: Arc<dyn IdSource>,
}

impl ReviewerService {
    pub fn new(
        repository: Arc<dyn ReviewerRepository>,
        generation: Arc<GenerationService>,
        ids: Arc<dyn IdSource>,
    ) -> Self {
        Self {
            repository,
            generation,
            ids,
        }
    }

    pub async fn create_reviewer(&self, request: CreateReviewerRequest) -> AppResult<ReviewerDto> {
        request.validate()?;
        let format = SourceFormat::from_file_name(&request.file_name)?;

        log::info!(
            "Creating reviewer from {} ({:?}, {} chars, {:?} mode)",
            request.file_name,
            format,
            request.text.len(),
            request.mode
        );

        let artifacts = self
            .generation
            .generate_artifacts(&request.text, request.mode, &request.options())
            .await?;

        let reviewer = Reviewer::new(
            self.ids.next_id(),
            &request.file_name,
            &request.text,
            artifacts,
        );
        let reviewer = self.repository.create(reviewer).await?;
        Ok(reviewer.into())
    }

    pub async fn get_reviewer(&self, id: u64) -> AppResult<Reviewer> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reviewer with id '{}' not found", id)))
    }

    pub async fn list_reviewers(&self) -> AppResult<Vec<ReviewerDto>> {
        let reviewers = self.repository.list().await?;
        Ok(reviewers.into_iter().map(ReviewerDto::from).collect())
    }

    pub async fn get_attempts(&self, id: u64) -> AppResult<Vec<QuizAttempt>> {
        self.get_reviewer(id).await?;
        self.repository.attempts_for(id).await
    }

    pub async fn get_summary(&self, id: u64) -> AppResult<String> {
        Ok(self.get_reviewer(id).await?.summarized_text)
    }

    pub async fn get_flashcards(&self, id: u64) -> AppResult<Vec<Flashcard>> {
        Ok(self.get_reviewer(id).await?.flashcards)
    }

    pub async fn get_quiz(&self, id: u64) -> AppResult<Vec<QuizItem>> {
        Ok(self.get_reviewer(id).await?.quiz_items)
    }

    pub async fn submit_attempt(
        &self,
        id: u64,
        request: SubmitQuizAttemptRequest,
    ) -> AppResult<QuizAttemptResponse> {
        request.validate()?;
        let reviewer = self.get_reviewer(id).await?;

        let attempt = QuizAttemptService::grade_attempt(&reviewer, &request.answers)?;
        log::info!(
            "Quiz attempt for reviewer {}: {}/{}",
            id,
            attempt.score,
            attempt.total
        );

        let attempt = self.repository.save_attempt(attempt).await?;
        Ok(attempt.into())
    }
}
