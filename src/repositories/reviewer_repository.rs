use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{QuizAttempt, Reviewer},
};

#[async_trait]
pub trait ReviewerRepository: Send + Sync {
    async fn create(&self, reviewer: Reviewer) -> AppResult<Reviewer>;
    async fn find_by_id(&self, id: u64) -> AppResult<Option<Reviewer>>;
    async fn list(&self) -> AppResult<Vec<Reviewer>>;
    async fn save_attempt(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt>;
    async fn attempts_for(&self, reviewer_id: u64) -> AppResult<Vec<QuizAttempt>>;
}

/// Process-local store. Contents are lost on restart.
#[derive(Clone, Default)]
pub struct InMemoryReviewerRepository {
    reviewers: Arc<RwLock<HashMap<u64, Reviewer>>>,
    attempts: Arc<RwLock<HashMap<u64, Vec<QuizAttempt>>>>,
}

impl InMemoryReviewerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewerRepository for InMemoryReviewerRepository {
    async fn create(&self, reviewer: Reviewer) -> AppResult<Reviewer> {
        let mut reviewers = self.reviewers.write().await;
        if reviewers.contains_key(&reviewer.id) {
            return Err(AppError::InternalError(format!(
                "Reviewer with id '{}' already exists",
                reviewer.id
            )));
        }

        reviewers.insert(reviewer.id, reviewer.clone());
        log::info!("Stored reviewer {} ({})", reviewer.id, reviewer.file_name);
        Ok(reviewer)
    }

    async fn find_by_id(&self, id: u64) -> AppResult<Option<Reviewer>> {
        let reviewers = self.reviewers.read().await;
        Ok(reviewers.get(&id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Reviewer>> {
        let reviewers = self.reviewers.read().await;
        let mut items: Vec<_> = reviewers.values().cloned().collect();
        items.sort_by_key(|r| r.id);
        Ok(items)
    }

    async fn save_attempt(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt> {
        if !self.reviewers.read().await.contains_key(&attempt.reviewer_id) {
            return Err(AppError::NotFound(format!(
                "Reviewer with id '{}' not found",
                attempt.reviewer_id
            )));
        }

        let mut attempts = self.attempts.write().await;
        attempts
            .entry(attempt.reviewer_id)
            .or_default()
            .push(attempt.clone());
        Ok(attempt)
    }

    async fn attempts_for(&self, reviewer_id: u64) -> AppResult<Vec<QuizAttempt>> {
        let attempts = self.attempts.read().await;
        Ok(attempts.get(&reviewer_id).cloned().unwrap_or_default())
    }
}
