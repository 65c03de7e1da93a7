use std::{collections::HashMap, sync::Arc, time::Duration};

use async_trait::async_trait;
use chrono::Utc;

use quizard_server::{
    errors::{AppError, CompletionError},
    models::domain::{
        heuristics::{GenerationMode, HeuristicConfig},
        quiz_attempt::QuizAttemptAnswer,
        GeneratedArtifacts, QuizAttempt, QuizItem, Reviewer,
    },
    models::dto::request::{CreateReviewerRequest, SubmitQuizAttemptRequest},
    repositories::{InMemoryReviewerRepository, ReviewerRepository},
    services::{
        completion_client::{CompletionClient, CompletionRequest},
        generation_service::GenerationService,
        id_source::{AtomicIdSource, IdSource},
        reviewer_service::ReviewerService,
    },
};

struct OfflineClient;

#[async_trait]
impl CompletionClient for OfflineClient {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, CompletionError> {
        Err(CompletionError::NotConfigured("offline".to_string()))
    }
}

fn make_reviewer(id: u64, quiz_items: Vec<QuizItem>) -> Reviewer {
    Reviewer::new(
        id,
        &format!("notes-{id}.txt"),
        "Original text.",
        GeneratedArtifacts {
            summary: "KEY POINTS:\n\n1. Original text.".to_string(),
            flashcards: vec![],
            quiz_items,
        },
    )
}

fn make_attempt(reviewer_id: u64, score: usize) -> QuizAttempt {
    QuizAttempt {
        reviewer_id,
        score,
        total: 2,
        answers: vec![QuizAttemptAnswer {
            quiz_item_id: 1,
            answer: "a".to_string(),
            is_correct: score > 0,
        }],
        submitted_at: Utc::now(),
    }
}

fn reviewer_service(repository: Arc<dyn ReviewerRepository>) -> ReviewerService {
    let ids: Arc<dyn IdSource> = Arc::new(AtomicIdSource::starting_at(100));
    let generation = Arc::new(GenerationService::new(
        Arc::new(OfflineClient),
        Arc::clone(&ids),
        HeuristicConfig::classic().with_shuffle_seed(Some(5)),
        Duration::from_secs(1),
    ));
    ReviewerService::new(repository, generation, ids)
}

#[tokio::test]
async fn reviewer_repository_crud_and_error_paths() {
    let repo: Arc<dyn ReviewerRepository> = Arc::new(InMemoryReviewerRepository::new());

    repo.create(make_reviewer(2, vec![])).await.unwrap();
    repo.create(make_reviewer(1, vec![])).await.unwrap();
    assert!(repo.create(make_reviewer(1, vec![])).await.is_err());

    let found = repo.find_by_id(2).await.unwrap().expect("reviewer 2 exists");
    assert_eq!(found.file_name, "notes-2.txt");
    assert!(repo.find_by_id(3).await.unwrap().is_none());

    let ids: Vec<u64> = repo.list().await.unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn quiz_attempts_accumulate_per_reviewer() {
    let repo: Arc<dyn ReviewerRepository> = Arc::new(InMemoryReviewerRepository::new());
    repo.create(make_reviewer(1, vec![])).await.unwrap();
    repo.create(make_reviewer(2, vec![])).await.unwrap();

    repo.save_attempt(make_attempt(1, 0)).await.unwrap();
    repo.save_attempt(make_attempt(1, 2)).await.unwrap();
    repo.save_attempt(make_attempt(2, 1)).await.unwrap();

    let scores: Vec<usize> = repo
        .attempts_for(1)
        .await
        .unwrap()
        .iter()
        .map(|a| a.score)
        .collect();
    assert_eq!(scores, vec![0, 2]);
    assert!(repo.attempts_for(7).await.unwrap().is_empty());

    let err = repo.save_attempt(make_attempt(7, 0)).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn reviewer_service_stores_generated_artifacts_and_grades_attempts() {
    let repo = Arc::new(InMemoryReviewerRepository::new());
    let service = reviewer_service(repo.clone());

    let created = service
        .create_reviewer(CreateReviewerRequest {
            file_name: "cells.md".to_string(),
            text: "Cells are the basic structural unit of every living organism. \
                   The nucleus stores genetic material in most eukaryotic cells."
                .to_string(),
            mode: GenerationMode::Heuristic,
            min_sentence_length: None,
            max_items: None,
            difficulty: None,
        })
        .await
        .unwrap();

    let stored = repo.find_by_id(created.id).await.unwrap().expect("stored");
    assert_eq!(stored.quiz_items.len(), 2);
    assert!(stored.original_text.starts_with("Cells are"));

    let first = &stored.quiz_items[0];
    let wrong = first
        .choices
        .iter()
        .find(|c| **c != first.correct_answer)
        .cloned()
        .unwrap();
    let answers = HashMap::from([
        (first.id, wrong),
        (stored.quiz_items[1].id, stored.quiz_items[1].correct_answer.clone()),
    ]);

    let result = service
        .submit_attempt(created.id, SubmitQuizAttemptRequest { answers })
        .await
        .unwrap();
    assert_eq!((result.score, result.total), (1, 2));
    assert_eq!(repo.attempts_for(created.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn ai_mode_without_a_key_still_creates_a_reviewer() {
    let repo = Arc::new(InMemoryReviewerRepository::new());
    let service = reviewer_service(repo);

    let created = service
        .create_reviewer(CreateReviewerRequest {
            file_name: "cells.txt".to_string(),
            text: "Cells are the basic structural unit of every living organism.".to_string(),
            mode: GenerationMode::Ai,
            min_sentence_length: None,
            max_items: Some(2),
            difficulty: None,
        })
        .await
        .unwrap();

    assert!(created.summarized_text.starts_with("KEY POINTS:"));
    assert_eq!(created.flashcards.len(), 2);
    assert_eq!(created.flashcards[0].term, "Error Card 1");
    assert_eq!(created.quiz_items.len(), 2);
    assert_eq!(created.quiz_items[0].correct_answer, "A) Option 1");
}
