use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{GenerateFlashcardsRequest, GenerateQuizRequest, SummarizeRequest},
    models::dto::response::{FlashcardBatchResponse, QuizBatchResponse, SummaryResponse},
};

#[post("/api/summary/generate")]
pub async fn generate_summary(
    state: web::Data<AppState>,
    request: web::Json<SummarizeRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let summary = state
        .generation_service
        .generate_ai_summary(&request.text)
        .await;
    Ok(HttpResponse::Ok().json(SummaryResponse { summary }))
}

#[post("/api/flashcards/generate")]
pub async fn generate_flashcards(
    state: web::Data<AppState>,
    request: web::Json<GenerateFlashcardsRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let batch = state
        .generation_service
        .generate_ai_flashcards(&request.text, request.count)
        .await?;
    Ok(HttpResponse::Ok().json(FlashcardBatchResponse::from(batch)))
}

#[post("/api/quiz/generate")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let batch = state
        .generation_service
        .generate_ai_quiz(&request.text, request.count, request.difficulty)
        .await?;
    Ok(HttpResponse::Ok().json(QuizBatchResponse::from(batch)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::errors::CompletionError;
    use crate::handlers::configure;
    use crate::repositories::InMemoryReviewerRepository;
    use crate::services::completion_client::MockCompletionClient;
    use crate::test_utils::fixtures::{FLASHCARD_REPLY, QUIZ_REPLY};
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn state_with(mock: MockCompletionClient) -> web::Data<AppState> {
        web::Data::new(AppState::with_parts(
            Config::test_config(),
            Arc::new(mock),
            Arc::new(InMemoryReviewerRepository::new()),
        ))
    }

    #[actix_web::test]
    async fn test_generate_flashcards_returns_model_cards() {
        let mut mock = MockCompletionClient::new();
        mock.expect_complete()
            .returning(|_| Ok(FLASHCARD_REPLY.to_string()));
        let app = test::init_service(App::new().app_data(state_with(mock)).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/flashcards/generate")
            .set_json(json!({ "text": "Ownership and borrowing.", "count": 2 }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["fallback"], false);
        assert_eq!(body["flashcards"][0]["front"], "What is ownership?");
    }

    #[actix_web::test]
    async fn test_generate_quiz_falls_back_on_upstream_failure() {
        let mut mock = MockCompletionClient::new();
        mock.expect_complete()
            .returning(|_| Err(CompletionError::Transport("connection refused".to_string())));
        let app = test::init_service(App::new().app_data(state_with(mock)).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/quiz/generate")
            .set_json(json!({ "text": "Anything.", "count": 5, "difficulty": "easy" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["fallback"], true);
        assert_eq!(body["questions"].as_array().map(Vec::len), Some(3));
        assert_eq!(body["questions"][0]["correctAnswer"], "A");
    }

    #[actix_web::test]
    async fn test_generate_quiz_passes_model_questions_through() {
        let mut mock = MockCompletionClient::new();
        mock.expect_complete()
            .returning(|_| Ok(QUIZ_REPLY.to_string()));
        let app = test::init_service(App::new().app_data(state_with(mock)).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/quiz/generate")
            .set_json(json!({ "text": "Ownership and borrowing." }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["fallback"], false);
        assert_eq!(body["questions"][0]["options"].as_array().map(Vec::len), Some(4));
    }

    #[actix_web::test]
    async fn test_out_of_range_count_is_bad_request() {
        let mut mock = MockCompletionClient::new();
        mock.expect_complete().never();
        let app = test::init_service(App::new().app_data(state_with(mock)).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/flashcards/generate")
            .set_json(json!({ "text": "Some text", "count": 0 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_generate_summary_uses_model_reply() {
        let mut mock = MockCompletionClient::new();
        mock.expect_complete()
            .returning(|_| Ok("A short overview.".to_string()));
        let app = test::init_service(App::new().app_data(state_with(mock)).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/summary/generate")
            .set_json(json!({ "text": "Long lecture notes." }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["summary"], "A short overview.");
    }
}
