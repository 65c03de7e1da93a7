use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateReviewerRequest, SubmitQuizAttemptRequest},
    models::dto::response::{ReviewerDto, SummaryResponse},
};

#[post("/api/reviewers")]
pub async fn create_reviewer(
    state: web::Data<AppState>,
    request: web::Json<CreateReviewerRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .reviewer_service
        .create_reviewer(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(response))
}

#[get("/api/reviewers")]
pub async fn list_reviewers(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let reviewers = state.reviewer_service.list_reviewers().await?;
    Ok(HttpResponse::Ok().json(reviewers))
}

#[get("/api/reviewers/{id}")]
pub async fn get_reviewer(
    state: web::Data<AppState>,
    id: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let reviewer = state.reviewer_service.get_reviewer(*id).await?;
    Ok(HttpResponse::Ok().json(ReviewerDto::from(reviewer)))
}

#[get("/api/reviewers/{id}/summary")]
pub async fn get_reviewer_summary(
    state: web::Data<AppState>,
    id: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let summary = state.reviewer_service.get_summary(*id).await?;
    Ok(HttpResponse::Ok().json(SummaryResponse { summary }))
}

#[get("/api/reviewers/{id}/flashcards")]
pub async fn get_reviewer_flashcards(
    state: web::Data<AppState>,
    id: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let flashcards = state.reviewer_service.get_flashcards(*id).await?;
    Ok(HttpResponse::Ok().json(flashcards))
}

#[get("/api/reviewers/{id}/quiz")]
pub async fn get_reviewer_quiz(
    state: web::Data<AppState>,
    id: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.reviewer_service.get_quiz(*id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/api/reviewers/{id}/quiz/attempts")]
pub async fn submit_quiz_attempt(
    state: web::Data<AppState>,
    id: web::Path<u64>,
    request: web::Json<SubmitQuizAttemptRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .reviewer_service
        .submit_attempt(*id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/reviewers/{id}/quiz/attempts")]
pub async fn list_quiz_attempts(
    state: web::Data<AppState>,
    id: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let attempts = state.reviewer_service.get_attempts(*id).await?;
    Ok(HttpResponse::Ok().json(attempts))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
