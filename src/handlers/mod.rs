use actix_web::web;

pub mod generation_handler;
pub mod reviewer_handler;

pub use generation_handler::{generate_flashcards, generate_quiz, generate_summary};
pub use reviewer_handler::{
    create_reviewer, get_reviewer, get_reviewer_flashcards, get_reviewer_quiz,
    get_reviewer_summary, health_check, list_quiz_attempts, list_reviewers, submit_quiz_attempt,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(create_reviewer)
        .service(list_reviewers)
        .service(get_reviewer)
        .service(get_reviewer_summary)
        .service(get_reviewer_flashcards)
        .service(get_reviewer_quiz)
        .service(submit_quiz_attempt)
        .service(list_quiz_attempts)
        .service(generate_summary)
        .service(generate_flashcards)
        .service(generate_quiz);
}
