use std::collections::HashMap;

use chrono::Utc;

use crate::errors::{AppError, AppResult};
use crate::models::domain::quiz_attempt::{QuizAttempt, QuizAttemptAnswer};
use crate::models::domain::{QuizItem, Reviewer};

pub struct QuizAttemptService;

impl QuizAttemptService {
    /// Grade submitted answers against a reviewer's quiz. One point per
    /// exact match; unanswered items count toward the total only.
    pub fn grade_attempt(
        reviewer: &Reviewer,
        submitted_answers: &HashMap<u64, String>,
    ) -> AppResult<QuizAttempt> {
        let item_map: HashMap<u64, &QuizItem> =
            reviewer.quiz_items.iter().map(|item| (item.id, item)).collect();

        // Unknown ids are rejected before anything is scored
        if let Some(unknown) = submitted_answers
            .keys()
            .find(|id| !item_map.contains_key(id))
        {
            return Err(AppError::ValidationError(format!(
                "Quiz item {} does not belong to reviewer {}",
                unknown, reviewer.id
            )));
        }

        let answers: Vec<QuizAttemptAnswer> = reviewer
            .quiz_items
            .iter()
            .filter_map(|item| {
                submitted_answers.get(&item.id).map(|answer| QuizAttemptAnswer {
                    quiz_item_id: item.id,
                    answer: answer.clone(),
                    is_correct: item.is_correct(answer),
                })
            })
            .collect();

        let score = answers.iter().filter(|a| a.is_correct).count();

        Ok(QuizAttempt {
            reviewer_id: reviewer.id,
            score,
            total: reviewer.quiz_items.len(),
            answers,
            submitted_at: Utc::now(),
        })
    }
}
