use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizAttempt {
    pub reviewer_id: u64,
    pub score: usize,
    pub total: usize,
    pub answers: Vec<QuizAttemptAnswer>,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizAttemptAnswer {
    pub quiz_item_id: u64,
    pub answer: String,
    pub is_correct: bool,
}

impl QuizAttempt {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.score as f64 * 100.0 / self.total as f64
    }
}
