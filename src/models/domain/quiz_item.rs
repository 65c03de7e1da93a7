use serde::{Deserialize, Serialize};

pub const CHOICE_COUNT: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizItem {
    pub id: u64,
    pub question: String,
    pub choices: Vec<String>, // always CHOICE_COUNT entries
    pub correct_answer: String,
    #[serde(rename = "type")]
    pub item_type: QuizItemType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum QuizItemType {
    #[serde(rename = "MCQ")]
    Mcq,
}

impl QuizItem {
    pub fn multiple_choice(
        id: u64,
        question: impl Into<String>,
        choices: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        QuizItem {
            id,
            question: question.into(),
            choices,
            correct_answer: correct_answer.into(),
            item_type: QuizItemType::Mcq,
        }
    }

    /// Number of choices textually equal to the correct answer.
    pub fn correct_answer_occurrences(&self) -> usize {
        self.choices
            .iter()
            .filter(|choice| **choice == self.correct_answer)
            .count()
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer
    }
}
