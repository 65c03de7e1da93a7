use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::domain::{Flashcard, QuizItem};

/// A flashcard authored by the completion service, after validation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct GeneratedFlashcard {
    pub front: String,
    pub back: String,
}

/// A multiple-choice question authored by the completion service, after validation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuizQuestion {
    pub question: String,
    pub options: Vec<String>, // exactly four after validation
    pub correct_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl GeneratedFlashcard {
    pub fn into_flashcard(self, id: u64) -> Flashcard {
        Flashcard::new(id, self.front, self.back)
    }
}

impl GeneratedQuizQuestion {
    /// Returns the option text the correct answer refers to. Models answer
    /// either with the option text or with a letter such as `B`, `b)` or `C.`.
    pub fn resolve_correct_option(&self) -> Option<&str> {
        if let Some(option) = self.options.iter().find(|o| **o == self.correct_answer) {
            return Some(option);
        }

        let answer = self.correct_answer.trim();
        let letter = answer.trim_end_matches([')', '.', ':']);
        let mut chars = letter.chars();
        let (Some(first), None) = (chars.next(), chars.next()) else {
            return None;
        };
        let index = match first.to_ascii_uppercase() {
            c @ 'A'..='Z' => (c as u8 - b'A') as usize,
            _ => return None,
        };

        self.options.get(index).map(String::as_str)
    }

    pub fn into_quiz_item(self, id: u64) -> QuizItem {
        let correct_answer = match self.resolve_correct_option() {
            Some(option) => option.to_string(),
            None => {
                log::warn!(
                    "Correct answer '{}' does not match any option of question '{}'",
                    self.correct_answer,
                    self.question
                );
                self.correct_answer.clone()
            }
        };

        QuizItem::multiple_choice(id, self.question, self.options, correct_answer)
    }
}
