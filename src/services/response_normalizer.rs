use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::errors::{CompletionError, NormalizeError};
use crate::models::domain::quiz_item::CHOICE_COUNT;
use crate::models::domain::{GeneratedFlashcard, GeneratedQuizQuestion};

/// Upper bound on placeholder records, whatever the requested count.
pub const FALLBACK_LIMIT: usize = 3;

pub const FALLBACK_FLASHCARD_BACK: &str =
    "Unable to generate flashcards from AI. Please check your API key and try again.";
pub const FALLBACK_QUIZ_EXPLANATION: &str =
    "This is a fallback question. Please check your API key and try again.";

/// Opening fences with an optional language tag, and closing fences.
static CODE_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"```[A-Za-z0-9_+-]*\s*").expect("CODE_FENCE is a valid regex pattern")
});

/// A record shape the completion service is asked to produce.
pub trait ReplyRecord: Sized {
    /// Lenient wire shape; every field optional so that missing fields are
    /// reported as schema violations rather than parse failures.
    type Raw: DeserializeOwned;

    const KIND: &'static str;

    fn validate(raw: Self::Raw) -> Result<Self, String>;

    /// The `number`-th placeholder, counting from 1.
    fn placeholder(number: usize) -> Self;
}

#[derive(Debug, Default, Deserialize)]
pub struct RawFlashcard {
    #[serde(default)]
    front: Option<String>,
    #[serde(default)]
    back: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawQuizQuestion {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    options: Option<Vec<String>>,
    #[serde(default, rename = "correctAnswer", alias = "correct_answer")]
    correct_answer: Option<String>,
    #[serde(default)]
    explanation: Option<String>,
}

fn required(field: Option<String>, name: &str) -> Result<String, String> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(format!("{name} is empty")),
        None => Err(format!("{name} is missing")),
    }
}

impl ReplyRecord for GeneratedFlashcard {
    type Raw = RawFlashcard;
    const KIND: &'static str = "flashcard";

    fn validate(raw: RawFlashcard) -> Result<Self, String> {
        Ok(GeneratedFlashcard {
            front: required(raw.front, "front")?,
            back: required(raw.back, "back")?,
        })
    }

    fn placeholder(number: usize) -> Self {
        GeneratedFlashcard {
            front: format!("Error Card {number}"),
            back: FALLBACK_FLASHCARD_BACK.to_string(),
        }
    }
}

impl ReplyRecord for GeneratedQuizQuestion {
    type Raw = RawQuizQuestion;
    const KIND: &'static str = "quiz question";

    fn validate(raw: RawQuizQuestion) -> Result<Self, String> {
        let question = required(raw.question, "question")?;
        let options = raw.options.ok_or_else(|| "options is missing".to_string())?;
        if options.len() != CHOICE_COUNT {
            return Err(format!(
                "expected {CHOICE_COUNT} options, found {}",
                options.len()
            ));
        }
        let correct_answer = required(raw.correct_answer, "correctAnswer")?;

        Ok(GeneratedQuizQuestion {
            question,
            options,
            correct_answer,
            explanation: raw.explanation.filter(|e| !e.trim().is_empty()),
        })
    }

    fn placeholder(number: usize) -> Self {
        GeneratedQuizQuestion {
            question: format!("Sample Question {number} - Unable to generate from AI"),
            options: vec![
                "A) Option 1".to_string(),
                "B) Option 2".to_string(),
                "C) Option 3".to_string(),
                "D) Option 4".to_string(),
            ],
            correct_answer: "A".to_string(),
            explanation: Some(FALLBACK_QUIZ_EXPLANATION.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchSource {
    Model,
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedBatch<T> {
    pub records: Vec<T>,
    pub source: BatchSource,
}

impl<T> NormalizedBatch<T> {
    pub fn is_fallback(&self) -> bool {
        self.source == BatchSource::Fallback
    }
}

/// Removes code fence markers textually; no markdown parsing.
pub fn strip_code_fences(reply: &str) -> String {
    CODE_FENCE.replace_all(reply, "").trim().to_string()
}

/// Slices from the first `[` to the last `]` when both exist in that order.
/// Otherwise the text is returned untouched and left to fail deserialization.
pub fn isolate_json_array(text: &str) -> &str {
    match (text.find('['), text.rfind(']')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

/// Runs the cleaning, deserialization and validation steps. Any invalid record
/// rejects the whole batch.
pub fn parse_records<T: ReplyRecord>(reply: &str) -> Result<Vec<T>, NormalizeError> {
    log::debug!("Raw {} reply: {}", T::KIND, preview(reply));

    let cleaned = strip_code_fences(reply);
    let candidate = isolate_json_array(&cleaned);
    log::debug!("Clean {} JSON: {}", T::KIND, preview(candidate));

    let raw: Vec<T::Raw> = serde_json::from_str(candidate)
        .map_err(|e| NormalizeError::MalformedJson(e.to_string()))?;

    raw.into_iter()
        .enumerate()
        .map(|(index, record)| {
            T::validate(record).map_err(|reason| NormalizeError::Schema { index, reason })
        })
        .collect()
}

pub fn fallback_batch<T: ReplyRecord>(expected_count: usize) -> Vec<T> {
    (1..=expected_count.min(FALLBACK_LIMIT))
        .map(T::placeholder)
        .collect()
}

/// Turns a completion outcome into records. Never fails: transport errors,
/// malformed JSON and schema violations all yield the fallback batch.
/// `expected_count` only sizes the fallback; valid replies keep their length.
pub fn normalize<T: ReplyRecord>(
    reply: Result<String, CompletionError>,
    expected_count: usize,
) -> NormalizedBatch<T> {
    let parsed = reply
        .map_err(NormalizeError::from)
        .and_then(|text| parse_records::<T>(&text));

    match parsed {
        Ok(records) => {
            log::info!("Successfully parsed {} {} records", records.len(), T::KIND);
            if records.len() != expected_count {
                log::debug!(
                    "Expected {} {} records, model returned {}",
                    expected_count,
                    T::KIND,
                    records.len()
                );
            }
            NormalizedBatch {
                records,
                source: BatchSource::Model,
            }
        }
        Err(err) => {
            log::warn!("Using fallback {} records: {}", T::KIND, err);
            NormalizedBatch {
                records: fallback_batch(expected_count),
                source: BatchSource::Fallback,
            }
        }
    }
}

fn preview(text: &str) -> &str {
    match text.char_indices().nth(200) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}
