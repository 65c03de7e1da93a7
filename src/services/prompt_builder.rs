use once_cell::sync::Lazy;

use crate::constants::prompts::{
    FLASHCARD_EXAMPLE, FLASHCARD_REQUIREMENTS, FLASHCARD_SYSTEM_PROMPT, JSON_ONLY_INSTRUCTION,
    QUIZ_EXAMPLE, QUIZ_REQUIREMENTS, QUIZ_SYSTEM_PROMPT, SUMMARY_REQUIREMENTS,
};
use crate::models::domain::heuristics::Difficulty;
use crate::models::domain::{GeneratedFlashcard, GeneratedQuizQuestion};
use crate::services::completion_client::CompletionRequest;

const FLASHCARD_MAX_TOKENS: u32 = 2500;
const QUIZ_MAX_TOKENS: u32 = 3000;
const SUMMARY_MAX_TOKENS: u32 = 2000;
const GENERATION_TEMPERATURE: f32 = 0.7;
const SUMMARY_TEMPERATURE: f32 = 0.3;

static FLASHCARD_SCHEMA: Lazy<String> = Lazy::new(|| {
    serde_json::to_string_pretty(&schemars::schema_for!(Vec<GeneratedFlashcard>))
        .unwrap_or_default()
});

static QUIZ_SCHEMA: Lazy<String> = Lazy::new(|| {
    serde_json::to_string_pretty(&schemars::schema_for!(Vec<GeneratedQuizQuestion>))
        .unwrap_or_default()
});

pub fn build_flashcard_prompt(text: &str, count: usize) -> String {
    format!(
        "Create exactly {count} flashcards based on the following text.

{FLASHCARD_REQUIREMENTS}

{JSON_ONLY_INSTRUCTION}

{FLASHCARD_EXAMPLE}

The array must validate against this JSON Schema:

{schema}

Text to generate flashcards from:

{text}

Generate exactly {count} flashcards as a JSON array.",
        schema = FLASHCARD_SCHEMA.as_str(),
    )
}

pub fn build_quiz_prompt(text: &str, count: usize, difficulty: Difficulty) -> String {
    format!(
        "Create exactly {count} multiple-choice quiz questions based on the following text.
Difficulty level: {difficulty}

{QUIZ_REQUIREMENTS}

{JSON_ONLY_INSTRUCTION}

{QUIZ_EXAMPLE}

The array must validate against this JSON Schema:

{schema}

Text to generate questions from:

{text}

Generate exactly {count} questions as a JSON array.",
        schema = QUIZ_SCHEMA.as_str(),
    )
}

pub fn build_summary_prompt(text: &str) -> String {
    format!(
        "Create a comprehensive and detailed summary of the following text.

{SUMMARY_REQUIREMENTS}

Text to summarize:

{text}

Provide a detailed summary:"
    )
}

pub fn flashcard_request(text: &str, count: usize) -> CompletionRequest {
    CompletionRequest::new(build_flashcard_prompt(text, count))
        .with_system(FLASHCARD_SYSTEM_PROMPT)
        .with_max_tokens(FLASHCARD_MAX_TOKENS)
        .with_temperature(GENERATION_TEMPERATURE)
}

pub fn quiz_request(text: &str, count: usize, difficulty: Difficulty) -> CompletionRequest {
    CompletionRequest::new(build_quiz_prompt(text, count, difficulty))
        .with_system(QUIZ_SYSTEM_PROMPT)
        .with_max_tokens(QUIZ_MAX_TOKENS)
        .with_temperature(GENERATION_TEMPERATURE)
}

pub fn summary_request(text: &str) -> CompletionRequest {
    CompletionRequest::new(build_summary_prompt(text))
        .with_max_tokens(SUMMARY_MAX_TOKENS)
        .with_temperature(SUMMARY_TEMPERATURE)
}
