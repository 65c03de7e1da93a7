use crate::models::domain::heuristics::{SummaryConfig, SummaryFallback};
use crate::services::segmenter::{qualifying, segment};

pub const KEY_POINTS_HEADER: &str = "KEY POINTS:\n\n";
pub const EMPTY_TEXT_SENTINEL: &str = "No text provided to summarize.";
pub const NOT_GENERATED_NOTICE: &str = "Summary could not be generated. Content may be too short.";

/// Summarizes a whole document, segmenting it first.
pub fn summarize(text: &str, config: &SummaryConfig) -> String {
    let sentences = segment(text).collect_all();
    summarize_sentences(text, &sentences, config)
}

/// Numbers the first `max_points` qualifying sentences. `text` is only read
/// for the empty check and the excerpt fallback.
pub fn summarize_sentences(text: &str, sentences: &[&str], config: &SummaryConfig) -> String {
    if text.trim().is_empty() {
        return EMPTY_TEXT_SENTINEL.to_string();
    }

    let points: Vec<&str> = qualifying(sentences, config.min_sentence_length)
        .take(config.max_points)
        .collect();

    if points.is_empty() {
        log::debug!("No sentence longer than {} characters", config.min_sentence_length);
        return match config.fallback {
            SummaryFallback::Notice => format!("{KEY_POINTS_HEADER}{NOT_GENERATED_NOTICE}"),
            SummaryFallback::Excerpt { max_chars } => excerpt(text, max_chars),
        };
    }

    let mut summary = String::from(KEY_POINTS_HEADER);
    for (index, point) in points.iter().enumerate() {
        summary.push_str(&format!("{}. {}.\n\n", index + 1, point));
    }
    summary.trim_end().to_string()
}

fn excerpt(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(max_chars) {
        Some((cut, _)) => trimmed[..cut].to_string(),
        None => trimmed.to_string(),
    }
}
