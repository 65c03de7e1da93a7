use crate::models::domain::heuristics::FlashcardConfig;
use crate::models::domain::Flashcard;
use crate::services::id_source::IdSource;
use crate::services::segmenter::is_qualifying;

pub const TERM_WORD_LIMIT: usize = 5;

/// Builds one card per qualifying sentence among the first
/// `max_sentences_examined` sentences. Short sentences inside that window are
/// skipped without widening it, so fewer cards than the cap may come back.
pub fn generate_flashcards(
    sentences: &[&str],
    config: &FlashcardConfig,
    ids: &dyn IdSource,
) -> Vec<Flashcard> {
    sentences
        .iter()
        .take(config.max_sentences_examined)
        .map(|sentence| sentence.trim())
        .filter(|sentence| is_qualifying(sentence, config.min_sentence_length))
        .map(|sentence| Flashcard::new(ids.next_id(), term_for(sentence), sentence))
        .collect()
}

/// `Q: ` followed by the sentence's leading words and an ellipsis.
pub fn term_for(sentence: &str) -> String {
    let lead: Vec<&str> = sentence.split_whitespace().take(TERM_WORD_LIMIT).collect();
    format!("Q: {}...", lead.join(" "))
}
