use once_cell::sync::Lazy;
use regex::Regex;

/// A run of terminal punctuation counts as a single boundary, so `...` and `?!`
/// split only once.
static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("SENTENCE_BOUNDARY is a valid regex pattern"));

/// Sentences of a document, recomputed on every call to [`Sentences::iter`].
///
/// Empty pieces are kept in position; callers filter with [`qualifying`].
#[derive(Clone, Copy, Debug)]
pub struct Sentences<'t> {
    text: &'t str,
}

impl<'t> Sentences<'t> {
    pub fn new(text: &'t str) -> Self {
        Self { text }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'t str> + 't {
        SENTENCE_BOUNDARY.split(self.text).map(str::trim)
    }

    pub fn collect_all(&self) -> Vec<&'t str> {
        self.iter().collect()
    }
}

pub fn segment(text: &str) -> Sentences<'_> {
    Sentences::new(text)
}

/// Whether a trimmed sentence is long enough for a consumer with the given threshold.
/// Length is measured in characters and must strictly exceed the threshold.
pub fn is_qualifying(sentence: &str, min_length: usize) -> bool {
    sentence.trim().chars().count() > min_length
}

pub fn qualifying<'a, 't>(
    sentences: &'a [&'t str],
    min_length: usize,
) -> impl Iterator<Item = &'t str> + 'a {
    sentences
        .iter()
        .copied()
        .filter(move |sentence| is_qualifying(sentence, min_length))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_each_terminal_mark() {
        let sentences: Vec<&str> = segment("A. B! C?").iter().filter(|s| !s.is_empty()).collect();
        assert_eq!(sentences, vec!["A", "B", "C"]);
    }

    #[test]
    fn keeps_trailing_empty_piece_in_position() {
        assert_eq!(segment("A. B! C?").collect_all(), vec!["A", "B", "C", ""]);
    }

    #[test]
    fn repeated_marks_are_one_boundary() {
        let sentences = segment("Wait... what?! Really").collect_all();
        assert_eq!(sentences, vec!["Wait", "what", "Really"]);
    }

    #[test]
    fn empty_input_yields_single_empty_sentence() {
        assert_eq!(segment("").collect_all(), vec![""]);
    }

    #[test]
    fn sequence_is_restartable() {
        let sentences = segment("One. Two.");
        let first: Vec<&str> = sentences.iter().collect();
        let second: Vec<&str> = sentences.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn qualifying_uses_strict_character_length() {
        let sentences = ["exactly ten", "short", "much longer sentence"];
        let kept: Vec<&str> = qualifying(&sentences, 11).collect();
        assert_eq!(kept, vec!["much longer sentence"]);

        assert!(is_qualifying("  abcdef  ", 5));
        assert!(!is_qualifying("abcde", 5));
        // multi-byte characters count once
        assert!(!is_qualifying("ééééé", 5));
    }
}
