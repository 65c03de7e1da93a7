use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::domain::heuristics::{QuizConfig, QuizStrategy};
use crate::models::domain::quiz_item::CHOICE_COUNT;
use crate::models::domain::QuizItem;
use crate::services::id_source::IdSource;
use crate::services::segmenter::qualifying;

pub const MAIN_IDEA_QUESTION: &str = "What is the main idea of this statement?";
pub const GENERIC_DISTRACTORS: [&str; 3] = [
    "This is an incorrect option",
    "This is also incorrect",
    "Not the correct answer",
];

pub const BLANK_MARKER: &str = "________";
pub const FILL_IN_PREFIX: &str = "Complete the sentence: ";
/// Sentences with fewer tokens become true/false items instead of blanks.
pub const MIN_BLANK_TOKENS: usize = 5;
/// Harvested distractors must be longer than this many characters.
pub const MIN_DISTRACTOR_CHARS: usize = 3;

pub const TRUE_FALSE_CHOICES: [&str; 4] = [
    "True — This is correct",
    "False — This is incorrect",
    "Partially correct",
    "Cannot determine",
];

/// Builds up to `max_items` multiple-choice items from the sentences that
/// clear the quiz threshold, using the configured strategy.
pub fn generate_quiz_items<R: Rng + ?Sized>(
    sentences: &[&str],
    config: &QuizConfig,
    ids: &dyn IdSource,
    rng: &mut R,
) -> Vec<QuizItem> {
    let pool: Vec<&str> = qualifying(sentences, config.min_sentence_length).collect();

    log::debug!(
        "Generating {:?} quiz items from {} candidate sentences",
        config.strategy,
        pool.len()
    );

    match config.strategy {
        QuizStrategy::WholeSentence => pool
            .iter()
            .take(config.max_items)
            .map(|sentence| whole_sentence_item(ids.next_id(), sentence, rng))
            .collect(),
        QuizStrategy::FillInBlank => (0..pool.len().min(config.max_items))
            .map(|position| fill_in_blank_item(ids.next_id(), &pool, position, rng))
            .collect(),
    }
}

fn whole_sentence_item<R: Rng + ?Sized>(id: u64, sentence: &str, rng: &mut R) -> QuizItem {
    let mut choices = Vec::with_capacity(CHOICE_COUNT);
    choices.push(sentence.to_string());
    choices.extend(GENERIC_DISTRACTORS.iter().map(|d| d.to_string()));
    choices.shuffle(rng);

    QuizItem::multiple_choice(id, MAIN_IDEA_QUESTION, choices, sentence)
}

/// Zero-based token to blank out: early-middle, never the first or last
/// token once there are at least [`MIN_BLANK_TOKENS`] tokens.
pub fn blank_index(token_count: usize) -> usize {
    (token_count / 2).min(3)
}

/// Blanks one word of `pool[position]`; the other candidate sentences supply
/// the distractors.
fn fill_in_blank_item<R: Rng + ?Sized>(
    id: u64,
    pool: &[&str],
    position: usize,
    rng: &mut R,
) -> QuizItem {
    let sentence = pool[position];
    let tokens: Vec<&str> = sentence.split_whitespace().collect();

    if tokens.len() < MIN_BLANK_TOKENS {
        return true_false_item(id, sentence);
    }

    let blank = blank_index(tokens.len());
    let answer = tokens[blank];

    let rendered: Vec<&str> = tokens
        .iter()
        .enumerate()
        .map(|(i, token)| if i == blank { BLANK_MARKER } else { *token })
        .collect();
    let question = format!("{FILL_IN_PREFIX}{}", rendered.join(" "));

    let mut choices = Vec::with_capacity(CHOICE_COUNT);
    choices.push(answer.to_string());
    choices.extend(harvest_distractors(pool, position, answer, CHOICE_COUNT - 1));
    while choices.len() < CHOICE_COUNT {
        choices.push(format!("Option {}", choices.len() + 1));
    }
    choices.shuffle(rng);

    QuizItem::multiple_choice(id, question, choices, answer)
}

/// Collects up to `needed` words from the other candidate sentences in
/// document order. Words must be longer than [`MIN_DISTRACTOR_CHARS`] and are
/// deduplicated case-insensitively, with the answer itself pre-excluded.
pub fn harvest_distractors(
    pool: &[&str],
    skip: usize,
    answer: &str,
    needed: usize,
) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    used.insert(answer.to_lowercase());

    let mut distractors = Vec::with_capacity(needed);
    let candidates = pool
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != skip)
        .flat_map(|(_, sentence)| sentence.split_whitespace());

    for word in candidates {
        if distractors.len() >= needed {
            break;
        }
        if word.chars().count() > MIN_DISTRACTOR_CHARS && used.insert(word.to_lowercase()) {
            distractors.push(word.to_string());
        }
    }

    distractors
}

fn true_false_item(id: u64, sentence: &str) -> QuizItem {
    QuizItem::multiple_choice(
        id,
        format!("Is the following statement from the source text? \"{sentence}\""),
        TRUE_FALSE_CHOICES.iter().map(|c| c.to_string()).collect(),
        TRUE_FALSE_CHOICES[0],
    )
}
