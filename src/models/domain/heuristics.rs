use serde::{Deserialize, Serialize};

/// What the summarizer emits when no sentence qualifies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryFallback {
    /// Fixed "could not be generated" notice under the key points header.
    Notice,
    /// The first `max_chars` characters of the source text.
    Excerpt { max_chars: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizStrategy {
    WholeSentence,
    FillInBlank,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SummaryConfig {
    pub min_sentence_length: usize,
    pub max_points: usize,
    pub fallback: SummaryFallback,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FlashcardConfig {
    pub min_sentence_length: usize,
    /// Number of leading sentences examined, not the number of cards produced.
    pub max_sentences_examined: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizConfig {
    pub min_sentence_length: usize,
    pub max_items: usize,
    pub strategy: QuizStrategy,
}

/// Thresholds for the non-AI path. Each consumer has its own knobs so the
/// summary, flashcard and quiz pipelines may disagree on what qualifies.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct HeuristicConfig {
    pub summary: SummaryConfig,
    pub flashcards: FlashcardConfig,
    pub quiz: QuizConfig,
    pub shuffle_seed: Option<u64>,
}

impl HeuristicConfig {
    /// Upload-time generation: long sentences only, whole-sentence quiz items.
    pub fn classic() -> Self {
        Self {
            summary: SummaryConfig {
                min_sentence_length: 20,
                max_points: 5,
                fallback: SummaryFallback::Notice,
            },
            flashcards: FlashcardConfig {
                min_sentence_length: 30,
                max_sentences_examined: 10,
            },
            quiz: QuizConfig {
                min_sentence_length: 30,
                max_items: 5,
                strategy: QuizStrategy::WholeSentence,
            },
            shuffle_seed: None,
        }
    }

    /// Fill-in-blank generation with looser thresholds and an excerpt fallback.
    pub fn cloze() -> Self {
        Self {
            summary: SummaryConfig {
                min_sentence_length: 10,
                max_points: 10,
                fallback: SummaryFallback::Excerpt { max_chars: 200 },
            },
            flashcards: FlashcardConfig {
                min_sentence_length: 10,
                max_sentences_examined: 10,
            },
            quiz: QuizConfig {
                min_sentence_length: 15,
                max_items: 10,
                strategy: QuizStrategy::FillInBlank,
            },
            shuffle_seed: None,
        }
    }

    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "classic" => Some(Self::classic()),
            "cloze" => Some(Self::cloze()),
            _ => None,
        }
    }

    pub fn with_shuffle_seed(mut self, seed: Option<u64>) -> Self {
        self.shuffle_seed = seed;
        self
    }

    /// Applies per-request overrides on top of the preset.
    pub fn with_options(mut self, options: &GenerateOptions) -> Self {
        if let Some(min) = options.min_sentence_length {
            self.summary.min_sentence_length = min;
            self.flashcards.min_sentence_length = min;
            self.quiz.min_sentence_length = min;
        }
        if let Some(max) = options.max_items {
            self.flashcards.max_sentences_examined = max;
            self.quiz.max_items = max;
        }
        self
    }
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self::cloze()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    #[default]
    Heuristic,
    Ai,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerateOptions {
    pub min_sentence_length: Option<usize>,
    pub max_items: Option<usize>,
    pub difficulty: Option<Difficulty>,
}
