pub mod completion_client;
pub mod flashcard_generator;
pub mod generation_service;
pub mod id_source;
pub mod prompt_builder;
pub mod quiz_attempt_service;
pub mod quiz_generator;
pub mod response_normalizer;
pub mod reviewer_service;
pub mod segmenter;
pub mod summarizer;
