use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Flashcard {
    pub id: u64,
    pub term: String,
    pub definition: String,
}

impl Flashcard {
    pub fn new(id: u64, term: impl Into<String>, definition: impl Into<String>) -> Self {
        Flashcard {
            id,
            term: term.into(),
            definition: definition.into(),
        }
    }
}
