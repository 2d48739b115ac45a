// ExpectedWord: one word of the sentence the reciter is asked to read

use crate::enums::{VerdictStatus, WordStatus};

/// One expected word of a practice sentence.
///
/// Created by splitting the user-supplied sentence on whitespace. `text` is
/// kept raw (with diacritics) for display; `status` and `spoken_text` are
/// written back from verification verdicts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpectedWord {
    /// The raw word as it appears in the sentence.
    pub text: String,

    /// Progress / verdict status of this word.
    pub status: WordStatus,

    /// The spoken token attributed to this word (empty if none).
    pub spoken_text: String,
}

impl ExpectedWord {
    /// Create a new pending word.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: WordStatus::Pending,
            spoken_text: String::new(),
        }
    }

    /// Split a sentence on whitespace into expected words.
    ///
    /// The first word is marked `Current`, the rest `Pending`.
    pub fn split_sentence(sentence: &str) -> Vec<ExpectedWord> {
        sentence
            .split_whitespace()
            .enumerate()
            .map(|(i, text)| {
                let mut word = ExpectedWord::new(text);
                if i == 0 {
                    word.status = WordStatus::Current;
                }
                word
            })
            .collect()
    }

    /// Write a verdict onto this word.
    pub fn apply(&mut self, status: VerdictStatus, spoken_text: &str) {
        self.status = status.into();
        self.spoken_text = spoken_text.to_string();
    }
}
