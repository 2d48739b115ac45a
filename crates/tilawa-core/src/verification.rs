// Verification result types: Verdict, Score, TraceEntry, Verification

use crate::enums::{TraceStage, VerdictStatus};

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// Final per-word result of a verification call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub status: VerdictStatus,

    /// The literal spoken token attributed to the word.
    ///
    /// For a word left unmatched by the alignment this is the closest
    /// unconsumed spoken token even when it was rejected. Empty only when no
    /// spoken token was available.
    pub spoken_text: String,
}

impl Verdict {
    pub fn new(status: VerdictStatus, spoken_text: impl Into<String>) -> Self {
        Self {
            status,
            spoken_text: spoken_text.into(),
        }
    }

    /// An `Incorrect` verdict with no spoken text.
    pub fn missing() -> Self {
        Self::new(VerdictStatus::Incorrect, String::new())
    }
}

// ---------------------------------------------------------------------------
// Score
// ---------------------------------------------------------------------------

/// Aggregate score of a verification call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    /// Number of words with a `Correct` verdict.
    pub correct: usize,
    /// Number of expected words.
    pub total: usize,
}

impl Score {
    pub fn new(correct: usize, total: usize) -> Self {
        Self { correct, total }
    }

    /// Count the correct verdicts in a verdict list.
    pub fn from_verdicts(verdicts: &[Verdict]) -> Self {
        Self {
            correct: verdicts.iter().filter(|v| v.status.is_correct()).count(),
            total: verdicts.len(),
        }
    }

    /// Fraction of correct words; 0.0 when there are no words.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64
    }

    /// Rounded percentage of correct words.
    pub fn percent(&self) -> u32 {
        (self.ratio() * 100.0).round() as u32
    }
}

// ---------------------------------------------------------------------------
// Trace
// ---------------------------------------------------------------------------

/// One observation recorded while building verdicts.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceEntry {
    /// Index of the expected word the observation is about.
    pub expected_index: usize,
    /// The raw spoken token that was compared.
    pub candidate: String,
    /// Similarity between the normalized candidate and expected word.
    pub score: f64,
    pub stage: TraceStage,
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

/// Complete output of one verification call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Verification {
    /// One verdict per expected word, in expected order.
    pub words: Vec<Verdict>,
    pub score: Score,
    /// Present only when trace collection was requested.
    pub trace: Option<Vec<TraceEntry>>,
}

impl Verification {
    /// Build a verification from its verdicts, computing the score.
    pub fn from_verdicts(words: Vec<Verdict>, trace: Option<Vec<TraceEntry>>) -> Self {
        let score = Score::from_verdicts(&words);
        Self {
            words,
            score,
            trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_verdict_is_incorrect_and_empty() {
        let v = Verdict::missing();
        assert_eq!(v.status, VerdictStatus::Incorrect);
        assert!(v.spoken_text.is_empty());
    }

    #[test]
    fn score_from_verdicts() {
        let verdicts = vec![
            Verdict::new(VerdictStatus::Correct, "بسم"),
            Verdict::missing(),
            Verdict::new(VerdictStatus::Correct, "الله"),
        ];
        assert_eq!(Score::from_verdicts(&verdicts), Score::new(2, 3));
    }

    #[test]
    fn score_ratio_and_percent() {
        let score = Score::new(2, 3);
        assert!((score.ratio() - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(score.percent(), 67);
    }

    #[test]
    fn empty_score_is_zero() {
        let score = Score::default();
        assert_eq!(score.ratio(), 0.0);
        assert_eq!(score.percent(), 0);
    }

    #[test]
    fn verification_from_verdicts_counts_score() {
        let v = Verification::from_verdicts(
            vec![Verdict::new(VerdictStatus::Correct, "x"), Verdict::missing()],
            None,
        );
        assert_eq!(v.score, Score::new(1, 2));
        assert!(v.trace.is_none());
    }

    #[test]
    fn default_verification_is_empty() {
        let v = Verification::default();
        assert!(v.words.is_empty());
        assert_eq!(v.score, Score::new(0, 0));
    }
}
