// Verifier: top-level entry point of the verification engine.
//
// Runs the whole pipeline for one (expected words, transcript) pair:
// normalize -> tokenize -> prepare variants/pools -> LCS alignment -> verdicts.
// Holds only its options; every call is independent, so a shared `&Verifier`
// can be used from any number of threads at once.

use tilawa_core::verification::Verification;

use crate::aligner::AlignmentMatrix;
use crate::matcher::{PreparedToken, PreparedWord};
use crate::tokenizer::spoken_tokens;
use crate::verdict::build_verdicts;

/// Options for a [`Verifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerifyOptions {
    /// Return a structured trace of the correspondences and candidates
    /// examined. Default: false.
    pub collect_trace: bool,
}

/// Recitation verification engine.
#[derive(Debug, Clone, Default)]
pub struct Verifier {
    options: VerifyOptions,
}

impl Verifier {
    /// Create a verifier with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: VerifyOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> VerifyOptions {
        self.options
    }

    /// Set whether verification results carry a trace.
    pub fn set_collect_trace(&mut self, value: bool) {
        self.options.collect_trace = value;
    }

    /// Verify a transcript against the expected words.
    ///
    /// Total over its inputs: an empty word list yields an empty result and
    /// an empty (or non-Arabic) transcript yields all words `Incorrect` with
    /// empty spoken text.
    pub fn verify<S: AsRef<str>>(&self, expected: &[S], transcript: &str) -> Verification {
        let words: Vec<PreparedWord> = expected
            .iter()
            .map(|w| PreparedWord::new(w.as_ref()))
            .collect();
        let spoken = spoken_tokens(transcript);
        let tokens: Vec<PreparedToken> = spoken
            .iter()
            .map(|t| PreparedToken::from_normalized(t.normalized.as_str()))
            .collect();

        let alignment = AlignmentMatrix::build(&words, &tokens).backtrack();

        let mut trace = self.options.collect_trace.then(Vec::new);
        let verdicts = build_verdicts(&words, &spoken, &alignment, trace.as_mut());
        Verification::from_verdicts(verdicts, trace)
    }

    /// Verify a transcript against a whitespace-separated sentence.
    pub fn verify_sentence(&self, sentence: &str, transcript: &str) -> Verification {
        let expected: Vec<&str> = sentence.split_whitespace().collect();
        self.verify(&expected, transcript)
    }
}

/// Verify with default options.
pub fn verify<S: AsRef<str>>(expected: &[S], transcript: &str) -> Verification {
    Verifier::new().verify(expected, transcript)
}
