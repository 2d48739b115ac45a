// Word tokenization of normalized text and spoken transcripts

use crate::normalizer::normalize;

/// Split normalized text into word tokens on runs of whitespace.
///
/// Empty tokens are never produced; order is preserved.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

/// One token of a spoken transcript.
///
/// Keeps the literal recognizer output (reported back to the caller as the
/// spoken text of a verdict) next to its normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpokenToken<'a> {
    /// The token exactly as the recognizer produced it.
    pub raw: &'a str,
    /// The normalized form used for comparison; never empty.
    pub normalized: String,
}

/// Split a raw transcript into spoken tokens.
///
/// The transcript is split on whitespace; tokens that normalize to nothing
/// (Latin words, stray punctuation, lone diacritics) are dropped.
pub fn spoken_tokens(transcript: &str) -> Vec<SpokenToken<'_>> {
    transcript
        .split_whitespace()
        .filter_map(|raw| {
            let normalized = normalize(raw);
            if normalized.is_empty() {
                None
            } else {
                Some(SpokenToken { raw, normalized })
            }
        })
        .collect()
}
