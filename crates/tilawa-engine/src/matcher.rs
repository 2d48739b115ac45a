// Match predicate: variant-or-fuzzy equality between spoken and expected words
//
// A spoken string matches an expected word when
//   - any expected variant equals, contains, or is contained by any candidate
//     in the spoken pool (whole normalized string + variants of each token), or
//   - the best pairwise similarity over (expected variant x pool candidate)
//     reaches the threshold for the expected word's normalized length.
//
// `PreparedWord` / `PreparedToken` hold the normalized forms, variant sets and
// pools so the alignment fill does not recompute them for every cell.

use crate::normalizer::{char_len, normalize};
use crate::similarity::{similarity, threshold};
use crate::tokenizer::tokenize;
use crate::variants::{VariantSet, variants};

/// An expected word with its comparison data precomputed.
#[derive(Debug, Clone)]
pub struct PreparedWord {
    normalized: String,
    variants: VariantSet,
    threshold: f64,
}

impl PreparedWord {
    /// Prepare a raw expected word.
    pub fn new(raw: &str) -> Self {
        let normalized = normalize(raw);
        let variants = variants(&normalized);
        let threshold = threshold(char_len(&normalized));
        Self {
            normalized,
            variants,
            threshold,
        }
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn variants(&self) -> &VariantSet {
        &self.variants
    }

    /// Acceptance threshold for fuzzy matches against this word.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

/// A spoken string with its candidate pool precomputed.
#[derive(Debug, Clone)]
pub struct PreparedToken {
    normalized: String,
    pool: Vec<String>,
}

impl PreparedToken {
    /// Prepare a raw spoken string (one token or a whole transcript).
    pub fn new(raw: &str) -> Self {
        Self::from_normalized(normalize(raw))
    }

    /// Prepare an already-normalized spoken string.
    pub fn from_normalized(normalized: impl Into<String>) -> Self {
        let normalized = normalized.into();
        let mut pool = vec![normalized.clone()];
        for token in tokenize(&normalized) {
            for form in variants(token) {
                if !pool.contains(&form) {
                    pool.push(form);
                }
            }
        }
        pool.retain(|c| !c.is_empty());
        Self { normalized, pool }
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Candidate pool: the whole normalized string plus every token variant.
    pub fn pool(&self) -> &[String] {
        &self.pool
    }
}

/// Either side contains the other (equality included).
fn contains_either(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Best similarity over all (expected variant x pool candidate) pairs.
pub fn best_similarity(spoken: &PreparedToken, expected: &PreparedWord) -> f64 {
    expected
        .variants
        .iter()
        .flat_map(|e| spoken.pool.iter().map(move |c| similarity(e, c)))
        .fold(0.0, f64::max)
}

/// Match predicate over prepared inputs.
pub fn prepared_matches(spoken: &PreparedToken, expected: &PreparedWord) -> bool {
    if spoken.normalized.is_empty() || expected.normalized.is_empty() {
        return false;
    }

    let contained = expected
        .variants
        .iter()
        .any(|e| spoken.pool.iter().any(|c| contains_either(e, c)));
    if contained {
        return true;
    }

    best_similarity(spoken, expected) >= expected.threshold
}

/// Does the spoken string plausibly realize the expected word?
pub fn matches(spoken: &str, expected: &str) -> bool {
    prepared_matches(&PreparedToken::new(spoken), &PreparedWord::new(expected))
}
