//! Recitation verification engine.
//!
//! Compares what a reciter was expected to say (a list of Arabic words) with
//! what a speech recognizer heard (a transcript) and returns a per-word
//! verdict plus an aggregate score. The comparison tolerates diacritics,
//! letter-form variants, the definite article, one-letter attached prefixes
//! and small recognizer errors, while preserving word order.
//!
//! # Architecture
//!
//! - [`normalizer`] -- diacritic stripping and letter unification
//! - [`tokenizer`] -- whitespace tokenization of normalized text
//! - [`variants`] -- article / prefix stripped forms of a word
//! - [`similarity`] -- edit-distance similarity and length-adaptive thresholds
//! - [`matcher`] -- the variant-or-fuzzy match predicate
//! - [`aligner`] -- LCS alignment of expected words against spoken tokens
//! - [`verdict`] -- verdicts for aligned and leftover words
//! - [`verifier`] -- the `verify` entry point
//! - [`session`] -- practice session state machine (feature `session`)

pub mod aligner;
pub mod matcher;
pub mod normalizer;
pub mod similarity;
pub mod tokenizer;
pub mod variants;
pub mod verdict;
pub mod verifier;

#[cfg(feature = "session")]
pub mod session;

pub use matcher::matches;
pub use normalizer::normalize;
pub use similarity::{similarity, threshold};
pub use variants::{VariantSet, variants};
pub use verifier::{Verifier, VerifyOptions, verify};
