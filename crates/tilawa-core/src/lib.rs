//! Shared types for Tilawa recitation verification.
//!
//! - [`character`] -- Arabic character classification and letter unification
//! - [`enums`] -- word, verdict and trace status enums
//! - [`word`] -- `ExpectedWord`, one word of a practice sentence
//! - [`verification`] -- verdicts, score and trace returned by the engine

pub mod character;
pub mod enums;
pub mod verification;
pub mod word;
