// Edit-distance similarity and length-adaptive acceptance thresholds

use crate::normalizer::char_len;

/// Acceptance thresholds by expected-word length, as `(max_len, threshold)`.
///
/// Short words need a higher similarity: one edit is a larger relative error.
const THRESHOLD_STEPS: &[(usize, f64)] = &[(2, 0.85), (4, 0.75), (6, 0.70)];

/// Threshold for words longer than every step in [`THRESHOLD_STEPS`].
const LONG_WORD_THRESHOLD: f64 = 0.65;

/// Levenshtein distance (single-character insert, delete, substitute).
///
/// Computed over characters with a full `(|a|+1) x (|b|+1)` table.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let substitution = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            table[i][j] = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + substitution);
        }
    }

    table[a.len()][b.len()]
}

/// Length-normalized similarity in `[0.0, 1.0]`.
///
/// `1 - distance / max(|a|, |b|)`; 1.0 when both strings are empty and 0.0
/// when exactly one is.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = char_len(a).max(char_len(b));
    if max_len == 0 {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    1.0 - edit_distance(a, b) as f64 / max_len as f64
}

/// Minimum similarity for accepting a fuzzy match against an expected word
/// whose normalized form has `length` characters.
pub fn threshold(length: usize) -> f64 {
    THRESHOLD_STEPS
        .iter()
        .find(|&&(max_len, _)| length <= max_len)
        .map_or(LONG_WORD_THRESHOLD, |&(_, t)| t)
}
