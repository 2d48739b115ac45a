// Sequence alignment of expected words against spoken tokens
//
// Longest-common-subsequence dynamic program whose equality test is the
// variant-or-fuzzy match predicate:
//
//   dp[i][j] = dp[i-1][j-1] + 1                 if expected[i-1] ~ spoken[j-1]
//            = max(dp[i-1][j], dp[i][j-1])      otherwise
//
// Backtracking from (n, m) records a correspondence on every match and, on
// equal neighbours, decrements the expected index first. That tie-break
// decides which of several equally long alignments is returned.

use crate::matcher::{PreparedToken, PreparedWord, prepared_matches};

/// Mapping from expected words to spoken tokens.
///
/// Mapped spoken indices are unique and strictly increasing with the
/// expected index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// For each expected word, the index of its spoken token or `None`.
    pub expected_to_spoken: Vec<Option<usize>>,
}

impl Alignment {
    /// Number of matched expected words.
    pub fn matched_count(&self) -> usize {
        self.expected_to_spoken.iter().flatten().count()
    }

    /// Which of `spoken_len` spoken tokens are consumed by a correspondence.
    pub fn consumed(&self, spoken_len: usize) -> Vec<bool> {
        let mut consumed = vec![false; spoken_len];
        for &j in self.expected_to_spoken.iter().flatten() {
            consumed[j] = true;
        }
        consumed
    }
}

/// The `(n+1) x (m+1)` LCS table plus the cached predicate results.
#[derive(Debug, Clone)]
pub struct AlignmentMatrix {
    n: usize,
    m: usize,
    /// Row-major `(n+1) * (m+1)` cells.
    dp: Vec<usize>,
    /// Row-major `n * m` predicate results, `is_match[i * m + j]` for
    /// expected `i` and spoken `j`.
    is_match: Vec<bool>,
}

impl AlignmentMatrix {
    /// Fill the table for prepared expected words and spoken tokens.
    pub fn build(expected: &[PreparedWord], spoken: &[PreparedToken]) -> Self {
        Self::build_with(expected.len(), spoken.len(), |i, j| {
            prepared_matches(&spoken[j], &expected[i])
        })
    }

    /// Fill the table with an arbitrary equality predicate over
    /// (expected index, spoken index).
    ///
    /// The predicate is evaluated exactly once per pair.
    pub fn build_with(n: usize, m: usize, mut predicate: impl FnMut(usize, usize) -> bool) -> Self {
        let cols = m + 1;
        let mut dp = vec![0usize; (n + 1) * cols];
        let mut is_match = vec![false; n * m];

        for i in 1..=n {
            for j in 1..=m {
                let matched = predicate(i - 1, j - 1);
                is_match[(i - 1) * m + (j - 1)] = matched;
                dp[i * cols + j] = if matched {
                    dp[(i - 1) * cols + (j - 1)] + 1
                } else {
                    dp[(i - 1) * cols + j].max(dp[i * cols + (j - 1)])
                };
            }
        }

        Self { n, m, dp, is_match }
    }

    /// Number of expected words (`n`).
    pub fn expected_len(&self) -> usize {
        self.n
    }

    /// Number of spoken tokens (`m`).
    pub fn spoken_len(&self) -> usize {
        self.m
    }

    /// Table cell `dp[i][j]`, `0 <= i <= n`, `0 <= j <= m`.
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.dp[i * (self.m + 1) + j]
    }

    /// Cached predicate result for expected `i` and spoken `j` (0-based).
    pub fn is_match(&self, i: usize, j: usize) -> bool {
        self.is_match[i * self.m + j]
    }

    /// Length of the best alignment, `dp[n][m]`.
    pub fn lcs_len(&self) -> usize {
        self.get(self.n, self.m)
    }

    /// Walk back from `(n, m)` to recover the alignment.
    pub fn backtrack(&self) -> Alignment {
        let mut expected_to_spoken = vec![None; self.n];
        let (mut i, mut j) = (self.n, self.m);

        while i > 0 && j > 0 {
            if self.is_match(i - 1, j - 1) {
                expected_to_spoken[i - 1] = Some(j - 1);
                i -= 1;
                j -= 1;
            } else if self.get(i - 1, j) >= self.get(i, j - 1) {
                i -= 1;
            } else {
                j -= 1;
            }
        }

        Alignment { expected_to_spoken }
    }
}

/// Align prepared expected words against prepared spoken tokens.
pub fn align(expected: &[PreparedWord], spoken: &[PreparedToken]) -> Alignment {
    AlignmentMatrix::build(expected, spoken).backtrack()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prepare(expected: &[&str], spoken: &str) -> (Vec<PreparedWord>, Vec<PreparedToken>) {
        let words = expected.iter().map(|w| PreparedWord::new(w)).collect();
        let tokens = spoken.split_whitespace().map(PreparedToken::new).collect();
        (words, tokens)
    }

    fn assert_monotone(matrix: &AlignmentMatrix) {
        for i in 0..=matrix.expected_len() {
            for j in 0..=matrix.spoken_len() {
                if i > 0 {
                    assert!(matrix.get(i, j) >= matrix.get(i - 1, j));
                }
                if j > 0 {
                    assert!(matrix.get(i, j) >= matrix.get(i, j - 1));
                }
            }
        }
    }

    #[test]
    fn identical_sequences_align_diagonally() {
        let (words, tokens) = prepare(&["بسم", "الله", "الرحمن"], "بسم الله الرحمن");
        let matrix = AlignmentMatrix::build(&words, &tokens);
        assert_eq!(matrix.lcs_len(), 3);
        assert_eq!(
            matrix.backtrack().expected_to_spoken,
            vec![Some(0), Some(1), Some(2)]
        );
        assert_monotone(&matrix);
    }

    #[test]
    fn missing_spoken_word_leaves_gap() {
        let (words, tokens) = prepare(&["بسم", "الله", "الرحمن"], "بسم الرحمن");
        let alignment = align(&words, &tokens);
        assert_eq!(alignment.expected_to_spoken, vec![Some(0), None, Some(1)]);
        assert_eq!(alignment.matched_count(), 2);
    }

    #[test]
    fn extra_spoken_word_is_skipped() {
        let (words, tokens) = prepare(&["بسم", "الرحمن"], "بسم قلم الرحمن");
        let alignment = align(&words, &tokens);
        assert_eq!(alignment.expected_to_spoken, vec![Some(0), Some(2)]);
        assert_eq!(alignment.consumed(3), vec![true, false, true]);
    }

    #[test]
    fn empty_inputs() {
        let matrix = AlignmentMatrix::build(&[], &[]);
        assert_eq!(matrix.lcs_len(), 0);
        assert!(matrix.backtrack().expected_to_spoken.is_empty());

        let (words, tokens) = prepare(&["بسم", "الله"], "");
        let alignment = align(&words, &tokens);
        assert_eq!(alignment.expected_to_spoken, vec![None, None]);
    }

    #[test]
    fn tie_prefers_expected_axis() {
        // Swapped order: كتاب matches spoken[1], قلم matches spoken[0].
        // dp[2][2] ties between dp[1][2] and dp[2][1]; decrementing the
        // expected index keeps كتاب -> spoken[1].
        let (words, tokens) = prepare(&["كتاب", "قلم"], "قلم كتاب");
        let matrix = AlignmentMatrix::build(&words, &tokens);
        assert!(!matrix.is_match(1, 1));
        assert_eq!(matrix.get(1, 2), matrix.get(2, 1));
        assert_eq!(matrix.lcs_len(), 1);
        assert_eq!(matrix.backtrack().expected_to_spoken, vec![Some(1), None]);
    }

    #[test]
    fn tie_break_with_synthetic_predicate() {
        // expected: a b ; spoken: b a
        let expected = ['a', 'b'];
        let spoken = ['b', 'a'];
        let matrix = AlignmentMatrix::build_with(2, 2, |i, j| expected[i] == spoken[j]);
        assert_eq!(matrix.backtrack().expected_to_spoken, vec![Some(1), None]);
    }

    #[test]
    fn predicate_called_once_per_pair() {
        let mut calls = 0;
        let matrix = AlignmentMatrix::build_with(3, 4, |_, _| {
            calls += 1;
            false
        });
        assert_eq!(calls, 12);
        assert_eq!(matrix.lcs_len(), 0);
    }

    #[test]
    fn mapped_indices_strictly_increase() {
        let expected = ['a', 'b', 'c', 'a', 'b'];
        let spoken = ['b', 'a', 'c', 'b', 'a', 'b'];
        let matrix =
            AlignmentMatrix::build_with(expected.len(), spoken.len(), |i, j| expected[i] == spoken[j]);
        assert_monotone(&matrix);
        let mapped: Vec<usize> = matrix
            .backtrack()
            .expected_to_spoken
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(mapped.len(), matrix.lcs_len());
        assert!(mapped.windows(2).all(|w| w[0] < w[1]));
    }
}
