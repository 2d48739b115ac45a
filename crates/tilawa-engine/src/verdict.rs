// Verdict building: aligned words are correct, leftovers are resolved against
// the spoken tokens the alignment did not consume.

use tilawa_core::enums::{TraceStage, VerdictStatus};
use tilawa_core::verification::{TraceEntry, Verdict};

use crate::aligner::Alignment;
use crate::matcher::PreparedWord;
use crate::similarity::similarity;
use crate::tokenizer::SpokenToken;

/// Build one verdict per expected word.
///
/// - mapped words: `Correct`, with the literal matched token
/// - unmatched words: the unconsumed token with the highest similarity
///   (earliest wins ties); `Correct` if it reaches the word's threshold,
///   otherwise `Incorrect`. The candidate is recorded either way.
/// - no unconsumed tokens: `Incorrect` with empty spoken text
///
/// Tokens picked for unmatched words are not consumed; several unmatched
/// words may report the same candidate.
pub fn build_verdicts(
    expected: &[PreparedWord],
    spoken: &[SpokenToken<'_>],
    alignment: &Alignment,
    mut trace: Option<&mut Vec<TraceEntry>>,
) -> Vec<Verdict> {
    let consumed = alignment.consumed(spoken.len());
    let pool: Vec<&SpokenToken<'_>> = spoken
        .iter()
        .zip(&consumed)
        .filter(|&(_, &used)| !used)
        .map(|(token, _)| token)
        .collect();

    expected
        .iter()
        .zip(&alignment.expected_to_spoken)
        .enumerate()
        .map(|(index, (word, mapped))| {
            if let Some(j) = *mapped {
                let token = &spoken[j];
                if let Some(trace) = trace.as_deref_mut() {
                    trace.push(TraceEntry {
                        expected_index: index,
                        candidate: token.raw.to_string(),
                        score: similarity(&token.normalized, word.normalized()),
                        stage: TraceStage::Aligned,
                    });
                }
                return Verdict::new(VerdictStatus::Correct, token.raw);
            }
            resolve_leftover(index, word, &pool, trace.as_deref_mut())
        })
        .collect()
}

/// Pick the closest unconsumed token for an expected word the alignment
/// left unmatched.
fn resolve_leftover(
    index: usize,
    word: &PreparedWord,
    pool: &[&SpokenToken<'_>],
    mut trace: Option<&mut Vec<TraceEntry>>,
) -> Verdict {
    let mut best: Option<(&SpokenToken<'_>, f64)> = None;

    for &candidate in pool {
        let score = similarity(&candidate.normalized, word.normalized());
        if let Some(trace) = trace.as_deref_mut() {
            trace.push(TraceEntry {
                expected_index: index,
                candidate: candidate.raw.to_string(),
                score,
                stage: TraceStage::Fallback,
            });
        }
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }

    match best {
        Some((candidate, score)) => {
            let status = if score >= word.threshold() {
                VerdictStatus::Correct
            } else {
                VerdictStatus::Incorrect
            };
            Verdict::new(status, candidate.raw)
        }
        None => Verdict::missing(),
    }
}
