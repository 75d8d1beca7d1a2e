use std::collections::HashSet;

use chunk::{Chunk, ChunkKind};
use similarity::SimilarityMatch;

use crate::config::ClassifierConfig;
use crate::types::Classification;

/// A match that crossed its chunk kind's threshold.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FlaggedEntry {
    pub score: f32,
    pub text: String,
}

/// Pure reduction from per-chunk lookup results to a verdict.
///
/// `results` must be slot-aligned with `chunks`. An absent result counts as
/// score 0 and can never flag. With a non-empty flagged set the strongest
/// entry wins; otherwise the verdict is clean with the best score seen
/// across the whole batch (0 when no chunks existed).
pub(crate) fn decide(
    chunks: &[Chunk],
    results: &[Option<SimilarityMatch>],
    cfg: &ClassifierConfig,
) -> Classification {
    debug_assert_eq!(chunks.len(), results.len());

    let flagged = collect_flagged(chunks, results, cfg);

    // First strictly-greater wins, so equal scores keep chunk input order.
    let top = flagged.into_iter().reduce(|best, candidate| {
        if candidate.score > best.score {
            candidate
        } else {
            best
        }
    });

    match top {
        Some(entry) => Classification::Profane {
            score: entry.score,
            flagged_for: entry.text,
        },
        None => Classification::Clean {
            score: best_overall(results),
        },
    }
}

/// Collects matches above their kind-specific threshold, deduplicated by
/// (score, text) value so two chunks hitting the same reference entry
/// collapse to one.
pub(crate) fn collect_flagged(
    chunks: &[Chunk],
    results: &[Option<SimilarityMatch>],
    cfg: &ClassifierConfig,
) -> Vec<FlaggedEntry> {
    let mut seen: HashSet<(u32, String)> = HashSet::new();
    let mut flagged = Vec::new();

    for (chunk, result) in chunks.iter().zip(results) {
        let Some(found) = result else { continue };

        let threshold = match chunk.kind {
            ChunkKind::Word => cfg.word_threshold,
            ChunkKind::Semantic => cfg.semantic_threshold,
        };
        if found.score > threshold && seen.insert((found.score.to_bits(), found.text.clone())) {
            flagged.push(FlaggedEntry {
                score: found.score,
                text: found.text.clone(),
            });
        }
    }

    flagged
}

fn best_overall(results: &[Option<SimilarityMatch>]) -> f32 {
    results
        .iter()
        .flatten()
        .map(|found| found.score)
        .fold(0.0, f32::max)
}
