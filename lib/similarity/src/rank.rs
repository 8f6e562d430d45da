//! Bridge and contrast discovery
//!
//! Scans the ingredient table for third ingredients relative to a pair:
//! bridges share vocabulary with *both* sides, contrasts are mostly foreign to
//! both. The two rankings differ only in their per-candidate formula; the
//! scan, threshold, sort, truncate and normalize steps are shared.
//!
//! Scores are ranking signals, not probabilities: after truncation to `top_n`
//! every kept score is divided by the best one, so the first result is always
//! exactly 1.0.

use crate::config::RankingConfig;
use flavorlab_core::{DescriptorSet, Ingredient};
use serde::{Deserialize, Serialize};

/// An ingredient connecting both sides of a pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bridge {
    pub name: String,
    /// Relative to the best bridge, in (0, 1]
    pub score: f64,
    /// Fraction of side A's descriptors the candidate shares
    pub coverage_a: f64,
    /// Fraction of side B's descriptors the candidate shares
    pub coverage_b: f64,
}

/// An ingredient foreign to both sides of a pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contrast {
    pub name: String,
    /// Relative to the strongest contrast, in (0, 1]
    pub score: f64,
    /// Fraction of the candidate's descriptors absent from side A
    pub novelty_a: f64,
    /// Fraction of the candidate's descriptors absent from side B
    pub novelty_b: f64,
}

/// Raw per-candidate score with its two side measurements
struct Candidate<'a> {
    name: &'a str,
    raw: f64,
    side_a: f64,
    side_b: f64,
}

#[inline]
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Scan candidates, keep those above `ranking.min_score`, sort descending
/// (ties by name), truncate to `ranking.top_n`, then normalize by the kept
/// maximum
fn rank_candidates<'a, I, F>(
    candidates: I,
    exclude: &[&str],
    ranking: &RankingConfig,
    score: F,
) -> Vec<Candidate<'a>>
where
    I: IntoIterator<Item = &'a Ingredient>,
    F: Fn(&DescriptorSet) -> (f64, f64, f64),
{
    let mut kept: Vec<Candidate<'a>> = candidates
        .into_iter()
        .filter(|i| !exclude.contains(&i.name.as_str()))
        .filter_map(|i| {
            let (raw, side_a, side_b) = score(&i.descriptors);
            (raw > ranking.min_score).then_some(Candidate {
                name: i.name.as_str(),
                raw,
                side_a,
                side_b,
            })
        })
        .collect();

    kept.sort_by(|a, b| {
        b.raw
            .partial_cmp(&a.raw)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(b.name))
    });
    kept.truncate(ranking.top_n);

    // Normalize strictly after truncation
    if let Some(max) = kept.first().map(|c| c.raw) {
        for candidate in &mut kept {
            candidate.raw /= max;
        }
    }
    kept
}

/// Rank ingredients that bridge `set_a` and `set_b`.
///
/// `raw = sqrt(cov_a * cov_b) * (1 + min(cov_a, cov_b))`: the geometric mean
/// vanishes unless both coverages are non-zero, and the factor favors
/// balanced coverage.
pub fn find_bridges<'a, I>(
    candidates: I,
    set_a: &DescriptorSet,
    set_b: &DescriptorSet,
    exclude: &[&str],
    ranking: &RankingConfig,
) -> Vec<Bridge>
where
    I: IntoIterator<Item = &'a Ingredient>,
{
    rank_candidates(candidates, exclude, ranking, |c| {
        let cov_a = ratio(c.intersection_count(set_a), set_a.len());
        let cov_b = ratio(c.intersection_count(set_b), set_b.len());
        let raw = (cov_a * cov_b).sqrt() * (1.0 + cov_a.min(cov_b));
        (raw, cov_a, cov_b)
    })
    .into_iter()
    .map(|c| Bridge {
        name: c.name.to_string(),
        score: c.raw,
        coverage_a: c.side_a,
        coverage_b: c.side_b,
    })
    .collect()
}

/// Rank ingredients that contrast with both `set_a` and `set_b`.
///
/// `raw = (novelty_a + novelty_b) / 2` where `novelty_x` is the fraction of
/// the candidate's own descriptors missing from side x.
pub fn find_contrasts<'a, I>(
    candidates: I,
    set_a: &DescriptorSet,
    set_b: &DescriptorSet,
    exclude: &[&str],
    ranking: &RankingConfig,
) -> Vec<Contrast>
where
    I: IntoIterator<Item = &'a Ingredient>,
{
    rank_candidates(candidates, exclude, ranking, |c| {
        let novelty_a = ratio(c.difference_count(set_a), c.len());
        let novelty_b = ratio(c.difference_count(set_b), c.len());
        ((novelty_a + novelty_b) / 2.0, novelty_a, novelty_b)
    })
    .into_iter()
    .map(|c| Contrast {
        name: c.name.to_string(),
        score: c.raw,
        novelty_a: c.side_a,
        novelty_b: c.side_b,
    })
    .collect()
}
