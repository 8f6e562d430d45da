//! Pairwise resonance scoring
//!
//! Scores two descriptor sets on a bounded integer scale. The formula rewards
//! global overlap (Jaccard) and strict bidirectional coverage together:
//! `bi_coverage = min(|a∩b|/|a|, |a∩b|/|b|)` is only high when *both* sides
//! share a large part of their own vocabulary, so neither a promiscuous large
//! set nor pure containment of a tiny set can reach the top of the range.
//! All functions return a fully defined result, including for empty sets.

use crate::config::PairScoring;
use flavorlab_core::DescriptorSet;
use serde::{Deserialize, Serialize};

/// Discrete classification of a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairKind {
    /// Large shared aromatic backbone
    Resonance,
    /// Moderate overlap
    Neutral,
    /// Little overlap; the pair works by opposition
    Contrast,
}

impl PairKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PairKind::Resonance => "resonance",
            PairKind::Neutral => "neutral",
            PairKind::Contrast => "contrast",
        }
    }
}

impl std::fmt::Display for PairKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of comparing two descriptor sets.
///
/// `shared`, `only_a` and `only_b` are sorted and partition `a ∪ b`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairComparison {
    pub score: u8,
    pub jaccard: f64,
    pub shared: Vec<String>,
    pub only_a: Vec<String>,
    pub only_b: Vec<String>,
    #[serde(rename = "type")]
    pub kind: PairKind,
}

/// Pair scorer with a fixed set of constants
#[derive(Debug, Clone, Default)]
pub struct PairScorer {
    config: PairScoring,
}

impl PairScorer {
    pub fn new(config: PairScoring) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PairScoring {
        &self.config
    }

    /// Compare two descriptor sets
    pub fn score(&self, a: &DescriptorSet, b: &DescriptorSet) -> PairComparison {
        let shared = a.intersection(b);
        let only_a = a.difference(b);
        let only_b = b.difference(a);

        let inter = shared.len() as f64;
        let union = (shared.len() + only_a.len() + only_b.len()) as f64;

        let jaccard = if union > 0.0 { inter / union } else { 0.0 };
        let raw = self.raw_score(jaccard, bi_coverage(shared.len(), a.len(), b.len()));
        let score = self.display_score(raw);

        PairComparison {
            score,
            jaccard,
            shared,
            only_a,
            only_b,
            kind: self.classify(score),
        }
    }

    /// Score only, without building the descriptor lists
    pub fn score_value(&self, a: &DescriptorSet, b: &DescriptorSet) -> u8 {
        let inter = a.intersection_count(b);
        let union = a.union_count(b);
        let jaccard = if union > 0 { inter as f64 / union as f64 } else { 0.0 };
        self.display_score(self.raw_score(jaccard, bi_coverage(inter, a.len(), b.len())))
    }

    /// Blend of global overlap and bidirectional coverage, in [0, 1]
    fn raw_score(&self, jaccard: f64, bi_coverage: f64) -> f64 {
        let c = &self.config;
        let raw = jaccard.powf(c.jaccard_exponent) * c.jaccard_weight
            + bi_coverage.powf(c.coverage_exponent) * c.coverage_weight;
        raw.clamp(0.0, 1.0)
    }

    fn display_score(&self, raw: f64) -> u8 {
        let c = &self.config;
        let scaled = (f64::from(c.score_min) + raw * c.span()).round();
        scaled.clamp(f64::from(c.score_min), f64::from(c.score_max)) as u8
    }

    pub fn classify(&self, score: u8) -> PairKind {
        if score >= self.config.resonance_threshold {
            PairKind::Resonance
        } else if score >= self.config.neutral_threshold {
            PairKind::Neutral
        } else {
            PairKind::Contrast
        }
    }

    /// Square score matrix for a selection, in input order
    pub fn matrix(&self, sets: &[&DescriptorSet]) -> Vec<Vec<u8>> {
        sets.iter()
            .map(|a| sets.iter().map(|b| self.score_value(a, b)).collect())
            .collect()
    }
}

/// `min(cov_a, cov_b)`; an empty side has zero coverage
fn bi_coverage(inter: usize, len_a: usize, len_b: usize) -> f64 {
    if len_a == 0 || len_b == 0 {
        return 0.0;
    }
    let cov_a = inter as f64 / len_a as f64;
    let cov_b = inter as f64 / len_b as f64;
    cov_a.min(cov_b)
}

/// Compare two descriptor sets with the default constants
pub fn score_pair(a: &DescriptorSet, b: &DescriptorSet) -> PairComparison {
    PairScorer::default().score(a, b)
}
