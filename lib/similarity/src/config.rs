//! Scoring configuration
//!
//! Every tunable constant of the engine lives here. The defaults were chosen
//! for perceptual plausibility of the displayed scores; they are configuration,
//! not derived quantities. Any subset of fields can be supplied as JSON, the
//! rest fall back to the defaults.

use serde::{Deserialize, Serialize};

/// Scoring configuration version 1
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Config version for future compatibility
    pub version: u32,
    pub pair: PairScoring,
    pub bridge: RankingConfig,
    pub contrast: RankingConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            version: 1,
            pair: PairScoring::default(),
            bridge: RankingConfig {
                min_score: 0.04,
                top_n: 4,
            },
            contrast: RankingConfig {
                min_score: 0.5,
                top_n: 4,
            },
        }
    }
}

impl ScoringConfig {
    /// Validate the configuration
    /// - Checks exponents, weights, score range and thresholds
    /// - Normalizes the pair weights to sum to 1.0 if they don't
    pub fn validate_and_normalize(&mut self) -> Result<(), ConfigError> {
        self.pair.validate_and_normalize()?;
        self.bridge.validate("bridge")?;
        self.contrast.validate("contrast")?;
        Ok(())
    }
}

/// Constants of the pair resonance formula
///
/// `raw = jaccard^jaccard_exponent * jaccard_weight
///      + bi_coverage^coverage_exponent * coverage_weight`
/// mapped linearly onto `[score_min, score_max]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PairScoring {
    pub jaccard_exponent: f64,
    pub jaccard_weight: f64,
    pub coverage_exponent: f64,
    pub coverage_weight: f64,
    pub score_min: u8,
    pub score_max: u8,
    /// Scores at or above this are `resonance`
    pub resonance_threshold: u8,
    /// Scores at or above this (and below resonance) are `neutral`
    pub neutral_threshold: u8,
}

impl Default for PairScoring {
    fn default() -> Self {
        Self {
            jaccard_exponent: 0.6,
            jaccard_weight: 0.65,
            coverage_exponent: 0.4,
            coverage_weight: 0.35,
            score_min: 18,
            score_max: 97,
            resonance_threshold: 65,
            neutral_threshold: 42,
        }
    }
}

impl PairScoring {
    pub fn validate_and_normalize(&mut self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("jaccard_exponent", self.jaccard_exponent),
            ("coverage_exponent", self.coverage_exponent),
        ] {
            if value <= 0.0 || !value.is_finite() {
                return Err(ConfigError::NonPositiveExponent(name.to_string()));
            }
        }

        for (name, value) in [
            ("jaccard_weight", self.jaccard_weight),
            ("coverage_weight", self.coverage_weight),
        ] {
            if value < 0.0 || !value.is_finite() {
                return Err(ConfigError::NegativeWeight(name.to_string()));
            }
        }

        let weight_sum = self.jaccard_weight + self.coverage_weight;
        if weight_sum <= 0.0 {
            return Err(ConfigError::ZeroTotalWeight);
        }

        if self.score_min >= self.score_max {
            return Err(ConfigError::InvalidScoreRange {
                min: self.score_min,
                max: self.score_max,
            });
        }

        if self.neutral_threshold > self.resonance_threshold {
            return Err(ConfigError::ThresholdOrder {
                neutral: self.neutral_threshold,
                resonance: self.resonance_threshold,
            });
        }

        // Both bands must be reachable inside the score range
        for threshold in [self.neutral_threshold, self.resonance_threshold] {
            if threshold < self.score_min || threshold > self.score_max {
                return Err(ConfigError::ThresholdOutOfRange {
                    threshold,
                    min: self.score_min,
                    max: self.score_max,
                });
            }
        }

        // Normalize weights to sum to 1.0
        if (weight_sum - 1.0).abs() > 0.001 {
            self.jaccard_weight /= weight_sum;
            self.coverage_weight /= weight_sum;
        }

        Ok(())
    }

    /// Width of the display range
    #[inline]
    pub fn span(&self) -> f64 {
        f64::from(self.score_max) - f64::from(self.score_min)
    }
}

/// Threshold and cut-off shared by the bridge and contrast rankings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankingConfig {
    /// Candidates whose raw score does not exceed this are discarded
    pub min_score: f64,
    /// Number of candidates kept after sorting
    pub top_n: usize,
}

impl RankingConfig {
    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if self.min_score < 0.0 || !self.min_score.is_finite() {
            return Err(ConfigError::NegativeThreshold(name.to_string()));
        }
        if self.top_n == 0 {
            return Err(ConfigError::ZeroTopN(name.to_string()));
        }
        Ok(())
    }
}

/// Errors that can occur during config or lexicon validation
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Exponent '{0}' must be positive")]
    NonPositiveExponent(String),

    #[error("Weight '{0}' cannot be negative")]
    NegativeWeight(String),

    #[error("Total weight cannot be zero")]
    ZeroTotalWeight,

    #[error("Score range is empty: min {min} must be below max {max}")]
    InvalidScoreRange { min: u8, max: u8 },

    #[error("Neutral threshold {neutral} is above resonance threshold {resonance}")]
    ThresholdOrder { neutral: u8, resonance: u8 },

    #[error("Threshold {threshold} lies outside the score range {min}..={max}")]
    ThresholdOutOfRange { threshold: u8, min: u8, max: u8 },

    #[error("Ranking '{0}' has a negative threshold")]
    NegativeThreshold(String),

    #[error("Ranking '{0}' must keep at least one candidate")]
    ZeroTopN(String),

    #[error("Lexicon cannot be empty")]
    EmptyLexicon,

    #[error("Radar dimension '{0}' has no keywords")]
    EmptyDimension(String),

    #[error("Radar dimension '{0}' is defined twice")]
    DuplicateDimension(String),
}
