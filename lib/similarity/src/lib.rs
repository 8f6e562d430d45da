//! # FlavorLab Similarity
//!
//! The resonance scoring engine of FlavorLab.
//!
//! All operations are pure functions of their inputs: descriptor sets, a
//! read-only ingredient table and configuration data. Nothing here fails on
//! empty input; every function falls back to a defined minimum.
//!
//! ## Features
//!
//! - **Pair Scoring**: Bounded resonance score from Jaccard overlap and strict bidirectional coverage
//! - **Polarity**: Lipophilic/hydrophilic majority vote over a descriptor dictionary
//! - **Bridges & Contrasts**: Third ingredients that connect or oppose a pair
//! - **Radar**: Saturating per-axis scores over named sensory dimensions
//! - **Analysis**: One serializable report for a 2-4 ingredient selection
//!
//! ## Example
//!
//! ```rust
//! use flavorlab_similarity::{score_pair, PairKind};
//! use flavorlab_core::DescriptorSet;
//!
//! let a: DescriptorSet = ["sweet", "fruity", "citrus"].iter().collect();
//! let b: DescriptorSet = ["sweet", "fruity", "woody", "smoky"].iter().collect();
//!
//! let result = score_pair(&a, &b);
//! assert_eq!(result.shared, vec!["fruity", "sweet"]);
//! assert_eq!(result.jaccard, 0.4);
//! assert_eq!(result.kind, PairKind::Resonance);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Config    │────>│ PairScorer  │────>│ Comparison  │
//! │ (constants) │     │ (a, b)      │     │ (score/type)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//!       │
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Lexicons   │────>│ Polarity /  │────>│  Analysis   │
//! │ (data)      │     │ Radar       │     │ (report)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │                   ^
//!                     ┌─────────────┐            │
//!                     │ Bridges /   │────────────┘
//!                     │ Contrasts   │
//!                     └─────────────┘
//! ```

pub mod config;
pub mod lexicon;
pub mod pair;
pub mod polarity;
pub mod radar;
pub mod rank;
pub mod explain;

// Re-export main types for convenience
pub use config::{ScoringConfig, PairScoring, RankingConfig, ConfigError};
pub use lexicon::{Polarity, PolarityLexicon, RadarDimension, RadarLexicon};
pub use pair::{score_pair, PairComparison, PairKind, PairScorer};
pub use polarity::{classify_polarity, PolarityKind, PolarityProfile};
pub use radar::{radar_values, step_score, RadarAxis, RadarProfile, RADAR_MAX};
pub use rank::{find_bridges, find_contrasts, Bridge, Contrast};
pub use explain::{
    AnalysisEngine, IngredientSummary, PairAnalysis, RankedResponse, RankingStats, Scored,
    SimilarityMatrix,
};
