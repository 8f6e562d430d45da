//! # FlavorLab
//!
//! A flavor pairing engine built on shared flavor descriptors.
//!
//! FlavorLab scores how strongly two ingredients resonate from the overlap of
//! their aromatic descriptor sets, classifies the pair, and explains the
//! result: shared and unique notes, the lipophilic/hydrophilic balance of the
//! combination, sensory radar profiles, and third ingredients that bridge or
//! contrast with the pair.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! flavorlab --data ingredients.json pair Coffee Strawberry
//! flavorlab --data ingredients.json --plant-based analyze Coffee Strawberry Basil --ratio 50 --ratio 30 --ratio 20
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use flavorlab::prelude::*;
//!
//! let rows = vec![
//!     IngredientRow::new("Coffee", "Beverage").with_flavor_profiles("roasted,bitter,cocoa"),
//!     IngredientRow::new("Strawberry", "Fruit").with_flavors("sweet@fruity@berry"),
//!     IngredientRow::new("Chocolate", "Sweets").with_flavor_profiles("cocoa,sweet,creamy"),
//! ];
//! let (table, _stats) = IngredientTable::from_rows(rows);
//!
//! let engine = AnalysisEngine::default();
//! let selection = ["Coffee", "Strawberry"];
//! let analysis = PairAnalysis::build(&table, &selection, &BlendRatios::equal(&selection), &engine).unwrap();
//!
//! assert_eq!(analysis.comparison.kind, PairKind::Contrast);
//! assert_eq!(analysis.bridges[0].name, "Chocolate");
//! ```
//!
//! ## Crate Structure
//!
//! - `flavorlab-core` - Descriptor sets, ingredients, the immutable table, filters, blend ratios
//! - `flavorlab-similarity` - Pair scoring, polarity, radar, bridges/contrasts, analysis reports
//! - `flavorlab-storage` - JSON loading and the table snapshot cache

// Re-export core types
pub use flavorlab_core::{
    DescriptorSet, Ingredient, IngredientRow, IngredientTable, TableStats,
    FilterCondition, IngredientFilter,
    BlendRatios, BlendRole,
    Error, Result,
};

// Re-export the engine
pub use flavorlab_similarity::{
    score_pair, classify_polarity, radar_values, find_bridges, find_contrasts,
    AnalysisEngine, PairAnalysis, PairComparison, PairKind, PairScorer,
    PolarityKind, PolarityProfile, RadarProfile, Bridge, Contrast,
    ScoringConfig, PolarityLexicon, RadarLexicon,
};

// Re-export storage
pub use flavorlab_storage::TableStore;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        DescriptorSet, Ingredient, IngredientRow, IngredientTable,
        FilterCondition, IngredientFilter,
        BlendRatios, BlendRole,
        Error, Result,
        score_pair, AnalysisEngine, PairAnalysis, PairComparison, PairKind,
        PolarityKind, RadarProfile, Bridge, Contrast,
        ScoringConfig, PolarityLexicon, RadarLexicon,
        TableStore,
    };
}
