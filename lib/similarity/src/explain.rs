//! Full analysis of an ingredient selection
//!
//! Bundles every engine output for a 2-4 ingredient selection into plain,
//! serializable data for the presentation layer: pair comparison, polarity of
//! the combined vocabulary, blend-weighted radar profiles, bridges, contrasts
//! and the score matrix.

use crate::config::{ConfigError, ScoringConfig};
use crate::lexicon::{PolarityLexicon, RadarLexicon};
use crate::pair::{PairComparison, PairScorer};
use crate::polarity::{classify_polarity, PolarityProfile};
use crate::radar::{radar_values, RadarProfile};
use crate::rank::{find_bridges, find_contrasts, Bridge, Contrast};
use flavorlab_core::{
    validate_selection, BlendRatios, BlendRole, DescriptorSet, Ingredient, IngredientTable, Result,
};
use serde::Serialize;

/// Scoring configuration and lexicons used together
#[derive(Debug, Clone, Default)]
pub struct AnalysisEngine {
    config: ScoringConfig,
    scorer: PairScorer,
    polarity: PolarityLexicon,
    radar: RadarLexicon,
}

impl AnalysisEngine {
    /// Validate the parts and build an engine
    pub fn new(
        mut config: ScoringConfig,
        polarity: PolarityLexicon,
        radar: RadarLexicon,
    ) -> std::result::Result<Self, ConfigError> {
        config.validate_and_normalize()?;
        polarity.validate()?;
        radar.validate()?;
        Ok(Self {
            scorer: PairScorer::new(config.pair.clone()),
            config,
            polarity,
            radar,
        })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn polarity_lexicon(&self) -> &PolarityLexicon {
        &self.polarity
    }

    pub fn radar_lexicon(&self) -> &RadarLexicon {
        &self.radar
    }

    pub fn compare(&self, a: &DescriptorSet, b: &DescriptorSet) -> PairComparison {
        self.scorer.score(a, b)
    }

    pub fn polarity(&self, descriptors: &DescriptorSet) -> PolarityProfile {
        classify_polarity(descriptors, &self.polarity)
    }

    pub fn radar(&self, descriptors: &DescriptorSet) -> RadarProfile {
        radar_values(descriptors, &self.radar)
    }

    /// Bridges for a pair over the whole table
    pub fn bridges(
        &self,
        table: &IngredientTable,
        a: &DescriptorSet,
        b: &DescriptorSet,
        exclude: &[&str],
    ) -> Vec<Bridge> {
        find_bridges(table.iter(), a, b, exclude, &self.config.bridge)
    }

    /// Contrasts for a pair over the whole table
    pub fn contrasts(
        &self,
        table: &IngredientTable,
        a: &DescriptorSet,
        b: &DescriptorSet,
        exclude: &[&str],
    ) -> Vec<Contrast> {
        find_contrasts(table.iter(), a, b, exclude, &self.config.contrast)
    }

    /// Score matrix for a list of ingredients, in input order
    pub fn matrix(&self, ingredients: &[&Ingredient]) -> SimilarityMatrix {
        let sets: Vec<&DescriptorSet> = ingredients.iter().map(|i| &i.descriptors).collect();
        SimilarityMatrix {
            names: ingredients.iter().map(|i| i.name.clone()).collect(),
            scores: self.scorer.matrix(&sets),
        }
    }
}

/// Pairwise scores of a selection; `scores[i][j]` compares `names[i]` and `names[j]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityMatrix {
    pub names: Vec<String>,
    pub scores: Vec<Vec<u8>>,
}

/// Per-ingredient part of an analysis
#[derive(Debug, Clone, Serialize)]
pub struct IngredientSummary {
    pub name: String,
    pub category: String,
    pub descriptor_count: usize,
    /// First descriptors in sorted order
    pub top_descriptors: Vec<String>,
    pub share: f64,
    pub role: BlendRole,
    /// Radar profile weighted by the blend share
    pub radar: RadarProfile,
}

/// Number of descriptors listed per ingredient summary
pub const SUMMARY_DESCRIPTORS: usize = 10;

/// Everything the engine can say about a selection
#[derive(Debug, Clone, Serialize)]
pub struct PairAnalysis {
    pub ingredients: Vec<IngredientSummary>,
    /// Comparison of the first two selected ingredients
    pub comparison: PairComparison,
    /// Polarity of the first two ingredients' combined descriptors
    pub polarity: PolarityProfile,
    pub bridges: Vec<Bridge>,
    pub contrasts: Vec<Contrast>,
    /// Present when more than two ingredients are selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<SimilarityMatrix>,
}

impl PairAnalysis {
    /// Analyze a selection of 2-4 distinct ingredients
    pub fn build<S: AsRef<str>>(
        table: &IngredientTable,
        selection: &[S],
        ratios: &BlendRatios,
        engine: &AnalysisEngine,
    ) -> Result<Self> {
        validate_selection(selection)?;
        let selected: Vec<&Ingredient> = selection
            .iter()
            .map(|name| table.require(name.as_ref()))
            .collect::<Result<_>>()?;
        let names: Vec<&str> = selected.iter().map(|i| i.name.as_str()).collect();

        let (first, second) = (selected[0], selected[1]);
        let a = &first.descriptors;
        let b = &second.descriptors;

        let ingredients = selected
            .iter()
            .map(|i| {
                let share = ratios.share(&i.name);
                IngredientSummary {
                    name: i.name.clone(),
                    category: i.category.clone(),
                    descriptor_count: i.descriptor_count(),
                    top_descriptors: i
                        .descriptors
                        .top(SUMMARY_DESCRIPTORS)
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                    share,
                    role: BlendRole::from_share(share),
                    radar: engine.radar(&i.descriptors).scaled(share, selected.len()),
                }
            })
            .collect();

        Ok(Self {
            ingredients,
            comparison: engine.compare(a, b),
            polarity: engine.polarity(&a.union(b)),
            bridges: engine.bridges(table, a, b, &names),
            contrasts: engine.contrasts(table, a, b, &names),
            matrix: (selected.len() > 2).then(|| engine.matrix(&selected)),
        })
    }
}

/// Anything ranked by a normalized score
pub trait Scored {
    fn score(&self) -> f64;
}

impl Scored for Bridge {
    fn score(&self) -> f64 {
        self.score
    }
}

impl Scored for Contrast {
    fn score(&self) -> f64 {
        self.score
    }
}

/// Ranked results with summary statistics
#[derive(Debug, Clone, Serialize)]
pub struct RankedResponse<T> {
    pub result: Vec<T>,
    pub stats: RankingStats,
}

impl<T: Scored> RankedResponse<T> {
    pub fn new(result: Vec<T>, candidates_count: usize) -> Self {
        let scores: Vec<f64> = result.iter().map(Scored::score).collect();
        Self {
            stats: RankingStats::compute(&scores, candidates_count),
            result,
        }
    }
}

/// Summary statistics over a ranked list of scores
#[derive(Debug, Clone, Serialize)]
pub struct RankingStats {
    /// Number of candidates considered
    pub candidates_count: usize,
    /// Number of results returned
    pub results_count: usize,
    /// Average normalized score of results
    pub avg_score: f64,
}

impl RankingStats {
    pub fn compute(scores: &[f64], candidates_count: usize) -> Self {
        let avg_score = if scores.is_empty() {
            0.0
        } else {
            scores.iter().sum::<f64>() / scores.len() as f64
        };
        Self {
            candidates_count,
            results_count: scores.len(),
            avg_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::RadarDimension;
    use crate::pair::PairKind;
    use flavorlab_core::{Error, IngredientRow};

    fn create_test_table() -> IngredientTable {
        let (table, _) = IngredientTable::from_rows(vec![
            IngredientRow::new("Coffee", "Beverage").with_flavor_profiles("roasted,bitter,cocoa,nutty,smoky"),
            IngredientRow::new("Strawberry", "Fruit").with_flavor_profiles("sweet,fruity,berry,green,fresh"),
            IngredientRow::new("Chocolate", "Sweets").with_flavors("cocoa@sweet@roasted@creamy"),
            IngredientRow::new("Raspberry", "Fruit").with_flavors("berry,fruity,sour"),
            IngredientRow::new("Seaweed", "Plant").with_flavors("marine@iodine@salty"),
        ]);
        table
    }

    #[test]
    fn test_build_pair_analysis() {
        let table = create_test_table();
        let engine = AnalysisEngine::default();
        let selection = ["Coffee", "Strawberry"];
        let ratios = BlendRatios::equal(&selection);

        let analysis = PairAnalysis::build(&table, &selection, &ratios, &engine).unwrap();

        assert_eq!(analysis.ingredients.len(), 2);
        assert_eq!(analysis.comparison.kind, PairKind::Contrast);
        assert!(analysis.comparison.shared.is_empty());
        assert_eq!(analysis.bridges[0].name, "Chocolate");
        assert_eq!(analysis.bridges[0].score, 1.0);
        assert!(!analysis.contrasts.iter().any(|c| c.name == "Coffee" || c.name == "Strawberry"));
        assert!(analysis.matrix.is_none());
        assert!(analysis.polarity.has_signal());
    }

    #[test]
    fn test_build_with_matrix_and_roles() {
        let table = create_test_table();
        let engine = AnalysisEngine::default();
        let selection = ["Coffee", "Strawberry", "Raspberry"];
        let ratios = BlendRatios::normalize(&[("Coffee", 60), ("Strawberry", 30), ("Raspberry", 10)]);

        let analysis = PairAnalysis::build(&table, &selection, &ratios, &engine).unwrap();

        let matrix = analysis.matrix.as_ref().unwrap();
        assert_eq!(matrix.names, vec!["Coffee", "Strawberry", "Raspberry"]);
        assert_eq!(matrix.scores.len(), 3);
        assert!(matrix.scores[1][2] > matrix.scores[0][2]);
        assert_eq!(analysis.ingredients[0].role, BlendRole::Dominant);
        assert_eq!(analysis.ingredients[1].role, BlendRole::Supporting);
        assert_eq!(analysis.ingredients[2].role, BlendRole::Accent);
    }

    #[test]
    fn test_build_errors() {
        let table = create_test_table();
        let engine = AnalysisEngine::default();

        let err = PairAnalysis::build(&table, &["Coffee"], &BlendRatios::equal(&["Coffee"]), &engine);
        assert!(matches!(err, Err(Error::TooFewIngredients { .. })));

        let err = PairAnalysis::build(&table, &["Coffee", "Saffron"], &BlendRatios::equal(&["Coffee"]), &engine);
        assert!(matches!(err, Err(Error::IngredientNotFound(ref n)) if n == "Saffron"));
    }

    #[test]
    fn test_engine_rejects_invalid_parts() {
        let mut config = ScoringConfig::default();
        config.pair.score_min = 99;
        assert!(AnalysisEngine::new(config, PolarityLexicon::default(), RadarLexicon::default()).is_err());

        let radar = RadarLexicon::new(vec![RadarDimension::new("umami", &[])]);
        assert!(AnalysisEngine::new(ScoringConfig::default(), PolarityLexicon::default(), radar).is_err());

        // An unreachable resonance band would misclassify identical sets
        let mut config = ScoringConfig::default();
        config.pair.resonance_threshold = 120;
        config.pair.neutral_threshold = 100;
        assert!(matches!(
            AnalysisEngine::new(config, PolarityLexicon::default(), RadarLexicon::default()),
            Err(ConfigError::ThresholdOutOfRange { .. })
        ));
    }

    #[test]
    fn test_engine_rankings_follow_config_top_n() {
        let table = create_test_table();
        let mut config = ScoringConfig::default();
        config.contrast.top_n = 1;
        let engine = AnalysisEngine::new(config, PolarityLexicon::default(), RadarLexicon::default()).unwrap();
        let a = &table.get("Coffee").unwrap().descriptors;
        let b = &table.get("Strawberry").unwrap().descriptors;

        let contrasts = engine.contrasts(&table, a, b, &["Coffee", "Strawberry"]);
        assert_eq!(contrasts.len(), 1);
        assert_eq!(contrasts[0].name, "Seaweed");
        assert_eq!(contrasts[0].score, 1.0);
    }

    #[test]
    fn test_analysis_serializes_plain_labels() {
        let table = create_test_table();
        let engine = AnalysisEngine::default();
        let selection = ["Coffee", "Chocolate"];
        let analysis = PairAnalysis::build(&table, &selection, &BlendRatios::equal(&selection), &engine).unwrap();

        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json["comparison"]["type"].is_string());
        assert!(json["polarity"]["type"].is_string());
        assert_eq!(json["ingredients"][0]["role"], "dominant");
        assert!(json.get("matrix").is_none());
    }

    #[test]
    fn test_ranked_response() {
        let table = create_test_table();
        let engine = AnalysisEngine::default();
        let a = &table.get("Coffee").unwrap().descriptors;
        let b = &table.get("Strawberry").unwrap().descriptors;

        let response = RankedResponse::new(engine.bridges(&table, a, b, &["Coffee", "Strawberry"]), table.len() - 2);
        assert_eq!(response.stats.candidates_count, 3);
        assert_eq!(response.stats.results_count, response.result.len());

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"result\""));
        assert!(json.contains("\"stats\""));
    }

    #[test]
    fn test_ranking_stats() {
        let stats = RankingStats::compute(&[1.0, 0.5], 10);
        assert_eq!(stats.results_count, 2);
        assert!((stats.avg_score - 0.75).abs() < 1e-9);

        let empty = RankingStats::compute(&[], 3);
        assert_eq!(empty.avg_score, 0.0);
        assert_eq!(empty.candidates_count, 3);
    }
}
