//! Radar dimension scoring
//!
//! Maps a descriptor set onto the named sensory axes of a [`RadarLexicon`].
//! Keyword hits go through a saturating step function rather than a linear
//! scale, so a single incidental match shows as a weak presence instead of
//! dominating the chart.

use crate::lexicon::RadarLexicon;
use flavorlab_core::DescriptorSet;
use serde::{Deserialize, Serialize};

/// Upper bound of every radar axis
pub const RADAR_MAX: f64 = 10.0;

/// Score for 1, 2, 3 and 4 keyword hits
const STEP_VALUES: [f64; 4] = [2.5, 4.5, 6.0, 7.0];
/// Floor of the proportional band reached at 5+ hits
const SATURATION_BASE: f64 = 7.5;

/// Step function from keyword hits to an axis value in [0, 10].
///
/// 0 → 0, 1 → 2.5, 2 → 4.5, 3 → 6.0, 4 → 7.0, then from 5 hits the value
/// rises from 7.5 toward 10 with the fraction of the dimension's keywords
/// matched. Non-decreasing in `hits`.
pub fn step_score(hits: usize, keyword_count: usize) -> f64 {
    match hits {
        0 => 0.0,
        1..=4 => STEP_VALUES[hits - 1],
        _ => {
            let fraction = hits as f64 / keyword_count.max(hits) as f64;
            (SATURATION_BASE + (RADAR_MAX - SATURATION_BASE) * fraction).min(RADAR_MAX)
        }
    }
}

/// One axis of a radar profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarAxis {
    pub name: String,
    pub value: f64,
}

/// Axis values in lexicon order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RadarProfile {
    axes: Vec<RadarAxis>,
}

impl RadarProfile {
    pub fn axes(&self) -> &[RadarAxis] {
        &self.axes
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.axes.iter().find(|a| a.name == name).map(|a| a.value)
    }

    pub fn values(&self) -> Vec<f64> {
        self.axes.iter().map(|a| a.value).collect()
    }

    pub fn is_zero(&self) -> bool {
        self.axes.iter().all(|a| a.value == 0.0)
    }

    /// Weight the profile by an ingredient's blend share.
    ///
    /// Each value is multiplied by `0.5 + share * 0.5 * selection_len`, so an
    /// ingredient at an equal share keeps its values, and capped at 10.
    pub fn scaled(&self, share: f64, selection_len: usize) -> RadarProfile {
        let factor = 0.5 + share * 0.5 * selection_len as f64;
        RadarProfile {
            axes: self
                .axes
                .iter()
                .map(|a| RadarAxis {
                    name: a.name.clone(),
                    value: (a.value * factor).min(RADAR_MAX),
                })
                .collect(),
        }
    }
}

/// Score a descriptor set on every dimension of the lexicon
pub fn radar_values(descriptors: &DescriptorSet, lexicon: &RadarLexicon) -> RadarProfile {
    let axes = lexicon
        .dimensions()
        .iter()
        .map(|dim| {
            let hits = dim.keywords.iter().filter(|k| descriptors.contains(k)).count();
            RadarAxis {
                name: dim.name.clone(),
                value: step_score(hits, dim.keywords.len()),
            }
        })
        .collect();
    RadarProfile { axes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::RadarDimension;

    fn set(tokens: &[&str]) -> DescriptorSet {
        tokens.iter().collect()
    }

    #[test]
    fn test_step_breakpoints() {
        assert_eq!(step_score(0, 8), 0.0);
        assert_eq!(step_score(1, 8), 2.5);
        assert_eq!(step_score(2, 8), 4.5);
        assert_eq!(step_score(3, 8), 6.0);
        assert_eq!(step_score(4, 8), 7.0);
        assert!((step_score(5, 10) - 8.75).abs() < 1e-9);
        assert_eq!(step_score(8, 8), 10.0);
    }

    #[test]
    fn test_step_monotonic_and_capped() {
        for keywords in 1..15 {
            let mut previous = 0.0;
            for hits in 0..=keywords {
                let value = step_score(hits, keywords);
                assert!(value >= previous, "hits {} of {} decreased", hits, keywords);
                assert!(value <= RADAR_MAX);
                previous = value;
            }
        }
    }

    #[test]
    fn test_hits_above_keyword_count_stay_capped() {
        assert_eq!(step_score(12, 6), RADAR_MAX);
    }

    #[test]
    fn test_radar_values_default_lexicon() {
        let profile = radar_values(
            &set(&["sweet", "honey", "vanilla", "coffee", "smoky"]),
            &RadarLexicon::default(),
        );

        assert_eq!(profile.axes().len(), 8);
        assert_eq!(profile.get("sweet"), Some(6.0));
        assert_eq!(profile.get("roasted"), Some(2.5));
        assert_eq!(profile.get("woody_smoky"), Some(2.5));
        assert_eq!(profile.get("floral"), Some(0.0));
        assert_eq!(profile.get("unknown"), None);
    }

    #[test]
    fn test_radar_monotonic_in_matches() {
        let lexicon = RadarLexicon::new(vec![RadarDimension::new(
            "spicy",
            &["spicy", "pepper", "cinnamon", "ginger", "clove", "mustard"],
        )]);
        let mut tokens: Vec<&str> = vec!["unrelated"];
        let mut previous = radar_values(&set(&tokens), &lexicon).get("spicy").unwrap();
        for keyword in ["spicy", "pepper", "cinnamon", "ginger", "clove", "mustard"] {
            tokens.push(keyword);
            let value = radar_values(&set(&tokens), &lexicon).get("spicy").unwrap();
            assert!(value >= previous);
            assert!(value <= RADAR_MAX);
            previous = value;
        }
        assert_eq!(previous, RADAR_MAX);
    }

    #[test]
    fn test_mixed_case_keywords_match() {
        let lexicon: RadarLexicon =
            serde_json::from_str(r#"[{"name": "sweet", "keywords": ["Sweet", "Honey"]}]"#).unwrap();
        let profile = radar_values(&set(&["sweet", "honey"]), &lexicon);
        assert_eq!(profile.get("sweet"), Some(4.5));
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        let lexicon = RadarLexicon::new(vec![RadarDimension::new(
            "sweet",
            &["sweet", "sweet", "sweet", "sweet", "sweet"],
        )]);
        let profile = radar_values(&set(&["sweet"]), &lexicon);
        assert_eq!(profile.get("sweet"), Some(2.5));
    }

    #[test]
    fn test_empty_set_is_all_zero() {
        let profile = radar_values(&DescriptorSet::new(), &RadarLexicon::default());
        assert!(profile.is_zero());
        assert_eq!(profile.values().len(), 8);
    }

    #[test]
    fn test_scaled_by_share() {
        let profile = radar_values(&set(&["sweet", "honey"]), &RadarLexicon::default());

        let equal = profile.scaled(0.5, 2);
        assert_eq!(equal.get("sweet"), Some(4.5));

        let dominant = profile.scaled(0.9, 2);
        assert!((dominant.get("sweet").unwrap() - 6.3).abs() < 1e-9);

        let saturated = radar_values(&set(&["sweet", "honey", "sugar", "candy", "caramel"]), &RadarLexicon::default())
            .scaled(1.0, 4);
        assert_eq!(saturated.get("sweet"), Some(RADAR_MAX));
    }
}
