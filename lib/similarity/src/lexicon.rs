//! Domain lexicons
//!
//! Hand-curated descriptor dictionaries used by the polarity classifier and
//! the radar scorer. They are plain data: the built-in defaults can be
//! replaced by JSON files without touching the scoring code.

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use crate::config::ConfigError;

/// Solubility class of an aroma descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Fat-soluble aroma carrier
    Lipophilic,
    /// Water-soluble aroma carrier
    Hydrophilic,
}

const DEFAULT_LIPOPHILIC: &[&str] = &[
    "fat", "fatty", "oil", "oily", "waxy", "buttery", "butter", "cream", "creamy",
    "lard", "tallow", "resin", "woody", "leather", "smoky", "smoke",
];

const DEFAULT_HYDROPHILIC: &[&str] = &[
    "sweet", "sour", "acid", "citrus", "fruity", "floral", "honey", "alcoholic",
    "wine", "vinegar", "fresh", "green", "sugar",
];

/// Lowercase and trim a lexicon token, matching descriptor normalization
fn normalize(token: &str) -> String {
    token.trim().to_lowercase()
}

/// Descriptor → polarity dictionary. Descriptors not listed are unclassified.
///
/// Keys are normalized on every construction path, JSON included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "AHashMap<String, Polarity>", into = "AHashMap<String, Polarity>")]
pub struct PolarityLexicon {
    entries: AHashMap<String, Polarity>,
}

impl Default for PolarityLexicon {
    fn default() -> Self {
        let entries = DEFAULT_LIPOPHILIC
            .iter()
            .map(|t| (t.to_string(), Polarity::Lipophilic))
            .chain(DEFAULT_HYDROPHILIC.iter().map(|t| (t.to_string(), Polarity::Hydrophilic)))
            .collect();
        Self { entries }
    }
}

impl From<AHashMap<String, Polarity>> for PolarityLexicon {
    fn from(entries: AHashMap<String, Polarity>) -> Self {
        PolarityLexicon::new(entries)
    }
}

impl From<PolarityLexicon> for AHashMap<String, Polarity> {
    fn from(lexicon: PolarityLexicon) -> Self {
        lexicon.entries
    }
}

impl PolarityLexicon {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Polarity)>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(token, polarity)| (normalize(token.as_ref()), polarity))
                .filter(|(token, _)| !token.is_empty())
                .collect(),
        }
    }

    pub fn get(&self, descriptor: &str) -> Option<Polarity> {
        self.entries.get(descriptor).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entries.is_empty() {
            return Err(ConfigError::EmptyLexicon);
        }
        Ok(())
    }
}

/// A named sensory axis defined by its keyword descriptors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarDimension {
    pub name: String,
    pub keywords: Vec<String>,
}

impl RadarDimension {
    pub fn new(name: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
        .normalized()
    }

    /// Keywords lowercased and trimmed, blanks and repeats removed, first
    /// occurrence order kept
    fn normalized(self) -> Self {
        let mut seen = AHashSet::new();
        let keywords = self
            .keywords
            .iter()
            .map(|k| normalize(k))
            .filter(|k| !k.is_empty() && seen.insert(k.clone()))
            .collect();
        Self {
            name: self.name,
            keywords,
        }
    }
}

/// Ordered list of radar dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<RadarDimension>", into = "Vec<RadarDimension>")]
pub struct RadarLexicon {
    dimensions: Vec<RadarDimension>,
}

impl Default for RadarLexicon {
    fn default() -> Self {
        Self {
            dimensions: vec![
                RadarDimension::new("sweet", &[
                    "sweet", "caramel", "honey", "vanilla", "sugar", "butterscotch", "candy",
                    "cotton candy",
                ]),
                RadarDimension::new("roasted", &[
                    "roasted", "baked", "toasted", "caramel", "coffee", "cocoa", "bread", "malt",
                    "popcorn",
                ]),
                RadarDimension::new("fruity", &[
                    "fruity", "berry", "apple", "pear", "peach", "citrus", "tropical", "grape",
                    "banana", "strawberry",
                ]),
                RadarDimension::new("herbal", &[
                    "herbaceous", "herbal", "green", "mint", "thyme", "rosemary", "basil", "dill",
                    "leafy",
                ]),
                RadarDimension::new("woody_smoky", &[
                    "woody", "wood", "smoky", "smoke", "cedar", "oak", "leather", "tobacco",
                    "resin",
                ]),
                RadarDimension::new("spicy", &[
                    "spicy", "pepper", "cinnamon", "ginger", "clove", "mustard", "pungent",
                    "horseradish",
                ]),
                RadarDimension::new("floral", &[
                    "floral", "rose", "jasmine", "lavender", "violet", "lily", "blossom", "jasmin",
                ]),
                RadarDimension::new("fatty_dairy", &[
                    "fatty", "creamy", "buttery", "butter", "cream", "dairy", "milky", "nutty",
                ]),
            ],
        }
    }
}

impl From<Vec<RadarDimension>> for RadarLexicon {
    fn from(dimensions: Vec<RadarDimension>) -> Self {
        RadarLexicon::new(dimensions)
    }
}

impl From<RadarLexicon> for Vec<RadarDimension> {
    fn from(lexicon: RadarLexicon) -> Self {
        lexicon.dimensions
    }
}

impl RadarLexicon {
    pub fn new(dimensions: Vec<RadarDimension>) -> Self {
        Self {
            dimensions: dimensions.into_iter().map(RadarDimension::normalized).collect(),
        }
    }

    pub fn dimensions(&self) -> &[RadarDimension] {
        &self.dimensions
    }

    /// Dimension names in display order
    pub fn names(&self) -> Vec<&str> {
        self.dimensions.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimensions.is_empty() {
            return Err(ConfigError::EmptyLexicon);
        }
        let mut seen = AHashSet::new();
        for dim in &self.dimensions {
            if dim.keywords.is_empty() {
                return Err(ConfigError::EmptyDimension(dim.name.clone()));
            }
            if !seen.insert(dim.name.as_str()) {
                return Err(ConfigError::DuplicateDimension(dim.name.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_polarity_lexicon() {
        let lexicon = PolarityLexicon::default();
        assert_eq!(lexicon.len(), 29);
        assert_eq!(lexicon.get("buttery"), Some(Polarity::Lipophilic));
        assert_eq!(lexicon.get("citrus"), Some(Polarity::Hydrophilic));
        assert_eq!(lexicon.get("umami"), None);
        assert!(lexicon.validate().is_ok());
    }

    #[test]
    fn test_polarity_lexicon_from_json() {
        let lexicon: PolarityLexicon =
            serde_json::from_str(r#"{"oily": "lipophilic", "briny": "hydrophilic"}"#).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.get("briny"), Some(Polarity::Hydrophilic));
    }

    #[test]
    fn test_polarity_lexicon_new_normalizes() {
        let lexicon = PolarityLexicon::new([(" Oily ", Polarity::Lipophilic)]);
        assert_eq!(lexicon.get("oily"), Some(Polarity::Lipophilic));
    }

    #[test]
    fn test_polarity_lexicon_json_is_normalized() {
        let lexicon: PolarityLexicon =
            serde_json::from_str(r#"{" Oily ": "lipophilic", "Sweet": "hydrophilic", " ": "lipophilic"}"#)
                .unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.get("oily"), Some(Polarity::Lipophilic));
        assert_eq!(lexicon.get("sweet"), Some(Polarity::Hydrophilic));
    }

    #[test]
    fn test_radar_lexicon_json_is_normalized() {
        let lexicon: RadarLexicon = serde_json::from_str(
            r#"[{"name": "sweet", "keywords": ["Sweet", " Honey ", "sweet", "SWEET", ""]}]"#,
        )
        .unwrap();
        assert_eq!(lexicon.dimensions()[0].keywords, vec!["sweet", "honey"]);
        assert!(lexicon.validate().is_ok());
    }

    #[test]
    fn test_radar_dimension_drops_repeated_keywords() {
        let dim = RadarDimension::new("sweet", &["sweet", "sweet", "sweet", "sweet", "sweet"]);
        assert_eq!(dim.keywords, vec!["sweet"]);
    }

    #[test]
    fn test_lexicons_serialize_as_plain_data() {
        let lexicon = RadarLexicon::new(vec![RadarDimension::new("floral", &["rose"])]);
        let json = serde_json::to_string(&lexicon).unwrap();
        assert_eq!(json, r#"[{"name":"floral","keywords":["rose"]}]"#);

        let polarity = PolarityLexicon::new([("wax", Polarity::Lipophilic)]);
        assert_eq!(serde_json::to_string(&polarity).unwrap(), r#"{"wax":"lipophilic"}"#);
    }

    #[test]
    fn test_default_radar_lexicon() {
        let lexicon = RadarLexicon::default();
        assert_eq!(lexicon.len(), 8);
        assert_eq!(lexicon.names()[0], "sweet");
        assert!(lexicon.validate().is_ok());
    }

    #[test]
    fn test_radar_lexicon_validation() {
        assert!(matches!(RadarLexicon::new(Vec::new()).validate(), Err(ConfigError::EmptyLexicon)));

        let lexicon = RadarLexicon::new(vec![RadarDimension::new("umami", &[])]);
        assert!(matches!(lexicon.validate(), Err(ConfigError::EmptyDimension(_))));

        let lexicon = RadarLexicon::new(vec![
            RadarDimension::new("sweet", &["sugar"]),
            RadarDimension::new("sweet", &["honey"]),
        ]);
        assert!(matches!(lexicon.validate(), Err(ConfigError::DuplicateDimension(_))));
    }
}
