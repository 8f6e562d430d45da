//! Blend selection and proportions
//!
//! A blend is a selection of 2 to 4 ingredients with relative weights. Raw
//! weights come from the presentation layer (0-100 sliders); only their
//! normalized shares are used downstream.

use serde::{Deserialize, Serialize};
use crate::{Error, Result};

pub const MIN_SELECTION: usize = 2;
pub const MAX_SELECTION: usize = 4;

/// Share at or above which an ingredient leads the blend
pub const DOMINANT_SHARE: f64 = 0.40;
/// Share at or below which an ingredient only accents the blend
pub const ACCENT_SHARE: f64 = 0.15;

/// Check that a selection has 2-4 distinct names
pub fn validate_selection<S: AsRef<str>>(names: &[S]) -> Result<()> {
    if names.len() < MIN_SELECTION {
        return Err(Error::TooFewIngredients { min: MIN_SELECTION, actual: names.len() });
    }
    if names.len() > MAX_SELECTION {
        return Err(Error::TooManyIngredients { max: MAX_SELECTION, actual: names.len() });
    }
    for (idx, name) in names.iter().enumerate() {
        if names[..idx].iter().any(|n| n.as_ref() == name.as_ref()) {
            return Err(Error::DuplicateSelection(name.as_ref().to_string()));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendRole {
    Dominant,
    Supporting,
    Accent,
}

impl BlendRole {
    pub fn from_share(share: f64) -> Self {
        if share >= DOMINANT_SHARE {
            BlendRole::Dominant
        } else if share <= ACCENT_SHARE {
            BlendRole::Accent
        } else {
            BlendRole::Supporting
        }
    }
}

/// Normalized blend proportions, in selection order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendRatios {
    shares: Vec<(String, f64)>,
}

impl BlendRatios {
    /// Equal shares for every selected ingredient
    pub fn equal<S: AsRef<str>>(names: &[S]) -> Self {
        let n = names.len().max(1) as f64;
        Self {
            shares: names.iter().map(|name| (name.as_ref().to_string(), 1.0 / n)).collect(),
        }
    }

    /// Default raw slider weight for a selection of `n` ingredients
    pub fn default_weight(n: usize) -> u32 {
        100 / n.max(1) as u32
    }

    /// Normalize raw weights so they sum to 1.0.
    /// A zero total falls back to equal shares.
    pub fn normalize<S: AsRef<str>>(weights: &[(S, u32)]) -> Self {
        let total: u64 = weights.iter().map(|(_, w)| u64::from(*w)).sum();
        if total == 0 {
            let names: Vec<&str> = weights.iter().map(|(n, _)| n.as_ref()).collect();
            return Self::equal(&names);
        }
        Self {
            shares: weights
                .iter()
                .map(|(name, w)| (name.as_ref().to_string(), f64::from(*w) / total as f64))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// Normalized share of `name`; unknown names get an equal share
    pub fn share(&self, name: &str) -> f64 {
        self.shares
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| *s)
            .unwrap_or_else(|| 1.0 / self.shares.len().max(1) as f64)
    }

    pub fn role(&self, name: &str) -> BlendRole {
        BlendRole::from_share(self.share(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.shares.iter().map(|(n, s)| (n.as_str(), *s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_selection() {
        assert!(validate_selection(&["a", "b"]).is_ok());
        assert!(matches!(validate_selection(&["a"]), Err(Error::TooFewIngredients { .. })));
        assert!(matches!(
            validate_selection(&["a", "b", "c", "d", "e"]),
            Err(Error::TooManyIngredients { .. })
        ));
        assert!(matches!(validate_selection(&["a", "b", "a"]), Err(Error::DuplicateSelection(_))));
    }

    #[test]
    fn test_normalize_sums_to_one() {
        let ratios = BlendRatios::normalize(&[("Coffee", 60), ("Strawberry", 20)]);
        assert!((ratios.share("Coffee") - 0.75).abs() < 1e-9);
        assert!((ratios.share("Strawberry") - 0.25).abs() < 1e-9);
        let total: f64 = ratios.iter().map(|(_, s)| s).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_total_falls_back_to_equal() {
        let ratios = BlendRatios::normalize(&[("a", 0), ("b", 0), ("c", 0), ("d", 0)]);
        assert!((ratios.share("c") - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_name_gets_equal_share() {
        let ratios = BlendRatios::normalize(&[("a", 90), ("b", 10)]);
        assert!((ratios.share("z") - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_roles() {
        let ratios = BlendRatios::normalize(&[("a", 50), ("b", 40), ("c", 10)]);
        assert_eq!(ratios.role("a"), BlendRole::Dominant);
        assert_eq!(ratios.role("b"), BlendRole::Dominant);
        assert_eq!(ratios.role("c"), BlendRole::Accent);
        assert_eq!(BlendRole::from_share(0.25), BlendRole::Supporting);
        assert_eq!(BlendRatios::default_weight(3), 33);
    }
}
