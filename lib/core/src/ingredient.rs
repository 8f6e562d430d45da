use serde::{Deserialize, Serialize};
use crate::descriptor::DescriptorSet;

/// A raw table row as produced by an external loader
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngredientRow {
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Comma-delimited descriptors
    #[serde(default)]
    pub flavor_profiles: Option<String>,
    /// Descriptors delimited by `@` and `,`
    #[serde(default)]
    pub flavors: Option<String>,
}

impl IngredientRow {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            flavor_profiles: None,
            flavors: None,
        }
    }

    pub fn with_flavor_profiles(mut self, text: impl Into<String>) -> Self {
        self.flavor_profiles = Some(text.into());
        self
    }

    pub fn with_flavors(mut self, text: impl Into<String>) -> Self {
        self.flavors = Some(text.into());
        self
    }
}

/// An ingredient with its normalized descriptor set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub category: String,
    pub descriptors: DescriptorSet,
}

impl Ingredient {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>, descriptors: DescriptorSet) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            descriptors,
        }
    }

    /// Build a record from a raw row.
    /// Returns `None` when the merged descriptor set is empty.
    pub fn from_row(row: IngredientRow) -> Option<Self> {
        let descriptors = DescriptorSet::from_fields(
            row.flavor_profiles.as_deref(),
            row.flavors.as_deref(),
        );
        if descriptors.is_empty() {
            return None;
        }
        Some(Self {
            name: row.name.trim().to_string(),
            category: row.category.trim().to_string(),
            descriptors,
        })
    }

    #[inline]
    pub fn descriptor_count(&self) -> usize {
        self.descriptors.len()
    }
}
