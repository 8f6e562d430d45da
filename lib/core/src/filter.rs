// Category filters producing table views
use serde::{Deserialize, Serialize};
use crate::Ingredient;

/// Category keywords that mark an ingredient as animal-derived
pub const ANIMAL_CATEGORY_KEYWORDS: [&str; 8] = [
    "meat", "dairy", "fish", "seafood", "pork", "beef", "chicken", "egg",
];

pub trait IngredientFilter {
    fn matches(&self, ingredient: &Ingredient) -> bool;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterCondition {
    /// Category equals one of the listed values. An empty list matches everything.
    CategoryIn(Vec<String>),
    /// Lowercased category contains none of the keywords
    ExcludeCategoryKeywords(Vec<String>),
    And(Vec<FilterCondition>),
    Not(Box<FilterCondition>),
}

impl FilterCondition {
    /// Condition that keeps only plant-based categories
    pub fn plant_based() -> Self {
        FilterCondition::ExcludeCategoryKeywords(
            ANIMAL_CATEGORY_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        )
    }

    /// Condition that matches every ingredient
    pub fn any() -> Self {
        FilterCondition::And(Vec::new())
    }

    fn matches_condition(condition: &FilterCondition, ingredient: &Ingredient) -> bool {
        match condition {
            FilterCondition::CategoryIn(categories) => {
                categories.is_empty() || categories.iter().any(|c| c == &ingredient.category)
            }
            FilterCondition::ExcludeCategoryKeywords(keywords) => {
                let category = ingredient.category.to_lowercase();
                !keywords.iter().any(|k| category.contains(k.to_lowercase().as_str()))
            }
            FilterCondition::And(conditions) => {
                conditions.iter().all(|c| Self::matches_condition(c, ingredient))
            }
            FilterCondition::Not(inner) => !Self::matches_condition(inner, ingredient),
        }
    }
}

impl IngredientFilter for FilterCondition {
    fn matches(&self, ingredient: &Ingredient) -> bool {
        Self::matches_condition(self, ingredient)
    }
}

impl<F: Fn(&Ingredient) -> bool> IngredientFilter for F {
    fn matches(&self, ingredient: &Ingredient) -> bool {
        self(ingredient)
    }
}
