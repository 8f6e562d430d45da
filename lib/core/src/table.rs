use ahash::AHashMap;
use serde::Serialize;
use crate::{Error, Ingredient, IngredientFilter, IngredientRow, Result};

/// Counts collected while building a table from raw rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableStats {
    pub rows_total: usize,
    pub rows_usable: usize,
    pub dropped_empty: usize,
    pub dropped_duplicate: usize,
}

/// Immutable ingredient table.
///
/// Built once from raw rows; records are never mutated afterwards.
/// Every record holds at least one descriptor.
#[derive(Debug, Clone, Default)]
pub struct IngredientTable {
    ingredients: Vec<Ingredient>,
    by_name: AHashMap<String, usize>,
}

impl IngredientTable {
    /// Build a table from raw rows.
    ///
    /// Rows without descriptors are dropped. For repeated names the first
    /// usable row wins and later ones are dropped.
    pub fn from_rows<I>(rows: I) -> (Self, TableStats)
    where
        I: IntoIterator<Item = IngredientRow>,
    {
        let mut stats = TableStats::default();
        let mut table = IngredientTable::default();

        for row in rows {
            stats.rows_total += 1;
            let ingredient = match Ingredient::from_row(row) {
                Some(i) => i,
                None => {
                    stats.dropped_empty += 1;
                    continue;
                }
            };
            if table.by_name.contains_key(&ingredient.name) {
                stats.dropped_duplicate += 1;
                continue;
            }
            table.push(ingredient);
        }

        stats.rows_usable = table.len();
        (table, stats)
    }

    /// Build a table from already-normalized records, applying the same
    /// empty/duplicate rules as [`IngredientTable::from_rows`]
    pub fn from_ingredients<I>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = Ingredient>,
    {
        let mut table = IngredientTable::default();
        for ingredient in ingredients {
            if ingredient.descriptors.is_empty() || table.by_name.contains_key(&ingredient.name) {
                continue;
            }
            table.push(ingredient);
        }
        table
    }

    fn push(&mut self, ingredient: Ingredient) {
        self.by_name.insert(ingredient.name.clone(), self.ingredients.len());
        self.ingredients.push(ingredient);
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Ingredient> {
        self.by_name.get(name).map(|&idx| &self.ingredients[idx])
    }

    /// Like [`IngredientTable::get`], but a missing name is an error
    pub fn require(&self, name: &str) -> Result<&Ingredient> {
        self.get(name)
            .ok_or_else(|| Error::IngredientNotFound(name.to_string()))
    }

    /// Iterate records in load order
    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter()
    }

    /// Sorted ingredient names
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.ingredients.iter().map(|i| i.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Sorted distinct categories
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.ingredients.iter().map(|i| i.category.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }

    /// Records matching `filter`, in load order
    pub fn view<F: IngredientFilter + ?Sized>(&self, filter: &F) -> Vec<&Ingredient> {
        self.ingredients.iter().filter(|i| filter.matches(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FilterCondition;

    fn rows() -> Vec<IngredientRow> {
        vec![
            IngredientRow::new("Coffee", "Beverage").with_flavor_profiles("bitter,roasted"),
            IngredientRow::new("Water", "Beverage"),
            IngredientRow::new("Strawberry", "Fruit").with_flavors("sweet@fruity"),
            IngredientRow::new("Coffee", "Beverage").with_flavor_profiles("sour"),
            IngredientRow::new("Butter", "Dairy").with_flavor_profiles("buttery,creamy"),
        ]
    }

    #[test]
    fn test_from_rows_stats() {
        let (table, stats) = IngredientTable::from_rows(rows());

        assert_eq!(stats.rows_total, 5);
        assert_eq!(stats.rows_usable, 3);
        assert_eq!(stats.dropped_empty, 1);
        assert_eq!(stats.dropped_duplicate, 1);
        assert_eq!(table.len(), 3);
        assert!(table.iter().all(|i| i.descriptor_count() >= 1));
    }

    #[test]
    fn test_first_duplicate_wins() {
        let (table, _) = IngredientTable::from_rows(rows());
        let coffee = table.get("Coffee").unwrap();
        assert!(coffee.descriptors.contains("roasted"));
        assert!(!coffee.descriptors.contains("sour"));
    }

    #[test]
    fn test_require_missing() {
        let (table, _) = IngredientTable::from_rows(rows());
        assert!(matches!(table.require("Saffron"), Err(Error::IngredientNotFound(_))));
        assert!(table.require("Butter").is_ok());
    }

    #[test]
    fn test_names_and_categories_sorted() {
        let (table, _) = IngredientTable::from_rows(rows());
        assert_eq!(table.names(), vec!["Butter", "Coffee", "Strawberry"]);
        assert_eq!(table.categories(), vec!["Beverage", "Dairy", "Fruit"]);
    }

    #[test]
    fn test_view_does_not_copy_records() {
        let (table, _) = IngredientTable::from_rows(rows());
        let view = table.view(&FilterCondition::plant_based());
        assert_eq!(view.len(), 2);
        assert!(std::ptr::eq(view[0], table.get("Coffee").unwrap()));
    }

    #[test]
    fn test_from_ingredients_skips_empty() {
        let table = IngredientTable::from_ingredients(vec![
            Ingredient::new("Empty", "None", Default::default()),
            Ingredient::new("Mint", "Herb", ["mint"].iter().collect()),
        ]);
        assert_eq!(table.len(), 1);
        assert!(table.get("Empty").is_none());
    }
}
