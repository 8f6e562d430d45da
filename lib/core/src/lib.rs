//! # FlavorLab Core
//!
//! Core data model for the FlavorLab pairing engine.
//!
//! This crate provides the fundamental data structures:
//!
//! - [`DescriptorSet`] - Normalized set of flavor descriptor tokens
//! - [`Ingredient`] - A named, categorized descriptor set
//! - [`IngredientTable`] - Immutable table of ingredients, loaded once
//! - [`FilterCondition`] - Category filters producing table views
//! - [`BlendRatios`] - Normalized proportions of a 2-4 ingredient selection
//!
//! ## Example
//!
//! ```rust
//! use flavorlab_core::{IngredientRow, IngredientTable, FilterCondition};
//!
//! let rows = vec![
//!     IngredientRow::new("Coffee", "Beverage").with_flavor_profiles("bitter,roasted,cocoa"),
//!     IngredientRow::new("Strawberry", "Fruit").with_flavors("sweet@fruity,berry"),
//!     IngredientRow::new("Water", "Beverage"),
//! ];
//! let (table, stats) = IngredientTable::from_rows(rows);
//! assert_eq!(table.len(), 2);
//! assert_eq!(stats.dropped_empty, 1);
//!
//! let plants = table.view(&FilterCondition::plant_based());
//! assert_eq!(plants.len(), 2);
//! ```

pub mod descriptor;
pub mod error;
pub mod ingredient;
pub mod table;
pub mod filter;
pub mod blend;

pub use descriptor::{DescriptorSet, parse_flavor_profiles, parse_flavors};
pub use error::{Error, Result};
pub use ingredient::{Ingredient, IngredientRow};
pub use table::{IngredientTable, TableStats};
pub use filter::{FilterCondition, IngredientFilter, ANIMAL_CATEGORY_KEYWORDS};
pub use blend::{BlendRatios, BlendRole, validate_selection, MIN_SELECTION, MAX_SELECTION};
