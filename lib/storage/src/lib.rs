//! # FlavorLab Storage
//!
//! Loading layer for FlavorLab: reads the ingredient table and optional
//! configuration/lexicon files from JSON, and keeps an immutable snapshot of
//! the table for repeated queries.

pub mod loader;
pub mod store;

pub use loader::{
    build_table, load_config, load_polarity_lexicon, load_radar_lexicon, load_table, parse_rows,
    MIN_USABLE_ROWS,
};
pub use store::{TableSnapshot, TableStore};
