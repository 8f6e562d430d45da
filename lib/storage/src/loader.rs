use flavorlab_core::{Error, IngredientRow, IngredientTable, Result, TableStats};
use flavorlab_similarity::{PolarityLexicon, RadarLexicon, ScoringConfig};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info, warn};

/// Fewer usable rows than this triggers a data-quality warning
pub const MIN_USABLE_ROWS: usize = 50;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    Ok(value)
}

/// Parse ingredient rows from a JSON array
pub fn parse_rows(json: &str) -> Result<Vec<IngredientRow>> {
    Ok(serde_json::from_str(json)?)
}

/// Build a table from raw rows, logging what was dropped.
/// A table without any usable row is an error.
pub fn build_table(rows: Vec<IngredientRow>) -> Result<(IngredientTable, TableStats)> {
    let (table, stats) = IngredientTable::from_rows(rows);

    if stats.dropped_empty > 0 {
        debug!("Dropped {} rows without descriptors", stats.dropped_empty);
    }
    if stats.dropped_duplicate > 0 {
        debug!("Dropped {} rows with duplicate names", stats.dropped_duplicate);
    }
    if table.is_empty() {
        return Err(Error::EmptyTable);
    }
    if stats.rows_usable < MIN_USABLE_ROWS {
        warn!(
            "Only {} usable ingredient rows (of {}); pairing results will be sparse",
            stats.rows_usable, stats.rows_total
        );
    }

    Ok((table, stats))
}

/// Load an ingredient table from a JSON file of rows
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<(IngredientTable, TableStats)> {
    let path = path.as_ref();
    let rows: Vec<IngredientRow> = read_json(path)?;
    let (table, stats) = build_table(rows)?;
    info!(
        "Loaded {} ingredients from {:?} ({} rows read)",
        stats.rows_usable, path, stats.rows_total
    );
    Ok((table, stats))
}

/// Load and validate a scoring config; missing fields take their defaults
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ScoringConfig> {
    let mut config: ScoringConfig = read_json(path.as_ref())?;
    config
        .validate_and_normalize()
        .map_err(|e| Error::InvalidConfig(e.to_string()))?;
    Ok(config)
}

pub fn load_polarity_lexicon<P: AsRef<Path>>(path: P) -> Result<PolarityLexicon> {
    let lexicon: PolarityLexicon = read_json(path.as_ref())?;
    lexicon
        .validate()
        .map_err(|e| Error::InvalidConfig(e.to_string()))?;
    Ok(lexicon)
}

pub fn load_radar_lexicon<P: AsRef<Path>>(path: P) -> Result<RadarLexicon> {
    let lexicon: RadarLexicon = read_json(path.as_ref())?;
    lexicon
        .validate()
        .map_err(|e| Error::InvalidConfig(e.to_string()))?;
    Ok(lexicon)
}
