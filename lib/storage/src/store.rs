use anyhow::{Context, Result};
use flavorlab_core::{IngredientTable, TableStats};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use crate::loader::load_table;

/// Loaded table together with its load counts
#[derive(Debug, Clone)]
pub struct TableSnapshot {
    pub table: Arc<IngredientTable>,
    pub stats: TableStats,
}

/// Immutable snapshot cache for an ingredient table file.
///
/// The file is read on first access and the snapshot is shared afterwards.
/// The source is static for the process lifetime, so there is no
/// invalidation.
pub struct TableStore {
    path: PathBuf,
    snapshot: RwLock<Option<TableSnapshot>>,
}

impl TableStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            snapshot: RwLock::new(None),
        }
    }

    /// Wrap an already built table
    pub fn from_table(table: IngredientTable, stats: TableStats) -> Self {
        Self {
            path: PathBuf::new(),
            snapshot: RwLock::new(Some(TableSnapshot {
                table: Arc::new(table),
                stats,
            })),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.read().is_some()
    }

    /// Return the cached snapshot, loading it on first use
    pub fn snapshot(&self) -> Result<TableSnapshot> {
        if let Some(snapshot) = self.snapshot.read().as_ref() {
            return Ok(snapshot.clone());
        }

        let mut guard = self.snapshot.write();
        // Another caller may have loaded it while we waited for the lock
        if let Some(snapshot) = guard.as_ref() {
            return Ok(snapshot.clone());
        }

        let (table, stats) = load_table(&self.path)
            .with_context(|| format!("failed to load ingredient table {:?}", self.path))?;
        info!("Ingredient table cached: {} records", table.len());
        let snapshot = TableSnapshot {
            table: Arc::new(table),
            stats,
        };
        *guard = Some(snapshot.clone());
        Ok(snapshot)
    }

    pub fn table(&self) -> Result<Arc<IngredientTable>> {
        Ok(self.snapshot()?.table)
    }
}
