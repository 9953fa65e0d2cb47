//! Durable storage for the inventory table.
//!
//! The [`Store`] trait is the seam between the editor and the file on disk:
//! whole-table load, whole-table save, and single-row append. [`CsvStore`] is
//! the delimited-file implementation.
//!
//! There is no locking. If another process rewrites the file between a load
//! and a save, the later save wins.

mod delimited;
mod metadata;

pub use delimited::CsvStore;
pub use metadata::StoreMetadata;

use std::path::Path;

use crate::error::Result;
use crate::record::Item;
use crate::table::Table;

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Field delimiter.
    pub delimiter: u8,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Load-all / overwrite-all access to a persisted table.
pub trait Store {
    /// Read the whole table.
    fn load(&self) -> Result<(Table, StoreMetadata)>;

    /// Replace the stored table with `table`.
    fn save(&self, table: &Table) -> Result<()>;

    /// Add one item after the existing rows without rewriting them.
    fn append(&self, item: &Item) -> Result<()>;

    /// Content fingerprint of what is currently on disk.
    fn fingerprint(&self) -> Result<String>;

    /// Where the store lives.
    fn path(&self) -> &Path;
}
