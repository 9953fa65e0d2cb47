//! CSV-backed store.

use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Result, StockroomError, ValidationError};
use crate::money::Money;
use crate::record::{Item, ItemBuilder};
use crate::schema::{self, Field};
use crate::table::Table;

use super::metadata::{StoreMetadata, fingerprint};
use super::{Store, StoreConfig};

/// A table persisted as a delimited file with a header row.
///
/// The header must name exactly the schema's fields. Column order in an
/// existing file is respected on load and on append; a full save always
/// writes schema order.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
    config: StoreConfig,
}

impl CsvStore {
    /// Refer to an existing store file. Nothing is read until [`Store::load`].
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_config(path, StoreConfig::default())
    }

    pub fn with_config(path: impl Into<PathBuf>, config: StoreConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    /// Write a header-only store at `path`, replacing any existing file.
    pub fn create(path: impl Into<PathBuf>, config: StoreConfig) -> Result<Self> {
        let store = Self::with_config(path, config);
        store.save(&Table::new())?;
        info!(path = %store.path.display(), "created empty inventory store");
        Ok(store)
    }

    fn io_error(&self, source: std::io::Error) -> StockroomError {
        StockroomError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_bytes(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(|e| self.io_error(e))
    }

    fn reader<'a>(&self, bytes: &'a [u8]) -> csv::Reader<&'a [u8]> {
        csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(true)
            .flexible(false)
            .from_reader(bytes)
    }

    /// Column order of the file on disk.
    fn header_fields(&self, bytes: &[u8]) -> Result<Vec<Field>> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(StockroomError::EmptyStore(self.path.clone()));
        }
        let mut reader = self.reader(bytes);
        let headers = reader.headers()?.clone();
        map_header(headers.iter())
    }

    fn parse_rows(&self, bytes: &[u8]) -> Result<Table> {
        let columns = self.header_fields(bytes)?;
        let mut reader = self.reader(bytes);
        let mut table = Table::new();

        for (index, result) in reader.records().enumerate() {
            let row = index + 1;
            let record = result?;

            let mut builder = ItemBuilder::new(&table);
            let mut stored_total = None;
            for (field, raw) in columns.iter().zip(record.iter()) {
                if field.is_derived() {
                    stored_total = Some(raw);
                    continue;
                }
                builder.set(*field, raw).map_err(|e| match e {
                    ValidationError::DuplicateIdentifier(id) => StockroomError::DuplicateRow { row, id },
                    source => StockroomError::Parse {
                        row,
                        column: *field,
                        source,
                    },
                })?;
            }
            let item = builder.build().map_err(|source| StockroomError::Parse {
                row,
                column: Field::Quantity,
                source,
            })?;

            if let Some(raw) = stored_total {
                if raw.trim().parse::<Money>().ok() != Some(item.total_value()) {
                    warn!(
                        row,
                        id = item.id(),
                        stored = raw,
                        computed = %item.total_value(),
                        "stored Total_Value disagrees with Sales_Price x Quantity; using computed value"
                    );
                }
            }

            table
                .insert(item)
                .map_err(|e| StockroomError::Parse {
                    row,
                    column: Field::ItemId,
                    source: e,
                })?;
        }

        Ok(table)
    }

    /// Whether the file's last byte is a line terminator. Empty files count
    /// as terminated.
    fn ends_with_newline(&self) -> Result<bool> {
        let mut file = File::open(&self.path).map_err(|e| self.io_error(e))?;
        let len = file.metadata().map_err(|e| self.io_error(e))?.len();
        if len == 0 {
            return Ok(true);
        }
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1)).map_err(|e| self.io_error(e))?;
        file.read_exact(&mut last).map_err(|e| self.io_error(e))?;
        Ok(last[0] == b'\n' || last[0] == b'\r')
    }
}

impl Store for CsvStore {
    fn load(&self) -> Result<(Table, StoreMetadata)> {
        let bytes = self.read_bytes()?;
        let table = self.parse_rows(&bytes)?;
        let metadata = StoreMetadata::new(self.path.clone(), &bytes, table.len());
        info!(
            path = %self.path.display(),
            rows = table.len(),
            hash = %metadata.hash,
            "loaded inventory store"
        );
        Ok((table, metadata))
    }

    fn save(&self, table: &Table) -> Result<()> {
        let file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.config.delimiter)
            .from_writer(BufWriter::new(file));

        writer.write_record(schema::header())?;
        for item in table {
            writer.write_record(item.to_row())?;
        }
        writer.flush().map_err(|e| self.io_error(e))?;

        info!(path = %self.path.display(), rows = table.len(), "saved inventory store");
        Ok(())
    }

    fn append(&self, item: &Item) -> Result<()> {
        let bytes = self.read_bytes()?;
        let columns = self.header_fields(&bytes)?;
        let needs_newline = !self.ends_with_newline()?;

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        if needs_newline {
            file.write_all(b"\n").map_err(|e| self.io_error(e))?;
        }

        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(false)
            .from_writer(file);
        writer.write_record(columns.iter().map(|&f| item.get(f).to_string()))?;
        writer.flush().map_err(|e| self.io_error(e))?;

        debug!(path = %self.path.display(), id = item.id(), "appended item");
        Ok(())
    }

    fn fingerprint(&self) -> Result<String> {
        Ok(fingerprint(&self.read_bytes()?))
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

/// Match header names to fields.
///
/// The header must be a permutation of the schema: every field present once,
/// nothing else.
fn map_header<'a>(names: impl Iterator<Item = &'a str>) -> Result<Vec<Field>> {
    let mut columns = Vec::new();
    let mut seen = HashSet::new();
    let mut unexpected = Vec::new();
    let mut duplicated = Vec::new();

    for name in names {
        match name.parse::<Field>() {
            Ok(field) => {
                if !seen.insert(field) {
                    duplicated.push(name.to_string());
                }
                columns.push(field);
            }
            Err(_) => unexpected.push(name.to_string()),
        }
    }

    let missing: Vec<String> = schema::fields()
        .iter()
        .filter(|f| !seen.contains(*f))
        .map(|f| f.name().to_string())
        .collect();

    if missing.is_empty() && unexpected.is_empty() && duplicated.is_empty() {
        Ok(columns)
    } else {
        Err(StockroomError::SchemaMismatch {
            missing,
            unexpected,
            duplicated,
        })
    }
}
