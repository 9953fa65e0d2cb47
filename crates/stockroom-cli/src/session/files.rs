//! Operator-chosen file names for new stores and reports.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use stockroom::paths::{FileKind, report_path_for, validate_file_name};
use stockroom::{CsvStore, Result, StockroomError, StoreConfig};

use super::Console;

/// Ask for a new store name under `base_dir` and write a header-only file.
///
/// An existing file is only replaced after the operator agrees.
pub fn create_store<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    base_dir: &Path,
    config: StoreConfig,
) -> Result<CsvStore> {
    console.say("Creating new inventory file...")?;

    let path = loop {
        let answer = console.ask("What would you like to name the file? ")?;
        let path = match validate_file_name(&answer, FileKind::Store) {
            Ok(name) => base_dir.join(name),
            Err(e @ StockroomError::InvalidFileName { .. }) => {
                console.error(e)?;
                continue;
            }
            Err(e) => return Err(e),
        };

        if path.exists()
            && !console.confirm("File already exists. Would you like to overwrite existing file? (y/n): ")?
        {
            continue;
        }
        break path;
    };

    let store = CsvStore::create(&path, config)?;
    console.success(format!("Created {}", path.display()))?;
    Ok(store)
}

/// Decide where the report for `store` goes.
///
/// The default is the store path with a `.txt` extension, used when free or
/// when the operator agrees to overwrite it. A default that is the store
/// itself is never offered. Otherwise new names are asked for, in the
/// store's directory, until one is valid and not taken.
pub fn choose_report_path<R: BufRead, W: Write>(console: &mut Console<R, W>, store: &Path) -> Result<PathBuf> {
    let default = report_path_for(store);
    if default.as_path() != store
        && (!default.exists()
            || console.confirm(format!(
                "File {} already exists. Would you like to overwrite it? (y/n) ",
                default.display()
            ))?)
    {
        return Ok(default);
    }

    let dir = default.parent().unwrap_or_else(|| Path::new(""));
    loop {
        let answer = console.ask("Enter a new file name for the table ending in '.txt': ")?;
        let path = match validate_file_name(&answer, FileKind::Report) {
            Ok(name) => dir.join(name),
            Err(e @ StockroomError::InvalidFileName { .. }) => {
                console.error(e)?;
                continue;
            }
            Err(e) => return Err(e),
        };
        if path.exists() {
            console.error("File name already exists.")?;
            continue;
        }
        return Ok(path);
    }
}
