//! File naming rules for stores and reports.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, StockroomError};

static STORE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+\.csv$").expect("valid regex"));
static REPORT_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+\.txt$").expect("valid regex"));

/// The two kinds of file an operator names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Store,
    Report,
}

impl FileKind {
    pub fn extension(&self) -> &'static str {
        match self {
            FileKind::Store => "csv",
            FileKind::Report => "txt",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            FileKind::Store => &STORE_NAME,
            FileKind::Report => &REPORT_NAME,
        }
    }
}

/// Normalize an operator-typed file name and check it is `<word>.<ext>`.
///
/// Input is trimmed and lowercased first.
///
/// ```
/// use stockroom::paths::{FileKind, validate_file_name};
///
/// assert!(validate_file_name(" Stock_2024.CSV ", FileKind::Store).is_ok());
/// assert!(validate_file_name("stock.txt", FileKind::Store).is_err());
/// assert!(validate_file_name("../stock.csv", FileKind::Store).is_err());
/// ```
pub fn validate_file_name(input: &str, kind: FileKind) -> Result<PathBuf> {
    let name = input.trim().to_lowercase();
    if kind.pattern().is_match(&name) {
        Ok(PathBuf::from(name))
    } else {
        Err(StockroomError::InvalidFileName {
            name,
            extension: kind.extension().to_string(),
        })
    }
}

/// Default report location for a store: same path, `.txt` extension.
///
/// ```
/// use stockroom::paths::report_path_for;
///
/// assert_eq!(report_path_for("data/stock.csv").to_string_lossy(), "data/stock.txt");
/// ```
pub fn report_path_for(store_path: impl AsRef<Path>) -> PathBuf {
    store_path.as_ref().with_extension(FileKind::Report.extension())
}
