//! Error types for the Stockroom library.
//!
//! Two tiers: [`StockroomError`] covers store and session-level failures that
//! end the current session, while [`ValidationError`] covers rejected operator
//! input that is reported and re-prompted.

use std::path::PathBuf;
use thiserror::Error;

use crate::schema::Field;

/// Main error type for Stockroom operations.
#[derive(Debug, Error)]
pub enum StockroomError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library (malformed or ragged rows).
    #[error("The file is not a valid CSV file: {0}")]
    Csv(#[from] csv::Error),

    /// The store has no header line at all.
    #[error("The file {0} is empty or contains no valid data.")]
    EmptyStore(PathBuf),

    /// The store header does not name exactly the schema's fields.
    #[error("The file is not properly formatted: {}", describe_mismatch(.missing, .unexpected, .duplicated))]
    SchemaMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
        duplicated: Vec<String>,
    },

    /// A stored cell failed validation.
    #[error("Invalid value at row {row}, column {column}: {source}")]
    Parse {
        row: usize,
        column: Field,
        #[source]
        source: ValidationError,
    },

    /// Two stored rows share an Item_ID.
    #[error("Duplicate Item_ID '{id}' at row {row}")]
    DuplicateRow { row: usize, id: String },

    /// A file name did not match `<word>.<extension>`.
    #[error("Format must be 'filename.{extension}' (got '{name}')")]
    InvalidFileName { name: String, extension: String },

    /// The operator's input stream ended.
    #[error("Input closed")]
    InputClosed,
}

/// Rejected operator input. Always recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Item_ID must not be empty")]
    EmptyIdentifier,

    #[error("ID '{0}' already exists")]
    DuplicateIdentifier(String),

    /// Text that is not a number of the field's kind.
    #[error("{field} must be {}, got '{input}'", .field.kind().expected())]
    InvalidNumber { field: Field, input: String },

    #[error("{field} must be 0 or greater")]
    NegativeValue { field: Field },

    /// Value (or the Total_Value derived from it) does not fit.
    #[error("{field} is too large")]
    ValueTooLarge { field: Field },

    #[error("Can not edit a calculated field ({0})")]
    ReadOnlyField(Field),

    #[error("No column named '{0}'")]
    UnknownField(String),

    #[error("No item with ID '{0}'")]
    NotFound(String),

    #[error("Invalid input '{0}'. Must enter 'y' or 'n'")]
    InvalidConfirmation(String),
}

fn describe_mismatch(missing: &[String], unexpected: &[String], duplicated: &[String]) -> String {
    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("missing columns [{}]", missing.join(", ")));
    }
    if !unexpected.is_empty() {
        parts.push(format!("unexpected columns [{}]", unexpected.join(", ")));
    }
    if !duplicated.is_empty() {
        parts.push(format!("repeated columns [{}]", duplicated.join(", ")));
    }
    parts.join("; ")
}

/// Result type alias for Stockroom operations.
pub type Result<T> = std::result::Result<T, StockroomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mismatch_message() {
        let err = StockroomError::SchemaMismatch {
            missing: vec!["Vendor".to_string()],
            unexpected: vec!["Supplier".to_string()],
            duplicated: vec![],
        };
        let msg = err.to_string();
        assert!(msg.contains("missing columns [Vendor]"));
        assert!(msg.contains("unexpected columns [Supplier]"));
        assert!(!msg.contains("repeated"));
    }

    #[test]
    fn test_invalid_number_message_names_expectation() {
        let err = ValidationError::InvalidNumber {
            field: Field::SalesPrice,
            input: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Sales_Price must be a number in format '0.00', got 'abc'"
        );
    }
}
