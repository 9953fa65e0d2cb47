//! Field kinds and their comparison rules.

use serde::{Deserialize, Serialize};

/// The kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Unique, non-empty key of a record.
    Identifier,
    /// Free text, stored uppercased.
    Text,
    /// Non-negative money amount with two decimals.
    Price,
    /// Non-negative whole number.
    Count,
    /// Computed from other fields; never set directly.
    Derived,
}

impl FieldKind {
    /// Returns true if values of this kind compare numerically.
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldKind::Price | FieldKind::Count | FieldKind::Derived)
    }

    /// Returns true if values of this kind come from operator input.
    pub fn is_input(&self) -> bool {
        !matches!(self, FieldKind::Derived)
    }

    /// Human-readable description of the accepted input, for error messages.
    pub fn expected(&self) -> &'static str {
        match self {
            FieldKind::Identifier => "a non-empty identifier",
            FieldKind::Text => "text",
            FieldKind::Price => "a number in format '0.00'",
            FieldKind::Count => "a positive whole number",
            FieldKind::Derived => "computed",
        }
    }
}
