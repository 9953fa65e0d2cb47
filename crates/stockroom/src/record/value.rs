//! Typed field values and the raw-input parsing rules for each kind.

use std::fmt;

use crate::error::ValidationError;
use crate::money::{Money, MoneyParseError};
use crate::schema::{Field, FieldKind};

/// A validated value for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Identifier or text, already trimmed and uppercased.
    Text(String),
    Price(Money),
    Count(u64),
}

impl FieldValue {
    /// Validate raw operator text for `field`.
    ///
    /// The derived field has no raw form and is rejected with
    /// [`ValidationError::ReadOnlyField`].
    pub fn parse(field: Field, raw: &str) -> Result<Self, ValidationError> {
        match field.kind() {
            FieldKind::Identifier => parse_identifier(raw).map(FieldValue::Text),
            FieldKind::Text => Ok(FieldValue::Text(normalize_text(raw))),
            FieldKind::Price => parse_price(field, raw).map(FieldValue::Price),
            FieldKind::Count => parse_count(field, raw).map(FieldValue::Count),
            FieldKind::Derived => Err(ValidationError::ReadOnlyField(field)),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.pad(s),
            FieldValue::Price(m) => fmt::Display::fmt(m, f),
            FieldValue::Count(n) => fmt::Display::fmt(n, f),
        }
    }
}

/// Trim and uppercase.
pub fn normalize_text(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Normalize an Item_ID and reject empty ones.
pub fn parse_identifier(raw: &str) -> Result<String, ValidationError> {
    let id = normalize_text(raw);
    if id.is_empty() {
        return Err(ValidationError::EmptyIdentifier);
    }
    Ok(id)
}

pub fn parse_price(field: Field, raw: &str) -> Result<Money, ValidationError> {
    raw.parse::<Money>().map_err(|e| match e {
        MoneyParseError::Invalid => ValidationError::InvalidNumber {
            field,
            input: raw.trim().to_string(),
        },
        MoneyParseError::Negative => ValidationError::NegativeValue { field },
        MoneyParseError::Overflow => ValidationError::ValueTooLarge { field },
    })
}

/// Whole numbers only. A parseable negative is reported as negative rather
/// than as garbage.
pub fn parse_count(field: Field, raw: &str) -> Result<u64, ValidationError> {
    let text = raw.trim();
    let text = text.strip_prefix('+').unwrap_or(text);
    if let Ok(n) = text.parse::<u64>() {
        return Ok(n);
    }
    match text.parse::<i128>() {
        Ok(n) if n < 0 => Err(ValidationError::NegativeValue { field }),
        Ok(_) => Err(ValidationError::ValueTooLarge { field }),
        Err(_) => Err(ValidationError::InvalidNumber {
            field,
            input: raw.trim().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_trimmed_and_uppercased() {
        assert_eq!(
            FieldValue::parse(Field::Category, "  shirts "),
            Ok(FieldValue::Text("SHIRTS".to_string()))
        );
        assert_eq!(
            FieldValue::parse(Field::Vendor, ""),
            Ok(FieldValue::Text(String::new()))
        );
    }

    #[test]
    fn test_identifier_must_not_be_empty() {
        assert_eq!(parse_identifier(" a1 "), Ok("A1".to_string()));
        assert_eq!(parse_identifier("   "), Err(ValidationError::EmptyIdentifier));
    }

    #[test]
    fn test_price_errors_name_the_field() {
        assert_eq!(
            parse_price(Field::PurchasePrice, "ten"),
            Err(ValidationError::InvalidNumber {
                field: Field::PurchasePrice,
                input: "ten".to_string()
            })
        );
        assert_eq!(
            parse_price(Field::SalesPrice, "-2"),
            Err(ValidationError::NegativeValue { field: Field::SalesPrice })
        );
        assert_eq!(parse_price(Field::SalesPrice, "2.345"), Ok(Money::from_cents(235)));
    }

    #[test]
    fn test_count_parsing() {
        assert_eq!(parse_count(Field::Quantity, "5"), Ok(5));
        assert_eq!(parse_count(Field::Quantity, " +7 "), Ok(7));
        assert_eq!(
            parse_count(Field::Quantity, "-3"),
            Err(ValidationError::NegativeValue { field: Field::Quantity })
        );
        assert_eq!(
            parse_count(Field::Quantity, "2.5"),
            Err(ValidationError::InvalidNumber {
                field: Field::Quantity,
                input: "2.5".to_string()
            })
        );
        assert_eq!(
            parse_count(Field::Quantity, "99999999999999999999999"),
            Err(ValidationError::ValueTooLarge { field: Field::Quantity })
        );
    }

    #[test]
    fn test_derived_has_no_raw_form() {
        assert_eq!(
            FieldValue::parse(Field::TotalValue, "30.00"),
            Err(ValidationError::ReadOnlyField(Field::TotalValue))
        );
    }
}
