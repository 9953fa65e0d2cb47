//! The fixed inventory columns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::types::FieldKind;

/// One column of the inventory schema.
///
/// Variants are declared in schema order; `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "Item_ID")]
    ItemId,
    #[serde(rename = "Item_Name")]
    ItemName,
    #[serde(rename = "Category")]
    Category,
    #[serde(rename = "Material")]
    Material,
    #[serde(rename = "Color")]
    Color,
    #[serde(rename = "Sizes")]
    Sizes,
    #[serde(rename = "Vendor")]
    Vendor,
    #[serde(rename = "Purchase_Price")]
    PurchasePrice,
    #[serde(rename = "Sales_Price")]
    SalesPrice,
    #[serde(rename = "Quantity")]
    Quantity,
    #[serde(rename = "Total_Value")]
    TotalValue,
}

impl Field {
    /// Every field, in schema order.
    pub const ALL: [Field; 11] = [
        Field::ItemId,
        Field::ItemName,
        Field::Category,
        Field::Material,
        Field::Color,
        Field::Sizes,
        Field::Vendor,
        Field::PurchasePrice,
        Field::SalesPrice,
        Field::Quantity,
        Field::TotalValue,
    ];

    /// Column name as it appears in the store header.
    pub const fn name(&self) -> &'static str {
        match self {
            Field::ItemId => "Item_ID",
            Field::ItemName => "Item_Name",
            Field::Category => "Category",
            Field::Material => "Material",
            Field::Color => "Color",
            Field::Sizes => "Sizes",
            Field::Vendor => "Vendor",
            Field::PurchasePrice => "Purchase_Price",
            Field::SalesPrice => "Sales_Price",
            Field::Quantity => "Quantity",
            Field::TotalValue => "Total_Value",
        }
    }

    pub const fn kind(&self) -> FieldKind {
        match self {
            Field::ItemId => FieldKind::Identifier,
            Field::ItemName
            | Field::Category
            | Field::Material
            | Field::Color
            | Field::Sizes
            | Field::Vendor => FieldKind::Text,
            Field::PurchasePrice | Field::SalesPrice => FieldKind::Price,
            Field::Quantity => FieldKind::Count,
            Field::TotalValue => FieldKind::Derived,
        }
    }

    /// Zero-based position in the schema.
    pub fn position(&self) -> usize {
        *self as usize
    }

    /// Look up a field by its one-based menu number.
    pub fn from_number(number: usize) -> Option<Field> {
        number.checked_sub(1).and_then(|i| Field::ALL.get(i).copied())
    }

    pub fn is_derived(&self) -> bool {
        self.kind() == FieldKind::Derived
    }

    /// Whether an operator may set this field through an edit.
    ///
    /// Item_ID is editable, subject to the uniqueness rule.
    pub fn is_editable(&self) -> bool {
        !self.is_derived()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses an exact column name.
impl FromStr for Field {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| crate::error::ValidationError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_follow_declaration_order() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.position(), i);
        }
    }

    #[test]
    fn test_from_number() {
        assert_eq!(Field::from_number(1), Some(Field::ItemId));
        assert_eq!(Field::from_number(11), Some(Field::TotalValue));
        assert_eq!(Field::from_number(0), None);
        assert_eq!(Field::from_number(12), None);
    }

    #[test]
    fn test_parse_exact_name() {
        assert_eq!("Sales_Price".parse::<Field>(), Ok(Field::SalesPrice));
        assert!("sales_price".parse::<Field>().is_err());
        assert!("Supplier".parse::<Field>().is_err());
    }

    #[test]
    fn test_only_total_is_read_only() {
        let read_only: Vec<_> = Field::ALL.iter().filter(|f| !f.is_editable()).collect();
        assert_eq!(read_only, vec![&Field::TotalValue]);
    }
}
