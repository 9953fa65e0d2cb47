//! Record construction from raw operator input.

use indexmap::IndexMap;

use crate::error::ValidationError;
use crate::money::Money;
use crate::schema::{self, Field};
use crate::table::Table;

use super::item::Item;
use super::value::FieldValue;

/// Collects validated values one field at a time.
///
/// Each [`set`](ItemBuilder::set) validates immediately, so an interactive
/// caller can re-prompt just the field that failed. Item_ID is checked
/// against the table the builder was created for.
#[derive(Debug)]
pub struct ItemBuilder<'a> {
    table: &'a Table,
    values: IndexMap<Field, FieldValue>,
}

impl<'a> ItemBuilder<'a> {
    pub fn new(table: &'a Table) -> Self {
        Self {
            table,
            values: IndexMap::new(),
        }
    }

    /// Validate and record `raw` for `field`.
    pub fn set(&mut self, field: Field, raw: &str) -> Result<(), ValidationError> {
        let value = FieldValue::parse(field, raw)?;

        if let (Field::ItemId, FieldValue::Text(id)) = (field, &value) {
            if self.table.contains_id(id) {
                return Err(ValidationError::DuplicateIdentifier(id.clone()));
            }
        }

        let (price, qty) = match (field, &value) {
            (Field::SalesPrice, FieldValue::Price(p)) => (Some(*p), self.quantity()),
            (Field::Quantity, FieldValue::Count(q)) => (self.sales_price(), Some(*q)),
            _ => (None, None),
        };
        if let (Some(price), Some(qty)) = (price, qty) {
            if price.checked_mul_quantity(qty).is_none() {
                return Err(ValidationError::ValueTooLarge { field });
            }
        }

        self.values.insert(field, value);
        Ok(())
    }

    /// Next input field without a value, in schema order.
    pub fn next_field(&self) -> Option<Field> {
        schema::input_fields().find(|f| !self.values.contains_key(f))
    }

    /// Finish the record, computing Total_Value.
    ///
    /// Missing text fields default to empty; a missing Item_ID, price, or
    /// quantity fails the same way an empty input would.
    pub fn build(mut self) -> Result<Item, ValidationError> {
        for field in schema::input_fields() {
            if !self.values.contains_key(&field) {
                self.set(field, "")?;
            }
        }

        let text = |values: &mut IndexMap<Field, FieldValue>, f: Field| match values.swap_remove(&f) {
            Some(FieldValue::Text(s)) => s,
            _ => String::new(),
        };
        let values = &mut self.values;
        let id = text(values, Field::ItemId);
        let item_name = text(values, Field::ItemName);
        let category = text(values, Field::Category);
        let material = text(values, Field::Material);
        let color = text(values, Field::Color);
        let sizes = text(values, Field::Sizes);
        let vendor = text(values, Field::Vendor);
        let purchase_price = price_of(values, Field::PurchasePrice);
        let sales_price = price_of(values, Field::SalesPrice);
        let quantity = match values.get(&Field::Quantity) {
            Some(FieldValue::Count(q)) => *q,
            _ => 0,
        };

        Item::new(
            id,
            item_name,
            category,
            material,
            color,
            sizes,
            vendor,
            purchase_price,
            sales_price,
            quantity,
        )
    }

    fn sales_price(&self) -> Option<Money> {
        match self.values.get(&Field::SalesPrice) {
            Some(FieldValue::Price(p)) => Some(*p),
            _ => None,
        }
    }

    fn quantity(&self) -> Option<u64> {
        match self.values.get(&Field::Quantity) {
            Some(FieldValue::Count(q)) => Some(*q),
            _ => None,
        }
    }
}

fn price_of(values: &IndexMap<Field, FieldValue>, field: Field) -> Money {
    match values.get(&field) {
        Some(FieldValue::Price(p)) => *p,
        _ => Money::zero(),
    }
}

/// Build a complete record from raw inputs keyed by field.
///
/// Fields are validated in schema order and the first failure is returned.
/// Any Total_Value entry in `inputs` is ignored; the total is always computed.
pub fn build_record(inputs: &IndexMap<Field, String>, table: &Table) -> Result<Item, ValidationError> {
    let mut builder = ItemBuilder::new(table);
    for field in schema::input_fields() {
        let raw = inputs.get(&field).map(String::as_str).unwrap_or("");
        builder.set(field, raw)?;
    }
    builder.build()
}
