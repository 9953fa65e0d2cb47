//! A single inventory record.

use std::cmp::Ordering;

use crate::error::ValidationError;
use crate::money::Money;
use crate::schema::Field;

use super::value::FieldValue;

/// One inventory item.
///
/// Items are only built through [`super::ItemBuilder`], so every instance has
/// a non-empty normalized Item_ID and a Total_Value equal to
/// `sales_price × quantity`. Mutation goes through [`Item::apply`], which
/// keeps the total in step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: String,
    item_name: String,
    category: String,
    material: String,
    color: String,
    sizes: String,
    vendor: String,
    purchase_price: Money,
    sales_price: Money,
    quantity: u64,
    total_value: Money,
}

impl Item {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: String,
        item_name: String,
        category: String,
        material: String,
        color: String,
        sizes: String,
        vendor: String,
        purchase_price: Money,
        sales_price: Money,
        quantity: u64,
    ) -> Result<Self, ValidationError> {
        let total_value = total_of(sales_price, quantity, Field::Quantity)?;
        Ok(Self {
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
            total_value,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn purchase_price(&self) -> Money {
        self.purchase_price
    }

    pub fn sales_price(&self) -> Money {
        self.sales_price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn total_value(&self) -> Money {
        self.total_value
    }

    /// Typed read of any field, including the derived one.
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::ItemId => FieldValue::Text(self.id.clone()),
            Field::ItemName => FieldValue::Text(self.item_name.clone()),
            Field::Category => FieldValue::Text(self.category.clone()),
            Field::Material => FieldValue::Text(self.material.clone()),
            Field::Color => FieldValue::Text(self.color.clone()),
            Field::Sizes => FieldValue::Text(self.sizes.clone()),
            Field::Vendor => FieldValue::Text(self.vendor.clone()),
            Field::PurchasePrice => FieldValue::Price(self.purchase_price),
            Field::SalesPrice => FieldValue::Price(self.sales_price),
            Field::Quantity => FieldValue::Count(self.quantity),
            Field::TotalValue => FieldValue::Price(self.total_value),
        }
    }

    /// Set one field. Nothing changes on error.
    ///
    /// Item_ID uniqueness is the table's concern; see
    /// [`crate::table::Table::update_field`].
    pub(crate) fn apply(&mut self, field: Field, value: FieldValue) -> Result<(), ValidationError> {
        match (field, value) {
            (Field::TotalValue, _) => return Err(ValidationError::ReadOnlyField(field)),
            (Field::ItemId, FieldValue::Text(v)) => {
                if v.is_empty() {
                    return Err(ValidationError::EmptyIdentifier);
                }
                self.id = v;
            }
            (Field::ItemName, FieldValue::Text(v)) => self.item_name = v,
            (Field::Category, FieldValue::Text(v)) => self.category = v,
            (Field::Material, FieldValue::Text(v)) => self.material = v,
            (Field::Color, FieldValue::Text(v)) => self.color = v,
            (Field::Sizes, FieldValue::Text(v)) => self.sizes = v,
            (Field::Vendor, FieldValue::Text(v)) => self.vendor = v,
            (Field::PurchasePrice, FieldValue::Price(v)) => self.purchase_price = v,
            (Field::SalesPrice, FieldValue::Price(v)) => {
                self.total_value = total_of(v, self.quantity, field)?;
                self.sales_price = v;
            }
            (Field::Quantity, FieldValue::Count(v)) => {
                self.total_value = total_of(self.sales_price, v, field)?;
                self.quantity = v;
            }
            (field, value) => {
                return Err(ValidationError::InvalidNumber {
                    field,
                    input: value.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Every value rendered as text, in schema order.
    pub fn to_row(&self) -> Vec<String> {
        Field::ALL.iter().map(|&f| self.get(f).to_string()).collect()
    }

    /// Ascending order on one field: text compares lexicographically,
    /// prices and counts numerically.
    pub fn compare_field(&self, other: &Item, field: Field) -> Ordering {
        match field {
            Field::ItemId => self.id.cmp(&other.id),
            Field::ItemName => self.item_name.cmp(&other.item_name),
            Field::Category => self.category.cmp(&other.category),
            Field::Material => self.material.cmp(&other.material),
            Field::Color => self.color.cmp(&other.color),
            Field::Sizes => self.sizes.cmp(&other.sizes),
            Field::Vendor => self.vendor.cmp(&other.vendor),
            Field::PurchasePrice => self.purchase_price.cmp(&other.purchase_price),
            Field::SalesPrice => self.sales_price.cmp(&other.sales_price),
            Field::Quantity => self.quantity.cmp(&other.quantity),
            Field::TotalValue => self.total_value.cmp(&other.total_value),
        }
    }
}

fn total_of(sales_price: Money, quantity: u64, blame: Field) -> Result<Money, ValidationError> {
    sales_price
        .checked_mul_quantity(quantity)
        .ok_or(ValidationError::ValueTooLarge { field: blame })
}
