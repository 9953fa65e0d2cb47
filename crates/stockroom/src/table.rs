//! The in-memory inventory table.

use crate::error::ValidationError;
use crate::record::{FieldValue, Item, normalize_text};
use crate::schema::Field;

/// Ordered collection of items, unique by Item_ID.
///
/// Insertion order is the canonical order and is what the store writes back.
/// [`Table::sort_by`] produces a sorted view without reordering the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    items: Vec<Item>,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a table from items, rejecting repeated Item_IDs.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Result<Self, ValidationError> {
        let mut table = Self::new();
        for item in items {
            table.insert(item)?;
        }
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in table order.
    pub fn all(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Position of the item with this Item_ID.
    ///
    /// `id` is normalized the same way stored identifiers are, so `a1` finds
    /// `A1`.
    pub fn lookup(&self, id: &str) -> Result<usize, ValidationError> {
        let id = normalize_text(id);
        self.items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(ValidationError::NotFound(id))
    }

    /// The item with this Item_ID, if any.
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.lookup(id).ok().map(|i| &self.items[i])
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.lookup(id).is_ok()
    }

    /// Append an item.
    pub fn insert(&mut self, item: Item) -> Result<(), ValidationError> {
        if self.contains_id(item.id()) {
            return Err(ValidationError::DuplicateIdentifier(item.id().to_string()));
        }
        self.items.push(item);
        Ok(())
    }

    /// Set one field of one item from raw operator text.
    ///
    /// Total_Value is refused before anything else is checked. Renaming an
    /// item to an Item_ID held by a different item is refused; renaming it to
    /// its own Item_ID is a no-op. Setting Sales_Price or Quantity recomputes
    /// Total_Value.
    pub fn update_field(&mut self, id: &str, field: Field, raw: &str) -> Result<(), ValidationError> {
        if !field.is_editable() {
            return Err(ValidationError::ReadOnlyField(field));
        }
        let index = self.lookup(id)?;
        let value = FieldValue::parse(field, raw)?;

        if let (Field::ItemId, FieldValue::Text(new_id)) = (field, &value) {
            let clash = self
                .items
                .iter()
                .enumerate()
                .any(|(i, item)| i != index && item.id() == new_id);
            if clash {
                return Err(ValidationError::DuplicateIdentifier(new_id.clone()));
            }
        }

        self.items[index].apply(field, value)
    }

    /// Remove and return an item. The caller confirms first.
    pub fn remove(&mut self, id: &str) -> Result<Item, ValidationError> {
        let index = self.lookup(id)?;
        Ok(self.items.remove(index))
    }

    /// Stable multi-key ascending sort, as a view.
    ///
    /// Items equal on every key keep their table order. An empty key list
    /// returns table order.
    pub fn sort_by(&self, keys: &[Field]) -> Vec<&Item> {
        let mut view: Vec<&Item> = self.items.iter().collect();
        view.sort_by(|a, b| {
            keys.iter()
                .map(|&key| a.compare_field(b, key))
                .find(|ord| ord.is_ne())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        view
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
