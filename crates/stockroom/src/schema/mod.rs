//! The fixed inventory schema.
//!
//! The schema is a process-wide constant: an ordered list of [`Field`]s, each
//! with a [`FieldKind`]. The store header, the add-item prompts, and the report
//! columns all follow this order.

mod field;
mod types;

pub use field::Field;
pub use types::FieldKind;

/// All fields in schema order.
pub fn fields() -> &'static [Field] {
    &Field::ALL
}

/// Fields an operator supplies when creating a record.
pub fn input_fields() -> impl Iterator<Item = Field> {
    Field::ALL.into_iter().filter(|f| f.kind().is_input())
}

/// Column names in schema order.
pub fn header() -> Vec<&'static str> {
    Field::ALL.iter().map(Field::name).collect()
}

/// Returns true if `name` is a computed column. Unknown names are not derived.
pub fn is_derived(name: &str) -> bool {
    kind_of(name) == Some(FieldKind::Derived)
}

/// Kind of the column named `name`, if it exists.
pub fn kind_of(name: &str) -> Option<FieldKind> {
    name.parse::<Field>().ok().map(|f| f.kind())
}
