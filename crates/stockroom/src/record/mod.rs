//! Inventory records: typed values, validation, and construction.

mod builder;
mod item;
mod value;

pub use builder::{ItemBuilder, build_record};
pub use item::Item;
pub use value::{FieldValue, normalize_text, parse_count, parse_identifier, parse_price};
