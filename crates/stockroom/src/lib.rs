//! Stockroom: a validated inventory table backed by a CSV file.
//!
//! The table holds one [`Item`] per Item_ID. Every value is checked on the way
//! in, and the derived Total_Value is always `Sales_Price × Quantity`.
//!
//! # Core Principles
//!
//! - **Typed fields**: columns are a closed [`Field`] enum, not strings
//! - **Exact money**: prices are whole cents, never floats
//! - **Explicit persistence**: nothing reaches disk unless a [`Store`] is asked
//!
//! # Example
//!
//! ```no_run
//! use stockroom::{CsvStore, Field, Store};
//!
//! let store = CsvStore::open("inventory.csv");
//! let (mut table, _meta) = store.load().unwrap();
//!
//! table.update_field("A1", Field::Quantity, "5").unwrap();
//! println!("Total: {}", table.get("A1").unwrap().total_value());
//!
//! store.save(&table).unwrap();
//! ```

pub mod error;
pub mod money;
pub mod paths;
pub mod record;
pub mod report;
pub mod schema;
pub mod store;
pub mod table;

pub use error::{Result, StockroomError, ValidationError};
pub use money::Money;
pub use record::{FieldValue, Item, ItemBuilder, build_record};
pub use report::{GridReporter, ReportConfig, Reporter, render_item};
pub use schema::{Field, FieldKind};
pub use store::{CsvStore, Store, StoreConfig, StoreMetadata};
pub use table::Table;
