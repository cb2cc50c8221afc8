//! In-memory stand-ins for [`Table`] so code written against it can be unit
//! tested without a database.
//!
//! Import in `[dev-dependencies]` only — never in production code.

pub mod context;
pub mod store;
pub mod table;

pub use context::{FakeContext, fake_context};
pub use fakeset_core::{CancellationHandle, FakeTableOptions, Table, TableError, Value};
pub use store::Store;
pub use table::{FakeTable, fake_table, fake_table_async};
