//! Table-like query and mutation contract plus the in-memory query plumbing
//! that fake tables are built on.
//!
//! Application code is written against [`Table`]; tests supply an in-memory
//! implementation from `fakeset-testing`.

pub mod cancel;
pub mod config;
pub mod enumerator;
pub mod error;
pub mod provider;
pub mod query;
pub mod table;
pub mod tracing;

pub use cancel::CancellationHandle;
pub use config::FakeTableOptions;
pub use enumerator::AsyncEnumerator;
pub use error::TableError;
pub use provider::{AsyncQueryProvider, QueryProvider};
pub use query::{ElementType, Query, QueryExpr};
pub use sea_orm::Value;
pub use table::Table;
