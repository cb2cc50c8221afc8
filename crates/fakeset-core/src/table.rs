#![allow(async_fn_in_trait)]

use sea_orm::Value;

use crate::cancel::CancellationHandle;
use crate::error::TableError;
use crate::provider::{AsyncQueryProvider, QueryProvider};
use crate::query::{ElementType, QueryExpr};

/// Query and mutation surface of a single table of `T` rows.
///
/// Mutations take effect before they return. Hint operations (`include`,
/// `as_no_tracking`) return the same handle so calls can be chained.
pub trait Table<T>: Send + Sync {
    /// Snapshot of the current rows, in store order.
    fn iter(&self) -> std::vec::IntoIter<T>;

    fn provider(&self) -> QueryProvider<T>;

    /// Fails with [`TableError::AsyncQueryUnsupported`] when the table was not
    /// built for asynchronous queries.
    fn async_provider(&self) -> Result<AsyncQueryProvider<T>, TableError>;

    fn expression(&self) -> QueryExpr;

    fn element_type(&self) -> ElementType;

    /// Look a row up by its key values.
    fn find(&self, keys: &[Value]) -> Option<T>;

    /// Same lookup as [`Table::find`], resolved on a background task when a
    /// Tokio runtime is current and inline otherwise.
    async fn find_async(&self, keys: Vec<Value>) -> Result<Option<T>, TableError>;

    /// Fails with [`TableError::Cancelled`] if `cancel` fired before the
    /// lookup started.
    async fn find_async_with_cancel(
        &self,
        cancel: &CancellationHandle,
        keys: Vec<Value>,
    ) -> Result<Option<T>, TableError>;

    /// New default instance. It is not added to the table.
    fn create(&self) -> T;

    fn add(&self, entity: T) -> T;

    fn add_range(&self, entities: Vec<T>) -> Vec<T>;

    /// Remove the first row equal to `entity`, if any.
    fn remove(&self, entity: T) -> T;

    fn remove_range(&self, entities: Vec<T>) -> Vec<T>;

    fn attach(&self, entity: T) -> T;

    fn include(&self, path: &str) -> &Self;

    fn as_no_tracking(&self) -> &Self;
}
