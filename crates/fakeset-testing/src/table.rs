//! In-memory [`Table`] implementation backed by a [`Store`].
//!
//! Every read and write goes straight to the store. `find` knows nothing about
//! key configuration, so by default it never finds anything; tests that need
//! keyed lookups install their own finder with [`FakeTable::with_finder`].

use std::fmt;
use std::sync::Arc;

use fakeset_core::{
    AsyncQueryProvider, CancellationHandle, ElementType, FakeTableOptions, QueryExpr,
    QueryProvider, Table, TableError, Value,
};

use crate::store::Store;

type Finder<T> = Arc<dyn Fn(&[Value]) -> Option<T> + Send + Sync>;

/// Fake table over a test-owned [`Store`].
pub struct FakeTable<T> {
    store: Store<T>,
    finder: Finder<T>,
    options: FakeTableOptions,
}

impl<T> Clone for FakeTable<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            finder: Arc::clone(&self.finder),
            options: self.options.clone(),
        }
    }
}

impl<T> fmt::Debug for FakeTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakeTable")
            .field("element", &std::any::type_name::<T>())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

fn run_lookup<T>(
    finder: &Finder<T>,
    cancel: Option<&CancellationHandle>,
    keys: &[Value],
) -> Result<Option<T>, TableError> {
    if cancel.is_some_and(CancellationHandle::is_cancelled) {
        return Err(TableError::Cancelled);
    }
    Ok(finder(keys))
}

/// Fake table serving synchronous queries only.
pub fn fake_table<T>(rows: Vec<T>) -> FakeTable<T>
where
    T: Clone + PartialEq + Default + Send + Sync + 'static,
{
    FakeTable::from_store(Store::new(rows), FakeTableOptions::default())
}

/// Fake table that also serves asynchronous queries.
pub fn fake_table_async<T>(rows: Vec<T>) -> FakeTable<T>
where
    T: Clone + PartialEq + Default + Send + Sync + 'static,
{
    FakeTable::from_store(Store::new(rows), FakeTableOptions::with_async_queries())
}

impl<T> FakeTable<T>
where
    T: Clone + PartialEq + Default + Send + Sync + 'static,
{
    pub fn from_store(store: Store<T>, options: FakeTableOptions) -> Self {
        Self {
            store,
            finder: Arc::new(|_: &[Value]| None),
            options,
        }
    }

    /// Replace the lookup used by `find` and its async variants.
    pub fn with_finder<F>(mut self, finder: F) -> Self
    where
        F: Fn(&[Value]) -> Option<T> + Send + Sync + 'static,
    {
        self.finder = Arc::new(finder);
        self
    }

    pub fn store(&self) -> &Store<T> {
        &self.store
    }

    pub fn options(&self) -> &FakeTableOptions {
        &self.options
    }

    /// Run the finder on a blocking task, or inline when no Tokio runtime is
    /// current. Cancellation is only observed before the lookup starts.
    async fn lookup(
        &self,
        cancel: Option<&CancellationHandle>,
        keys: Vec<Value>,
    ) -> Result<Option<T>, TableError> {
        if cancel.is_some_and(CancellationHandle::is_cancelled) {
            return Err(TableError::Cancelled);
        }
        if tokio::runtime::Handle::try_current().is_err() {
            return run_lookup(&self.finder, cancel, &keys);
        }
        let finder = Arc::clone(&self.finder);
        let cancel = cancel.cloned();
        tokio::task::spawn_blocking(move || run_lookup(&finder, cancel.as_ref(), &keys)).await?
    }

    fn label(&self) -> &str {
        self.options
            .label
            .as_deref()
            .unwrap_or_else(|| std::any::type_name::<T>())
    }
}

impl<T> Table<T> for FakeTable<T>
where
    T: Clone + PartialEq + Default + Send + Sync + 'static,
{
    fn iter(&self) -> std::vec::IntoIter<T> {
        self.store.snapshot().into_iter()
    }

    fn provider(&self) -> QueryProvider<T> {
        let store = self.store.clone();
        QueryProvider::new(move || store.snapshot())
    }

    fn async_provider(&self) -> Result<AsyncQueryProvider<T>, TableError> {
        if !self.options.async_queries {
            tracing::debug!(table = self.label(), "async provider requested on sync table");
            return Err(TableError::AsyncQueryUnsupported);
        }
        Ok(AsyncQueryProvider::new(self.provider()))
    }

    fn expression(&self) -> QueryExpr {
        QueryExpr::Source(self.element_type())
    }

    fn element_type(&self) -> ElementType {
        ElementType::of::<T>()
    }

    fn find(&self, keys: &[Value]) -> Option<T> {
        let found = (self.finder)(keys);
        tracing::trace!(table = self.label(), ?keys, found = found.is_some(), "find");
        found
    }

    async fn find_async(&self, keys: Vec<Value>) -> Result<Option<T>, TableError> {
        let found = self.lookup(None, keys).await?;
        tracing::trace!(table = self.label(), found = found.is_some(), "find_async");
        Ok(found)
    }

    async fn find_async_with_cancel(
        &self,
        cancel: &CancellationHandle,
        keys: Vec<Value>,
    ) -> Result<Option<T>, TableError> {
        let found = self.lookup(Some(cancel), keys).await?;
        tracing::trace!(table = self.label(), found = found.is_some(), "find_async_with_cancel");
        Ok(found)
    }

    fn create(&self) -> T {
        T::default()
    }

    fn add(&self, entity: T) -> T {
        self.store.push(entity.clone());
        tracing::debug!(table = self.label(), len = self.store.len(), "add");
        entity
    }

    fn add_range(&self, entities: Vec<T>) -> Vec<T> {
        self.store.extend(entities.iter().cloned());
        tracing::debug!(
            table = self.label(),
            count = entities.len(),
            len = self.store.len(),
            "add_range"
        );
        entities
    }

    fn remove(&self, entity: T) -> T {
        let removed = self.store.remove_first(&entity);
        tracing::debug!(table = self.label(), removed, len = self.store.len(), "remove");
        entity
    }

    fn remove_range(&self, entities: Vec<T>) -> Vec<T> {
        let mut removed = 0;
        for entity in &entities {
            if self.store.remove_first(entity) {
                removed += 1;
            }
        }
        tracing::debug!(
            table = self.label(),
            count = entities.len(),
            removed,
            len = self.store.len(),
            "remove_range"
        );
        entities
    }

    fn attach(&self, entity: T) -> T {
        self.store.push(entity.clone());
        tracing::debug!(table = self.label(), len = self.store.len(), "attach");
        entity
    }

    fn include(&self, path: &str) -> &Self {
        tracing::trace!(table = self.label(), path, "include ignored");
        self
    }

    fn as_no_tracking(&self) -> &Self {
        self
    }
}
