//! Query providers bound to a backing source.

use std::fmt;

use crate::cancel::CancellationHandle;
use crate::enumerator::AsyncEnumerator;
use crate::error::TableError;
use crate::query::{Query, Source};

/// Creates and executes queries against one backing source.
pub struct QueryProvider<T> {
    source: Source<T>,
}

impl<T> Clone for QueryProvider<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

impl<T> fmt::Debug for QueryProvider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryProvider").finish_non_exhaustive()
    }
}

impl<T: Send + 'static> QueryProvider<T> {
    pub fn new<F>(source: F) -> Self
    where
        F: Fn() -> Vec<T> + Send + Sync + 'static,
    {
        Self {
            source: std::sync::Arc::new(source),
        }
    }

    /// Root query over the whole source.
    pub fn create_query(&self) -> Query<T> {
        Query::from_source(self.source.clone())
    }

    pub fn execute<U: Send + 'static>(&self, query: &Query<U>) -> Vec<U> {
        query.to_vec()
    }
}

/// Query provider that can also hand out asynchronous enumerators.
pub struct AsyncQueryProvider<T> {
    inner: QueryProvider<T>,
}

impl<T> Clone for AsyncQueryProvider<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> fmt::Debug for AsyncQueryProvider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncQueryProvider").finish_non_exhaustive()
    }
}

impl<T: Send + 'static> AsyncQueryProvider<T> {
    pub fn new(inner: QueryProvider<T>) -> Self {
        Self { inner }
    }

    pub fn create_query(&self) -> Query<T> {
        self.inner.create_query()
    }

    pub fn execute<U: Send + 'static>(&self, query: &Query<U>) -> Vec<U> {
        self.inner.execute(query)
    }

    /// Snapshot `query` now and enumerate it asynchronously.
    pub fn enumerate_async<U: Send + 'static>(&self, query: &Query<U>) -> AsyncEnumerator<U> {
        AsyncEnumerator::new(query.rows())
    }

    /// Drain `query` through an async enumerator, honoring `cancel` between rows.
    pub async fn to_vec_async<U: Send + 'static>(
        &self,
        query: &Query<U>,
        cancel: &CancellationHandle,
    ) -> Result<Vec<U>, TableError> {
        let mut enumerator = self.enumerate_async(query);
        let mut rows = Vec::new();
        while enumerator.move_next(cancel).await? {
            if let Some(row) = enumerator.take_current() {
                rows.push(row);
            }
        }
        tracing::trace!(rows = rows.len(), expr = %query.expression(), "drained async query");
        Ok(rows)
    }
}
