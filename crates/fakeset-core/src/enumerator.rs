//! Asynchronous enumeration over a synchronous in-memory iterator.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;

use crate::cancel::CancellationHandle;
use crate::error::TableError;
use crate::query::Rows;

/// Async enumerator wrapping a synchronous row iterator.
///
/// Rows come from the snapshot taken when the enumerator was created; no I/O
/// happens and every poll completes immediately.
pub struct AsyncEnumerator<T> {
    inner: Rows<T>,
    current: Option<T>,
}

impl<T> AsyncEnumerator<T> {
    pub fn new(inner: Rows<T>) -> Self {
        Self {
            inner,
            current: None,
        }
    }

    /// Advance to the next row. Returns `false` once the rows are exhausted.
    pub async fn move_next(&mut self, cancel: &CancellationHandle) -> Result<bool, TableError> {
        if cancel.is_cancelled() {
            return Err(TableError::Cancelled);
        }
        self.current = self.inner.next();
        Ok(self.current.is_some())
    }

    /// Row produced by the last successful `move_next`.
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub(crate) fn take_current(&mut self) -> Option<T> {
        self.current.take()
    }
}

// No field is structurally pinned.
impl<T> Unpin for AsyncEnumerator<T> {}

/// Polling as a [`Stream`] has no cancellation point; use `move_next` when
/// the enumeration must stop on a [`CancellationHandle`].
impl<T> Stream for AsyncEnumerator<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<T>> {
        Poll::Ready(self.get_mut().inner.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
