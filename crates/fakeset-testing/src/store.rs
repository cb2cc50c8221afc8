//! Backing store shared between a test and the fake tables built on it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Ordered rows owned by the test.
///
/// Clones share the same rows, so assertions made through one clone see
/// every mutation made through a table built on another.
pub struct Store<T> {
    rows: Arc<Mutex<Vec<T>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<T> Store<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns a shared handle to the raw rows for post-execution inspection.
    pub fn handle(&self) -> Arc<Mutex<Vec<T>>> {
        Arc::clone(&self.rows)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn push(&self, row: T) {
        self.lock().push(row);
    }

    pub fn extend(&self, rows: impl IntoIterator<Item = T>) {
        self.lock().extend(rows);
    }

    /// Remove the first row equal to `row`. Returns whether one was removed.
    pub fn remove_first(&self, row: &T) -> bool
    where
        T: PartialEq,
    {
        let mut rows = self.lock();
        match rows.iter().position(|r| r == row) {
            Some(idx) => {
                rows.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.lock().clone()
    }

    pub fn contains(&self, row: &T) -> bool
    where
        T: PartialEq,
    {
        self.lock().contains(row)
    }

    // A panicking test thread must not wedge the store for the assertions after it.
    fn lock(&self) -> MutexGuard<'_, Vec<T>> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<T>> for Store<T> {
    fn from(rows: Vec<T>) -> Self {
        Self::new(rows)
    }
}
