//! Fake data context holding one table per entity type.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use crate::table::FakeTable;

/// Registry of fake tables keyed by entity type.
#[derive(Default)]
pub struct FakeContext {
    tables: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

/// Empty fake context.
pub fn fake_context() -> FakeContext {
    FakeContext::default()
}

impl FakeContext {
    pub fn with_table<T>(mut self, table: FakeTable<T>) -> Self
    where
        T: Send + Sync + 'static,
    {
        self.register(table);
        self
    }

    /// Register `table`, returning the table it replaced for the same entity type.
    pub fn register<T>(&mut self, table: FakeTable<T>) -> Option<FakeTable<T>>
    where
        T: Send + Sync + 'static,
    {
        tracing::debug!(element = std::any::type_name::<T>(), "register fake table");
        self.tables
            .insert(TypeId::of::<T>(), Box::new(table))
            .and_then(|prev| prev.downcast::<FakeTable<T>>().ok())
            .map(|prev| *prev)
    }

    /// Table for entity type `T`. The returned handle shares the registered store.
    pub fn table<T>(&self) -> Option<FakeTable<T>>
    where
        T: Send + Sync + 'static,
    {
        self.tables
            .get(&TypeId::of::<T>())?
            .downcast_ref::<FakeTable<T>>()
            .cloned()
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}
