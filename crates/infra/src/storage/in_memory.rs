//! In-memory backend for tests/dev.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use electrovault_inventory::Inventory;

use crate::error::StoreResult;
use crate::storage::InventoryStorage;

/// Keeps the "persisted" inventory in memory and counts backend calls.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    inner: RwLock<Option<Inventory>>,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl InMemoryStorage {
    /// Nothing persisted yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start as if `inventory` had already been saved.
    pub fn with_inventory(inventory: Inventory) -> Self {
        Self {
            inner: RwLock::new(Some(inventory)),
            ..Self::default()
        }
    }

    /// Number of `read` calls that reached this backend.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of `write` calls that reached this backend.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Current contents, bypassing the counters.
    pub fn snapshot(&self) -> Option<Inventory> {
        self.inner.read().ok().and_then(|guard| guard.clone())
    }
}

impl InventoryStorage for InMemoryStorage {
    fn read(&self) -> StoreResult<Option<Inventory>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.snapshot())
    }

    fn write(&self, inventory: &Inventory) -> StoreResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(inventory.clone());
        }
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
