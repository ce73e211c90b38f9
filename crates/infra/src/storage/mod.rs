//! Persistence seam for the inventory.
//!
//! A backend only knows how to read and overwrite one whole inventory.
//! Caching, seeding and validation live in [`crate::store::InventoryStore`].

pub mod in_memory;
pub mod json_file;

use std::sync::Arc;

use electrovault_inventory::Inventory;

use crate::error::StoreResult;

pub use in_memory::InMemoryStorage;
pub use json_file::{to_json_document, JsonFileStorage};

/// Whole-inventory storage backend.
pub trait InventoryStorage: Send + Sync {
    /// Read the persisted inventory, or `None` if nothing has been saved yet.
    fn read(&self) -> StoreResult<Option<Inventory>>;

    /// Replace the persisted inventory entirely.
    fn write(&self, inventory: &Inventory) -> StoreResult<()>;

    /// Human-readable location for logs.
    fn describe(&self) -> String;
}

impl<S> InventoryStorage for Arc<S>
where
    S: InventoryStorage + ?Sized,
{
    fn read(&self) -> StoreResult<Option<Inventory>> {
        (**self).read()
    }

    fn write(&self, inventory: &Inventory) -> StoreResult<()> {
        (**self).write(inventory)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
