//! The inventory store: load/save with a load cache, plus persisted mutations.

use std::fs;
use std::path::Path;

use electrovault_core::ItemId;
use electrovault_inventory::{is_known_category, Inventory, Item, NewItem};

use crate::cache::LoadCache;
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::storage::{to_json_document, InventoryStorage, JsonFileStorage};

/// Single source of truth for the persisted inventory.
///
/// Mutations take the caller's current inventory and return the new one
/// (immutable-update style); the caller's value is never touched, so on any
/// error it still reflects the last good state. Every successful mutation
/// rewrites the whole backend and invalidates the load cache.
#[derive(Debug)]
pub struct InventoryStore<S = JsonFileStorage> {
    storage: S,
    cache: LoadCache,
}

impl InventoryStore<JsonFileStorage> {
    /// Store backed by the JSON file named in `config`.
    pub fn open(config: &StoreConfig) -> Self {
        Self::new(JsonFileStorage::new(config.data_path.clone()))
    }
}

impl<S> InventoryStore<S>
where
    S: InventoryStorage,
{
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            cache: LoadCache::new(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Whether the next `load` will be served from the cache.
    pub fn is_cached(&self) -> bool {
        self.cache.is_loaded()
    }

    /// Load the inventory, seeding the built-in samples when nothing was saved.
    ///
    /// Seeding does not write anything; the samples are only persisted by the
    /// first mutation.
    pub fn load(&self) -> StoreResult<Inventory> {
        if let Some(inventory) = self.cache.get() {
            tracing::debug!(items = inventory.len(), "inventory served from cache");
            return Ok(inventory);
        }

        let inventory = match self.storage.read()? {
            Some(inventory) => inventory,
            None => {
                tracing::info!(
                    location = %self.storage.describe(),
                    "no saved inventory, using built-in samples"
                );
                Inventory::defaults()
            }
        };

        self.cache.put(inventory.clone());
        Ok(inventory)
    }

    /// Overwrite the backend with `inventory` and drop the cached load.
    pub fn save(&self, inventory: &Inventory) -> StoreResult<()> {
        self.storage.write(inventory)?;
        self.cache.invalidate();
        tracing::debug!(
            location = %self.storage.describe(),
            items = inventory.len(),
            "inventory saved"
        );
        Ok(())
    }

    /// Validate and prepend a new item, then persist.
    pub fn add_item(&self, inventory: &Inventory, new: NewItem) -> StoreResult<(Inventory, Item)> {
        let mut next = inventory.clone();
        let item = next.add(new)?;

        if !is_known_category(item.category()) {
            tracing::warn!(category = item.category(), "adding item with unlisted category");
        }

        self.save(&next)?;
        tracing::info!(id = %item.id(), name = item.name(), "item added");
        Ok((next, item))
    }

    /// Remove `id` and persist. An unknown id leaves the contents unchanged.
    pub fn delete_item(&self, inventory: &Inventory, id: ItemId) -> StoreResult<Inventory> {
        let mut next = inventory.clone();
        let removed = next.remove(id);

        self.save(&next)?;
        match removed {
            Some(item) => tracing::info!(id = %id, name = item.name(), "item deleted"),
            None => tracing::debug!(id = %id, "delete of unknown item id"),
        }
        Ok(next)
    }

    /// Discard every item and persist the empty inventory.
    ///
    /// Unconditional; any confirmation step belongs to the caller.
    pub fn clear_all(&self, inventory: &Inventory) -> StoreResult<Inventory> {
        let next = Inventory::new();
        self.save(&next)?;
        tracing::info!(discarded = inventory.len(), "inventory purged");
        Ok(next)
    }

    /// Change the stock of `id` by `delta` and persist.
    pub fn adjust_stock(
        &self,
        inventory: &Inventory,
        id: ItemId,
        delta: i64,
    ) -> StoreResult<(Inventory, Item)> {
        let mut next = inventory.clone();
        let item = next.adjust_stock(id, delta)?;

        self.save(&next)?;
        tracing::info!(id = %id, delta, qty = item.qty(), "stock adjusted");
        Ok((next, item))
    }

    /// The inventory as a JSON document in the persisted format.
    pub fn export(&self, inventory: &Inventory) -> StoreResult<String> {
        to_json_document(inventory)
    }

    /// Write the export document to `path`. The store's own file and cache are untouched.
    pub fn export_to(&self, inventory: &Inventory, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        let document = self.export(inventory)?;
        fs::write(path, document).map_err(|e| StoreError::io(path, e))?;
        tracing::info!(path = %path.display(), items = inventory.len(), "inventory exported");
        Ok(())
    }
}
