//! Load-result cache for the inventory store.

use std::sync::RwLock;

use electrovault_inventory::Inventory;

/// Holds the last loaded inventory until the next save.
///
/// Two states: empty (next load reads storage) and loaded. `invalidate`
/// always returns to empty. A poisoned lock behaves like an empty cache.
#[derive(Debug, Default)]
pub struct LoadCache {
    slot: RwLock<Option<Inventory>>,
}

impl LoadCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached inventory, if loaded.
    pub fn get(&self) -> Option<Inventory> {
        self.slot.read().ok().and_then(|slot| slot.clone())
    }

    pub fn put(&self, inventory: Inventory) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = Some(inventory);
        }
    }

    /// Drop the cached value so the next load goes back to storage.
    pub fn invalidate(&self) {
        match self.slot.write() {
            Ok(mut slot) => *slot = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.slot.read().map(|slot| slot.is_some()).unwrap_or(false)
    }
}
