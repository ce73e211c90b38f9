//! Flat JSON file backend.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use electrovault_inventory::Inventory;

use crate::error::{StoreError, StoreResult};
use crate::storage::InventoryStorage;

/// Render the inventory as the persisted JSON document
/// (array of items, 4-space indent, fields in declaration order).
pub fn to_json_document(inventory: &Inventory) -> StoreResult<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    inventory.serialize(&mut ser).map_err(StoreError::Serialize)?;
    // serde_json only ever emits UTF-8.
    String::from_utf8(buf).map_err(|e| StoreError::Serialize(serde::ser::Error::custom(e)))
}

/// Stores the inventory as one JSON document at `path`.
///
/// Every write replaces the whole file. There is no locking: if two processes
/// write the same file, the last writer wins.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InventoryStorage for JsonFileStorage {
    fn read(&self) -> StoreResult<Option<Inventory>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no inventory file yet");
                return Ok(None);
            }
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };

        let inventory: Inventory = serde_json::from_str(&contents)
            .map_err(|e| StoreError::corrupt(&self.path, e.to_string()))?;

        tracing::debug!(
            path = %self.path.display(),
            items = inventory.len(),
            "read inventory file"
        );
        Ok(Some(inventory))
    }

    fn write(&self, inventory: &Inventory) -> StoreResult<()> {
        let document = to_json_document(inventory)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }

        fs::write(&self.path, document).map_err(|e| StoreError::io(&self.path, e))?;

        tracing::debug!(
            path = %self.path.display(),
            items = inventory.len(),
            "wrote inventory file"
        );
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
