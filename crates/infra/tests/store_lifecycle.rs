use std::fs;

use electrovault_core::ItemId;
use electrovault_infra::{InventoryStore, StoreConfig};
use electrovault_inventory::{Inventory, NewItem};
use tempfile::TempDir;

struct TestVault {
    _dir: TempDir,
    config: StoreConfig,
}

impl TestVault {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let config = StoreConfig::new(dir.path().join("electrovault_inventory.json"));
        Self { _dir: dir, config }
    }

    fn store(&self) -> InventoryStore {
        InventoryStore::open(&self.config)
    }

    fn file_exists(&self) -> bool {
        self.config.data_path.exists()
    }
}

#[test]
fn first_run_session_on_disk() {
    let vault = TestVault::new();
    let store = vault.store();

    // Fresh install: samples are served but nothing is written yet.
    let inventory = store.load().unwrap();
    assert_eq!(inventory.len(), 4);
    assert!(!vault.file_exists());

    // First mutation persists samples + new item.
    let (inventory, added) = store
        .add_item(&inventory, NewItem::new("Ryzen 9 7950X", "CPU", 549.0, 2))
        .unwrap();
    assert_eq!(added.id(), ItemId::new(5));
    assert!(vault.file_exists());

    // A brand new process sees exactly what was written.
    let reopened = vault.store().load().unwrap();
    assert_eq!(reopened, inventory);
    assert_eq!(reopened.items()[0].name(), "Ryzen 9 7950X");

    let summary = reopened.summary();
    assert_eq!(summary.total_items, 3 + 8 + 12 + 25 + 2);
    assert_eq!(summary.low_stock_count, 2);
}

#[test]
fn delete_then_add_never_reuses_lower_ids() {
    let vault = TestVault::new();
    let store = vault.store();

    let inventory = store.load().unwrap();
    let inventory = store.delete_item(&inventory, ItemId::new(2)).unwrap();
    let (inventory, item) = store
        .add_item(&inventory, NewItem::new("Steam Deck", "Other", 399.0, 6))
        .unwrap();

    assert_eq!(item.id(), ItemId::new(5));
    assert!(!inventory.contains(ItemId::new(2)));
    assert_eq!(vault.store().load().unwrap(), inventory);
}

#[test]
fn purge_survives_restart_as_empty() {
    let vault = TestVault::new();
    let store = vault.store();

    let inventory = store.load().unwrap();
    store.clear_all(&inventory).unwrap();

    assert_eq!(fs::read_to_string(&vault.config.data_path).unwrap(), "[]");
    assert!(vault.store().load().unwrap().is_empty());
}

#[test]
fn hand_edited_file_is_reported_not_repaired() {
    let vault = TestVault::new();
    fs::write(&vault.config.data_path, "[{\"id\": \"one\"}]").unwrap();

    let err = vault.store().load().unwrap_err();
    assert!(err.is_corrupt_data(), "unexpected error: {err:?}");
    assert!(err.to_string().contains("corrupt inventory data"));

    // The file is left exactly as it was.
    assert_eq!(
        fs::read_to_string(&vault.config.data_path).unwrap(),
        "[{\"id\": \"one\"}]"
    );
}

#[test]
fn cache_hides_external_edits_until_next_save() {
    let vault = TestVault::new();
    let store = vault.store();

    let original = Inventory::defaults();
    store.save(&original).unwrap();
    assert_eq!(store.load().unwrap(), original);

    // Another writer replaces the file behind our back.
    fs::write(&vault.config.data_path, "[]").unwrap();
    assert_eq!(store.load().unwrap(), original);

    // Our own save invalidates the cache; the next load reflects disk.
    let (_, item) = store
        .add_item(&original, NewItem::new("Framework 13", "Laptop", 1049.0, 1))
        .unwrap();
    let reloaded = store.load().unwrap();
    assert_eq!(reloaded.items()[0], item);
    assert_eq!(reloaded.len(), 5);
}

#[test]
fn exhausted_id_space_refuses_add_and_keeps_file_loadable() {
    let vault = TestVault::new();
    let document = format!(
        "[{{\"id\": {}, \"name\": \"A\", \"category\": \"GPU\", \"price\": 1.0, \"qty\": 1}}]",
        u64::MAX
    );
    fs::write(&vault.config.data_path, &document).unwrap();

    let store = vault.store();
    let inventory = store.load().unwrap();
    let err = store
        .add_item(&inventory, NewItem::new("B", "GPU", 2.0, 1))
        .unwrap_err();
    assert!(err.to_string().contains("item id space exhausted"), "{err}");

    assert_eq!(fs::read_to_string(&vault.config.data_path).unwrap(), document);
    assert_eq!(vault.store().load().unwrap().len(), 1);
}
