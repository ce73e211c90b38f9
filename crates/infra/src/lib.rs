//! Infrastructure layer: persistence backends, load cache, config and the
//! inventory store that ties them together.

pub mod cache;
pub mod config;
pub mod error;
pub mod storage;
pub mod store;

pub use cache::LoadCache;
pub use config::{StoreConfig, DATA_PATH_ENV, DEFAULT_DATA_FILE};
pub use error::{StoreError, StoreResult};
pub use storage::{to_json_document, InMemoryStorage, InventoryStorage, JsonFileStorage};
pub use store::InventoryStore;
