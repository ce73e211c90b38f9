//! Inventory domain module.
//!
//! Items, the ordered inventory collection, search and analytics, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod analytics;
pub mod inventory;
pub mod item;

pub use analytics::{CategoryShare, InventorySummary, DEFAULT_TOP_N};
pub use inventory::Inventory;
pub use item::{category_icon, is_known_category, Item, NewItem, Price, KNOWN_CATEGORIES, LOW_STOCK_THRESHOLD};
