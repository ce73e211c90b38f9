use serde::{Deserialize, Serialize, Serializer};

use electrovault_core::{ensure_unique_ids, DomainError, DomainResult, ItemId};

use crate::item::{sample_items, Item, NewItem};

/// Ordered collection of items. Ids are unique at all times.
///
/// Order is display order: new items go to the front. Serializes as a bare
/// JSON array of items.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Vec<Item>")]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from existing records, rejecting duplicate ids.
    pub fn from_items(items: Vec<Item>) -> DomainResult<Self> {
        ensure_unique_ids(&items)?;
        Ok(Self { items })
    }

    /// The built-in sample set used when nothing has been persisted yet.
    pub fn defaults() -> Self {
        Self {
            items: sample_items(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// `max(ids) + 1`, or 1 for an empty inventory.
    ///
    /// Fails once the largest id is `u64::MAX`.
    pub fn next_id(&self) -> DomainResult<ItemId> {
        match self.items.iter().map(Item::id).max() {
            None => Ok(ItemId::FIRST),
            Some(max) => max
                .next()
                .ok_or_else(|| DomainError::invariant("item id space exhausted")),
        }
    }

    /// Validate `new`, assign the next id and prepend it.
    ///
    /// On a validation error nothing is inserted.
    pub fn add(&mut self, new: NewItem) -> DomainResult<Item> {
        let item = new.into_item(self.next_id()?)?;
        self.items.insert(0, item.clone());
        Ok(item)
    }

    /// Remove the item with `id`. Unknown ids are a no-op and return `None`.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let pos = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(pos))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Change the quantity of `id` by `delta`.
    ///
    /// The resulting quantity may be zero but never negative.
    pub fn adjust_stock(&mut self, id: ItemId, delta: i64) -> DomainResult<Item> {
        if delta == 0 {
            return Err(DomainError::validation("qty", "delta cannot be zero"));
        }

        let item = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(DomainError::not_found)?;

        let new_qty = i64::from(item.qty()) + delta;
        if new_qty < 0 {
            return Err(DomainError::invariant("stock cannot go negative"));
        }
        let new_qty = u32::try_from(new_qty)
            .map_err(|_| DomainError::validation("qty", format!("must not exceed {}", u32::MAX)))?;

        item.set_qty(new_qty);
        Ok(item.clone())
    }

    /// Case-insensitive substring match on name or category.
    ///
    /// An empty term matches everything. Source order is preserved.
    pub fn search(&self, term: &str) -> Vec<&Item> {
        if term.is_empty() {
            return self.items.iter().collect();
        }
        let term = term.to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                item.name().to_lowercase().contains(&term)
                    || item.category().to_lowercase().contains(&term)
            })
            .collect()
    }
}

impl TryFrom<Vec<Item>> for Inventory {
    type Error = DomainError;

    fn try_from(items: Vec<Item>) -> Result<Self, Self::Error> {
        Inventory::from_items(items)
    }
}

impl Serialize for Inventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = core::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
