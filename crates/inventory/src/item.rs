use serde::{Deserialize, Serialize};

use electrovault_core::{DomainError, DomainResult, Entity, ItemId, ValidationErrors, ValueObject};

/// Items with a quantity strictly below this are "low stock".
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Category labels the front end offers. Any other string is still accepted.
pub const KNOWN_CATEGORIES: [&str; 6] = ["GPU", "CPU", "Mobile", "Laptop", "Accessory", "Other"];

/// Returns true when `category` is one of [`KNOWN_CATEGORIES`] (exact match).
pub fn is_known_category(category: &str) -> bool {
    KNOWN_CATEGORIES.contains(&category)
}

/// Glyph shown next to items of `category`; unlisted categories get a box.
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "GPU" => "🧠",
        "CPU" => "💻",
        "Mobile" => "📱",
        "Laptop" => "🖥️",
        "Accessory" => "🎧",
        _ => "📦",
    }
}

/// Unit price of an item, a finite currency amount strictly greater than zero.
///
/// Serialized as a bare JSON number. Deserializing a non-positive price fails,
/// which the store reports as corrupt data.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("price", "must be a finite number"));
        }
        if amount <= 0.0 {
            return Err(DomainError::validation("price", "must be greater than 0"));
        }
        Ok(Self(amount))
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

impl ValueObject for Price {}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Price::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// One inventory record.
///
/// Field order here is the field order of the persisted JSON document.
/// Deserializing rejects blank names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord")]
pub struct Item {
    id: ItemId,
    name: String,
    category: String,
    price: Price,
    qty: u32,
}

impl Item {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Price,
        qty: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
            qty,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn qty(&self) -> u32 {
        self.qty
    }

    pub fn is_low_stock(&self) -> bool {
        self.qty < LOW_STOCK_THRESHOLD
    }

    /// price × qty
    pub fn total_value(&self) -> f64 {
        self.price.amount() * f64::from(self.qty)
    }

    pub(crate) fn set_qty(&mut self, qty: u32) {
        self.qty = qty;
    }
}

#[derive(Deserialize)]
struct ItemRecord {
    id: ItemId,
    name: String,
    category: String,
    price: Price,
    qty: u32,
}

impl TryFrom<ItemRecord> for Item {
    type Error = DomainError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        if record.name.trim().is_empty() {
            return Err(DomainError::validation("name", "must not be empty"));
        }
        Ok(Item::new(
            record.id,
            record.name,
            record.category,
            record.price,
            record.qty,
        ))
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}

/// Input for adding an item; the id is assigned by the inventory.
///
/// Fields are raw user input. `validate` checks every field and reports all
/// failures together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub qty: i64,
}

impl NewItem {
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: f64, qty: i64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            qty,
        }
    }

    /// Add-time constraints: non-empty name, price > 0, qty >= 1.
    ///
    /// A stored item may hold qty 0; the floor of 1 only applies here.
    pub fn validate(&self) -> DomainResult<()> {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.push("name", "must not be empty");
        }
        if let Err(DomainError::Validation(price_errors)) = Price::new(self.price) {
            for v in price_errors.violations() {
                errors.push(v.field, v.message.clone());
            }
        }
        if self.qty < 1 {
            errors.push("qty", "must be at least 1");
        } else if u32::try_from(self.qty).is_err() {
            errors.push("qty", format!("must not exceed {}", u32::MAX));
        }

        errors.into_result()
    }

    /// Validate and build the stored record under `id`.
    pub(crate) fn into_item(self, id: ItemId) -> DomainResult<Item> {
        self.validate()?;
        let price = Price::new(self.price)?;
        let qty = u32::try_from(self.qty)
            .map_err(|_| DomainError::validation("qty", "out of range"))?;
        Ok(Item {
            id,
            name: self.name.trim().to_string(),
            category: self.category,
            price,
            qty,
        })
    }
}

/// The four sample records a fresh installation starts with.
pub(crate) fn sample_items() -> Vec<Item> {
    vec![
        Item::new(ItemId::new(1), "GeForce RTX 4090", "GPU", Price(1599.99), 3),
        Item::new(ItemId::new(2), "MacBook Pro M2", "Laptop", Price(2499.00), 8),
        Item::new(ItemId::new(3), "Samsung S24 Ultra", "Mobile", Price(1199.50), 12),
        Item::new(ItemId::new(4), "Sony WH-1000XM5", "Accessory", Price(348.00), 25),
    ]
}
