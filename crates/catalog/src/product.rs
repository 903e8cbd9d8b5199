use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use minimart_core::{Entity, Money};

/// Product code: the catalog's unique key (e.g. "P001").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCode(String);

impl ProductCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProductCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for ProductCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Shared reference to a catalog product.
///
/// The store's catalog and any buyer hold clones of the same handle; locking
/// it makes a stock check and the following decrement one critical section.
pub type ProductHandle = Arc<Mutex<Product>>;

/// Entity: Product.
///
/// # Invariants
/// - `code` never changes after construction.
/// - `stock` is never negative; it only goes down through [`take_one`](Self::take_one)
///   and up through [`replenish`](Self::replenish).
///
/// Equality (and hashing) is by code only. Catalog listings order products by
/// price through [`cmp_by_price`](Self::cmp_by_price) rather than `Ord`, since
/// two equal-priced products are not the same product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    code: ProductCode,
    name: String,
    price: Money,
    stock: u32,
}

impl Product {
    /// New product with no stock. Price and name are not validated.
    pub fn new(code: impl Into<ProductCode>, name: impl Into<String>, price: Money) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price,
            stock: 0,
        }
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// Wrap into a [`ProductHandle`] for sharing with a store.
    pub fn into_handle(self) -> ProductHandle {
        Arc::new(Mutex::new(self))
    }

    pub fn code(&self) -> &ProductCode {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Remove one unit from stock. Callers gate on [`in_stock`](Self::in_stock);
    /// an empty product stays at zero.
    pub fn take_one(&mut self) {
        self.stock = self.stock.saturating_sub(1);
    }

    /// Add `quantity` units, or return `None` (leaving stock untouched) if the
    /// counter would overflow.
    pub fn replenish(&mut self, quantity: u32) -> Option<u32> {
        let stock = self.stock.checked_add(quantity)?;
        self.stock = stock;
        Some(stock)
    }

    /// Catalog ordering: ascending price.
    pub fn cmp_by_price(&self, other: &Product) -> core::cmp::Ordering {
        self.price.cmp(&other.price)
    }
}

impl Entity for Product {
    type Id = ProductCode;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Product {}

impl core::hash::Hash for Product {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[{}] {} - {} (Stock: {})",
            self.code, self.name, self.price, self.stock
        )
    }
}
