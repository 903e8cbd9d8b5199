use std::fmt::Write as _;
use std::sync::Arc;

use chrono::Utc;

use minimart_accounts::{User, UserHandle};
use minimart_catalog::{Product, ProductCode, ProductHandle};
use minimart_core::{DomainError, DomainResult, lock};

use crate::notice::{ProductAdded, UserRegistered};

/// Catalog slot. The code is copied out of the product once, since it never
/// changes, so lookups do not lock every product.
#[derive(Debug, Clone)]
struct CatalogEntry {
    code: ProductCode,
    product: ProductHandle,
}

/// Aggregate root: Store.
///
/// # Invariants
/// - No two catalog products share a code.
/// - Products and users keep insertion order; nothing is ever removed.
///
/// Methods that read products or users lock them one at a time; do not call
/// them while holding a lock on one of this store's handles.
#[derive(Debug)]
pub struct Store {
    name: String,
    products: Vec<CatalogEntry>,
    users: Vec<UserHandle>,
}

impl Store {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            products: Vec::new(),
            users: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a product to the catalog.
    ///
    /// Fails with `DuplicateKey` (catalog untouched) if a product with the
    /// same code is already listed.
    pub fn add_product(&mut self, product: ProductHandle) -> DomainResult<ProductAdded> {
        let (code, product_name) = {
            let p = lock(&product);
            (p.code().clone(), p.name().to_string())
        };

        if self.position(code.as_str()).is_some() {
            tracing::debug!(store = %self.name, product_code = %code, "duplicate product code");
            return Err(DomainError::duplicate_key(format!(
                "a product with code {code} already exists"
            )));
        }

        self.products.push(CatalogEntry {
            code: code.clone(),
            product,
        });

        tracing::info!(
            store = %self.name,
            product_code = %code,
            catalog_size = self.products.len(),
            "product added"
        );

        Ok(ProductAdded {
            store: self.name.clone(),
            product_code: code,
            product_name,
            catalog_size: self.products.len(),
            occurred_at: Utc::now(),
        })
    }

    /// Append a user to the registry. Duplicates are allowed.
    pub fn register_user(&mut self, user: UserHandle) -> UserRegistered {
        let (user_id, name, role) = {
            let u = lock(&user);
            (u.profile().id(), u.name().to_string(), u.role())
        };
        self.users.push(user);

        tracing::info!(store = %self.name, %user_id, %role, "user registered");

        UserRegistered {
            store: self.name.clone(),
            user_id,
            name,
            role,
            occurred_at: Utc::now(),
        }
    }

    /// The listed product with `code`, sharing state with the catalog.
    pub fn find_product(&self, code: &str) -> Option<ProductHandle> {
        self.position(code)
            .map(|idx| Arc::clone(&self.products[idx].product))
    }

    /// Snapshot of the catalog ordered by ascending price. Equal prices keep
    /// insertion order; the stored order is not touched.
    pub fn list_products(&self) -> Vec<Product> {
        let mut listing: Vec<Product> = self
            .products
            .iter()
            .map(|entry| lock(&entry.product).clone())
            .collect();
        listing.sort_by(Product::cmp_by_price);
        listing
    }

    /// Registered users in registration order.
    pub fn list_users(&self) -> Vec<UserHandle> {
        self.users.iter().map(Arc::clone).collect()
    }

    /// Number of catalog products (users are not counted).
    pub fn size(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Printable catalog listing, cheapest first.
    pub fn render_catalog(&self) -> String {
        let mut out = format!("Catalog of {}:", self.name);
        let listing = self.list_products();
        if listing.is_empty() {
            out.push_str("\n  (no products)");
        }
        for product in listing {
            let _ = write!(out, "\n  {product}");
        }
        out
    }

    /// Printable user listing, in registration order.
    pub fn render_users(&self) -> String {
        let mut out = format!("Users of {}:", self.name);
        if self.users.is_empty() {
            out.push_str("\n  (no users)");
        }
        for user in &self.users {
            let _ = write!(out, "\n  {}", lock(user).profile());
        }
        out
    }

    fn position(&self, code: &str) -> Option<usize> {
        self.products.iter().position(|entry| entry.code == *code)
    }
}

impl core::fmt::Display for Store {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Store: {} ({} products, {} users)",
            self.name,
            self.products.len(),
            self.users.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minimart_accounts::{Administrator, Customer, Role};
    use minimart_core::{DiscountRate, Money, UserIdSequence};
    use minimart_events::{Event, Notice, Outcome};
    use proptest::prelude::*;

    fn product(code: &str, name: &str, units: u64, stock: u32) -> ProductHandle {
        Product::new(code, name, Money::from_units(units))
            .with_stock(stock)
            .into_handle()
    }

    fn tech_store() -> Store {
        let mut store = Store::new("Tech Store");
        store.add_product(product("P001", "Laptop", 800, 5)).unwrap();
        store.add_product(product("P002", "Mouse", 25, 20)).unwrap();
        store.add_product(product("P003", "Keyboard", 60, 10)).unwrap();
        store
    }

    #[test]
    fn add_product_reports_the_new_catalog_size() {
        let mut store = Store::new("Tech Store");

        let notice = store.add_product(product("P001", "Laptop", 800, 5)).unwrap();

        assert_eq!(notice.catalog_size, 1);
        assert_eq!(notice.outcome(), Outcome::Success);
        assert_eq!(notice.event_type(), "store.catalog.product_added");
        assert_eq!(notice.to_string(), "Product added: Laptop");
        assert_eq!(store.size(), 1);
        assert!(!store.is_empty());
    }

    #[test]
    fn add_product_rejects_duplicate_codes() {
        let mut store = tech_store();

        let err = store
            .add_product(product("P002", "Other Mouse", 1, 1))
            .unwrap_err();

        match err {
            DomainError::DuplicateKey(msg) if msg.contains("P002") => {}
            other => panic!("Expected DuplicateKey, got {other:?}"),
        }
        assert_eq!(store.size(), 3);
        let mouse = store.find_product("P002").unwrap();
        assert_eq!(lock(&mouse).name(), "Mouse");
    }

    #[test]
    fn adding_the_same_handle_twice_is_a_duplicate() {
        let mut store = Store::new("Tech Store");
        let laptop = product("P001", "Laptop", 800, 5);

        store.add_product(Arc::clone(&laptop)).unwrap();
        assert!(store.add_product(laptop).is_err());
        assert_eq!(store.size(), 1);
    }

    #[test]
    fn find_product_shares_state_with_the_catalog() {
        let store = tech_store();

        let laptop = store.find_product("P001").unwrap();
        lock(&laptop).take_one();

        let again = store.find_product("P001").unwrap();
        assert_eq!(lock(&again).stock(), 4);
        assert!(store.find_product("P404").is_none());
    }

    #[test]
    fn list_products_orders_by_price_without_reordering_the_catalog() {
        let store = tech_store();

        let names: Vec<String> = store
            .list_products()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, ["Mouse", "Keyboard", "Laptop"]);

        let codes: Vec<&str> = store.products.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, ["P001", "P002", "P003"]);
    }

    #[test]
    fn register_user_keeps_order_and_allows_duplicates() {
        let ids = UserIdSequence::new();
        let mut store = Store::new("Tech Store");
        let ana = Customer::new(&ids, "Ana", "ana@email.com", DiscountRate::from_fraction(0.10))
            .into_handle();
        let laura = Administrator::new(&ids, "Laura", "laura@email.com", "Inventory").into_handle();

        let first = store.register_user(ana.clone());
        store.register_user(laura.clone());
        store.register_user(ana.clone());

        assert_eq!(first.user_id.get(), 1);
        assert_eq!(first.role, Role::Customer);
        assert_eq!(first.to_string(), "User registered: Ana");
        assert_eq!(store.user_count(), 3);
        assert_eq!(store.size(), 0);

        let names: Vec<String> = store
            .list_users()
            .iter()
            .map(|u| lock(u).name().to_string())
            .collect();
        assert_eq!(names, ["Ana", "Laura", "Ana"]);
    }

    #[test]
    fn registered_users_share_state_with_the_caller() {
        let ids = UserIdSequence::new();
        let mut store = tech_store();
        let ana = Customer::new(&ids, "Ana", "ana@email.com", DiscountRate::from_fraction(0.10))
            .into_handle();
        store.register_user(ana.clone());

        let laptop = store.find_product("P001").unwrap();
        lock(&ana).purchase(&mut lock(&laptop));

        let registered = store.list_users();
        assert_eq!(lock(&registered[0]).history(), vec!["Laptop".to_string()]);
    }

    #[test]
    fn renders_listings_and_summary() {
        let ids = UserIdSequence::new();
        let mut store = tech_store();
        store.register_user(
            Administrator::new(&ids, "Laura", "laura@email.com", "Inventory").into_handle(),
        );

        assert_eq!(
            store.render_catalog(),
            "Catalog of Tech Store:\n  [P002] Mouse - $25.00 (Stock: 20)\n  [P003] Keyboard - $60.00 (Stock: 10)\n  [P001] Laptop - $800.00 (Stock: 5)"
        );
        assert_eq!(
            store.render_users(),
            "Users of Tech Store:\n  Laura <laura@email.com> (ID: 1)"
        );
        assert_eq!(store.to_string(), "Store: Tech Store (3 products, 1 users)");
    }

    #[test]
    fn empty_listings_say_so() {
        let store = Store::new("Empty");
        assert_eq!(store.render_catalog(), "Catalog of Empty:\n  (no products)");
        assert_eq!(store.render_users(), "Users of Empty:\n  (no users)");
        assert!(store.is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: listing is ordered by non-decreasing price and ties keep
        /// insertion order.
        #[test]
        fn listing_is_a_stable_price_sort(prices in prop::collection::vec(0u64..20u64, 0..30)) {
            let mut store = Store::new("Prop Store");
            for (idx, price) in prices.iter().enumerate() {
                store
                    .add_product(product(&format!("P{idx:03}"), "Item", *price, 1))
                    .unwrap();
            }

            let listing = store.list_products();
            prop_assert_eq!(listing.len(), prices.len());
            for pair in listing.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                prop_assert!(a.price() <= b.price());
                if a.price() == b.price() {
                    prop_assert!(a.code().as_str() < b.code().as_str());
                }
            }
        }

        /// Property: a duplicate code is rejected and leaves the count unchanged.
        #[test]
        fn duplicate_codes_never_grow_the_catalog(
            codes in prop::collection::vec("[A-C][0-2]", 1..20)
        ) {
            let mut store = Store::new("Prop Store");
            let mut seen = std::collections::HashSet::new();

            for code in codes {
                let before = store.size();
                let result = store.add_product(product(&code, "Item", 1, 1));
                if seen.insert(code.clone()) {
                    prop_assert!(result.is_ok());
                    prop_assert_eq!(store.size(), before + 1);
                } else {
                    prop_assert!(matches!(result, Err(DomainError::DuplicateKey(_))));
                    prop_assert_eq!(store.size(), before);
                }
            }
        }
    }
}
