//! Administrators: audited full-price purchases and restocking.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde::Serialize;

use minimart_catalog::Product;
use minimart_core::{DomainError, DomainResult, Entity, UserId, UserIdSequence};

use crate::notice::{PurchaseCompleted, PurchaseOutcome, StockReplenished};
use crate::profile::UserProfile;
use crate::roles::Role;
use crate::user::User;

/// Suffix that marks an administrator purchase in the history.
pub const ADMIN_PURCHASE_TAG: &str = "(admin purchase)";

/// A staff member.
///
/// Pays full price and has every purchase tagged for audit. The only user kind
/// allowed to add stock.
#[derive(Debug, Clone, Serialize)]
pub struct Administrator {
    profile: UserProfile,
    department: String,
}

impl Administrator {
    pub fn new(
        ids: &UserIdSequence,
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            profile: UserProfile::new(ids, name, email),
            department: department.into(),
        }
    }

    pub fn into_handle(self) -> Arc<Mutex<Administrator>> {
        Arc::new(Mutex::new(self))
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    /// Add `quantity` units to `product`.
    ///
    /// Fails with `InvalidArgument` (and changes nothing) when `quantity` is
    /// zero or the stock counter would overflow.
    pub fn restock(&self, product: &mut Product, quantity: u32) -> DomainResult<StockReplenished> {
        if quantity == 0 {
            return Err(DomainError::invalid_argument(
                "quantity must be greater than 0",
            ));
        }

        let stock_after = product.replenish(quantity).ok_or_else(|| {
            DomainError::invalid_argument(format!(
                "restocking {quantity} units of {} would overflow its stock",
                product.code()
            ))
        })?;

        tracing::info!(
            user_id = %self.profile.id(),
            product_code = %product.code(),
            quantity,
            stock_after,
            "stock replenished"
        );

        Ok(StockReplenished {
            user_id: self.profile.id(),
            administrator: self.profile.name().to_string(),
            product_code: product.code().clone(),
            product_name: product.name().to_string(),
            quantity,
            stock_after,
            occurred_at: Utc::now(),
        })
    }
}

impl Entity for Administrator {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        self.profile.id_ref()
    }
}

impl User for Administrator {
    fn profile(&self) -> &UserProfile {
        &self.profile
    }

    fn role(&self) -> Role {
        Role::Administrator
    }

    fn purchase(&mut self, product: &mut Product) -> PurchaseOutcome {
        if !product.in_stock() {
            tracing::warn!(
                user_id = %self.profile.id(),
                product_code = %product.code(),
                "admin purchase rejected: out of stock"
            );
            return PurchaseOutcome::rejected(&self.profile, Role::Administrator, product);
        }

        product.take_one();
        let history_entry = format!("{} {ADMIN_PURCHASE_TAG}", product.name());
        self.profile.record_purchase(history_entry.clone());

        tracing::info!(
            user_id = %self.profile.id(),
            department = %self.department,
            product_code = %product.code(),
            stock_after = product.stock(),
            "admin purchase completed"
        );

        PurchaseOutcome::Completed(PurchaseCompleted {
            user_id: self.profile.id(),
            buyer: self.profile.name().to_string(),
            role: Role::Administrator,
            department: Some(self.department.clone()),
            product_code: product.code().clone(),
            product_name: product.name().to_string(),
            price_paid: product.price(),
            history_entry,
            stock_after: product.stock(),
            occurred_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minimart_core::Money;
    use minimart_events::{Event, Notice, Outcome};
    use proptest::prelude::*;

    fn laura(ids: &UserIdSequence) -> Administrator {
        Administrator::new(ids, "Laura", "laura@email.com", "Inventory")
    }

    fn keyboard() -> Product {
        Product::new("P003", "Keyboard", Money::from_units(60)).with_stock(10)
    }

    #[test]
    fn purchase_is_tagged_for_audit() {
        let ids = UserIdSequence::new();
        let mut admin = laura(&ids);
        let mut product = keyboard();

        let outcome = admin.purchase(&mut product);

        let completed = outcome.completed().expect("purchase should complete");
        assert_eq!(completed.price_paid, Money::from_units(60));
        assert_eq!(completed.department.as_deref(), Some("Inventory"));
        assert_eq!(outcome.to_string(), "Laura (Department: Inventory) bought Keyboard");
        assert_eq!(product.stock(), 9);
        assert_eq!(admin.history(), vec!["Keyboard (admin purchase)".to_string()]);
    }

    #[test]
    fn purchase_without_stock_is_rejected_with_admin_tag() {
        let ids = UserIdSequence::new();
        let mut admin = laura(&ids);
        let mut product = keyboard().with_stock(0);

        let outcome = admin.purchase(&mut product);

        assert_eq!(outcome.outcome(), Outcome::Failure);
        assert_eq!(outcome.to_string(), "Laura (Admin): Keyboard is out of stock");
        assert_eq!(product.stock(), 0);
        assert!(admin.history().is_empty());
    }

    #[test]
    fn restock_adds_units() {
        let ids = UserIdSequence::new();
        let admin = laura(&ids);
        let mut product = keyboard();

        let notice = admin.restock(&mut product, 3).unwrap();

        assert_eq!(product.stock(), 13);
        assert_eq!(notice.stock_after, 13);
        assert_eq!(notice.quantity, 3);
        assert_eq!(notice.event_type(), "accounts.stock.replenished");
        assert_eq!(notice.to_string(), "Laura restocked 3 units of Keyboard");
    }

    #[test]
    fn restock_rejects_zero_quantity() {
        let ids = UserIdSequence::new();
        let admin = laura(&ids);
        let mut product = keyboard();

        let err = admin.restock(&mut product, 0).unwrap_err();

        match err {
            DomainError::InvalidArgument(msg) if msg.contains("greater than 0") => {}
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
        assert_eq!(product.stock(), 10);
    }

    #[test]
    fn restock_rejects_overflow() {
        let ids = UserIdSequence::new();
        let admin = laura(&ids);
        let mut product = keyboard().with_stock(u32::MAX);

        let err = admin.restock(&mut product, 1).unwrap_err();

        assert!(matches!(err, DomainError::InvalidArgument(_)));
        assert_eq!(product.stock(), u32::MAX);
    }

    #[test]
    fn administrators_and_customers_share_one_id_sequence() {
        let ids = UserIdSequence::new();
        let ana = crate::Customer::new(
            &ids,
            "Ana",
            "ana@email.com",
            minimart_core::DiscountRate::from_fraction(0.10),
        );
        let admin = laura(&ids);
        let juan = crate::Customer::new(
            &ids,
            "Juan",
            "juan@email.com",
            minimart_core::DiscountRate::from_fraction(0.05),
        );

        assert_eq!(ana.id().get(), 1);
        assert_eq!(admin.id().get(), 2);
        assert_eq!(juan.id().get(), 3);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: restocking n > 0 units raises stock by exactly n.
        #[test]
        fn restock_adds_exactly_quantity(stock in 0u32..1_000_000u32, quantity in 1u32..1_000_000u32) {
            let ids = UserIdSequence::new();
            let admin = laura(&ids);
            let mut product = keyboard().with_stock(stock);

            let notice = admin.restock(&mut product, quantity).unwrap();

            prop_assert_eq!(product.stock(), stock + quantity);
            prop_assert_eq!(notice.stock_after, stock + quantity);
        }

        /// Property: an admin purchase takes one unit and appends one audit-tagged entry.
        #[test]
        fn admin_purchase_takes_one_unit(stock in 1u32..1_000u32, cents in 0u64..10_000_000u64) {
            let ids = UserIdSequence::new();
            let mut admin = laura(&ids);
            let mut product = Product::new("PX", "Widget", Money::from_cents(cents)).with_stock(stock);

            let outcome = admin.purchase(&mut product);

            prop_assert!(outcome.is_completed());
            prop_assert_eq!(product.stock(), stock - 1);
            let history = admin.history();
            prop_assert_eq!(history.len(), 1);
            prop_assert!(history[0].ends_with(ADMIN_PURCHASE_TAG));
        }
    }
}
