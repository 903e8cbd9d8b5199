//! Customers: discounted purchases with tracked spend.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde::Serialize;

use minimart_catalog::Product;
use minimart_core::{DiscountRate, Entity, Money, UserId, UserIdSequence};

use crate::notice::{PurchaseCompleted, PurchaseOutcome};
use crate::profile::UserProfile;
use crate::roles::Role;
use crate::user::User;

/// A regular buyer.
///
/// # Invariants
/// - `discount_rate` is fixed at construction.
/// - `total_spent` is the sum of every discounted price paid and never decreases.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    profile: UserProfile,
    discount_rate: DiscountRate,
    total_spent: Money,
}

impl Customer {
    pub fn new(
        ids: &UserIdSequence,
        name: impl Into<String>,
        email: impl Into<String>,
        discount_rate: DiscountRate,
    ) -> Self {
        Self {
            profile: UserProfile::new(ids, name, email),
            discount_rate,
            total_spent: Money::ZERO,
        }
    }

    pub fn into_handle(self) -> Arc<Mutex<Customer>> {
        Arc::new(Mutex::new(self))
    }

    pub fn discount_rate(&self) -> DiscountRate {
        self.discount_rate
    }

    pub fn total_spent(&self) -> Money {
        self.total_spent
    }
}

impl Entity for Customer {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        self.profile.id_ref()
    }
}

impl User for Customer {
    fn profile(&self) -> &UserProfile {
        &self.profile
    }

    fn role(&self) -> Role {
        Role::Customer
    }

    fn purchase(&mut self, product: &mut Product) -> PurchaseOutcome {
        if !product.in_stock() {
            tracing::warn!(
                user_id = %self.profile.id(),
                product_code = %product.code(),
                "purchase rejected: out of stock"
            );
            return PurchaseOutcome::rejected(&self.profile, Role::Customer, product);
        }

        let price_paid = product.price().discounted(self.discount_rate);
        self.total_spent += price_paid;
        product.take_one();
        self.profile.record_purchase(product.name());

        tracing::info!(
            user_id = %self.profile.id(),
            product_code = %product.code(),
            price_paid = price_paid.cents(),
            total_spent = self.total_spent.cents(),
            stock_after = product.stock(),
            "customer purchase completed"
        );

        PurchaseOutcome::Completed(PurchaseCompleted {
            user_id: self.profile.id(),
            buyer: self.profile.name().to_string(),
            role: Role::Customer,
            department: None,
            product_code: product.code().clone(),
            product_name: product.name().to_string(),
            price_paid,
            history_entry: product.name().to_string(),
            stock_after: product.stock(),
            occurred_at: Utc::now(),
        })
    }
}
