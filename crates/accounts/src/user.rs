//! The polymorphic user contract.

use std::sync::{Arc, Mutex};

use minimart_catalog::Product;

use crate::notice::PurchaseOutcome;
use crate::profile::UserProfile;
use crate::roles::Role;

/// Shared, type-erased reference to a registered user.
pub type UserHandle = Arc<Mutex<dyn User>>;

/// A user of the store.
///
/// Every user kind carries a [`UserProfile`]; what a purchase means is up to
/// the kind. Implementors are expected to override [`purchase`](Self::purchase):
/// the provided body changes nothing and reports
/// [`PurchaseOutcome::Unsupported`].
pub trait User: Send + core::fmt::Debug {
    fn profile(&self) -> &UserProfile;

    fn role(&self) -> Role;

    /// Try to buy one unit of `product`.
    ///
    /// Either the whole purchase takes effect (stock, history and any
    /// role-specific bookkeeping) or nothing does.
    fn purchase(&mut self, product: &mut Product) -> PurchaseOutcome {
        tracing::warn!(
            user_id = %self.profile().id(),
            role = %self.role(),
            product_code = %product.code(),
            "purchase rules not implemented for this user kind"
        );
        PurchaseOutcome::unsupported(self.profile(), self.role(), product)
    }

    fn name(&self) -> &str {
        self.profile().name()
    }

    /// Copy of the purchase history.
    fn history(&self) -> Vec<String> {
        self.profile().history()
    }
}
