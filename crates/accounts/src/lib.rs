//! `minimart-accounts` — store users and their role-specific purchase rules.
//!
//! Customers buy at a personal discount and accumulate spend; administrators
//! buy at full price under an audit tag and are the only ones who restock.

pub mod administrator;
pub mod customer;
pub mod notice;
pub mod profile;
pub mod roles;
pub mod user;

pub use administrator::{ADMIN_PURCHASE_TAG, Administrator};
pub use customer::Customer;
pub use notice::{
    PurchaseCompleted, PurchaseOutcome, PurchaseRejected, PurchaseUnsupported, RejectionReason,
    StockReplenished,
};
pub use profile::UserProfile;
pub use roles::Role;
pub use user::{User, UserHandle};
