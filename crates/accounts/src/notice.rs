//! Notices returned by purchase and restock operations.

use chrono::{DateTime, Utc};
use serde::Serialize;

use minimart_catalog::{Product, ProductCode};
use minimart_core::{Money, UserId};
use minimart_events::{Event, Notice, Outcome};

use crate::profile::UserProfile;
use crate::roles::Role;

/// A unit changed hands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseCompleted {
    pub user_id: UserId,
    pub buyer: String,
    pub role: Role,
    /// Set for administrator purchases.
    pub department: Option<String>,
    pub product_code: ProductCode,
    pub product_name: String,
    pub price_paid: Money,
    /// Entry appended to the buyer's purchase history.
    pub history_entry: String,
    pub stock_after: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Why a purchase did not happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    OutOfStock,
}

/// A purchase attempt that changed nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseRejected {
    pub user_id: UserId,
    pub buyer: String,
    pub role: Role,
    pub product_code: ProductCode,
    pub product_name: String,
    pub reason: RejectionReason,
    pub occurred_at: DateTime<Utc>,
}

/// A user kind without purchase rules was asked to buy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseUnsupported {
    pub user_id: UserId,
    pub buyer: String,
    pub role: Role,
    pub product_code: ProductCode,
    pub occurred_at: DateTime<Utc>,
}

/// Result of [`User::purchase`](crate::User::purchase).
///
/// Running out of stock is an expected outcome, so it is a variant here and
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PurchaseOutcome {
    Completed(PurchaseCompleted),
    Rejected(PurchaseRejected),
    Unsupported(PurchaseUnsupported),
}

impl PurchaseOutcome {
    pub(crate) fn rejected(profile: &UserProfile, role: Role, product: &Product) -> Self {
        PurchaseOutcome::Rejected(PurchaseRejected {
            user_id: profile.id(),
            buyer: profile.name().to_string(),
            role,
            product_code: product.code().clone(),
            product_name: product.name().to_string(),
            reason: RejectionReason::OutOfStock,
            occurred_at: Utc::now(),
        })
    }

    pub(crate) fn unsupported(profile: &UserProfile, role: Role, product: &Product) -> Self {
        PurchaseOutcome::Unsupported(PurchaseUnsupported {
            user_id: profile.id(),
            buyer: profile.name().to_string(),
            role,
            product_code: product.code().clone(),
            occurred_at: Utc::now(),
        })
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, PurchaseOutcome::Completed(_))
    }

    pub fn completed(&self) -> Option<&PurchaseCompleted> {
        match self {
            PurchaseOutcome::Completed(c) => Some(c),
            _ => None,
        }
    }
}

impl Event for PurchaseOutcome {
    fn event_type(&self) -> &'static str {
        match self {
            PurchaseOutcome::Completed(_) => "accounts.purchase.completed",
            PurchaseOutcome::Rejected(_) => "accounts.purchase.rejected",
            PurchaseOutcome::Unsupported(_) => "accounts.purchase.unsupported",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            PurchaseOutcome::Completed(e) => e.occurred_at,
            PurchaseOutcome::Rejected(e) => e.occurred_at,
            PurchaseOutcome::Unsupported(e) => e.occurred_at,
        }
    }
}

impl Notice for PurchaseOutcome {
    fn outcome(&self) -> Outcome {
        match self {
            PurchaseOutcome::Completed(_) => Outcome::Success,
            PurchaseOutcome::Rejected(_) | PurchaseOutcome::Unsupported(_) => Outcome::Failure,
        }
    }
}

impl core::fmt::Display for PurchaseOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PurchaseOutcome::Completed(e) => match &e.department {
                Some(department) => write!(
                    f,
                    "{} (Department: {}) bought {}",
                    e.buyer, department, e.product_name
                ),
                None => write!(f, "{} bought {} for {}", e.buyer, e.product_name, e.price_paid),
            },
            PurchaseOutcome::Rejected(e) => match e.role {
                Role::Administrator => {
                    write!(f, "{} (Admin): {} is out of stock", e.buyer, e.product_name)
                }
                Role::Customer => write!(f, "{}: {} is out of stock", e.buyer, e.product_name),
            },
            PurchaseOutcome::Unsupported(e) => write!(
                f,
                "purchase is not implemented for {} ({})",
                e.buyer, e.role
            ),
        }
    }
}

/// An administrator added units to a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockReplenished {
    pub user_id: UserId,
    pub administrator: String,
    pub product_code: ProductCode,
    pub product_name: String,
    pub quantity: u32,
    pub stock_after: u32,
    pub occurred_at: DateTime<Utc>,
}

impl Event for StockReplenished {
    fn event_type(&self) -> &'static str {
        "accounts.stock.replenished"
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

impl Notice for StockReplenished {
    fn outcome(&self) -> Outcome {
        Outcome::Success
    }
}

impl core::fmt::Display for StockReplenished {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} restocked {} units of {}",
            self.administrator, self.quantity, self.product_name
        )
    }
}
