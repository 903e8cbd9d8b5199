use chrono::{DateTime, Utc};
use serde::Serialize;

use minimart_accounts::Role;
use minimart_catalog::ProductCode;
use minimart_core::UserId;
use minimart_events::{Event, Notice, Outcome};

/// A product joined the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductAdded {
    pub store: String,
    pub product_code: ProductCode,
    pub product_name: String,
    pub catalog_size: usize,
    pub occurred_at: DateTime<Utc>,
}

impl Event for ProductAdded {
    fn event_type(&self) -> &'static str {
        "store.catalog.product_added"
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

impl Notice for ProductAdded {
    fn outcome(&self) -> Outcome {
        Outcome::Success
    }
}

impl core::fmt::Display for ProductAdded {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Product added: {}", self.product_name)
    }
}

/// A user joined the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRegistered {
    pub store: String,
    pub user_id: UserId,
    pub name: String,
    pub role: Role,
    pub occurred_at: DateTime<Utc>,
}

impl Event for UserRegistered {
    fn event_type(&self) -> &'static str {
        "store.registry.user_registered"
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

impl Notice for UserRegistered {
    fn outcome(&self) -> Outcome {
        Outcome::Success
    }
}

impl core::fmt::Display for UserRegistered {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "User registered: {}", self.name)
    }
}
