//! Identity and purchase history shared by every kind of user.

use serde::Serialize;

use minimart_core::{UserId, UserIdSequence};

/// Common user bookkeeping: identity, contact and purchase history.
///
/// # Invariants
/// - `id` comes from a [`UserIdSequence`] at construction and never changes.
/// - `history` is append-only and only grows through purchases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    id: UserId,
    name: String,
    email: String,
    history: Vec<String>,
}

impl UserProfile {
    /// Allocates the next id from `ids`.
    pub fn new(ids: &UserIdSequence, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: ids.next_id(),
            name: name.into(),
            email: email.into(),
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub(crate) fn id_ref(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Copy of the purchase history, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history.clone()
    }

    pub fn purchase_count(&self) -> usize {
        self.history.len()
    }

    /// Purchase flows only.
    pub(crate) fn record_purchase(&mut self, label: impl Into<String>) {
        self.history.push(label.into());
    }
}

impl core::fmt::Display for UserProfile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} <{}> (ID: {})", self.name, self.email, self.id)
    }
}
