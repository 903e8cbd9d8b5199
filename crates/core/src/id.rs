//! Strongly-typed identifiers used across the domain.

use core::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Identifier of a user (customer or administrator).
///
/// Assigned by a [`UserIdSequence`] at construction time; never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    pub fn from_raw(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<UserId> for u64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// Monotonic source of [`UserId`]s, shared by every kind of user.
///
/// The sequence is owned by whoever constructs users and passed explicitly,
/// so id assignment is deterministic per sequence. Allocation is a single
/// atomic increment.
#[derive(Debug)]
pub struct UserIdSequence {
    next: AtomicU64,
}

impl UserIdSequence {
    /// First id handed out by a fresh sequence.
    pub const FIRST: u64 = 1;

    pub fn new() -> Self {
        Self::starting_at(Self::FIRST)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Allocate the next id (post-increment).
    pub fn next_id(&self) -> UserId {
        UserId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// The id the next call to [`next_id`](Self::next_id) will return.
    pub fn peek(&self) -> UserId {
        UserId(self.next.load(Ordering::Relaxed))
    }
}

impl Default for UserIdSequence {
    fn default() -> Self {
        Self::new()
    }
}
