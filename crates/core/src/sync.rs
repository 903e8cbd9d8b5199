//! Locking helpers for shared domain objects.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a shared domain object.
///
/// Domain objects behind these locks only hold plain values, so a poisoned
/// lock still guards consistent data and is recovered instead of propagated.
pub fn lock<T: ?Sized>(cell: &Mutex<T>) -> MutexGuard<'_, T> {
    cell.lock().unwrap_or_else(PoisonError::into_inner)
}
