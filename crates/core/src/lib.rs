//! `minimart-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod sync;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{UserId, UserIdSequence};
pub use money::{DiscountRate, Money};
pub use sync::lock;
pub use value_object::ValueObject;
