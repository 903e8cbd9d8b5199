//! `minimart-store` — the store aggregate: catalog plus user registry.
//!
//! The store registers and looks things up. It does not mediate purchases;
//! those happen directly between a user and a product handle.

pub mod notice;
pub mod store;

pub use notice::{ProductAdded, UserRegistered};
pub use store::Store;
