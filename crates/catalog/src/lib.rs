//! Catalog domain module.
//!
//! Products, their identity and their stock. Pure domain logic: no IO, no
//! logging setup, no storage.

pub mod product;

pub use product::{Product, ProductCode, ProductHandle};
