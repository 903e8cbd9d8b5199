//! Domain events and the notices built on top of them.

pub mod event;
pub mod notice;

pub use event::Event;
pub use notice::{Notice, Outcome};
