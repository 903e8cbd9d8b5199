use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Whether the operation behind a notice took effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

/// An event meant for a human reader.
///
/// Operations return notices instead of printing them; the `Display` impl is
/// the human-readable line and is not a stable format.
pub trait Notice: Event + core::fmt::Display {
    fn outcome(&self) -> Outcome;
}
