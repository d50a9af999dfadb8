//! Typed domain models

mod card;
mod set;

pub use card::*;
pub use set::*;
