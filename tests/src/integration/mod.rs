//! Cross-crate integration tests.

pub mod diagnostics;
pub mod durability;
pub mod lifecycle;
