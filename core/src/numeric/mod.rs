//! Numeric types and helpers shared by the sampling code.

mod clamp;
mod common;

// Re-export
pub use clamp::*;
pub use common::*;
