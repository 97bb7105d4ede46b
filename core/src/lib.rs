//! Piecewise-constant 1D distributions for importance sampling.
//!
//! A [`sampling::PiecewiseConstantDistribution1D`] is built once from a table
//! of non-negative weights and then maps uniform samples in `[0, 1)` to
//! continuous coordinates distributed proportionally to those weights.

#[macro_use]
extern crate hexf;
#[macro_use]
extern crate log;

// Re-export.
pub mod numeric;
pub mod sampling;
