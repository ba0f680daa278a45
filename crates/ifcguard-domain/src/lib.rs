//! Pure compliance evaluation (no IO).
//!
//! Input: a building model constructed elsewhere.
//! Output: check results + verdict + summary data.

#![forbid(unsafe_code)]

pub mod model;
pub mod policy;
pub mod report;

mod engine;
pub mod checks;

pub use engine::evaluate;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod test_support;
