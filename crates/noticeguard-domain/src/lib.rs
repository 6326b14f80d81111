//! Pure policy evaluation (no IO).
//!
//! Input: a tree model constructed elsewhere.
//! Output: findings + verdict + summary data.

#![forbid(unsafe_code)]

pub mod digest;
pub mod model;
pub mod notice;
pub mod policy;
pub mod report;

mod engine;
pub mod checks;
pub mod fingerprint;

pub use engine::evaluate;
