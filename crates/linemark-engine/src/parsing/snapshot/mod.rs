//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a parsed document into a stable, indented outline
//!   for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (non-empty lists,
//!   heading levels in range, every list item identified)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
