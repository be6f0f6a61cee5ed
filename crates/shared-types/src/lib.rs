//! # Shared Types Crate
//!
//! Cross-crate identifiers and error types for the wotchain node.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every identifier that crosses a crate
//!   boundary (fingerprints, pubkeys, block hashes) is defined here.
//! - **No stringly-typed keys**: composite keys are structured records;
//!   the raw text forms only appear in `Display` implementations.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
