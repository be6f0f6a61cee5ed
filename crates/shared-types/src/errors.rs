//! # Error Types
//!
//! Infrastructure errors surfaced by storage and crypto backends.
//!
//! A [`StoreError`] is never a consensus verdict: the validation engine
//! reports it as an indeterminate outcome so callers can retry against
//! refreshed state instead of discarding the candidate block.

use thiserror::Error;

/// Errors raised by a chain-state, trust-graph or source backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Backend could not be reached.
    #[error("Store unreachable: {0}")]
    Unreachable(String),

    /// A record was present but could not be decoded.
    #[error("Corrupted record: {0}")]
    Corrupted(String),

    /// A record the backend promised to hold is missing.
    #[error("Record not found: {0}")]
    NotFound(String),
}
