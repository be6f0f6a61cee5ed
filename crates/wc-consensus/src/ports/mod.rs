//! Ports for the validation engine
//!
//! - `inbound`: the driving API callers use to judge a candidate block.
//! - `outbound`: driven capability traits implemented once per storage
//!   or crypto backend. Each trait object represents a snapshot of the
//!   chain state at the height being extended.

pub mod inbound;
pub mod outbound;

pub use inbound::ValidationApi;
pub use outbound::{ChainStore, SignatureVerifier, SourceStore, TrustGraphStore};
