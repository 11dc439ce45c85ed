//! `ledger-core` — domain foundation shared by the ledger crates.
//!
//! Pure domain primitives only (no HTTP, no storage).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::AccountId;
