//! Accounts domain: the account aggregate, its statement, and the store that
//! owns every account for the lifetime of the process.
//!
//! Deterministic domain logic plus one in-memory store (no HTTP).

pub mod account;
pub mod amount;
pub mod statement;
pub mod store;

pub use account::Account;
pub use amount::Amount;
pub use statement::{EntryType, LedgerEntry, Statement};
pub use store::{AccountStore, InMemoryAccountStore};
