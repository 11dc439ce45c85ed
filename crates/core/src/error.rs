//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is terminal for the request that raised it: the operation
/// either applies fully or leaves state untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// No account matches the given tax id.
    #[error("Costumer not found!")]
    AccountNotFound,

    /// An account with the given tax id already exists.
    #[error("Costumer already exists!")]
    DuplicateAccount,

    /// A withdrawal exceeds the current balance.
    #[error("Insufficient funds!")]
    InsufficientFunds,
}
