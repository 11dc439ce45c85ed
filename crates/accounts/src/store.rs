use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use ledger_core::{DomainError, DomainResult};

use crate::account::Account;
use crate::statement::LedgerEntry;

/// Authoritative collection of accounts, keyed by tax id (`cpf`).
///
/// Implementations must apply each mutating call atomically: the uniqueness
/// check on `create` and the funds check on `withdraw` happen under the same
/// exclusive access as the write they guard.
pub trait AccountStore: Send + Sync {
    /// Fails with [`DomainError::DuplicateAccount`] if `cpf` is taken.
    fn create(&self, cpf: String, name: String) -> DomainResult<Account>;

    /// Exact string match; no trimming or case folding.
    fn find_by_cpf(&self, cpf: &str) -> Option<Account>;

    fn update_name(&self, cpf: &str, name: String) -> DomainResult<Account>;

    /// Remove the account and its statement, returning the accounts left.
    fn delete(&self, cpf: &str) -> DomainResult<Vec<Account>>;

    fn deposit(&self, cpf: &str, description: String, amount: f64) -> DomainResult<LedgerEntry>;

    fn withdraw(&self, cpf: &str, description: String, amount: f64) -> DomainResult<LedgerEntry>;

    /// All accounts in creation order.
    fn list(&self) -> Vec<Account>;
}

/// Process-local store backed by a single store-wide lock.
///
/// Lookups are linear scans; insertion order is preserved.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    inner: RwLock<Vec<Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Account>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Account>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_account<T>(
        &self,
        cpf: &str,
        f: impl FnOnce(&mut Account) -> DomainResult<T>,
    ) -> DomainResult<T> {
        let mut accounts = self.write();
        let account = accounts
            .iter_mut()
            .find(|a| a.cpf() == cpf)
            .ok_or(DomainError::AccountNotFound)?;
        f(account)
    }
}

impl AccountStore for InMemoryAccountStore {
    fn create(&self, cpf: String, name: String) -> DomainResult<Account> {
        let mut accounts = self.write();
        if accounts.iter().any(|a| a.cpf() == cpf) {
            return Err(DomainError::DuplicateAccount);
        }

        let account = Account::open(cpf, name);
        accounts.push(account.clone());
        Ok(account)
    }

    fn find_by_cpf(&self, cpf: &str) -> Option<Account> {
        self.read().iter().find(|a| a.cpf() == cpf).cloned()
    }

    fn update_name(&self, cpf: &str, name: String) -> DomainResult<Account> {
        self.with_account(cpf, |account| {
            account.rename(name);
            Ok(account.clone())
        })
    }

    fn delete(&self, cpf: &str) -> DomainResult<Vec<Account>> {
        let mut accounts = self.write();
        let idx = accounts
            .iter()
            .position(|a| a.cpf() == cpf)
            .ok_or(DomainError::AccountNotFound)?;
        accounts.remove(idx);
        Ok(accounts.clone())
    }

    fn deposit(&self, cpf: &str, description: String, amount: f64) -> DomainResult<LedgerEntry> {
        self.with_account(cpf, |account| Ok(account.deposit(description, amount)))
    }

    fn withdraw(&self, cpf: &str, description: String, amount: f64) -> DomainResult<LedgerEntry> {
        self.with_account(cpf, |account| account.withdraw(description, amount))
    }

    fn list(&self) -> Vec<Account> {
        self.read().clone()
    }
}
