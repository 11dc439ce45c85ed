use serde::Serialize;

use ledger_core::{AccountId, DomainResult};

use crate::statement::{LedgerEntry, Statement};

/// Aggregate root: a customer account and its statement.
///
/// `cpf` (the customer's tax id) is the business key used for identity
/// lookups; it and `id` never change after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    cpf: String,
    name: String,
    id: AccountId,
    statement: Statement,
}

impl Account {
    /// Open a new account with a fresh id and an empty statement.
    pub fn open(cpf: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            cpf: cpf.into(),
            name: name.into(),
            id: AccountId::new(),
            statement: Statement::new(),
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn cpf(&self) -> &str {
        &self.cpf
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    pub fn balance(&self) -> f64 {
        self.statement.balance()
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn deposit(&mut self, description: impl Into<String>, amount: f64) -> LedgerEntry {
        self.statement.append_credit(description, amount).clone()
    }

    pub fn withdraw(
        &mut self,
        description: impl Into<String>,
        amount: f64,
    ) -> DomainResult<LedgerEntry> {
        self.statement.append_debit(description, amount).cloned()
    }
}
