use ledger_accounts::Account;

/// Customer context for a request.
///
/// Inserted by the identity middleware; present for every route that
/// requires the `cpf` header.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerContext {
    account: Account,
}

impl CustomerContext {
    pub fn new(account: Account) -> Self {
        Self { account }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn cpf(&self) -> &str {
        self.account.cpf()
    }

    pub fn into_account(self) -> Account {
        self.account
    }
}
