use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::Serialize;

use ledger_core::{DomainError, DomainResult};

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Credit,
    Debit,
}

/// One immutable line of an account statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerEntry {
    pub description: String,
    /// Never validated: negative or fractional amounts are accepted as sent.
    #[serde(serialize_with = "crate::amount::serialize")]
    pub amount: f64,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: EntryType,
}

impl LedgerEntry {
    pub fn credit(description: impl Into<String>, amount: f64, created_at: DateTime<Utc>) -> Self {
        Self {
            description: description.into(),
            amount,
            created_at,
            kind: EntryType::Credit,
        }
    }

    pub fn debit(description: impl Into<String>, amount: f64, created_at: DateTime<Utc>) -> Self {
        Self {
            description: description.into(),
            amount,
            created_at,
            kind: EntryType::Debit,
        }
    }

    /// Contribution of this entry to the running balance.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            EntryType::Credit => self.amount,
            EntryType::Debit => -self.amount,
        }
    }
}

/// Append-only, insertion-ordered sequence of ledger entries.
///
/// Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Statement {
    entries: Vec<LedgerEntry>,
}

impl Statement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of credits minus sum of debits, seeded at zero.
    pub fn balance(&self) -> f64 {
        self.entries
            .iter()
            .fold(0.0, |acc, entry| acc + entry.signed_amount())
    }

    /// Append a credit stamped with the current time. Deposits are never refused.
    pub fn append_credit(&mut self, description: impl Into<String>, amount: f64) -> &LedgerEntry {
        self.append_credit_at(description, amount, Utc::now())
    }

    pub fn append_credit_at(
        &mut self,
        description: impl Into<String>,
        amount: f64,
        created_at: DateTime<Utc>,
    ) -> &LedgerEntry {
        self.push(LedgerEntry::credit(description, amount, created_at))
    }

    /// Append a debit stamped with the current time.
    ///
    /// Fails with [`DomainError::InsufficientFunds`] when the current balance is
    /// below `amount`; the statement is left untouched in that case.
    pub fn append_debit(
        &mut self,
        description: impl Into<String>,
        amount: f64,
    ) -> DomainResult<&LedgerEntry> {
        self.append_debit_at(description, amount, Utc::now())
    }

    pub fn append_debit_at(
        &mut self,
        description: impl Into<String>,
        amount: f64,
        created_at: DateTime<Utc>,
    ) -> DomainResult<&LedgerEntry> {
        if self.balance() < amount {
            return Err(DomainError::InsufficientFunds);
        }
        Ok(self.push(LedgerEntry::debit(description, amount, created_at)))
    }

    /// Entries created on `day` in the process-local time zone.
    pub fn on_day(&self, day: NaiveDate) -> Vec<LedgerEntry> {
        self.on_day_in(day, &Local)
    }

    /// Entries whose creation instant, viewed in `tz`, falls on `day`.
    pub fn on_day_in<Tz: TimeZone>(&self, day: NaiveDate, tz: &Tz) -> Vec<LedgerEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.created_at.with_timezone(tz).date_naive() == day)
            .cloned()
            .collect()
    }

    fn push(&mut self, entry: LedgerEntry) -> &LedgerEntry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }
}

impl FromIterator<LedgerEntry> for Statement {
    fn from_iter<I: IntoIterator<Item = LedgerEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
