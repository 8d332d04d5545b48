use std::collections::BTreeSet;

use thiserror::Error;

use super::{Cents, MonthKey, Transaction};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Amount must be positive.")]
    InvalidAmount(Cents),

    #[error("Amount is too large for this ledger.")]
    Overflow(Cents),
}

/// Append-only record of transactions plus the running balance they produce.
///
/// Insertion order is entry order, which is not necessarily date order.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    balance: Cents,
    /// Sum of every stored amount regardless of kind. Bounds the balance and any
    /// report total, so none of them can overflow once this fits.
    volume: Cents,
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `transaction` to the balance and store it.
    ///
    /// Non-positive amounts, and amounts that would push the ledger's totals past
    /// `Cents::MAX`, are rejected before anything is touched.
    pub fn add(&mut self, transaction: Transaction) -> Result<&Transaction, LedgerError> {
        let amount = transaction.amount();
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount(amount));
        }
        self.volume = self
            .volume
            .checked_add(amount)
            .ok_or(LedgerError::Overflow(amount))?;
        self.balance = transaction.apply(self.balance);
        self.transactions.push(transaction);
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    pub fn balance(&self) -> Cents {
        self.balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Transactions dated within `month`, in insertion order.
    pub fn transactions_for_month(
        &self,
        month: MonthKey,
    ) -> impl Iterator<Item = &Transaction> + '_ {
        self.transactions
            .iter()
            .filter(move |transaction| month.contains(transaction.date()))
    }

    /// Distinct months that have at least one transaction, oldest first.
    pub fn month_keys(&self) -> Vec<MonthKey> {
        self.transactions
            .iter()
            .map(Transaction::month_key)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
