use chrono::NaiveDate;
use serde::Serialize;

use super::{Cents, MonthKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in (salary, gifts, refunds)
    Income,
    /// Money going out (food, rent, bills)
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    /// Display label used by the menu ("Income" / "Expense").
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Signed change a transaction of `kind` and `amount` makes to a balance.
pub fn effect(kind: TransactionKind, amount: Cents) -> Cents {
    match kind {
        TransactionKind::Income => amount,
        TransactionKind::Expense => -amount,
    }
}

/// A single dated income or expense event.
/// Transactions are immutable once built; there is no way to edit or remove one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    kind: TransactionKind,
    /// Amount in cents. Positivity is checked when the transaction enters a ledger.
    amount: Cents,
    category: String,
    /// Calendar date of the event, no time component
    date: NaiveDate,
    description: Option<String>,
}

impl Transaction {
    /// Create a transaction. No validation happens here.
    pub fn new(
        kind: TransactionKind,
        amount: Cents,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind,
            amount,
            category: category.into(),
            date,
            description: None,
        }
    }

    pub fn income(amount: Cents, category: impl Into<String>, date: NaiveDate) -> Self {
        Self::new(TransactionKind::Income, amount, category, date)
    }

    pub fn expense(amount: Cents, category: impl Into<String>, date: NaiveDate) -> Self {
        Self::new(TransactionKind::Expense, amount, category, date)
    }

    /// Attach a free-text description. Blank text leaves the description unset.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = (!description.trim().is_empty()).then_some(description);
        self
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Cents {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }

    /// Balance after this transaction is applied to `balance`.
    pub fn apply(&self, balance: Cents) -> Cents {
        balance + effect(self.kind, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn test_create_transaction() {
        let tx = Transaction::income(100000, "Salary", march(1)).with_description("March pay");

        assert_eq!(tx.kind(), TransactionKind::Income);
        assert_eq!(tx.amount(), 100000);
        assert_eq!(tx.category(), "Salary");
        assert_eq!(tx.date(), march(1));
        assert_eq!(tx.description(), Some("March pay"));
        assert_eq!(tx.month_key().to_string(), "03-2024");
    }

    #[test]
    fn test_blank_description_is_none() {
        let tx = Transaction::expense(500, "Food", march(2)).with_description("   ");
        assert_eq!(tx.description(), None);
    }

    #[test]
    fn test_apply() {
        let income = Transaction::income(1000, "Gift", march(3));
        let expense = Transaction::expense(300, "Food", march(3));

        assert_eq!(income.apply(0), 1000);
        assert_eq!(expense.apply(1000), 700);
        assert_eq!(expense.apply(0), -300);
    }

    #[test]
    fn test_construction_does_not_validate() {
        let tx = Transaction::expense(-5000, "Refund", march(4));
        assert_eq!(tx.amount(), -5000);
    }

    #[test]
    fn test_effect() {
        assert_eq!(effect(TransactionKind::Income, 250), 250);
        assert_eq!(effect(TransactionKind::Expense, 250), -250);
    }
}
