use crate::domain::{
    Cents, Ledger, MonthKey, Transaction, TransactionKind, parse_entry_date,
};

use super::{AllTimeSummary, AppError, MonthlyReport, ReportGenerator};

/// Application service owning the session's ledger.
/// This is the only interface the CLI (or any other client) uses to touch it.
#[derive(Debug, Default)]
pub struct FinanceTracker {
    ledger: Ledger,
}

impl FinanceTracker {
    /// Start a session with an empty ledger and a zero balance.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Recording
    // ========================

    /// Record a transaction from user-supplied values.
    ///
    /// `date` must be `DD-MM-YYYY`. The ledger is left untouched on any error.
    pub fn record(
        &mut self,
        kind: TransactionKind,
        amount: Cents,
        category: &str,
        date: &str,
        description: Option<&str>,
    ) -> Result<&Transaction, AppError> {
        let category = category.trim();
        if category.is_empty() {
            return Err(AppError::EmptyCategory);
        }
        let date = parse_entry_date(date)?;

        let mut transaction = Transaction::new(kind, amount, category, date);
        if let Some(description) = description {
            transaction = transaction.with_description(description.trim());
        }

        Ok(self.ledger.add(transaction)?)
    }

    pub fn record_income(
        &mut self,
        amount: Cents,
        category: &str,
        date: &str,
        description: Option<&str>,
    ) -> Result<&Transaction, AppError> {
        self.record(TransactionKind::Income, amount, category, date, description)
    }

    pub fn record_expense(
        &mut self,
        amount: Cents,
        category: &str,
        date: &str,
        description: Option<&str>,
    ) -> Result<&Transaction, AppError> {
        self.record(TransactionKind::Expense, amount, category, date, description)
    }

    // ========================
    // Queries
    // ========================

    /// Build the report for a `MM-YYYY` month key.
    pub fn monthly_report(&self, month: &str) -> Result<MonthlyReport, AppError> {
        let month: MonthKey = month.parse()?;
        Ok(ReportGenerator::monthly(&self.ledger, month))
    }

    pub fn all_time_summary(&self) -> AllTimeSummary {
        ReportGenerator::all_time(&self.ledger)
    }

    pub fn balance(&self) -> Cents {
        self.ledger.balance()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}
