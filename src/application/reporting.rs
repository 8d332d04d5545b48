use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{Cents, Ledger, MonthKey, TransactionKind};

/// Income and expense totals for one month, broken down by category.
///
/// Category maps are ordered, so iterating them yields categories in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyReport {
    pub month: MonthKey,
    pub total_income: Cents,
    pub total_expense: Cents,
    pub net: Cents,
    pub income_by_category: BTreeMap<String, Cents>,
    pub expense_by_category: BTreeMap<String, Cents>,
}

impl MonthlyReport {
    fn empty(month: MonthKey) -> Self {
        Self {
            month,
            total_income: 0,
            total_expense: 0,
            net: 0,
            income_by_category: BTreeMap::new(),
            expense_by_category: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AllTimeSummary {
    pub total_income: Cents,
    pub total_expense: Cents,
    pub net: Cents,
}

/// Read-only aggregations over a ledger. Never fails and never mutates.
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn monthly(ledger: &Ledger, month: MonthKey) -> MonthlyReport {
        let mut report = MonthlyReport::empty(month);

        for transaction in ledger.transactions_for_month(month) {
            let (total, by_category) = match transaction.kind() {
                TransactionKind::Income => {
                    (&mut report.total_income, &mut report.income_by_category)
                }
                TransactionKind::Expense => {
                    (&mut report.total_expense, &mut report.expense_by_category)
                }
            };
            *total += transaction.amount();
            *by_category
                .entry(transaction.category().to_string())
                .or_insert(0) += transaction.amount();
        }

        report.net = report.total_income - report.total_expense;
        report
    }

    pub fn all_time(ledger: &Ledger) -> AllTimeSummary {
        let (total_income, total_expense) =
            ledger
                .transactions()
                .iter()
                .fold((0, 0), |(income, expense), transaction| {
                    match transaction.kind() {
                        TransactionKind::Income => (income + transaction.amount(), expense),
                        TransactionKind::Expense => (income, expense + transaction.amount()),
                    }
                });

        AllTimeSummary {
            total_income,
            total_expense,
            net: total_income - total_expense,
        }
    }
}
