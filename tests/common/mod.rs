// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use chrono::NaiveDate;
use fintrack::application::FinanceTracker;
use fintrack::domain::{Ledger, MonthKey, Transaction};

/// Helper to parse a DD-MM-YYYY date string
pub fn date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%d-%m-%Y").unwrap()
}

/// Helper to parse a MM-YYYY month key
pub fn month(key: &str) -> MonthKey {
    key.parse().unwrap()
}

/// Test fixture: the March 2024 salary/gift/food scenario
pub fn march_tracker() -> Result<FinanceTracker> {
    let mut tracker = FinanceTracker::new();
    tracker.record_income(100000, "Salary", "01-03-2024", None)?;
    tracker.record_income(20000, "Gift", "15-03-2024", Some("Birthday"))?;
    tracker.record_expense(30000, "Food", "20-03-2024", None)?;
    Ok(tracker)
}

/// Test fixture: a ledger spanning several months and two years, entered out of date order
pub fn multi_month_ledger() -> Result<Ledger> {
    let mut ledger = Ledger::new();
    let entries = [
        Transaction::income(250000, "Salary", date("31-01-2024")),
        Transaction::expense(80000, "Rent", date("01-02-2024")),
        Transaction::expense(4550, "Food", date("14-01-2024")),
        Transaction::income(250000, "Salary", date("29-02-2024")),
        Transaction::expense(1299, "Books", date("29-02-2024")),
        Transaction::income(5000, "Interest", date("31-12-2023")),
        Transaction::expense(12000, "Food", date("02-02-2024")),
        Transaction::expense(999, "Food", date("15-02-2024")),
    ];
    for entry in entries {
        ledger.add(entry)?;
    }
    Ok(ledger)
}
