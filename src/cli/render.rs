use std::collections::BTreeMap;
use std::io::Write;

use anyhow::Result;

use crate::application::{AllTimeSummary, MonthlyReport};
use crate::domain::{Cents, format_cents};

use super::{OutputFormat, Settings};

const MENU_RULE_WIDTH: usize = 34;
const REPORT_RULE: &str = "============================";

pub fn menu<W: Write>(out: &mut W, settings: &Settings, balance: Cents) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(MENU_RULE_WIDTH))?;
    writeln!(out, "     Personal Finance Tracker     ")?;
    writeln!(out, "{}", "=".repeat(MENU_RULE_WIDTH))?;
    balance_line(out, settings, balance)?;
    writeln!(out, "{}", "-".repeat(MENU_RULE_WIDTH))?;
    writeln!(out, "1. Add Income")?;
    writeln!(out, "2. Add Expense")?;
    writeln!(out, "3. View Monthly Report")?;
    writeln!(out, "4. View All-time Summary")?;
    writeln!(out, "5. Exit")?;
    Ok(())
}

pub fn balance_line<W: Write>(out: &mut W, settings: &Settings, balance: Cents) -> Result<()> {
    writeln!(
        out,
        "Current Balance: {}{}",
        settings.currency,
        format_cents(balance)
    )?;
    Ok(())
}

pub fn monthly_report<W: Write>(
    out: &mut W,
    settings: &Settings,
    report: &MonthlyReport,
    balance: Cents,
) -> Result<()> {
    if settings.format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "===== Monthly Report ({}) =====", report.month)?;
    totals(out, report.total_income, report.total_expense, report.net)?;

    writeln!(out)?;
    writeln!(out, "-- Income by Category --")?;
    categories(out, &report.income_by_category)?;

    writeln!(out)?;
    writeln!(out, "-- Expense by Category --")?;
    categories(out, &report.expense_by_category)?;

    writeln!(out, "{}", REPORT_RULE)?;
    balance_line(out, settings, balance)
}

pub fn all_time_summary<W: Write>(
    out: &mut W,
    settings: &Settings,
    summary: &AllTimeSummary,
) -> Result<()> {
    if settings.format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(summary)?)?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "===== All-Time Summary =====")?;
    totals(out, summary.total_income, summary.total_expense, summary.net)?;
    writeln!(out, "{}", REPORT_RULE)?;
    Ok(())
}

fn totals<W: Write>(out: &mut W, income: Cents, expense: Cents, net: Cents) -> Result<()> {
    writeln!(out, "Total Income : {}", format_cents(income))?;
    writeln!(out, "Total Expense: {}", format_cents(expense))?;
    writeln!(out, "Net Savings  : {}", format_cents(net))?;
    Ok(())
}

fn categories<W: Write>(out: &mut W, by_category: &BTreeMap<String, Cents>) -> Result<()> {
    if by_category.is_empty() {
        writeln!(out, "  None")?;
    }
    for (category, amount) in by_category {
        writeln!(out, "  {}: {}", category, format_cents(*amount))?;
    }
    Ok(())
}
