use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};

use crate::application::FinanceTracker;
use crate::domain::{Cents, ParseCentsError, TransactionKind, parse_cents};

use super::{Settings, render};

enum Flow {
    Continue,
    Exit,
}

/// Interactive menu loop over a pair of streams.
///
/// Reaching the end of `input` at any prompt ends the session as if Exit was chosen.
pub struct Session<R, W> {
    input: R,
    output: W,
    settings: Settings,
    tracker: FinanceTracker,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            input,
            output,
            settings,
            tracker: FinanceTracker::new(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to Personal Finance Tracker!")?;

        loop {
            render::menu(&mut self.output, &self.settings, self.tracker.balance())?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };

            let flow = match choice.as_str() {
                "1" => self.add_transaction(TransactionKind::Income)?,
                "2" => self.add_transaction(TransactionKind::Expense)?,
                "3" => self.monthly_report()?,
                "4" => self.all_time_summary()?,
                "5" => Flow::Exit,
                other => {
                    debug!(choice = other, "unknown menu option");
                    writeln!(self.output, "Invalid option. Try again.")?;
                    Flow::Continue
                }
            };
            if let Flow::Exit = flow {
                break;
            }
        }

        writeln!(self.output, "Have a Great Month, {}!", self.settings.user_name)?;
        self.output.flush()?;
        Ok(())
    }

    /// Print `message` and read one trimmed line. `None` means the input is exhausted.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn read_amount(&mut self) -> Result<Option<Cents>> {
        loop {
            let Some(text) = self.prompt("Amount: ")? else {
                return Ok(None);
            };
            match parse_cents(&text) {
                Ok(amount) if amount > 0 => return Ok(Some(amount)),
                Ok(_) => writeln!(self.output, "Amount must be positive.")?,
                Err(err @ ParseCentsError::TooPrecise(_)) => {
                    writeln!(self.output, "{}", err)?;
                }
                Err(err) => {
                    debug!(error = %err, "rejected amount");
                    writeln!(self.output, "Please enter a valid number.")?;
                }
            }
        }
    }

    fn read_category(&mut self) -> Result<Option<String>> {
        loop {
            let Some(category) = self.prompt("Category: ")? else {
                return Ok(None);
            };
            if !category.is_empty() {
                return Ok(Some(category));
            }
            writeln!(self.output, "Category cannot be empty.")?;
        }
    }

    fn add_transaction(&mut self, kind: TransactionKind) -> Result<Flow> {
        writeln!(self.output, "Adding {}...", kind.label())?;

        let Some(amount) = self.read_amount()? else {
            return Ok(Flow::Exit);
        };
        let Some(category) = self.read_category()? else {
            return Ok(Flow::Exit);
        };
        let Some(date) = self.prompt("Date (DD-MM-YYYY): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(description) = self.prompt("Description (optional): ")? else {
            return Ok(Flow::Exit);
        };

        match self
            .tracker
            .record(kind, amount, &category, &date, Some(&description))
        {
            Ok(transaction) => {
                info!(
                    kind = %transaction.kind(),
                    amount = transaction.amount(),
                    category = transaction.category(),
                    date = %transaction.date(),
                    "recorded transaction"
                );
                writeln!(self.output, "Transaction added successfully!")?;
            }
            Err(err) => {
                debug!(error = %err, "transaction rejected");
                writeln!(self.output, "Error: {}", err)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn monthly_report(&mut self) -> Result<Flow> {
        let Some(month) = self.prompt("Enter month and year (MM-YYYY): ")? else {
            return Ok(Flow::Exit);
        };

        match self.tracker.monthly_report(&month) {
            Ok(report) => {
                debug!(month = %report.month, "generated monthly report");
                render::monthly_report(
                    &mut self.output,
                    &self.settings,
                    &report,
                    self.tracker.balance(),
                )?;
            }
            Err(err) => {
                debug!(input = %month, "rejected month key");
                writeln!(self.output, "{}", err)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn all_time_summary(&mut self) -> Result<Flow> {
        let summary = self.tracker.all_time_summary();
        render::all_time_summary(&mut self.output, &self.settings, &summary)?;
        Ok(Flow::Continue)
    }
}
