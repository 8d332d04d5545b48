use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Format accepted for transaction dates typed by the user.
pub const ENTRY_DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid date format. Use DD-MM-YYYY.")]
pub struct InvalidDate;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid format. Use MM-YYYY.")]
pub struct InvalidMonthKey;

/// Parse a `DD-MM-YYYY` date. Both day and month must be two digits and the year four.
pub fn parse_entry_date(input: &str) -> Result<NaiveDate, InvalidDate> {
    let input = input.trim();
    if !has_shape(input, &[2, 2, 4]) {
        return Err(InvalidDate);
    }
    NaiveDate::parse_from_str(input, ENTRY_DATE_FORMAT).map_err(|_| InvalidDate)
}

/// Returns true if `input` is dash-separated ASCII digit groups of exactly the given widths.
fn has_shape(input: &str, widths: &[usize]) -> bool {
    let groups: Vec<&str> = input.split('-').collect();
    groups.len() == widths.len()
        && groups
            .iter()
            .zip(widths)
            .all(|(group, &width)| group.len() == width && group.bytes().all(|b| b.is_ascii_digit()))
}

/// A reporting period identified by month and year, written `MM-YYYY`.
///
/// Ordering is chronological (year first, then month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Build a key from raw month and year numbers. A month outside 1-12 is allowed;
    /// such a key simply never contains any date.
    pub fn new(month: u32, year: i32) -> Self {
        Self { year, month }
    }

    /// The key of the month `date` falls in.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:04}", self.month, self.year)
    }
}

impl FromStr for MonthKey {
    type Err = InvalidMonthKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !has_shape(s, &[2, 4]) {
            return Err(InvalidMonthKey);
        }
        let (month, year) = s.split_once('-').ok_or(InvalidMonthKey)?;
        let month: u32 = month.parse().map_err(|_| InvalidMonthKey)?;
        let year: i32 = year.parse().map_err(|_| InvalidMonthKey)?;
        Ok(MonthKey::new(month, year))
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
