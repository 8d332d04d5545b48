use thiserror::Error;

use crate::domain::{InvalidDate, InvalidMonthKey, LedgerError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    InvalidDate(#[from] InvalidDate),

    #[error(transparent)]
    InvalidMonthKey(#[from] InvalidMonthKey),

    #[error("Category cannot be empty.")]
    EmptyCategory,
}
