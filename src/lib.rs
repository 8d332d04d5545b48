pub mod application;
pub mod cli;
pub mod domain;

pub use application::FinanceTracker;
pub use domain::*;
