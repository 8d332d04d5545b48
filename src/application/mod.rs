// Application layer - use cases and orchestration around the in-memory ledger.

pub mod error;
pub mod reporting;
pub mod service;

pub use error::*;
pub use reporting::*;
pub use service::*;
