mod render;
mod session;

use std::io;
use std::sync::Once;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt};

pub use session::Session;

/// fintrack - Personal Finance Tracker
#[derive(Parser)]
#[command(name = "fintrack")]
#[command(about = "Track income and expenses from a simple text menu")]
#[command(version)]
pub struct Cli {
    /// Name used when saying goodbye
    #[arg(short, long, env = "FINTRACK_USER", default_value = "friend")]
    pub name: String,

    /// Prefix printed before balances (e.g. "Rs.", "$")
    #[arg(short, long, env = "FINTRACK_CURRENCY", default_value = "Rs.")]
    pub currency: String,

    /// Report output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Display settings handed to the menu session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub user_name: String,
    pub currency: String,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_name: "friend".to_string(),
            currency: "Rs.".to_string(),
            format: OutputFormat::Table,
        }
    }
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            user_name: self.name.clone(),
            currency: self.currency.clone(),
            format: self.format,
        }
    }

    pub fn run(self) -> Result<()> {
        init_tracing(self.verbose);
        tracing::debug!(user = %self.name, format = ?self.format, "starting session");

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = Session::new(stdin.lock(), stdout.lock(), self.settings());
        session.run()
    }
}

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber, writing to stderr so the menu on stdout stays clean.
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let default_level = if verbose { "fintrack=debug" } else { "fintrack=warn" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

        fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    });
}
