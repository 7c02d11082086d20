//! Olympia Odos Pass
//!
//! Opens the interactive form on the terminal. The toll table is read from
//! the file named by `OPASS_TOLLS`, or the bundled table otherwise.

use std::io::{self, IsTerminal};

use chrono::Local;
use tracing::{error, info};

use opass::config::TollTableLoader;
use opass::form::{FormState, SessionOptions, run_session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let loader = match TollTableLoader::from_env_or_bundled() {
        Ok(loader) => loader,
        Err(err) => {
            error!(error = %err, "Failed to load toll table");
            return Err(err.into());
        }
    };
    info!(source = loader.source(), stations = loader.table().len(), "Starting form");

    let state = FormState::new(loader);
    let options = SessionOptions {
        today: Local::now().date_naive(),
        styled: io::stdout().is_terminal(),
    };

    run_session(&state, io::stdin().lock(), io::stdout().lock(), options)?;
    Ok(())
}
