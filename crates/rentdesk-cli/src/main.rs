//! RentDesk operator CLI.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rentdesk_core::error::ErrorKind;

mod commands;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.execute().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&e.to_string());
            ExitCode::from(exit_code(e.kind))
        }
    }
}

/// sysexits-style status for scripts driving tenant administration.
fn exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::Validation | ErrorKind::NotFound | ErrorKind::Conflict => 65,
        ErrorKind::Database | ErrorKind::Timeout => 69,
        ErrorKind::Configuration => 78,
        ErrorKind::Unauthenticated
        | ErrorKind::Forbidden
        | ErrorKind::Internal
        | ErrorKind::Serialization => 1,
    }
}
