//! CLI application turning an invoice file path into a JSON invoice record.

mod commands;
mod error;

use std::io;
use std::process::ExitCode;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commands::process;

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr only; stdout carries nothing but the record.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let code = process::run(
        std::env::args_os().skip(1),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );

    Ok(ExitCode::from(code))
}
