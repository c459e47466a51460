//! # steer
//!
//! Command-line entry point for the steer framework's reference
//! application.

use colored::Colorize;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(err) = run() {
        tracing::error!("command failed: {err}");
        eprintln!("{} {err}", "Error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let argv: Vec<String> = std::env::args().collect();
    let app = steer_cli::build_app()?;
    app.dispatch(&argv)?;
    Ok(())
}
