// src/main.rs

use anyhow::Result;
use clap::Parser;
use demojibake::cli::Cli;
use demojibake::config::ConfigBuilder;
use demojibake::errors::AppError;
use demojibake::run;
use demojibake::signal::setup_signal_handler;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "demojibake=debug".parse().unwrap()
                } else {
                    "demojibake=info".parse().unwrap()
                },
            ),
        )
        .init();

    log::info!("Starting demojibake v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Configuration & Execution ---
    // A bad rule table or option combination fails here, before any file is
    // touched.
    let args = Cli::parse();
    let config = ConfigBuilder::from_cli(args).build()?;
    log::debug!("Configuration built successfully.");

    let token = setup_signal_handler()?;

    let mut stdout = std::io::stdout();
    let result = run(&config, &token, &mut stdout);

    // --- Error Handling ---
    if let Err(e) = result {
        match e {
            AppError::Interrupted => {
                eprintln!("\nOperation cancelled.");
                std::process::exit(130);
            }
            AppError::NoFilesFound => {
                eprintln!("demojibake: No files found matching the specified criteria.");
                return Ok(());
            }
            _ => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
