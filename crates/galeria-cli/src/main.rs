//! Galeria CLI - gallery records, evaluations and rankings.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config();

    let result = match cli.command {
        Commands::Artist { action } => commands::artist::run(&config, action),

        Commands::Artwork { action } => commands::artwork::run(&config, action),

        Commands::Exhibition { action } => commands::exhibition::run(&config, action),

        Commands::Evaluate {
            exhibition,
            artwork,
            rating,
            notes,
        } => commands::evaluation::submit(&config, exhibition, artwork, rating, notes),

        Commands::Evaluation { action } => commands::evaluation::run(&config, action),

        Commands::Rankings {
            exhibition,
            format,
            output,
        } => commands::rankings::run(&config, exhibition, format, output),

        Commands::Status { json } => commands::status::run(&config, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool) {
    let level = if verbose { "galeria=debug" } else { "galeria=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
