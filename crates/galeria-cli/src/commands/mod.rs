//! CLI command implementations.

pub mod artist;
pub mod artwork;
pub mod evaluation;
pub mod exhibition;
pub mod rankings;
pub mod status;

use colored::Colorize;
use galeria::{GaleriaConfig, Gallery, JsonFileStore};

/// Open the gallery, apply `change`, and save if it succeeds.
///
/// Nothing is written when `change` fails.
pub(crate) fn modify<T, F>(config: &GaleriaConfig, change: F) -> Result<T, Box<dyn std::error::Error>>
where
    F: FnOnce(&mut Gallery) -> Result<T, Box<dyn std::error::Error>>,
{
    let (mut store, mut gallery) = config.open()?;
    let value = change(&mut gallery)?;
    config.save(&mut store, &gallery)?;
    Ok(value)
}

/// Open the gallery for reading.
pub(crate) fn load(config: &GaleriaConfig) -> Result<Gallery, Box<dyn std::error::Error>> {
    let (_, gallery): (JsonFileStore, Gallery) = config.open()?;
    Ok(gallery)
}

/// Print a dim "nothing here yet" line.
pub(crate) fn print_empty(what: &str) {
    println!("{}", format!("No {} yet.", what).dimmed());
}
