//! Rankings command - show or export artwork rankings.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use colored::Colorize;
use galeria::{BrokenReference, ExportFormat, GaleriaConfig, write_rankings};

use super::{load, print_empty};

pub fn run(
    config: &GaleriaConfig,
    exhibition: Option<String>,
    format: Option<ExportFormat>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let gallery = load(config)?;

    if let Some(id) = &exhibition {
        gallery.exhibitions().require(id)?;
    }
    let report = gallery.ranking_report(exhibition.as_deref());

    // Exporting: an explicit format, or one inferred from the output file
    let export_format = match (&format, &output) {
        (Some(format), _) => Some(*format),
        (None, Some(path)) => Some(
            path.extension()
                .and_then(|ext| ext.to_str())
                .and_then(|ext| ext.parse().ok())
                .unwrap_or_default(),
        ),
        (None, None) => None,
    };

    if let Some(format) = export_format {
        match &output {
            Some(path) => {
                let file = File::create(path)?;
                write_rankings(&report.entries, format, BufWriter::new(file))?;
                eprintln!(
                    "{} {} ranking(s) to {}",
                    "Exported".green().bold(),
                    report.entries.len(),
                    path.display().to_string().white()
                );
            }
            None => write_rankings(&report.entries, format, io::stdout().lock())?,
        }
        return Ok(());
    }

    let heading = match &exhibition {
        Some(id) => format!("Rankings for {}", gallery.exhibition_name(id)),
        None => "Overall rankings".to_string(),
    };
    println!("{}", heading.cyan().bold());
    println!();

    if report.entries.is_empty() {
        print_empty("evaluations");
    }

    for (i, entry) in report.entries.iter().enumerate() {
        let average = format!("{:.1}", entry.average_rating);
        let average = if entry.average_rating >= 8.0 {
            average.green()
        } else if entry.average_rating >= 5.0 {
            average.yellow()
        } else {
            average.red()
        };

        println!(
            "  {:>3}. {} {} by {} {}",
            i + 1,
            average.bold(),
            entry.artwork.title.white().bold(),
            entry.artist.name,
            format!("({} evaluation(s))", entry.evaluation_count).dimmed()
        );
    }

    if !report.broken_references.is_empty() {
        println!();
        println!(
            "{} {} evaluation(s) left out:",
            "Warning:".yellow().bold(),
            report.dropped_evaluations()
        );
        for broken in &report.broken_references {
            match broken {
                BrokenReference::MissingArtwork {
                    artwork_id,
                    evaluation_count,
                } => println!(
                    "  artwork {} no longer exists ({} evaluation(s))",
                    artwork_id.cyan(),
                    evaluation_count
                ),
                BrokenReference::MissingArtist {
                    artwork_id,
                    artist_id,
                    evaluation_count,
                } => println!(
                    "  artwork {} has missing artist {} ({} evaluation(s))",
                    artwork_id.cyan(),
                    artist_id.cyan(),
                    evaluation_count
                ),
            }
        }
    }

    Ok(())
}
