//! Status command - show the gallery summary.

use colored::Colorize;
use galeria::{GaleriaConfig, derive_status};

use super::load;

pub fn run(config: &GaleriaConfig, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let gallery = load(config)?;
    let summary = gallery.summary();
    let orphaned = gallery.orphaned_evaluations().len();
    let today = config.today();

    // Stored statuses that no longer match today's date
    let stale = gallery
        .exhibitions()
        .iter()
        .filter(|e| derive_status(e.start_date, e.end_date, today) != e.status)
        .count();

    if json_output {
        let status = serde_json::json!({
            "file": config.data_path().display().to_string(),
            "summary": summary,
            "orphaned_evaluations": orphaned,
            "stale_statuses": stale,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Gallery status for".cyan().bold(),
        config.data_path().display().to_string().white()
    );
    println!();

    println!("{}", "Collections:".yellow().bold());
    println!("  Artists:     {}", summary.artist_count.to_string().white());
    println!("  Artworks:    {}", summary.artwork_count.to_string().white());
    println!(
        "  Exhibitions: {} ({} active)",
        gallery.exhibitions().len().to_string().white(),
        summary.active_exhibition_count.to_string().green()
    );
    println!("  Evaluations: {}", summary.evaluation_count.to_string().white());
    println!();

    if !summary.recent_artworks.is_empty() {
        println!("{}", "Recent artworks:".yellow().bold());
        for artwork in &summary.recent_artworks {
            println!(
                "  {} by {}",
                artwork.title.white().bold(),
                gallery.artist_name(&artwork.artist_id)
            );
        }
        println!();
    }

    if !summary.active_exhibitions.is_empty() {
        println!("{}", "Active exhibitions:".yellow().bold());
        for exhibition in &summary.active_exhibitions {
            println!(
                "  {} at {} until {}",
                exhibition.name.white().bold(),
                exhibition.location,
                exhibition.end_date
            );
        }
        println!();
    }

    if orphaned > 0 {
        println!(
            "{} {} evaluation(s) refer to artworks no longer in their exhibition.",
            "Note:".yellow().bold(),
            orphaned
        );
    }

    if stale > 0 {
        println!(
            "{} {} exhibition status(es) are out of date for {}. Run {} to update.",
            "Note:".yellow().bold(),
            stale,
            today,
            "galeria exhibition refresh".cyan().bold()
        );
    }

    Ok(())
}
