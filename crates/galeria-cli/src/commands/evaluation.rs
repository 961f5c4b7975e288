//! Evaluation commands - submit, list and delete evaluations.

use colored::Colorize;
use galeria::{EvaluationDraft, GaleriaConfig, SubmitOutcome};

use super::{load, modify, print_empty};
use crate::cli::EvaluationAction;

/// Submit a rating; a second rating for the same pair replaces the first.
pub fn submit(
    config: &GaleriaConfig,
    exhibition: String,
    artwork: String,
    rating: f64,
    notes: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut draft = EvaluationDraft::new(exhibition, artwork, rating);
    if let Some(notes) = notes {
        draft = draft.with_notes(notes);
    }

    let (outcome, evaluation, title) = modify(config, |gallery| {
        let (outcome, evaluation) = gallery.submit_evaluation(draft)?;
        let evaluation = evaluation.clone();
        let title = gallery.artwork_title(&evaluation.artwork_id).to_string();
        Ok((outcome, evaluation, title))
    })?;

    let verb = match outcome {
        SubmitOutcome::Created => "Recorded".green().bold(),
        SubmitOutcome::Updated => "Updated".blue().bold(),
    };
    println!(
        "{} rating {} for {} {}",
        verb,
        format!("{:.1}", evaluation.rating).white().bold(),
        title,
        format!("({})", evaluation.id).dimmed()
    );

    Ok(())
}

pub fn run(
    config: &GaleriaConfig,
    action: EvaluationAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        EvaluationAction::List {
            exhibition,
            orphaned,
        } => {
            let gallery = load(config)?;
            let orphaned_ids: Vec<String> = gallery
                .orphaned_evaluations()
                .iter()
                .map(|e| e.id.clone())
                .collect();

            let rows: Vec<_> = gallery
                .evaluation_rows()
                .into_iter()
                .filter(|row| {
                    exhibition
                        .as_deref()
                        .is_none_or(|id| row.evaluation.exhibition_id == id)
                })
                .filter(|row| !orphaned || orphaned_ids.contains(&row.evaluation.id))
                .collect();

            if rows.is_empty() {
                print_empty("evaluations");
                return Ok(());
            }

            println!("{}", "Evaluations:".yellow().bold());
            for row in rows {
                let marker = if orphaned_ids.contains(&row.evaluation.id) {
                    " (orphaned)".yellow().to_string()
                } else {
                    String::new()
                };
                println!(
                    "  {}  {} {} by {} in {}{}",
                    row.evaluation.id.cyan(),
                    format!("{:>4.1}", row.evaluation.rating).white().bold(),
                    row.artwork_title,
                    row.artist_name,
                    row.exhibition_name,
                    marker
                );
                if let Some(notes) = &row.evaluation.notes {
                    println!("        {}", notes.dimmed());
                }
            }
        }

        EvaluationAction::Delete { id } => {
            modify(config, |gallery| Ok(gallery.delete_evaluation(&id)?))?;
            println!("{} {}", "Deleted evaluation".red().bold(), id.white());
        }
    }

    Ok(())
}
