//! Exhibition commands - create, list, edit, delete and refresh exhibitions.

use colored::{ColoredString, Colorize};
use galeria::{ExhibitionDraft, ExhibitionStatus, GaleriaConfig};

use super::{load, modify, print_empty};
use crate::cli::ExhibitionAction;

pub fn run(
    config: &GaleriaConfig,
    action: ExhibitionAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ExhibitionAction::Add {
            name,
            location,
            start,
            end,
            artworks,
            description,
        } => {
            let draft = ExhibitionDraft::new(name, location, start, end)
                .with_artworks(artworks)
                .with_description(description);

            let today = config.today();
            let exhibition = modify(config, |gallery| {
                Ok(gallery.create_exhibition(draft, today)?.clone())
            })?;
            println!(
                "{} {} {} {}",
                "Created exhibition".green().bold(),
                exhibition.name.white().bold(),
                status_label(exhibition.status),
                format!("({})", exhibition.id).dimmed()
            );
        }

        ExhibitionAction::List => {
            let gallery = load(config)?;
            if gallery.exhibitions().is_empty() {
                print_empty("exhibitions");
                return Ok(());
            }

            println!("{}", "Exhibitions:".yellow().bold());
            for exhibition in gallery.exhibitions() {
                println!(
                    "  {}  {} {}",
                    exhibition.id.cyan(),
                    exhibition.name.white().bold(),
                    status_label(exhibition.status)
                );
                println!(
                    "      {} | {} to {} | {} artwork(s), {} artist(s)",
                    exhibition.location,
                    exhibition.start_date,
                    exhibition.end_date,
                    gallery.exhibition_artworks(&exhibition.id).len(),
                    gallery.participating_artists(&exhibition.id)
                );
            }
        }

        ExhibitionAction::Edit {
            id,
            name,
            location,
            start,
            end,
            description,
            artworks,
            add,
            remove,
        } => {
            let today = config.today();
            let exhibition = modify(config, |gallery| {
                let mut draft = ExhibitionDraft::from(gallery.exhibitions().require(&id)?);
                if let Some(name) = name {
                    draft.name = name;
                }
                if let Some(location) = location {
                    draft.location = location;
                }
                if let Some(start) = start {
                    draft.start_date = start;
                }
                if let Some(end) = end {
                    draft.end_date = end;
                }
                if let Some(description) = description {
                    draft.description = description;
                }
                draft.artwork_ids = edit_selection(draft.artwork_ids, artworks, add, &remove);

                Ok(gallery.update_exhibition(&id, draft, today)?.clone())
            })?;
            println!(
                "{} {} {} {}",
                "Updated exhibition".green().bold(),
                exhibition.name.white().bold(),
                status_label(exhibition.status),
                format!("[{} artwork(s)]", exhibition.artwork_ids.len()).blue()
            );
        }

        ExhibitionAction::Delete { id } => {
            let exhibition = modify(config, |gallery| Ok(gallery.delete_exhibition(&id)?))?;
            println!(
                "{} {}",
                "Deleted exhibition".red().bold(),
                exhibition.name.white()
            );
        }

        ExhibitionAction::Refresh => {
            let today = config.today();
            let changed = modify(config, |gallery| Ok(gallery.refresh_statuses(today)))?;
            println!(
                "Refreshed statuses for {}: {} changed",
                today.to_string().white().bold(),
                changed.to_string().cyan()
            );
        }
    }

    Ok(())
}

/// Replace the selection when `replace` is non-empty, then append `add`
/// (skipping ids already selected) and drop `remove`.
fn edit_selection(
    current: Vec<String>,
    replace: Vec<String>,
    add: Vec<String>,
    remove: &[String],
) -> Vec<String> {
    let mut ids = if replace.is_empty() { current } else { replace };
    for id in add {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids.retain(|id| !remove.contains(id));
    ids
}

fn status_label(status: ExhibitionStatus) -> ColoredString {
    let label = format!("[{}]", status.label());
    match status {
        ExhibitionStatus::Planned => label.blue(),
        ExhibitionStatus::Active => label.green(),
        ExhibitionStatus::Completed => label.dimmed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_edit_selection_adds_and_removes() {
        let edited = edit_selection(
            ids(&["w1", "w2"]),
            Vec::new(),
            ids(&["w2", "w3"]),
            &ids(&["w1"]),
        );
        assert_eq!(edited, ids(&["w2", "w3"]));
    }

    #[test]
    fn test_edit_selection_replace_then_adjust() {
        let edited = edit_selection(ids(&["w1"]), ids(&["w4", "w5"]), ids(&["w6"]), &ids(&["w5"]));
        assert_eq!(edited, ids(&["w4", "w6"]));
    }

    #[test]
    fn test_edit_selection_can_empty_the_list() {
        // Validation rejects the empty selection afterwards
        assert!(edit_selection(ids(&["w1"]), Vec::new(), Vec::new(), &ids(&["w1"])).is_empty());
    }
}
