//! Artist commands - add, list, edit and delete artists.

use colored::Colorize;
use galeria::{ArtistDraft, GaleriaConfig};

use super::{load, modify, print_empty};
use crate::cli::ArtistAction;

pub fn run(config: &GaleriaConfig, action: ArtistAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ArtistAction::Add {
            name,
            nationality,
            biography,
            style,
            image_url,
        } => {
            let mut draft = ArtistDraft::new(name)
                .with_nationality(nationality)
                .with_biography(biography)
                .with_style(style);
            if let Some(url) = image_url {
                draft = draft.with_image_url(url);
            }

            let artist = modify(config, |gallery| Ok(gallery.add_artist(draft)?.clone()))?;
            println!(
                "{} {} {}",
                "Added artist".green().bold(),
                artist.name.white().bold(),
                format!("({})", artist.id).dimmed()
            );
        }

        ArtistAction::List => {
            let gallery = load(config)?;
            if gallery.artists().is_empty() {
                print_empty("artists");
                return Ok(());
            }

            println!("{}", "Artists:".yellow().bold());
            for artist in gallery.artists() {
                let works = gallery.artworks_by_artist(&artist.id).len();
                let mut details = Vec::new();
                if !artist.nationality.is_empty() {
                    details.push(artist.nationality.as_str());
                }
                if !artist.style.is_empty() {
                    details.push(artist.style.as_str());
                }

                println!(
                    "  {}  {} {} {}",
                    artist.id.cyan(),
                    artist.name.white().bold(),
                    details.join(", ").dimmed(),
                    format!("[{} artwork(s)]", works).blue()
                );
            }
        }

        ArtistAction::Edit {
            id,
            name,
            nationality,
            biography,
            style,
            image_url,
        } => {
            let artist = modify(config, |gallery| {
                let mut draft = ArtistDraft::from(gallery.artists().require(&id)?);
                if let Some(name) = name {
                    draft.name = name;
                }
                if let Some(nationality) = nationality {
                    draft.nationality = nationality;
                }
                if let Some(biography) = biography {
                    draft.biography = biography;
                }
                if let Some(style) = style {
                    draft.style = style;
                }
                if let Some(url) = image_url {
                    draft.image_url = Some(url);
                }
                Ok(gallery.update_artist(&id, draft)?.clone())
            })?;
            println!(
                "{} {} {}",
                "Updated artist".green().bold(),
                artist.name.white().bold(),
                format!("({})", artist.id).dimmed()
            );
        }

        ArtistAction::Delete { id } => {
            let artist = modify(config, |gallery| Ok(gallery.delete_artist(&id)?))?;
            println!("{} {}", "Deleted artist".red().bold(), artist.name.white());
        }
    }

    Ok(())
}
