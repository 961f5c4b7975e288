//! Artwork commands - add, list, edit and delete artworks.

use colored::Colorize;
use galeria::{ArtworkDraft, ArtworkStatus, Category, Dimensions, GaleriaConfig};

use super::{load, modify, print_empty};
use crate::cli::ArtworkAction;

pub fn run(config: &GaleriaConfig, action: ArtworkAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ArtworkAction::Add {
            title,
            artist,
            year,
            category,
            technique,
            description,
            height,
            width,
            depth,
            status,
            image_url,
        } => {
            let mut dimensions = Dimensions::new(height, width);
            if let Some(depth) = depth {
                dimensions = dimensions.with_depth(depth);
            }

            let mut draft = ArtworkDraft::new(title, artist)
                .with_category(category)
                .with_technique(technique)
                .with_description(description)
                .with_dimensions(dimensions)
                .with_status(status);
            if let Some(year) = year {
                draft = draft.with_year(year);
            }
            if let Some(url) = image_url {
                draft = draft.with_image_url(url);
            }

            let (artwork, artist_name) = modify(config, |gallery| {
                let artwork = gallery.add_artwork(draft)?.clone();
                let artist_name = gallery.artist_name(&artwork.artist_id).to_string();
                Ok((artwork, artist_name))
            })?;
            println!(
                "{} {} by {} {}",
                "Added artwork".green().bold(),
                artwork.title.white().bold(),
                artist_name,
                format!("({})", artwork.id).dimmed()
            );
        }

        ArtworkAction::List { artist } => {
            let gallery = load(config)?;
            let artworks: Vec<_> = match &artist {
                Some(artist_id) => gallery.artworks_by_artist(artist_id),
                None => gallery.artworks().iter().collect(),
            };

            if artworks.is_empty() {
                print_empty("artworks");
                return Ok(());
            }

            println!("{}", "Artworks:".yellow().bold());
            for artwork in artworks {
                let size = match artwork.dimensions.depth {
                    Some(depth) => format!(
                        "{} x {} x {} cm",
                        artwork.dimensions.height, artwork.dimensions.width, depth
                    ),
                    None => format!("{} x {} cm", artwork.dimensions.height, artwork.dimensions.width),
                };

                println!(
                    "  {}  {} ({}) - {}",
                    artwork.id.cyan(),
                    artwork.title.white().bold(),
                    artwork.year,
                    gallery.artist_name(&artwork.artist_id)
                );
                println!(
                    "      {} | {} | {}",
                    category_label(artwork.category),
                    size,
                    status_label(artwork.status)
                );
            }
        }

        ArtworkAction::Edit {
            id,
            title,
            artist,
            year,
            category,
            technique,
            description,
            height,
            width,
            depth,
            status,
            image_url,
        } => {
            let (artwork, artist_name) = modify(config, |gallery| {
                let mut draft = ArtworkDraft::from(gallery.artworks().require(&id)?);
                if let Some(title) = title {
                    draft.title = title;
                }
                if let Some(artist) = artist {
                    draft.artist_id = artist;
                }
                if let Some(year) = year {
                    draft.year = year;
                }
                if let Some(category) = category {
                    draft.category = category;
                }
                if let Some(technique) = technique {
                    draft.technique = technique;
                }
                if let Some(description) = description {
                    draft.description = description;
                }
                if let Some(height) = height {
                    draft.dimensions.height = height;
                }
                if let Some(width) = width {
                    draft.dimensions.width = width;
                }
                if let Some(depth) = depth {
                    draft.dimensions = draft.dimensions.with_depth(depth);
                }
                if let Some(status) = status {
                    draft.status = status;
                }
                if let Some(url) = image_url {
                    draft.image_url = Some(url);
                }

                let artwork = gallery.update_artwork(&id, draft)?.clone();
                let artist_name = gallery.artist_name(&artwork.artist_id).to_string();
                Ok((artwork, artist_name))
            })?;
            println!(
                "{} {} by {} {}",
                "Updated artwork".green().bold(),
                artwork.title.white().bold(),
                artist_name,
                format!("({})", artwork.id).dimmed()
            );
        }

        ArtworkAction::Delete { id } => {
            let artwork = modify(config, |gallery| Ok(gallery.delete_artwork(&id)?))?;
            println!("{} {}", "Deleted artwork".red().bold(), artwork.title.white());
        }
    }

    Ok(())
}

fn category_label(category: Category) -> String {
    category.label().blue().to_string()
}

fn status_label(status: ArtworkStatus) -> String {
    let label = status.label();
    match status {
        ArtworkStatus::Available => label.green().to_string(),
        ArtworkStatus::InExhibition => label.cyan().to_string(),
        ArtworkStatus::OnLoan => label.yellow().to_string(),
        ArtworkStatus::Sold => label.red().to_string(),
    }
}
