//! CLI argument definitions using clap.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use galeria::{ArtworkStatus, Category, ExportFormat, GaleriaConfig};

/// Galeria: artists, artworks, exhibitions and rankings for an art gallery
#[derive(Parser)]
#[command(name = "galeria")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the gallery document
    #[arg(short, long, global = true, default_value = galeria::config::DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Don't archive the previous document when saving
    #[arg(long, global = true)]
    pub no_history: bool,

    /// Date used for exhibition statuses (YYYY-MM-DD, default: today)
    #[arg(long, global = true, value_name = "DATE")]
    pub today: Option<NaiveDate>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    pub fn config(&self) -> GaleriaConfig {
        let config = GaleriaConfig::new()
            .with_data_path(&self.data)
            .with_history(!self.no_history);
        match self.today {
            Some(today) => config.with_today(today),
            None => config,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage artists
    Artist {
        #[command(subcommand)]
        action: ArtistAction,
    },

    /// Manage artworks
    Artwork {
        #[command(subcommand)]
        action: ArtworkAction,
    },

    /// Manage exhibitions
    Exhibition {
        #[command(subcommand)]
        action: ExhibitionAction,
    },

    /// Rate an artwork in an exhibition (replaces an earlier rating)
    Evaluate {
        /// Exhibition ID
        #[arg(short, long)]
        exhibition: String,

        /// Artwork ID
        #[arg(short, long)]
        artwork: String,

        /// Rating from 1 to 10
        #[arg(short, long)]
        rating: f64,

        /// Optional notes
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Manage submitted evaluations
    Evaluation {
        #[command(subcommand)]
        action: EvaluationAction,
    },

    /// Show or export artwork rankings
    Rankings {
        /// Only count evaluations from this exhibition
        #[arg(short, long)]
        exhibition: Option<String>,

        /// Export format (csv, tsv, json); prints a table when omitted
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// Write the export to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show gallery summary
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ArtistAction {
    /// Add an artist
    Add {
        /// Artist name
        name: String,

        #[arg(long, default_value = "")]
        nationality: String,

        #[arg(long, default_value = "")]
        biography: String,

        #[arg(long, default_value = "")]
        style: String,

        #[arg(long)]
        image_url: Option<String>,
    },

    /// List artists
    List,

    /// Edit an artist; omitted fields keep their current value
    Edit {
        /// Artist ID
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        nationality: Option<String>,

        #[arg(long)]
        biography: Option<String>,

        #[arg(long)]
        style: Option<String>,

        /// New image URL (empty to clear)
        #[arg(long)]
        image_url: Option<String>,
    },

    /// Delete an artist (refused while artworks reference it)
    Delete {
        /// Artist ID
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ArtworkAction {
    /// Add an artwork
    Add {
        /// Artwork title
        title: String,

        /// Artist ID
        #[arg(short, long)]
        artist: String,

        #[arg(short, long)]
        year: Option<i32>,

        /// painting, sculpture, photography, installation or digital
        #[arg(short, long, default_value = "painting")]
        category: Category,

        #[arg(long, default_value = "")]
        technique: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Height in centimetres
        #[arg(long)]
        height: f64,

        /// Width in centimetres
        #[arg(long)]
        width: f64,

        /// Depth in centimetres (0 or omitted for flat works)
        #[arg(long)]
        depth: Option<f64>,

        /// available, in-exhibition, on-loan or sold
        #[arg(short, long, default_value = "available")]
        status: ArtworkStatus,

        #[arg(long)]
        image_url: Option<String>,
    },

    /// List artworks
    List {
        /// Only artworks by this artist
        #[arg(short, long)]
        artist: Option<String>,
    },

    /// Edit an artwork; omitted fields keep their current value
    Edit {
        /// Artwork ID
        id: String,

        #[arg(long)]
        title: Option<String>,

        /// Move the artwork to another artist
        #[arg(short, long)]
        artist: Option<String>,

        #[arg(short, long)]
        year: Option<i32>,

        #[arg(short, long)]
        category: Option<Category>,

        #[arg(long)]
        technique: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        height: Option<f64>,

        #[arg(long)]
        width: Option<f64>,

        /// Depth in centimetres (0 makes the work flat)
        #[arg(long)]
        depth: Option<f64>,

        #[arg(short, long)]
        status: Option<ArtworkStatus>,

        /// New image URL (empty to clear)
        #[arg(long)]
        image_url: Option<String>,
    },

    /// Delete an artwork
    Delete {
        /// Artwork ID
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ExhibitionAction {
    /// Create an exhibition
    Add {
        /// Exhibition name
        name: String,

        #[arg(short, long)]
        location: String,

        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,

        /// Artwork ID to show (repeatable)
        #[arg(short, long = "artwork", required = true)]
        artworks: Vec<String>,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// List exhibitions
    List,

    /// Edit an exhibition and recompute its status for today
    Edit {
        /// Exhibition ID
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,

        #[arg(long)]
        description: Option<String>,

        /// Replace the selection with these artwork IDs (repeatable)
        #[arg(short, long = "artwork")]
        artworks: Vec<String>,

        /// Add an artwork to the selection (repeatable)
        #[arg(long = "add-artwork", value_name = "ID")]
        add: Vec<String>,

        /// Remove an artwork from the selection (repeatable)
        #[arg(long = "remove-artwork", value_name = "ID")]
        remove: Vec<String>,
    },

    /// Delete an exhibition (its evaluations are kept)
    Delete {
        /// Exhibition ID
        id: String,
    },

    /// Recompute every exhibition's status for today
    Refresh,
}

#[derive(Subcommand)]
pub enum EvaluationAction {
    /// List evaluations
    List {
        /// Only evaluations from this exhibition
        #[arg(short, long)]
        exhibition: Option<String>,

        /// Only evaluations whose artwork left the exhibition
        #[arg(long)]
        orphaned: bool,
    },

    /// Delete an evaluation
    Delete {
        /// Evaluation ID
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags_build_config() {
        let cli = Cli::try_parse_from([
            "galeria",
            "status",
            "--data",
            "data/gallery.json",
            "--no-history",
            "--today",
            "2026-10-18",
        ])
        .unwrap();

        let config = cli.config();
        assert_eq!(config.data_path, PathBuf::from("data/gallery.json"));
        assert!(!config.keep_history);
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2026, 10, 18));
    }

    #[test]
    fn test_exhibition_requires_an_artwork() {
        let result = Cli::try_parse_from([
            "galeria",
            "exhibition",
            "add",
            "Show",
            "--location",
            "Hall",
            "--start",
            "2026-01-01",
            "--end",
            "2026-02-01",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_artwork_enums_parse() {
        let cli = Cli::try_parse_from([
            "galeria", "artwork", "add", "Bicho", "--artist", "artist_1", "--height", "40",
            "--width", "50", "--category", "sculpture", "--status", "on_loan",
        ])
        .unwrap();

        match cli.command {
            Commands::Artwork {
                action: ArtworkAction::Add { category, status, .. },
            } => {
                assert_eq!(category, Category::Sculpture);
                assert_eq!(status, ArtworkStatus::OnLoan);
            }
            _ => panic!("expected artwork add"),
        }
    }

    #[test]
    fn test_edit_flags_are_optional() {
        let cli = Cli::try_parse_from(["galeria", "artist", "edit", "artist_1", "--style", "Pop"]).unwrap();

        match cli.command {
            Commands::Artist {
                action: ArtistAction::Edit { id, name, style, .. },
            } => {
                assert_eq!(id, "artist_1");
                assert_eq!(name, None);
                assert_eq!(style.as_deref(), Some("Pop"));
            }
            _ => panic!("expected artist edit"),
        }
    }

    #[test]
    fn test_artwork_edit_parses_enums() {
        let cli = Cli::try_parse_from([
            "galeria", "artwork", "edit", "artwork_1", "--status", "sold", "--depth", "0",
        ])
        .unwrap();

        match cli.command {
            Commands::Artwork {
                action: ArtworkAction::Edit { status, category, depth, height, .. },
            } => {
                assert_eq!(status, Some(ArtworkStatus::Sold));
                assert_eq!(category, None);
                assert_eq!(depth, Some(0.0));
                assert_eq!(height, None);
            }
            _ => panic!("expected artwork edit"),
        }
    }

    #[test]
    fn test_exhibition_edit_selection_flags() {
        let cli = Cli::try_parse_from([
            "galeria",
            "exhibition",
            "edit",
            "exhibition_1",
            "--add-artwork",
            "artwork_3",
            "--remove-artwork",
            "artwork_1",
            "--end",
            "2026-12-31",
        ])
        .unwrap();

        match cli.command {
            Commands::Exhibition {
                action: ExhibitionAction::Edit { artworks, add, remove, end, start, .. },
            } => {
                assert!(artworks.is_empty());
                assert_eq!(add, vec!["artwork_3"]);
                assert_eq!(remove, vec!["artwork_1"]);
                assert_eq!(end, NaiveDate::from_ymd_opt(2026, 12, 31));
                assert_eq!(start, None);
            }
            _ => panic!("expected exhibition edit"),
        }
    }
}
