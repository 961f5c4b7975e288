//! Galeria: records, integrity rules and rankings for an art gallery.
//!
//! The gallery keeps four collections: artists, their artworks, exhibitions
//! showing a selection of artworks, and evaluations rating an artwork within
//! an exhibition. Evaluations are aggregated into per-artwork rankings.
//!
//! # Core Rules
//!
//! - **Guarded deletes**: an artist cannot be removed while artworks reference it
//! - **One evaluation per pair**: resubmitting for the same exhibition and artwork revises it
//! - **Derived status**: exhibitions are planned, active or completed by date
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use galeria::{ArtistDraft, ArtworkDraft, Dimensions, EvaluationDraft, ExhibitionDraft, Gallery};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
//! let mut gallery = Gallery::new();
//!
//! let artist = gallery.add_artist(ArtistDraft::new("Tarsila do Amaral")).unwrap().id.clone();
//! let artwork = gallery
//!     .add_artwork(ArtworkDraft::new("Abaporu", &artist).with_dimensions(Dimensions::new(85.0, 73.0)))
//!     .unwrap()
//!     .id
//!     .clone();
//! let exhibition = gallery
//!     .create_exhibition(
//!         ExhibitionDraft::new("Antropofagia", "MALBA", today, today).with_artwork(&artwork),
//!         today,
//!     )
//!     .unwrap()
//!     .id
//!     .clone();
//!
//! gallery.submit_evaluation(EvaluationDraft::new(&exhibition, &artwork, 9.5)).unwrap();
//!
//! let rankings = gallery.rankings(Some(&exhibition));
//! assert_eq!(rankings[0].average_rating, 9.5);
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod integrity;
pub mod model;
pub mod ranking;
pub mod status;
pub mod store;

mod gallery;

pub use config::GaleriaConfig;
pub use error::{GaleriaError, Result};
pub use export::{ExportFormat, write_rankings};
pub use gallery::{EvaluationRow, Gallery, GallerySummary, SubmitOutcome};
pub use model::{
    Artist, ArtistDraft, Artwork, ArtworkDraft, ArtworkStatus, Category, Dimensions, Evaluation,
    EvaluationDraft, Exhibition, ExhibitionDraft, ExhibitionStatus,
};
pub use ranking::{BrokenReference, RankingEntry, RankingReport, compute_rankings};
pub use status::derive_status;
pub use store::{EntityStore, JsonFileStore, KeyValueStore, MemoryStore};
