//! Artwork rankings aggregated from evaluations.
//!
//! Rankings are recomputed from scratch on every call. Groups whose artwork
//! or artist cannot be resolved are left out of the ranking; each one is
//! logged and reported in [`RankingReport::broken_references`].

use std::cmp::Ordering;
use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::{Artist, Artwork, Evaluation};

/// One ranked artwork.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub artwork: Artwork,
    pub artist: Artist,
    /// Arithmetic mean of the matching ratings.
    pub average_rating: f64,
    /// Number of matching evaluations.
    pub evaluation_count: usize,
}

/// Why a group of evaluations was left out of a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum BrokenReference {
    /// The evaluated artwork no longer exists.
    MissingArtwork {
        artwork_id: String,
        evaluation_count: usize,
    },
    /// The artwork exists but its artist does not.
    MissingArtist {
        artwork_id: String,
        artist_id: String,
        evaluation_count: usize,
    },
}

impl BrokenReference {
    pub fn artwork_id(&self) -> &str {
        match self {
            BrokenReference::MissingArtwork { artwork_id, .. } => artwork_id,
            BrokenReference::MissingArtist { artwork_id, .. } => artwork_id,
        }
    }

    /// Number of evaluations dropped because of this reference.
    pub fn evaluation_count(&self) -> usize {
        match self {
            BrokenReference::MissingArtwork {
                evaluation_count, ..
            } => *evaluation_count,
            BrokenReference::MissingArtist {
                evaluation_count, ..
            } => *evaluation_count,
        }
    }
}

/// A ranking together with the groups that could not be ranked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    pub entries: Vec<RankingEntry>,
    pub broken_references: Vec<BrokenReference>,
}

impl RankingReport {
    /// Total evaluations that made it into the ranking.
    pub fn ranked_evaluations(&self) -> usize {
        self.entries.iter().map(|e| e.evaluation_count).sum()
    }

    /// Total evaluations dropped because of broken references.
    pub fn dropped_evaluations(&self) -> usize {
        self.broken_references
            .iter()
            .map(BrokenReference::evaluation_count)
            .sum()
    }
}

/// Rank artworks by their mean rating.
///
/// With `exhibition_filter`, only evaluations for that exhibition count.
/// Entries are ordered by mean rating (highest first), then by evaluation
/// count (most first), then by artwork id.
pub fn compute_rankings(
    evaluations: &[Evaluation],
    artworks: &[Artwork],
    artists: &[Artist],
    exhibition_filter: Option<&str>,
) -> Vec<RankingEntry> {
    rank(evaluations, artworks, artists, exhibition_filter).entries
}

/// Like [`compute_rankings`], also reporting the groups that were dropped.
pub fn rank(
    evaluations: &[Evaluation],
    artworks: &[Artwork],
    artists: &[Artist],
    exhibition_filter: Option<&str>,
) -> RankingReport {
    let mut groups: IndexMap<&str, Vec<f64>> = IndexMap::new();
    for evaluation in evaluations
        .iter()
        .filter(|e| exhibition_filter.is_none_or(|id| e.exhibition_id == id))
    {
        groups
            .entry(evaluation.artwork_id.as_str())
            .or_default()
            .push(evaluation.rating);
    }

    let artwork_index: HashMap<&str, &Artwork> =
        artworks.iter().map(|a| (a.id.as_str(), a)).collect();
    let artist_index: HashMap<&str, &Artist> =
        artists.iter().map(|a| (a.id.as_str(), a)).collect();

    let mut report = RankingReport::default();

    for (artwork_id, ratings) in groups {
        let Some(&artwork) = artwork_index.get(artwork_id) else {
            warn!(
                artwork_id,
                evaluations = ratings.len(),
                "dropping evaluations for missing artwork from ranking"
            );
            report.broken_references.push(BrokenReference::MissingArtwork {
                artwork_id: artwork_id.to_string(),
                evaluation_count: ratings.len(),
            });
            continue;
        };

        let Some(&artist) = artist_index.get(artwork.artist_id.as_str()) else {
            warn!(
                artwork_id,
                artist_id = %artwork.artist_id,
                evaluations = ratings.len(),
                "dropping evaluations for artwork with missing artist from ranking"
            );
            report.broken_references.push(BrokenReference::MissingArtist {
                artwork_id: artwork_id.to_string(),
                artist_id: artwork.artist_id.clone(),
                evaluation_count: ratings.len(),
            });
            continue;
        };

        let sum: f64 = ratings.iter().sum();
        report.entries.push(RankingEntry {
            artwork: artwork.clone(),
            artist: artist.clone(),
            average_rating: sum / ratings.len() as f64,
            evaluation_count: ratings.len(),
        });
    }

    report.entries.sort_by(compare_entries);
    report
}

fn compare_entries(a: &RankingEntry, b: &RankingEntry) -> Ordering {
    b.average_rating
        .total_cmp(&a.average_rating)
        .then_with(|| b.evaluation_count.cmp(&a.evaluation_count))
        .then_with(|| a.artwork.id.cmp(&b.artwork.id))
}
