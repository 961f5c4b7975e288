//! The gallery: four collections and the operations that keep them consistent.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::integrity;
use crate::model::{
    Artist, ArtistDraft, Artwork, ArtworkDraft, Evaluation, EvaluationDraft, Exhibition,
    ExhibitionDraft, ExhibitionStatus,
};
use crate::ranking::{self, RankingEntry, RankingReport};
use crate::store::{EntityStore, KeyValueStore};

/// Number of artworks shown as recent on the dashboard.
const RECENT_ARTWORKS: usize = 3;

/// Whether an evaluation submission created a record or revised one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitOutcome {
    Created,
    Updated,
}

/// Dashboard figures for the whole gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GallerySummary {
    pub artist_count: usize,
    pub artwork_count: usize,
    /// Exhibitions whose stored status is active.
    pub active_exhibition_count: usize,
    pub evaluation_count: usize,
    /// Most recently added artworks, newest first.
    pub recent_artworks: Vec<Artwork>,
    pub active_exhibitions: Vec<Exhibition>,
}

/// An evaluation joined with the names it refers to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRow {
    #[serde(flatten)]
    pub evaluation: Evaluation,
    pub artwork_title: String,
    pub artist_name: String,
    pub exhibition_name: String,
}

/// The gallery's records.
///
/// All mutation goes through `&mut self`, so operations never interleave.
/// Each operation validates its input and references first and mutates only
/// once every check has passed.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    artists: EntityStore<Artist>,
    artworks: EntityStore<Artwork>,
    exhibitions: EntityStore<Exhibition>,
    evaluations: EntityStore<Evaluation>,
}

impl Gallery {
    /// Create an empty gallery.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a gallery from existing collections.
    pub fn with_stores(
        artists: EntityStore<Artist>,
        artworks: EntityStore<Artwork>,
        exhibitions: EntityStore<Exhibition>,
        evaluations: EntityStore<Evaluation>,
    ) -> Self {
        Self {
            artists,
            artworks,
            exhibitions,
            evaluations,
        }
    }

    /// Load all four collections from `kv`.
    pub fn from_store<S: KeyValueStore + ?Sized>(kv: &S) -> Result<Self> {
        Ok(Self {
            artists: EntityStore::load(kv)?,
            artworks: EntityStore::load(kv)?,
            exhibitions: EntityStore::load(kv)?,
            evaluations: EntityStore::load(kv)?,
        })
    }

    /// Write all four collections to `kv`.
    pub fn write_to<S: KeyValueStore + ?Sized>(&self, kv: &mut S) -> Result<()> {
        self.artists.store(kv)?;
        self.artworks.store(kv)?;
        self.exhibitions.store(kv)?;
        self.evaluations.store(kv)
    }

    pub fn artists(&self) -> &EntityStore<Artist> {
        &self.artists
    }

    pub fn artworks(&self) -> &EntityStore<Artwork> {
        &self.artworks
    }

    pub fn exhibitions(&self) -> &EntityStore<Exhibition> {
        &self.exhibitions
    }

    pub fn evaluations(&self) -> &EntityStore<Evaluation> {
        &self.evaluations
    }

    // Artists

    pub fn add_artist(&mut self, draft: ArtistDraft) -> Result<&Artist> {
        draft.validate()?;
        let artist = self.artists.append(Artist::from_draft(draft))?;
        debug!(id = %artist.id, name = %artist.name, "added artist");
        Ok(artist)
    }

    pub fn update_artist(&mut self, id: &str, draft: ArtistDraft) -> Result<&Artist> {
        draft.validate()?;
        let artist = self.artists.update_where(id, |a| a.apply(draft))?;
        debug!(id = %artist.id, "updated artist");
        Ok(artist)
    }

    /// Delete an artist. Fails with `DependencyExists` while artworks reference it.
    ///
    /// The dependency check runs first, so artworks pointing at an artist id
    /// that is already missing still report `DependencyExists`.
    pub fn delete_artist(&mut self, id: &str) -> Result<Artist> {
        integrity::check_artist_deletion(self.artworks.get_all(), id)?;
        let artist = self.artists.remove_where(id)?;
        debug!(id, "deleted artist");
        Ok(artist)
    }

    pub fn can_delete_artist(&self, id: &str) -> bool {
        integrity::can_delete_artist(self.artworks.get_all(), id)
    }

    // Artworks

    pub fn add_artwork(&mut self, draft: ArtworkDraft) -> Result<&Artwork> {
        draft.validate()?;
        integrity::check_artwork_artist(&self.artists, &draft.artist_id)?;
        let artwork = self.artworks.append(Artwork::from_draft(draft))?;
        debug!(id = %artwork.id, artist_id = %artwork.artist_id, "added artwork");
        Ok(artwork)
    }

    pub fn update_artwork(&mut self, id: &str, draft: ArtworkDraft) -> Result<&Artwork> {
        draft.validate()?;
        integrity::check_artwork_artist(&self.artists, &draft.artist_id)?;
        let artwork = self.artworks.update_where(id, |a| a.apply(draft))?;
        debug!(id = %artwork.id, "updated artwork");
        Ok(artwork)
    }

    /// Delete an artwork. Exhibitions keep the id; lookups skip it.
    pub fn delete_artwork(&mut self, id: &str) -> Result<Artwork> {
        let artwork = self.artworks.remove_where(id)?;
        debug!(id, "deleted artwork");
        Ok(artwork)
    }

    // Exhibitions

    /// Create an exhibition with its status derived for `today`.
    pub fn create_exhibition(
        &mut self,
        draft: ExhibitionDraft,
        today: NaiveDate,
    ) -> Result<&Exhibition> {
        draft.validate()?;
        integrity::check_exhibition_artworks(&self.artworks, &draft.artwork_ids)?;
        let exhibition = self
            .exhibitions
            .append(Exhibition::from_draft(draft, today))?;
        debug!(id = %exhibition.id, status = %exhibition.status, "created exhibition");
        Ok(exhibition)
    }

    /// Replace an exhibition's fields and recompute its status for `today`.
    ///
    /// Artworks already in the exhibition may be kept even if they have since
    /// been deleted; newly added ones must exist. Evaluations for artworks
    /// that are removed from the selection are kept.
    pub fn update_exhibition(
        &mut self,
        id: &str,
        draft: ExhibitionDraft,
        today: NaiveDate,
    ) -> Result<&Exhibition> {
        draft.validate()?;
        let current = self.exhibitions.require(id)?;
        let added: Vec<String> = draft
            .artwork_ids
            .iter()
            .filter(|artwork_id| !current.includes(artwork_id))
            .cloned()
            .collect();
        integrity::check_exhibition_artworks(&self.artworks, &added)?;

        let exhibition = self
            .exhibitions
            .update_where(id, |e| e.apply(draft, today))?;
        debug!(id = %exhibition.id, status = %exhibition.status, "updated exhibition");
        Ok(exhibition)
    }

    /// Delete an exhibition. Its evaluations are kept.
    pub fn delete_exhibition(&mut self, id: &str) -> Result<Exhibition> {
        let exhibition = self.exhibitions.remove_where(id)?;
        debug!(id, "deleted exhibition");
        Ok(exhibition)
    }

    /// Recompute every exhibition's status for `today`.
    ///
    /// Statuses are otherwise only derived on create and edit. Returns the
    /// number of exhibitions whose status changed.
    pub fn refresh_statuses(&mut self, today: NaiveDate) -> usize {
        let ids: Vec<String> = self.exhibitions.iter().map(|e| e.id.clone()).collect();
        let mut changed = 0;
        for id in ids {
            let mut did_change = false;
            if self
                .exhibitions
                .update_where(&id, |e| did_change = e.refresh_status(today))
                .is_ok()
                && did_change
            {
                changed += 1;
            }
        }
        debug!(changed, %today, "refreshed exhibition statuses");
        changed
    }

    // Evaluations

    /// Record a rating for an artwork in an exhibition.
    ///
    /// The first submission for an (exhibition, artwork) pair creates an
    /// evaluation; later ones replace its rating and notes, keeping its id
    /// and creation time.
    pub fn submit_evaluation(
        &mut self,
        draft: EvaluationDraft,
    ) -> Result<(SubmitOutcome, &Evaluation)> {
        draft.validate()?;
        integrity::check_evaluation_target(&self.exhibitions, &self.artworks, &draft)?;

        let existing = self
            .evaluations
            .find(|e| e.is_for(&draft.exhibition_id, &draft.artwork_id))
            .map(|e| e.id.clone());

        match existing {
            Some(id) => {
                let evaluation = self.evaluations.update_where(&id, |e| e.revise(draft))?;
                debug!(id = %evaluation.id, rating = evaluation.rating, "updated evaluation");
                Ok((SubmitOutcome::Updated, evaluation))
            }
            None => {
                let evaluation = self.evaluations.append(Evaluation::from_draft(draft))?;
                debug!(id = %evaluation.id, rating = evaluation.rating, "added evaluation");
                Ok((SubmitOutcome::Created, evaluation))
            }
        }
    }

    pub fn delete_evaluation(&mut self, id: &str) -> Result<Evaluation> {
        let evaluation = self.evaluations.remove_where(id)?;
        debug!(id, "deleted evaluation");
        Ok(evaluation)
    }

    /// The evaluation for a pair, if one was submitted.
    pub fn evaluation_for(&self, exhibition_id: &str, artwork_id: &str) -> Option<&Evaluation> {
        self.evaluations.find(|e| e.is_for(exhibition_id, artwork_id))
    }

    /// Evaluations whose artwork was removed from their exhibition.
    pub fn orphaned_evaluations(&self) -> Vec<&Evaluation> {
        integrity::orphaned_evaluations(&self.exhibitions, self.evaluations.get_all())
    }

    // Rankings

    pub fn rankings(&self, exhibition_filter: Option<&str>) -> Vec<RankingEntry> {
        ranking::compute_rankings(
            self.evaluations.get_all(),
            self.artworks.get_all(),
            self.artists.get_all(),
            exhibition_filter,
        )
    }

    pub fn ranking_report(&self, exhibition_filter: Option<&str>) -> RankingReport {
        ranking::rank(
            self.evaluations.get_all(),
            self.artworks.get_all(),
            self.artists.get_all(),
            exhibition_filter,
        )
    }

    // Lookups

    /// Artworks that can be evaluated in an exhibition: those still selected
    /// and still existing, in artwork order.
    pub fn available_artworks(&self, exhibition_id: &str) -> Vec<&Artwork> {
        let Some(exhibition) = self.exhibitions.get(exhibition_id) else {
            return Vec::new();
        };
        self.artworks
            .iter()
            .filter(|a| exhibition.includes(&a.id))
            .collect()
    }

    /// Artworks shown in an exhibition, skipping deleted ones.
    pub fn exhibition_artworks(&self, exhibition_id: &str) -> Vec<&Artwork> {
        self.available_artworks(exhibition_id)
    }

    /// Number of distinct artists shown in an exhibition.
    pub fn participating_artists(&self, exhibition_id: &str) -> usize {
        self.exhibition_artworks(exhibition_id)
            .iter()
            .map(|a| a.artist_id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn artworks_by_artist(&self, artist_id: &str) -> Vec<&Artwork> {
        self.artworks
            .iter()
            .filter(|a| a.artist_id == artist_id)
            .collect()
    }

    pub fn artist_name(&self, artist_id: &str) -> &str {
        self.artists
            .get(artist_id)
            .map_or("Unknown Artist", |a| a.name.as_str())
    }

    pub fn artwork_title(&self, artwork_id: &str) -> &str {
        self.artworks
            .get(artwork_id)
            .map_or("Unknown Artwork", |a| a.title.as_str())
    }

    pub fn exhibition_name(&self, exhibition_id: &str) -> &str {
        self.exhibitions
            .get(exhibition_id)
            .map_or("Unknown Exhibition", |e| e.name.as_str())
    }

    /// Every evaluation with its artwork, artist and exhibition names.
    pub fn evaluation_rows(&self) -> Vec<EvaluationRow> {
        self.evaluations
            .iter()
            .map(|evaluation| {
                let artwork = self.artworks.get(&evaluation.artwork_id);
                EvaluationRow {
                    artwork_title: artwork.map_or("Unknown", |a| a.title.as_str()).to_string(),
                    artist_name: artwork
                        .and_then(|a| self.artists.get(&a.artist_id))
                        .map_or("Unknown", |a| a.name.as_str())
                        .to_string(),
                    exhibition_name: self.exhibition_name(&evaluation.exhibition_id).to_string(),
                    evaluation: evaluation.clone(),
                }
            })
            .collect()
    }

    /// Dashboard figures.
    pub fn summary(&self) -> GallerySummary {
        let active_exhibitions: Vec<Exhibition> = self
            .exhibitions
            .iter()
            .filter(|e| e.status == ExhibitionStatus::Active)
            .cloned()
            .collect();

        GallerySummary {
            artist_count: self.artists.len(),
            artwork_count: self.artworks.len(),
            active_exhibition_count: active_exhibitions.len(),
            evaluation_count: self.evaluations.len(),
            recent_artworks: self
                .artworks
                .iter()
                .rev()
                .take(RECENT_ARTWORKS)
                .cloned()
                .collect(),
            active_exhibitions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GaleriaError;
    use crate::model::Dimensions;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn artwork_draft(title: &str, artist_id: &str) -> ArtworkDraft {
        ArtworkDraft::new(title, artist_id).with_dimensions(Dimensions::new(60.0, 40.0))
    }

    #[test]
    fn test_artwork_requires_existing_artist() {
        let mut gallery = Gallery::new();
        let err = gallery.add_artwork(artwork_draft("Ghost", "nobody")).unwrap_err();
        assert!(matches!(err, GaleriaError::NotFound { kind: "Artist", .. }));
        assert!(gallery.artworks().is_empty());
    }

    #[test]
    fn test_summary_recent_artworks_newest_first() {
        let mut gallery = Gallery::new();
        let artist = gallery.add_artist(ArtistDraft::new("Djanira")).unwrap().id.clone();
        for title in ["A", "B", "C", "D"] {
            gallery.add_artwork(artwork_draft(title, &artist)).unwrap();
        }

        let summary = gallery.summary();
        let titles: Vec<_> = summary.recent_artworks.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["D", "C", "B"]);
        assert_eq!(summary.artwork_count, 4);
    }

    #[test]
    fn test_refresh_statuses_counts_changes() {
        let mut gallery = Gallery::new();
        let artist = gallery.add_artist(ArtistDraft::new("Volpi")).unwrap().id.clone();
        let work = gallery.add_artwork(artwork_draft("Bandeirinhas", &artist)).unwrap().id.clone();
        gallery
            .create_exhibition(
                ExhibitionDraft::new("Volpi", "MASP", date(2026, 6, 1), date(2026, 6, 30))
                    .with_artwork(&work),
                date(2026, 5, 1),
            )
            .unwrap();

        assert_eq!(gallery.summary().active_exhibition_count, 0);
        assert_eq!(gallery.refresh_statuses(date(2026, 6, 10)), 1);
        assert_eq!(gallery.refresh_statuses(date(2026, 6, 11)), 0);
        assert_eq!(gallery.summary().active_exhibition_count, 1);
    }

    #[test]
    fn test_name_fallbacks() {
        let gallery = Gallery::new();
        assert_eq!(gallery.artist_name("x"), "Unknown Artist");
        assert_eq!(gallery.artwork_title("x"), "Unknown Artwork");
        assert_eq!(gallery.exhibition_name("x"), "Unknown Exhibition");
    }
}
