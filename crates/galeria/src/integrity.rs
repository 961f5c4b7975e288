//! Cross-collection reference rules.
//!
//! Only artist deletion is guarded. Deleting an artwork leaves its id in
//! exhibitions, and deleting an exhibition leaves its id in evaluations;
//! readers filter those dangling ids out. Removing an artwork from an
//! exhibition does not delete the evaluations keyed to that pair; they are
//! kept as orphans and can be listed with [`orphaned_evaluations`].

use std::collections::HashSet;

use crate::error::{GaleriaError, Result};
use crate::model::{Artist, Artwork, Evaluation, EvaluationDraft, Exhibition};
use crate::store::EntityStore;

/// Number of artworks attributed to `artist_id`.
pub fn dependent_artworks(artworks: &[Artwork], artist_id: &str) -> usize {
    artworks.iter().filter(|a| a.artist_id == artist_id).count()
}

/// True iff no artwork references `artist_id`.
pub fn can_delete_artist(artworks: &[Artwork], artist_id: &str) -> bool {
    dependent_artworks(artworks, artist_id) == 0
}

/// Fail with `DependencyExists` if any artwork references `artist_id`.
pub fn check_artist_deletion(artworks: &[Artwork], artist_id: &str) -> Result<()> {
    let count = dependent_artworks(artworks, artist_id);
    if count > 0 {
        return Err(GaleriaError::DependencyExists {
            artist_id: artist_id.to_string(),
            count,
        });
    }
    Ok(())
}

/// The artist an artwork is attributed to must exist.
pub fn check_artwork_artist(artists: &EntityStore<Artist>, artist_id: &str) -> Result<()> {
    artists.require(artist_id).map(|_| ())
}

/// Every artwork selected for an exhibition must exist.
pub fn check_exhibition_artworks(artworks: &EntityStore<Artwork>, artwork_ids: &[String]) -> Result<()> {
    for id in artwork_ids {
        artworks.require(id)?;
    }
    Ok(())
}

/// An evaluation must target an existing exhibition and one of its artworks
/// that still exists.
pub fn check_evaluation_target(
    exhibitions: &EntityStore<Exhibition>,
    artworks: &EntityStore<Artwork>,
    draft: &EvaluationDraft,
) -> Result<()> {
    let exhibition = exhibitions.require(&draft.exhibition_id)?;
    if !exhibition.includes(&draft.artwork_id) {
        return Err(GaleriaError::Validation(format!(
            "Artwork '{}' is not part of exhibition '{}'",
            draft.artwork_id, exhibition.name
        )));
    }
    artworks.require(&draft.artwork_id).map(|_| ())
}

/// Evaluations whose artwork is no longer selected in their exhibition.
///
/// Evaluations whose exhibition was deleted are not included; only pairs
/// broken by an exhibition edit are.
pub fn orphaned_evaluations<'a>(
    exhibitions: &EntityStore<Exhibition>,
    evaluations: &'a [Evaluation],
) -> Vec<&'a Evaluation> {
    evaluations
        .iter()
        .filter(|e| {
            exhibitions
                .get(&e.exhibition_id)
                .is_some_and(|ex| !ex.includes(&e.artwork_id))
        })
        .collect()
}

/// Artwork ids listed in an exhibition that no longer resolve to an artwork.
pub fn dangling_artwork_ids<'a>(
    exhibition: &'a Exhibition,
    artworks: &EntityStore<Artwork>,
) -> Vec<&'a str> {
    let existing: HashSet<&str> = artworks.iter().map(|a| a.id.as_str()).collect();
    exhibition
        .artwork_ids
        .iter()
        .map(String::as_str)
        .filter(|id| !existing.contains(id))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::{ArtworkDraft, Dimensions, ExhibitionDraft};

    fn artwork(artist_id: &str) -> Artwork {
        Artwork::from_draft(
            ArtworkDraft::new("Operários", artist_id).with_dimensions(Dimensions::new(150.0, 205.0)),
        )
    }

    fn exhibition(artwork_ids: &[&str]) -> Exhibition {
        let day = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        Exhibition::from_draft(
            ExhibitionDraft::new("Modernismo", "Pinacoteca", day, day)
                .with_artworks(artwork_ids.iter().copied()),
            day,
        )
    }

    #[test]
    fn test_artist_with_artworks_blocked_with_exact_count() {
        let artworks = vec![artwork("x"), artwork("x"), artwork("y")];

        assert!(!can_delete_artist(&artworks, "x"));
        match check_artist_deletion(&artworks, "x") {
            Err(GaleriaError::DependencyExists { artist_id, count }) => {
                assert_eq!(artist_id, "x");
                assert_eq!(count, 2);
            }
            other => panic!("expected DependencyExists, got {:?}", other),
        }
    }

    #[test]
    fn test_artist_without_artworks_can_be_deleted() {
        let artworks = vec![artwork("y")];
        assert!(can_delete_artist(&artworks, "x"));
        assert!(check_artist_deletion(&artworks, "x").is_ok());
        assert!(can_delete_artist(&[], "x"));
    }

    #[test]
    fn test_evaluation_must_target_selected_artwork() {
        let mut exhibitions = EntityStore::new();
        let ex = exhibitions.append(exhibition(&["w1", "w9"])).unwrap().id.clone();
        let mut artworks = EntityStore::new();
        let mut w1 = artwork("x");
        w1.id = "w1".to_string();
        artworks.append(w1).unwrap();

        let check = |exhibition_id: &str, artwork_id: &str| {
            check_evaluation_target(
                &exhibitions,
                &artworks,
                &EvaluationDraft::new(exhibition_id, artwork_id, 8.0),
            )
        };

        assert!(check(&ex, "w1").is_ok());
        assert!(matches!(check(&ex, "w2"), Err(GaleriaError::Validation(_))));
        assert!(matches!(
            check("missing", "w1"),
            Err(GaleriaError::NotFound { kind: "Exhibition", .. })
        ));
        // Selected, but the artwork itself was deleted
        assert!(matches!(
            check(&ex, "w9"),
            Err(GaleriaError::NotFound { kind: "Artwork", .. })
        ));
    }

    #[test]
    fn test_orphans_and_dangling_ids() {
        let mut exhibitions = EntityStore::new();
        let ex = exhibitions.append(exhibition(&["w1", "w2"])).unwrap().id.clone();
        let evaluations = vec![
            Evaluation::from_draft(EvaluationDraft::new(&ex, "w1", 7.0)),
            Evaluation::from_draft(EvaluationDraft::new(&ex, "w3", 5.0)),
            Evaluation::from_draft(EvaluationDraft::new("deleted", "w1", 5.0)),
        ];

        let orphans = orphaned_evaluations(&exhibitions, &evaluations);
        assert_eq!(orphans.len(), 1);
        assert_eq!(orphans[0].artwork_id, "w3");

        let mut artworks = EntityStore::new();
        let mut w1 = artwork("x");
        w1.id = "w1".to_string();
        artworks.append(w1).unwrap();
        assert_eq!(dangling_artwork_ids(exhibitions.get(&ex).unwrap(), &artworks), vec!["w2"]);
    }
}
