//! Property-based tests for gallery invariants.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p galeria --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p galeria --test property_tests
//! ```

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use galeria::{
    ArtistDraft, ArtworkDraft, Dimensions, EvaluationDraft, ExhibitionDraft, ExhibitionStatus,
    Gallery, derive_status,
};

// =============================================================================
// Test Strategies
// =============================================================================

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

/// A date within a few years of the base date.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..2000).prop_map(|offset| base_date() + Days::new(offset))
}

/// Ratings on the accepted scale, in tenths.
fn rating_strategy() -> impl Strategy<Value = f64> {
    (10u32..=100).prop_map(|tenths| tenths as f64 / 10.0)
}

/// A gallery with `artworks` artworks, all shown in one exhibition.
fn gallery_with_artworks(artworks: usize) -> (Gallery, Vec<String>, String) {
    let mut gallery = Gallery::new();
    let artist = gallery.add_artist(ArtistDraft::new("Candido Portinari")).unwrap().id.clone();

    let ids: Vec<String> = (0..artworks)
        .map(|i| {
            gallery
                .add_artwork(
                    ArtworkDraft::new(format!("Study {}", i), &artist)
                        .with_dimensions(Dimensions::new(50.0, 40.0)),
                )
                .unwrap()
                .id
                .clone()
        })
        .collect();

    let exhibition = gallery
        .create_exhibition(
            ExhibitionDraft::new("Retirantes", "MASP", base_date(), base_date())
                .with_artworks(ids.iter().cloned()),
            base_date(),
        )
        .unwrap()
        .id
        .clone();

    (gallery, ids, exhibition)
}

// =============================================================================
// Status Derivation Properties
// =============================================================================

proptest! {
    #[test]
    fn status_matches_date_position(a in date_strategy(), b in date_strategy(), today in date_strategy()) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let status = derive_status(start, end, today);

        let expected = if today < start {
            ExhibitionStatus::Planned
        } else if today > end {
            ExhibitionStatus::Completed
        } else {
            ExhibitionStatus::Active
        };
        prop_assert_eq!(status, expected);
    }

    #[test]
    fn status_never_moves_backwards(a in date_strategy(), b in date_strategy(), day in date_strategy()) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let rank = |s: ExhibitionStatus| match s {
            ExhibitionStatus::Planned => 0,
            ExhibitionStatus::Active => 1,
            ExhibitionStatus::Completed => 2,
        };

        let now = rank(derive_status(start, end, day));
        let later = rank(derive_status(start, end, day + Days::new(1)));
        prop_assert!(later >= now);
    }
}

// =============================================================================
// Evaluation Upsert Properties
// =============================================================================

proptest! {
    #[test]
    fn resubmissions_keep_one_record_per_pair(
        submissions in prop::collection::vec((0usize..3, rating_strategy()), 1..30)
    ) {
        let (mut gallery, ids, exhibition) = gallery_with_artworks(3);

        for (artwork, rating) in &submissions {
            gallery
                .submit_evaluation(EvaluationDraft::new(&exhibition, &ids[*artwork], *rating))
                .unwrap();
        }

        let distinct: std::collections::HashSet<_> = submissions.iter().map(|(a, _)| *a).collect();
        prop_assert_eq!(gallery.evaluations().len(), distinct.len());

        // The stored rating is the last one submitted for each pair
        for artwork in distinct {
            let last = submissions.iter().rev().find(|(a, _)| *a == artwork).unwrap().1;
            let stored = gallery.evaluation_for(&exhibition, &ids[artwork]).unwrap();
            prop_assert_eq!(stored.rating, last);
        }
    }
}

// =============================================================================
// Ranking Properties
// =============================================================================

proptest! {
    #[test]
    fn rankings_reconstruct_rating_sums(
        ratings in prop::collection::vec(prop::collection::vec(rating_strategy(), 0..4), 1..6)
    ) {
        // One exhibition per evaluation round so each artwork can collect
        // several ratings.
        let (mut gallery, ids, _) = gallery_with_artworks(ratings.len());
        let rounds = ratings.iter().map(Vec::len).max().unwrap_or(0);
        let exhibitions: Vec<String> = (0..rounds)
            .map(|round| {
                gallery
                    .create_exhibition(
                        ExhibitionDraft::new(format!("Round {}", round), "MASP", base_date(), base_date())
                            .with_artworks(ids.iter().cloned()),
                        base_date(),
                    )
                    .unwrap()
                    .id
                    .clone()
            })
            .collect();

        for (artwork, artwork_ratings) in ratings.iter().enumerate() {
            for (round, rating) in artwork_ratings.iter().enumerate() {
                gallery
                    .submit_evaluation(EvaluationDraft::new(&exhibitions[round], &ids[artwork], *rating))
                    .unwrap();
            }
        }

        let rankings = gallery.rankings(None);
        let rated = ratings.iter().filter(|r| !r.is_empty()).count();
        prop_assert_eq!(rankings.len(), rated);

        for entry in &rankings {
            let index = ids.iter().position(|id| *id == entry.artwork.id).unwrap();
            let expected: f64 = ratings[index].iter().sum();
            prop_assert_eq!(entry.evaluation_count, ratings[index].len());
            prop_assert!((entry.average_rating * entry.evaluation_count as f64 - expected).abs() < 1e-9);
        }

        for pair in rankings.windows(2) {
            prop_assert!(pair[0].average_rating >= pair[1].average_rating);
        }
    }

    #[test]
    fn rankings_are_deterministic(ratings in prop::collection::vec(rating_strategy(), 1..8)) {
        let (mut gallery, ids, exhibition) = gallery_with_artworks(ratings.len());
        for (id, rating) in ids.iter().zip(&ratings) {
            gallery.submit_evaluation(EvaluationDraft::new(&exhibition, id, *rating)).unwrap();
        }

        let first = gallery.rankings(Some(&exhibition));
        let second = gallery.rankings(Some(&exhibition));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn ratings_outside_scale_are_rejected(rating in prop_oneof![-100.0f64..0.999, 10.001f64..100.0]) {
        let (mut gallery, ids, exhibition) = gallery_with_artworks(1);
        let result = gallery.submit_evaluation(EvaluationDraft::new(&exhibition, &ids[0], rating));
        prop_assert!(result.is_err());
        prop_assert!(gallery.evaluations().is_empty());
    }
}
