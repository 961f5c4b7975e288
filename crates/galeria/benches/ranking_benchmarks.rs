//! Ranking and persistence performance benchmarks.

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use galeria::{
    ArtistDraft, ArtworkDraft, Dimensions, EvaluationDraft, ExhibitionDraft, Gallery, JsonFileStore,
    MemoryStore,
};
use tempfile::TempDir;

/// Build a gallery with `artworks` artworks spread over ten artists and
/// `exhibitions` exhibitions, each showing every artwork and rating all of them.
fn generate_gallery(artworks: usize, exhibitions: usize) -> Gallery {
    let day = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    let mut gallery = Gallery::new();

    let artists: Vec<String> = (0..10)
        .map(|i| {
            gallery
                .add_artist(ArtistDraft::new(format!("Artist {}", i)))
                .unwrap()
                .id
                .clone()
        })
        .collect();

    let ids: Vec<String> = (0..artworks)
        .map(|i| {
            gallery
                .add_artwork(
                    ArtworkDraft::new(format!("Work {}", i), &artists[i % artists.len()])
                        .with_dimensions(Dimensions::new(100.0, 80.0)),
                )
                .unwrap()
                .id
                .clone()
        })
        .collect();

    for e in 0..exhibitions {
        let exhibition = gallery
            .create_exhibition(
                ExhibitionDraft::new(format!("Show {}", e), "Main Hall", day, day)
                    .with_artworks(ids.iter().cloned()),
                day,
            )
            .unwrap()
            .id
            .clone();

        for (i, id) in ids.iter().enumerate() {
            let rating = 1.0 + ((i * 7 + e * 3) % 90) as f64 / 10.0;
            gallery
                .submit_evaluation(EvaluationDraft::new(&exhibition, id, rating))
                .unwrap();
        }
    }

    gallery
}

/// Benchmark rankings over the whole gallery.
fn bench_overall_rankings(c: &mut Criterion) {
    let mut group = c.benchmark_group("overall_rankings");

    for artworks in [10, 100, 500].iter() {
        let gallery = generate_gallery(*artworks, 5);
        group.throughput(Throughput::Elements(gallery.evaluations().len() as u64));
        group.bench_with_input(BenchmarkId::new("artworks", artworks), &gallery, |b, gallery| {
            b.iter(|| black_box(gallery.rankings(None)))
        });
    }

    group.finish();
}

/// Benchmark rankings filtered to one exhibition.
fn bench_filtered_rankings(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered_rankings");

    let gallery = generate_gallery(200, 10);
    let exhibition = gallery.exhibitions().get_all()[0].id.clone();

    group.bench_function("one_of_ten_exhibitions", |b| {
        b.iter(|| black_box(gallery.rankings(Some(&exhibition))))
    });

    group.finish();
}

/// Benchmark evaluation resubmission against a populated gallery.
fn bench_submit_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("submit_evaluation");

    let mut gallery = generate_gallery(200, 5);
    let target = gallery.evaluations().get_all()[0].clone();

    group.bench_function("resubmit", |b| {
        b.iter(|| {
            let draft = EvaluationDraft::new(&target.exhibition_id, &target.artwork_id, 7.0);
            black_box(gallery.submit_evaluation(draft).unwrap().0)
        })
    });

    group.finish();
}

/// Benchmark writing and reloading the four collections.
fn bench_persistence(c: &mut Criterion) {
    let mut group = c.benchmark_group("persistence");
    group.sample_size(20);

    let gallery = generate_gallery(200, 5);

    group.bench_function("memory_round_trip", |b| {
        b.iter(|| {
            let mut store = MemoryStore::new();
            gallery.write_to(&mut store).unwrap();
            black_box(Gallery::from_store(&store).unwrap())
        })
    });

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gallery.json");

    group.bench_function("file_save", |b| {
        b.iter(|| {
            let mut store = JsonFileStore::open(&path).unwrap();
            gallery.write_to(&mut store).unwrap();
            store.save().unwrap();
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_overall_rankings,
    bench_filtered_rankings,
    bench_submit_evaluation,
    bench_persistence,
);

criterion_main!(benches);
