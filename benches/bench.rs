//! Criterion benchmarks for the survival analysis.
//!
//! Covers the hot paths of a run:
//! - Title extraction from raw names
//! - One-hot feature encoding
//! - Logistic regression fitting
//! - Cross-validated regularization search

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use titanic::data::{Passenger, Sex, Title, TitledPassenger, extract_title};
use titanic::ml::{
    Classifier, Dataset, FeatureMatrix, KFold, LogisticRegression, search_regularization,
};

/// Generate a synthetic roster for benchmarking.
fn generate_passengers(count: usize) -> Vec<TitledPassenger> {
    let titles = [
        Title::Mr,
        Title::Mrs,
        Title::Miss,
        Title::Master,
        Title::Officer,
        Title::Royalty,
    ];

    let mut passengers = Vec::with_capacity(count);
    for i in 0..count {
        let female = i % 5 < 2;
        let title = titles[(i * 7) % titles.len()];
        passengers.push(TitledPassenger {
            record: Passenger {
                name: format!("Family{i}, {title}. Passenger"),
                sex: if female { Sex::Female } else { Sex::Male },
                age: 1.0 + ((i * 13) % 70) as f64,
                survived: u8::from(female),
            },
            title,
        });
    }
    passengers
}

/// Generate raw names cycling through the honorific table.
fn generate_names(count: usize) -> Vec<String> {
    let honorifics = [
        "Mr", "Mrs", "Miss", "Master", "Dr", "Rev", "Col", "Mme", "Mlle", "the Countess",
    ];

    (0..count)
        .map(|i| {
            let honorific = honorifics[(i * 3) % honorifics.len()];
            format!("Family{i}, {honorific}. Passenger Number {i}")
        })
        .collect()
}

/// Benchmark title extraction from raw names.
fn bench_title_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("title_extraction");

    let names = generate_names(1000);

    // Single name extraction
    group.bench_function("extract_single_name", |b| {
        b.iter(|| {
            let result = extract_title(black_box(&names[0]));
            black_box(result)
        })
    });

    // Batch extraction
    group.throughput(Throughput::Elements(names.len() as u64));
    group.bench_function("extract_batch_names", |b| {
        b.iter(|| {
            for name in &names {
                let result = extract_title(black_box(name));
                let _ = black_box(result);
            }
        })
    });

    group.finish();
}

/// Benchmark one-hot feature encoding.
fn bench_feature_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("feature_encoding");

    let passengers = generate_passengers(1000);

    group.throughput(Throughput::Elements(passengers.len() as u64));
    group.bench_function("encode_1k_passengers", |b| {
        b.iter(|| {
            let matrix = FeatureMatrix::from_passengers(black_box(&passengers));
            black_box(matrix)
        })
    });

    group.finish();
}

/// Benchmark logistic regression fitting.
fn bench_model_fitting(c: &mut Criterion) {
    let mut group = c.benchmark_group("model_fitting");
    group.sample_size(20); // Gradient descent runs are comparatively slow

    let dataset = Dataset::from_titled(&generate_passengers(500));

    group.bench_function("logistic_fit_500", |b| {
        b.iter_with_setup(LogisticRegression::new, |mut model| {
            model.fit(&dataset.features, &dataset.labels).unwrap();
            black_box(model);
        })
    });

    group.finish();
}

/// Benchmark the cross-validated regularization search.
fn bench_regularization_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("regularization_search");
    group.sample_size(10);

    let dataset = Dataset::from_titled(&generate_passengers(200));
    let folds = KFold::new(5, 0).unwrap();
    let grid = [0.1, 1.0, 10.0];

    group.bench_function("grid_search_3_candidates_5_folds", |b| {
        b.iter(|| {
            let search = search_regularization(black_box(&dataset), &grid, &folds).unwrap();
            black_box(search)
        })
    });

    group.finish();
}

// Group all benchmarks - core benchmarks for faster execution
criterion_group!(
    benches,
    bench_title_extraction,
    bench_feature_encoding,
    bench_model_fitting
);

// Separate group for slower benchmarks
criterion_group!(slow_benches, bench_regularization_search);

criterion_main!(benches, slow_benches);
