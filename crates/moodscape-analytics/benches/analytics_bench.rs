//! Analytics benchmark suite.
//!
//! Every operation is linear in the number of entries; the scaling group
//! checks that aggregation stays that way.

use moodscape_analytics::{
    cache::AggregateCacheKey, classifier::EmotionClassifier, insights::InsightGenerator,
    processor::MoodAnalytics, trends::TrendAggregator,
};
use moodscape_core::{DerivedParameters, EntrySource, MoodEntry};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const NOW: i64 = 1_710_504_000_000;
const HOUR_MS: i64 = 3_600_000;

// =============================================================================
// Helper Functions: Deterministic Data Generation
// =============================================================================

fn generate_derived(seed: u64) -> DerivedParameters {
    let x = seed as f64 * 0.37;
    DerivedParameters::new(
        (x.sin() + 1.0) * 50.0,
        ((x * 1.3).cos() + 1.0) * 50.0,
        ((x * 0.7 + 1.0).sin() + 1.0) * 50.0,
    )
}

fn generate_history(count: usize) -> Vec<MoodEntry> {
    let classifier = EmotionClassifier::new();
    (0..count)
        .map(|i| {
            classifier.classify_entry(
                &generate_derived(i as u64),
                EntrySource::Sliders,
                NOW - i as i64 * 2 * HOUR_MS,
            )
        })
        .collect()
}

// =============================================================================
// Component Benchmarks
// =============================================================================

fn bench_classify(c: &mut Criterion) {
    let classifier = EmotionClassifier::new();
    let derived = generate_derived(42);

    c.bench_function("classify", |b| {
        b.iter(|| classifier.classify(black_box(&derived)))
    });
}

fn bench_insights(c: &mut Criterion) {
    let entries = generate_history(500);
    let aggregate = TrendAggregator::default().aggregate(&entries, 30, NOW);
    let generator = InsightGenerator::default();

    c.bench_function("generate_insights_500", |b| {
        b.iter(|| generator.generate_insights(black_box(&entries), black_box(&aggregate)))
    });
}

fn bench_cache_key(c: &mut Criterion) {
    let entries = generate_history(500);

    c.bench_function("cache_key_500", |b| {
        b.iter(|| AggregateCacheKey::compute(black_box(&entries), 30, NOW))
    });
}

// =============================================================================
// Scaling Benchmarks
// =============================================================================

fn bench_aggregate_scaling(c: &mut Criterion) {
    let aggregator = TrendAggregator::default();
    let mut group = c.benchmark_group("aggregate_scaling");

    for count in [100, 1_000, 10_000] {
        let entries = generate_history(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &entries, |b, entries| {
            b.iter(|| aggregator.aggregate(black_box(entries), 365, NOW))
        });
    }
    group.finish();
}

// =============================================================================
// Pipeline Benchmarks
// =============================================================================

fn bench_analyze_uncached(c: &mut Criterion) {
    let entries = generate_history(1_000);

    c.bench_function("analyze_1000_uncached", |b| {
        b.iter(|| {
            let mut analytics = MoodAnalytics::with_defaults();
            analytics.analyze(black_box(&entries), 30, NOW)
        })
    });
}

fn bench_analyze_cached(c: &mut Criterion) {
    let entries = generate_history(1_000);
    let mut analytics = MoodAnalytics::with_defaults();
    analytics.analyze(&entries, 30, NOW);

    c.bench_function("analyze_1000_cached", |b| {
        b.iter(|| analytics.analyze(black_box(&entries), 30, NOW))
    });
}

criterion_group!(
    name = component_benches;
    config = Criterion::default();
    targets =
        bench_classify,
        bench_insights,
        bench_cache_key,
);

criterion_group!(
    name = scaling_benches;
    config = Criterion::default().sample_size(50);
    targets = bench_aggregate_scaling,
);

criterion_group!(
    name = pipeline_benches;
    config = Criterion::default();
    targets =
        bench_analyze_uncached,
        bench_analyze_cached,
);

criterion_main!(component_benches, scaling_benches, pipeline_benches);
