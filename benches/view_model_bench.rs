use bar_visual_rs::api::{CategoryColumn, MeasureColumn, QueryResult, build_view_model};
use bar_visual_rs::core::{CategoricalPalette, SelectionSet};
use bar_visual_rs::interaction::compute_emphasis;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn query_10k() -> QueryResult {
    let categories: Vec<String> = (0..10_000).map(|i| format!("category-{}", i % 250)).collect();
    let values: Vec<Option<f64>> = (0..10_000)
        .map(|i| if i % 17 == 0 { None } else { Some(i as f64 * 0.5) })
        .collect();
    QueryResult::new(
        CategoryColumn::new("Sales.Region", categories),
        MeasureColumn::new("Sales.Amount", values),
    )
}

fn bench_build_view_model_10k(c: &mut Criterion) {
    let query = query_10k();
    c.bench_function("build_view_model_10k", |b| {
        b.iter(|| {
            let mut palette = CategoricalPalette::new();
            let _ = build_view_model(black_box(&query), &mut palette);
        })
    });
}

fn bench_compute_emphasis_10k(c: &mut Criterion) {
    let view_model = build_view_model(&query_10k(), &mut CategoricalPalette::new());
    let selection: SelectionSet = view_model
        .data_points
        .iter()
        .step_by(100)
        .map(|point| point.identity.clone())
        .collect();

    c.bench_function("compute_emphasis_10k", |b| {
        b.iter(|| {
            let _ = compute_emphasis(black_box(&view_model.data_points), black_box(&selection));
        })
    });
}

criterion_group!(
    benches,
    bench_build_view_model_10k,
    bench_compute_emphasis_10k
);
criterion_main!(benches);
