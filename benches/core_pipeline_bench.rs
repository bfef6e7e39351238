use criterion::{Criterion, criterion_group, criterion_main};
use groupchart_rs::api::{ChartConfig, TreemapChartModel};
use groupchart_rs::core::{
    CapBehavior, MeanOthersGrouper, Record, Tree, TreemapLayout, Viewport, aggregate_capped,
    by_value,
};
use groupchart_rs::render::NullSurface;
use std::hint::black_box;

fn generated_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let value = 1.0 + (i as f64 * 37.0) % 500.0;
            Record::new(format!("key-{i}"), value)
        })
        .collect()
}

fn bench_cap_aggregation_10k(c: &mut Criterion) {
    let records = generated_records(10_000);
    let behavior = CapBehavior::uncapped().with_cap(50);

    c.bench_function("cap_aggregation_10k", |b| {
        b.iter(|| {
            let _ = aggregate_capped(
                black_box(&records),
                by_value(),
                black_box(&behavior),
                &MeanOthersGrouper,
            );
        })
    });
}

fn bench_stratify_and_layout_2k(c: &mut Criterion) {
    let records = generated_records(2_000);

    c.bench_function("stratify_and_layout_2k", |b| {
        b.iter(|| {
            let mut tree = Tree::stratify(black_box(&records), |record| {
                let idx: usize = record.key["key-".len()..].parse().unwrap_or(0);
                Some(format!("group-{}", idx % 20))
            })
            .expect("stratify should succeed");
            TreemapLayout::new(1920.0, 1080.0, 2.0).layout(&mut tree);
            let _ = black_box(tree.layout_leaves());
        })
    });
}

fn bench_treemap_redraw_1k(c: &mut Criterion) {
    let config = ChartConfig::new(Viewport::new(1920, 1080))
        .with_cap(CapBehavior::uncapped().with_cap(200));
    let mut model = TreemapChartModel::new(config).expect("model init");
    let mut surface = NullSurface::default();
    let records = generated_records(1_000);

    let mut now_ms = 0.0;
    c.bench_function("treemap_redraw_1k", |b| {
        b.iter(|| {
            now_ms += 16.0;
            let _ = model
                .redraw(black_box(&records), |_| None, now_ms, &mut surface)
                .expect("redraw should succeed");
            model.advance(now_ms, &mut surface);
        })
    });
}

criterion_group!(
    benches,
    bench_cap_aggregation_10k,
    bench_stratify_and_layout_2k,
    bench_treemap_redraw_1k
);
criterion_main!(benches);
