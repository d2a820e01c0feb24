//! Benchmarks for the classify-and-render pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use renderer::{render, render_to_png, tessellate_all, tessellate_parallel, Palette};

fn bench_tessellate(c: &mut Criterion) {
    let features = test_utils::town_grid(32, 32);

    c.bench_function("tessellate_sequential_1k", |b| {
        b.iter(|| tessellate_all(black_box(&features)))
    });

    c.bench_function("tessellate_parallel_1k", |b| {
        b.iter(|| tessellate_parallel(black_box(&features)))
    });
}

fn bench_render_tile(c: &mut Criterion) {
    let features = test_utils::town_grid(32, 32);
    let palette = Palette::default();

    c.bench_function("render_256px_tile", |b| {
        b.iter(|| {
            let (queue, bbox) = tessellate_all(&features);
            render(queue, &bbox, 256, 256, &palette).unwrap()
        })
    });

    c.bench_function("render_256px_tile_to_png", |b| {
        b.iter(|| {
            let (queue, bbox) = tessellate_all(&features);
            render_to_png(queue, &bbox, 256, 256, &palette).unwrap()
        })
    });
}

criterion_group!(benches, bench_tessellate, bench_render_tile);
criterion_main!(benches);
