//! Benchmarks for layout inference, spec rendering and asset classification.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use zeplin_cli::assets::ScriptedChooser;
use zeplin_cli::render::layer_tree;
use zeplin_cli::{
    classify_assets, infer, render_layers, FileNames, Layer, LayerKind, Rect, ScreenVersion,
};

fn fixture() -> ScreenVersion {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("screen_version.json");
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// A column of `n` evenly spaced rows.
fn column_rects(n: usize) -> Vec<Rect> {
    (0..n)
        .map(|i| Rect::new(16.0, 16.0 + i as f64 * 56.0, 343.0, 48.0))
        .collect()
}

/// `breadth` children per group, `depth` levels deep.
fn wide_tree(depth: usize, breadth: usize) -> Layer {
    let mut layer = Layer::new(LayerKind::Shape, "leaf", Rect::new(0.0, 0.0, 40.0, 20.0));
    for level in 0..depth {
        let children = (0..breadth)
            .map(|i| {
                let mut child = layer.clone();
                child.rect.x = i as f64 * 48.0;
                child
            })
            .collect();
        layer = Layer::new(
            LayerKind::Group,
            format!("level {}", level),
            Rect::new(0.0, 0.0, breadth as f64 * 48.0, 40.0),
        )
        .with_children(children);
    }
    layer
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let parent = Rect::new(0.0, 0.0, 375.0, 10_000.0);

    for n in [4, 64, 512] {
        let children = column_rects(n);
        group.bench_function(format!("infer_column_{}", n), |b| {
            b.iter(|| infer(black_box(&parent), black_box(&children)))
        });
    }

    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let version = fixture();
    let top: Vec<&Layer> = version.layers.iter().collect();
    group.bench_function("spec_fixture", |b| {
        b.iter(|| render_layers(black_box(&top), 3))
    });

    let tree = wide_tree(4, 6);
    group.bench_function("spec_wide_tree", |b| {
        b.iter(|| render_layers(black_box(&[&tree]), 4))
    });
    group.bench_function("detail_wide_tree", |b| {
        b.iter(|| layer_tree(black_box(std::slice::from_ref(&tree)), ""))
    });

    group.finish();
}

fn bench_classification(c: &mut Criterion) {
    let version = fixture();

    c.bench_function("classify_fixture_assets", |b| {
        b.iter(|| {
            let mut chooser = ScriptedChooser::new([]);
            classify_assets(black_box(&version.assets), &mut FileNames::new(), &mut chooser).unwrap()
        })
    });
}

criterion_group!(benches, bench_layout, bench_rendering, bench_classification);
criterion_main!(benches);
