// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kurbo::{Point, Rect, Size, Vec2};
use terrace_transform::{fit, FitOptions, PlotTransform};

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform/conversions");

    let mut transform = PlotTransform::IDENTITY;
    transform.pan_by(Vec2::new(40.0, -12.0));
    transform.zoom_about(Point::new(120.0, 90.0), Vec2::new(2.5, 2.5));

    for len in [1_024_usize, 16_384] {
        let points: Vec<Point> = (0..len)
            .map(|i| Point::new(i as f64 * 0.37, i as f64 * 0.11))
            .collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(
            BenchmarkId::new("renderer_to_plot", len),
            &points,
            |b, points| {
                b.iter(|| {
                    for &pt in points {
                        black_box(transform.renderer_to_plot(pt));
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("round_trip", len),
            &points,
            |b, points| {
                b.iter(|| {
                    for &pt in points {
                        black_box(transform.plot_to_renderer(transform.renderer_to_plot(pt)));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_zoom_about(c: &mut Criterion) {
    c.bench_function("transform/zoom_about", |b| {
        let anchor = Point::new(250.0, 150.0);
        b.iter(|| {
            let mut transform = PlotTransform::IDENTITY;
            // Alternate in/out so the scale stays bounded.
            for _ in 0..100 {
                transform.zoom_about(anchor, Vec2::new(1.1, 1.1));
                transform.zoom_about(anchor, Vec2::new(1.0 / 1.1, 1.0 / 1.1));
            }
            black_box(transform);
        });
    });
}

fn bench_fit(c: &mut Criterion) {
    c.bench_function("transform/fit", |b| {
        let bounds = Rect::new(-37.5, 12.0, 212.5, 162.0);
        let viewport = Size::new(800.0, 600.0);
        let options = FitOptions {
            invert_y: true,
            keep_aspect_ratio: true,
            ..FitOptions::default()
        };
        b.iter(|| {
            let mut transform = PlotTransform::IDENTITY;
            black_box(fit(&mut transform, bounds, viewport, &options));
        });
    });
}

criterion_group!(benches, bench_conversions, bench_zoom_about, bench_fit);
criterion_main!(benches);
