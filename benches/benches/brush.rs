// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kurbo::{Point, Rect, Size};
use terrace_brush::{overlay_geometry, BrushController, Selection};
use terrace_gesture::{GestureInput, Modifiers, PointerButton};
use terrace_transform::PlotTransform;

fn bench_overlay_geometry(c: &mut Criterion) {
    c.bench_function("brush/overlay_geometry", |b| {
        let view = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let selection = Rect::new(211.0, 118.0, 977.0, 705.0);
        b.iter(|| {
            black_box(overlay_geometry(selection, view, false));
            black_box(overlay_geometry(selection, view, true));
        });
    });
}

fn bench_brush_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("brush/gesture");

    for moves in [64_usize, 1_024] {
        group.throughput(Throughput::Elements(moves as u64));
        group.bench_with_input(BenchmarkId::new("drag", moves), &moves, |b, &moves| {
            let transform = PlotTransform::IDENTITY;
            b.iter(|| {
                let mut brush = BrushController::new(Size::new(1920.0, 1080.0));
                brush.handle(
                    &transform,
                    &GestureInput::PointerDown {
                        position: Point::new(10.0, 10.0),
                        button: PointerButton::Primary,
                        modifiers: Modifiers::empty(),
                    },
                );
                for i in 0..moves {
                    let event = brush.handle(
                        &transform,
                        &GestureInput::PointerMove {
                            position: Point::new(10.0 + i as f64, 8.0 + i as f64 * 0.7),
                            modifiers: Modifiers::empty(),
                        },
                    );
                    black_box(event);
                    black_box(brush.overlay());
                }
                black_box(brush.handle(
                    &transform,
                    &GestureInput::PointerUp {
                        position: Point::new(10.0 + moves as f64, 8.0 + moves as f64 * 0.7),
                        button: PointerButton::Primary,
                        modifiers: Modifiers::empty(),
                    },
                ));
            });
        });
    }

    group.finish();
}

fn bench_selection_replace(c: &mut Criterion) {
    let mut group = c.benchmark_group("brush/selection_replace");

    for len in [128_usize, 2_048] {
        let keys: Vec<u32> = (0..(len as u32)).collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("replace_with", len), &keys, |b, keys| {
            b.iter(|| {
                let mut selection = Selection::<u32>::new();
                selection.replace_with(keys.iter().copied());
                black_box(selection);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_overlay_geometry,
    bench_brush_gesture,
    bench_selection_replace
);
criterion_main!(benches);
