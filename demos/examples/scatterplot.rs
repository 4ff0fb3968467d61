// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless scatterplot session: fit, zoom, pan, and brush over a small
//! point cloud, printing what a renderer would consume at each step.

use kurbo::{Point, Rect, Size};
use terrace_axis::{suggest_tick_step, x_axis_scale, LinearScale, Scale};
use terrace_brush::Selection;
use terrace_demos::{PlotSession, SessionEvent};
use terrace_gesture::{GestureInput, Modifiers, PointerButton};
use terrace_transform::FitOptions;

fn main() {
    let points: Vec<Point> = (0..40)
        .map(|i| {
            let x = f64::from(i) * 6.25;
            let y = (x / 40.0).sin() * 60.0 + 75.0;
            Point::new(x, y)
        })
        .collect();

    let bounds = Rect::new(0.0, 0.0, 250.0, 150.0);
    let viewport = Size::new(500.0, 300.0);
    let mut session = PlotSession::new(viewport, bounds, FitOptions::default());
    let mut selection = Selection::new();

    // Every point is a pixel-locked 8x8 marker backed by a 64x64 texture.
    for point in &points {
        session.add_locked_marker(
            point.to_vec2(),
            Size::new(64.0, 64.0),
            Size::new(8.0, 8.0),
        );
    }

    println!("fitted: {:?}", session.transform().debug_info());

    let x_scale = LinearScale::new(0.0..250.0, 0.0..250.0);
    let on_screen = x_axis_scale(session.transform(), &x_scale);
    println!(
        "x axis range {:?}, tick step {:?}",
        on_screen.range(),
        suggest_tick_step(&on_screen, 64.0)
    );

    // Zoom in around the viewport center, then pan a bit.
    run(&mut session, &mut selection, &points, GestureInput::Wheel {
        position: Point::new(250.0, 150.0),
        delta_y: -500.0,
    });
    run(
        &mut session,
        &mut selection,
        &points,
        GestureInput::PointerDown {
            position: Point::new(250.0, 150.0),
            button: PointerButton::Secondary,
            modifiers: Modifiers::empty(),
        },
    );
    run(
        &mut session,
        &mut selection,
        &points,
        GestureInput::PointerMove {
            position: Point::new(280.0, 130.0),
            modifiers: Modifiers::empty(),
        },
    );
    run(
        &mut session,
        &mut selection,
        &points,
        GestureInput::PointerUp {
            position: Point::new(280.0, 130.0),
            button: PointerButton::Secondary,
            modifiers: Modifiers::empty(),
        },
    );

    // Brush the left half of the viewport.
    for input in [
        GestureInput::PointerDown {
            position: Point::new(20.0, 20.0),
            button: PointerButton::Primary,
            modifiers: Modifiers::empty(),
        },
        GestureInput::PointerMove {
            position: Point::new(250.0, 280.0),
            modifiers: Modifiers::empty(),
        },
        GestureInput::PointerUp {
            position: Point::new(250.0, 280.0),
            button: PointerButton::Primary,
            modifiers: Modifiers::empty(),
        },
    ] {
        run(&mut session, &mut selection, &points, input);
    }

    println!(
        "selected {} of {} points",
        selection.len(),
        points.len()
    );
}

fn run(
    session: &mut PlotSession,
    selection: &mut Selection<usize>,
    points: &[Point],
    input: GestureInput,
) {
    for event in session.handle(input) {
        match event {
            SessionEvent::View(update) => println!("view: {update:?}"),
            SessionEvent::Hover(hover) if hover.is_brushing => {
                println!("brushing: {:?}", hover.data_rect);
            }
            SessionEvent::Hover(_) => {}
            SessionEvent::Select(select) => {
                let hits = points
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| select.data_rect.abs().contains(**p))
                    .map(|(i, _)| i);
                selection.apply_select(&select, hits);
                println!(
                    "select: brushing={} data={:?}",
                    select.is_brushing, select.data_rect
                );
            }
            SessionEvent::ContextMenuSuppressed => println!("context menu suppressed"),
            SessionEvent::MarkersRescaled(nodes) => {
                println!("{} markers rescaled", nodes.len());
            }
        }
    }
}
