// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders the brush dimming overlay as ASCII while a scripted drag runs,
//! including the inverted (remove-from-selection) form.

use kurbo::{Point, Rect, Size};
use terrace_brush::{BrushController, BrushOverlay, OverlayStyle};
use terrace_gesture::{GestureInput, Modifiers, PointerButton};
use terrace_transform::PlotTransform;

const VIEW: Size = Size::new(60.0, 20.0);

fn main() {
    let transform = PlotTransform::IDENTITY;
    let mut brush = BrushController::new(VIEW);
    let style = OverlayStyle::default();
    println!(
        "overlay fill alpha {}, outline width {}",
        style.fill_alpha, style.outline_width
    );

    for (label, modifiers) in [
        ("brush", Modifiers::empty()),
        ("remove-from-selection brush", Modifiers::CTRL),
    ] {
        brush.handle(
            &transform,
            &GestureInput::PointerDown {
                position: Point::new(12.0, 4.0),
                button: PointerButton::Primary,
                modifiers,
            },
        );
        brush.handle(
            &transform,
            &GestureInput::PointerMove {
                position: Point::new(40.0, 14.0),
                modifiers,
            },
        );

        println!("\n{label}:");
        if let Some(overlay) = brush.overlay() {
            draw(&overlay);
        }

        brush.handle(
            &transform,
            &GestureInput::PointerUp {
                position: Point::new(40.0, 14.0),
                button: PointerButton::Primary,
                modifiers,
            },
        );
    }
}

fn draw(overlay: &BrushOverlay) {
    let mut rows = Vec::new();
    for y in 0..VIEW.height as usize {
        let mut row = String::new();
        for x in 0..VIEW.width as usize {
            let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
            let dimmed = overlay.dim_rects.iter().any(|r| r.contains(center));
            let outlined = on_edge(overlay.outline, center);
            row.push(if outlined {
                '#'
            } else if dimmed {
                '.'
            } else {
                ' '
            });
        }
        rows.push(row);
    }
    println!("{}", rows.join("\n"));
}

fn on_edge(rect: Rect, p: Point) -> bool {
    let near = |a: f64, b: f64| (a - b).abs() <= 0.5;
    let in_x = p.x >= rect.x0 - 0.5 && p.x <= rect.x1 + 0.5;
    let in_y = p.y >= rect.y0 - 0.5 && p.y <= rect.y1 + 0.5;
    (in_x && (near(p.y, rect.y0) || near(p.y, rect.y1)))
        || (in_y && (near(p.x, rect.x0) || near(p.x, rect.x1)))
}
