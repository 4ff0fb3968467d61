// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dimming-overlay geometry for an in-progress brush.

use kurbo::Rect;
use peniko::Color;
use smallvec::{smallvec, SmallVec};

/// Visual style for the brush overlay.
///
/// Geometry and style are separate so renderers can draw the same overlay
/// with their own primitives; the defaults match a white 60% dim with a
/// light-gray outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayStyle {
    /// Fill color of the dimming rectangles.
    pub fill: Color,
    /// Fill opacity of the dimming rectangles.
    pub fill_alpha: f32,
    /// Color of the selection outline.
    pub outline: Color,
    /// Stroke width of the selection outline, in renderer pixels.
    pub outline_width: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            fill: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            fill_alpha: 0.6,
            outline: Color::from_rgb8(0xCC, 0xCC, 0xCC),
            outline_width: 2.0,
        }
    }
}

/// The overlay's geometry: dimming rectangles plus the selection outline.
///
/// Produced whole by [`overlay_geometry`]; hosts replace the previous
/// overlay with the new value rather than patching it.
#[derive(Clone, Debug, PartialEq)]
pub struct BrushOverlay {
    /// The translucent dimming rectangles, in renderer space.
    pub dim_rects: SmallVec<[Rect; 4]>,
    /// The selection box to outline, in renderer space.
    pub outline: Rect,
}

/// Computes the dimming overlay for `selection` within `view`.
///
/// In the normal form, four rectangles (top and bottom bands across the full
/// view width, left and right bands beside the selection) cover everything
/// *outside* the selection box. With `invert` set (the remove-from-selection
/// form) a single rectangle covers the selection itself instead.
///
/// The selection is intersected with the view first, so a stale rectangle
/// from before a viewport shrink cannot produce inside-out bands.
#[must_use]
pub fn overlay_geometry(selection: Rect, view: Rect, invert: bool) -> BrushOverlay {
    let sel = selection.intersect(view);

    let dim_rects = if invert {
        smallvec![sel]
    } else {
        smallvec![
            Rect::new(view.x0, view.y0, view.x1, sel.y0),
            Rect::new(view.x0, sel.y1, view.x1, view.y1),
            Rect::new(view.x0, sel.y0, sel.x0, sel.y1),
            Rect::new(sel.x1, sel.y0, view.x1, sel.y1),
        ]
    };

    BrushOverlay {
        dim_rects,
        outline: sel,
    }
}
