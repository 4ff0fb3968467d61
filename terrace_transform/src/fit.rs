// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size, Vec2};

use crate::transform::{PlotTransform, ViewUpdate};

/// Pixel margins reserved around the framed content.
///
/// Axis labels and other chrome typically live inside these margins; the
/// fitted content is framed into the viewport minus them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margins {
    /// Margin on the left edge, in renderer pixels.
    pub left: f64,
    /// Margin on the top edge, in renderer pixels.
    pub top: f64,
    /// Margin on the right edge, in renderer pixels.
    pub right: f64,
    /// Margin on the bottom edge, in renderer pixels.
    pub bottom: f64,
}

impl Margins {
    /// Uniform margins on all four edges.
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }
}

/// Options controlling how [`fit`] frames content into the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FitOptions {
    /// Margins reserved around the content inside the viewport.
    pub margins: Margins,
    /// Constrain both scale components to the same magnitude.
    pub keep_aspect_ratio: bool,
    /// Flip the vertical axis so larger data Y is higher on screen.
    ///
    /// The Y scale component becomes negative and the content's maximum-Y
    /// edge maps to the top margin instead of its minimum-Y edge.
    pub invert_y: bool,
}

/// Frames `content_bounds` into `viewport` (minus margins), replacing any
/// existing pan/zoom.
///
/// The transform is reset to identity first so that repeated fits never
/// compound earlier zoom factors. The scale maps the content extents onto
/// the viewport content area, and the position maps the content's anchor
/// corner (top-left, or bottom-left when [`FitOptions::invert_y`] is set)
/// onto the margin origin.
///
/// Returns the scale update followed by the position update, in that order;
/// both carry the final state. The position depends on the just-computed
/// scale, which is why the scale notification comes first.
///
/// ## Degenerate bounds
///
/// A content box with zero (or negative) extent on an axis, or a viewport
/// with no content area on an axis, skips the rescale for that axis: the
/// scale component stays at `1.0` (times the inversion sign for Y) and no
/// infinity or NaN ever reaches the transform. The position is still
/// computed with the surviving scale.
pub fn fit(
    transform: &mut PlotTransform,
    content_bounds: Rect,
    viewport: Size,
    options: &FitOptions,
) -> [ViewUpdate; 2] {
    transform.reset();

    let margins = options.margins;
    let content_w = viewport.width - margins.left - margins.right;
    let content_h = viewport.height - margins.top - margins.bottom;
    let sign = if options.invert_y { -1.0 } else { 1.0 };

    let mut scale_x = 1.0;
    if content_bounds.width() > 0.0 && content_w > 0.0 {
        scale_x = content_w / content_bounds.width();
    }
    let mut scale_y = sign;
    if content_bounds.height() > 0.0 && content_h > 0.0 {
        scale_y = sign * content_h / content_bounds.height();
    }

    if options.keep_aspect_ratio {
        let magnitude = scale_x.min(sign * scale_y);
        scale_x = magnitude;
        scale_y = sign * magnitude;
    }

    // Under inversion the maximum-Y edge of the content lands on the top
    // margin; otherwise the minimum-Y edge does.
    let anchor_y = if options.invert_y {
        content_bounds.max_y()
    } else {
        content_bounds.min_y()
    };
    let position = Vec2::new(
        margins.left - content_bounds.min_x() * scale_x,
        margins.top - anchor_y * scale_y,
    );
    let scale = Vec2::new(scale_x, scale_y);
    transform.set_parts(Vec2::ZERO, position, scale);

    [
        ViewUpdate::ScaleChanged { scale, position },
        ViewUpdate::PositionChanged { position },
    ]
}
