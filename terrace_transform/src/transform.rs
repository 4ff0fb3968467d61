// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

/// Authoritative pan/zoom state for one plot instance.
///
/// `PlotTransform` tracks the three mutable parts of the composed transform
/// between plot/data space and renderer/pixel space:
/// - `drag_offset`: cumulative pan translation, in renderer pixels.
/// - `zoom_position`: the translation contributed by zoom anchoring, in
///   renderer pixels.
/// - `zoom_scale`: the multiplicative content scale, with independently
///   adjustable X and Y components.
///
/// The composed mapping is `renderer = plot * zoom_scale + zoom_position +
/// drag_offset`, component-wise. Only the operations on this type (and
/// [`crate::fit`]) mutate the record; presentation code reads it through the
/// conversion methods or [`PlotTransform::debug_info`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotTransform {
    drag_offset: Vec2,
    zoom_position: Vec2,
    zoom_scale: Vec2,
}

/// A change notification produced by a mutation of [`PlotTransform`].
///
/// These are plain values returned from the mutating operations; forwarding
/// them to interested observers (axis redraw, pixel-locked rescaling) is the
/// caller's job and the sole channel through which observers learn of
/// changes. Both variants carry the post-mutation state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewUpdate {
    /// The zoom scale changed. The translation may have moved with it to
    /// keep the zoom anchor fixed, so the new composed translation is
    /// included as well.
    ScaleChanged {
        /// The new zoom scale.
        scale: Vec2,
        /// The new composed translation (`zoom_position + drag_offset`).
        position: Vec2,
    },
    /// Only the composed translation changed.
    PositionChanged {
        /// The new composed translation (`zoom_position + drag_offset`).
        position: Vec2,
    },
}

impl ViewUpdate {
    /// Returns the composed translation carried by this update.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        match *self {
            Self::ScaleChanged { position, .. } | Self::PositionChanged { position } => position,
        }
    }
}

impl PlotTransform {
    /// The identity transform: no pan, no zoom translation, unit scale.
    ///
    /// This is the state a plot mounts with, and the state [`crate::fit`]
    /// resets to before computing a fresh framing.
    pub const IDENTITY: Self = Self {
        drag_offset: Vec2::ZERO,
        zoom_position: Vec2::ZERO,
        zoom_scale: Vec2::new(1.0, 1.0),
    };

    /// Returns the cumulative pan translation, in renderer pixels.
    #[must_use]
    pub fn drag_offset(&self) -> Vec2 {
        self.drag_offset
    }

    /// Returns the translation contributed by zoom anchoring, in renderer
    /// pixels.
    #[must_use]
    pub fn zoom_position(&self) -> Vec2 {
        self.zoom_position
    }

    /// Returns the current zoom scale.
    ///
    /// The components are independent; a negative Y component represents an
    /// inverted (data-up) vertical axis.
    #[must_use]
    pub fn zoom_scale(&self) -> Vec2 {
        self.zoom_scale
    }

    /// Returns the composed translation, `zoom_position + drag_offset`.
    ///
    /// This is the value axis code combines with [`Self::zoom_scale`] to
    /// derive an on-screen scale copy per frame.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.zoom_position + self.drag_offset
    }

    /// Resets the transform to [`Self::IDENTITY`].
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Converts a renderer/pixel-space point into plot/data space.
    #[must_use]
    pub fn renderer_to_plot(&self, pt: Point) -> Point {
        let t = self.translation();
        Point::new(
            (pt.x - t.x) / self.zoom_scale.x,
            (pt.y - t.y) / self.zoom_scale.y,
        )
    }

    /// Converts a plot/data-space point into renderer/pixel space.
    ///
    /// Exact inverse of [`Self::renderer_to_plot`] up to floating-point
    /// rounding.
    #[must_use]
    pub fn plot_to_renderer(&self, pt: Point) -> Point {
        let t = self.translation();
        Point::new(
            pt.x * self.zoom_scale.x + t.x,
            pt.y * self.zoom_scale.y + t.y,
        )
    }

    /// Converts a renderer-space rectangle into plot/data space.
    ///
    /// The rectangle's minimum corner is converted with
    /// [`Self::renderer_to_plot`] and its extents are divided by the scale
    /// component-wise. Under an inverted (negative) Y scale the returned
    /// rect's Y extents are inverted as well; callers that want a
    /// positive-extent rect can normalize with [`Rect::abs`].
    #[must_use]
    pub fn pixel_rect_to_plot_rect(&self, rect: Rect) -> Rect {
        let top_left = self.renderer_to_plot(Point::new(rect.x0, rect.y0));
        let width = rect.width() / self.zoom_scale.x;
        let height = rect.height() / self.zoom_scale.y;
        Rect::new(top_left.x, top_left.y, top_left.x + width, top_left.y + height)
    }

    /// Pans by a delta in renderer space.
    ///
    /// The delta composes additively into the drag offset, independent of
    /// any zoom translation. Returns `None` for a zero delta.
    pub fn pan_by(&mut self, delta: Vec2) -> Option<ViewUpdate> {
        if delta == Vec2::ZERO {
            return None;
        }
        self.drag_offset += delta;
        Some(ViewUpdate::PositionChanged {
            position: self.translation(),
        })
    }

    /// Zooms by `factor` (component-wise) around an anchor point given in
    /// renderer space.
    ///
    /// The anchor's plot-space position is recorded before the scale
    /// changes, the scale is applied, and the zoom translation is then moved
    /// by the anchor's apparent displacement so the anchor pixel stays
    /// visually fixed. Scaling first and solving for the compensating
    /// translation is load-bearing: translating first makes the anchor swim.
    ///
    /// Factor components must be finite and strictly positive; anything else
    /// returns `None` without touching the state, as does a factor of
    /// exactly one on both axes.
    pub fn zoom_about(&mut self, anchor: Point, factor: Vec2) -> Option<ViewUpdate> {
        if !(factor.x.is_finite() && factor.y.is_finite()) || factor.x <= 0.0 || factor.y <= 0.0 {
            return None;
        }
        if factor.x == 1.0 && factor.y == 1.0 {
            return None;
        }

        let before = self.renderer_to_plot(anchor);
        self.zoom_scale.x *= factor.x;
        self.zoom_scale.y *= factor.y;
        let after = self.renderer_to_plot(anchor);

        self.zoom_position += Vec2::new(
            (after.x - before.x) * self.zoom_scale.x,
            (after.y - before.y) * self.zoom_scale.y,
        );

        Some(ViewUpdate::ScaleChanged {
            scale: self.zoom_scale,
            position: self.translation(),
        })
    }

    pub(crate) fn set_parts(&mut self, drag_offset: Vec2, zoom_position: Vec2, zoom_scale: Vec2) {
        self.drag_offset = drag_offset;
        self.zoom_position = zoom_position;
        self.zoom_scale = zoom_scale;
    }

    /// Snapshot of the current transform state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PlotTransformDebugInfo {
        PlotTransformDebugInfo {
            drag_offset: self.drag_offset,
            zoom_position: self.zoom_position,
            zoom_scale: self.zoom_scale,
            translation: self.translation(),
        }
    }
}

impl Default for PlotTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Debug snapshot of a [`PlotTransform`] state.
#[derive(Clone, Copy, Debug)]
pub struct PlotTransformDebugInfo {
    /// Cumulative pan translation, in renderer pixels.
    pub drag_offset: Vec2,
    /// Translation contributed by zoom anchoring, in renderer pixels.
    pub zoom_position: Vec2,
    /// Current zoom scale.
    pub zoom_scale: Vec2,
    /// Composed translation (`zoom_position + drag_offset`).
    pub translation: Vec2,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};

    use super::{PlotTransform, ViewUpdate};

    #[test]
    fn identity_maps_points_unchanged() {
        let transform = PlotTransform::IDENTITY;
        let pt = Point::new(12.5, -3.0);
        assert_eq!(transform.renderer_to_plot(pt), pt);
        assert_eq!(transform.plot_to_renderer(pt), pt);
    }

    #[test]
    fn conversion_round_trip() {
        let mut transform = PlotTransform::IDENTITY;
        transform.pan_by(Vec2::new(40.0, -12.0));
        transform.zoom_about(Point::new(100.0, 80.0), Vec2::new(3.0, 0.5));

        let pt = Point::new(-17.25, 260.5);
        let there = transform.renderer_to_plot(pt);
        let back = transform.plot_to_renderer(there);
        assert!((back - pt).hypot() < 1e-9);

        let plot_pt = Point::new(5.0, 9.0);
        let out = transform.plot_to_renderer(plot_pt);
        let home = transform.renderer_to_plot(out);
        assert!((home - plot_pt).hypot() < 1e-9);
    }

    #[test]
    fn zoom_keeps_anchor_fixed() {
        let mut transform = PlotTransform::IDENTITY;
        transform.pan_by(Vec2::new(25.0, 10.0));

        let anchor = Point::new(250.0, 150.0);
        let before = transform.renderer_to_plot(anchor);
        transform.zoom_about(anchor, Vec2::new(2.0, 2.0));
        let after = transform.renderer_to_plot(anchor);

        assert!((after.x - before.x).abs() < 1e-9);
        assert!((after.y - before.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_keeps_anchor_fixed_under_non_uniform_scale() {
        let mut transform = PlotTransform::IDENTITY;
        transform.zoom_about(Point::new(10.0, 10.0), Vec2::new(4.0, 0.25));

        let anchor = Point::new(33.0, 77.0);
        let before = transform.renderer_to_plot(anchor);
        transform.zoom_about(anchor, Vec2::new(1.5, 3.0));
        let after = transform.renderer_to_plot(anchor);

        assert!((after.x - before.x).abs() < 1e-9);
        assert!((after.y - before.y).abs() < 1e-9);
    }

    #[test]
    fn pan_composes_additively_with_zoom_translation() {
        let mut transform = PlotTransform::IDENTITY;
        transform.zoom_about(Point::new(50.0, 50.0), Vec2::new(2.0, 2.0));
        let zoom_position = transform.zoom_position();

        transform.pan_by(Vec2::new(7.0, -3.0));
        transform.pan_by(Vec2::new(1.0, 1.0));

        assert_eq!(transform.zoom_position(), zoom_position);
        assert_eq!(transform.drag_offset(), Vec2::new(8.0, -2.0));
        assert_eq!(transform.translation(), zoom_position + Vec2::new(8.0, -2.0));
    }

    #[test]
    fn zero_pan_and_unit_zoom_emit_nothing() {
        let mut transform = PlotTransform::IDENTITY;
        assert_eq!(transform.pan_by(Vec2::ZERO), None);
        assert_eq!(
            transform.zoom_about(Point::new(1.0, 1.0), Vec2::new(1.0, 1.0)),
            None
        );
        assert_eq!(transform, PlotTransform::IDENTITY);
    }

    #[test]
    fn invalid_zoom_factor_is_rejected() {
        let mut transform = PlotTransform::IDENTITY;
        let anchor = Point::new(10.0, 10.0);
        assert_eq!(transform.zoom_about(anchor, Vec2::new(0.0, 2.0)), None);
        assert_eq!(transform.zoom_about(anchor, Vec2::new(-1.0, 1.0)), None);
        assert_eq!(
            transform.zoom_about(anchor, Vec2::new(f64::NAN, 1.0)),
            None
        );
        assert_eq!(transform, PlotTransform::IDENTITY);
    }

    #[test]
    fn updates_carry_post_mutation_state() {
        let mut transform = PlotTransform::IDENTITY;

        let update = transform.pan_by(Vec2::new(10.0, 0.0)).unwrap();
        assert_eq!(
            update,
            ViewUpdate::PositionChanged {
                position: Vec2::new(10.0, 0.0)
            }
        );

        let update = transform
            .zoom_about(Point::new(0.0, 0.0), Vec2::new(2.0, 2.0))
            .unwrap();
        match update {
            ViewUpdate::ScaleChanged { scale, position } => {
                assert_eq!(scale, transform.zoom_scale());
                assert_eq!(position, transform.translation());
            }
            ViewUpdate::PositionChanged { .. } => panic!("zoom must report a scale change"),
        }
    }

    #[test]
    fn pixel_rect_converts_origin_and_extents() {
        let mut transform = PlotTransform::IDENTITY;
        transform.pan_by(Vec2::new(100.0, 50.0));
        transform.zoom_about(Point::new(0.0, 0.0), Vec2::new(2.0, 2.0));

        let pixel = Rect::new(120.0, 70.0, 160.0, 110.0);
        let plot = transform.pixel_rect_to_plot_rect(pixel);

        let expected_origin = transform.renderer_to_plot(Point::new(120.0, 70.0));
        assert!((plot.x0 - expected_origin.x).abs() < 1e-9);
        assert!((plot.y0 - expected_origin.y).abs() < 1e-9);
        assert!((plot.width() - 20.0).abs() < 1e-9);
        assert!((plot.height() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn pixel_rect_under_inverted_y_has_inverted_extent() {
        let mut transform = PlotTransform::IDENTITY;
        transform.set_parts(Vec2::ZERO, Vec2::new(0.0, 300.0), Vec2::new(2.0, -2.0));

        let pixel = Rect::new(0.0, 0.0, 100.0, 100.0);
        let plot = transform.pixel_rect_to_plot_rect(pixel);

        assert!(plot.y1 < plot.y0);
        let normalized = plot.abs();
        assert!((normalized.height() - 50.0).abs() < 1e-9);
    }
}
