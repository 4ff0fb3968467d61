// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan drag recognition: per-move deltas into the transform's drag offset.

use kurbo::Point;
use terrace_transform::{PlotTransform, ViewUpdate};

/// Turns a pan drag into additive translation on a [`PlotTransform`].
///
/// The controller holds the previous pointer position as its anchor. Each
/// move pans by the delta since the last position and advances the anchor,
/// so the translation composes additively with whatever zoom translation
/// already exists.
///
/// The anchor doubles as the capture guard: [`DragController::begin`]
/// refuses to start while a drag is active, and [`DragController::end`] /
/// [`DragController::cancel`] are idempotent so every gesture-ending path
/// (including a forced one) leaves the controller re-armable.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragController {
    anchor: Option<Point>,
}

impl DragController {
    /// Starts a drag at the given renderer-space position.
    ///
    /// Returns `false` without touching state when a drag is already active;
    /// only one pan capture may exist at a time.
    pub fn begin(&mut self, position: Point) -> bool {
        if self.anchor.is_some() {
            return false;
        }
        self.anchor = Some(position);
        true
    }

    /// Pans by the delta from the previous position and advances the anchor.
    ///
    /// Returns `None` when no drag is active or the pointer did not move.
    pub fn update(
        &mut self,
        transform: &mut PlotTransform,
        position: Point,
    ) -> Option<ViewUpdate> {
        let anchor = self.anchor?;
        self.anchor = Some(position);
        transform.pan_by(position - anchor)
    }

    /// Ends the drag. Idempotent.
    pub fn end(&mut self) {
        self.anchor = None;
    }

    /// Force-terminates the drag without a release event, for hosts reacting
    /// to focus loss. Equivalent to [`Self::end`]; spelled separately so the
    /// call site states its intent.
    pub fn cancel(&mut self) {
        self.end();
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};
    use terrace_transform::PlotTransform;

    use super::DragController;

    #[test]
    fn drag_accumulates_incremental_deltas() {
        let mut transform = PlotTransform::IDENTITY;
        let mut drag = DragController::default();

        assert!(drag.begin(Point::new(10.0, 10.0)));
        drag.update(&mut transform, Point::new(15.0, 13.0));
        drag.update(&mut transform, Point::new(18.0, 17.0));
        drag.end();

        assert_eq!(transform.drag_offset(), Vec2::new(8.0, 7.0));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn second_begin_is_refused_while_active() {
        let mut drag = DragController::default();
        assert!(drag.begin(Point::new(0.0, 0.0)));
        assert!(!drag.begin(Point::new(100.0, 100.0)));

        // The original anchor is still in effect.
        let mut transform = PlotTransform::IDENTITY;
        drag.update(&mut transform, Point::new(5.0, 0.0));
        assert_eq!(transform.drag_offset(), Vec2::new(5.0, 0.0));
    }

    #[test]
    fn update_without_begin_does_nothing() {
        let mut transform = PlotTransform::IDENTITY;
        let mut drag = DragController::default();
        assert_eq!(drag.update(&mut transform, Point::new(50.0, 50.0)), None);
        assert_eq!(transform, PlotTransform::IDENTITY);
    }

    #[test]
    fn drag_leaves_zoom_translation_alone() {
        let mut transform = PlotTransform::IDENTITY;
        transform.zoom_about(Point::new(40.0, 40.0), Vec2::new(2.0, 2.0));
        let zoom_position = transform.zoom_position();

        let mut drag = DragController::default();
        drag.begin(Point::new(0.0, 0.0));
        drag.update(&mut transform, Point::new(-12.0, 9.0));
        drag.end();

        assert_eq!(transform.zoom_position(), zoom_position);
        assert_eq!(transform.drag_offset(), Vec2::new(-12.0, 9.0));
    }

    #[test]
    fn end_and_cancel_are_idempotent() {
        let mut drag = DragController::default();
        drag.end();
        drag.cancel();
        assert!(!drag.is_dragging());

        drag.begin(Point::new(1.0, 1.0));
        drag.cancel();
        drag.cancel();
        assert!(!drag.is_dragging());
        // A cancelled controller can start a fresh gesture.
        assert!(drag.begin(Point::new(2.0, 2.0)));
    }
}
