// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The brush/click selection state machine.

use kurbo::{Point, Rect, Size};
use terrace_gesture::{GestureInput, Modifiers, PointerButton};
use terrace_transform::PlotTransform;

/// Tuning for brush recognition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushConfig {
    /// Press-to-release displacement, in renderer pixels, at or above which
    /// a release is a brush select rather than a click.
    pub min_drag_distance: f64,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            min_drag_distance: 3.0,
        }
    }
}

/// Where the state machine currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrushPhase {
    /// No gesture in progress.
    Idle,
    /// Pressed, but the pointer has stayed within the drag threshold.
    Anchored,
    /// The drag threshold has been exceeded.
    Brushing,
}

/// Emitted on pointer movement: the pointer's position, or the in-progress
/// brush rectangle, in both coordinate spaces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverEvent {
    /// The hovered point or brush rectangle in renderer space. Zero-size
    /// when not brushing.
    pub pixel_rect: Rect,
    /// The same rectangle in plot/data space.
    pub data_rect: Rect,
    /// `true` while a brush gesture is in progress.
    pub is_brushing: bool,
}

/// Emitted on release: the final selection rectangle plus the modifier flags
/// latched when the gesture began.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectEvent {
    /// The selection rectangle in renderer space; zero-size for a click.
    pub pixel_rect: Rect,
    /// The same rectangle in plot/data space.
    pub data_rect: Rect,
    /// `true` for a brush select, `false` for a click select.
    pub is_brushing: bool,
    /// Extend the existing selection (shift held at press).
    pub add_to_selection: bool,
    /// Remove from the existing selection (ctrl held at press).
    pub remove_from_selection: bool,
    /// The originating release input.
    pub input: GestureInput,
}

/// An event produced by [`BrushController::handle`].
#[derive(Clone, Debug, PartialEq)]
pub enum BrushEvent {
    /// Pointer movement over the plot (possibly mid-brush).
    Hover(HoverEvent),
    /// A completed click or brush gesture.
    Select(SelectEvent),
}

/// The brush/click state machine for one plot.
///
/// The controller consumes the [`GestureInput`] values a router forwards
/// (everything on the primary button plus bare moves). It reads the plot
/// transform to express rectangles in data space and never writes it. The
/// anchor doubles as the capture guard: a second primary press while a
/// gesture is active is ignored, and ending is idempotent.
#[derive(Clone, Copy, Debug)]
pub struct BrushController {
    config: BrushConfig,
    viewport: Size,
    anchor: Option<Point>,
    rect: Option<Rect>,
    add_to_selection: bool,
    remove_from_selection: bool,
}

impl BrushController {
    /// Creates a controller for a viewport of the given size.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self::with_config(viewport, BrushConfig::default())
    }

    /// Creates a controller with explicit tuning.
    #[must_use]
    pub fn with_config(viewport: Size, config: BrushConfig) -> Self {
        Self {
            config,
            viewport,
            anchor: None,
            rect: None,
            add_to_selection: false,
            remove_from_selection: false,
        }
    }

    /// Updates the viewport size the brush rectangle is clamped to.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Returns the current viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Returns the current phase of the state machine.
    #[must_use]
    pub fn phase(&self) -> BrushPhase {
        match (self.anchor, self.rect) {
            (None, _) => BrushPhase::Idle,
            (Some(_), None) => BrushPhase::Anchored,
            (Some(_), Some(_)) => BrushPhase::Brushing,
        }
    }

    /// Returns the in-progress brush rectangle in renderer space, if any.
    #[must_use]
    pub fn rectangle(&self) -> Option<Rect> {
        self.rect
    }

    /// Returns the dimming overlay for the in-progress brush, rebuilt from
    /// the current rectangle. `None` while no brush is in progress.
    ///
    /// The inverse (cover-inside) form is used when the remove-modifier was
    /// latched at press.
    #[must_use]
    pub fn overlay(&self) -> Option<crate::overlay::BrushOverlay> {
        let rect = self.rect?;
        let view = Rect::from_origin_size(Point::ORIGIN, self.viewport);
        Some(crate::overlay::overlay_geometry(
            rect,
            view,
            self.remove_from_selection,
        ))
    }

    /// Handles one forwarded input against the plot's transform.
    ///
    /// Non-pointer input (wheel, touch) is ignored. Pointer input on buttons
    /// other than primary is ignored too, except that moves always hover.
    pub fn handle(
        &mut self,
        transform: &PlotTransform,
        input: &GestureInput,
    ) -> Option<BrushEvent> {
        match *input {
            GestureInput::PointerDown {
                position,
                button: PointerButton::Primary,
                modifiers,
            } => {
                self.on_down(position, modifiers);
                None
            }
            GestureInput::PointerMove {
                position,
                modifiers,
            } => self.on_move(transform, position, modifiers),
            GestureInput::PointerUp {
                position,
                button: PointerButton::Primary,
                ..
            } => self
                .on_up(transform, position, input)
                .map(BrushEvent::Select),
            _ => None,
        }
    }

    /// Force-terminates the gesture without emitting a select event.
    ///
    /// For hosts reacting to focus loss. Idempotent; the controller is
    /// immediately re-armable.
    pub fn cancel(&mut self) {
        self.anchor = None;
        self.rect = None;
        self.add_to_selection = false;
        self.remove_from_selection = false;
    }

    fn on_down(&mut self, position: Point, modifiers: Modifiers) {
        if self.anchor.is_some() {
            return;
        }
        self.anchor = Some(position);
        self.rect = None;
        // Latched now; release-time key state is never consulted.
        self.add_to_selection = modifiers.contains(Modifiers::SHIFT);
        self.remove_from_selection = modifiers.contains(Modifiers::CTRL);
    }

    fn on_move(
        &mut self,
        transform: &PlotTransform,
        position: Point,
        modifiers: Modifiers,
    ) -> Option<BrushEvent> {
        let Some(anchor) = self.anchor else {
            // Passive hover; suppressed while the remove-modifier is held so
            // un-selecting does not highlight data along the way.
            if modifiers.contains(Modifiers::CTRL) {
                return None;
            }
            let pixel_rect = Rect::from_origin_size(position, Size::ZERO);
            return Some(BrushEvent::Hover(HoverEvent {
                pixel_rect,
                data_rect: Rect::from_origin_size(transform.renderer_to_plot(position), Size::ZERO),
                is_brushing: false,
            }));
        };

        let clamped = self.clamp_to_viewport(position);
        let pixel_rect = normalized_rect(anchor, clamped);
        if anchor.distance(position) >= self.config.min_drag_distance || self.rect.is_some() {
            self.rect = Some(pixel_rect);
        }

        Some(BrushEvent::Hover(HoverEvent {
            pixel_rect,
            data_rect: transform.pixel_rect_to_plot_rect(pixel_rect),
            is_brushing: true,
        }))
    }

    fn on_up(
        &mut self,
        transform: &PlotTransform,
        position: Point,
        input: &GestureInput,
    ) -> Option<SelectEvent> {
        let anchor = self.anchor?;
        let add_to_selection = self.add_to_selection;
        let remove_from_selection = self.remove_from_selection;
        self.cancel();

        if anchor.distance(position) >= self.config.min_drag_distance {
            let clamped = self.clamp_to_viewport(position);
            let pixel_rect = normalized_rect(anchor, clamped);
            Some(SelectEvent {
                pixel_rect,
                data_rect: transform.pixel_rect_to_plot_rect(pixel_rect),
                is_brushing: true,
                add_to_selection,
                remove_from_selection,
                input: input.clone(),
            })
        } else {
            let pixel_rect = Rect::from_origin_size(position, Size::ZERO);
            Some(SelectEvent {
                pixel_rect,
                data_rect: Rect::from_origin_size(
                    transform.renderer_to_plot(position),
                    Size::ZERO,
                ),
                is_brushing: false,
                add_to_selection,
                remove_from_selection,
                input: input.clone(),
            })
        }
    }

    fn clamp_to_viewport(&self, position: Point) -> Point {
        Point::new(
            position.x.clamp(0.0, self.viewport.width),
            position.y.clamp(0.0, self.viewport.height),
        )
    }
}

fn normalized_rect(a: Point, b: Point) -> Rect {
    Rect::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};
    use terrace_gesture::{GestureInput, Modifiers, PointerButton};
    use terrace_transform::PlotTransform;

    use super::{BrushController, BrushEvent, BrushPhase};

    fn down(x: f64, y: f64, modifiers: Modifiers) -> GestureInput {
        GestureInput::PointerDown {
            position: Point::new(x, y),
            button: PointerButton::Primary,
            modifiers,
        }
    }

    fn mv(x: f64, y: f64) -> GestureInput {
        GestureInput::PointerMove {
            position: Point::new(x, y),
            modifiers: Modifiers::empty(),
        }
    }

    fn up(x: f64, y: f64) -> GestureInput {
        GestureInput::PointerUp {
            position: Point::new(x, y),
            button: PointerButton::Primary,
            modifiers: Modifiers::empty(),
        }
    }

    fn controller() -> (PlotTransform, BrushController) {
        (
            PlotTransform::IDENTITY,
            BrushController::new(Size::new(500.0, 300.0)),
        )
    }

    #[test]
    fn click_emits_a_degenerate_select() {
        let (transform, mut brush) = controller();

        brush.handle(&transform, &down(50.0, 40.0, Modifiers::empty()));
        assert_eq!(brush.phase(), BrushPhase::Anchored);

        let event = brush.handle(&transform, &up(51.0, 41.0));
        let Some(BrushEvent::Select(select)) = event else {
            panic!("release must emit a select event");
        };
        assert!(!select.is_brushing);
        assert_eq!(select.pixel_rect.width(), 0.0);
        assert_eq!(select.pixel_rect.height(), 0.0);
        assert_eq!(select.pixel_rect.x0, 51.0);
        assert_eq!(brush.phase(), BrushPhase::Idle);
    }

    #[test]
    fn drag_past_threshold_emits_a_brush_select() {
        let (transform, mut brush) = controller();

        brush.handle(&transform, &down(100.0, 100.0, Modifiers::empty()));
        brush.handle(&transform, &mv(40.0, 160.0));
        assert_eq!(brush.phase(), BrushPhase::Brushing);

        let event = brush.handle(&transform, &up(40.0, 160.0));
        let Some(BrushEvent::Select(select)) = event else {
            panic!("release must emit a select event");
        };
        assert!(select.is_brushing);
        // Normalized: non-negative extents regardless of drag direction.
        assert_eq!(select.pixel_rect, Rect::new(40.0, 100.0, 100.0, 160.0));
    }

    #[test]
    fn rectangle_is_clamped_to_the_viewport() {
        let (transform, mut brush) = controller();

        brush.handle(&transform, &down(490.0, 290.0, Modifiers::empty()));
        let event = brush.handle(&transform, &mv(650.0, -40.0));
        let Some(BrushEvent::Hover(hover)) = event else {
            panic!("move while anchored must hover");
        };
        assert_eq!(hover.pixel_rect, Rect::new(490.0, 0.0, 500.0, 290.0));

        let event = brush.handle(&transform, &up(650.0, -40.0));
        let Some(BrushEvent::Select(select)) = event else {
            panic!("release must emit a select event");
        };
        assert_eq!(select.pixel_rect, Rect::new(490.0, 0.0, 500.0, 290.0));
    }

    #[test]
    fn hover_carries_both_coordinate_spaces() {
        let mut transform = PlotTransform::IDENTITY;
        transform.pan_by(kurbo::Vec2::new(100.0, 50.0));
        transform.zoom_about(Point::new(0.0, 0.0), kurbo::Vec2::new(2.0, 2.0));
        let mut brush = BrushController::new(Size::new(500.0, 300.0));

        brush.handle(&transform, &down(120.0, 70.0, Modifiers::empty()));
        let event = brush.handle(&transform, &mv(160.0, 110.0));
        let Some(BrushEvent::Hover(hover)) = event else {
            panic!("move while anchored must hover");
        };
        assert!(hover.is_brushing);
        assert_eq!(
            hover.data_rect,
            transform.pixel_rect_to_plot_rect(hover.pixel_rect)
        );
    }

    #[test]
    fn modifiers_are_latched_at_press_not_release() {
        let (transform, mut brush) = controller();

        brush.handle(&transform, &down(10.0, 10.0, Modifiers::SHIFT));
        brush.handle(&transform, &mv(60.0, 60.0));
        // Release with different (even conflicting) key state.
        let event = brush.handle(
            &transform,
            &GestureInput::PointerUp {
                position: Point::new(60.0, 60.0),
                button: PointerButton::Primary,
                modifiers: Modifiers::CTRL,
            },
        );
        let Some(BrushEvent::Select(select)) = event else {
            panic!("release must emit a select event");
        };
        assert!(select.add_to_selection);
        assert!(!select.remove_from_selection);
    }

    #[test]
    fn passive_hover_is_degenerate_and_suppressed_by_ctrl() {
        let (transform, mut brush) = controller();

        let event = brush.handle(&transform, &mv(42.0, 24.0));
        let Some(BrushEvent::Hover(hover)) = event else {
            panic!("bare move must hover");
        };
        assert!(!hover.is_brushing);
        assert_eq!(hover.pixel_rect.width(), 0.0);

        let event = brush.handle(
            &transform,
            &GestureInput::PointerMove {
                position: Point::new(42.0, 24.0),
                modifiers: Modifiers::CTRL,
            },
        );
        assert!(event.is_none());
    }

    #[test]
    fn second_press_is_ignored_while_active() {
        let (transform, mut brush) = controller();

        brush.handle(&transform, &down(10.0, 10.0, Modifiers::empty()));
        brush.handle(&transform, &down(200.0, 200.0, Modifiers::SHIFT));

        let event = brush.handle(&transform, &up(80.0, 80.0));
        let Some(BrushEvent::Select(select)) = event else {
            panic!("release must emit a select event");
        };
        // The first anchor and its latched (empty) modifiers are in effect.
        assert_eq!(select.pixel_rect, Rect::new(10.0, 10.0, 80.0, 80.0));
        assert!(!select.add_to_selection);
    }

    #[test]
    fn cancel_clears_without_emitting() {
        let (transform, mut brush) = controller();

        brush.handle(&transform, &down(10.0, 10.0, Modifiers::CTRL));
        brush.handle(&transform, &mv(100.0, 100.0));
        brush.cancel();
        brush.cancel();
        assert_eq!(brush.phase(), BrushPhase::Idle);
        assert!(brush.overlay().is_none());

        // A release after cancellation is not a select.
        assert!(brush.handle(&transform, &up(100.0, 100.0)).is_none());
        // And a fresh gesture starts cleanly.
        brush.handle(&transform, &down(1.0, 1.0, Modifiers::empty()));
        assert_eq!(brush.phase(), BrushPhase::Anchored);
    }

    #[test]
    fn overlay_tracks_the_latched_remove_modifier() {
        let (transform, mut brush) = controller();

        brush.handle(&transform, &down(10.0, 10.0, Modifiers::CTRL));
        brush.handle(&transform, &mv(110.0, 110.0));

        let overlay = brush.overlay().unwrap();
        // Inverted: a single dimming rect covering the selection itself.
        assert_eq!(overlay.dim_rects.len(), 1);
        assert_eq!(overlay.dim_rects[0], Rect::new(10.0, 10.0, 110.0, 110.0));
    }
}
