// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared wiring for the Terrace demos: one plot instance assembled from the
//! interaction crates.
//!
//! [`PlotSession`] is the reference composition: raw input enters the
//! router, pan/zoom updates flow into the scene's plot container and the
//! pixel-lock registry, forwarded input drives the brush, and every outcome
//! is surfaced as a [`SessionEvent`] for the host (here, the demo binaries)
//! to print or draw.

use kurbo::{Rect, Size, Vec2};
use terrace_brush::{BrushController, BrushEvent, HoverEvent, SelectEvent};
use terrace_gesture::{GestureInput, InputRouter, RouterEvent};
use terrace_pixel_lock::{PixelLockBinding, PixelLockRegistry};
use terrace_scene::{ContainerNode, NodeFlags, NodeId, SceneTree};
use terrace_transform::{fit, FitOptions, PlotTransform, ViewUpdate};

/// Everything a [`PlotSession`] reports back to its host.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    /// The pan/zoom transform changed.
    View(ViewUpdate),
    /// The pointer moved (possibly mid-brush).
    Hover(HoverEvent),
    /// A click or brush select completed.
    Select(SelectEvent),
    /// The host should suppress the context-menu default for this gesture.
    ContextMenuSuppressed,
    /// Pixel-locked nodes whose local scale was recomputed.
    MarkersRescaled(Vec<NodeId>),
}

/// One plot instance: transform, router, brush, scene, and pixel locks.
#[derive(Debug)]
pub struct PlotSession {
    transform: PlotTransform,
    router: InputRouter,
    brush: BrushController,
    tree: SceneTree,
    pixel_locks: PixelLockRegistry,
    plot_node: NodeId,
    viewport: Size,
    content_bounds: Rect,
    options: FitOptions,
}

impl PlotSession {
    /// Creates a session and frames `content_bounds` into the viewport.
    pub fn new(viewport: Size, content_bounds: Rect, options: FitOptions) -> Self {
        let mut tree = SceneTree::new();
        let stage = tree.insert(None, ContainerNode::default());
        let plot_node = tree.insert(
            Some(stage),
            ContainerNode {
                local_bounds: Some(content_bounds),
                ..ContainerNode::default()
            },
        );

        let mut session = Self {
            transform: PlotTransform::IDENTITY,
            router: InputRouter::default(),
            brush: BrushController::new(viewport),
            tree,
            pixel_locks: PixelLockRegistry::new(),
            plot_node,
            viewport,
            content_bounds,
            options,
        };
        session.refit_with_events();
        session
    }

    /// Read-only view of the current transform.
    pub fn transform(&self) -> &PlotTransform {
        &self.transform
    }

    /// The scene tree backing this session.
    pub fn tree(&self) -> &SceneTree {
        &self.tree
    }

    /// The container node the pan/zoom transform drives.
    pub fn plot_node(&self) -> NodeId {
        self.plot_node
    }

    /// Adds a pixel-locked marker under the plot container.
    pub fn add_locked_marker(
        &mut self,
        position: Vec2,
        intrinsic_size: Size,
        target_size: Size,
    ) -> NodeId {
        let node = self.tree.insert(
            Some(self.plot_node),
            ContainerNode {
                position,
                local_bounds: Some(Rect::from_origin_size(
                    kurbo::Point::ORIGIN,
                    intrinsic_size,
                )),
                flags: NodeFlags::default(),
                ..ContainerNode::default()
            },
        );
        self.pixel_locks.attach(
            &mut self.tree,
            PixelLockBinding {
                node,
                target_size,
                intrinsic_size,
            },
        );
        node
    }

    /// Routes one gesture input through the whole stack.
    pub fn handle(&mut self, input: GestureInput) -> Vec<SessionEvent> {
        let mut out = Vec::new();
        for event in self.router.handle(&mut self.transform, input) {
            match event {
                RouterEvent::View(update) => self.apply_view_update(update, &mut out),
                RouterEvent::SuppressContextMenu => {
                    out.push(SessionEvent::ContextMenuSuppressed);
                }
                RouterEvent::Forward(forwarded) => {
                    match self.brush.handle(&self.transform, &forwarded) {
                        Some(BrushEvent::Hover(hover)) => out.push(SessionEvent::Hover(hover)),
                        Some(BrushEvent::Select(select)) => {
                            out.push(SessionEvent::Select(select));
                        }
                        None => {}
                    }
                }
            }
        }
        out
    }

    /// Handles a viewport resize: re-frames the content and re-arms the
    /// brush clamp.
    pub fn resize(&mut self, viewport: Size) -> Vec<SessionEvent> {
        self.viewport = viewport;
        self.brush.set_viewport(viewport);
        self.refit_with_events()
    }

    /// Replaces the content bounding box (new data) and re-frames it.
    pub fn set_content_bounds(&mut self, bounds: Rect) -> Vec<SessionEvent> {
        self.content_bounds = bounds;
        self.tree
            .set_local_content_bounds(self.plot_node, Some(bounds));
        self.refit_with_events()
    }

    /// The blur/visibility-change safety net: force-terminates every active
    /// gesture so no capture outlives a lost release event.
    pub fn cancel_gestures(&mut self) {
        self.router.cancel_all();
        self.brush.cancel();
    }

    fn refit_with_events(&mut self) -> Vec<SessionEvent> {
        let updates = fit(
            &mut self.transform,
            self.content_bounds,
            self.viewport,
            &self.options,
        );
        let mut out = Vec::new();
        for update in updates {
            self.apply_view_update(update, &mut out);
        }
        out
    }

    fn apply_view_update(&mut self, update: ViewUpdate, out: &mut Vec<SessionEvent>) {
        // Mirror the transform into the scene's plot container.
        self.tree
            .set_position(self.plot_node, self.transform.translation());
        self.tree.set_scale(self.plot_node, self.transform.zoom_scale());
        out.push(SessionEvent::View(update));

        if let ViewUpdate::ScaleChanged { .. } = update {
            let changed = self.pixel_locks.on_zoom(&mut self.tree, self.plot_node);
            if !changed.is_empty() {
                out.push(SessionEvent::MarkersRescaled(changed.to_vec()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};
    use terrace_gesture::{GestureInput, Modifiers, PointerButton};
    use terrace_transform::FitOptions;

    use super::{PlotSession, SessionEvent};

    fn session() -> PlotSession {
        PlotSession::new(
            Size::new(500.0, 300.0),
            Rect::new(0.0, 0.0, 250.0, 150.0),
            FitOptions::default(),
        )
    }

    #[test]
    fn fit_on_mount_frames_the_content() {
        let session = session();
        assert_eq!(session.transform().zoom_scale(), Vec2::new(2.0, 2.0));
        assert_eq!(session.transform().translation(), Vec2::ZERO);
        // The scene mirrors the transform.
        assert_eq!(
            session.tree().scale(session.plot_node()),
            Some(Vec2::new(2.0, 2.0))
        );
    }

    #[test]
    fn wheel_zoom_rescales_locked_markers_through_the_session() {
        let mut session = session();
        let marker = session.add_locked_marker(
            Vec2::new(50.0, 50.0),
            Size::new(100.0, 100.0),
            Size::new(10.0, 10.0),
        );
        // Fitted scale is 2: the marker already compensates to 0.05.
        assert_eq!(
            session.tree().scale(marker),
            Some(Vec2::new(0.05, 0.05))
        );

        let events = session.handle(GestureInput::Wheel {
            position: Point::new(250.0, 150.0),
            delta_y: -500.0,
        });
        assert!(events
            .iter()
            .any(|e| matches!(e, SessionEvent::MarkersRescaled(nodes) if nodes.contains(&marker))));

        // 2x fit, 2x wheel: world scale 4, local must be 10 / (4 * 100).
        assert_eq!(
            session.tree().scale(marker),
            Some(Vec2::new(0.025, 0.025))
        );
    }

    #[test]
    fn pan_then_brush_selects_in_data_space() {
        let mut session = session();
        session.handle(GestureInput::PointerDown {
            position: Point::new(0.0, 0.0),
            button: PointerButton::Secondary,
            modifiers: Modifiers::empty(),
        });
        session.handle(GestureInput::PointerMove {
            position: Point::new(100.0, 0.0),
            modifiers: Modifiers::empty(),
        });
        session.handle(GestureInput::PointerUp {
            position: Point::new(100.0, 0.0),
            button: PointerButton::Secondary,
            modifiers: Modifiers::empty(),
        });

        session.handle(GestureInput::PointerDown {
            position: Point::new(100.0, 0.0),
            button: PointerButton::Primary,
            modifiers: Modifiers::empty(),
        });
        let events = session.handle(GestureInput::PointerUp {
            position: Point::new(300.0, 100.0),
            button: PointerButton::Primary,
            modifiers: Modifiers::empty(),
        });

        let select = events
            .iter()
            .find_map(|e| match e {
                SessionEvent::Select(s) => Some(s.clone()),
                _ => None,
            })
            .expect("release must emit a select");
        assert!(select.is_brushing);
        // Pixel (100, 0) is data (0, 0) after the 100 px pan at 2x scale.
        assert_eq!(select.data_rect, Rect::new(0.0, 0.0, 100.0, 50.0));
    }

    #[test]
    fn new_content_bounds_reset_the_zoom() {
        let mut session = session();
        session.handle(GestureInput::Wheel {
            position: Point::new(10.0, 10.0),
            delta_y: -500.0,
        });
        assert_eq!(session.transform().zoom_scale(), Vec2::new(4.0, 4.0));

        let events = session.set_content_bounds(Rect::new(0.0, 0.0, 500.0, 300.0));
        assert_eq!(session.transform().zoom_scale(), Vec2::new(1.0, 1.0));
        assert!(matches!(events[0], SessionEvent::View(_)));
    }

    #[test]
    fn cancel_gestures_recovers_from_a_lost_release() {
        let mut session = session();
        session.handle(GestureInput::PointerDown {
            position: Point::new(10.0, 10.0),
            button: PointerButton::Primary,
            modifiers: Modifiers::empty(),
        });
        // Window blur: the release never arrives.
        session.cancel_gestures();

        // The next release is not interpreted as a select.
        let events = session.handle(GestureInput::PointerUp {
            position: Point::new(200.0, 200.0),
            button: PointerButton::Primary,
            modifiers: Modifiers::empty(),
        });
        assert!(events.is_empty());
    }
}
