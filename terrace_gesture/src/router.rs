// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-plot input dispatcher feeding the zoom and drag controllers.

use smallvec::SmallVec;
use terrace_transform::{PlotTransform, ViewUpdate};

use crate::drag::DragController;
use crate::input::{GestureInput, PointerButton};
use crate::zoom::{ZoomConfig, ZoomController};

/// Routing policy for [`InputRouter`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouterConfig {
    /// The button that starts a pan drag.
    ///
    /// Defaults to [`PointerButton::Secondary`], the button conventionally
    /// reserved for panning; the router asks the host to suppress its
    /// context-menu default while a pan triggered by it is active.
    pub pan_button: PointerButton,
    /// Tuning forwarded to the zoom controller.
    pub zoom: ZoomConfig,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            pan_button: PointerButton::Secondary,
            zoom: ZoomConfig::default(),
        }
    }
}

/// What the router asks of its host after handling one input.
#[derive(Clone, Debug, PartialEq)]
pub enum RouterEvent {
    /// The transform changed; forward to axis redraw and pixel-locked
    /// element rescaling, then redraw.
    View(ViewUpdate),
    /// The host must suppress the context-menu default for the duration of
    /// the pan gesture that just started.
    SuppressContextMenu,
    /// Input the router does not own (everything on the selection button);
    /// feed it to the brush layer unchanged.
    Forward(GestureInput),
}

/// Routes [`GestureInput`] to the pan and zoom controllers of one plot.
///
/// The router owns the two controllers that write the transform; selection
/// input is handed back via [`RouterEvent::Forward`] so the brush layer
/// (which also needs to read the transform for pixel-to-data conversion)
/// stays outside the borrow.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputRouter {
    config: RouterConfig,
    drag: DragController,
    zoom: ZoomController,
}

impl InputRouter {
    /// Creates a router with the given policy.
    #[must_use]
    pub fn new(config: RouterConfig) -> Self {
        Self {
            config,
            drag: DragController::default(),
            zoom: ZoomController::new(config.zoom),
        }
    }

    /// Handles one input against the plot's transform.
    ///
    /// Returns the resulting host requests in order. A pointer move while a
    /// pan is active produces both the pan's [`RouterEvent::View`] and a
    /// [`RouterEvent::Forward`], because an anchored brush gesture tracks
    /// the same moves.
    pub fn handle(
        &mut self,
        transform: &mut PlotTransform,
        input: GestureInput,
    ) -> SmallVec<[RouterEvent; 2]> {
        let mut events = SmallVec::new();
        match input {
            GestureInput::PointerDown {
                position, button, ..
            } if button == self.config.pan_button => {
                if self.drag.begin(position) && button == PointerButton::Secondary {
                    events.push(RouterEvent::SuppressContextMenu);
                }
            }
            GestureInput::PointerMove { position, .. } => {
                if let Some(update) = self.drag.update(transform, position) {
                    events.push(RouterEvent::View(update));
                }
                events.push(RouterEvent::Forward(input));
            }
            GestureInput::PointerUp { button, .. } if button == self.config.pan_button => {
                self.drag.end();
            }
            GestureInput::PointerDown { .. } | GestureInput::PointerUp { .. } => {
                events.push(RouterEvent::Forward(input));
            }
            GestureInput::Wheel { position, delta_y } => {
                if let Some(update) = self.zoom.on_wheel(transform, position, delta_y) {
                    events.push(RouterEvent::View(update));
                }
            }
            GestureInput::TouchStart { ref touches } => {
                self.zoom.on_touch_start(touches);
                if touches.len() == 1 {
                    self.drag.begin(touches[0]);
                } else {
                    // A second finger turns the gesture into a pinch.
                    self.drag.end();
                }
            }
            GestureInput::TouchMove { ref touches } => {
                let update = match touches.len() {
                    1 => self.drag.update(transform, touches[0]),
                    _ => self.zoom.on_touch_move(transform, touches),
                };
                if let Some(update) = update {
                    events.push(RouterEvent::View(update));
                }
            }
            GestureInput::TouchEnd { ref touches } => {
                self.zoom.on_touch_end(touches);
                if touches.is_empty() {
                    self.drag.end();
                } else if touches.len() == 1 {
                    // Pinch collapsed to a single finger: re-anchor the pan
                    // there rather than jumping from the stale anchor.
                    self.drag.end();
                    self.drag.begin(touches[0]);
                }
            }
        }
        events
    }

    /// Force-terminates every active gesture.
    ///
    /// For hosts reacting to window blur or visibility change, where the
    /// matching release events can never arrive. Idempotent.
    pub fn cancel_all(&mut self) {
        self.drag.cancel();
        self.zoom.cancel();
    }

    /// Returns `true` while a pan drag is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Returns `true` while a pinch is active.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.zoom.is_pinching()
    }
}
