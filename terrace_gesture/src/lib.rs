// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Terrace Gesture: gesture recognition over a shared plot transform.
//!
//! This crate turns raw pointer, wheel, and touch input into mutations of a
//! [`PlotTransform`](terrace_transform::PlotTransform). It provides:
//!
//! - A normalized input model ([`GestureInput`], [`PointerButton`],
//!   [`Modifiers`]): one tagged union of gesture inputs instead of
//!   event-subtype branching inside the shared math.
//! - [`ZoomController`]: wheel deltas and pinch gestures resolved into
//!   anchor-preserving zoom steps, with the two sources mutually exclusive
//!   per gesture.
//! - [`DragController`]: pan gestures accumulated into the transform's drag
//!   offset, one delta per move.
//! - [`InputRouter`]: the per-plot dispatcher that feeds the two controllers
//!   and hands everything selection-related back to the host untouched.
//!
//! ## Capture lifecycle
//!
//! Hosts widen their pointer listeners to the window for the duration of a
//! gesture so movement tracks outside the surface. The controllers mirror
//! that with anchor-presence guards: a gesture of a given kind cannot begin
//! while one is active, ending is idempotent, and every controller has a
//! `cancel` path for hosts to call when a release event can never arrive
//! (window blur, visibility change). [`InputRouter::cancel_all`] bundles
//! those for convenience.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use terrace_gesture::{GestureInput, InputRouter, RouterEvent};
//! use terrace_transform::PlotTransform;
//!
//! let mut transform = PlotTransform::IDENTITY;
//! let mut router = InputRouter::default();
//!
//! // A wheel tick zooms around the pointer.
//! let events = router.handle(
//!     &mut transform,
//!     GestureInput::Wheel {
//!         position: Point::new(250.0, 150.0),
//!         delta_y: -500.0,
//!     },
//! );
//! assert!(matches!(events[0], RouterEvent::View(_)));
//! assert_eq!(transform.zoom_scale().x, 2.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod drag;
mod input;
mod router;
mod zoom;

pub use drag::DragController;
pub use input::{GestureInput, Modifiers, PointerButton};
pub use router::{InputRouter, RouterConfig, RouterEvent};
pub use zoom::{PinchState, ZoomConfig, ZoomController};
