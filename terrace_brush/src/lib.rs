// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Terrace Brush: drag-to-select for 2D plots.
//!
//! This crate owns the selection side of a plot's interaction core:
//!
//! - [`BrushController`]: the brush/click state machine. It tracks a
//!   primary-button drag, clamps the selection rectangle to the viewport,
//!   converts it to data space through the plot transform, and emits
//!   [`HoverEvent`]/[`SelectEvent`] values.
//! - [`overlay_geometry`]: the dimming overlay for an in-progress brush:
//!   four translucent rectangles covering everything outside the selection
//!   box (or its inverse for remove-from-selection), plus the outline. The
//!   result is rebuilt from scratch on every update, never patched.
//! - [`Selection`]: compact selection-set bookkeeping with a revision
//!   counter, plus [`Selection::apply_select`] to consume a [`SelectEvent`]'s
//!   latched add/remove flags.
//!
//! ## Gesture flow
//!
//! The state machine is `Idle → Anchored → Brushing → Idle`. A press anchors
//! the gesture and latches the add/remove modifier keys at that instant; the
//! latched values, never re-read key state, populate the final
//! [`SelectEvent`]. A release within the drag threshold (3 pixels by
//! default) is a click: a zero-size rectangle at the release point with
//! `is_brushing = false`.
//!
//! Input arrives as the same [`GestureInput`] union the router forwards, so
//! wiring is one line per event:
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use terrace_brush::{BrushController, BrushEvent};
//! use terrace_gesture::{GestureInput, Modifiers, PointerButton};
//! use terrace_transform::PlotTransform;
//!
//! let transform = PlotTransform::IDENTITY;
//! let mut brush = BrushController::new(Size::new(500.0, 300.0));
//!
//! brush.handle(&transform, &GestureInput::PointerDown {
//!     position: Point::new(10.0, 10.0),
//!     button: PointerButton::Primary,
//!     modifiers: Modifiers::empty(),
//! });
//! let event = brush.handle(&transform, &GestureInput::PointerUp {
//!     position: Point::new(100.0, 80.0),
//!     button: PointerButton::Primary,
//!     modifiers: Modifiers::empty(),
//! });
//! assert!(matches!(event, Some(BrushEvent::Select(e)) if e.is_brushing));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod overlay;
mod selection;

pub use controller::{
    BrushConfig, BrushController, BrushEvent, BrushPhase, HoverEvent, SelectEvent,
};
pub use overlay::{overlay_geometry, BrushOverlay, OverlayStyle};
pub use selection::Selection;
