// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Terrace Transform: pan/zoom transform state for 2D plots.
//!
//! This crate provides the small, headless model at the center of a Terrace
//! plot: the composed pan/zoom transform between the plot's data space and
//! the renderer's pixel space. It focuses on:
//! - The authoritative transform record (drag offset + zoom translation +
//!   zoom scale) for one plot instance.
//! - Coordinate conversion between plot/data space and renderer/pixel space.
//! - Anchor-preserving zoom steps.
//! - Zoom-to-fit framing against a content bounding box.
//!
//! It does **not** own any scene graph, gesture recognition, or rendering
//! backend. Callers are expected to:
//! - Drive [`PlotTransform`] from gesture controllers (for example,
//!   `terrace_gesture`).
//! - Forward the returned [`ViewUpdate`] values to whatever needs to react
//!   (axis redraw, pixel-locked element rescaling).
//! - Read conversions every frame; they are pure functions of current state.
//!
//! ## Coordinate spaces
//!
//! Renderer space is the drawing surface's own pixel grid, origin top-left.
//! Plot space is the content's logical units before pan/zoom. The composed
//! transform is, component-wise:
//!
//! ```text
//! renderer = plot * zoom_scale + zoom_position + drag_offset
//! ```
//!
//! The two translation parts are kept separate on purpose: panning composes
//! additively into `drag_offset`, while zoom steps solve for `zoom_position`
//! so that the anchor pixel stays fixed. External readers usually only care
//! about the sum, exposed as [`PlotTransform::translation`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use terrace_transform::{fit, FitOptions, PlotTransform};
//!
//! let mut transform = PlotTransform::IDENTITY;
//!
//! // Frame a 250x150 content box inside a 500x300 viewport.
//! let bounds = Rect::new(0.0, 0.0, 250.0, 150.0);
//! fit(&mut transform, bounds, Size::new(500.0, 300.0), &FitOptions::default());
//! assert_eq!(transform.zoom_scale(), Vec2::new(2.0, 2.0));
//!
//! // Zoom in 2x around the viewport center; the anchor pixel stays put.
//! let anchor = Point::new(250.0, 150.0);
//! let under_cursor = transform.renderer_to_plot(anchor);
//! transform.zoom_about(anchor, Vec2::new(2.0, 2.0));
//! let after = transform.renderer_to_plot(anchor);
//! assert!((after - under_cursor).hypot() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Scale components are independent, so non-uniform zoom (and an inverted,
//!   negative Y scale) is representable; [`FitOptions::keep_aspect_ratio`]
//!   constrains them to track together.
//! - Mutating operations return [`ViewUpdate`] values instead of invoking
//!   callbacks; observers never poll and there is no listener registry.
//! - Conversions assume the scale components are finite and non-zero. Every
//!   mutation in this crate preserves that invariant, including the
//!   degenerate-bounds guards in [`fit`].
//!
//! This crate is `no_std`.

#![no_std]

mod fit;
mod transform;

pub use fit::{fit, FitOptions, Margins};
pub use transform::{PlotTransform, PlotTransformDebugInfo, ViewUpdate};
