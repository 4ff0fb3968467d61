// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Terrace Axis: the axis-scale contract and its view-transformed copies.
//!
//! Axis rendering lives outside the interaction core, but the core owes it
//! one thing: a way to express "the scale you were given, as it currently
//! appears on screen under the live pan/zoom". This crate provides:
//!
//! - [`Scale`]: an invertible one-dimensional mapping with `domain`/`range`
//!   accessors and a [`Scale::with_range`] copy that re-ranges without
//!   mutating the original. The transform core derives a fresh copy per
//!   frame rather than touching the caller's scale.
//! - [`LinearScale`]: the linear implementation.
//! - [`x_axis_scale`] / [`y_axis_scale`]: the per-frame derivation, applying
//!   one component of a [`PlotTransform`] to a scale's range.
//! - [`suggest_tick_step`]: a 1-2-5 ladder tick spacing for the current
//!   projection density.
//!
//! ## Per-frame derivation
//!
//! ```rust
//! use terrace_axis::{y_axis_scale, LinearScale, Scale};
//! use terrace_transform::PlotTransform;
//!
//! // Data 0..100 rendered onto pixels 0..300.
//! let scale = LinearScale::new(0.0..100.0, 0.0..300.0);
//! let mut transform = PlotTransform::IDENTITY;
//! transform.pan_by(kurbo::Vec2::new(0.0, 30.0));
//!
//! let on_screen = y_axis_scale(&transform, &scale);
//! assert_eq!(on_screen.project(0.0), 30.0);
//! // The caller's scale is untouched.
//! assert_eq!(scale.project(0.0), 0.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use core::ops::Range;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use terrace_transform::PlotTransform;

/// An invertible one-dimensional mapping from data values to renderer
/// pixels.
///
/// Implementations are value types; [`Scale::with_range`] returns a
/// re-ranged copy and never mutates the receiver. Projection and inversion
/// are total: degenerate (zero-length) domains project to the range start,
/// and degenerate ranges invert to the domain start, rather than producing
/// NaN.
pub trait Scale: Sized {
    /// The data interval this scale maps from.
    fn domain(&self) -> Range<f64>;

    /// The pixel interval this scale maps onto.
    fn range(&self) -> Range<f64>;

    /// Maps a data value into the range.
    fn project(&self, value: f64) -> f64;

    /// Maps a range position back to a data value.
    fn invert(&self, position: f64) -> f64;

    /// Returns a copy of this scale with a different range.
    #[must_use]
    fn with_range(&self, range: Range<f64>) -> Self;
}

/// A linear [`Scale`].
#[derive(Clone, Debug, PartialEq)]
pub struct LinearScale {
    domain: Range<f64>,
    range: Range<f64>,
}

impl LinearScale {
    /// Creates a linear scale mapping `domain` onto `range`.
    #[must_use]
    pub const fn new(domain: Range<f64>, range: Range<f64>) -> Self {
        Self { domain, range }
    }
}

impl Scale for LinearScale {
    fn domain(&self) -> Range<f64> {
        self.domain.clone()
    }

    fn range(&self) -> Range<f64> {
        self.range.clone()
    }

    fn project(&self, value: f64) -> f64 {
        let domain_span = self.domain.end - self.domain.start;
        if domain_span == 0.0 {
            return self.range.start;
        }
        let t = (value - self.domain.start) / domain_span;
        self.range.start + t * (self.range.end - self.range.start)
    }

    fn invert(&self, position: f64) -> f64 {
        let range_span = self.range.end - self.range.start;
        if range_span == 0.0 {
            return self.domain.start;
        }
        let t = (position - self.range.start) / range_span;
        self.domain.start + t * (self.domain.end - self.domain.start)
    }

    fn with_range(&self, range: Range<f64>) -> Self {
        Self {
            domain: self.domain.clone(),
            range,
        }
    }
}

/// Returns a copy of `scale` with its range scaled by `factor` and shifted
/// by `translate`.
///
/// Both range endpoints are multiplied by the factor before translating, so
/// projection and inversion through the copy agree with the on-screen
/// transform everywhere, not just at the range start.
#[must_use]
pub fn view_scaled<S: Scale>(scale: &S, translate: f64, factor: f64) -> S {
    let range = scale.range();
    scale.with_range(range.start * factor + translate..range.end * factor + translate)
}

/// Derives the on-screen copy of a horizontal axis scale from the plot's
/// current pan/zoom.
#[must_use]
pub fn x_axis_scale<S: Scale>(transform: &PlotTransform, scale: &S) -> S {
    view_scaled(scale, transform.translation().x, transform.zoom_scale().x)
}

/// Derives the on-screen copy of a vertical axis scale from the plot's
/// current pan/zoom.
#[must_use]
pub fn y_axis_scale<S: Scale>(transform: &PlotTransform, scale: &S) -> S {
    view_scaled(scale, transform.translation().y, transform.zoom_scale().y)
}

/// Suggests a "nice" tick step in data units for the current projection
/// density.
///
/// The returned step is chosen from a 1-2-5 ladder so that consecutive
/// ticks land roughly `target_px` pixels apart under `scale`. Returns
/// `None` for a degenerate scale (zero-length domain or range).
#[must_use]
pub fn suggest_tick_step<S: Scale>(scale: &S, target_px: f64) -> Option<f64> {
    let domain = scale.domain();
    let range = scale.range();
    let domain_span = (domain.end - domain.start).abs();
    let range_span = (range.end - range.start).abs();
    if domain_span == 0.0 || range_span == 0.0 || target_px <= 0.0 {
        return None;
    }

    let desired = domain_span / range_span * target_px;

    let mut unit = 1.0_f64;
    while unit * 10.0 <= desired {
        unit *= 10.0;
    }
    while unit > desired {
        unit /= 10.0;
    }

    loop {
        for m in [1.0_f64, 2.0, 5.0, 10.0] {
            let step = m * unit;
            if step >= desired {
                return Some(step);
            }
        }
        unit *= 10.0;
    }
}
