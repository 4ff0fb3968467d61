// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel and pinch zoom resolved into anchor-preserving zoom steps.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};
use terrace_transform::{PlotTransform, ViewUpdate};

/// Tuning for zoom gesture recognition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Wheel distance, in normalized delta pixels, per octave of zoom.
    ///
    /// A wheel tick of `-wheel_sensitivity` doubles the scale; `2 *
    /// -wheel_sensitivity` quadruples it.
    pub wheel_sensitivity: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            wheel_sensitivity: 500.0,
        }
    }
}

/// Pinch gesture state: the distance baseline between two touches.
///
/// The baseline is established when the touch count reaches exactly two and
/// cleared when it drops below two. Each move ratchets the baseline forward,
/// so the factor applied per step is the incremental ratio and the product
/// over a gesture equals current-distance over initial-distance. A missing
/// or zero baseline makes a step a no-op rather than a NaN; a third finger
/// arriving mid-gesture clears the baseline outright.
///
/// The zoom anchor is the **first** touch position, matching the behavior
/// this crate models rather than the two-finger midpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchState {
    last_distance: Option<f64>,
}

impl PinchState {
    /// Establishes the distance baseline from the two touch positions.
    pub fn begin(&mut self, a: Point, b: Point) {
        self.last_distance = Some(a.distance(b));
    }

    /// Advances the baseline and returns the incremental scale factor.
    ///
    /// Returns `None` when no baseline is established or the previous
    /// distance was zero (coincident touches).
    pub fn update(&mut self, a: Point, b: Point) -> Option<f64> {
        let last = self.last_distance?;
        let current = a.distance(b);
        self.last_distance = Some(current);
        if last == 0.0 {
            return None;
        }
        Some(current / last)
    }

    /// Clears the baseline, ending the pinch.
    pub fn clear(&mut self) {
        self.last_distance = None;
    }

    /// Returns `true` while a pinch baseline is established.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last_distance.is_some()
    }
}

/// Turns wheel deltas and pinch gestures into anchor-preserving zoom steps
/// on a [`PlotTransform`].
///
/// Wheel and pinch are mutually exclusive per gesture: while a pinch
/// baseline is live, wheel events are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ZoomController {
    config: ZoomConfig,
    pinch: PinchState,
}

impl ZoomController {
    /// Creates a controller with the given tuning.
    #[must_use]
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            config,
            pinch: PinchState::default(),
        }
    }

    /// Returns the scale factor for a normalized wheel delta:
    /// `2^(-delta_y / wheel_sensitivity)`.
    #[must_use]
    pub fn wheel_factor(&self, delta_y: f64) -> f64 {
        2_f64.powf(-delta_y / self.config.wheel_sensitivity)
    }

    /// Applies a wheel tick as a uniform zoom around the pointer position.
    ///
    /// Ignored (returns `None`) while a pinch is in progress.
    pub fn on_wheel(
        &mut self,
        transform: &mut PlotTransform,
        position: Point,
        delta_y: f64,
    ) -> Option<ViewUpdate> {
        if self.pinch.is_active() {
            return None;
        }
        let factor = self.wheel_factor(delta_y);
        transform.zoom_about(position, Vec2::new(factor, factor))
    }

    /// Updates pinch state for a change in the active touch set.
    ///
    /// Exactly two touches establish a baseline; more than two clear it, so
    /// a later two-finger move cannot divide by a stale distance.
    pub fn on_touch_start(&mut self, touches: &[Point]) {
        if touches.len() == 2 {
            self.pinch.begin(touches[0], touches[1]);
        } else {
            self.pinch.clear();
        }
    }

    /// Applies a two-finger move as a uniform zoom around the first touch.
    ///
    /// A move without an established baseline is a no-op zoom step.
    pub fn on_touch_move(
        &mut self,
        transform: &mut PlotTransform,
        touches: &[Point],
    ) -> Option<ViewUpdate> {
        if touches.len() != 2 {
            return None;
        }
        let factor = self.pinch.update(touches[0], touches[1])?;
        transform.zoom_about(touches[0], Vec2::new(factor, factor))
    }

    /// Updates pinch state for touches lifting; dropping below two touches
    /// ends the pinch.
    pub fn on_touch_end(&mut self, touches: &[Point]) {
        if touches.len() < 2 {
            self.pinch.clear();
        }
    }

    /// Clears all gesture state, for hosts whose release events can no
    /// longer arrive.
    pub fn cancel(&mut self) {
        self.pinch.clear();
    }

    /// Returns `true` while a pinch is in progress.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_active()
    }
}
