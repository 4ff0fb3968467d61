// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The normalized input model: one tagged union of gesture inputs.

use kurbo::Point;
use smallvec::SmallVec;

bitflags::bitflags! {
    /// Modifier keys held during a pointer event.
    ///
    /// Selection gestures latch these at press time; they are never re-read
    /// from later events in the same gesture.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key. Extends an existing selection.
        const SHIFT = 0b0000_0001;
        /// Control key. Removes from an existing selection.
        const CTRL  = 0b0000_0010;
        /// Alt/Option key.
        const ALT   = 0b0000_0100;
        /// Meta/Command key.
        const META  = 0b0000_1000;
    }
}

/// Which pointer button an event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// The primary button (conventionally left). Starts selection gestures.
    Primary,
    /// The secondary button (conventionally right). Starts pan gestures by
    /// default; its context-menu default is suppressed while panning.
    Secondary,
    /// The middle/auxiliary button.
    Auxiliary,
}

/// A gesture input, normalized from whatever event source the host uses.
///
/// Positions are in renderer/pixel space (the drawing surface's own grid,
/// origin top-left); hosts are expected to map client coordinates into that
/// space before routing. Touch variants carry the current set of active
/// touch positions, first touch first.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureInput {
    /// A pointer button was pressed.
    PointerDown {
        /// Pointer position in renderer space.
        position: Point,
        /// The pressed button.
        button: PointerButton,
        /// Modifier keys held at press time.
        modifiers: Modifiers,
    },
    /// The pointer moved. Delivered through the widened (window-level)
    /// listener while a gesture is active, so the position may lie outside
    /// the surface.
    PointerMove {
        /// Pointer position in renderer space.
        position: Point,
        /// Modifier keys held during the move.
        modifiers: Modifiers,
    },
    /// A pointer button was released.
    PointerUp {
        /// Pointer position in renderer space.
        position: Point,
        /// The released button.
        button: PointerButton,
        /// Modifier keys held at release time.
        modifiers: Modifiers,
    },
    /// A wheel/scroll tick. `delta_y` is the normalized vertical delta in
    /// pixels (positive scrolls away, zooming out).
    Wheel {
        /// Pointer position in renderer space.
        position: Point,
        /// Normalized vertical wheel delta.
        delta_y: f64,
    },
    /// The set of active touches changed by one or more touches starting.
    TouchStart {
        /// All currently active touch positions.
        touches: SmallVec<[Point; 2]>,
    },
    /// One or more active touches moved.
    TouchMove {
        /// All currently active touch positions.
        touches: SmallVec<[Point; 2]>,
    },
    /// The set of active touches changed by one or more touches lifting.
    TouchEnd {
        /// The touch positions that remain active.
        touches: SmallVec<[Point; 2]>,
    },
}
