// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer identities and events.

use kurbo::Point;

/// Identifies one active pointer (the mouse, a touch contact, or a pen).
///
/// Identifiers are assigned by the host and stay unique while the pointer is active.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PointerId(pub u64);

/// The kind of device behind a pointer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerKind {
    /// A mouse or trackpad cursor.
    Mouse,
    /// A touch contact.
    Touch,
    /// A stylus.
    Pen,
}

impl PointerKind {
    /// Touch contacts and pens are imprecise, so widgets use wider tolerances for them.
    pub const fn is_touch_like(self) -> bool {
        matches!(self, Self::Touch | Self::Pen)
    }
}

/// A pointer input event in the coordinate space of the receiving widget set.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Which pointer produced the event.
    pub pointer: PointerId,
    /// Device kind of that pointer.
    pub kind: PointerKind,
    /// Pointer position.
    pub position: Point,
}

impl PointerEvent {
    /// Create an event.
    pub const fn new(pointer: PointerId, kind: PointerKind, position: Point) -> Self {
        Self {
            pointer,
            kind,
            position,
        }
    }

    /// A mouse event at `position`.
    pub const fn mouse(pointer: PointerId, position: Point) -> Self {
        Self::new(pointer, PointerKind::Mouse, position)
    }

    /// A touch event at `position`.
    pub const fn touch(pointer: PointerId, position: Point) -> Self {
        Self::new(pointer, PointerKind::Touch, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_like_kinds() {
        assert!(PointerKind::Touch.is_touch_like());
        assert!(PointerKind::Pen.is_touch_like());
        assert!(!PointerKind::Mouse.is_touch_like());
    }
}
