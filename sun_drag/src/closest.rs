// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closest-drag-target selection.
//!
//! Small draggable things are hard to hit, especially with a finger. A
//! [`ClosestDragSelector`] sits behind them and handles downs that no widget
//! claimed: it starts a drag on the registered item nearest the pointer, provided
//! that item is within a threshold. Touch-like pointers get their own (usually
//! wider) threshold.
//!
//! ```
//! use core::cell::Cell;
//! use kurbo::Point;
//! use std::rc::Rc;
//! use sun_drag::{ClosestDragSelector, DragTarget, DragThresholds};
//! use sun_responder::pointer::{PointerEvent, PointerId};
//!
//! struct Handle { at: Point, drags: Cell<u32> }
//! impl DragTarget for Handle {
//!     fn compute_distance(&self, point: Point) -> f64 { self.at.distance(point) }
//!     fn start_drag(&self, _event: &PointerEvent) { self.drags.set(self.drags.get() + 1); }
//! }
//!
//! let handle = Rc::new(Handle { at: Point::new(10.0, 10.0), drags: Cell::new(0) });
//! let mut selector = ClosestDragSelector::new(DragThresholds::default());
//! selector.add_draggable_item(handle.clone());
//!
//! let press = PointerEvent::touch(PointerId(1), Point::new(14.0, 10.0));
//! assert_eq!(selector.on_down(&press), Some(0));
//! assert_eq!(handle.drags.get(), 1);
//! ```

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use kurbo::Point;
use sun_responder::dispatcher::DownResult;
use sun_responder::pointer::PointerEvent;

/// Something that can be dragged by a [`ClosestDragSelector`].
pub trait DragTarget {
    /// Distance from `point` to this item, in the pointer's coordinate space.
    fn compute_distance(&self, point: Point) -> f64;

    /// Begin dragging this item with the pointer of `event`.
    fn start_drag(&self, event: &PointerEvent);
}

/// Maximum pointer distances, exclusive, for starting a drag.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragThresholds {
    /// Threshold for touch and pen pointers.
    pub touch: f64,
    /// Threshold for mouse pointers.
    pub mouse: f64,
}

impl Default for DragThresholds {
    fn default() -> Self {
        Self {
            touch: 40.0,
            mouse: 20.0,
        }
    }
}

impl DragThresholds {
    /// The threshold that applies to `event`'s pointer.
    pub fn for_event(&self, event: &PointerEvent) -> f64 {
        if event.kind.is_touch_like() {
            self.touch
        } else {
            self.mouse
        }
    }
}

/// Starts a drag on the nearest registered item for unclaimed downs.
pub struct ClosestDragSelector {
    items: Vec<Rc<dyn DragTarget>>,
    thresholds: DragThresholds,
}

impl fmt::Debug for ClosestDragSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosestDragSelector")
            .field("items", &self.items.len())
            .field("thresholds", &self.thresholds)
            .finish()
    }
}

impl ClosestDragSelector {
    /// Create a selector with no items.
    pub fn new(thresholds: DragThresholds) -> Self {
        Self {
            items: Vec::new(),
            thresholds,
        }
    }

    /// The active thresholds.
    pub fn thresholds(&self) -> DragThresholds {
        self.thresholds
    }

    /// Replace the thresholds.
    pub fn set_thresholds(&mut self, thresholds: DragThresholds) {
        self.thresholds = thresholds;
    }

    /// Register `item`; no-op if already registered. Returns `true` if added.
    pub fn add_draggable_item(&mut self, item: Rc<dyn DragTarget>) -> bool {
        if self.items.iter().any(|i| Rc::ptr_eq(i, &item)) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Unregister `item`; no-op if absent. Returns `true` if removed.
    pub fn remove_draggable_item(&mut self, item: &Rc<dyn DragTarget>) -> bool {
        let Some(i) = self.items.iter().position(|i| Rc::ptr_eq(i, item)) else {
            return false;
        };
        self.items.remove(i);
        true
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no items are registered.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item nearest to `point`, with its distance. Ties go to the earlier item.
    ///
    /// Items reporting a NaN distance are never chosen.
    pub fn closest(&self, point: Point) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (i, item) in self.items.iter().enumerate() {
            let d = item.compute_distance(point);
            if d.is_nan() {
                continue;
            }
            if best.is_none_or(|(_, min)| d < min) {
                best = Some((i, d));
            }
        }
        best
    }

    /// Handle a down event nothing else claimed.
    ///
    /// Starts a drag on the nearest item if it is closer than the pointer's threshold,
    /// and returns that item's index.
    pub fn on_down(&self, event: &PointerEvent) -> Option<usize> {
        let (index, distance) = self.closest(event.position)?;
        let threshold = self.thresholds.for_event(event);
        if distance.partial_cmp(&threshold) != Some(Ordering::Less) {
            return None;
        }
        tracing::debug!(index, distance, "starting drag on closest item");
        self.items[index].start_drag(event);
        Some(index)
    }

    /// Offer a dispatcher result: only [`DownResult::Unclaimed`] downs are handled.
    pub fn on_dispatched_down<K>(
        &self,
        result: DownResult<K>,
        event: &PointerEvent,
    ) -> Option<usize> {
        match result {
            DownResult::Unclaimed => self.on_down(event),
            DownResult::Claimed(_) => None,
        }
    }
}
