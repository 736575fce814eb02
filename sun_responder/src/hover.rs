// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking: compute enter/leave transitions from path changes, per pointer.
//!
//! ## Usage
//!
//! 1) Route a pointer move with [`Router::route_hits`](crate::router::Router::route_hits).
//! 2) Extract the root→target path from the dispatch with [`path_from_dispatch`].
//! 3) Call [`HoverTracker::update`] with the pointer and that path to get
//!    `Enter(..)` / `Leave(..)` transitions.
//!
//! The [`Dispatcher`](crate::dispatcher::Dispatcher) does all three for you.
//!
//! ## Minimal example
//!
//! ```
//! use sun_responder::hover::{HoverEvent, HoverTracker};
//! use sun_responder::pointer::PointerId;
//!
//! let mouse = PointerId(0);
//! let mut h: HoverTracker<u32> = HoverTracker::new();
//! assert_eq!(h.update(mouse, &[1, 2]), vec![HoverEvent::Enter(1), HoverEvent::Enter(2)]);
//! assert_eq!(h.update(mouse, &[1, 3]), vec![HoverEvent::Leave(2), HoverEvent::Enter(3)]);
//! ```

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::pointer::PointerId;
use crate::types::{Dispatch, Phase};

/// A hover transition event.
///
/// Returned by [`HoverTracker::update`] and [`HoverTracker::remove_pointer`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// Pointer enters the given node (in order from outer→inner).
    Enter(K),
    /// Pointer leaves the given node (in order from inner→outer).
    Leave(K),
}

/// Hovered root→target paths, one per active pointer.
///
/// Ordering semantics:
/// - Leave events are emitted from inner-most to outer-most.
/// - Enter events are emitted from outer-most to inner-most.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverTracker<K: Copy + Eq> {
    paths: BTreeMap<PointerId, Vec<K>>,
}

impl<K: Copy + Eq> Default for HoverTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq> HoverTracker<K> {
    /// Create a tracker with no hovered pointers.
    pub const fn new() -> Self {
        Self {
            paths: BTreeMap::new(),
        }
    }

    /// The path currently hovered by `pointer` (empty if none).
    pub fn hovered(&self, pointer: PointerId) -> &[K] {
        self.paths.get(&pointer).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any pointer currently hovers `node`.
    pub fn is_hovered(&self, node: K) -> bool {
        self.paths.values().any(|p| p.contains(&node))
    }

    /// Update the path hovered by `pointer` and return the transitions from its previous path.
    pub fn update(&mut self, pointer: PointerId, new_path: &[K]) -> Vec<HoverEvent<K>> {
        let current = self.paths.entry(pointer).or_default();

        // Length of the shared ancestry (the lowest common ancestor depth).
        let lca = current
            .iter()
            .zip(new_path)
            .take_while(|(a, b)| a == b)
            .count();

        let mut out = Vec::with_capacity(current.len() - lca + new_path.len() - lca);
        out.extend(current[lca..].iter().rev().map(|&k| HoverEvent::Leave(k)));
        out.extend(new_path[lca..].iter().map(|&k| HoverEvent::Enter(k)));

        if new_path.is_empty() {
            self.paths.remove(&pointer);
        } else {
            current.clear();
            current.extend_from_slice(new_path);
        }
        out
    }

    /// Forget `pointer`, returning leave events for everything it hovered.
    pub fn remove_pointer(&mut self, pointer: PointerId) -> Vec<HoverEvent<K>> {
        self.paths
            .remove(&pointer)
            .map(|path| path.into_iter().rev().map(HoverEvent::Leave).collect())
            .unwrap_or_default()
    }
}

/// Extract a root→target path from a router dispatch sequence.
///
/// Assumes the sequence begins with all [`Capture`](Phase::Capture) steps for the
/// path, as produced by the [router](crate::router::Router).
pub fn path_from_dispatch<K: Copy>(seq: &[Dispatch<K>]) -> Vec<K> {
    seq.iter()
        .take_while(|d| d.phase == Phase::Capture)
        .map(|d| d.node)
        .collect()
}
