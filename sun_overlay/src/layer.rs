// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A z-ordered stack of overlay nodes.

use alloc::vec::Vec;
use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_LAYER: AtomicU64 = AtomicU64::new(0);

/// Identifier of a node added to an [`OverlayLayer`].
///
/// Ids are never reused within a layer, and an id from one layer never matches
/// a node in another, so a stale or foreign id simply finds nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverlayId {
    layer: u64,
    seq: u64,
}

/// Popups, menus and drag previews drawn above the rest of the scene.
///
/// The layer is an ordinary value owned by the host and passed to whatever
/// needs to show something on top. Nodes are kept bottom → top; [`add`](Self::add)
/// places a node on top.
#[derive(Clone, Debug)]
pub struct OverlayLayer<N> {
    nodes: Vec<(OverlayId, N)>,
    layer: u64,
    next: u64,
}

impl<N> Default for OverlayLayer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> OverlayLayer<N> {
    /// Create an empty layer.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            layer: NEXT_LAYER.fetch_add(1, Ordering::Relaxed),
            next: 0,
        }
    }

    /// Add `node` above everything else.
    pub fn add(&mut self, node: N) -> OverlayId {
        let id = OverlayId {
            layer: self.layer,
            seq: self.next,
        };
        self.next += 1;
        self.nodes.push((id, node));
        tracing::trace!(?id, "overlay added");
        id
    }

    /// Remove and return the node for `id`.
    pub fn remove(&mut self, id: OverlayId) -> Option<N> {
        let i = self.position(id)?;
        tracing::trace!(?id, "overlay removed");
        Some(self.nodes.remove(i).1)
    }

    /// Raise `id` to the top. Returns `false` if it is not in the layer.
    pub fn move_to_front(&mut self, id: OverlayId) -> bool {
        let Some(i) = self.position(id) else {
            return false;
        };
        let entry = self.nodes.remove(i);
        self.nodes.push(entry);
        true
    }

    /// Whether `id` is in the layer.
    pub fn contains(&self, id: OverlayId) -> bool {
        self.position(id).is_some()
    }

    /// The node for `id`.
    pub fn get(&self, id: OverlayId) -> Option<&N> {
        self.position(id).map(|i| &self.nodes[i].1)
    }

    /// Nodes from bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (OverlayId, &N)> + '_ {
        self.nodes.iter().map(|(id, n)| (*id, n))
    }

    /// The topmost node.
    pub fn top(&self) -> Option<(OverlayId, &N)> {
        self.nodes.last().map(|(id, n)| (*id, n))
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the layer is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn position(&self, id: OverlayId) -> Option<usize> {
        self.nodes.iter().position(|(i, _)| *i == id)
    }
}
