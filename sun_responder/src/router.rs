// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Router implementation.
//!
//! ## Overview
//!
//! Picks one target from the hits under a pointer, reconstructs its path, and
//! emits a capture → target → bubble sequence for it.
//!
//! ## Target Selection
//!
//! - Candidates are ranked by [`Hit::z`]; higher is nearer.
//! - Equal‑z ties are stable and the last wins.
//! - [`Router::set_scope`] filters candidates before ranking (e.g. pickability).
//!
//! ## Pointer Capture
//!
//! Capture is tracked per [`PointerId`]. While a pointer is captured, [`Router::route`]
//! targets the captured node regardless of fresh hits, using the matching hit's path
//! when one exists. Capture bypasses scope filtering. Other pointers route normally.
//!
//! ## See Also
//!
//! [`hover`](crate::hover) for hover transitions derived from the dispatch sequence.

use alloc::vec::Vec;

use crate::pointer::PointerId;
use crate::types::{Dispatch, Hit, NoParent, ParentLookup, Phase};

/// Deterministic pointer router.
///
/// ## Usage
///
/// - Construct with [`Router::new`] when hits always carry a full path, or with
///   [`Router::with_parent`] to enable path reconstruction via a [`ParentLookup`].
/// - Call [`Router::route`] per input event to produce the dispatch sequence, or
///   [`Router::route_hits`] to ignore capture (used for hover).
/// - Use [`Router::capture`] / [`Router::release`] to pin a pointer to a node
///   between down and up.
pub struct Router<K, P: ParentLookup<K> = NoParent> {
    parent: P,
    scope: Option<fn(&K) -> bool>,
    captures: Vec<(PointerId, K)>,
}

impl<K: Copy + Eq + core::fmt::Debug, P: ParentLookup<K>> core::fmt::Debug for Router<K, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Router")
            .field("captures", &self.captures)
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq, P: ParentLookup<K> + Default> Router<K, P> {
    /// Create a router with a default parent lookup.
    pub fn new() -> Self {
        Self::with_parent(P::default())
    }
}

impl<K: Copy + Eq, P: ParentLookup<K> + Default> Default for Router<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq, P: ParentLookup<K>> Router<K, P> {
    /// Create a router with an explicit parent lookup provider.
    pub fn with_parent(parent: P) -> Self {
        Self {
            parent,
            scope: None,
            captures: Vec::new(),
        }
    }

    /// Set an optional scope filter; only nodes that satisfy the predicate are considered.
    pub fn set_scope(&mut self, scope: Option<fn(&K) -> bool>) {
        self.scope = scope;
    }

    /// Route all subsequent events from `pointer` to `node`.
    pub fn capture(&mut self, pointer: PointerId, node: K) {
        tracing::debug!(?pointer, "pointer captured");
        match self.captures.iter_mut().find(|(p, _)| *p == pointer) {
            Some(entry) => entry.1 = node,
            None => self.captures.push((pointer, node)),
        }
    }

    /// Release the capture of `pointer`, returning the node it was captured by.
    pub fn release(&mut self, pointer: PointerId) -> Option<K> {
        let i = self.captures.iter().position(|(p, _)| *p == pointer)?;
        Some(self.captures.swap_remove(i).1)
    }

    /// The node `pointer` is captured by, if any.
    pub fn captured(&self, pointer: PointerId) -> Option<K> {
        self.captures
            .iter()
            .find(|(p, _)| *p == pointer)
            .map(|(_, n)| *n)
    }

    /// Produce a propagation sequence for an event from `pointer`.
    ///
    /// Honors capture; see the [module docs](self).
    pub fn route(&self, pointer: PointerId, hits: &[Hit<K>]) -> Vec<Dispatch<K>> {
        if let Some(cap) = self.captured(pointer) {
            // Prefer the last hit for the captured node, for its path.
            let path = match hits.iter().rev().find(|h| h.node == cap) {
                Some(Hit {
                    path: Some(path), ..
                }) if !path.is_empty() => path.clone(),
                _ => self.reconstruct_path(cap),
            };
            return emit_path(&path);
        }
        self.route_hits(hits)
    }

    /// Produce a propagation sequence for the nearest hit, ignoring capture.
    pub fn route_hits(&self, hits: &[Hit<K>]) -> Vec<Dispatch<K>> {
        // Single pass; `>=` keeps the last of equal-z candidates.
        let mut best: Option<&Hit<K>> = None;
        for h in hits {
            if let Some(f) = self.scope
                && !f(&h.node)
            {
                continue;
            }
            if best.is_none_or(|b| h.z >= b.z) {
                best = Some(h);
            }
        }

        let Some(best) = best else {
            return Vec::new();
        };
        match &best.path {
            Some(path) if !path.is_empty() => emit_path(path),
            _ => emit_path(&self.reconstruct_path(best.node)),
        }
    }

    fn reconstruct_path(&self, target: K) -> Vec<K> {
        let mut out = Vec::new();
        let mut cur = target;
        // Collect to root; caller ensures acyclic ancestry.
        loop {
            out.push(cur);
            match self.parent.parent_of(&cur) {
                Some(p) => cur = p,
                None => break,
            }
        }
        out.reverse();
        out
    }
}

fn emit_path<K: Copy>(path: &[K]) -> Vec<Dispatch<K>> {
    let Some(&target) = path.last() else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(path.len() * 2 + 1);
    out.extend(path.iter().map(|&node| Dispatch {
        phase: Phase::Capture,
        node,
    }));
    out.push(Dispatch {
        phase: Phase::Target,
        node: target,
    });
    out.extend(path.iter().rev().map(|&node| Dispatch {
        phase: Phase::Bubble,
        node,
    }));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    struct Parents;
    impl ParentLookup<u32> for Parents {
        fn parent_of(&self, node: &u32) -> Option<u32> {
            match node {
                3 => Some(2),
                2 => Some(1),
                _ => None,
            }
        }
    }

    const P1: PointerId = PointerId(1);
    const P2: PointerId = PointerId(2);

    fn target_of(seq: &[Dispatch<u32>]) -> Option<u32> {
        seq.iter()
            .find(|d| d.phase == Phase::Target)
            .map(|d| d.node)
    }

    fn phases(seq: &[Dispatch<u32>]) -> Vec<(Phase, u32)> {
        seq.iter().map(|d| (d.phase, d.node)).collect()
    }

    #[test]
    fn simple_path_dispatch() {
        let router: Router<u32> = Router::new();
        let out = router.route(P1, &[Hit::with_path(3, vec![1, 2, 3], 10)]);
        assert_eq!(
            phases(&out),
            vec![
                (Phase::Capture, 1),
                (Phase::Capture, 2),
                (Phase::Capture, 3),
                (Phase::Target, 3),
                (Phase::Bubble, 3),
                (Phase::Bubble, 2),
                (Phase::Bubble, 1),
            ]
        );
    }

    #[test]
    fn parent_lookup_reconstructs_path() {
        let router: Router<u32, Parents> = Router::with_parent(Parents);
        let out = router.route(P1, &[Hit::new(3, 0)]);
        assert_eq!(out.len(), 7);
        assert_eq!(out[0].node, 1);
        assert_eq!(target_of(&out), Some(3));
    }

    #[test]
    fn higher_z_wins_and_ties_go_to_last() {
        let router: Router<u32> = Router::new();
        let hits = [Hit::new(1, 5), Hit::new(2, 9), Hit::new(3, 9)];
        assert_eq!(target_of(&router.route(P1, &hits)), Some(3));
        assert_eq!(target_of(&router.route(P1, &hits[..2])), Some(2));
    }

    #[test]
    fn no_hits_routes_nowhere() {
        let router: Router<u32> = Router::new();
        assert!(router.route(P1, &[]).is_empty());
    }

    #[test]
    fn scope_filter_selects_allowed_hit() {
        let mut router: Router<u32> = Router::new();
        router.set_scope(Some(|n: &u32| n % 2 == 0));
        let out = router.route(P1, &[Hit::new(1, 100), Hit::new(2, 50)]);
        assert_eq!(target_of(&out), Some(2));
    }

    #[test]
    fn capture_is_per_pointer() {
        let mut router: Router<u32, Parents> = Router::with_parent(Parents);
        router.capture(P1, 3);
        let hits = [Hit::new(9, 999)];
        let captured = router.route(P1, &hits);
        assert_eq!(
            phases(&captured),
            vec![
                (Phase::Capture, 1),
                (Phase::Capture, 2),
                (Phase::Capture, 3),
                (Phase::Target, 3),
                (Phase::Bubble, 3),
                (Phase::Bubble, 2),
                (Phase::Bubble, 1),
            ]
        );
        assert_eq!(target_of(&router.route(P2, &hits)), Some(9));
    }

    #[test]
    fn capture_prefers_hit_path_and_bypasses_scope() {
        let mut router: Router<u32> = Router::new();
        router.set_scope(Some(|n: &u32| n % 2 == 0));
        router.capture(P1, 7);
        let out = router.route(P1, &[Hit::new(7, 0), Hit::with_path(7, vec![4, 7], 0)]);
        assert_eq!(
            phases(&out),
            vec![
                (Phase::Capture, 4),
                (Phase::Capture, 7),
                (Phase::Target, 7),
                (Phase::Bubble, 7),
                (Phase::Bubble, 4),
            ]
        );
    }

    #[test]
    fn captured_hit_with_empty_path_still_reaches_capture_target() {
        let mut router: Router<u32, Parents> = Router::with_parent(Parents);
        router.capture(P1, 2);
        let out = router.route(P1, &[Hit::with_path(2, Vec::new(), 0)]);
        assert_eq!(
            phases(&out),
            vec![
                (Phase::Capture, 1),
                (Phase::Capture, 2),
                (Phase::Target, 2),
                (Phase::Bubble, 2),
                (Phase::Bubble, 1),
            ]
        );
    }

    #[test]
    fn route_hits_ignores_capture() {
        let mut router: Router<u32> = Router::new();
        router.capture(P1, 5);
        assert_eq!(target_of(&router.route_hits(&[Hit::new(6, 0)])), Some(6));
    }

    #[test]
    fn capture_can_be_released() {
        let mut router: Router<u32> = Router::new();
        router.capture(P1, 1);
        router.capture(P1, 2);
        assert_eq!(router.captured(P1), Some(2));
        assert_eq!(router.release(P1), Some(2));
        assert_eq!(router.release(P1), None);
        assert_eq!(target_of(&router.route(P1, &[Hit::new(3, 0)])), Some(3));
    }
}
