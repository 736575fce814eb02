// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for routing: phases, outcomes, hits, parent lookups, and dispatch steps.
//!
//! ## Overview
//!
//! These types describe the routing protocol and its inputs/outputs.
//! They are referenced by the [`router`](crate::router) and the
//! [`dispatcher`](crate::dispatcher).

use alloc::vec::Vec;

/// Phases of event propagation.
///
/// Appears on each [`Dispatch`] item produced by
/// [`Router::route`](crate::router::Router::route).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Parent-to-target traversal.
    Capture,
    /// Target node.
    Target,
    /// Target-to-parent traversal.
    Bubble,
}

/// Handler outcome controlling propagation.
///
/// Returned by [`InputHandler`](crate::dispatcher::InputHandler) callbacks for
/// down and up events.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Outcome {
    /// Continue within the current phase.
    #[default]
    Continue,
    /// Stop propagation within the current phase.
    Stop,
    /// Stop and claim the event. A claimed down captures the pointer.
    StopAndConsume,
}

/// A candidate widget under a pointer.
///
/// Typically produced by the host's hit test. Only the nearest candidate is routed.
#[derive(Clone, Debug, PartialEq)]
pub struct Hit<K> {
    /// Node key associated with the hit.
    pub node: K,
    /// Optional root→target path; if absent, the router may consult [`ParentLookup`] to derive one.
    pub path: Option<Vec<K>>,
    /// Stacking order; higher is nearer to the user.
    pub z: i32,
}

impl<K> Hit<K> {
    /// A hit with no precomputed path.
    pub fn new(node: K, z: i32) -> Self {
        Self {
            node,
            path: None,
            z,
        }
    }

    /// A hit with an explicit root→target path.
    pub fn with_path(node: K, path: Vec<K>, z: i32) -> Self {
        Self {
            node,
            path: Some(path),
            z,
        }
    }
}

/// Look up the parent of a node to reconstruct a root→target path for propagation.
///
/// The [router](crate::router::Router) consults this when a [`Hit::path`] is absent, if you
/// construct it via [`Router::with_parent`](crate::router::Router::with_parent).
pub trait ParentLookup<K> {
    /// Returns the parent of `node`, or `None` if `node` is a root.
    fn parent_of(&self, node: &K) -> Option<K>;
}

/// A parent provider for flat widget sets: every node is a root.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoParent;

impl<K> ParentLookup<K> for NoParent {
    #[inline]
    fn parent_of(&self, _node: &K) -> Option<K> {
        None
    }
}

/// A single dispatch step.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Dispatch<K> {
    /// Propagation phase for this step.
    pub phase: Phase,
    /// Node receiving this step.
    pub node: K,
}
