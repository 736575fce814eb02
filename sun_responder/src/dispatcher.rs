// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher: drive widget handlers from raw pointer events.
//!
//! The [`Dispatcher`] owns a [`Router`] and a [`HoverTracker`] and turns host pointer
//! events plus hit lists into handler calls:
//!
//! - [`Dispatcher::pointer_move`] updates hover and reports `exit`/`enter` transitions.
//! - [`Dispatcher::pointer_down`] updates hover, then walks the routed sequence calling
//!   `down`. A handler returning [`Outcome::StopAndConsume`] claims the event, and
//!   the pointer is captured by the claiming node until its up.
//! - [`Dispatcher::pointer_up`] walks the (captured) sequence calling `up`, then releases capture.
//! - [`Dispatcher::pointer_leave`] forgets a pointer (touch lifted, mouse left the surface).
//!
//! Within a sequence, [`Outcome::Stop`] skips the remaining steps of the current
//! phase and [`Outcome::StopAndConsume`] aborts the remaining phases.

use alloc::vec::Vec;

use crate::hover::{HoverEvent, HoverTracker, path_from_dispatch};
use crate::pointer::PointerEvent;
use crate::router::Router;
use crate::types::{Dispatch, Hit, NoParent, Outcome, ParentLookup, Phase};

/// Widget-side callbacks invoked by the [`Dispatcher`].
///
/// Hover transitions are notifications; down and up steps return an [`Outcome`].
pub trait InputHandler<K> {
    /// `event`'s pointer started hovering `node`.
    fn enter(&mut self, node: K, event: &PointerEvent) {
        let _ = (node, event);
    }

    /// `event`'s pointer stopped hovering `node`.
    fn exit(&mut self, node: K, event: &PointerEvent) {
        let _ = (node, event);
    }

    /// A pointer was pressed; called once per dispatch step.
    fn down(&mut self, node: K, phase: Phase, event: &PointerEvent) -> Outcome {
        let _ = (node, phase, event);
        Outcome::Continue
    }

    /// A pointer was released; called once per dispatch step.
    fn up(&mut self, node: K, phase: Phase, event: &PointerEvent) -> Outcome {
        let _ = (node, phase, event);
        Outcome::Continue
    }
}

/// Result of [`Dispatcher::pointer_down`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DownResult<K> {
    /// A handler claimed the down at `K`; the pointer is now captured by it.
    Claimed(K),
    /// No handler claimed the event. Background listeners may act on it.
    Unclaimed,
}

/// Routes pointer events into an [`InputHandler`].
pub struct Dispatcher<K: Copy + Eq, P: ParentLookup<K> = NoParent> {
    router: Router<K, P>,
    hover: HoverTracker<K>,
}

impl<K: Copy + Eq + core::fmt::Debug, P: ParentLookup<K>> core::fmt::Debug for Dispatcher<K, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("router", &self.router)
            .field("hover", &self.hover)
            .finish()
    }
}

impl<K: Copy + Eq, P: ParentLookup<K>> Dispatcher<K, P> {
    /// Create a dispatcher around `router`.
    pub fn new(router: Router<K, P>) -> Self {
        Self {
            router,
            hover: HoverTracker::new(),
        }
    }

    /// The router, e.g. to inspect capture.
    pub fn router(&self) -> &Router<K, P> {
        &self.router
    }

    /// Mutable router access, e.g. to change the scope filter.
    pub fn router_mut(&mut self) -> &mut Router<K, P> {
        &mut self.router
    }

    /// Current hover state.
    pub fn hover(&self) -> &HoverTracker<K> {
        &self.hover
    }

    /// Update hover for a moving pointer.
    pub fn pointer_move(
        &mut self,
        event: &PointerEvent,
        hits: &[Hit<K>],
        handler: &mut impl InputHandler<K>,
    ) {
        let path = path_from_dispatch(&self.router.route_hits(hits));
        let transitions = self.hover.update(event.pointer, &path);
        deliver_hover(&transitions, event, handler);
    }

    /// Dispatch a pointer press.
    pub fn pointer_down(
        &mut self,
        event: &PointerEvent,
        hits: &[Hit<K>],
        handler: &mut impl InputHandler<K>,
    ) -> DownResult<K> {
        // Touch pointers have no prior move; make sure hover is current before the press.
        self.pointer_move(event, hits, handler);
        let seq = self.router.route(event.pointer, hits);
        match run_dispatch(&seq, |d| handler.down(d.node, d.phase, event)) {
            Some(node) => {
                self.router.capture(event.pointer, node);
                DownResult::Claimed(node)
            }
            None => DownResult::Unclaimed,
        }
    }

    /// Dispatch a pointer release. Returns `true` if a handler claimed it.
    pub fn pointer_up(
        &mut self,
        event: &PointerEvent,
        hits: &[Hit<K>],
        handler: &mut impl InputHandler<K>,
    ) -> bool {
        let seq = self.router.route(event.pointer, hits);
        let claimed = run_dispatch(&seq, |d| handler.up(d.node, d.phase, event)).is_some();
        self.router.release(event.pointer);
        claimed
    }

    /// Forget a pointer entirely, leaving every node it hovered.
    pub fn pointer_leave(&mut self, event: &PointerEvent, handler: &mut impl InputHandler<K>) {
        self.router.release(event.pointer);
        let transitions = self.hover.remove_pointer(event.pointer);
        deliver_hover(&transitions, event, handler);
    }
}

fn deliver_hover<K: Copy>(
    transitions: &[HoverEvent<K>],
    event: &PointerEvent,
    handler: &mut impl InputHandler<K>,
) {
    for t in transitions {
        match *t {
            HoverEvent::Enter(node) => handler.enter(node, event),
            HoverEvent::Leave(node) => handler.exit(node, event),
        }
    }
}

/// Walk a dispatch sequence, honoring stop rules.
///
/// Returns the node that consumed the event, if any.
fn run_dispatch<K: Copy>(
    seq: &[Dispatch<K>],
    mut deliver: impl FnMut(&Dispatch<K>) -> Outcome,
) -> Option<K> {
    let mut i = 0;
    while i < seq.len() {
        let phase = seq[i].phase;
        // Process contiguous entries for the same phase.
        while i < seq.len() && seq[i].phase == phase {
            match deliver(&seq[i]) {
                Outcome::Continue => {}
                Outcome::Stop => {
                    // Skip remaining entries in this phase.
                    while i + 1 < seq.len() && seq[i + 1].phase == phase {
                        i += 1;
                    }
                }
                Outcome::StopAndConsume => return Some(seq[i].node),
            }
            i += 1;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::PointerId;
    use alloc::vec;
    use kurbo::Point;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Enter(u32),
        Exit(u32),
        Down(u32, Phase),
        Up(u32, Phase),
    }

    /// Records calls; claims downs and ups at the target of `claim_at`.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
        claim_at: Option<u32>,
        stop_capture_at: Option<u32>,
    }

    impl Recorder {
        fn outcome(&self, node: u32, phase: Phase) -> Outcome {
            if self.stop_capture_at == Some(node) && phase == Phase::Capture {
                Outcome::Stop
            } else if self.claim_at == Some(node) && phase == Phase::Target {
                Outcome::StopAndConsume
            } else {
                Outcome::Continue
            }
        }
    }

    impl InputHandler<u32> for Recorder {
        fn enter(&mut self, node: u32, _: &PointerEvent) {
            self.calls.push(Call::Enter(node));
        }
        fn exit(&mut self, node: u32, _: &PointerEvent) {
            self.calls.push(Call::Exit(node));
        }
        fn down(&mut self, node: u32, phase: Phase, _: &PointerEvent) -> Outcome {
            self.calls.push(Call::Down(node, phase));
            self.outcome(node, phase)
        }
        fn up(&mut self, node: u32, phase: Phase, _: &PointerEvent) -> Outcome {
            self.calls.push(Call::Up(node, phase));
            self.outcome(node, phase)
        }
    }

    fn mouse() -> PointerEvent {
        PointerEvent::mouse(PointerId(0), Point::ZERO)
    }

    #[test]
    fn move_reports_hover_transitions() {
        let mut d: Dispatcher<u32> = Dispatcher::new(Router::new());
        let mut r = Recorder::default();
        d.pointer_move(&mouse(), &[Hit::with_path(2, vec![1, 2], 0)], &mut r);
        d.pointer_move(&mouse(), &[Hit::with_path(3, vec![1, 3], 0)], &mut r);
        assert_eq!(
            r.calls,
            vec![
                Call::Enter(1),
                Call::Enter(2),
                Call::Exit(2),
                Call::Enter(3)
            ]
        );
    }

    #[test]
    fn claimed_down_captures_until_up() {
        let mut d: Dispatcher<u32> = Dispatcher::new(Router::new());
        let mut r = Recorder {
            claim_at: Some(2),
            ..Recorder::default()
        };
        let on_button = [Hit::with_path(2, vec![1, 2], 0)];
        let result = d.pointer_down(&mouse(), &on_button, &mut r);
        assert_eq!(result, DownResult::Claimed(2));
        assert_eq!(d.router().captured(PointerId(0)), Some(2));
        assert!(!r.calls.contains(&Call::Down(2, Phase::Bubble)));

        // Released elsewhere: still routed to the captured node.
        r.calls.clear();
        assert!(d.pointer_up(&mouse(), &[Hit::new(9, 0)], &mut r));
        assert!(r.calls.contains(&Call::Up(2, Phase::Target)));
        assert_eq!(d.router().captured(PointerId(0)), None);
    }

    #[test]
    fn unclaimed_down_walks_every_phase() {
        let mut d: Dispatcher<u32> = Dispatcher::new(Router::new());
        let mut r = Recorder::default();
        let result = d.pointer_down(&mouse(), &[Hit::with_path(2, vec![1, 2], 0)], &mut r);
        assert_eq!(result, DownResult::Unclaimed);
        let downs: Vec<Call> = r
            .calls
            .into_iter()
            .filter(|c| matches!(c, Call::Down(..)))
            .collect();
        assert_eq!(
            downs,
            vec![
                Call::Down(1, Phase::Capture),
                Call::Down(2, Phase::Capture),
                Call::Down(2, Phase::Target),
                Call::Down(2, Phase::Bubble),
                Call::Down(1, Phase::Bubble),
            ]
        );
    }

    #[test]
    fn stop_skips_rest_of_phase_only() {
        let mut d: Dispatcher<u32> = Dispatcher::new(Router::new());
        let mut r = Recorder {
            stop_capture_at: Some(1),
            ..Recorder::default()
        };
        let _ = d.pointer_down(&mouse(), &[Hit::with_path(2, vec![1, 2], 0)], &mut r);
        assert!(!r.calls.contains(&Call::Down(2, Phase::Capture)));
        assert!(r.calls.contains(&Call::Down(2, Phase::Target)));
    }

    #[test]
    fn down_on_empty_space_is_unclaimed() {
        let mut d: Dispatcher<u32> = Dispatcher::new(Router::new());
        let mut r = Recorder::default();
        assert_eq!(
            d.pointer_down(&mouse(), &[], &mut r),
            DownResult::Unclaimed
        );
        assert!(r.calls.is_empty());
    }

    #[test]
    fn leave_exits_hovered_nodes() {
        let mut d: Dispatcher<u32> = Dispatcher::new(Router::new());
        let mut r = Recorder::default();
        d.pointer_move(&mouse(), &[Hit::with_path(2, vec![1, 2], 0)], &mut r);
        r.calls.clear();
        d.pointer_leave(&mouse(), &mut r);
        assert_eq!(r.calls, vec![Call::Exit(2), Call::Exit(1)]);
    }
}
