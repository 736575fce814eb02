// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sun Responder: deterministic, `no_std` pointer routing for UI widgets.
//!
//! ## Overview
//!
//! This crate turns host pointer events into the enter/exit/down/up callbacks that
//! widget models (buttons, drag targets) consume. It does not perform hit testing.
//! Feed it [`Hit`](crate::types::Hit) candidates from your scene, and it picks a
//! target and emits a capture → target → bubble sequence you can dispatch.
//!
//! ## Pointers
//!
//! Every event carries a [`PointerId`](crate::pointer::PointerId) and a
//! [`PointerKind`](crate::pointer::PointerKind). Hover and capture are tracked per pointer,
//! so a mouse and several touch contacts can interact with different widgets at once.
//!
//! ## Ordering
//!
//! Candidates are ranked by z; higher is nearer. Equal‑z ties are stable and the router
//! selects the last.
//!
//! ## Pointer capture
//!
//! A pointer captured by a node routes to that node regardless of fresh hits, until
//! released. The [`Dispatcher`](crate::dispatcher::Dispatcher) captures a pointer when a
//! handler claims its down event and releases it on up. Releasing over another widget
//! still reaches the pressed widget, which can then decide not to fire.
//!
//! ## Workflow
//!
//! 1) Hit test in your scene and build [`Hit`](crate::types::Hit) values.
//! 2) Call the [`Dispatcher`](crate::dispatcher::Dispatcher) for move/down/up/leave.
//! 3) Implement [`InputHandler`](crate::dispatcher::InputHandler) to forward each call to
//!    the widget model behind the node.
//! 4) A [`DownResult::Unclaimed`](crate::dispatcher::DownResult::Unclaimed) down can be
//!    offered to background listeners such as a closest-drag selector.
//!
//! ```
//! use kurbo::Point;
//! use sun_responder::dispatcher::{Dispatcher, DownResult, InputHandler};
//! use sun_responder::pointer::{PointerEvent, PointerId};
//! use sun_responder::router::Router;
//! use sun_responder::types::{Hit, Outcome, Phase};
//!
//! struct Claimer;
//! impl InputHandler<u32> for Claimer {
//!     fn down(&mut self, _node: u32, phase: Phase, _event: &PointerEvent) -> Outcome {
//!         if phase == Phase::Target { Outcome::StopAndConsume } else { Outcome::Continue }
//!     }
//! }
//!
//! let mut dispatcher: Dispatcher<u32> = Dispatcher::new(Router::new());
//! let press = PointerEvent::mouse(PointerId(0), Point::new(4.0, 4.0));
//! let hits = [Hit::new(7, 0)];
//! assert_eq!(dispatcher.pointer_down(&press, &hits, &mut Claimer), DownResult::Claimed(7));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dispatcher;
pub mod hover;
pub mod pointer;
pub mod router;
pub mod types;
