// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sun Drag: headless drag models.
//!
//! - [`ClosestDragSelector`] starts a drag on the registered [`DragTarget`] nearest an
//!   otherwise unclaimed down, within per-pointer-kind [`DragThresholds`].
//! - [`SliderModel`] maps a track onto a value range and updates a value property
//!   while its thumb is dragged.
//!
//! Both consume [`PointerEvent`](sun_responder::pointer::PointerEvent)s from
//! `sun_responder`, so they slot in behind a
//! [`Dispatcher`](sun_responder::dispatcher::Dispatcher).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod closest;
pub mod slider;

pub use closest::{ClosestDragSelector, DragTarget, DragThresholds};
pub use slider::{SliderError, SliderModel, SliderOptions, SliderRange};
