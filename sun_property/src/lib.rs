// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sun Property: observable values and emitters for headless UI models.
//!
//! ## Overview
//!
//! Widget models in Sun publish their state through [`Property`] values and
//! announce activations through an [`Emitter`]. Views and other models observe
//! them without knowing who owns them.
//!
//! - [`Property::link`] invokes the observer **immediately** with the current value
//!   (the old value is `None`), then again after each change. Views rely on this to
//!   render their initial state without a separate code path.
//! - [`Property::lazy_link`] only observes subsequent changes.
//! - [`Property::set`] notifies only when the new value differs from the stored one.
//! - Observers are invoked synchronously, in link order, from a snapshot of the
//!   observer list. An observer may link, unlink, or set the property while it runs,
//!   and this does not disturb the notification in progress.
//!
//! Linking returns a [`Subscription`]; dropping it unlinks the observer, and
//! [`Subscription::persist`] keeps it attached for the life of the property.
//!
//! ## Minimal example
//!
//! ```
//! use core::cell::RefCell;
//! use std::rc::Rc;
//! use sun_property::Property;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let count = Property::new(1_u32);
//! let log = seen.clone();
//! let _sub = count.link(move |new, old| log.borrow_mut().push((*new, old.copied())));
//! count.set(2);
//! count.set(2); // unchanged, no notification
//! assert_eq!(*seen.borrow(), vec![(1, None), (2, Some(1))]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Everything here is single-threaded
//! (`Rc`/`RefCell`), which matches the event-dispatch model of the toolkit.

#![no_std]

extern crate alloc;

pub mod emitter;
pub mod property;

pub use emitter::{Emitter, Listener};
pub use property::{Property, ReadOnlyProperty, Subscription};
