// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sun Button: headless button models.
//!
//! ## Overview
//!
//! Every Sun button is the same small state machine. The [`ButtonModel`] consumes
//! pointer enter/exit/down/up signals plus an enabled flag. It derives an
//! [`InteractionState`] (`Idle`, `Over`, `Pressed`, `Disabled`) and fires
//! listeners when an interaction completes. The button kinds differ only in
//! what firing does:
//!
//! - push buttons: a plain [`ButtonModel`] with listeners;
//! - [`ToggleButtonModel`] and [`checkbox`]: swap a property between two values;
//! - [`RadioButtonGroup`]: set a shared property to the pressed member's value;
//! - [`MomentaryButtonModel`]: hold a property "on" while pressed.
//!
//! ## Model and view
//!
//! Rendering is kept out of the model. A [`ButtonView`] observes the model's
//! interaction state and picks the content to display from a [`ButtonContent`].
//! [`Button`] composes the two by value.
//!
//! ## Input
//!
//! [`ButtonInput`] adapts a table of buttons to
//! [`sun_responder::dispatcher::InputHandler`], so a
//! [`Dispatcher`](sun_responder::dispatcher::Dispatcher) can drive them from raw pointer events.
//!
//! ## Example
//!
//! ```
//! use sun_button::{ButtonOptions, RadioButtonGroup};
//! use sun_property::Property;
//! use sun_responder::pointer::PointerId;
//!
//! let speed = Property::new("normal");
//! let group = RadioButtonGroup::new(speed.clone(), ["slow", "normal", "fast"]).unwrap();
//!
//! let finger = PointerId(3);
//! let fast = group.button(2).unwrap();
//! fast.on_enter(finger);
//! fast.on_down(finger);
//! assert_eq!(speed.get(), "fast");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod input;
pub mod interaction;
pub mod model;
pub mod momentary;
pub mod radio;
pub mod toggle;
pub mod view;

pub use input::ButtonInput;
pub use interaction::InteractionState;
pub use model::{ButtonModel, ButtonOptions};
pub use momentary::MomentaryButtonModel;
pub use radio::{RadioButtonGroup, RadioGroupError};
pub use toggle::{ToggleButtonModel, checkbox};
pub use view::{Button, ButtonContent, ButtonView, StateNodes};
