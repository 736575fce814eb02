// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sun Overlay: explicit overlay layers and popup widgets.
//!
//! There is no global "top pane". A host creates an [`OverlayLayer`] and passes
//! it, by `&mut`, to anything that wants to show content above the scene. That
//! keeps ownership visible and lets several windows or tests keep separate layers.
//!
//! ```
//! use sun_button::ButtonOptions;
//! use sun_overlay::{ComboBoxModel, OverlayLayer};
//! use sun_property::Property;
//!
//! let mut layer = OverlayLayer::new();
//! let units = Property::new("m");
//! let combo = ComboBoxModel::new(units.clone(), ["m", "cm", "mm"], ButtonOptions::default()).unwrap();
//!
//! combo.show_list(&mut layer, "unit list");
//! assert_eq!(layer.len(), 1);
//!
//! combo.select(1).unwrap();
//! combo.sync_overlay(&mut layer, || "unit list");
//! assert_eq!(units.get(), "cm");
//! assert!(layer.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod combo_box;
pub mod layer;

pub use combo_box::{ComboBoxError, ComboBoxModel};
pub use layer::{OverlayId, OverlayLayer};
