// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless combo box.
//!
//! The combo box is a [`ButtonModel`] whose firing toggles an observable
//! `list_visible` flag. The popup list lives on an [`OverlayLayer`] passed in by
//! the host; [`ComboBoxModel::sync_overlay`] adds or removes it to match the flag.

use alloc::vec::Vec;
use core::cell::Cell;
use core::fmt;

use sun_button::{ButtonModel, ButtonOptions};
use sun_property::{Listener, Property, Subscription};

use crate::layer::{OverlayId, OverlayLayer};

/// Why a combo box could not be built or updated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ComboBoxError {
    /// No items were given.
    #[error("combo box needs at least one item")]
    Empty,
    /// The property holds a value that is not one of the items.
    #[error("combo box value is not one of its items")]
    UnknownValue,
    /// [`ComboBoxModel::select`] was given an index past the end.
    #[error("item index {index} out of range for {len} items")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of items.
        len: usize,
    },
}

/// Selection of one value from a fixed list, via a popup.
pub struct ComboBoxModel<T> {
    button: ButtonModel,
    items: Vec<T>,
    value: Property<T>,
    list_visible: Property<bool>,
    popup: Cell<Option<OverlayId>>,
    _toggle: Listener<()>,
    _enabled_link: Subscription,
}

impl<T: Clone + PartialEq + fmt::Debug + 'static> fmt::Debug for ComboBoxModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboBoxModel")
            .field("button", &self.button)
            .field("items", &self.items)
            .field("value", &self.value)
            .field("list_visible", &self.list_visible.get())
            .field("popup", &self.popup.get())
            .finish_non_exhaustive()
    }
}

impl<T: Clone + PartialEq + 'static> ComboBoxModel<T> {
    /// Create a combo box over `items` that edits `value`.
    pub fn new(
        value: Property<T>,
        items: impl IntoIterator<Item = T>,
        options: ButtonOptions,
    ) -> Result<Self, ComboBoxError> {
        let items: Vec<T> = items.into_iter().collect();
        if items.is_empty() {
            return Err(ComboBoxError::Empty);
        }
        if !value.with(|v| items.contains(v)) {
            return Err(ComboBoxError::UnknownValue);
        }
        let button = ButtonModel::new(options);
        let list_visible = Property::new(false);
        let visible = list_visible.clone();
        let toggle = button.on_fire(move || {
            visible.set(!visible.get());
        });
        let visible = list_visible.clone();
        let enabled_link = button.enabled_property().lazy_link(move |enabled, _| {
            if !*enabled {
                visible.set(false);
            }
        });
        Ok(Self {
            button,
            items,
            value,
            list_visible,
            popup: Cell::new(None),
            _toggle: toggle,
            _enabled_link: enabled_link,
        })
    }

    /// The button that opens and closes the list.
    pub fn button(&self) -> &ButtonModel {
        &self.button
    }

    /// The items, in display order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The edited property.
    pub fn value(&self) -> &Property<T> {
        &self.value
    }

    /// Whether the popup list should be showing.
    pub fn list_visible(&self) -> &Property<bool> {
        &self.list_visible
    }

    /// Index of the current value.
    pub fn selected_index(&self) -> Option<usize> {
        self.value.with(|v| self.items.iter().position(|i| i == v))
    }

    /// Choose item `index` and close the list.
    pub fn select(&self, index: usize) -> Result<(), ComboBoxError> {
        let item = self
            .items
            .get(index)
            .ok_or(ComboBoxError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })?;
        self.value.set(item.clone());
        self.list_visible.set(false);
        Ok(())
    }

    /// Open the list and put `popup` on top of `layer`.
    pub fn show_list<N>(&self, layer: &mut OverlayLayer<N>, popup: N) {
        if !self.button.enabled() {
            return;
        }
        self.list_visible.set(true);
        self.sync_overlay(layer, || popup);
    }

    /// Close the list and take its popup off `layer`.
    ///
    /// Nodes on `layer` that are not this combo box's popup are left alone.
    pub fn hide_list<N>(&self, layer: &mut OverlayLayer<N>) {
        self.list_visible.set(false);
        if let Some(id) = self.popup.get()
            && layer.remove(id).is_some()
        {
            self.popup.set(None);
        }
    }

    /// Make `layer` match [`list_visible`](Self::list_visible), building the popup
    /// with `popup` only when it has to be added.
    ///
    /// Pass the layer the popup was shown on. Overlay ids never match across
    /// layers, so another layer's nodes are never moved or removed.
    pub fn sync_overlay<N>(&self, layer: &mut OverlayLayer<N>, popup: impl FnOnce() -> N) {
        let shown = self.popup.get().filter(|id| layer.contains(*id));
        match (self.list_visible.get(), shown) {
            (true, None) => self.popup.set(Some(layer.add(popup()))),
            (true, Some(id)) => {
                layer.move_to_front(id);
            }
            (false, Some(id)) => {
                layer.remove(id);
                self.popup.set(None);
            }
            (false, None) => {}
        }
    }

    /// Overlay id of the popup, while it is on a layer.
    pub fn popup(&self) -> Option<OverlayId> {
        self.popup.get()
    }
}
