// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radio button groups.
//!
//! A group owns one [`ButtonModel`] per distinct value. All members share one
//! property, and firing a member sets the property to that member's value.
//! Members fire on down by default, so selection follows the press.

use alloc::rc::Rc;
use alloc::vec::Vec;

use sun_property::{Listener, Property};

use crate::model::{ButtonModel, ButtonOptions};

/// Why a [`RadioButtonGroup`] could not be built.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RadioGroupError {
    /// The group has no members.
    #[error("a radio button group needs at least one member")]
    Empty,
    /// Two members carry the same value.
    #[error("radio button {index} repeats the value of an earlier button")]
    DuplicateValue {
        /// Index of the repeated member.
        index: usize,
    },
    /// The property's current value matches no member.
    #[error("the selected value does not match any radio button")]
    UnknownSelection,
}

struct Member<T> {
    value: T,
    button: ButtonModel,
}

/// A set of mutually exclusive buttons bound to one property.
pub struct RadioButtonGroup<T> {
    selected: Property<T>,
    members: Vec<Member<T>>,
}

impl<T: core::fmt::Debug> core::fmt::Debug for RadioButtonGroup<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RadioButtonGroup")
            .field("selected", &self.selected)
            .field(
                "values",
                &self.members.iter().map(|m| &m.value).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> RadioButtonGroup<T> {
    /// Build a group whose members fire on down.
    pub fn new(
        selected: Property<T>,
        values: impl IntoIterator<Item = T>,
    ) -> Result<Self, RadioGroupError> {
        Self::with_options(
            selected,
            values,
            ButtonOptions::default().with_fire_on_down(true),
        )
    }

    /// Build a group, giving every member a button configured by `options`.
    ///
    /// Passing an enabled property in `options` enables and disables the whole group.
    pub fn with_options(
        selected: Property<T>,
        values: impl IntoIterator<Item = T>,
        options: ButtonOptions,
    ) -> Result<Self, RadioGroupError> {
        let mut members: Vec<Member<T>> = Vec::new();
        for (index, value) in values.into_iter().enumerate() {
            if members.iter().any(|m| m.value == value) {
                return Err(RadioGroupError::DuplicateValue { index });
            }
            let button = ButtonModel::new(options.clone());
            let target = selected.clone();
            let member_value = value.clone();
            let select: Listener<()> = Rc::new(move |_| {
                target.set(member_value.clone());
            });
            button.add_listener(&select);
            members.push(Member { value, button });
        }
        if members.is_empty() {
            return Err(RadioGroupError::Empty);
        }
        if !selected.with(|v| members.iter().any(|m| m.value == *v)) {
            return Err(RadioGroupError::UnknownSelection);
        }
        Ok(Self { selected, members })
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`; a group has at least one member.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The shared property.
    pub fn selected(&self) -> &Property<T> {
        &self.selected
    }

    /// The value of member `index`.
    pub fn value(&self, index: usize) -> Option<&T> {
        self.members.get(index).map(|m| &m.value)
    }

    /// The button of member `index`.
    pub fn button(&self, index: usize) -> Option<&ButtonModel> {
        self.members.get(index).map(|m| &m.button)
    }

    /// Index of the member matching the property, if any.
    ///
    /// `None` only if the property was set elsewhere to a value no member carries.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
            .with(|v| self.members.iter().position(|m| m.value == *v))
    }

    /// Whether member `index` is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_index() == Some(index)
    }

    /// Select member `index` as if it had been pressed. Out-of-range indices are ignored.
    pub fn select(&self, index: usize) {
        if let Some(m) = self.members.get(index) {
            m.button.fire();
        }
    }
}
