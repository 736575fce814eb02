// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toggle buttons and checkboxes.

use alloc::rc::Rc;

use sun_property::{Listener, Property};

use crate::model::{ButtonModel, ButtonOptions};

/// A button that swaps a property between two values each time it fires.
///
/// The property stays the source of truth: setting it from elsewhere is
/// reflected by [`is_on`](Self::is_on), and the next press toggles from there.
/// A value that is neither `on` nor `off` toggles to `on`.
#[derive(Debug)]
pub struct ToggleButtonModel<T> {
    button: ButtonModel,
    value: Property<T>,
    on: T,
}

impl<T: Clone + PartialEq + 'static> ToggleButtonModel<T> {
    /// Create a toggle over `value`.
    pub fn new(value: Property<T>, off: T, on: T, options: ButtonOptions) -> Self {
        let button = ButtonModel::new(options);
        let target = value.clone();
        let on_value = on.clone();
        let toggle: Listener<()> = Rc::new(move |_| {
            let next = if target.with(|v| *v == on_value) {
                off.clone()
            } else {
                on_value.clone()
            };
            target.set(next);
        });
        button.add_listener(&toggle);
        Self { button, value, on }
    }

    /// The underlying button.
    pub fn button(&self) -> &ButtonModel {
        &self.button
    }

    /// The toggled property.
    pub fn value(&self) -> &Property<T> {
        &self.value
    }

    /// Whether the property currently holds the `on` value.
    pub fn is_on(&self) -> bool {
        self.value.with(|v| *v == self.on)
    }

    /// Toggle as if the button had been clicked.
    pub fn toggle(&self) {
        self.button.fire();
    }
}

/// A checkbox: a toggle between `false` and `true`.
pub fn checkbox(checked: Property<bool>, options: ButtonOptions) -> ToggleButtonModel<bool> {
    ToggleButtonModel::new(checked, false, true, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InteractionState;
    use sun_responder::pointer::PointerId;

    const P: PointerId = PointerId(3);

    fn click(button: &ButtonModel) {
        button.on_enter(P);
        button.on_down(P);
        button.on_up(P);
        button.on_exit(P);
    }

    #[test]
    fn each_click_swaps_the_value() {
        let mode = Property::new("day");
        let toggle = ToggleButtonModel::new(mode.clone(), "day", "night", ButtonOptions::default());
        assert!(!toggle.is_on());
        click(toggle.button());
        assert_eq!(mode.get(), "night");
        assert!(toggle.is_on());
        click(toggle.button());
        assert_eq!(mode.get(), "day");
    }

    #[test]
    fn external_changes_are_respected() {
        let checked = Property::new(false);
        let cb = checkbox(checked.clone(), ButtonOptions::default());
        checked.set(true);
        assert!(cb.is_on());
        cb.toggle();
        assert!(!checked.get());
    }

    #[test]
    fn unknown_value_toggles_on() {
        let level = Property::new(7_u8);
        let toggle = ToggleButtonModel::new(level.clone(), 0, 1, ButtonOptions::default());
        toggle.toggle();
        assert_eq!(level.get(), 1);
    }

    #[test]
    fn disabled_checkbox_does_not_toggle() {
        let checked = Property::new(false);
        let cb = checkbox(checked.clone(), ButtonOptions::default());
        cb.button().set_enabled(false);
        click(cb.button());
        assert!(!checked.get());
        assert_eq!(cb.button().state(), InteractionState::Disabled);
    }
}
