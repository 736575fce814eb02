// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Momentary buttons: "on" only while held.

use sun_property::{Property, Subscription};

use crate::interaction::InteractionState;
use crate::model::{ButtonModel, ButtonOptions};

/// A button that holds a property at `on` while pressed and `off` otherwise.
///
/// Because the value follows the interaction state, disabling the button
/// mid-press releases it.
#[derive(Debug)]
pub struct MomentaryButtonModel<T> {
    button: ButtonModel,
    value: Property<T>,
    _state_link: Subscription,
}

impl<T: Clone + PartialEq + 'static> MomentaryButtonModel<T> {
    /// Create a momentary button over `value`. The property is set to `off` immediately.
    pub fn new(value: Property<T>, off: T, on: T, options: ButtonOptions) -> Self {
        let button = ButtonModel::new(options);
        let target = value.clone();
        let state_link = button.interaction_state().link(move |state, _| {
            let next = match state {
                InteractionState::Pressed => on.clone(),
                _ => off.clone(),
            };
            target.set(next);
        });
        Self {
            button,
            value,
            _state_link: state_link,
        }
    }

    /// The underlying button.
    pub fn button(&self) -> &ButtonModel {
        &self.button
    }

    /// The driven property.
    pub fn value(&self) -> &Property<T> {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sun_responder::pointer::PointerId;

    const P: PointerId = PointerId(9);

    #[test]
    fn on_only_while_pressed() {
        let firing = Property::new(true);
        let m = MomentaryButtonModel::new(firing.clone(), false, true, ButtonOptions::default());
        assert!(!firing.get(), "initialized to off");
        m.button().on_enter(P);
        m.button().on_down(P);
        assert!(firing.get());
        m.button().on_up(P);
        assert!(!firing.get());
    }

    #[test]
    fn disabling_releases() {
        let firing = Property::new(false);
        let m = MomentaryButtonModel::new(firing.clone(), false, true, ButtonOptions::default());
        m.button().on_enter(P);
        m.button().on_down(P);
        m.button().set_enabled(false);
        assert!(!firing.get());
    }
}
