// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction state derivation.

/// The display-relevant status of a button.
///
/// Exactly one state holds at a time. It is a pure function of the button's
/// enabled flag, whether a pointer is over it, and whether it is pressed; see
/// [`InteractionState::from_flags`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum InteractionState {
    /// Enabled, not hovered, not pressed.
    #[default]
    Idle,
    /// Enabled and hovered by a pointer, not pressed.
    Over,
    /// Enabled and pressed.
    Pressed,
    /// Not enabled. Dominates every other condition.
    Disabled,
}

impl InteractionState {
    /// Derive the state from the model flags.
    ///
    /// ```
    /// use sun_button::InteractionState;
    ///
    /// assert_eq!(InteractionState::from_flags(false, true, true), InteractionState::Disabled);
    /// assert_eq!(InteractionState::from_flags(true, false, true), InteractionState::Pressed);
    /// assert_eq!(InteractionState::from_flags(true, true, false), InteractionState::Over);
    /// assert_eq!(InteractionState::from_flags(true, false, false), InteractionState::Idle);
    /// ```
    pub const fn from_flags(enabled: bool, over: bool, pressed: bool) -> Self {
        match (enabled, pressed, over) {
            (false, _, _) => Self::Disabled,
            (true, true, _) => Self::Pressed,
            (true, false, true) => Self::Over,
            (true, false, false) => Self::Idle,
        }
    }

    /// Whether this state accepts input.
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}
