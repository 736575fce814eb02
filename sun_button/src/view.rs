// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State-driven button content.
//!
//! A [`ButtonView`] picks what to display from the model's interaction state.
//! It observes the state with [`link`](sun_property::ReadOnlyProperty::link),
//! so the initial content is chosen at construction and swapped on every change.
//! `N` is whatever the host renders: a scene node handle, an image id, a string.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use sun_property::{ReadOnlyProperty, Subscription};

use crate::interaction::InteractionState;
use crate::model::{ButtonModel, ButtonOptions};

/// Fixed content per interaction state. Missing states show `idle`.
#[derive(Clone, Debug, PartialEq)]
pub struct StateNodes<N> {
    /// Shown when idle, and for any state without its own content.
    pub idle: N,
    /// Shown while hovered.
    pub over: Option<N>,
    /// Shown while pressed.
    pub pressed: Option<N>,
    /// Shown while disabled.
    pub disabled: Option<N>,
}

impl<N> StateNodes<N> {
    /// Use `idle` for every state.
    pub fn new(idle: N) -> Self {
        Self {
            idle,
            over: None,
            pressed: None,
            disabled: None,
        }
    }

    /// Set the hovered content.
    #[must_use]
    pub fn with_over(mut self, over: N) -> Self {
        self.over = Some(over);
        self
    }

    /// Set the pressed content.
    #[must_use]
    pub fn with_pressed(mut self, pressed: N) -> Self {
        self.pressed = Some(pressed);
        self
    }

    /// Set the disabled content.
    #[must_use]
    pub fn with_disabled(mut self, disabled: N) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// The content for `state`.
    pub fn node_for(&self, state: InteractionState) -> &N {
        let specific = match state {
            InteractionState::Idle => None,
            InteractionState::Over => self.over.as_ref(),
            InteractionState::Pressed => self.pressed.as_ref(),
            InteractionState::Disabled => self.disabled.as_ref(),
        };
        specific.unwrap_or(&self.idle)
    }
}

/// Where a button's content comes from: fixed nodes or a factory, never both.
pub enum ButtonContent<N> {
    /// Fixed nodes per state.
    States(StateNodes<N>),
    /// Build content on each state change.
    Factory(Rc<dyn Fn(InteractionState) -> N>),
}

impl<N: fmt::Debug> fmt::Debug for ButtonContent<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::States(nodes) => f.debug_tuple("States").field(nodes).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

impl<N: Clone> ButtonContent<N> {
    /// Wrap a factory closure.
    pub fn factory(f: impl Fn(InteractionState) -> N + 'static) -> Self {
        Self::Factory(Rc::new(f))
    }

    /// Produce the content for `state`.
    pub fn render(&self, state: InteractionState) -> N {
        match self {
            Self::States(nodes) => nodes.node_for(state).clone(),
            Self::Factory(make) => make(state),
        }
    }
}

impl<N> From<StateNodes<N>> for ButtonContent<N> {
    fn from(nodes: StateNodes<N>) -> Self {
        Self::States(nodes)
    }
}

/// Displays the content matching an interaction state.
pub struct ButtonView<N> {
    displayed: Rc<RefCell<Option<N>>>,
    _state_link: Subscription,
}

impl<N: fmt::Debug> fmt::Debug for ButtonView<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonView")
            .field("displayed", &self.displayed.borrow())
            .finish_non_exhaustive()
    }
}

impl<N: Clone + 'static> ButtonView<N> {
    /// Bind `content` to `state`.
    pub fn new(state: &ReadOnlyProperty<InteractionState>, content: ButtonContent<N>) -> Self {
        let displayed = Rc::new(RefCell::new(None));
        let slot = displayed.clone();
        let state_link = state.link(move |state, _| {
            *slot.borrow_mut() = Some(content.render(*state));
        });
        Self {
            displayed,
            _state_link: state_link,
        }
    }

    /// The content currently displayed.
    ///
    /// Always `Some` once constructed, since linking renders immediately.
    pub fn displayed(&self) -> Option<N> {
        self.displayed.borrow().clone()
    }
}

/// A button composed of a model and a view, connected only through the
/// model's interaction state.
#[derive(Debug)]
pub struct Button<N> {
    model: ButtonModel,
    view: ButtonView<N>,
}

impl<N: Clone + 'static> Button<N> {
    /// Create a button with its own model.
    pub fn new(options: ButtonOptions, content: impl Into<ButtonContent<N>>) -> Self {
        let model = ButtonModel::new(options);
        let view = ButtonView::new(&model.interaction_state(), content.into());
        Self { model, view }
    }

    /// The interaction model.
    pub fn model(&self) -> &ButtonModel {
        &self.model
    }

    /// The view.
    pub fn view(&self) -> &ButtonView<N> {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use core::cell::Cell;
    use sun_responder::pointer::PointerId;

    const P: PointerId = PointerId(0);

    fn nodes() -> StateNodes<&'static str> {
        StateNodes::new("idle")
            .with_over("over")
            .with_pressed("pressed")
    }

    #[test]
    fn initial_content_is_rendered_at_construction() {
        let button = Button::new(ButtonOptions::default(), nodes());
        assert_eq!(button.view().displayed(), Some("idle"));
    }

    #[test]
    fn content_follows_state() {
        let button = Button::new(ButtonOptions::default(), nodes());
        button.model().on_enter(P);
        assert_eq!(button.view().displayed(), Some("over"));
        button.model().on_down(P);
        assert_eq!(button.view().displayed(), Some("pressed"));
        button.model().set_enabled(false);
        // No disabled content: falls back to idle.
        assert_eq!(button.view().displayed(), Some("idle"));
    }

    #[test]
    fn factory_is_called_per_state_change() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let content = ButtonContent::factory(move |state| {
            counter.set(counter.get() + 1);
            let mut label: String = "state:".to_string();
            label.push_str(match state {
                InteractionState::Idle => "idle",
                InteractionState::Over => "over",
                InteractionState::Pressed => "pressed",
                InteractionState::Disabled => "disabled",
            });
            label
        });
        let button = Button::new(ButtonOptions::default(), content);
        assert_eq!(calls.get(), 1);
        button.model().on_enter(P);
        button.model().on_enter(P);
        assert_eq!(calls.get(), 2, "unchanged state does not rebuild");
        assert_eq!(button.view().displayed().as_deref(), Some("state:over"));
    }

    #[test]
    fn node_for_falls_back_to_idle() {
        let n = StateNodes::new(0_u8).with_disabled(9);
        assert_eq!(*n.node_for(InteractionState::Over), 0);
        assert_eq!(*n.node_for(InteractionState::Disabled), 9);
    }
}
