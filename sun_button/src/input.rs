// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Forward routed pointer input to button models.

use sun_responder::dispatcher::InputHandler;
use sun_responder::pointer::PointerEvent;
use sun_responder::types::{Outcome, Phase};

use crate::model::ButtonModel;

/// An [`InputHandler`] over a set of buttons keyed by scene node.
///
/// Downs and ups are handled at the target phase. A down is claimed only when
/// the pressing pointer is the one hovering the button, so the model's
/// pointer-identity precondition always holds. Disabled buttons claim nothing,
/// so their events fall through to background listeners.
#[derive(Debug)]
pub struct ButtonInput<'a, K> {
    buttons: &'a [(K, &'a ButtonModel)],
}

impl<'a, K: Copy + Eq> ButtonInput<'a, K> {
    /// Wrap a node → button table.
    pub fn new(buttons: &'a [(K, &'a ButtonModel)]) -> Self {
        Self { buttons }
    }

    fn find(&self, node: K) -> Option<&'a ButtonModel> {
        self.buttons
            .iter()
            .find(|(k, _)| *k == node)
            .map(|(_, b)| *b)
    }
}

impl<K: Copy + Eq> InputHandler<K> for ButtonInput<'_, K> {
    fn enter(&mut self, node: K, event: &PointerEvent) {
        if let Some(button) = self.find(node) {
            button.on_enter(event.pointer);
        }
    }

    fn exit(&mut self, node: K, event: &PointerEvent) {
        if let Some(button) = self.find(node) {
            button.on_exit(event.pointer);
        }
    }

    fn down(&mut self, node: K, phase: Phase, event: &PointerEvent) -> Outcome {
        if phase != Phase::Target {
            return Outcome::Continue;
        }
        match self.find(node) {
            Some(button) if button.enabled() && button.over_pointer() == Some(event.pointer) => {
                button.on_down(event.pointer);
                Outcome::StopAndConsume
            }
            _ => Outcome::Continue,
        }
    }

    fn up(&mut self, node: K, phase: Phase, event: &PointerEvent) -> Outcome {
        if phase != Phase::Target {
            return Outcome::Continue;
        }
        match self.find(node) {
            Some(button) if button.pressed_pointer() == Some(event.pointer) => {
                button.on_up(event.pointer);
                Outcome::StopAndConsume
            }
            _ => Outcome::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;
    use kurbo::Point;
    use sun_responder::dispatcher::{Dispatcher, DownResult};
    use sun_responder::pointer::PointerId;
    use sun_responder::router::Router;
    use sun_responder::types::Hit;

    use crate::{ButtonOptions, InteractionState};

    const OK: u32 = 1;
    const CANCEL: u32 = 2;

    fn event(pointer: u64) -> PointerEvent {
        PointerEvent::mouse(PointerId(pointer), Point::ZERO)
    }

    #[test]
    fn click_through_the_dispatcher() {
        let ok = ButtonModel::new(ButtonOptions::default());
        let clicks = Rc::new(Cell::new(0));
        let c = clicks.clone();
        let _l = ok.on_fire(move || c.set(c.get() + 1));
        let table = [(OK, &ok)];
        let mut input = ButtonInput::new(&table);
        let mut dispatcher: Dispatcher<u32> = Dispatcher::new(Router::new());
        let over_ok = [Hit::new(OK, 0)];

        dispatcher.pointer_move(&event(0), &over_ok, &mut input);
        assert_eq!(ok.state(), InteractionState::Over);
        assert_eq!(
            dispatcher.pointer_down(&event(0), &over_ok, &mut input),
            DownResult::Claimed(OK)
        );
        assert_eq!(ok.state(), InteractionState::Pressed);
        assert!(dispatcher.pointer_up(&event(0), &over_ok, &mut input));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn drag_off_and_release_cancels() {
        let ok = ButtonModel::new(ButtonOptions::default());
        let cancel = ButtonModel::new(ButtonOptions::default());
        let clicks = Rc::new(Cell::new(0));
        let c = clicks.clone();
        let _l = ok.on_fire(move || c.set(c.get() + 1));
        let table = [(OK, &ok), (CANCEL, &cancel)];
        let mut input = ButtonInput::new(&table);
        let mut dispatcher: Dispatcher<u32> = Dispatcher::new(Router::new());

        let _ = dispatcher.pointer_down(&event(0), &[Hit::new(OK, 0)], &mut input);
        dispatcher.pointer_move(&event(0), &[Hit::new(CANCEL, 0)], &mut input);
        assert_eq!(ok.state(), InteractionState::Pressed);
        assert_eq!(cancel.state(), InteractionState::Over);

        // Captured: the up reaches the pressed button, which does not fire.
        assert!(dispatcher.pointer_up(&event(0), &[Hit::new(CANCEL, 0)], &mut input));
        assert_eq!(clicks.get(), 0);
        assert_eq!(ok.state(), InteractionState::Idle);
        assert_eq!(cancel.state(), InteractionState::Over);
    }

    #[test]
    fn captured_up_with_empty_hit_path_releases_the_button() {
        let ok = ButtonModel::new(ButtonOptions::default());
        let clicks = Rc::new(Cell::new(0));
        let c = clicks.clone();
        let _l = ok.on_fire(move || c.set(c.get() + 1));
        let table = [(OK, &ok)];
        let mut input = ButtonInput::new(&table);
        let mut dispatcher: Dispatcher<u32> = Dispatcher::new(Router::new());

        assert_eq!(
            dispatcher.pointer_down(&event(0), &[Hit::new(OK, 0)], &mut input),
            DownResult::Claimed(OK)
        );
        let pathless = [Hit::with_path(OK, alloc::vec::Vec::new(), 0)];
        assert!(dispatcher.pointer_up(&event(0), &pathless, &mut input));
        assert!(!ok.is_pressed());
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn second_pointer_cannot_press_a_hovered_button() {
        let ok = ButtonModel::new(ButtonOptions::default());
        let table = [(OK, &ok)];
        let mut input = ButtonInput::new(&table);
        let mut dispatcher: Dispatcher<u32> = Dispatcher::new(Router::new());
        let over_ok = [Hit::new(OK, 0)];

        dispatcher.pointer_move(&event(0), &over_ok, &mut input);
        let touch = PointerEvent::touch(PointerId(5), Point::ZERO);
        assert_eq!(
            dispatcher.pointer_down(&touch, &over_ok, &mut input),
            DownResult::Unclaimed
        );
        assert!(!ok.is_pressed());
    }

    #[test]
    fn disabled_button_leaves_down_unclaimed() {
        let ok = ButtonModel::new(ButtonOptions::default());
        ok.set_enabled(false);
        let table = [(OK, &ok)];
        let mut input = ButtonInput::new(&table);
        let mut dispatcher: Dispatcher<u32> = Dispatcher::new(Router::new());
        assert_eq!(
            dispatcher.pointer_down(&event(0), &[Hit::new(OK, 0)], &mut input),
            DownResult::Unclaimed
        );
    }
}
