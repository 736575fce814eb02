// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A push button driven by raw pointer events.
//!
//! A mouse hovers, presses, drags off, comes back and releases. The view's
//! content follows the interaction state, and the button fires once.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p sun_demos --example button_states`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::Point;
use sun_button::{Button, ButtonInput, ButtonOptions, InteractionState, StateNodes};
use sun_responder::dispatcher::{Dispatcher, DownResult};
use sun_responder::pointer::{PointerEvent, PointerId};
use sun_responder::router::Router;
use sun_responder::types::Hit;
use tracing_subscriber::EnvFilter;

const OK: u32 = 1;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let button = Button::new(
        ButtonOptions::default(),
        StateNodes::new("[ ok ]")
            .with_over("[*ok*]")
            .with_pressed("[_ok_]")
            .with_disabled("[ -- ]"),
    );
    let clicks = Rc::new(Cell::new(0));
    let counter = clicks.clone();
    let _listener = button.model().on_fire(move || counter.set(counter.get() + 1));

    let table = [(OK, button.model())];
    let mut input = ButtonInput::new(&table);
    let mut dispatcher: Dispatcher<u32> = Dispatcher::new(Router::new());

    let mouse = |x: f64| PointerEvent::mouse(PointerId(0), Point::new(x, 5.0));
    let on_ok = [Hit::new(OK, 0)];
    let nothing: [Hit<u32>; 0] = [];

    let show = |what: &str| {
        println!(
            "{what:<10} {:?} {}",
            button.model().state(),
            button.view().displayed().unwrap_or_default()
        );
    };

    show("start");
    dispatcher.pointer_move(&mouse(5.0), &on_ok, &mut input);
    show("hover");
    let down = dispatcher.pointer_down(&mouse(5.0), &on_ok, &mut input);
    assert_eq!(down, DownResult::Claimed(OK));
    show("press");
    dispatcher.pointer_move(&mouse(80.0), &nothing, &mut input);
    show("drag off");
    dispatcher.pointer_move(&mouse(6.0), &on_ok, &mut input);
    show("drag back");
    assert_eq!(button.model().state(), InteractionState::Pressed);
    dispatcher.pointer_up(&mouse(6.0), &on_ok, &mut input);
    show("release");

    assert_eq!(clicks.get(), 1);

    button.model().set_enabled(false);
    show("disabled");
    assert_eq!(button.view().displayed(), Some("[ -- ]"));
}
