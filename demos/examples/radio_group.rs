// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A radio group, a checkbox and a momentary button sharing observable state.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p sun_demos --example radio_group`

use sun_button::{ButtonModel, ButtonOptions, MomentaryButtonModel, RadioButtonGroup, checkbox};
use sun_property::Property;
use sun_responder::pointer::PointerId;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Speed {
    Slow,
    Normal,
    Fast,
}

fn click(button: &ButtonModel, pointer: PointerId) {
    button.on_enter(pointer);
    button.on_down(pointer);
    button.on_up(pointer);
    button.on_exit(pointer);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let finger = PointerId(7);

    let speed = Property::new(Speed::Normal);
    speed
        .link(|now, before| println!("speed {before:?} -> {now:?}"))
        .persist();
    let group = RadioButtonGroup::new(speed.clone(), [Speed::Slow, Speed::Normal, Speed::Fast])
        .expect("distinct values including the current one");
    if let Some(fast) = group.button(2) {
        click(fast, finger);
    }
    assert_eq!(speed.get(), Speed::Fast);
    assert_eq!(group.selected_index(), Some(2));

    let grid = Property::new(false);
    let grid_box = checkbox(grid.clone(), ButtonOptions::default());
    click(grid_box.button(), finger);
    println!("grid visible: {}", grid.get());
    assert!(grid.get());

    let beam = Property::new(false);
    let laser = MomentaryButtonModel::new(beam.clone(), false, true, ButtonOptions::default());
    laser.button().on_enter(finger);
    laser.button().on_down(finger);
    println!("beam while held: {}", beam.get());
    assert!(beam.get());
    laser.button().on_up(finger);
    println!("beam after release: {}", beam.get());
    assert!(!beam.get());
}
