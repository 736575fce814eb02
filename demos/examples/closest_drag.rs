// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grabbing the nearest slider thumb with a finger.
//!
//! Two slider thumbs are registered with a closest-drag selector. A touch that
//! misses both thumbs (no widget claims the down) still starts dragging the
//! nearer thumb, as long as it lands inside the touch threshold. A mouse click at
//! the same spot is too far for the tighter mouse threshold.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p sun_demos --example closest_drag`

use std::rc::Rc;

use kurbo::Point;
use sun_drag::{
    ClosestDragSelector, DragTarget, DragThresholds, SliderModel, SliderOptions, SliderRange,
};
use sun_property::Property;
use sun_responder::dispatcher::{Dispatcher, DownResult, InputHandler};
use sun_responder::pointer::{PointerEvent, PointerId};
use sun_responder::router::Router;
use tracing_subscriber::EnvFilter;

/// A slider laid out on a horizontal line at `y`.
struct Thumb {
    y: f64,
    slider: SliderModel,
}

impl DragTarget for Thumb {
    fn compute_distance(&self, point: Point) -> f64 {
        Point::new(self.slider.thumb_position(), self.y).distance(point)
    }

    fn start_drag(&self, event: &PointerEvent) {
        self.slider.start_drag(event);
    }
}

/// Nothing in this scene claims pointer input.
struct Background;
impl InputHandler<u32> for Background {}

fn thumb(y: f64, value: f64) -> Rc<Thumb> {
    let range = SliderRange::new(0.0, 1.0).expect("finite, ordered bounds");
    let slider = SliderModel::new(
        Property::new(value),
        range,
        SliderOptions::default()
            .with_track(0.0, 200.0)
            .with_constrain(|v| (v * 20.0).round() / 20.0),
    )
    .expect("valid slider");
    Rc::new(Thumb { y, slider })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let top = thumb(0.0, 0.25);
    let bottom = thumb(60.0, 0.75);
    let mut selector = ClosestDragSelector::new(DragThresholds::default());
    selector.add_draggable_item(top.clone());
    selector.add_draggable_item(bottom.clone());

    let mut dispatcher: Dispatcher<u32> = Dispatcher::new(Router::new());
    let spot = Point::new(150.0, 35.0);

    let mouse = PointerEvent::mouse(PointerId(0), spot);
    let down = dispatcher.pointer_down(&mouse, &[], &mut Background);
    assert_eq!(down, DownResult::Unclaimed);
    assert_eq!(selector.on_dispatched_down(down, &mouse), None);
    println!("mouse at {spot:?}: nothing within {}", selector.thresholds().mouse);
    dispatcher.pointer_up(&mouse, &[], &mut Background);

    let finger = PointerEvent::touch(PointerId(1), spot);
    let down = dispatcher.pointer_down(&finger, &[], &mut Background);
    let picked = selector.on_dispatched_down(down, &finger);
    println!("finger at {spot:?}: picked {picked:?}");
    assert_eq!(picked, Some(1));
    assert!(bottom.slider.is_dragging());

    let moved = PointerEvent::touch(PointerId(1), Point::new(90.0, 40.0));
    bottom.slider.drag(&moved);
    bottom.slider.end_drag(&moved);
    println!("bottom slider value: {}", bottom.slider.value().get());
    assert_eq!(bottom.slider.value().get(), 0.45);
    assert_eq!(top.slider.value().get(), 0.25);
}
