// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;
use std::rc::Rc;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use sun_button::{ButtonModel, ButtonOptions};
use sun_property::Property;
use sun_responder::pointer::PointerId;

fn bench_property_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("property");
    for n in [1_usize, 16, 256] {
        let value = Property::new(0_u64);
        let seen = Rc::new(Cell::new(0_u64));
        let subscriptions: Vec<_> = (0..n)
            .map(|_| {
                let seen = seen.clone();
                value.lazy_link(move |v, _| seen.set(seen.get() ^ v))
            })
            .collect();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("set_notify_n{n}"), |b| {
            let mut next = 0_u64;
            b.iter(|| {
                next += 1;
                black_box(value.set(next));
            });
        });
        drop(subscriptions);
    }
    group.finish();
}

fn bench_button_click(c: &mut Criterion) {
    let mut group = c.benchmark_group("button");
    let button = ButtonModel::new(ButtonOptions::default());
    let clicks = Rc::new(Cell::new(0_u64));
    let counter = clicks.clone();
    let _listener = button.on_fire(move || counter.set(counter.get() + 1));
    let mouse = PointerId(0);
    group.bench_function("enter_down_up_exit", |b| {
        b.iter(|| {
            button.on_enter(mouse);
            button.on_down(mouse);
            button.on_up(mouse);
            button.on_exit(mouse);
        });
    });
    black_box(clicks.get());
    group.finish();
}

criterion_group!(benches, bench_property_fan_out, bench_button_click);
criterion_main!(benches);
