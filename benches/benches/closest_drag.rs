// Copyright 2025 the Sun Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use sun_drag::{ClosestDragSelector, DragTarget, DragThresholds};
use sun_responder::pointer::{PointerEvent, PointerId};

struct Dot(Point);

impl DragTarget for Dot {
    fn compute_distance(&self, point: Point) -> f64 {
        self.0.distance(point)
    }

    fn start_drag(&self, _event: &PointerEvent) {}
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn next_f64(&mut self) -> f64 {
        // xorshift64*
        self.0 ^= self.0 >> 12;
        self.0 ^= self.0 << 25;
        self.0 ^= self.0 >> 27;
        let bits = self.0.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 11;
        bits as f64 / (1_u64 << 53) as f64
    }
}

fn selector(n: usize) -> ClosestDragSelector {
    let mut rng = Rng(0x9E37_79B9_7F4A_7C15);
    let mut selector = ClosestDragSelector::new(DragThresholds::default());
    for _ in 0..n {
        let at = Point::new(rng.next_f64() * 1000.0, rng.next_f64() * 1000.0);
        selector.add_draggable_item(Rc::new(Dot(at)));
    }
    selector
}

fn bench_closest(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_drag");
    for n in [8_usize, 64, 512] {
        let selector = selector(n);
        let touch = PointerEvent::touch(PointerId(1), Point::new(500.0, 500.0));
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("on_down_n{n}"), |b| {
            b.iter(|| black_box(selector.on_down(black_box(&touch))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_closest);
criterion_main!(benches);
