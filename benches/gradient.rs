// This file is part of simple-color-picker and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2024 Michael Ripley

//! Benchmarks for rendering

use std::hint::black_box;

use criterion::{BatchSize, Criterion};

use simple_color_picker::private::layout::Layout;
use simple_color_picker::private::picker::PickerState;
use simple_color_picker::private::util::color::HsvColor;
use simple_color_picker::private::util::image;

pub fn bench_gradient(c: &mut Criterion) {
    let layout = Layout::new(512, 600);
    let stride = layout.width as usize;
    let mut group = c.benchmark_group("Gradient Implementations");

    group.bench_function("Naive", |bencher| {
        bencher.iter_batched_ref(
            || vec![0; layout.buffer_len()],
            |buffer| image::naive::draw_gradient(black_box(buffer.as_mut_slice()), stride, layout.gradient, black_box(200.0)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("Optimized", |bencher| {
        bencher.iter_batched_ref(
            || vec![0; layout.buffer_len()],
            |buffer| image::draw_gradient(black_box(buffer.as_mut_slice()), stride, layout.gradient, black_box(200.0)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

pub fn bench_frame(c: &mut Criterion) {
    let layout = Layout::new(512, 600);
    let state = PickerState::new(HsvColor::new(200.0, 0.75, 0.5));

    c.bench_function("Full frame", |bencher| {
        bencher.iter_batched_ref(
            || vec![0; layout.buffer_len()],
            |buffer| image::draw_frame(black_box(buffer.as_mut_slice()), &layout, &state),
            BatchSize::SmallInput,
        )
    });
}
