// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for timeline marker placement.
//!
//! Measures the performance of:
//! - Laying out a dense marker set on the progress bar
//! - Formatting time labels

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_cue::domain::timeline::{format_time, Marker};
use iced_cue::ui::player::progress_bar::layout_markers;
use std::hint::black_box;

/// Alternating point and range markers spread over `duration`.
fn sample_markers(count: usize, duration: f64) -> Vec<Marker> {
    let spacing = duration / count as f64;
    (0..count)
        .map(|i| {
            let start = i as f64 * spacing;
            if i % 2 == 0 {
                Marker::point(format!("m{i}"), start)
            } else {
                Marker::range(format!("m{i}"), start, start + spacing / 2.0)
            }
        })
        .collect()
}

fn bench_layout_markers(c: &mut Criterion) {
    let mut group = c.benchmark_group("marker_layout");
    let duration = 3600.0;

    for count in [10_usize, 100, 1000] {
        let markers = sample_markers(count, duration);
        group.bench_with_input(BenchmarkId::from_parameter(count), &markers, |b, markers| {
            b.iter(|| {
                let layout = layout_markers(black_box(markers), black_box(duration));
                black_box(layout.iter().filter_map(|m| m.visible_span()).count());
            });
        });
    }

    group.finish();
}

fn bench_format_time(c: &mut Criterion) {
    c.bench_function("format_time", |b| {
        b.iter(|| {
            for secs in 0..600 {
                black_box(format_time(black_box(f64::from(secs) * 6.1)));
            }
        });
    });
}

criterion_group!(benches, bench_layout_markers, bench_format_time);
criterion_main!(benches);
