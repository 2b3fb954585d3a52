// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery navigation.
//!
//! Measures:
//! - Index arithmetic (wraparound next/previous)
//! - Controller transitions (select, jump, open/close viewer)
//! - Parsing the bundled portfolio into gallery items

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_folio::content;
use iced_folio::gallery::{navigation, GalleryController, GalleryItem};
use std::hint::black_box;

fn items(count: u32) -> Vec<GalleryItem> {
    (0..count)
        .map(|id| GalleryItem::new(id, format!("Project {id}"), "", format!("shot{id}.png")))
        .collect()
}

fn bench_index_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("next_previous_index", |b| {
        b.iter(|| {
            let mut index = 0;
            for _ in 0..1_000 {
                index = navigation::next_index(black_box(index), 5);
            }
            for _ in 0..1_000 {
                index = navigation::previous_index(black_box(index), 5);
            }
            black_box(index)
        });
    });

    group.finish();
}

fn bench_controller(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    for count in [5u32, 100, 10_000] {
        group.bench_with_input(BenchmarkId::new("full_cycle", count), &count, |b, &count| {
            let mut controller = GalleryController::new(items(count)).expect("non-empty");
            b.iter(|| {
                for _ in 0..count {
                    controller.select_next();
                }
                black_box(controller.current_index())
            });
        });
    }

    group.bench_function("open_close_viewer", |b| {
        let mut controller = GalleryController::new(items(5)).expect("non-empty");
        b.iter(|| {
            controller.go_to_index(black_box(3));
            controller.open_current();
            controller.close_modal();
            black_box(controller.modal_open())
        });
    });

    group.finish();
}

fn bench_load_portfolio(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("load_embedded_portfolio", |b| {
        b.iter(|| {
            let portfolio = content::load_embedded().expect("bundled portfolio");
            black_box(portfolio.gallery_items())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_index_math, bench_controller, bench_load_portfolio);
criterion_main!(benches);
