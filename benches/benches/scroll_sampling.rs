// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use folio_nav::controller::NavController;
use folio_nav::scroll::ScrollObserver;
use folio_nav::types::{NavConfig, Viewport};
use folio_sections::{RegistryBuilder, SectionRegistry};
use kurbo::Rect;

/// Sections of equal height stacked from the top of the page.
struct Column {
    scroll_y: f64,
    height: f64,
    ids: Vec<String>,
}

impl Viewport for Column {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }
    fn anchor_rect(&self, id: &str) -> Option<Rect> {
        let i = self.ids.iter().position(|s| s == id)?;
        let top = i as f64 * self.height - self.scroll_y;
        Some(Rect::new(0.0, top, 1280.0, top + self.height))
    }
    fn smooth_scroll_to(&mut self, top: f64) {
        self.scroll_y = top;
    }
}

fn registry(n: usize) -> SectionRegistry {
    (0..n)
        .fold(RegistryBuilder::new().entry("home", "Home", "/"), |b, i| {
            let id = format!("s{i}");
            b.entry(&id, &id, &format!("/#{id}"))
        })
        .build()
        .unwrap()
}

fn bench_sampling(c: &mut Criterion) {
    for &n in &[6_usize, 64] {
        let registry = registry(n);
        let mut page = Column {
            scroll_y: 0.0,
            height: 600.0,
            ids: registry.tracked_sections().map(String::from).collect(),
        };
        let observer = ScrollObserver::new(&registry, &NavConfig::default());

        // Worst case for first-match: the line sits in the last section.
        page.scroll_y = (n - 1) as f64 * 600.0;
        c.bench_function(&format!("observer_last_section_n{n}"), |b| {
            b.iter(|| black_box(observer.current_section(black_box(&page))));
        });

        let mut nav: NavController<'_, ()> = NavController::new(&registry, "/");
        let span = n as f64 * 600.0;
        c.bench_function(&format!("controller_scroll_sweep_n{n}"), |b| {
            let mut y = 0.0;
            b.iter(|| {
                y = (y + 37.0) % span;
                page.scroll_y = y;
                black_box(nav.on_scroll(&page))
            });
        });
    }
}

criterion_group!(benches, bench_sampling);
criterion_main!(benches);
