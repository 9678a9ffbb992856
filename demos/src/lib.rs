// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the runnable demos: a simulated page and logging setup.

use std::collections::BTreeMap;

use folio_nav::types::{Navigator, ScrollEvents, Viewport};
use kurbo::Rect;
use tracing_subscriber::EnvFilter;

/// Install a `tracing` subscriber honoring `RUST_LOG` (default `debug`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// A page laid out as stacked sections in absolute page coordinates.
///
/// Smooth scrolls land instantly; navigations are only recorded.
#[derive(Debug, Default)]
pub struct SimulatedPage {
    /// Location the page was loaded at.
    pub location: String,
    /// Current vertical scroll offset.
    pub scroll_y: f64,
    anchors: BTreeMap<String, Rect>,
    /// Every `navigate` call, in order.
    pub navigations: Vec<String>,
    next_listener: u64,
    listeners: Vec<u64>,
}

impl SimulatedPage {
    /// The portfolio home page: a hero followed by its five sections.
    pub fn home() -> Self {
        Self::stacked(
            "/",
            900.0,
            &[
                ("about", 700.0),
                ("skills", 600.0),
                ("projects", 1200.0),
                ("blog", 800.0),
                ("contact", 500.0),
            ],
        )
    }

    /// The professional showcase page.
    pub fn professional() -> Self {
        Self::stacked(
            "/professional",
            400.0,
            &[
                ("resume", 900.0),
                ("skills", 700.0),
                ("experience", 1100.0),
                ("education", 600.0),
            ],
        )
    }

    /// Stack `sections` below a header block of height `lead`, with a 40px
    /// gap between consecutive sections.
    pub fn stacked(location: &str, lead: f64, sections: &[(&str, f64)]) -> Self {
        let mut page = Self {
            location: location.into(),
            ..Self::default()
        };
        let mut top = lead;
        for &(id, height) in sections {
            page.anchors
                .insert(id.into(), Rect::new(0.0, top, 1280.0, top + height));
            top += height + 40.0;
        }
        page
    }

    /// Number of live scroll listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Viewport for SimulatedPage {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn anchor_rect(&self, id: &str) -> Option<Rect> {
        self.anchors
            .get(id)
            .map(|r| Rect::new(r.x0, r.y0 - self.scroll_y, r.x1, r.y1 - self.scroll_y))
    }

    fn smooth_scroll_to(&mut self, top: f64) {
        self.scroll_y = top.max(0.0);
    }
}

impl Navigator for SimulatedPage {
    fn navigate(&mut self, href: &str) {
        self.navigations.push(href.into());
    }
}

impl ScrollEvents for SimulatedPage {
    type ListenerId = u64;

    fn add_scroll_listener(&mut self) -> u64 {
        self.next_listener += 1;
        self.listeners.push(self.next_listener);
        self.next_listener
    }

    fn remove_scroll_listener(&mut self, id: u64) {
        self.listeners.retain(|l| *l != id);
    }
}
