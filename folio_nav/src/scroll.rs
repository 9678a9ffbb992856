// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll observer: decide which tracked section is current.
//!
//! ## Crossing test
//!
//! A section is current when the horizontal line [`NavConfig::crossing_line`]
//! pixels below the viewport top passes through its bounding box, that is
//! `top <= line && bottom >= line`. Both edges are inclusive.
//!
//! ## Selection
//!
//! - Candidates are tested in registry order and the **first** match wins.
//!   Overlap size is not consulted.
//! - Candidates whose anchor is not rendered on the current page are skipped.
//! - A sample with no match reports `None`; the controller keeps its previous
//!   section in that case so gaps between sections do not clear highlighting.
//!
//! ## Minimal example
//!
//! ```
//! use folio_nav::scroll::crosses_line;
//! use kurbo::Rect;
//!
//! assert!(crosses_line(Rect::new(0.0, -40.0, 800.0, 100.0), 100.0));
//! assert!(!crosses_line(Rect::new(0.0, 101.0, 800.0, 900.0), 100.0));
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use folio_sections::SectionRegistry;
use kurbo::Rect;

use crate::types::{NavConfig, Viewport};

/// Returns `true` if the horizontal line at `line` passes through `rect`.
pub fn crosses_line(rect: Rect, line: f64) -> bool {
    rect.min_y() <= line && rect.max_y() >= line
}

/// One scroll sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScrollSample<'a> {
    /// Scroll offset exceeds [`NavConfig::scrolled_threshold`].
    pub scrolled: bool,
    /// First tracked section crossing the line, if any.
    pub section: Option<&'a str>,
}

/// Samples viewport geometry against an ordered candidate list.
#[derive(Clone, Debug)]
pub struct ScrollObserver {
    candidates: Vec<String>,
    crossing_line: f64,
    scrolled_threshold: f64,
}

impl ScrollObserver {
    /// Track the registry's home-route anchors, in registry order.
    pub fn new(registry: &SectionRegistry, config: &NavConfig) -> Self {
        Self::with_candidates(registry.tracked_sections(), config)
    }

    /// Track an explicit ordered list of anchor ids.
    pub fn with_candidates<'a>(
        ids: impl IntoIterator<Item = &'a str>,
        config: &NavConfig,
    ) -> Self {
        Self {
            candidates: ids.into_iter().map(String::from).collect(),
            crossing_line: config.crossing_line,
            scrolled_threshold: config.scrolled_threshold,
        }
    }

    /// Candidate ids in test order.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// First candidate whose anchor crosses the line.
    pub fn current_section<V: Viewport + ?Sized>(&self, viewport: &V) -> Option<&str> {
        self.candidates
            .iter()
            .find(|id| {
                viewport
                    .anchor_rect(id)
                    .is_some_and(|rect| crosses_line(rect, self.crossing_line))
            })
            .map(String::as_str)
    }

    /// Returns `true` if the page has scrolled past the cosmetic threshold.
    pub fn is_scrolled<V: Viewport + ?Sized>(&self, viewport: &V) -> bool {
        viewport.scroll_y() > self.scrolled_threshold
    }

    /// Take a full sample.
    pub fn sample<V: Viewport + ?Sized>(&self, viewport: &V) -> ScrollSample<'_> {
        ScrollSample {
            scrolled: self.is_scrolled(viewport),
            section: self.current_section(viewport),
        }
    }
}
