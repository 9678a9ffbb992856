// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the controller: configuration, state, transitions, and host traits.
//!
//! ## Overview
//!
//! These types describe what the controller owns ([`NavigationState`]), what it
//! decides ([`Transition`]), and what it needs from the page it runs in
//! ([`Viewport`], [`Navigator`], [`ScrollEvents`]).
//! They are referenced by the [`scroll`](crate::scroll), [`resolver`](crate::resolver)
//! and [`controller`](crate::controller) modules.

use alloc::string::String;

use kurbo::Rect;

/// Pixel constants used by scroll tracking and smooth scrolling.
///
/// All values are in CSS pixels measured from the top of the viewport.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Vertical scroll offset above which the bar switches to its "scrolled" style.
    pub scrolled_threshold: f64,
    /// Horizontal line a section must straddle to count as current.
    pub crossing_line: f64,
    /// Height of the fixed header subtracted from smooth-scroll targets.
    pub header_offset: f64,
}

impl NavConfig {
    /// Set [`NavConfig::scrolled_threshold`].
    pub fn with_scrolled_threshold(mut self, px: f64) -> Self {
        self.scrolled_threshold = px;
        self
    }

    /// Set [`NavConfig::crossing_line`].
    pub fn with_crossing_line(mut self, px: f64) -> Self {
        self.crossing_line = px;
        self
    }

    /// Set [`NavConfig::header_offset`].
    pub fn with_header_offset(mut self, px: f64) -> Self {
        self.header_offset = px;
        self
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 50.0,
            crossing_line: 100.0,
            header_offset: 80.0,
        }
    }
}

bitflags::bitflags! {
    /// Boolean view state exposed to the presentation layer.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NavFlags: u8 {
        /// The mobile menu is open.
        const MENU_OPEN = 0b0000_0001;
        /// The page has scrolled past [`NavConfig::scrolled_threshold`].
        const SCROLLED  = 0b0000_0010;
    }
}

/// Transient state owned by one [`NavController`](crate::controller::NavController).
///
/// Recreated per page load; nothing here is persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub(crate) flags: NavFlags,
    pub(crate) active_section: Option<String>,
}

impl NavigationState {
    /// Raw flag set.
    pub fn flags(&self) -> NavFlags {
        self.flags
    }

    /// Returns `true` while the mobile menu is open.
    pub fn is_menu_open(&self) -> bool {
        self.flags.contains(NavFlags::MENU_OPEN)
    }

    /// Returns `true` once the scroll offset exceeds the configured threshold.
    pub fn has_scrolled_past_threshold(&self) -> bool {
        self.flags.contains(NavFlags::SCROLLED)
    }

    /// The section currently deemed in view on the home route, if any.
    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }
}

/// The single transition a click resolves to.
///
/// Produced by [`resolve`](crate::resolver::resolve).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Already at the destination; do nothing.
    None,
    /// Smooth-scroll to the named anchor on the current page.
    ScrollTo {
        /// Anchor element id.
        anchor: String,
    },
    /// Perform a full page navigation.
    Navigate {
        /// Target in `path` or `path#fragment` form. The destination page
        /// resolves any pending fragment once mounted.
        href: String,
    },
}

/// Read access to page geometry plus the browser's smooth-scroll capability.
///
/// Implemented by the host environment (a DOM binding, or a fake in tests).
pub trait Viewport {
    /// Current vertical scroll offset of the page.
    fn scroll_y(&self) -> f64;
    /// Viewport-relative bounding box of the element with `id`, or `None` if
    /// the current page does not render it.
    fn anchor_rect(&self, id: &str) -> Option<Rect>;
    /// Start a smooth scroll to the absolute page offset `top`.
    ///
    /// A new call interrupts any animation already in flight.
    fn smooth_scroll_to(&mut self, top: f64);
}

/// The routing facility's imperative "go to this location" operation.
pub trait Navigator {
    /// Navigate to `href`, a `path` or `path#fragment`.
    fn navigate(&mut self, href: &str);
}

/// Registration of scroll listeners with the host's event source.
///
/// [`NavController::mount`](crate::controller::NavController::mount) acquires
/// one listener and [`NavController::unmount`](crate::controller::NavController::unmount)
/// releases it.
pub trait ScrollEvents {
    /// Handle returned on registration and required to deregister.
    type ListenerId: Copy + core::fmt::Debug;
    /// Register the controller's scroll listener.
    fn add_scroll_listener(&mut self) -> Self::ListenerId;
    /// Deregister a listener previously returned by [`ScrollEvents::add_scroll_listener`].
    fn remove_scroll_listener(&mut self, id: Self::ListenerId);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_layout_constants() {
        let c = NavConfig::default();
        assert_eq!(c.scrolled_threshold, 50.0);
        assert_eq!(c.crossing_line, 100.0);
        assert_eq!(c.header_offset, 80.0);
    }

    #[test]
    fn config_setters_override_single_fields() {
        let c = NavConfig::default()
            .with_header_offset(64.0)
            .with_crossing_line(120.0);
        assert_eq!(c.header_offset, 64.0);
        assert_eq!(c.crossing_line, 120.0);
        assert_eq!(c.scrolled_threshold, 50.0);
    }

    #[test]
    fn fresh_state_is_closed_and_unscrolled() {
        let s = NavigationState::default();
        assert!(!s.is_menu_open());
        assert!(!s.has_scrolled_past_threshold());
        assert_eq!(s.active_section(), None);
        assert!(s.flags().is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_deserializes_with_defaults() {
        let c: NavConfig = serde_json::from_str(r#"{"header_offset": 72.0}"#).unwrap();
        assert_eq!(c.header_offset, 72.0);
        assert_eq!(c.crossing_line, 100.0);
    }
}
