// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Nav: a section-aware navigation controller for single-page layouts.
//!
//! ## Overview
//!
//! A home page stacks several named sections (`about`, `skills`, ...) and the
//! site also has standalone pages. The navigation bar must:
//! - track which section is in view while the user scrolls,
//! - turn clicks into an in-page smooth scroll, a page navigation, or nothing,
//! - highlight exactly the entry matching the route and scroll position.
//!
//! This crate holds that logic. It does not touch a DOM.
//! The host supplies geometry and routing through the [`Viewport`](crate::types::Viewport),
//! [`Navigator`](crate::types::Navigator) and [`ScrollEvents`](crate::types::ScrollEvents) traits.
//! Entries come from a validated [`folio_sections::SectionRegistry`].
//!
//! ## Components
//!
//! - [`scroll`]: [`ScrollObserver`](crate::scroll::ScrollObserver) applies the crossing test
//!   to tracked sections in registry order; the first match wins.
//! - [`resolver`]: [`resolve`](crate::resolver::resolve) maps a destination and the current
//!   route to one [`Transition`](crate::types::Transition); [`perform`](crate::resolver::perform)
//!   carries it out.
//! - [`active`]: [`project`](crate::active::project) computes one highlight flag per entry.
//! - [`controller`]: [`NavController`](crate::controller::NavController) owns the
//!   [`NavigationState`](crate::types::NavigationState) and the listener lifecycle.
//!
//! ## Workflow
//!
//! 1) Build a registry and a controller for the current location.
//! 2) `mount` the controller; it registers a scroll listener and samples once.
//! 3) Forward scroll events to `on_scroll` and route changes to `set_route`.
//! 4) Render from `items()`, `is_menu_open()` and `is_scrolled()`.
//! 5) `unmount` when the navigation view goes away.
//!
//! ```
//! use folio_nav::controller::NavController;
//! use folio_nav::resolver::Effect;
//! use folio_nav::types::{Navigator, Viewport};
//! use folio_sections::site::primary_navigation;
//! use kurbo::Rect;
//!
//! struct Page { y: f64, nav: Vec<String> }
//! impl Viewport for Page {
//!     fn scroll_y(&self) -> f64 { self.y }
//!     fn anchor_rect(&self, id: &str) -> Option<Rect> {
//!         (id == "about").then(|| Rect::new(0.0, 900.0 - self.y, 1280.0, 1600.0 - self.y))
//!     }
//!     fn smooth_scroll_to(&mut self, top: f64) { self.y = top; }
//! }
//! impl Navigator for Page {
//!     fn navigate(&mut self, href: &str) { self.nav.push(href.into()); }
//! }
//!
//! let registry = primary_navigation().unwrap();
//! let mut page = Page { y: 0.0, nav: Vec::new() };
//! let mut nav: NavController<'_, ()> = NavController::new(&registry, "/");
//!
//! assert_eq!(nav.click("about", &mut page), Effect::Scrolled { anchor: "about".into(), top: 820.0 });
//! nav.on_scroll(&page);
//! assert!(nav.is_active("about"));
//! assert!(!nav.is_active("home"));
//!
//! assert_eq!(
//!     nav.click("professional", &mut page),
//!     Effect::Navigated { href: "/professional".into() }
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod active;
pub mod controller;
pub mod resolver;
pub mod scroll;
pub mod types;
