// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation resolver: turn a clicked destination into exactly one transition.
//!
//! ## Decision table
//!
//! | destination      | `path == route` | transition                        |
//! |------------------|-----------------|-----------------------------------|
//! | `path`           | yes             | [`Transition::None`]              |
//! | `path`           | no              | [`Transition::Navigate`] `path`   |
//! | `path#fragment`  | yes             | [`Transition::ScrollTo`] fragment |
//! | `path#fragment`  | no              | [`Transition::Navigate`] `path#fragment` |
//!
//! Resolution is pure; [`perform`] carries a transition out against the host.
//!
//! ## Minimal example
//!
//! ```
//! use folio_nav::resolver::resolve;
//! use folio_nav::types::Transition;
//! use folio_sections::destination::Destination;
//!
//! let about: Destination = "/#about".parse().unwrap();
//! assert_eq!(resolve(&about, "/"), Transition::ScrollTo { anchor: "about".into() });
//! assert_eq!(
//!     resolve(&about, "/professional"),
//!     Transition::Navigate { href: "/#about".into() }
//! );
//! ```

use alloc::string::{String, ToString};

use folio_sections::destination::Destination;
use kurbo::Rect;

use crate::types::{Navigator, Transition, Viewport};

/// Resolve a destination against the current, fragment-free route.
pub fn resolve(destination: &Destination, current_route: &str) -> Transition {
    let same_page = destination.path() == current_route;
    match destination.fragment() {
        None if same_page => Transition::None,
        None => Transition::Navigate {
            href: destination.path().into(),
        },
        Some(anchor) if same_page => Transition::ScrollTo {
            anchor: anchor.into(),
        },
        Some(_) => Transition::Navigate {
            href: destination.to_string(),
        },
    }
}

/// Absolute page offset that puts `anchor` just below a fixed header.
///
/// `anchor` is viewport-relative, so the current scroll offset is added back.
pub fn scroll_target(anchor: Rect, scroll_y: f64, header_offset: f64) -> f64 {
    anchor.min_y() + scroll_y - header_offset
}

/// What [`perform`] actually did.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// No action was dispatched.
    Nothing,
    /// A smooth scroll was started.
    Scrolled {
        /// Anchor scrolled to.
        anchor: String,
        /// Absolute page offset passed to the viewport.
        top: f64,
    },
    /// The anchor was not rendered, so the scroll was skipped.
    MissingAnchor {
        /// Anchor that could not be found.
        anchor: String,
    },
    /// A full navigation was requested.
    Navigated {
        /// Location passed to the navigator.
        href: String,
    },
}

/// Carry out `transition` against the host.
///
/// A missing anchor is not an error: nothing is dispatched and
/// [`Effect::MissingAnchor`] is returned.
pub fn perform<H: Viewport + Navigator + ?Sized>(
    transition: Transition,
    host: &mut H,
    header_offset: f64,
) -> Effect {
    match transition {
        Transition::None => Effect::Nothing,
        Transition::Navigate { href } => {
            host.navigate(&href);
            Effect::Navigated { href }
        }
        Transition::ScrollTo { anchor } => match host.anchor_rect(&anchor) {
            Some(rect) => {
                let top = scroll_target(rect, host.scroll_y(), header_offset);
                host.smooth_scroll_to(top);
                Effect::Scrolled { anchor, top }
            }
            None => Effect::MissingAnchor { anchor },
        },
    }
}
