// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Sections: a validated, immutable registry of navigable page sections.
//!
//! ## Overview
//!
//! A site's navigation is a fixed, ordered list of `(id, label, destination)` triples.
//! A destination is either a page path (`/professional`) or a page path plus an
//! in-page anchor (`/#about`).
//! This crate parses destinations against a small grammar and rejects malformed
//! or duplicate entries when the registry is built, so the rest of the stack can
//! treat every entry as well-formed.
//!
//! ## API overview
//!
//! - [`Destination`](crate::destination::Destination): parsed `path[#fragment]`.
//! - [`route_of`](crate::destination::route_of): reduce a location to its route.
//! - [`SectionSpec`]: raw, unvalidated triple (deserializable with the `serde` feature).
//! - [`RegistryBuilder`] → [`SectionRegistry`]: validation and ordered lookup.
//! - [`SectionEntry`] / [`SectionKind`]: validated entries and their classification.
//! - [`site`]: the portfolio's navigation and footer tables.
//!
//! ## Tracked sections
//!
//! Anchor entries whose path is the home route are the sections a scroll observer
//! tests while the user scrolls the single-page home view.
//! [`SectionRegistry::tracked_sections`] yields them in registry order.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod destination;
pub mod registry;
pub mod site;
pub mod types;

pub use registry::{RegistryBuilder, RegistryError, SectionRegistry};
pub use types::{SectionEntry, SectionKind, SectionSpec};
