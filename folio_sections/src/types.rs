// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the registry: raw specs, validated entries, and entry kinds.

use alloc::string::String;

use crate::destination::Destination;

/// How an entry behaves with respect to routing and highlighting.
///
/// Derived from the entry's [`Destination`]; see [`SectionEntry::kind`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// The home route itself (`/` with no fragment).
    Home,
    /// A standalone page with no fragment, for example `/professional`.
    Page,
    /// An in-page anchor, for example `/#about`.
    Anchor,
}

/// An unvalidated `(id, label, href)` triple.
///
/// This is the input to [`RegistryBuilder`](crate::RegistryBuilder). With the
/// `serde` feature it can be deserialized from host configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionSpec {
    /// Stable identifier, unique within a registry.
    pub id: String,
    /// Human-readable text.
    pub label: String,
    /// Destination in `path` or `path#fragment` form.
    pub href: String,
}

impl SectionSpec {
    /// Convenience constructor for static tables.
    pub fn new(id: &str, label: &str, href: &str) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            href: href.into(),
        }
    }
}

/// One validated, navigable destination.
///
/// Entries are created by a [`SectionRegistry`](crate::SectionRegistry) and are
/// never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionEntry {
    pub(crate) id: String,
    pub(crate) label: String,
    pub(crate) destination: Destination,
}

impl SectionEntry {
    /// Stable identifier. For anchor entries this is also the anchor name.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Parsed destination.
    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Classify this entry.
    pub fn kind(&self) -> SectionKind {
        match (self.destination.is_anchor(), self.destination.is_root()) {
            (true, _) => SectionKind::Anchor,
            (false, true) => SectionKind::Home,
            (false, false) => SectionKind::Page,
        }
    }
}
