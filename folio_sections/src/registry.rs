// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered, immutable section registry and its validating builder.
//!
//! ## Validation
//!
//! [`RegistryBuilder::build`] checks, in order, for every spec:
//! - the id is non-empty;
//! - the href parses as a [`Destination`];
//! - anchor entries use their fragment as their id, so a scroll-tracked
//!   section id always names exactly one entry;
//! - the id is unique across the registry.
//!
//! The first failure is returned; nothing is built partially.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;

use crate::destination::{Destination, DestinationError};
use crate::types::{SectionEntry, SectionKind, SectionSpec};

/// Errors produced while building a [`SectionRegistry`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A spec had an empty id.
    #[error("section labelled `{label}` has an empty id")]
    EmptyId {
        /// Label of the offending spec.
        label: String,
    },
    /// Two specs shared an id.
    #[error("duplicate section id `{0}`")]
    DuplicateId(String),
    /// A spec's href did not parse.
    #[error("section `{id}` has an invalid destination")]
    InvalidDestination {
        /// Id of the offending spec.
        id: String,
        /// Underlying parse failure.
        #[source]
        source: DestinationError,
    },
    /// An anchor spec's id differs from its fragment.
    #[error("anchor section `{id}` must use its fragment `{fragment}` as its id")]
    FragmentMismatch {
        /// Id of the offending spec.
        id: String,
        /// Fragment named by its href.
        fragment: String,
    },
}

/// Collects [`SectionSpec`]s and validates them into a [`SectionRegistry`].
#[derive(Clone, Debug, Default)]
pub struct RegistryBuilder {
    specs: Vec<SectionSpec>,
}

impl RegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry; registry order is insertion order.
    pub fn entry(mut self, id: &str, label: &str, href: &str) -> Self {
        self.specs.push(SectionSpec::new(id, label, href));
        self
    }

    /// Append a raw spec.
    pub fn spec(mut self, spec: SectionSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// Validate every spec and freeze the registry.
    pub fn build(self) -> Result<SectionRegistry, RegistryError> {
        let mut seen = BTreeSet::new();
        let mut entries = Vec::with_capacity(self.specs.len());
        for SectionSpec { id, label, href } in self.specs {
            if id.is_empty() {
                return Err(RegistryError::EmptyId { label });
            }
            let destination = match Destination::parse(&href) {
                Ok(d) => d,
                Err(source) => return Err(RegistryError::InvalidDestination { id, source }),
            };
            if let Some(fragment) = destination.fragment()
                && fragment != id
            {
                return Err(RegistryError::FragmentMismatch {
                    fragment: fragment.into(),
                    id,
                });
            }
            if !seen.insert(id.clone()) {
                return Err(RegistryError::DuplicateId(id));
            }
            entries.push(SectionEntry {
                id,
                label,
                destination,
            });
        }
        Ok(SectionRegistry { entries })
    }
}

/// An ordered, immutable sequence of [`SectionEntry`].
///
/// ## Usage
///
/// Build once at startup with [`RegistryBuilder`] (or [`SectionRegistry::from_specs`])
/// and share by reference. Lookups for unknown ids return `None`.
///
/// ```
/// use folio_sections::{RegistryBuilder, SectionKind};
///
/// let registry = RegistryBuilder::new()
///     .entry("home", "Home", "/")
///     .entry("about", "About", "/#about")
///     .entry("professional", "Professional", "/professional")
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.len(), 3);
/// assert_eq!(registry.get("about").unwrap().kind(), SectionKind::Anchor);
/// assert!(registry.get("missing").is_none());
/// assert_eq!(registry.tracked_sections().collect::<Vec<_>>(), ["about"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionRegistry {
    entries: Vec<SectionEntry>,
}

impl SectionRegistry {
    /// Validate raw specs into a registry, preserving their order.
    pub fn from_specs(specs: impl IntoIterator<Item = SectionSpec>) -> Result<Self, RegistryError> {
        specs
            .into_iter()
            .fold(RegistryBuilder::new(), RegistryBuilder::spec)
            .build()
    }

    /// Iterate entries in registry order.
    pub fn iter(&self) -> core::slice::Iter<'_, SectionEntry> {
        self.entries.iter()
    }

    /// Entries as a slice, in registry order.
    pub fn entries(&self) -> &[SectionEntry] {
        &self.entries
    }

    /// Look up an entry by id.
    pub fn get(&self, id: &str) -> Option<&SectionEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Registry position of the entry with `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry pointing at the home route, if any.
    pub fn home(&self) -> Option<&SectionEntry> {
        self.entries.iter().find(|e| e.kind() == SectionKind::Home)
    }

    /// Ids of anchor entries hosted on the home route, in registry order.
    ///
    /// These are the candidates tested while scrolling the home view.
    pub fn tracked_sections(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .filter(|e| e.kind() == SectionKind::Anchor && e.destination.is_root())
            .map(|e| e.id.as_str())
    }
}

impl<'a> IntoIterator for &'a SectionRegistry {
    type Item = &'a SectionEntry;
    type IntoIter = core::slice::Iter<'a, SectionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn sample() -> SectionRegistry {
        RegistryBuilder::new()
            .entry("home", "Home", "/")
            .entry("about", "About", "/#about")
            .entry("skills", "Skills", "/#skills")
            .entry("professional", "Professional", "/professional")
            .entry("resume", "Resume", "/professional#resume")
            .build()
            .unwrap()
    }

    #[test]
    fn preserves_insertion_order() {
        let r = sample();
        let ids: Vec<_> = r.iter().map(SectionEntry::id).collect();
        assert_eq!(ids, ["home", "about", "skills", "professional", "resume"]);
        assert_eq!(r.position("skills"), Some(2));
        assert_eq!(r.position("nope"), None);
    }

    #[test]
    fn classifies_entries() {
        let r = sample();
        assert_eq!(r.get("home").unwrap().kind(), SectionKind::Home);
        assert_eq!(r.get("about").unwrap().kind(), SectionKind::Anchor);
        assert_eq!(r.get("professional").unwrap().kind(), SectionKind::Page);
        assert_eq!(r.get("resume").unwrap().kind(), SectionKind::Anchor);
        assert_eq!(r.home().map(SectionEntry::id), Some("home"));
    }

    #[test]
    fn tracked_sections_are_home_anchors_only() {
        let r = sample();
        let tracked: Vec<_> = r.tracked_sections().collect();
        assert_eq!(tracked, ["about", "skills"]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = RegistryBuilder::new()
            .entry("home", "Home", "/")
            .entry("home", "Start", "/start")
            .build()
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateId("home".to_string()));
    }

    #[test]
    fn rejects_empty_id() {
        let err = RegistryBuilder::new()
            .entry("", "Nameless", "/")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::EmptyId {
                label: "Nameless".to_string()
            }
        );
    }

    #[test]
    fn rejects_malformed_destination() {
        let err = RegistryBuilder::new()
            .entry("about", "About", "about")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidDestination {
                id: "about".to_string(),
                source: DestinationError::MissingLeadingSlash("about".to_string()),
            }
        );
    }

    #[test]
    fn rejects_anchor_id_mismatch() {
        let err = RegistryBuilder::new()
            .entry("bio", "About", "/#about")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::FragmentMismatch {
                id: "bio".to_string(),
                fragment: "about".to_string(),
            }
        );
    }

    #[test]
    fn from_specs_matches_builder() {
        let specs = vec![
            SectionSpec::new("home", "Home", "/"),
            SectionSpec::new("about", "About", "/#about"),
        ];
        let a = SectionRegistry::from_specs(specs).unwrap();
        let b = RegistryBuilder::new()
            .entry("home", "Home", "/")
            .entry("about", "About", "/#about")
            .build()
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_registry_is_valid() {
        let r = RegistryBuilder::new().build().unwrap();
        assert!(r.is_empty());
        assert!(r.home().is_none());
        assert_eq!(r.tracked_sections().count(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn specs_deserialize_from_json() {
        let json = r#"[
            {"id": "home", "label": "Home", "href": "/"},
            {"id": "contact", "label": "Contact", "href": "/#contact"}
        ]"#;
        let specs: Vec<SectionSpec> = serde_json::from_str(json).unwrap();
        let r = SectionRegistry::from_specs(specs).unwrap();
        assert_eq!(r.tracked_sections().collect::<Vec<_>>(), ["contact"]);
    }
}
