// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The portfolio's fixed link tables.
//!
//! These are static configuration. Building them can only fail if a table
//! below is edited into an invalid state, which the tests in this module catch.

use crate::registry::{RegistryBuilder, RegistryError, SectionRegistry};

/// The primary navigation bar: home, the five home-page sections, and the
/// standalone professional showcase page.
pub fn primary_navigation() -> Result<SectionRegistry, RegistryError> {
    RegistryBuilder::new()
        .entry("home", "Home", "/")
        .entry("about", "About", "/#about")
        .entry("skills", "Skills", "/#skills")
        .entry("projects", "Projects", "/#projects")
        .entry("blog", "Blog", "/#blog")
        .entry("contact", "Contact", "/#contact")
        .entry("professional", "Professional", "/professional")
        .build()
}

/// Footer "Quick Links" column.
pub fn footer_quick_links() -> Result<SectionRegistry, RegistryError> {
    RegistryBuilder::new()
        .entry("home", "Home", "/")
        .entry("about", "About", "/#about")
        .entry("projects", "Projects", "/#projects")
        .entry("blog", "Blog", "/#blog")
        .entry("contact", "Contact", "/#contact")
        .build()
}

/// Footer "Professional" column; anchors on the showcase page.
pub fn footer_professional() -> Result<SectionRegistry, RegistryError> {
    RegistryBuilder::new()
        .entry("resume", "Resume", "/professional#resume")
        .entry("skills", "Skills", "/professional#skills")
        .entry("experience", "Experience", "/professional#experience")
        .entry("education", "Education", "/professional#education")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SectionEntry, SectionKind};
    use alloc::vec::Vec;

    #[test]
    fn primary_navigation_builds_in_order() {
        let nav = primary_navigation().unwrap();
        let labels: Vec<_> = nav.iter().map(SectionEntry::label).collect();
        assert_eq!(
            labels,
            [
                "Home",
                "About",
                "Skills",
                "Projects",
                "Blog",
                "Contact",
                "Professional"
            ]
        );
        assert_eq!(
            nav.tracked_sections().collect::<Vec<_>>(),
            ["about", "skills", "projects", "blog", "contact"]
        );
        assert_eq!(
            nav.get("professional").map(SectionEntry::kind),
            Some(SectionKind::Page)
        );
    }

    #[test]
    fn footer_tables_build() {
        let quick = footer_quick_links().unwrap();
        assert_eq!(quick.len(), 5);
        assert_eq!(quick.home().map(SectionEntry::id), Some("home"));

        let pro = footer_professional().unwrap();
        assert_eq!(pro.len(), 4);
        // Showcase anchors live off the home route and are never scroll-tracked.
        assert_eq!(pro.tracked_sections().count(), 0);
        assert!(pro.iter().all(|e| e.destination().path() == "/professional"));
    }
}
