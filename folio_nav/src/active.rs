// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-state projection: which entries are highlighted.
//!
//! Rules, by [`SectionKind`]:
//! - `Home`: active on the home route while no section is active.
//! - `Page`: active only on an exact route match, never by scroll position.
//! - `Anchor`: active on the home route when the active section is its fragment.
//!
//! Projection is pure and total; recompute it whenever the route or the
//! active section changes.

use alloc::vec::Vec;

use folio_sections::destination::{ROOT_PATH, route_of};
use folio_sections::{SectionEntry, SectionKind, SectionRegistry};

/// Returns `true` if `entry` should be highlighted.
///
/// `current_route` may carry a fragment or query; only its path is compared.
pub fn is_active(entry: &SectionEntry, current_route: &str, active_section: Option<&str>) -> bool {
    let route = route_of(current_route);
    match entry.kind() {
        SectionKind::Home => route == ROOT_PATH && active_section.is_none(),
        SectionKind::Page => route == entry.destination().path(),
        SectionKind::Anchor => {
            route == ROOT_PATH
                && active_section.is_some_and(|id| entry.destination().fragment() == Some(id))
        }
    }
}

/// One active flag per registry entry, in registry order.
pub fn project(
    registry: &SectionRegistry,
    current_route: &str,
    active_section: Option<&str>,
) -> Vec<bool> {
    registry
        .iter()
        .map(|entry| is_active(entry, current_route, active_section))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_sections::site::primary_navigation;

    fn nav() -> SectionRegistry {
        primary_navigation().unwrap()
    }

    #[test]
    fn home_active_only_at_top_of_home() {
        let r = nav();
        let home = r.get("home").unwrap();
        assert!(is_active(home, "/", None));
        assert!(!is_active(home, "/", Some("about")));
        assert!(!is_active(home, "/professional", None));
    }

    #[test]
    fn anchor_active_only_on_home_route() {
        let r = nav();
        let about = r.get("about").unwrap();
        assert!(is_active(about, "/", Some("about")));
        assert!(!is_active(about, "/", Some("skills")));
        assert!(!is_active(about, "/", None));
        assert!(!is_active(about, "/professional", Some("about")));
        assert!(!is_active(about, "/professional", None));
    }

    #[test]
    fn page_active_by_route_only() {
        let r = nav();
        let pro = r.get("professional").unwrap();
        assert!(is_active(pro, "/professional", None));
        assert!(is_active(pro, "/professional", Some("skills")));
        assert!(is_active(pro, "/professional#resume", None));
        assert!(!is_active(pro, "/", Some("professional")));
    }

    #[test]
    fn off_site_anchor_is_never_highlighted() {
        let r = folio_sections::site::footer_professional().unwrap();
        let resume = r.get("resume").unwrap();
        assert!(!is_active(resume, "/professional", Some("resume")));
    }

    #[test]
    fn projection_marks_exactly_one_entry() {
        let r = nav();
        assert_eq!(
            project(&r, "/", None),
            [true, false, false, false, false, false, false]
        );
        assert_eq!(
            project(&r, "/", Some("blog")),
            [false, false, false, false, true, false, false]
        );
        assert_eq!(
            project(&r, "/professional", Some("blog")),
            [false, false, false, false, false, false, true]
        );
        // Detail pages host no nav entry.
        assert!(project(&r, "/blog/first-post", None).iter().all(|a| !a));
    }

    #[test]
    fn projection_is_deterministic() {
        let r = nav();
        let a = project(&r, "/", Some("contact"));
        let b = project(&r, "/", Some("contact"));
        assert_eq!(a, b);
        assert_eq!(a.len(), r.len());
    }
}
