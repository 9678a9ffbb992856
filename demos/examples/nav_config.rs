// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host configuration.
//!
//! Load a registry and pixel constants from JSON, as a host would from its
//! own configuration, and show that malformed entries are rejected up front.
//!
//! Run:
//! - `cargo run -p folio_demos --example nav_config`

use folio_demos::{SimulatedPage, init_tracing};
use folio_nav::controller::NavController;
use folio_nav::resolver::Effect;
use folio_nav::types::NavConfig;
use folio_sections::{RegistryError, SectionRegistry, SectionSpec};
use tracing::info;

const SHOWCASE_NAV: &str = r#"[
    {"id": "showcase", "label": "Showcase", "href": "/professional"},
    {"id": "resume", "label": "Resume", "href": "/professional#resume"},
    {"id": "education", "label": "Education", "href": "/professional#education"}
]"#;

const CONFIG: &str = r#"{"header_offset": 64.0}"#;

fn main() {
    init_tracing();

    let specs: Vec<SectionSpec> = serde_json::from_str(SHOWCASE_NAV).expect("valid JSON");
    let registry = SectionRegistry::from_specs(specs).expect("valid registry");
    let config: NavConfig = serde_json::from_str(CONFIG).expect("valid JSON");
    info!("config: {config:?}");

    let mut page = SimulatedPage::professional();
    let mut nav = NavController::with_config(&registry, &page.location, config);
    nav.mount(&mut page);

    let effect = nav.click("education", &mut page);
    info!("click Education: {effect:?}");
    // `education` starts at 400 + 900 + 40 + 700 + 40 + 1100 + 40 = 3220.
    assert_eq!(
        effect,
        Effect::Scrolled {
            anchor: "education".into(),
            top: 3156.0
        }
    );
    nav.unmount(&mut page);

    let broken = vec![
        SectionSpec::new("resume", "Resume", "/professional#resume"),
        SectionSpec::new("cv", "CV", "/professional#resume"),
    ];
    let err = SectionRegistry::from_specs(broken).unwrap_err();
    info!("rejected: {err}");
    assert!(matches!(err, RegistryError::FragmentMismatch { .. }));
}
