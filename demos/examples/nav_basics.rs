// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation basics.
//!
//! Mount the primary navigation on the home page, click through a few
//! entries, and follow a cross-page navigation to the showcase and back.
//!
//! Run:
//! - `cargo run -p folio_demos --example nav_basics`

use folio_demos::{SimulatedPage, init_tracing};
use folio_nav::controller::NavController;
use folio_nav::resolver::Effect;
use folio_sections::site::primary_navigation;
use tracing::info;

fn log_bar(nav: &NavController<'_, u64>) {
    let line: Vec<String> = nav
        .items()
        .map(|(e, on)| {
            if on {
                format!("[{}]", e.label())
            } else {
                e.label().to_string()
            }
        })
        .collect();
    info!("  {}  (menu open: {})", line.join(" "), nav.is_menu_open());
}

fn main() {
    init_tracing();
    let registry = primary_navigation().expect("primary navigation table is valid");

    let mut home = SimulatedPage::home();
    let mut nav = NavController::new(&registry, &home.location);
    nav.mount(&mut home);
    info!("== Top of home ==");
    log_bar(&nav);

    // In-page anchor: smooth scroll, then the next scroll sample highlights it.
    nav.toggle_menu();
    let effect = nav.click("projects", &mut home);
    nav.on_scroll(&home);
    info!("== Click Projects ==\n  {effect:?}");
    log_bar(&nav);
    assert!(matches!(effect, Effect::Scrolled { .. }));
    assert!(nav.is_active("projects"));

    // Standalone page: full navigation; the host reports the route change.
    let effect = nav.click("professional", &mut home);
    info!("== Click Professional ==\n  {effect:?}");
    nav.unmount(&mut home);

    let mut showcase = SimulatedPage::professional();
    nav.set_route(&showcase.location);
    nav.mount(&mut showcase);
    log_bar(&nav);
    assert!(nav.is_active("professional"));

    // Clicking the current page again does nothing.
    assert_eq!(nav.click("professional", &mut showcase), Effect::Nothing);

    // Anchor on another page: navigate with the fragment still attached.
    let effect = nav.click("contact", &mut showcase);
    info!("== Click Contact from showcase ==\n  {effect:?}");
    assert_eq!(home.navigations, ["/professional"]);
    assert_eq!(showcase.navigations, ["/#contact"]);
    nav.unmount(&mut showcase);
}
