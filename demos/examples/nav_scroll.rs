// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll tracking.
//!
//! Scroll the home page top to bottom in fixed steps and print each change of
//! the active section. The 40px gaps between sections never clear the
//! highlight; the previous section is kept until the next one crosses the line.
//!
//! Run:
//! - `cargo run -p folio_demos --example nav_scroll`
//! - `RUST_LOG=trace cargo run -p folio_demos --example nav_scroll` to see every sample

use folio_demos::{SimulatedPage, init_tracing};
use folio_nav::controller::NavController;
use folio_sections::site::primary_navigation;
use tracing::info;

fn main() {
    init_tracing();
    let registry = primary_navigation().expect("primary navigation table is valid");
    let mut page = SimulatedPage::home();
    let mut nav = NavController::new(&registry, "/");
    nav.mount(&mut page);
    assert_eq!(page.listener_count(), 1);

    let mut order = Vec::new();
    let mut y = 0.0;
    while y <= 4800.0 {
        page.scroll_y = y;
        if nav.on_scroll(&page) {
            let section = nav.active_section().unwrap_or("-");
            info!("{y:>6.0}px  scrolled={}  active={section}", nav.is_scrolled());
            order.push(section.to_string());
        }
        y += 20.0;
    }

    assert_eq!(order, ["about", "skills", "projects", "blog", "contact"]);

    // Scroll back to the hero: the last section stays highlighted.
    page.scroll_y = 0.0;
    nav.on_scroll(&page);
    info!(
        "back to top: active={:?} home highlighted={}",
        nav.active_section(),
        nav.is_active("home")
    );
    assert_eq!(nav.active_section(), Some("contact"));

    nav.unmount(&mut page);
    assert_eq!(page.listener_count(), 0);
}
