// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigation controller: owns [`NavigationState`] for one mounted nav view.
//!
//! ## Lifecycle
//!
//! - [`NavController::mount`] registers one scroll listener and takes an initial sample.
//! - The host forwards each scroll event to [`NavController::on_scroll`] and each
//!   route change to [`NavController::set_route`].
//! - Clicks go through [`NavController::click`], which always closes the mobile menu first.
//! - [`NavController::unmount`] releases the listener.
//!
//! All entry points run synchronously on the UI thread; the host delivers events serially.
//!
//! ## Active section
//!
//! The active section is only tracked on the home route. Inside it, a scroll
//! sample with no crossing section keeps the previous value. Leaving the home
//! route clears it.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;

use folio_sections::destination::{ROOT_PATH, route_of};
use folio_sections::{SectionEntry, SectionRegistry};
use tracing::{debug, trace, warn};

use crate::active;
use crate::resolver::{Effect, perform, resolve};
use crate::scroll::ScrollObserver;
use crate::types::{NavConfig, NavFlags, NavigationState, Navigator, ScrollEvents, Viewport};

/// Section-aware navigation controller.
///
/// `I` is the host's scroll listener handle; see [`ScrollEvents::ListenerId`].
///
/// ## Usage
///
/// ```
/// use folio_nav::controller::NavController;
/// use folio_sections::site::primary_navigation;
///
/// let registry = primary_navigation().unwrap();
/// let mut nav: NavController<'_, u32> = NavController::new(&registry, "/");
/// nav.toggle_menu();
/// assert!(nav.is_menu_open());
/// assert!(nav.is_active("home"));
/// ```
pub struct NavController<'r, I> {
    registry: &'r SectionRegistry,
    config: NavConfig,
    observer: ScrollObserver,
    route: String,
    state: NavigationState,
    listener: Option<I>,
}

impl<I: Debug> Debug for NavController<'_, I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NavController")
            .field("route", &self.route)
            .field("state", &self.state)
            .field("listener", &self.listener)
            .finish_non_exhaustive()
    }
}

impl<'r, I: Copy + Debug> NavController<'r, I> {
    /// Create a controller for `registry` at `location` with default pixel constants.
    pub fn new(registry: &'r SectionRegistry, location: &str) -> Self {
        Self::with_config(registry, location, NavConfig::default())
    }

    /// Create a controller with explicit pixel constants.
    pub fn with_config(registry: &'r SectionRegistry, location: &str, config: NavConfig) -> Self {
        Self {
            registry,
            observer: ScrollObserver::new(registry, &config),
            config,
            route: route_of(location).into(),
            state: NavigationState::default(),
            listener: None,
        }
    }

    /// Register the scroll listener and take the initial sample.
    ///
    /// Mounting an already mounted controller only re-samples.
    pub fn mount<H>(&mut self, host: &mut H)
    where
        H: ScrollEvents<ListenerId = I> + Viewport + ?Sized,
    {
        if self.listener.is_none() {
            let id = host.add_scroll_listener();
            debug!(listener = ?id, route = %self.route, "navigation mounted");
            self.listener = Some(id);
        }
        self.on_scroll(host);
    }

    /// Deregister the scroll listener. A no-op when not mounted.
    pub fn unmount<E>(&mut self, events: &mut E)
    where
        E: ScrollEvents<ListenerId = I> + ?Sized,
    {
        if let Some(id) = self.listener.take() {
            events.remove_scroll_listener(id);
            debug!(listener = ?id, "navigation unmounted");
        }
    }

    /// Returns `true` between [`mount`](Self::mount) and [`unmount`](Self::unmount).
    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    /// Handle one scroll event. Returns `true` if the active section changed.
    pub fn on_scroll<V: Viewport + ?Sized>(&mut self, viewport: &V) -> bool {
        let sample = self.observer.sample(viewport);
        self.state.flags.set(NavFlags::SCROLLED, sample.scrolled);
        trace!(scrolled = sample.scrolled, section = ?sample.section, "scroll sample");

        if self.route != ROOT_PATH {
            return false;
        }
        match sample.section {
            Some(id) if self.state.active_section.as_deref() != Some(id) => {
                debug!(from = ?self.state.active_section, to = id, "active section changed");
                self.state.active_section = Some(id.into());
                true
            }
            _ => false,
        }
    }

    /// Record a route change reported by the routing facility.
    pub fn set_route(&mut self, location: &str) {
        let route = route_of(location);
        if route == self.route {
            return;
        }
        debug!(from = %self.route, to = route, "route changed");
        self.route = route.into();
        if route != ROOT_PATH {
            self.state.active_section = None;
        }
    }

    /// Flip the mobile menu.
    pub fn toggle_menu(&mut self) {
        self.state.flags.toggle(NavFlags::MENU_OPEN);
    }

    /// Close the mobile menu.
    pub fn close_menu(&mut self) {
        self.state.flags.remove(NavFlags::MENU_OPEN);
    }

    /// Handle a click on the entry with `id`.
    ///
    /// The menu is closed before anything else. Unknown ids dispatch nothing and
    /// return [`Effect::Nothing`]; anchors that are not rendered dispatch nothing
    /// and return [`Effect::MissingAnchor`].
    pub fn click<H: Viewport + Navigator + ?Sized>(&mut self, id: &str, host: &mut H) -> Effect {
        self.close_menu();
        let Some(entry) = self.registry.get(id) else {
            warn!(id, "click on an entry missing from the registry");
            return Effect::Nothing;
        };

        let transition = resolve(entry.destination(), &self.route);
        debug!(id, route = %self.route, ?transition, "resolved navigation");
        let effect = perform(transition, host, self.config.header_offset);
        if let Effect::MissingAnchor { anchor } = &effect {
            debug!(anchor = anchor.as_str(), "anchor not rendered; scroll skipped");
        }
        effect
    }

    /// Handle a click on the brand link, which targets the registry's home entry.
    ///
    /// Registries without a home entry dispatch nothing.
    pub fn click_brand<H: Viewport + Navigator + ?Sized>(&mut self, host: &mut H) -> Effect {
        let registry = self.registry;
        match registry.home() {
            Some(home) => self.click(home.id(), host),
            None => {
                self.close_menu();
                Effect::Nothing
            }
        }
    }

    /// Current state.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Current fragment-free route.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Registry driving this controller.
    pub fn registry(&self) -> &'r SectionRegistry {
        self.registry
    }

    /// Pixel constants in effect.
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Returns `true` while the mobile menu is open.
    pub fn is_menu_open(&self) -> bool {
        self.state.is_menu_open()
    }

    /// Returns `true` once the page has scrolled past the cosmetic threshold.
    pub fn is_scrolled(&self) -> bool {
        self.state.has_scrolled_past_threshold()
    }

    /// The active section, if any.
    pub fn active_section(&self) -> Option<&str> {
        self.state.active_section()
    }

    /// One active flag per registry entry, in registry order.
    pub fn active_flags(&self) -> Vec<bool> {
        active::project(self.registry, &self.route, self.active_section())
    }

    /// Returns `true` if the entry with `id` is highlighted. Unknown ids are never active.
    pub fn is_active(&self, id: &str) -> bool {
        self.registry
            .get(id)
            .is_some_and(|e| active::is_active(e, &self.route, self.active_section()))
    }

    /// Entries paired with their active flag, for rendering.
    pub fn items(&self) -> impl Iterator<Item = (&'r SectionEntry, bool)> + '_ {
        self.registry
            .iter()
            .map(|e| (e, active::is_active(e, &self.route, self.active_section())))
    }
}

impl<I> Drop for NavController<'_, I> {
    fn drop(&mut self) {
        if self.listener.is_some() {
            warn!("navigation dropped while mounted; scroll listener was not released");
        }
    }
}
