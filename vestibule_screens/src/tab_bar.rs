// Copyright 2026 the Vestibule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bottom tab navigation shell model.
//!
//! Four poster-side routes — home, tasks, notifications, profile — each with
//! an icon token and label. The host navigation framework owns the actual
//! route-to-screen mapping and renders the bar; this model only tracks the
//! active route and answers per-route styling queries.
//!
//! ## Minimal example
//!
//! ```
//! use vestibule_screens::tab_bar::{Route, TabBarModel};
//! use vestibule_screens::theme;
//!
//! let mut bar = TabBarModel::new();
//! assert_eq!(bar.active(), Route::Home);
//! assert_eq!(bar.tint(Route::Home), theme::TAB_ACTIVE_TINT);
//!
//! let previous = bar.select(Route::Notifications);
//! assert_eq!(previous, Some(Route::Home));
//! assert_eq!(bar.tint(Route::Home), theme::TAB_INACTIVE_TINT);
//! ```

use peniko::Color;

use crate::theme;

/// A poster-side tab route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// The home dashboard.
    Home,
    /// The tasks list.
    Tasks,
    /// Bid and status notifications.
    Notifications,
    /// Profile editing.
    Profile,
}

impl Route {
    /// All routes in bar order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Tasks, Self::Notifications, Self::Profile];

    /// Bar label for the route.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Tasks => "Tasks",
            Self::Notifications => "Notifications",
            Self::Profile => "Profile",
        }
    }

    /// Icon name resolved by the host's icon provider.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Home => "home-outline",
            Self::Tasks => "list-outline",
            Self::Notifications => "notifications-outline",
            Self::Profile => "person-circle-outline",
        }
    }
}

/// The tab bar view model. The initial route is [`Route::Home`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabBarModel {
    active: Route,
}

impl TabBarModel {
    /// Creates the bar with the home route active.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: Route::Home,
        }
    }

    /// The active route.
    #[must_use]
    pub fn active(self) -> Route {
        self.active
    }

    /// Activates `route`, returning the previously active route when the
    /// selection changed, for the host to report.
    pub fn select(&mut self, route: Route) -> Option<Route> {
        if route == self.active {
            return None;
        }
        Some(core::mem::replace(&mut self.active, route))
    }

    /// Tint for `route`'s icon and label.
    #[must_use]
    pub fn tint(self, route: Route) -> Color {
        if route == self.active {
            theme::TAB_ACTIVE_TINT
        } else {
            theme::TAB_INACTIVE_TINT
        }
    }
}

impl Default for TabBarModel {
    fn default() -> Self {
        Self::new()
    }
}
