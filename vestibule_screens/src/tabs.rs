// Copyright 2026 the Vestibule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The task-list tab switcher.
//!
//! A horizontal strip of pill tabs (`Active (3)`, `Pending Review (2)`, …),
//! generic over the application's tab id type. The switcher tracks which id
//! is active and derives each pill's colors from that; it notifies the host
//! of a selection by returning the change rather than invoking a callback,
//! so any `on_tab_change`-style mechanism can sit on top.
//!
//! ## Minimal example
//!
//! ```
//! use vestibule_screens::tabs::{TabChange, TabSwitcher};
//!
//! let mut switcher = TabSwitcher::poster_home();
//! assert_eq!(switcher.active(), &"active");
//!
//! // Forward the returned change to the host's on_tab_change handler.
//! let change = switcher.select("pending");
//! assert_eq!(change, Some(TabChange { from: "active", to: "pending" }));
//!
//! // Re-selecting the active tab reports nothing.
//! assert_eq!(switcher.select("pending"), None);
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use alloc::{format, vec};

use peniko::Color;

use crate::theme;

/// One selectable tab.
#[derive(Clone, Debug, PartialEq)]
pub struct Tab<I> {
    /// Application-defined id reported on selection.
    pub id: I,
    /// Display label.
    pub label: String,
    /// Count rendered after the label, untouched.
    pub count: u32,
}

impl<I> Tab<I> {
    /// Formats the pill text the way the switcher renders it.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} ({})", self.label, self.count)
    }
}

/// Colors for one pill, derived from its active state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabStyle {
    /// Pill fill.
    pub background: Color,
    /// Pill border.
    pub border: Color,
    /// Label text color.
    pub label: Color,
}

/// A reported selection change, in the shape of an `on_tab_change(id)`
/// notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabChange<I> {
    /// Previously active id.
    pub from: I,
    /// Newly active id.
    pub to: I,
}

/// The tab switcher view model.
#[derive(Clone, Debug)]
pub struct TabSwitcher<I> {
    tabs: Vec<Tab<I>>,
    active: I,
}

impl TabSwitcher<&'static str> {
    /// The poster home screen's switcher: Active, Pending Review, Completed.
    #[must_use]
    pub fn poster_home() -> Self {
        Self::new(
            vec![
                Tab {
                    id: "active",
                    label: String::from("Active"),
                    count: 3,
                },
                Tab {
                    id: "pending",
                    label: String::from("Pending Review"),
                    count: 2,
                },
                Tab {
                    id: "completed",
                    label: String::from("Completed"),
                    count: 5,
                },
            ],
            "active",
        )
    }
}

impl<I: PartialEq + Clone> TabSwitcher<I> {
    /// Creates a switcher with `initial` active.
    #[must_use]
    pub fn new(tabs: Vec<Tab<I>>, initial: I) -> Self {
        Self {
            tabs,
            active: initial,
        }
    }

    /// The tabs, in render order.
    #[must_use]
    pub fn tabs(&self) -> &[Tab<I>] {
        &self.tabs
    }

    /// The currently active id.
    #[must_use]
    pub fn active(&self) -> &I {
        &self.active
    }

    /// Selects `id`, returning the change for the host to report.
    ///
    /// Returns `None` when `id` is already active or names no tab; the
    /// selection is left unchanged in both cases.
    pub fn select(&mut self, id: I) -> Option<TabChange<I>> {
        if id == self.active || !self.tabs.iter().any(|tab| tab.id == id) {
            return None;
        }
        let from = core::mem::replace(&mut self.active, id.clone());
        Some(TabChange { from, to: id })
    }

    /// Colors for the pill with `id`, derived from the active selection.
    #[must_use]
    pub fn tab_style(&self, id: &I) -> TabStyle {
        if *id == self.active {
            TabStyle {
                background: theme::INDIGO,
                border: theme::INDIGO,
                label: theme::WHITE,
            }
        } else {
            TabStyle {
                background: theme::WHITE,
                border: theme::SWITCHER_IDLE_BORDER,
                label: theme::SWITCHER_IDLE_LABEL,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poster_home_defaults() {
        let switcher = TabSwitcher::poster_home();
        assert_eq!(switcher.active(), &"active");
        assert_eq!(switcher.tabs().len(), 3);
        assert_eq!(switcher.tabs()[1].display(), "Pending Review (2)");
    }

    #[test]
    fn select_reports_the_change() {
        let mut switcher = TabSwitcher::poster_home();
        let change = switcher.select("completed");
        assert_eq!(
            change,
            Some(TabChange {
                from: "active",
                to: "completed",
            })
        );
        assert_eq!(switcher.active(), &"completed");
    }

    #[test]
    fn reselecting_the_active_tab_reports_nothing() {
        let mut switcher = TabSwitcher::poster_home();
        assert_eq!(switcher.select("active"), None);
        assert_eq!(switcher.active(), &"active");
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut switcher = TabSwitcher::poster_home();
        assert_eq!(switcher.select("archived"), None);
        assert_eq!(switcher.active(), &"active");
    }

    #[test]
    fn active_pill_is_filled_indigo() {
        let switcher = TabSwitcher::poster_home();
        let style = switcher.tab_style(&"active");
        assert_eq!(style.background, theme::INDIGO);
        assert_eq!(style.label, theme::WHITE);
    }

    #[test]
    fn inactive_pill_is_white_with_gray_border() {
        let switcher = TabSwitcher::poster_home();
        let style = switcher.tab_style(&"pending");
        assert_eq!(style.background, theme::WHITE);
        assert_eq!(style.border, theme::SWITCHER_IDLE_BORDER);
        assert_eq!(style.label, theme::SWITCHER_IDLE_LABEL);
    }

    #[test]
    fn styles_follow_the_selection() {
        let mut switcher = TabSwitcher::poster_home();
        switcher.select("pending");
        assert_eq!(switcher.tab_style(&"pending").background, theme::INDIGO);
        assert_eq!(switcher.tab_style(&"active").background, theme::WHITE);
    }

    #[test]
    fn works_with_non_string_ids() {
        let mut switcher = TabSwitcher::new(
            vec![
                Tab {
                    id: 1_u8,
                    label: String::from("One"),
                    count: 0,
                },
                Tab {
                    id: 2_u8,
                    label: String::from("Two"),
                    count: 0,
                },
            ],
            1,
        );
        assert_eq!(
            switcher.select(2),
            Some(TabChange { from: 1, to: 2 })
        );
    }
}
