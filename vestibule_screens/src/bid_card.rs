// Copyright 2026 the Vestibule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bid-notification card.
//!
//! Shown on the poster's notifications screen when a seeker bids on a task.
//! The card displays the notification verbatim — seeker name, task title,
//! rating, completed count, bid amount, timeline — under fixed chrome (icon,
//! gradient accent, title, badge). Tapping the card is reported back to the
//! host together with the notification, mirroring an `on_press(notification)`
//! callback.
//!
//! ## Minimal example
//!
//! ```
//! use vestibule_screens::bid_card::{BidCard, BidNotification};
//!
//! let card = BidCard::new(BidNotification {
//!     seeker_name: "Priya".into(),
//!     task_title: "Assemble a bookshelf".into(),
//!     seeker_rating: 4.8,
//!     completed_tasks: 27,
//!     bid_amount: "$45".into(),
//!     timeline: "2 days".into(),
//! });
//! assert_eq!(card.chrome().title, "New Bid Received");
//! assert_eq!(card.notification().bid_amount, "$45");
//! ```

use alloc::string::String;

use vestibule_entrance::press::PressFeedback;
use vestibule_value::Animate;

use crate::theme;

/// Caller-supplied bid notification data, displayed untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct BidNotification {
    /// Name of the seeker who placed the bid.
    pub seeker_name: String,
    /// Title of the task the bid targets.
    pub task_title: String,
    /// Seeker's rating, rendered next to the star icon.
    pub seeker_rating: f64,
    /// Number of tasks the seeker has completed.
    pub completed_tasks: u32,
    /// Pre-formatted bid amount; the host owns currency formatting.
    pub bid_amount: String,
    /// Pre-formatted delivery timeline.
    pub timeline: String,
}

/// Fixed chrome of the card, identical for every bid notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardChrome {
    /// Icon name resolved by the host's icon provider.
    pub icon: &'static str,
    /// Gradient of the top accent bar and icon badge.
    pub gradient: theme::LinearGradient,
    /// Card title.
    pub title: &'static str,
    /// Text appended after the seeker name.
    pub subtitle: &'static str,
    /// Corner badge text.
    pub badge: &'static str,
}

const CHROME: CardChrome = CardChrome {
    icon: "hand-left",
    gradient: theme::BID_GRADIENT,
    title: "New Bid Received",
    subtitle: " wants to work on your task",
    badge: "NEW BID",
};

/// The bid-notification card view model.
#[derive(Clone, Debug)]
pub struct BidCard {
    notification: BidNotification,
    press: PressFeedback,
}

impl BidCard {
    /// Creates a card for `notification`.
    #[must_use]
    pub fn new(notification: BidNotification) -> Self {
        Self {
            notification,
            press: PressFeedback::new(),
        }
    }

    /// The fixed chrome shared by all bid cards.
    #[must_use]
    pub fn chrome(&self) -> CardChrome {
        CHROME
    }

    /// The notification, exactly as supplied.
    #[must_use]
    pub fn notification(&self) -> &BidNotification {
        &self.notification
    }

    /// Touch-down on the card; begins the press-scale feedback.
    pub fn press_in(&mut self) {
        self.press.press();
    }

    /// Touch-up on the card. Returns the notification for the host to pass
    /// to its `on_press` handler.
    pub fn press_out(&mut self) -> &BidNotification {
        self.press.release();
        &self.notification
    }

    /// Current press scale, read by the render path each frame.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.press.scale()
    }

    /// Advances the press feedback by `delta_ms` milliseconds.
    pub fn advance(&mut self, delta_ms: f64) {
        self.press.advance(delta_ms);
    }
}

impl Animate for BidCard {
    fn advance(&mut self, delta_ms: f64) {
        Self::advance(self, delta_ms);
    }
}
