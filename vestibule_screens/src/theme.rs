// Copyright 2026 the Vestibule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Design tokens: colors, gradients, and icon names.
//!
//! These are the tokens of the application's design system, consumed purely
//! for styling. Icon names are the identifiers the host's icon provider
//! resolves; this crate never rasterizes anything.

use kurbo::Point;
use peniko::Color;

/// Primary brand indigo.
pub const INDIGO: Color = Color::from_rgb8(0x63, 0x66, 0xF1);
/// Deep indigo used mid-gradient.
pub const INDIGO_DEEP: Color = Color::from_rgb8(0x4F, 0x46, 0xE5);
/// Brand blue.
pub const BLUE: Color = Color::from_rgb8(0x3B, 0x82, 0xF6);
/// Light blue used at gradient tails.
pub const BLUE_LIGHT: Color = Color::from_rgb8(0x60, 0xA5, 0xFA);
/// Violet used on bid cards.
pub const VIOLET: Color = Color::from_rgb8(0x8B, 0x5C, 0xF6);
/// Plain white.
pub const WHITE: Color = Color::from_rgb8(0xFF, 0xFF, 0xFF);

/// Status dot for pending tasks.
pub const STATUS_PENDING: Color = Color::from_rgb8(0xF5, 0x9E, 0x0B);
/// Status dot for in-progress tasks.
pub const STATUS_IN_PROGRESS: Color = BLUE;
/// Status dot for completed tasks.
pub const STATUS_COMPLETED: Color = Color::from_rgb8(0x10, 0xB9, 0x81);

/// Tint of the active bottom-bar tab.
pub const TAB_ACTIVE_TINT: Color = INDIGO;
/// Tint of inactive bottom-bar tabs.
pub const TAB_INACTIVE_TINT: Color = Color::from_rgb8(0x9C, 0xA3, 0xAF);

/// Border of an unselected switcher tab.
pub const SWITCHER_IDLE_BORDER: Color = Color::from_rgb8(0xE5, 0xE7, 0xEB);
/// Label of an unselected switcher tab.
pub const SWITCHER_IDLE_LABEL: Color = Color::from_rgb8(0x37, 0x41, 0x51);

/// Cash amount green on bid cards.
pub const CASH_GREEN: Color = Color::from_rgb8(0x05, 0x96, 0x69);
/// Rating star amber on bid cards.
pub const STAR_AMBER: Color = Color::from_rgb8(0xF5, 0x9E, 0x0B);
/// Background of the "NEW BID" badge.
pub const BADGE_AMBER_BG: Color = Color::from_rgb8(0xFE, 0xF3, 0xC7);
/// Text of the "NEW BID" badge.
pub const BADGE_AMBER_TEXT: Color = Color::from_rgb8(0xB4, 0x53, 0x09);

/// One stop of a [`LinearGradient`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient axis in `[0, 1]`.
    pub offset: f64,
    /// Color at this stop.
    pub color: Color,
}

/// A linear gradient in unit coordinates.
///
/// `start` and `end` are fractions of the painted rectangle, matching how
/// the host's gradient provider is configured.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearGradient {
    /// Gradient axis start, in unit coordinates.
    pub start: Point,
    /// Gradient axis end, in unit coordinates.
    pub end: Point,
    /// Ordered color stops.
    pub stops: &'static [GradientStop],
}

/// Diagonal indigo-to-blue wash behind the tasks dashboard header.
pub const HEADER_GRADIENT: LinearGradient = LinearGradient {
    start: Point::new(0.0, 0.0),
    end: Point::new(1.0, 1.0),
    stops: &[
        GradientStop { offset: 0.0, color: INDIGO },
        GradientStop { offset: 0.3, color: INDIGO_DEEP },
        GradientStop { offset: 0.7, color: BLUE },
        GradientStop { offset: 1.0, color: BLUE_LIGHT },
    ],
};

/// Horizontal indigo-to-violet accent on bid cards.
pub const BID_GRADIENT: LinearGradient = LinearGradient {
    start: Point::new(0.0, 0.0),
    end: Point::new(1.0, 0.0),
    stops: &[
        GradientStop { offset: 0.0, color: INDIGO },
        GradientStop { offset: 1.0, color: VIOLET },
    ],
};

/// Diagonal wash behind the profile header.
pub const PROFILE_GRADIENT: LinearGradient = LinearGradient {
    start: Point::new(0.0, 0.0),
    end: Point::new(1.0, 1.0),
    stops: &[
        GradientStop { offset: 0.0, color: INDIGO },
        GradientStop { offset: 0.5, color: BLUE },
        GradientStop { offset: 1.0, color: BLUE_LIGHT },
    ],
};
