// Copyright 2026 the Vestibule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tasks dashboard header.
//!
//! A gradient banner with a title block and a status summary row, all of
//! which fade and slide in together on mount: the animated blocks share one
//! [`Entrance`] pair, so they move as a unit.
//!
//! The header displays what it is given. Counts and the date line are
//! caller-supplied props; nothing here computes or fetches.
//!
//! ## Minimal example
//!
//! ```
//! use vestibule_screens::header::TasksHeader;
//! use vestibule_entrance::Phase;
//!
//! let mut header = TasksHeader::new(Default::default());
//! header.mounted()?;
//!
//! // Host loop: advance, then read this frame's style.
//! header.advance(400.0);
//! let style = header.frame_style();
//! assert_eq!(style.opacity, 0.5);
//! assert_eq!(header.phase(), Phase::Running);
//! # Ok::<(), vestibule_entrance::ValueError>(())
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use alloc::{format, vec};

use peniko::Color;
use vestibule_entrance::{Entrance, EntranceSpec, FrameStyle, Phase, ValueError};
use vestibule_value::Animate;

use crate::theme;

/// One entry of the status summary row.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusCount {
    /// Display label, e.g. `"Pending"`.
    pub label: String,
    /// Count rendered next to the label, untouched.
    pub count: u32,
    /// Color of the status dot.
    pub dot_color: Color,
}

impl StatusCount {
    /// Formats the summary entry the way the header renders it.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {}", self.count, self.label)
    }
}

/// Caller-supplied display data for the header.
#[derive(Clone, Debug, PartialEq)]
pub struct TasksHeaderProps {
    /// Main heading.
    pub title: String,
    /// Line under the heading.
    pub subtitle: String,
    /// Pre-formatted date line; the host owns locale and clock.
    pub date_line: String,
    /// Status summary entries, rendered in order.
    pub status: Vec<StatusCount>,
}

impl Default for TasksHeaderProps {
    fn default() -> Self {
        Self {
            title: String::from("Tasks"),
            subtitle: String::from("Task Management"),
            date_line: String::new(),
            status: vec![
                StatusCount {
                    label: String::from("Pending"),
                    count: 2,
                    dot_color: theme::STATUS_PENDING,
                },
                StatusCount {
                    label: String::from("In Progress"),
                    count: 5,
                    dot_color: theme::STATUS_IN_PROGRESS,
                },
                StatusCount {
                    label: String::from("Completed"),
                    count: 12,
                    dot_color: theme::STATUS_COMPLETED,
                },
            ],
        }
    }
}

/// The tasks dashboard header view model.
///
/// Owns its [`Entrance`]; a remounted header is a new value with a fresh
/// animation.
#[derive(Clone, Debug)]
pub struct TasksHeader {
    props: TasksHeaderProps,
    entrance: Entrance,
}

impl TasksHeader {
    /// Creates an unmounted header showing its hidden initial state.
    #[must_use]
    pub fn new(props: TasksHeaderProps) -> Self {
        Self {
            props,
            entrance: Entrance::new(EntranceSpec::default()),
        }
    }

    /// Called by the host once the header is in the tree; starts the
    /// entrance. Idempotent.
    ///
    /// # Errors
    ///
    /// Propagates [`ValueError`] from arming the entrance; with the default
    /// spec this cannot happen.
    pub fn mounted(&mut self) -> Result<(), ValueError> {
        self.entrance.start()
    }

    /// The display props, exactly as supplied.
    #[must_use]
    pub fn props(&self) -> &TasksHeaderProps {
        &self.props
    }

    /// The gradient wash behind the header.
    #[must_use]
    pub fn gradient(&self) -> theme::LinearGradient {
        theme::HEADER_GRADIENT
    }

    /// This frame's opacity and translation, shared by all animated blocks.
    #[must_use]
    pub fn frame_style(&self) -> FrameStyle {
        self.entrance.frame_style()
    }

    /// Lifecycle phase of the entrance.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.entrance.phase()
    }

    /// Advances the entrance by `delta_ms` milliseconds.
    pub fn advance(&mut self, delta_ms: f64) {
        self.entrance.advance(delta_ms);
    }
}

impl Animate for TasksHeader {
    fn advance(&mut self, delta_ms: f64) {
        Self::advance(self, delta_ms);
    }
}
