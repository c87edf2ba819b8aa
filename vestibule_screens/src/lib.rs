// Copyright 2026 the Vestibule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vestibule_screens --heading-base-level=0

//! Vestibule Screens: presentational view models for the poster-side
//! task-marketplace screens.
//!
//! Every type here is a pure prop renderer: it holds caller-supplied display
//! data untouched — counts, names, ratings, bid amounts — and exposes the
//! style attributes a host needs to draw it. No networking, persistence, or
//! business rules live in this crate; the host navigation framework mounts
//! these models as leaf screens and owns everything else.
//!
//! The crate does not assume any particular UI framework. Selection is
//! reported as returned transition values rather than invoked callbacks, so
//! hosts can forward changes to whatever notification mechanism they use
//! (an `on_tab_change` handler, an event queue, a rebuild).
//!
//! Screens that animate on mount own a
//! [`vestibule_entrance::Entrance`] as an ordinary struct member and read it
//! each frame; the host loop advances them through the
//! [`Animate`](vestibule_value::Animate) trait, typically via a
//! `vestibule_stage::Stage`.
//!
//! ## Modules
//!
//! - [`theme`]: the design tokens (colors, gradients, icon names).
//! - [`header`]: the tasks dashboard header with its entrance animation.
//! - [`tabs`]: the task-list tab switcher, generic over the tab id type.
//! - [`bid_card`]: the bid-notification card with press feedback.
//! - [`profile`]: the static profile section header.
//! - [`tab_bar`]: the bottom tab navigation shell model.

#![no_std]

extern crate alloc;

pub mod bid_card;
pub mod header;
pub mod profile;
pub mod tab_bar;
pub mod tabs;
pub mod theme;
