// Copyright 2026 the Vestibule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The profile section header.
//!
//! A static gradient banner above the profile editing section. No animation
//! and no state; it exists so the host can register the profile screen's
//! header with the same view-model shape as the animated screens.

use alloc::string::String;

use crate::theme;

/// The profile header view model.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileHeader {
    /// Main heading.
    pub title: String,
    /// Line under the heading.
    pub subtitle: String,
}

impl ProfileHeader {
    /// The gradient wash behind the header.
    #[must_use]
    pub fn gradient(&self) -> theme::LinearGradient {
        theme::PROFILE_GRADIENT
    }
}

impl Default for ProfileHeader {
    fn default() -> Self {
        Self {
            title: String::from("Profile"),
            subtitle: String::from("Manage your personal information"),
        }
    }
}
