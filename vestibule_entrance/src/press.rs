// Copyright 2026 the Vestibule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press feedback: a short eased scale applied while a control is pressed.
//!
//! Touchable controls shrink slightly on press-in and ease back to rest on
//! release. Unlike an entrance this feedback re-targets on every press and
//! release, which it does by swapping in a fresh value per transition; the
//! one-shot invariant holds per value, not per feedback.
//!
//! ## Minimal example
//!
//! ```
//! use vestibule_entrance::press::PressFeedback;
//!
//! let mut press = PressFeedback::new();
//! press.press();
//! press.advance(150.0);
//! assert_eq!(press.scale(), 0.95);
//!
//! press.release();
//! press.advance(150.0);
//! assert_eq!(press.scale(), 1.0);
//! ```

use vestibule_value::{Animate, AnimatedValue, Curve};

/// Scale a control eases toward while pressed.
const PRESSED_SCALE: f64 = 0.95;
/// Scale a control rests at when not pressed.
const REST_SCALE: f64 = 1.0;
/// Scale an input eases toward while focused.
const FOCUSED_SCALE: f64 = 1.02;
/// Duration of each press/release transition.
const TRANSITION_MS: f64 = 150.0;

/// Eased scale feedback for a pressable control.
///
/// The render path reads [`scale`](PressFeedback::scale) each frame and
/// applies it as a uniform scale transform. The host loop advances the
/// feedback through the [`Animate`] trait like any other animated state.
#[derive(Clone, Copy, Debug)]
pub struct PressFeedback {
    scale: AnimatedValue,
    engaged_scale: f64,
    pressed: bool,
}

impl PressFeedback {
    /// Feedback for a touchable control: rest 1.0, pressed 0.95.
    #[must_use]
    pub fn new() -> Self {
        Self::with_engaged_scale(PRESSED_SCALE)
    }

    /// Feedback for a focusable input: rest 1.0, focused 1.02.
    #[must_use]
    pub fn focus_ring() -> Self {
        Self::with_engaged_scale(FOCUSED_SCALE)
    }

    /// Feedback easing toward `engaged_scale` while engaged.
    #[must_use]
    pub fn with_engaged_scale(engaged_scale: f64) -> Self {
        Self {
            scale: AnimatedValue::new(REST_SCALE),
            engaged_scale,
            pressed: false,
        }
    }

    /// Begins easing toward the engaged scale. No-op while already pressed.
    pub fn press(&mut self) {
        if self.pressed {
            return;
        }
        self.pressed = true;
        self.retarget(self.engaged_scale);
    }

    /// Begins easing back to rest. No-op while not pressed.
    pub fn release(&mut self) {
        if !self.pressed {
            return;
        }
        self.pressed = false;
        self.retarget(REST_SCALE);
    }

    /// Current scale. Pure read; safe on the render path every frame.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale.read()
    }

    /// Returns `true` between press-in and release.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Advances the scale transition by `delta_ms` milliseconds.
    pub fn advance(&mut self, delta_ms: f64) {
        self.scale.advance(delta_ms);
    }

    fn retarget(&mut self, target: f64) {
        let mut next = AnimatedValue::new(self.scale.read());
        // TRANSITION_MS is a positive constant and the value is fresh, so
        // arming cannot fail.
        if next
            .animate_to_with(target, TRANSITION_MS, Curve::EaseOut)
            .is_ok()
        {
            self.scale = next;
        }
    }
}

impl Default for PressFeedback {
    fn default() -> Self {
        Self::new()
    }
}

impl Animate for PressFeedback {
    fn advance(&mut self, delta_ms: f64) {
        Self::advance(self, delta_ms);
    }
}
