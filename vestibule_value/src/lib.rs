// Copyright 2026 the Vestibule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vestibule_value --heading-base-level=0

//! Vestibule Value: one-shot interpolating scalars driven by host frame ticks.
//!
//! This crate provides [`AnimatedValue`], a single scalar that moves from an
//! initial value to a target value over a fixed duration. It is the leaf
//! primitive of the Vestibule animation stack: higher layers pair values into
//! entrance effects and fan frame ticks out to them, while render paths only
//! ever call [`AnimatedValue::read`].
//!
//! ## Design Philosophy
//!
//! The primitive assumes no clock, no thread, and no UI framework. Progress
//! is advanced cooperatively by whoever owns the host rendering loop calling
//! [`AnimatedValue::advance`] (directly or through the [`Animate`] trait)
//! with an elapsed-time delta each frame. There is exactly one writer (the
//! owner) and any number of readers, so no synchronization is required on a
//! single-threaded UI tree.
//!
//! Each value is one-shot: once its elapsed time reaches its duration, it
//! snaps exactly onto the target and stays pinned there for the rest of its
//! life. Completion is implicit; callers needing a completion notice compare
//! [`read`](AnimatedValue::read) against [`target`](AnimatedValue::target).
//!
//! ## Minimal example
//!
//! ```
//! use vestibule_value::AnimatedValue;
//!
//! let mut fade = AnimatedValue::new(0.0);
//! fade.animate_to(1.0, 800.0)?;
//!
//! // The host rendering loop drives progress.
//! fade.advance(400.0);
//! assert_eq!(fade.read(), 0.5);
//!
//! fade.advance(400.0);
//! assert_eq!(fade.read(), 1.0);
//! assert!(!fade.is_active());
//! # Ok::<(), vestibule_value::ValueError>(())
//! ```

#![no_std]

use core::fmt;

mod curve;

pub use curve::Curve;

/// Errors reported by [`AnimatedValue`] operations.
///
/// These indicate caller programming errors rather than runtime conditions
/// to recover from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueError {
    /// The requested animation duration was zero, negative, or NaN.
    InvalidDuration(f64),
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDuration(ms) => {
                write!(f, "animation duration must be positive, got {ms} ms")
            }
        }
    }
}

impl core::error::Error for ValueError {}

/// Anything that can be driven by a periodic frame tick.
///
/// The host rendering loop (or a [`Stage`]-like container that fans ticks
/// out) calls [`advance`](Animate::advance) once per frame with the elapsed
/// time since the previous tick. Implementations must treat non-positive and
/// NaN deltas as no-ops.
///
/// [`Stage`]: https://docs.rs/vestibule_stage
pub trait Animate {
    /// Advances internal time by `delta_ms` milliseconds.
    fn advance(&mut self, delta_ms: f64);
}

/// A scalar that interpolates from an initial value to a target over a fixed
/// duration.
///
/// The value starts pinned at its initial reading. [`animate_to`] arms it;
/// each subsequent [`advance`] moves `read()` monotonically toward the
/// target under the configured [`Curve`]. When elapsed time reaches the
/// duration, the value snaps exactly onto the target and settles permanently.
///
/// A settled value is never reused: [`animate_to`] on an active or settled
/// value is a no-op, keeping mount-time effects one-shot. Owners wanting to
/// animate again create a fresh value.
///
/// [`animate_to`]: AnimatedValue::animate_to
/// [`advance`]: AnimatedValue::advance
#[derive(Clone, Copy, Debug)]
pub struct AnimatedValue {
    initial: f64,
    current: f64,
    target: f64,
    elapsed_ms: f64,
    duration_ms: f64,
    curve: Curve,
    active: bool,
    settled: bool,
}

impl AnimatedValue {
    /// Creates a value pinned at `initial`, inactive.
    #[must_use]
    pub fn new(initial: f64) -> Self {
        Self {
            initial,
            current: initial,
            target: initial,
            elapsed_ms: 0.0,
            duration_ms: 0.0,
            curve: Curve::Linear,
            active: false,
            settled: false,
        }
    }

    /// Arms the value to interpolate toward `target` over `duration_ms`,
    /// using the linear curve.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidDuration`] when `duration_ms` is zero,
    /// negative, or NaN. Calling this on a value that is already active or
    /// settled is a no-op returning `Ok(())`: each value animates at most
    /// once.
    pub fn animate_to(&mut self, target: f64, duration_ms: f64) -> Result<(), ValueError> {
        self.animate_to_with(target, duration_ms, Curve::Linear)
    }

    /// Like [`animate_to`](Self::animate_to), with an explicit easing curve.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidDuration`] when `duration_ms` is zero,
    /// negative, or NaN.
    pub fn animate_to_with(
        &mut self,
        target: f64,
        duration_ms: f64,
        curve: Curve,
    ) -> Result<(), ValueError> {
        if duration_ms <= 0.0 || duration_ms.is_nan() {
            return Err(ValueError::InvalidDuration(duration_ms));
        }
        if self.active || self.settled {
            return Ok(());
        }
        self.initial = self.current;
        self.target = target;
        self.elapsed_ms = 0.0;
        self.duration_ms = duration_ms;
        self.curve = curve;
        self.active = true;
        Ok(())
    }

    /// Returns the current value.
    ///
    /// Never blocks; safe to call from the rendering path every frame.
    #[must_use]
    pub fn read(&self) -> f64 {
        self.current
    }

    /// Returns the value being interpolated toward.
    ///
    /// Before the first [`animate_to`](Self::animate_to) this equals the
    /// initial value.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Returns `true` while an interpolation is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns `true` once the value has reached its target and pinned there.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Advances the interpolation by `delta_ms` milliseconds.
    ///
    /// No-op when the value is not active or when `delta_ms` is non-positive
    /// or NaN. Elapsed time is monotonically non-decreasing; once it reaches
    /// the duration, `read()` returns exactly the target from then on.
    pub fn advance(&mut self, delta_ms: f64) {
        if !self.active || delta_ms <= 0.0 || delta_ms.is_nan() {
            return;
        }
        self.elapsed_ms += delta_ms;
        if self.elapsed_ms >= self.duration_ms {
            self.current = self.target;
            self.active = false;
            self.settled = true;
        } else {
            let fraction = self.curve.apply(self.elapsed_ms / self.duration_ms);
            self.current = self.initial + (self.target - self.initial) * fraction;
        }
    }
}

impl Animate for AnimatedValue {
    fn advance(&mut self, delta_ms: f64) {
        Self::advance(self, delta_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_value_is_pinned_and_inactive() {
        let v = AnimatedValue::new(30.0);
        assert_eq!(v.read(), 30.0);
        assert_eq!(v.target(), 30.0);
        assert!(!v.is_active());
        assert!(!v.is_settled());
    }

    #[test]
    fn linear_scenario_hits_exact_midpoint_and_endpoint() {
        // AnimationValue.create(0); animateTo(1, 800).
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(1.0, 800.0).unwrap();

        assert_eq!(v.read(), 0.0);
        v.advance(400.0);
        assert_eq!(v.read(), 0.5);
        v.advance(400.0);
        assert_eq!(v.read(), 1.0);

        // Further time changes nothing.
        v.advance(200.0);
        assert_eq!(v.read(), 1.0);
        assert!(!v.is_active());
        assert!(v.is_settled());
    }

    #[test]
    fn exact_duration_lands_exactly_on_target() {
        let mut v = AnimatedValue::new(30.0);
        v.animate_to(0.0, 600.0).unwrap();
        v.advance(600.0);
        assert_eq!(v.read(), 0.0);
        assert!(v.is_settled());
    }

    #[test]
    fn progress_is_monotone_toward_target() {
        let mut v = AnimatedValue::new(30.0);
        v.animate_to(0.0, 600.0).unwrap();

        let mut prev = v.read();
        for _ in 0..60 {
            v.advance(10.0);
            let next = v.read();
            assert!(next <= prev, "descending value must not overshoot upward");
            assert!(next >= 0.0, "value must not overshoot past the target");
            prev = next;
        }
        assert_eq!(prev, 0.0);
    }

    #[test]
    fn uneven_frame_deltas_still_land_on_target() {
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(1.0, 800.0).unwrap();
        for delta in [16.6, 33.3, 7.0, 200.0, 543.1, 100.0] {
            v.advance(delta);
        }
        assert_eq!(v.read(), 1.0);
        assert!(v.is_settled());
    }

    #[test]
    fn zero_duration_is_rejected() {
        let mut v = AnimatedValue::new(0.0);
        assert_eq!(
            v.animate_to(1.0, 0.0),
            Err(ValueError::InvalidDuration(0.0))
        );
        assert!(!v.is_active());
        assert_eq!(v.read(), 0.0);
    }

    #[test]
    fn negative_duration_is_rejected() {
        let mut v = AnimatedValue::new(0.0);
        assert_eq!(
            v.animate_to(1.0, -250.0),
            Err(ValueError::InvalidDuration(-250.0))
        );
    }

    #[test]
    fn nan_duration_is_rejected() {
        let mut v = AnimatedValue::new(0.0);
        assert!(matches!(
            v.animate_to(1.0, f64::NAN),
            Err(ValueError::InvalidDuration(_))
        ));
    }

    #[test]
    fn animate_to_while_active_is_a_no_op() {
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(1.0, 800.0).unwrap();
        v.advance(400.0);

        // Re-targeting mid-flight changes nothing.
        v.animate_to(5.0, 100.0).unwrap();
        assert_eq!(v.target(), 1.0);
        v.advance(400.0);
        assert_eq!(v.read(), 1.0);
    }

    #[test]
    fn animate_to_after_settling_is_a_no_op() {
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(1.0, 800.0).unwrap();
        v.advance(800.0);

        v.animate_to(2.0, 100.0).unwrap();
        v.advance(100.0);
        assert_eq!(v.read(), 1.0);
        assert_eq!(v.target(), 1.0);
    }

    #[test]
    fn invalid_duration_reported_even_when_already_active() {
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(1.0, 800.0).unwrap();
        assert!(matches!(
            v.animate_to(2.0, 0.0),
            Err(ValueError::InvalidDuration(_))
        ));
    }

    #[test]
    fn advance_before_arming_is_a_no_op() {
        let mut v = AnimatedValue::new(30.0);
        v.advance(1000.0);
        assert_eq!(v.read(), 30.0);
        assert!(!v.is_settled());
    }

    #[test]
    fn non_positive_and_nan_deltas_are_ignored() {
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(1.0, 800.0).unwrap();
        v.advance(0.0);
        v.advance(-16.0);
        v.advance(f64::NAN);
        assert_eq!(v.read(), 0.0);
        assert!(v.is_active());
    }

    #[test]
    fn eased_value_still_lands_exactly_on_target() {
        let mut v = AnimatedValue::new(30.0);
        v.animate_to_with(0.0, 600.0, Curve::EaseOut).unwrap();

        let mut prev = v.read();
        for _ in 0..40 {
            v.advance(16.0);
            assert!(v.read() <= prev, "eased descent must stay monotone");
            prev = v.read();
        }
        assert_eq!(v.read(), 0.0);
    }

    #[test]
    fn display_names_the_bad_duration() {
        extern crate alloc;
        use alloc::string::ToString;

        let err = ValueError::InvalidDuration(-3.0);
        assert_eq!(
            err.to_string(),
            "animation duration must be positive, got -3 ms"
        );
    }
}
