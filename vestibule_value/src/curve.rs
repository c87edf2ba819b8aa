// Copyright 2026 the Vestibule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves applied to the time fraction of an interpolation.
//!
//! Every curve is monotonically non-decreasing on `[0, 1]` and maps the
//! endpoints exactly (`0 -> 0`, `1 -> 1`), so an interpolation never
//! overshoots its target and always lands on it precisely when its duration
//! elapses. [`Curve::Linear`] is the default policy; the eased variants exist
//! for visual parity with hosts whose native timing curves are non-linear.

/// Easing policy for an interpolating value.
///
/// The curve reshapes the normalized time fraction `t` in `[0, 1]` before it
/// is applied to the value range. All variants share two guarantees:
///
/// - monotone: larger `t` never produces a smaller output;
/// - endpoint-exact: `apply(0.0) == 0.0` and `apply(1.0) == 1.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Curve {
    /// Constant-velocity interpolation. The portable default.
    #[default]
    Linear,
    /// Cubic ease-out: fast start, decelerating finish.
    EaseOut,
    /// Smoothstep ease-in-out: slow start, fast middle, slow finish.
    EaseInOut,
}

impl Curve {
    /// Reshapes a normalized time fraction.
    ///
    /// `t` outside `[0, 1]` is clamped before the curve is applied.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Curve; 3] = [Curve::Linear, Curve::EaseOut, Curve::EaseInOut];

    #[test]
    fn endpoints_are_exact() {
        for curve in CURVES {
            assert_eq!(curve.apply(0.0), 0.0, "{curve:?} must map 0 to 0");
            assert_eq!(curve.apply(1.0), 1.0, "{curve:?} must map 1 to 1");
        }
    }

    #[test]
    fn curves_are_monotone() {
        for curve in CURVES {
            let mut prev = curve.apply(0.0);
            for step in 1..=100 {
                let next = curve.apply(f64::from(step) / 100.0);
                assert!(next >= prev, "{curve:?} decreased at step {step}");
                prev = next;
            }
        }
    }

    #[test]
    fn output_stays_in_unit_range() {
        for curve in CURVES {
            for step in 0..=100 {
                let v = curve.apply(f64::from(step) / 100.0);
                assert!((0.0..=1.0).contains(&v), "{curve:?} left [0, 1]");
            }
        }
    }

    #[test]
    fn out_of_range_time_is_clamped() {
        for curve in CURVES {
            assert_eq!(curve.apply(-0.5), 0.0, "{curve:?} below range");
            assert_eq!(curve.apply(1.5), 1.0, "{curve:?} above range");
        }
    }

    #[test]
    fn linear_is_identity_at_midpoint() {
        assert_eq!(Curve::Linear.apply(0.5), 0.5);
    }
}
