// Copyright 2026 the Vestibule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vestibule_entrance --heading-base-level=0

//! Vestibule Entrance: mount-time fade-and-slide animations for views.
//!
//! An [`Entrance`] pairs two [`AnimatedValue`]s — opacity and vertical
//! offset — for one mounted view. On [`start`](Entrance::start) both values
//! are armed in parallel on the same tick, each with its own duration, so a
//! view fades in while sliding up into place. The effect is one-shot and
//! non-restartable: a remounted view builds a fresh `Entrance`.
//!
//! Configuration is an explicit structure ([`EntranceSpec`]) enumerating
//! exactly the recognized options per channel; there is no open-ended style
//! bag. The default spec is the production pairing: opacity `0 -> 1` over
//! 800 ms and offset `30 -> 0` over 600 ms.
//!
//! The render path stays a pure reader: each frame it calls
//! [`Entrance::frame_style`] and applies the returned opacity and
//! translation. Nothing on the render path drives the animation clock; the
//! host loop advances the entrance through the [`Animate`] trait.
//!
//! ## Minimal example
//!
//! ```
//! use vestibule_entrance::{Entrance, EntranceSpec, Phase};
//!
//! let mut entrance = Entrance::new(EntranceSpec::default());
//! assert_eq!(entrance.phase(), Phase::Idle);
//!
//! entrance.start()?;
//! entrance.advance(600.0);
//! // Offset (600 ms) has settled, opacity (800 ms) is still in flight.
//! assert_eq!(entrance.offset(), 0.0);
//! assert_eq!(entrance.phase(), Phase::Running);
//!
//! entrance.advance(200.0);
//! assert_eq!(entrance.phase(), Phase::Completed);
//! assert_eq!(entrance.opacity(), 1.0);
//! # Ok::<(), vestibule_entrance::ValueError>(())
//! ```
//!
//! [`press`] provides the companion touch feedback: a short eased scale
//! toward 0.95 while a control is pressed and back to rest on release.

#![no_std]

use kurbo::Affine;

pub use vestibule_value::{Animate, AnimatedValue, Curve, ValueError};

pub mod press;

/// Configuration for one animated channel of an entrance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelSpec {
    /// Value the channel is pinned at before the entrance starts.
    pub initial: f64,
    /// Value the channel settles on when its duration elapses.
    pub target: f64,
    /// Interpolation duration in milliseconds. Must be positive.
    pub duration_ms: f64,
}

impl ChannelSpec {
    /// Creates a channel spec.
    #[must_use]
    pub const fn new(initial: f64, target: f64, duration_ms: f64) -> Self {
        Self {
            initial,
            target,
            duration_ms,
        }
    }
}

/// Configuration for a fade-and-slide entrance.
///
/// The two channels start on the same tick but complete independently; their
/// durations may differ.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceSpec {
    /// Opacity channel, applied directly as a style attribute.
    pub opacity: ChannelSpec,
    /// Vertical offset channel, applied as a translation in device pixels.
    pub offset: ChannelSpec,
}

impl EntranceSpec {
    /// Easing curve applied to both channels.
    ///
    /// Linear keeps interpolation portable and endpoint-exact; hosts wanting
    /// visual parity with a platform's native timing curve can pass an eased
    /// spec through [`Entrance::with_curve`].
    pub const DEFAULT_CURVE: Curve = Curve::Linear;
}

impl Default for EntranceSpec {
    /// The production pairing: fade in over 800 ms, slide up 30 px over
    /// 600 ms.
    fn default() -> Self {
        Self {
            opacity: ChannelSpec::new(0.0, 1.0, 800.0),
            offset: ChannelSpec::new(30.0, 0.0, 600.0),
        }
    }
}

/// Lifecycle of an entrance.
///
/// `Idle -> Running -> Completed`, with `Completed` terminal. A new
/// [`Entrance`] must be created to animate again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// [`Entrance::start`] has not been called; the view shows its initial
    /// hidden values.
    Idle,
    /// At least one channel is still interpolating.
    Running,
    /// Both channels have settled on their targets.
    Completed,
}

/// Per-frame style attributes a presentational view applies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStyle {
    /// Opacity in `[0, 1]` under the default spec.
    pub opacity: f64,
    /// Vertical translation placing the view at its current offset.
    pub transform: Affine,
}

/// The paired opacity/offset animation run once per view mount.
///
/// Owned by the view that created it (a normal struct member, never shared).
/// There is no cancellation: once started the entrance runs to completion,
/// and containers that drop a view mid-flight simply stop delivering ticks.
#[derive(Clone, Copy, Debug)]
pub struct Entrance {
    spec: EntranceSpec,
    curve: Curve,
    opacity: AnimatedValue,
    offset: AnimatedValue,
    started: bool,
}

impl Entrance {
    /// Creates an idle entrance pinned at the spec's initial values.
    #[must_use]
    pub fn new(spec: EntranceSpec) -> Self {
        Self::with_curve(spec, EntranceSpec::DEFAULT_CURVE)
    }

    /// Like [`new`](Self::new), with an explicit easing curve for both
    /// channels.
    #[must_use]
    pub fn with_curve(spec: EntranceSpec, curve: Curve) -> Self {
        Self {
            spec,
            curve,
            opacity: AnimatedValue::new(spec.opacity.initial),
            offset: AnimatedValue::new(spec.offset.initial),
            started: false,
        }
    }

    /// Arms both channels in parallel.
    ///
    /// Idempotent per mount: the first call starts the animation; calling
    /// again while `Running` or `Completed` is a no-op returning `Ok(())`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidDuration`] when either channel's
    /// duration is non-positive or NaN. Neither channel is armed in that
    /// case.
    pub fn start(&mut self) -> Result<(), ValueError> {
        if self.started {
            return Ok(());
        }
        for duration_ms in [self.spec.opacity.duration_ms, self.spec.offset.duration_ms] {
            if duration_ms <= 0.0 || duration_ms.is_nan() {
                return Err(ValueError::InvalidDuration(duration_ms));
            }
        }
        self.opacity
            .animate_to_with(self.spec.opacity.target, self.spec.opacity.duration_ms, self.curve)?;
        self.offset
            .animate_to_with(self.spec.offset.target, self.spec.offset.duration_ms, self.curve)?;
        self.started = true;
        Ok(())
    }

    /// Current opacity. Pure read; never drives the clock.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity.read()
    }

    /// Current vertical offset in device pixels. Pure read.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset.read()
    }

    /// The style attributes for this frame: opacity plus a vertical
    /// translation.
    #[must_use]
    pub fn frame_style(&self) -> FrameStyle {
        FrameStyle {
            opacity: self.opacity.read(),
            transform: Affine::translate((0.0, self.offset.read())),
        }
    }

    /// Advances both channels by `delta_ms` milliseconds.
    ///
    /// No-op before [`start`](Self::start) and after completion.
    pub fn advance(&mut self, delta_ms: f64) {
        self.opacity.advance(delta_ms);
        self.offset.advance(delta_ms);
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if !self.started {
            Phase::Idle
        } else if self.opacity.is_settled() && self.offset.is_settled() {
            Phase::Completed
        } else {
            Phase::Running
        }
    }
}

impl Animate for Entrance {
    fn advance(&mut self, delta_ms: f64) {
        Self::advance(self, delta_ms);
    }
}
