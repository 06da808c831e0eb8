//! Click-free tracking of the gate's binary target.
//!
//! The envelope flips between 0 and 1 instantaneously. Applying that step
//! directly to the signal produces an audible click, so the gain follows the
//! target through a [`GainSmoother`] instead.
//!
//! ## Ramp shapes
//!
//! - **Linear**: constant rate of change, reaches the target exactly after
//!   `ramp_seconds * sample_rate` samples (rounded to the nearest sample)
//! - **Exponential (one-pole lowpass)**: natural decay, snaps to the target
//!   once within [`SETTLE_EPSILON`]
//!
//! ## Usage
//!
//! ```rust
//! use mxzero_core::{GainSmoother, RampShape};
//!
//! let mut gain = GainSmoother::new(RampShape::Linear);
//! gain.reset(48000.0, 0.01); // 10 ms ramp
//!
//! gain.set_target(1.0);
//! for _ in 0..480 {
//!     let g = gain.next_value();
//!     assert!((0.0..=1.0).contains(&g));
//! }
//! assert_eq!(gain.current(), 1.0);
//! ```

use crate::RampShape;
use libm::{expf, roundf};

/// Distance from the target below which the exponential ramp snaps.
pub const SETTLE_EPSILON: f32 = 1e-6;

/// Number of one-pole time constants spanned by the configured ramp time.
const TIME_CONSTANTS_PER_RAMP: f32 = 5.0;

/// Follows a target value over a configured ramp time.
///
/// For targets in [0, 1] the output stays in [0, 1]: both shapes approach
/// the target monotonically and never step past it.
#[derive(Debug, Clone)]
pub struct GainSmoother {
    /// Current smoothed value
    current: f32,
    /// Target value we're smoothing towards
    target: f32,
    /// Ramp shape
    shape: RampShape,
    /// Ramp length in samples (linear shape)
    ramp_samples: u32,
    /// Increment per sample (linear shape, can be negative)
    increment: f32,
    /// Samples remaining until target reached (linear shape)
    samples_remaining: u32,
    /// One-pole coefficient (exponential shape, 1 = instant)
    coeff: f32,
}

impl GainSmoother {
    /// Create a smoother at 0.0 with no ramp (instant changes) until [`reset`](Self::reset).
    pub fn new(shape: RampShape) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            shape,
            ramp_samples: 0,
            increment: 0.0,
            samples_remaining: 0,
            coeff: 1.0,
        }
    }

    /// Reinitialise the ramp for a new sample rate and ramp time.
    ///
    /// Any ramp in progress is abandoned and the current value jumps to the
    /// last target (0.0 on first use).
    pub fn reset(&mut self, sample_rate: f32, ramp_seconds: f32) {
        let samples = ramp_seconds * sample_rate;
        if !samples.is_finite() || samples < 1.0 {
            self.ramp_samples = 0;
            self.coeff = 1.0;
        } else {
            // Nearest sample: floor drops one when the f32 product lands just below an integer
            self.ramp_samples = roundf(samples) as u32;
            let time_constant_samples = samples / TIME_CONSTANTS_PER_RAMP;
            self.coeff = if time_constant_samples <= 0.0 {
                1.0
            } else {
                1.0 - expf(-1.0 / time_constant_samples)
            };
        }

        self.current = self.target;
        self.increment = 0.0;
        self.samples_remaining = 0;
    }

    /// Record a new target. Repeating the current target is a no-op.
    #[inline]
    pub fn set_target(&mut self, target: f32) {
        if target == self.target {
            return;
        }
        self.target = target;

        if self.shape == RampShape::Linear {
            if self.ramp_samples == 0 {
                self.current = target;
                self.increment = 0.0;
                self.samples_remaining = 0;
            } else {
                self.increment = (target - self.current) / self.ramp_samples as f32;
                self.samples_remaining = self.ramp_samples;
            }
        }
    }

    /// Snap to `value` with no ramp.
    pub fn set_immediate(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.increment = 0.0;
        self.samples_remaining = 0;
    }

    /// Advance one sample toward the target and return the new value.
    #[inline]
    pub fn next_value(&mut self) -> f32 {
        match self.shape {
            RampShape::Linear => {
                if self.samples_remaining > 0 {
                    self.samples_remaining -= 1;
                    if self.samples_remaining == 0 {
                        self.current = self.target; // land exactly
                    } else {
                        let next = self.current + self.increment;
                        self.current = if self.increment > 0.0 {
                            next.min(self.target)
                        } else {
                            next.max(self.target)
                        };
                    }
                }
            }
            RampShape::Exponential => {
                if self.current != self.target {
                    let next = self.current + self.coeff * (self.target - self.current);
                    let next = if self.target > self.current {
                        next.min(self.target)
                    } else {
                        next.max(self.target)
                    };
                    // f32 stalls short of the target once the step drops below one ulp
                    if next == self.current || (self.target - next).abs() < SETTLE_EPSILON {
                        self.current = self.target;
                    } else {
                        self.current = next;
                    }
                }
            }
        }
        self.current
    }

    /// Current value without advancing.
    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Most recent target.
    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Ramp shape.
    pub fn shape(&self) -> RampShape {
        self.shape
    }

    /// Ramp length in samples as configured by the last [`reset`](Self::reset).
    pub fn ramp_samples(&self) -> u32 {
        self.ramp_samples
    }

    /// Whether the current value has reached the target.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

impl Default for GainSmoother {
    fn default() -> Self {
        Self::new(RampShape::Linear)
    }
}
