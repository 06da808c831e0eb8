//! Duty-cycle envelope driving the gate.
//!
//! A phase accumulator in [0, 1) runs at the envelope frequency. Each sample
//! the envelope reports a binary target: 1.0 (pass) while the phase is at or
//! below the duty threshold, 0.0 (mute) for the rest of the period.
//!
//! The phase is kept in `f64`. At 0.05 Hz and 44.1 kHz the increment is
//! about 1.1e-6, which an `f32` accumulator near 1.0 cannot represent
//! without several percent of error per step.

use crate::GateError;

/// Binary pass/mute envelope with a configurable period and duty cycle.
///
/// # Example
///
/// ```rust
/// use mxzero_core::DutyCycleEnvelope;
///
/// let mut envelope = DutyCycleEnvelope::new(1.0, 0.5);
/// envelope.prepare(8.0).unwrap();
///
/// let targets: Vec<f32> = (0..8).map(|_| envelope.next_target()).collect();
/// assert_eq!(targets, [1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone)]
pub struct DutyCycleEnvelope {
    /// Current phase position [0.0, 1.0)
    phase: f64,
    /// Phase increment per sample
    phase_inc: f64,
    /// Envelope frequency in Hz
    frequency: f64,
    /// Pass threshold on the phase
    duty: f64,
    /// Sample rate in Hz, zero until prepared
    sample_rate: f64,
}

impl DutyCycleEnvelope {
    /// Create an envelope. It produces nothing meaningful until [`prepare`](Self::prepare).
    ///
    /// `duty` is clamped to [0, 1].
    pub fn new(frequency_hz: f64, duty: f64) -> Self {
        Self {
            phase: 0.0,
            phase_inc: 0.0,
            frequency: frequency_hz,
            duty: duty.clamp(0.0, 1.0),
            sample_rate: 0.0,
        }
    }

    /// Recompute the increment for `sample_rate` and reset the phase to 0.
    ///
    /// Rejects non-positive or non-finite sample rates and envelope
    /// frequencies that are not strictly between 0 and the sample rate. On
    /// error the previous state is kept.
    pub fn prepare(&mut self, sample_rate: f32) -> Result<(), GateError> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(GateError::InvalidSampleRate(sample_rate));
        }
        let sample_rate = f64::from(sample_rate);
        if !self.frequency.is_finite() || self.frequency <= 0.0 || self.frequency >= sample_rate {
            return Err(GateError::InvalidLowFrequency(self.frequency));
        }

        self.sample_rate = sample_rate;
        self.phase_inc = self.frequency / sample_rate;
        self.phase = 0.0;
        Ok(())
    }

    /// Produce the target for the current sample, then advance the phase.
    #[inline]
    pub fn next_target(&mut self) -> f32 {
        let target = if self.phase <= self.duty { 1.0 } else { 0.0 };

        // phase < 1 and inc < 1, so one subtraction always wraps back into [0, 1)
        self.phase += self.phase_inc;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        target
    }

    /// Reset the phase to the start of a period without touching the rate.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Current phase in [0, 1).
    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Phase increment per sample (0 until prepared).
    #[inline]
    pub fn increment(&self) -> f64 {
        self.phase_inc
    }

    /// Envelope frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Duty threshold in [0, 1].
    pub fn duty(&self) -> f64 {
        self.duty
    }

    /// Whether [`prepare`](Self::prepare) has succeeded at least once.
    pub fn is_prepared(&self) -> bool {
        self.sample_rate > 0.0
    }

    /// Length of one period in samples (`sample_rate / frequency`), 0 until prepared.
    pub fn period_samples(&self) -> f64 {
        if self.is_prepared() {
            self.sample_rate / self.frequency
        } else {
            0.0
        }
    }

    /// Number of samples per period whose target is 1.0.
    pub fn pass_samples_per_period(&self) -> f64 {
        self.period_samples() * self.duty
    }
}
