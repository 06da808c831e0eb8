//! Static gate configuration.

use crate::GateError;

/// Envelope frequency in Hz: one gating period every twenty seconds.
pub const DEFAULT_LOW_FREQUENCY_HZ: f64 = 0.05;

/// Fraction of each period that passes audio: fifteen seconds on, five off.
pub const DEFAULT_DUTY_CYCLE: f64 = 0.75;

/// Crossfade time between pass and mute, in seconds.
pub const DEFAULT_RAMP_SECONDS: f32 = 1.0;

/// Shape of the crossfade applied when the gate toggles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RampShape {
    /// Constant rate of change; reaches the target exactly after the ramp time.
    #[default]
    Linear,
    /// One-pole approach; the ramp time spans five time constants.
    Exponential,
}

/// Everything the gate needs besides the host's sample rate.
///
/// # Example
///
/// ```rust
/// use mxzero_core::{GateConfig, RampShape};
///
/// let config = GateConfig {
///     ramp_shape: RampShape::Exponential,
///     ..GateConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GateConfig {
    /// Envelope frequency in Hz (period = 1 / frequency seconds).
    pub low_frequency_hz: f64,
    /// Pass threshold on the envelope phase, in [0, 1].
    pub duty_cycle: f64,
    /// Crossfade time in seconds.
    pub ramp_seconds: f32,
    /// Crossfade shape.
    pub ramp_shape: RampShape,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            low_frequency_hz: DEFAULT_LOW_FREQUENCY_HZ,
            duty_cycle: DEFAULT_DUTY_CYCLE,
            ramp_seconds: DEFAULT_RAMP_SECONDS,
            ramp_shape: RampShape::Linear,
        }
    }
}

impl GateConfig {
    /// Check the sample-rate independent fields.
    ///
    /// The upper bound on the envelope frequency depends on the sample rate
    /// and is checked again in `prepare`.
    pub fn validate(&self) -> Result<(), GateError> {
        if !self.low_frequency_hz.is_finite() || self.low_frequency_hz <= 0.0 {
            return Err(GateError::InvalidLowFrequency(self.low_frequency_hz));
        }
        if !(0.0..=1.0).contains(&self.duty_cycle) {
            return Err(GateError::InvalidDutyCycle(self.duty_cycle));
        }
        if !self.ramp_seconds.is_finite() || self.ramp_seconds < 0.0 {
            return Err(GateError::InvalidRampTime(self.ramp_seconds));
        }
        Ok(())
    }
}
