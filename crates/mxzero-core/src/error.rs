//! Configuration errors for the gate.
//!
//! These are the only errors the audio path knows about, and all of them are
//! raised before processing starts: by [`GateConfig::validate`](crate::GateConfig::validate),
//! [`TrialGate::new`](crate::TrialGate::new) or
//! [`AudioProcessor::prepare`](crate::AudioProcessor::prepare).

/// Errors raised when the gate is configured with values it cannot run with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateError {
    /// Sample rate is zero, negative or not finite.
    InvalidSampleRate(f32),
    /// Maximum block size is zero.
    InvalidBlockSize(usize),
    /// Envelope frequency is not finite, not positive, or not below the sample rate.
    InvalidLowFrequency(f64),
    /// Duty cycle lies outside [0, 1].
    InvalidDutyCycle(f64),
    /// Ramp time is negative or not finite.
    InvalidRampTime(f32),
}

impl core::fmt::Display for GateError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidSampleRate(sr) => write!(f, "invalid sample rate {sr} Hz"),
            Self::InvalidBlockSize(n) => write!(f, "invalid maximum block size {n}"),
            Self::InvalidLowFrequency(hz) => {
                write!(f, "envelope frequency {hz} Hz must be positive and below the sample rate")
            }
            Self::InvalidDutyCycle(d) => write!(f, "duty cycle {d} is outside [0, 1]"),
            Self::InvalidRampTime(s) => {
                write!(f, "ramp time {s} s must be finite and non-negative")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GateError {}
