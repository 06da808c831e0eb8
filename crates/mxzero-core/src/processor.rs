//! Host-facing audio callback interface.
//!
//! The host owns the processor and drives it through three calls:
//! [`prepare`](AudioProcessor::prepare) whenever the stream configuration
//! changes, [`process`](AudioProcessor::process) once per block on the audio
//! thread, and [`release`](AudioProcessor::release) when playback stops.
//!
//! ## Design Decisions
//!
//! - **Planar, in place**: one slice per channel, all of equal length. The
//!   processor never changes the channel or sample count.
//! - **No allocations**: `process` runs inside the host's real-time callback.
//! - **Fallible prepare only**: configuration errors surface from `prepare`;
//!   `process` has no error path.

use crate::GateError;

/// Stream configuration accepted by a successful [`AudioProcessor::prepare`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StreamConfig {
    /// Sample rate in Hz.
    pub sample_rate: f32,
    /// Largest block the host will pass to `process`.
    pub max_block_size: usize,
}

impl StreamConfig {
    /// Check the sample rate and block size.
    pub fn validate(&self) -> Result<(), GateError> {
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(GateError::InvalidSampleRate(self.sample_rate));
        }
        if self.max_block_size == 0 {
            return Err(GateError::InvalidBlockSize(self.max_block_size));
        }
        Ok(())
    }
}

/// Audio callback implemented by processors the host instantiates.
///
/// # Example
///
/// ```rust
/// use mxzero_core::{AudioProcessor, GateError};
///
/// struct Silence;
///
/// impl AudioProcessor for Silence {
///     fn prepare(&mut self, _sample_rate: f32, _max_block_size: usize) -> Result<(), GateError> {
///         Ok(())
///     }
///
///     fn release(&mut self) {}
///
///     fn process(&mut self, channels: &mut [&mut [f32]]) {
///         for channel in channels.iter_mut() {
///             channel.fill(0.0);
///         }
///     }
/// }
/// ```
pub trait AudioProcessor {
    /// Configure for a new sample rate and maximum block size.
    ///
    /// Resets all sample-rate dependent state. Called from a non-real-time
    /// context before processing starts.
    fn prepare(&mut self, sample_rate: f32, max_block_size: usize) -> Result<(), GateError>;

    /// Release resources held for playback.
    fn release(&mut self);

    /// Process one block in place.
    ///
    /// Every channel slice has the same length; the block may be shorter than
    /// the `max_block_size` given to `prepare`.
    fn process(&mut self, channels: &mut [&mut [f32]]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_config_validation() {
        let ok = StreamConfig {
            sample_rate: 48000.0,
            max_block_size: 512,
        };
        assert!(ok.validate().is_ok());

        let no_rate = StreamConfig {
            sample_rate: 0.0,
            ..ok
        };
        assert_eq!(no_rate.validate(), Err(GateError::InvalidSampleRate(0.0)));

        let no_block = StreamConfig {
            max_block_size: 0,
            ..ok
        };
        assert_eq!(no_block.validate(), Err(GateError::InvalidBlockSize(0)));
    }
}
