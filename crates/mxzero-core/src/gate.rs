//! The trial gate: envelope, smoother and mixer wired into one processor.
//!
//! Per frame the envelope produces a pass/mute target, the smoother turns it
//! into a continuous gain, and the mixer blends the gated and original
//! signal using the shared [`BlendControl`] coefficient. The gain is
//! computed once per frame and applied to every channel, so channels stay
//! phase-aligned.

use crate::{
    AudioProcessor, BlendControl, DutyCycleEnvelope, GainSmoother, GateConfig, GateError,
    GateState, StreamConfig,
    mixer::{blend_frame, blend_sample},
};

/// Periodically attenuating processor, bypassed once its [`BlendControl`]
/// is unlocked.
///
/// # Example
///
/// ```rust
/// use mxzero_core::{AudioProcessor, GateConfig, TrialGate};
///
/// let mut gate = TrialGate::new(GateConfig::default()).unwrap();
/// gate.prepare(48000.0, 256).unwrap();
///
/// let mut left = [0.5f32; 256];
/// let mut right = [0.5f32; 256];
/// gate.process(&mut [&mut left, &mut right]);
///
/// // The gate fades in from silence over the ramp time.
/// assert!(left[255] > 0.0 && left[255] < 0.5);
/// assert_eq!(left, right);
///
/// // Unlocking (normally done by the license check) bypasses it.
/// gate.blend().unlock();
/// let mut mono = [0.5f32; 256];
/// gate.process(&mut [&mut mono]);
/// assert!(mono.iter().all(|&s| s == 0.5));
/// ```
#[derive(Debug, Clone)]
pub struct TrialGate {
    config: GateConfig,
    envelope: DutyCycleEnvelope,
    smoother: GainSmoother,
    blend: BlendControl,
    /// `None` until a successful `prepare`, and again after `release`
    stream: Option<StreamConfig>,
}

impl TrialGate {
    /// Create a locked gate with its own blend coefficient.
    pub fn new(config: GateConfig) -> Result<Self, GateError> {
        Self::with_blend(config, BlendControl::new())
    }

    /// Create a gate driven by an existing blend coefficient.
    ///
    /// Several gates (one per plugin instance, say) can share one coefficient
    /// so a single license check unlocks all of them.
    pub fn with_blend(config: GateConfig, blend: BlendControl) -> Result<Self, GateError> {
        config.validate()?;
        Ok(Self {
            config,
            envelope: DutyCycleEnvelope::new(config.low_frequency_hz, config.duty_cycle),
            smoother: GainSmoother::new(config.ramp_shape),
            blend,
            stream: None,
        })
    }

    /// Static configuration.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Shared blend coefficient. Clone it to hand to the license check.
    pub fn blend(&self) -> &BlendControl {
        &self.blend
    }

    /// Current gating state.
    pub fn state(&self) -> GateState {
        self.blend.state()
    }

    /// Configuration of the last successful `prepare`, if still active.
    pub fn stream_config(&self) -> Option<StreamConfig> {
        self.stream
    }

    /// Whether the gate will process audio.
    pub fn is_prepared(&self) -> bool {
        self.stream.is_some()
    }

    /// Envelope, for inspecting phase and period.
    pub fn envelope(&self) -> &DutyCycleEnvelope {
        &self.envelope
    }

    /// Smoothed gain applied to the most recent frame.
    pub fn gain(&self) -> f32 {
        self.smoother.current()
    }

    /// Length of the crossfade in samples at the prepared rate.
    pub fn ramp_samples(&self) -> u32 {
        self.smoother.ramp_samples()
    }

    #[inline]
    fn next_gain(&mut self) -> f32 {
        let target = self.envelope.next_target();
        self.smoother.set_target(target);
        self.smoother.next_value()
    }

    /// Process interleaved audio in place.
    ///
    /// `data.len()` should be a multiple of `channels`; a trailing partial
    /// frame is left untouched. Does nothing before `prepare` or when
    /// `channels` is 0.
    pub fn process_interleaved(&mut self, data: &mut [f32], channels: usize) {
        if self.stream.is_none() || channels == 0 {
            return;
        }
        let alpha = self.blend.alpha();
        for frame in data.chunks_exact_mut(channels) {
            let gain = self.next_gain();
            blend_frame(frame, gain, alpha);
        }
    }
}

impl AudioProcessor for TrialGate {
    /// Validate the stream, recompute the envelope increment and reset the
    /// phase to 0. The smoother keeps its last target as the starting gain,
    /// which is silence only on the first `prepare`.
    ///
    /// On error the gate keeps its previous configuration.
    fn prepare(&mut self, sample_rate: f32, max_block_size: usize) -> Result<(), GateError> {
        let stream = StreamConfig {
            sample_rate,
            max_block_size,
        };
        stream.validate()?;

        self.envelope.prepare(sample_rate)?;
        self.smoother.reset(sample_rate, self.config.ramp_seconds);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sample_rate,
            max_block_size,
            period_samples = self.envelope.period_samples(),
            ramp_samples = self.smoother.ramp_samples(),
            start_gain = self.smoother.current(),
            "trial gate prepared"
        );

        self.stream = Some(stream);
        Ok(())
    }

    fn release(&mut self) {
        self.stream = None;
    }

    fn process(&mut self, channels: &mut [&mut [f32]]) {
        if self.stream.is_none() {
            return;
        }
        debug_assert!(
            channels.windows(2).all(|w| w[0].len() == w[1].len()),
            "all channels must have the same length"
        );
        let frames = channels.iter().map(|c| c.len()).min().unwrap_or(0);
        let alpha = self.blend.alpha();

        for i in 0..frames {
            let gain = self.next_gain();
            for channel in channels.iter_mut() {
                channel[i] = blend_sample(channel[i], gain, alpha);
            }
        }
    }
}
