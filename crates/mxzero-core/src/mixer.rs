//! Blend between the gated and the original signal.

/// Mix one sample: `alpha * gain * input + (1 - alpha) * input`.
///
/// With `alpha = 1.0` the result is exactly `gain * input`; with
/// `alpha = 0.0` it is exactly `input`, whatever the gain.
///
/// # Arguments
///
/// * `input` - Unprocessed sample
/// * `gain` - Smoothed gate gain in \[0.0, 1.0\]
/// * `alpha` - Blend coefficient in \[0.0, 1.0\]: 1.0 = gated, 0.0 = bypassed
#[inline]
pub fn blend_sample(input: f32, gain: f32, alpha: f32) -> f32 {
    alpha * gain * input + (1.0 - alpha) * input
}

/// Apply [`blend_sample`] to every sample of one frame, in place.
#[inline]
pub fn blend_frame(frame: &mut [f32], gain: f32, alpha: f32) {
    for sample in frame.iter_mut() {
        *sample = blend_sample(*sample, gain, alpha);
    }
}
