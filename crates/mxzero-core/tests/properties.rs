//! Property-based tests for mxzero-core.
//!
//! Covers phase bounds, duty-cycle accuracy, smoother bounds, prepare
//! idempotence, block-size invariance and the two blend extremes, using
//! proptest for randomized configuration and input generation.

use mxzero_core::{
    AudioProcessor, BlendControl, DutyCycleEnvelope, GainSmoother, GateConfig, RampShape,
    TrialGate,
};
use proptest::prelude::*;

fn ramp_shape() -> impl Strategy<Value = RampShape> {
    prop_oneof![Just(RampShape::Linear), Just(RampShape::Exponential)]
}

fn gate_config() -> impl Strategy<Value = GateConfig> {
    (0.5f64..50.0, 0.0f64..=1.0, 0.0f32..0.05, ramp_shape()).prop_map(
        |(low_frequency_hz, duty_cycle, ramp_seconds, ramp_shape)| GateConfig {
            low_frequency_hz,
            duty_cycle,
            ramp_seconds,
            ramp_shape,
        },
    )
}

/// Run `samples` frames of a constant 1.0 signal through `gate`, in blocks.
fn render_ones(gate: &mut TrialGate, samples: usize, block: usize) -> Vec<f32> {
    let mut out = vec![1.0f32; samples];
    for chunk in out.chunks_mut(block) {
        gate.process(&mut [chunk]);
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// For any sample rate and envelope frequency, the phase stays in
    /// [0, 1) whatever blocks the samples arrive in.
    #[test]
    fn phase_stays_in_unit_interval(
        sample_rate in 1000.0f32..192000.0,
        frequency in 0.01f64..500.0,
        block in 1usize..2048,
    ) {
        let config = GateConfig {
            low_frequency_hz: frequency,
            ..GateConfig::default()
        };
        let mut gate = TrialGate::new(config).unwrap();
        gate.prepare(sample_rate, block).unwrap();

        let mut buf = vec![0.5f32; block];
        for _ in 0..(50_000 / block + 1) {
            gate.process(&mut [&mut buf]);
            let phase = gate.envelope().phase();
            prop_assert!((0.0..1.0).contains(&phase), "phase {} escaped [0, 1)", phase);
        }
    }

    /// Over one period the number of passing samples equals
    /// `duty * period` within one sample.
    #[test]
    fn pass_fraction_matches_duty(
        sample_rate in 1000.0f32..96000.0,
        period in 50.0f64..10000.0,
        duty in 0.0f64..=1.0,
    ) {
        let frequency = f64::from(sample_rate) / period;
        let mut env = DutyCycleEnvelope::new(frequency, duty);
        env.prepare(sample_rate).unwrap();

        let period_samples = env.period_samples();
        let frames = period_samples.floor() as usize;
        let passing = (0..frames).filter(|_| env.next_target() == 1.0).count();

        let expected = duty * period_samples;
        prop_assert!(
            (passing as f64 - expected).abs() <= 1.0 + 1e-6,
            "passing={} expected={} period={}",
            passing, expected, period_samples
        );
    }

    /// The smoother never leaves [0, 1] for targets in [0, 1] and never
    /// moves away from its target.
    #[test]
    fn smoother_stays_bounded(
        shape in ramp_shape(),
        sample_rate in 1000.0f32..96000.0,
        ramp_seconds in 0.0f32..0.1,
        targets in prop::collection::vec(0.0f32..=1.0, 1..32),
        hold in 1usize..500,
    ) {
        let mut smoother = GainSmoother::new(shape);
        smoother.reset(sample_rate, ramp_seconds);

        for &target in &targets {
            smoother.set_target(target);
            for _ in 0..hold {
                let before = smoother.current();
                let v = smoother.next_value();
                prop_assert!((0.0..=1.0).contains(&v), "value {} out of range", v);
                prop_assert!(
                    (target - v).abs() <= (target - before).abs() + 1e-6,
                    "moved away from target {}: {} -> {}", target, before, v
                );
            }
        }
    }

    /// A held target is reached within a bound proportional to the ramp.
    #[test]
    fn smoother_converges_within_bound(
        shape in ramp_shape(),
        sample_rate in 1000.0f32..96000.0,
        ramp_seconds in 0.0f32..0.05,
        target in prop_oneof![Just(0.0f32), Just(1.0f32)],
    ) {
        let mut smoother = GainSmoother::new(shape);
        smoother.reset(sample_rate, ramp_seconds);
        smoother.set_immediate(1.0 - target);
        smoother.set_target(target);

        let bound = 4 * smoother.ramp_samples() as usize + 1;
        for _ in 0..bound {
            smoother.next_value();
        }
        prop_assert!(smoother.is_settled(), "not settled after {} samples", bound);
    }

    /// Preparing twice with the same parameters leaves the gate in the
    /// same state as preparing once, whatever was processed before.
    #[test]
    fn prepare_is_idempotent(
        config in gate_config(),
        sample_rate in 8000.0f32..96000.0,
        block in 1usize..1024,
        warmup in 0usize..5000,
    ) {
        let mut warmed = TrialGate::new(config).unwrap();
        warmed.prepare(sample_rate, block).unwrap();
        render_ones(&mut warmed, warmup, block);

        let mut once = warmed.clone();
        once.prepare(sample_rate, block).unwrap();
        let mut twice = warmed;
        twice.prepare(sample_rate, block).unwrap();
        twice.prepare(sample_rate, block).unwrap();

        prop_assert_eq!(twice.envelope().phase(), 0.0);
        prop_assert_eq!(once.gain(), twice.gain());
        prop_assert_eq!(
            render_ones(&mut once, 4096, block),
            render_ones(&mut twice, 4096, block)
        );
    }

    /// Re-preparing never leaves the gain between pass and mute.
    #[test]
    fn reprepare_starts_from_a_segment_level(
        config in gate_config(),
        sample_rate in 8000.0f32..96000.0,
        warmup in 0usize..20000,
    ) {
        let mut gate = TrialGate::new(config).unwrap();
        gate.prepare(sample_rate, 512).unwrap();
        render_ones(&mut gate, warmup, 512);
        gate.prepare(sample_rate, 256).unwrap();
        let gain = gate.gain();
        prop_assert!(gain == 0.0 || gain == 1.0, "gain {} after re-prepare", gain);
    }

    /// Output does not depend on how the host slices the stream into blocks.
    #[test]
    fn output_is_block_size_invariant(
        config in gate_config(),
        sample_rate in 8000.0f32..96000.0,
        block in 1usize..700,
    ) {
        let mut whole = TrialGate::new(config).unwrap();
        whole.prepare(sample_rate, 8192).unwrap();
        let mut sliced = TrialGate::new(config).unwrap();
        sliced.prepare(sample_rate, block).unwrap();

        prop_assert_eq!(render_ones(&mut whole, 8192, 8192), render_ones(&mut sliced, 8192, block));
    }

    /// Locked: every output sample is exactly `gain * input`, where gain is
    /// measured by a twin gate fed with ones.
    #[test]
    fn locked_output_is_gain_times_input(
        config in gate_config(),
        input in prop::collection::vec(-1.0f32..=1.0, 1..4096),
    ) {
        let mut gate = TrialGate::new(config).unwrap();
        gate.prepare(1000.0, input.len()).unwrap();
        let mut twin = TrialGate::new(config).unwrap();
        twin.prepare(1000.0, input.len()).unwrap();

        let mut out = input.clone();
        gate.process(&mut [&mut out]);
        let gains = render_ones(&mut twin, input.len(), input.len());

        for i in 0..input.len() {
            prop_assert!((0.0..=1.0).contains(&gains[i]));
            prop_assert_eq!(out[i], gains[i] * input[i]);
        }
    }

    /// Unlocked: every output sample equals the input, at any point in
    /// the envelope.
    #[test]
    fn unlocked_output_is_identity(
        config in gate_config(),
        skip in 0usize..3000,
        input in prop::collection::vec(-1.0f32..=1.0, 1..2048),
    ) {
        let blend = BlendControl::new();
        let mut gate = TrialGate::with_blend(config, blend.clone()).unwrap();
        gate.prepare(1000.0, 4096).unwrap();
        render_ones(&mut gate, skip, 4096);

        blend.unlock();
        let mut left = input.clone();
        let mut right = input.clone();
        gate.process(&mut [&mut left, &mut right]);
        prop_assert_eq!(&left, &input);
        prop_assert_eq!(&right, &input);
    }
}
