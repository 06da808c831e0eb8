//! Envelope timing at a given sample rate.

use super::common::load_settings;
use clap::Args;
use mxzero_core::{AudioProcessor, RampShape, TrialGate};
use std::path::PathBuf;

#[derive(Args)]
pub struct InfoArgs {
    /// Sample rate in Hz
    #[arg(short, long, default_value = "44100")]
    sample_rate: f32,

    /// Settings file (TOML); defaults to the user settings file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let settings = load_settings(args.config.as_deref())?;
    let config = settings.gate_config()?;

    let mut gate = TrialGate::new(config)?;
    gate.prepare(args.sample_rate, 512)?;
    let envelope = gate.envelope();

    let period = envelope.period_samples();
    let pass = envelope.pass_samples_per_period();
    let shape = match config.ramp_shape {
        RampShape::Linear => "linear",
        RampShape::Exponential => "exponential",
    };

    println!("Trial gate at {} Hz", args.sample_rate);
    println!("  Frequency:       {} Hz", config.low_frequency_hz);
    println!("  Duty cycle:      {:.1}%", config.duty_cycle * 100.0);
    println!(
        "  Period:          {:.0} samples ({:.2}s)",
        period,
        period / f64::from(args.sample_rate)
    );
    println!("  Pass per period: {pass:.0} samples");
    println!("  Mute per period: {:.0} samples", period - pass);
    println!(
        "  Ramp:            {shape}, {}s ({} samples)",
        config.ramp_seconds,
        gate.ramp_samples()
    );

    Ok(())
}
