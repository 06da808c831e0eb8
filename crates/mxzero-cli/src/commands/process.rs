//! Offline rendering of a WAV file through the trial gate.

use super::common::{linear_to_db, load_settings, peak, resolve_key, rms};
use crate::wav::{WavSpec, read_wav, write_wav};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use mxzero_core::{AudioProcessor, TrialGate};
use mxzero_license::LicenseValidator;
use std::path::PathBuf;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Settings file (TOML); defaults to the user settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Key file to validate instead of the configured one
    #[arg(short, long)]
    key: Option<PathBuf>,

    /// Processing block size in frames
    #[arg(long, default_value = "512", value_parser = parse_block_size)]
    block_size: usize,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32", value_parser = parse_bit_depth)]
    bit_depth: u16,

    /// Render with the gate locked, without reading the key file
    #[arg(long)]
    skip_validation: bool,
}

fn parse_block_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("block size must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_bit_depth(s: &str) -> Result<u16, String> {
    match s.parse::<u16>() {
        Ok(bits @ (16 | 24 | 32)) => Ok(bits),
        Ok(bits) => Err(format!("unsupported bit depth {bits} (expected 16, 24, or 32)")),
        Err(e) => Err(e.to_string()),
    }
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let settings = load_settings(args.config.as_deref())?;
    let config = settings.gate_config()?;

    println!("Reading {}...", args.input.display());
    let (mut samples, spec) = read_wav(&args.input)?;
    let channels = usize::from(spec.channels);
    let frames = samples.len() / channels;
    let sample_rate = spec.sample_rate as f32;

    println!(
        "  {} frames, {} channel(s), {} Hz, {:.2}s",
        frames,
        channels,
        spec.sample_rate,
        frames as f32 / sample_rate
    );

    let mut gate = TrialGate::new(config)?;
    gate.prepare(sample_rate, args.block_size)?;

    if args.skip_validation {
        println!("Skipping license validation");
    } else {
        match resolve_key(args.key, &settings) {
            Ok(key) => {
                let outcome = LicenseValidator::with_key(key).validate(gate.blend());
                tracing::debug!(?outcome, "license validation");
            }
            Err(e) => tracing::warn!(error = %e, "key file unavailable, gate stays locked"),
        }
    }
    println!("Gate: {:?}", gate.state());

    let input_rms = rms(&samples);
    let input_peak = peak(&samples);

    let pb = ProgressBar::new(frames as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    let block_samples = args.block_size * channels;
    let mut done = 0usize;
    for block in samples.chunks_mut(block_samples) {
        gate.process_interleaved(block, channels);
        done += block.len() / channels;
        pb.set_position(done as u64);
    }
    pb.finish_with_message("done");
    gate.release();

    println!("\nStats:");
    println!(
        "  Input:  RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(input_rms),
        linear_to_db(input_peak)
    );
    println!(
        "  Output: RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(rms(&samples)),
        linear_to_db(peak(&samples))
    );

    let out_spec = WavSpec {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: args.bit_depth,
    };

    println!("\nWriting {}...", args.output.display());
    write_wav(&args.output, &samples, out_spec)?;
    println!("Done!");

    Ok(())
}
