//! Shared CLI helpers used across multiple commands.

use anyhow::Context;
use mxzero_config::Settings;
use mxzero_license::{KeyFile, LicenseError};
use std::path::{Path, PathBuf};

/// Load settings from `--config`, or the user settings file if it exists.
pub fn load_settings(config: Option<&Path>) -> anyhow::Result<Settings> {
    match config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display())),
        None => Ok(Settings::load_user()?),
    }
}

/// Key file named by `--key`, else the settings override, else the
/// platform default.
pub fn resolve_key(key: Option<PathBuf>, settings: &Settings) -> Result<KeyFile, LicenseError> {
    key.or_else(|| settings.key_path())
        .map(KeyFile::at)
        .ok_or(LicenseError::NoKeyLocation)
}

/// Root-mean-square level of `samples`.
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f32 = samples.iter().map(|s| s * s).sum();
    (sum / samples.len() as f32).sqrt()
}

/// Largest absolute sample.
pub fn peak(samples: &[f32]) -> f32 {
    samples.iter().map(|s| s.abs()).fold(0.0, f32::max)
}

/// Linear amplitude to dBFS, floored at -120 dB.
pub fn linear_to_db(linear: f32) -> f32 {
    if linear <= 0.0 {
        -120.0
    } else {
        20.0 * linear.log10()
    }
}
