//! License status reporting.

use super::common::{load_settings, resolve_key};
use clap::Args;
use mxzero_license::{KeyDigest, LicenseError, LicenseValidator};
use std::path::PathBuf;

#[derive(Args)]
pub struct ValidateArgs {
    /// Key file to check instead of the configured one
    #[arg(short, long)]
    key: Option<PathBuf>,

    /// Settings file (TOML); defaults to the user settings file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Print the key path, its digest and the resulting gate state.
///
/// A locked result is a normal outcome, not an error.
pub fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let settings = load_settings(args.config.as_deref())?;

    let key = match resolve_key(args.key, &settings) {
        Ok(key) => key,
        Err(e) => {
            println!("Key file: unavailable ({e})");
            println!("Status:   locked");
            return Ok(());
        }
    };
    println!("Key file: {}", key.path().display());

    let (digest, unlocked) = evaluate(&LicenseValidator::with_key(key));
    match digest {
        Ok(digest) => println!("Digest:   {digest}"),
        Err(e) => println!("Digest:   unavailable ({e})"),
    }
    println!("Status:   {}", if unlocked { "unlocked" } else { "locked" });

    Ok(())
}

/// Digest of the key file and whether it matches the reference, from a
/// single read of the key.
fn evaluate(validator: &LicenseValidator) -> (Result<KeyDigest, LicenseError>, bool) {
    let digest = validator.digest();
    let unlocked = matches!(&digest, Ok(d) if d == validator.reference());
    tracing::debug!(unlocked, "key file checked");
    (digest, unlocked)
}
