//! Key artifact validation and the one-way unlock.

use std::io;
use std::thread::{self, JoinHandle};

use mxzero_core::BlendControl;

use crate::{KeyDigest, KeyFile, LicenseError};

/// Name of the thread started by [`LicenseValidator::spawn`].
pub const VALIDATION_THREAD_NAME: &str = "mxzero-license";

/// Result of [`LicenseValidator::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The digest matched and the blend coefficient is now 0.
    Unlocked,
    /// The key artifact was read but its digest is not the reference.
    Mismatch,
    /// The key artifact could not be located, provisioned or read.
    Failed,
}

impl ValidationOutcome {
    /// Whether gating is bypassed after this outcome.
    pub fn is_unlocked(self) -> bool {
        self == ValidationOutcome::Unlocked
    }
}

/// Verifies a key artifact against a reference digest.
///
/// Runs off the audio thread: validation touches the filesystem and hashes
/// the whole artifact. The only effect on audio is the single atomic store
/// made by [`BlendControl::unlock`].
///
/// # Example
///
/// ```rust,no_run
/// use mxzero_core::{BlendControl, GateState};
/// use mxzero_license::LicenseValidator;
///
/// let blend = BlendControl::new();
/// let validator = LicenseValidator::new().unwrap();
/// let outcome = validator.validate(&blend);
/// println!("{outcome:?}, gate {:?}", blend.state());
/// ```
#[derive(Clone, Debug)]
pub struct LicenseValidator {
    key: KeyFile,
    reference: KeyDigest,
}

impl LicenseValidator {
    /// Validator for the platform key location and the compiled-in
    /// reference digest.
    pub fn new() -> Result<Self, LicenseError> {
        Ok(Self::with_key(KeyFile::default_location()?))
    }

    /// Validator for an explicit key artifact and the compiled-in reference.
    pub fn with_key(key: KeyFile) -> Self {
        Self {
            key,
            reference: KeyDigest::reference(),
        }
    }

    /// Replace the reference digest.
    pub fn with_reference(mut self, reference: KeyDigest) -> Self {
        self.reference = reference;
        self
    }

    /// Key artifact being validated.
    pub fn key(&self) -> &KeyFile {
        &self.key
    }

    /// Reference digest the key is compared against.
    pub fn reference(&self) -> &KeyDigest {
        &self.reference
    }

    /// Provision, read and hash the key artifact.
    pub fn digest(&self) -> Result<KeyDigest, LicenseError> {
        tracing::debug!(path = %self.key.path().display(), "checking key file");
        self.key.ensure_exists()?;
        let bytes = self.key.read()?;
        Ok(KeyDigest::of_bytes(&bytes))
    }

    /// Whether the key artifact's digest equals the reference.
    ///
    /// Does not touch any blend coefficient.
    pub fn check(&self) -> Result<bool, LicenseError> {
        Ok(self.digest()? == self.reference)
    }

    /// Check the key artifact and unlock `blend` on a match.
    ///
    /// Never returns an error: any failure is logged and leaves `blend`
    /// untouched.
    pub fn validate(&self, blend: &BlendControl) -> ValidationOutcome {
        match self.check() {
            Ok(true) => {
                blend.unlock();
                tracing::info!(path = %self.key.path().display(), "key accepted");
                ValidationOutcome::Unlocked
            }
            Ok(false) => {
                tracing::info!(
                    path = %self.key.path().display(),
                    "key does not match, gate stays locked"
                );
                ValidationOutcome::Mismatch
            }
            Err(e) => {
                tracing::warn!(error = %e, "key validation failed, gate stays locked");
                ValidationOutcome::Failed
            }
        }
    }

    /// Run [`validate`](Self::validate) on a named background thread.
    ///
    /// Fails only if the thread cannot be started.
    pub fn spawn(self, blend: BlendControl) -> io::Result<JoinHandle<ValidationOutcome>> {
        thread::Builder::new()
            .name(VALIDATION_THREAD_NAME.into())
            .spawn(move || self.validate(&blend))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mxzero_core::GateState;
    use tempfile::TempDir;

    #[test]
    fn absent_key_is_created_and_stays_locked() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Creative Intent").join("mxzero.key");
        let blend = BlendControl::new();

        let outcome = LicenseValidator::with_key(KeyFile::at(&path)).validate(&blend);

        assert_eq!(outcome, ValidationOutcome::Mismatch);
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
        assert_eq!(blend.state(), GateState::Locked);
    }

    #[test]
    fn matching_key_unlocks() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mx.key");
        std::fs::write(&path, b"registered to test").unwrap();

        let blend = BlendControl::new();
        let validator = LicenseValidator::with_key(KeyFile::at(&path))
            .with_reference(KeyDigest::of_bytes(b"registered to test"));

        assert!(validator.check().unwrap());
        assert!(!blend.is_unlocked(), "check must not unlock");
        assert!(validator.validate(&blend).is_unlocked());
        assert_eq!(blend.alpha(), 0.0);
    }

    #[test]
    fn unreadable_key_fails_closed() {
        let temp = TempDir::new().unwrap();
        // A directory at the key path exists but cannot be read as a file
        let blend = BlendControl::new();
        let validator = LicenseValidator::with_key(KeyFile::at(temp.path()))
            .with_reference(KeyDigest::of_bytes(b""));

        assert!(validator.check().is_err());
        assert_eq!(validator.validate(&blend), ValidationOutcome::Failed);
        assert_eq!(blend.state(), GateState::Locked);
    }

    #[test]
    fn spawn_runs_on_named_thread() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mx.key");
        std::fs::write(&path, b"k").unwrap();

        let blend = BlendControl::new();
        let handle = LicenseValidator::with_key(KeyFile::at(&path))
            .with_reference(KeyDigest::of_bytes(b"k"))
            .spawn(blend.clone())
            .unwrap();
        assert_eq!(handle.thread().name(), Some(VALIDATION_THREAD_NAME));
        assert_eq!(handle.join().unwrap(), ValidationOutcome::Unlocked);
        assert!(blend.is_unlocked());
    }
}
