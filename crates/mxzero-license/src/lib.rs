//! Key artifact verification for mxzero.
//!
//! A key artifact is an opaque file at a fixed per-user path. Validation
//! creates it empty if absent, reads it, hashes it with Whirlpool and
//! compares the 512-bit digest to a reference. A match unlocks the shared
//! [`BlendControl`](mxzero_core::BlendControl), bypassing the trial gate for
//! the rest of the process. Any failure leaves the gate locked.
//!
//! Validation does file I/O and hashing, so it belongs on a background
//! thread or in start-up code, never inside the audio callback.
//!
//! # Example
//!
//! ```rust,no_run
//! use mxzero_core::{AudioProcessor, GateConfig, TrialGate};
//! use mxzero_license::LicenseValidator;
//!
//! let mut gate = TrialGate::new(GateConfig::default()).unwrap();
//! gate.prepare(48000.0, 512).unwrap();
//!
//! let handle = LicenseValidator::new()
//!     .unwrap()
//!     .spawn(gate.blend().clone())
//!     .unwrap();
//! // ... audio keeps running while the key is checked ...
//! let outcome = handle.join().unwrap();
//! println!("license: {outcome:?}");
//! ```

mod digest;
mod error;
mod key_file;
mod validator;

pub use digest::{DIGEST_LEN, KeyDigest, REFERENCE_DIGEST_HEX};
pub use error::LicenseError;
pub use key_file::{KeyFile, MAX_KEY_BYTES, Provisioned};
pub use validator::{LicenseValidator, VALIDATION_THREAD_NAME, ValidationOutcome};
