//! Whirlpool digests of key artifacts.

use core::fmt;
use whirlpool::{Digest, Whirlpool};

use crate::LicenseError;

/// Digest length in bytes (512 bits).
pub const DIGEST_LEN: usize = 64;

/// Hex-encoded Whirlpool digest of a valid key artifact.
pub const REFERENCE_DIGEST_HEX: &str = "35e9be197dc5ba92a21096d73b46a24dce26e028863f27c7606d995e7568e40ceb4943e868a860a0c573afa3e1a7684f9bf1f0ac74f171ebe61ff4edaa8954ba";

/// A 512-bit Whirlpool digest.
///
/// Equality compares all 64 bytes without an early exit.
///
/// # Example
///
/// ```rust
/// use mxzero_license::KeyDigest;
///
/// let digest = KeyDigest::of_bytes(b"abc");
/// assert!(digest.to_hex().starts_with("4e2448a4c6f486bb"));
/// assert_eq!(KeyDigest::from_hex(&digest.to_hex()).unwrap(), digest);
/// ```
#[derive(Clone, Copy, Debug, Eq)]
pub struct KeyDigest([u8; DIGEST_LEN]);

impl KeyDigest {
    /// Hash `bytes` with Whirlpool.
    pub fn of_bytes(bytes: &[u8]) -> Self {
        let output = Whirlpool::digest(bytes);
        let mut digest = [0u8; DIGEST_LEN];
        digest.copy_from_slice(&output);
        Self(digest)
    }

    /// Parse a 128-character hex string (either case).
    pub fn from_hex(hex_str: &str) -> Result<Self, LicenseError> {
        let mut digest = [0u8; DIGEST_LEN];
        hex::decode_to_slice(hex_str.trim(), &mut digest)?;
        Ok(Self(digest))
    }

    /// The compiled-in reference digest.
    pub fn reference() -> Self {
        // The constant is checked by `reference_constant_parses`.
        Self::from_hex(REFERENCE_DIGEST_HEX).unwrap_or(Self([0; DIGEST_LEN]))
    }

    /// Lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }
}

impl PartialEq for KeyDigest {
    fn eq(&self, other: &Self) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl fmt::Display for KeyDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
