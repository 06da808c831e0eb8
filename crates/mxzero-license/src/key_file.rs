//! Access to the on-disk key artifact.
//!
//! The key artifact is opaque: its bytes are hashed, never parsed. When it
//! is missing an empty file is created so the user has a known place to
//! drop a key. Nothing in this crate writes to an existing key file.

use std::fs::{self, OpenOptions};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::LicenseError;

/// Largest key artifact that will be read and hashed (1 MiB).
pub const MAX_KEY_BYTES: u64 = 1024 * 1024;

/// Outcome of [`KeyFile::ensure_exists`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provisioned {
    /// The key file was already present.
    Existing,
    /// An empty key file was created.
    Created,
}

/// Handle to a key artifact at a fixed path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyFile {
    path: PathBuf,
}

impl KeyFile {
    /// Key artifact at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Key artifact at the platform per-user location.
    pub fn default_location() -> Result<Self, LicenseError> {
        mxzero_config::key_file_path()
            .map(Self::at)
            .ok_or(LicenseError::NoKeyLocation)
    }

    /// Path of the key artifact.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the key file, empty, along with its parent directories, unless
    /// it already exists.
    pub fn ensure_exists(&self) -> Result<Provisioned, LicenseError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| LicenseError::create_dir(parent, e))?;
        }

        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(_) => {
                tracing::info!(path = %self.path.display(), "created empty key file");
                Ok(Provisioned::Created)
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(Provisioned::Existing),
            Err(e) => Err(LicenseError::create_key(&self.path, e)),
        }
    }

    /// Read the whole key artifact.
    ///
    /// Fails with [`LicenseError::KeyTooLarge`] for artifacts over
    /// [`MAX_KEY_BYTES`] without reading them.
    pub fn read(&self) -> Result<Vec<u8>, LicenseError> {
        let file = fs::File::open(&self.path).map_err(|e| LicenseError::read_key(&self.path, e))?;
        let len = file
            .metadata()
            .map_err(|e| LicenseError::read_key(&self.path, e))?
            .len();
        if len > MAX_KEY_BYTES {
            return Err(LicenseError::KeyTooLarge {
                path: self.path.clone(),
                len,
                limit: MAX_KEY_BYTES,
            });
        }

        // The limit also bounds the read if the file grows after the check.
        let mut bytes = Vec::with_capacity(len as usize);
        file.take(MAX_KEY_BYTES + 1)
            .read_to_end(&mut bytes)
            .map_err(|e| LicenseError::read_key(&self.path, e))?;
        if bytes.len() as u64 > MAX_KEY_BYTES {
            return Err(LicenseError::KeyTooLarge {
                path: self.path.clone(),
                len: bytes.len() as u64,
                limit: MAX_KEY_BYTES,
            });
        }
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn ensure_exists_creates_empty_file_and_parents() {
        let temp = TempDir::new().unwrap();
        let key = KeyFile::at(temp.path().join("Vendor").join("nested").join("mx.key"));

        assert_eq!(key.ensure_exists().unwrap(), Provisioned::Created);
        assert!(key.path().is_file());
        assert!(key.read().unwrap().is_empty());

        assert_eq!(key.ensure_exists().unwrap(), Provisioned::Existing);
    }

    #[test]
    fn ensure_exists_never_touches_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mx.key");
        fs::write(&path, b"licensed").unwrap();

        let key = KeyFile::at(&path);
        assert_eq!(key.ensure_exists().unwrap(), Provisioned::Existing);
        assert_eq!(key.read().unwrap(), b"licensed");
    }

    #[test]
    fn read_missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let key = KeyFile::at(temp.path().join("absent.key"));
        assert!(matches!(key.read(), Err(LicenseError::ReadKey { .. })));
    }

    #[test]
    fn oversized_key_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("big.key");
        fs::write(&path, vec![0u8; MAX_KEY_BYTES as usize + 1]).unwrap();

        match KeyFile::at(&path).read() {
            Err(LicenseError::KeyTooLarge { len, limit, .. }) => {
                assert_eq!(len, MAX_KEY_BYTES + 1);
                assert_eq!(limit, MAX_KEY_BYTES);
            }
            other => panic!("expected KeyTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn key_at_size_limit_is_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("limit.key");
        fs::write(&path, vec![7u8; MAX_KEY_BYTES as usize]).unwrap();
        assert_eq!(KeyFile::at(&path).read().unwrap().len(), MAX_KEY_BYTES as usize);
    }

    #[test]
    fn parent_that_is_a_file_fails_to_provision() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, b"").unwrap();

        let key = KeyFile::at(blocker.join("mx.key"));
        assert!(matches!(
            key.ensure_exists(),
            Err(LicenseError::CreateKey { .. })
        ));
    }
}
