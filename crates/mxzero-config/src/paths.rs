//! Platform-specific locations for the key artifact and user settings.
//!
//! # Directory Structure
//!
//! - **Key artifact**: `~/.config/Application Support/Creative Intent/mxzero.key` (Linux),
//!   `~/Library/Application Support/Creative Intent/mxzero.key` (macOS),
//!   `%APPDATA%\Application Support\Creative Intent\mxzero.key` (Windows)
//! - **User settings**: `~/.config/mxzero/settings.toml` (Linux),
//!   `~/Library/Application Support/mxzero/settings.toml` (macOS),
//!   `%APPDATA%\mxzero\settings.toml` (Windows)
//!
//! # Example
//!
//! ```rust,no_run
//! use mxzero_config::paths;
//!
//! if let Some(key) = paths::key_file_path() {
//!     println!("Key artifact: {}", key.display());
//! }
//! println!("Settings: {}", paths::settings_path().display());
//! ```

use std::path::PathBuf;

/// Directory under the per-user application data root that holds vendor
/// folders. On macOS the platform data directory already is this folder.
pub const APPLICATION_SUPPORT_DIR: &str = "Application Support";

/// Vendor directory that holds the key artifact.
pub const VENDOR_DIR: &str = "Creative Intent";

/// Application name used for the settings directory.
pub const APP_NAME: &str = "mxzero";

/// File name of the key artifact.
pub const KEY_FILE_NAME: &str = "mxzero.key";

/// File name of the user settings file.
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Returns the fixed per-user key artifact path.
///
/// # Platform Paths
///
/// - Linux: `~/.config/Application Support/Creative Intent/mxzero.key`
/// - macOS: `~/Library/Application Support/Creative Intent/mxzero.key`
/// - Windows: `%APPDATA%\Application Support\Creative Intent\mxzero.key`
///
/// Existing installations already keep their key files here, so the
/// location is not XDG-style on Linux.
///
/// Returns `None` when the platform reports no per-user directory (no home
/// directory, for instance). Unlike [`user_config_dir`] there is no
/// working-directory fallback.
pub fn key_file_path() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    let support = dirs::data_dir();
    #[cfg(not(target_os = "macos"))]
    let support = dirs::config_dir().map(|dir| dir.join(APPLICATION_SUPPORT_DIR));

    support.map(|dir| dir.join(VENDOR_DIR).join(KEY_FILE_NAME))
}

/// Returns the user-specific configuration directory.
///
/// # Platform Paths
///
/// - Linux: `~/.config/mxzero/`
/// - macOS: `~/Library/Application Support/mxzero/`
/// - Windows: `%APPDATA%\mxzero\`
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the user settings file path inside [`user_config_dir`].
pub fn settings_path() -> PathBuf {
    user_config_dir().join(SETTINGS_FILE_NAME)
}
