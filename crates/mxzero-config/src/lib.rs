//! Settings and platform paths for mxzero.
//!
//! # Features
//!
//! - **Paths**: fixed per-user key artifact location and the user config
//!   directory
//! - **Settings**: TOML file overriding the gate envelope, crossfade and key
//!   artifact location
//!
//! # Example
//!
//! ```rust,no_run
//! use mxzero_config::{Settings, settings_path};
//!
//! let settings = Settings::load_or_default(settings_path()).unwrap();
//! let gate = settings.gate_config().unwrap();
//! println!("duty cycle: {}", gate.duty_cycle);
//! ```

mod error;
mod settings;

/// Platform-specific key artifact and settings locations.
pub mod paths;

pub use error::ConfigError;
pub use paths::{key_file_path, settings_path, user_config_dir};
pub use settings::{GateSettings, LicenseSettings, RampShapeSetting, Settings};
