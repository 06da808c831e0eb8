//! User settings file format and operations.

use mxzero_core::{
    DEFAULT_DUTY_CYCLE, DEFAULT_LOW_FREQUENCY_HZ, DEFAULT_RAMP_SECONDS, GateConfig, RampShape,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::paths;

/// Persistent user settings.
///
/// Every field has a default, so an empty file (or a missing one, via
/// [`Settings::load_or_default`]) yields the shipping behaviour.
///
/// # TOML Format
///
/// ```toml
/// [gate]
/// low_frequency_hz = 0.05
/// duty_cycle = 0.75
/// ramp_seconds = 1.0
/// ramp_shape = "linear"
///
/// [license]
/// key_path = "/custom/location/mxzero.key"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Envelope and crossfade parameters.
    pub gate: GateSettings,

    /// Key artifact lookup.
    pub license: LicenseSettings,
}

/// The `[gate]` table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GateSettings {
    /// Envelope frequency in Hz.
    pub low_frequency_hz: f64,
    /// Fraction of each period that passes audio, in [0, 1].
    pub duty_cycle: f64,
    /// Crossfade time in seconds.
    pub ramp_seconds: f32,
    /// Crossfade curve.
    pub ramp_shape: RampShapeSetting,
}

impl Default for GateSettings {
    fn default() -> Self {
        Self {
            low_frequency_hz: DEFAULT_LOW_FREQUENCY_HZ,
            duty_cycle: DEFAULT_DUTY_CYCLE,
            ramp_seconds: DEFAULT_RAMP_SECONDS,
            ramp_shape: RampShapeSetting::default(),
        }
    }
}

impl From<GateConfig> for GateSettings {
    fn from(config: GateConfig) -> Self {
        Self {
            low_frequency_hz: config.low_frequency_hz,
            duty_cycle: config.duty_cycle,
            ramp_seconds: config.ramp_seconds,
            ramp_shape: config.ramp_shape.into(),
        }
    }
}

/// Serialized form of [`RampShape`] (`"linear"` or `"exponential"`).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RampShapeSetting {
    /// Constant-slope crossfade.
    #[default]
    Linear,
    /// One-pole crossfade.
    Exponential,
}

impl From<RampShapeSetting> for RampShape {
    fn from(shape: RampShapeSetting) -> Self {
        match shape {
            RampShapeSetting::Linear => RampShape::Linear,
            RampShapeSetting::Exponential => RampShape::Exponential,
        }
    }
}

impl From<RampShape> for RampShapeSetting {
    fn from(shape: RampShape) -> Self {
        match shape {
            RampShape::Linear => RampShapeSetting::Linear,
            RampShape::Exponential => RampShapeSetting::Exponential,
        }
    }
}

/// The `[license]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LicenseSettings {
    /// Override for the key artifact location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_path: Option<PathBuf>,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load settings from a TOML file, falling back to defaults when the
    /// file does not exist. Any other read or parse failure is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::read_file(path, e)),
        }
    }

    /// Load the user settings file at [`paths::settings_path`], or defaults.
    pub fn load_user() -> Result<Self, ConfigError> {
        Self::load_or_default(paths::settings_path())
    }

    /// Parse settings from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save settings to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the settings to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validated gate configuration described by the `[gate]` table.
    pub fn gate_config(&self) -> Result<GateConfig, ConfigError> {
        let config = GateConfig {
            low_frequency_hz: self.gate.low_frequency_hz,
            duty_cycle: self.gate.duty_cycle,
            ramp_seconds: self.gate.ramp_seconds,
            ramp_shape: self.gate.ramp_shape.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Key artifact location: the `[license]` override if set, otherwise
    /// the platform default from [`paths::key_file_path`].
    pub fn key_path(&self) -> Option<PathBuf> {
        self.license.key_path.clone().or_else(paths::key_file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mxzero_core::GateError;

    #[test]
    fn empty_document_is_default() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.gate_config().unwrap(), GateConfig::default());
    }

    #[test]
    fn partial_gate_table_keeps_other_defaults() {
        let settings = Settings::from_toml(
            r#"
            [gate]
            duty_cycle = 0.5
            ramp_shape = "exponential"
            "#,
        )
        .unwrap();
        let config = settings.gate_config().unwrap();
        assert_eq!(config.duty_cycle, 0.5);
        assert_eq!(config.ramp_shape, RampShape::Exponential);
        assert_eq!(config.low_frequency_hz, DEFAULT_LOW_FREQUENCY_HZ);
        assert_eq!(config.ramp_seconds, DEFAULT_RAMP_SECONDS);
    }

    #[test]
    fn unknown_ramp_shape_is_parse_error() {
        let result = Settings::from_toml("[gate]\nramp_shape = \"cosine\"\n");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn out_of_range_gate_is_rejected() {
        let settings = Settings::from_toml("[gate]\nlow_frequency_hz = -1.0\n").unwrap();
        assert!(matches!(
            settings.gate_config(),
            Err(ConfigError::InvalidGate(GateError::InvalidLowFrequency(_)))
        ));
    }

    #[test]
    fn key_path_override_wins() {
        let settings = Settings::from_toml("[license]\nkey_path = \"/opt/keys/mx.key\"\n").unwrap();
        assert_eq!(settings.key_path(), Some(PathBuf::from("/opt/keys/mx.key")));
        assert_eq!(Settings::default().key_path(), paths::key_file_path());
    }

    #[test]
    fn toml_roundtrip_preserves_values() {
        let settings = Settings {
            gate: GateSettings {
                low_frequency_hz: 0.2,
                duty_cycle: 0.6,
                ramp_seconds: 0.25,
                ramp_shape: RampShapeSetting::Exponential,
            },
            license: LicenseSettings {
                key_path: Some(PathBuf::from("/tmp/mx.key")),
            },
        };
        let text = settings.to_toml().unwrap();
        assert!(text.contains("ramp_shape = \"exponential\""), "got: {text}");
        assert_eq!(Settings::from_toml(&text).unwrap(), settings);
    }

    #[test]
    fn gate_settings_from_config() {
        let settings = GateSettings::from(GateConfig::default());
        assert_eq!(settings, GateSettings::default());
    }
}
