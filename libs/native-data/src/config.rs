//! Configuration loading
//!
//! Priority (highest last): built-in defaults, YAML/TOML file, `NATIVE_DATA_*` environment.

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::bytes::ByteOrder;
use crate::error::{ConvertError, Result};

/// Environment variable prefix, nested keys are separated by `__`
pub const ENV_PREFIX: &str = "NATIVE_DATA_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeDataConfig {
    /// Byte order used by callers that do not name one explicitly
    #[serde(default)]
    pub default_byte_order: ByteOrder,

    #[serde(default)]
    pub logging: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive, e.g. `info` or `native_data=trace`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of text
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Default for NativeDataConfig {
    fn default() -> Self {
        Self {
            default_byte_order: ByteOrder::Native,
            logging: LogConfig::default(),
        }
    }
}

impl NativeDataConfig {
    /// Load configuration, optionally from a `.yaml`/`.yml`/`.toml` file
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.exists() {
                return Err(ConvertError::config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            let ext = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.to_ascii_lowercase());
            figment = match ext.as_deref() {
                Some("yaml") | Some("yml") => figment.merge(Yaml::file(path)),
                Some("toml") => figment.merge(Toml::file(path)),
                _ => {
                    return Err(ConvertError::config(format!(
                        "unsupported config format: {}",
                        path.display()
                    )))
                },
            };
            info!("Loading configuration from {}", path.display());
        }

        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        info!(
            "Using default byte order {} (host is {})",
            config.default_byte_order,
            ByteOrder::host()
        );
        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NativeDataConfig::default();
        assert_eq!(config.default_byte_order, ByteOrder::Native);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_env_override() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("NATIVE_DATA_DEFAULT_BYTE_ORDER", "BE");
            jail.set_env("NATIVE_DATA_LOGGING__LEVEL", "debug");
            let config = NativeDataConfig::load(None).unwrap();
            assert_eq!(config.default_byte_order, ByteOrder::BigEndian);
            assert_eq!(config.logging.level, "debug");
            Ok(())
        });
    }

    #[test]
    fn test_yaml_file_then_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "native.yaml",
                "default_byte_order: little_endian\nlogging:\n  json: true\n",
            )?;
            let config = NativeDataConfig::load(Some(Path::new("native.yaml"))).unwrap();
            assert_eq!(config.default_byte_order, ByteOrder::LittleEndian);
            assert!(config.logging.json);

            jail.set_env("NATIVE_DATA_DEFAULT_BYTE_ORDER", "native");
            let config = NativeDataConfig::load(Some(Path::new("native.yaml"))).unwrap();
            assert_eq!(config.default_byte_order, ByteOrder::Native);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_byte_order() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("bad.toml", "default_byte_order = \"CDAB\"\n")?;
            let err = NativeDataConfig::load(Some(Path::new("bad.toml"))).unwrap_err();
            assert!(matches!(err, ConvertError::Config(_)));
            Ok(())
        });
    }

    #[test]
    fn test_missing_and_unknown_files() {
        figment::Jail::expect_with(|jail| {
            let err = NativeDataConfig::load(Some(Path::new("absent.yaml"))).unwrap_err();
            assert!(matches!(err, ConvertError::Config(_)));

            jail.create_file("native.ini", "x=1")?;
            let err = NativeDataConfig::load(Some(Path::new("native.ini"))).unwrap_err();
            assert!(matches!(err, ConvertError::Config(_)));
            Ok(())
        });
    }
}
