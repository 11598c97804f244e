//! Vista configuration system.
//!
//! TOML-based configuration with validation. Every section uses
//! `serde(default)` so a partial file (or no file at all) yields a
//! working preview of the built-in URL.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vista_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{:?}", config.preview.urls);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    ChromeConfig, ChromeTheme, HistoryPolicy, LogLevel, LoggingConfig, NavigationConfig,
    PreviewConfig, SandboxConfig, VistaConfig, WindowConfig, CONFIG_SCHEMA_VERSION,
};

use std::path::Path;

use vista_common::ConfigError;

/// Load config from the platform default path.
///
/// Creates a commented default `config.toml` if none exists, then validates
/// the result. Validation failures are returned as errors here; callers that
/// want a best-effort config should use [`toml_loader::load_from_path`].
pub fn load_config() -> Result<VistaConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<VistaConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_from_missing_path_is_file_not_found() {
        let err = load_config_from(Path::new("/tmp/vista_missing_dir/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[preview]\nurls = []\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_from_reads_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[preview]\nurls = [\"https://a.test/\", \"https://b.test/\"]\n\n[chrome]\ntheme = \"midnight\"\n",
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.preview.urls.len(), 2);
        assert_eq!(config.chrome.theme, ChromeTheme::Midnight);
    }
}
