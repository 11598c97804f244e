//! Sandbox webview and logging settings.

use serde::{Deserialize, Serialize};

/// Settings for the content webview that hosts third-party pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Custom user agent; `None` keeps the platform default.
    pub user_agent: Option<String>,
    /// Enable dev tools (always on in debug builds).
    pub devtools: bool,
    pub autoplay: bool,
    pub clipboard: bool,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            user_agent: None,
            devtools: cfg!(debug_assertions),
            autoplay: false,
            clipboard: false,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing-subscriber` filter directive for the vista crates.
    pub fn directive(&self) -> &'static str {
        match self {
            Self::Trace => "vista=trace",
            Self::Debug => "vista=debug",
            Self::Info => "vista=info",
            Self::Warn => "vista=warn",
            Self::Error => "vista=error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sandbox_defaults_are_restrictive() {
        let config = SandboxConfig::default();
        assert!(config.user_agent.is_none());
        assert!(!config.autoplay);
        assert!(!config.clipboard);
    }

    #[test]
    fn log_level_directive() {
        assert_eq!(LogLevel::default().directive(), "vista=info");
        let level: LogLevel = serde_json::from_str("\"debug\"").unwrap();
        assert_eq!(level.directive(), "vista=debug");
    }
}
