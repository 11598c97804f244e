//! Configuration schema types for Vista.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod chrome;
mod navigation;
mod preview;
mod system;
mod window;

pub use chrome::*;
pub use navigation::*;
pub use preview::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Vista.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VistaConfig {
    pub preview: PreviewConfig,
    pub navigation: NavigationConfig,
    pub chrome: ChromeConfig,
    pub sandbox: SandboxConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use vista_common::Dimension;

    #[test]
    fn default_config_previews_a_single_url() {
        let config = VistaConfig::default();
        assert_eq!(config.preview.urls.len(), 1);
        assert!(config.preview.urls[0].starts_with("https://"));
        assert!(config.preview.default_url.is_none());
        assert!(config.preview.show_url_selector);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: VistaConfig = toml::from_str("").unwrap();
        assert_eq!(config.preview.width, Dimension::Percent(100.0));
        assert_eq!(config.navigation.history_policy, HistoryPolicy::Compat);
        assert!(config.navigation.stale_completion_guard);
        assert_eq!(config.chrome.theme, ChromeTheme::Midnight);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let toml_str = r#"
[preview]
urls = ["https://a.test/", "https://b.test/"]
default_url = "https://b.test/"
height = "384px"

[navigation]
history_policy = "symmetric"

[chrome]
theme = "outlined"
"#;
        let config: VistaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.preview.urls.len(), 2);
        assert_eq!(config.preview.default_url.as_deref(), Some("https://b.test/"));
        assert_eq!(config.preview.height, Dimension::Pixels(384.0));
        assert_eq!(config.preview.width, Dimension::Percent(100.0));
        assert_eq!(config.navigation.history_policy, HistoryPolicy::Symmetric);
        assert!(config.navigation.stale_completion_guard);
        assert_eq!(config.chrome.theme, ChromeTheme::Outlined);
        assert_eq!(config.window.title, "Vista");
    }
}
