//! Browser chrome (toolbar, selector, overlay) presentation settings.

use serde::{Deserialize, Serialize};

/// Visual theme of the chrome panel. Purely presentational.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChromeTheme {
    /// Light, borderless toolbar.
    Plain,
    /// Light toolbar with outlined controls and a boxed URL field.
    Outlined,
    /// Dark navy toolbar with a translucent loading overlay.
    #[default]
    Midnight,
}

impl ChromeTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Outlined => "outlined",
            Self::Midnight => "midnight",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    pub theme: ChromeTheme,
    /// Toolbar height in logical pixels, selector row excluded (valid range: 32-96).
    pub toolbar_height: u32,
    /// Selector row height in logical pixels (valid range: 24-64).
    pub selector_height: u32,
    /// Text shown on the overlay while a page loads.
    pub loading_text: String,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            theme: ChromeTheme::Midnight,
            toolbar_height: 56,
            selector_height: 36,
            loading_text: "Loading website...".into(),
        }
    }
}
