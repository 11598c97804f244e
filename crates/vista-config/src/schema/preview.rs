//! Preview target configuration: which URLs the widget offers.

use serde::{Deserialize, Serialize};
use vista_common::Dimension;

/// URL previewed when nothing is configured.
pub const DEFAULT_PREVIEW_URL: &str = "https://portfolio-assets-vercel-v1.vercel.app/";

/// The widget's construction-time configuration.
///
/// Immutable for the lifetime of a mounted widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Candidate destinations, in selector order. Must be non-empty and
    /// every entry must be an absolute http(s) URL.
    pub urls: Vec<String>,
    /// Initial URL. Falls back to the first candidate when absent or when
    /// it is not one of `urls`.
    pub default_url: Option<String>,
    /// Content area width (`800`, `"800px"` or `"100%"`).
    pub width: Dimension,
    /// Content area height.
    pub height: Dimension,
    /// Show the tab-style URL selector (only rendered with 2+ URLs).
    pub show_url_selector: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            urls: vec![DEFAULT_PREVIEW_URL.to_string()],
            default_url: None,
            width: Dimension::Percent(100.0),
            height: Dimension::Percent(100.0),
            show_url_selector: true,
        }
    }
}
