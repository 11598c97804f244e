//! Validated, immutable widget configuration.

use tracing::warn;
use vista_common::{ConfigError, Dimension};
use vista_config::validation::is_web_url;
use vista_config::{HistoryPolicy, VistaConfig};

/// Construction-time configuration of one widget.
///
/// Built once at mount and never mutated; the candidate list is guaranteed
/// non-empty and every entry is an absolute `http`/`https` URL.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    urls: Vec<String>,
    initial_url: String,
    pub width: Dimension,
    pub height: Dimension,
    pub show_url_selector: bool,
    pub history_policy: HistoryPolicy,
    pub stale_completion_guard: bool,
}

impl WidgetConfig {
    /// Validate the candidate list and resolve the initial URL.
    ///
    /// `default_url` is used when it is one of `urls`; otherwise the first
    /// candidate is.
    pub fn new(urls: Vec<String>, default_url: Option<&str>) -> Result<Self, ConfigError> {
        if urls.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one preview URL is required".into(),
            ));
        }
        if let Some(bad) = urls.iter().find(|u| !is_web_url(u)) {
            return Err(ConfigError::ValidationError(format!(
                "'{bad}' is not an absolute http(s) URL"
            )));
        }

        let initial_url = resolve_initial_url(&urls, default_url).to_string();

        Ok(Self {
            urls,
            initial_url,
            width: Dimension::Percent(100.0),
            height: Dimension::Percent(100.0),
            show_url_selector: true,
            history_policy: HistoryPolicy::Compat,
            stale_completion_guard: true,
        })
    }

    /// Build from the `[preview]` and `[navigation]` sections of a loaded config.
    pub fn from_config(config: &VistaConfig) -> Result<Self, ConfigError> {
        let preview = &config.preview;
        let mut widget = Self::new(preview.urls.clone(), preview.default_url.as_deref())?;
        widget.width = preview.width;
        widget.height = preview.height;
        widget.show_url_selector = preview.show_url_selector;
        widget.history_policy = config.navigation.history_policy;
        widget.stale_completion_guard = config.navigation.stale_completion_guard;
        Ok(widget)
    }

    pub fn with_url_selector(mut self, show: bool) -> Self {
        self.show_url_selector = show;
        self
    }

    pub fn with_history_policy(mut self, policy: HistoryPolicy) -> Self {
        self.history_policy = policy;
        self
    }

    pub fn with_stale_completion_guard(mut self, enabled: bool) -> Self {
        self.stale_completion_guard = enabled;
        self
    }

    pub fn with_dimensions(mut self, width: Dimension, height: Dimension) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Candidate URLs in selector order.
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// The URL loaded at mount.
    pub fn initial_url(&self) -> &str {
        &self.initial_url
    }

    /// A single fixed URL with no selector: there is nothing to select.
    pub fn is_single_url(&self) -> bool {
        self.urls.len() == 1 && !self.show_url_selector
    }

    /// Whether the tab-style selector is rendered.
    pub fn selector_visible(&self) -> bool {
        self.show_url_selector && self.urls.len() > 1
    }
}

/// Pick the mount URL: `default_url` if it is a candidate, else the first one.
///
/// `urls` must be non-empty; `new` checks that before calling.
fn resolve_initial_url<'a>(urls: &'a [String], default_url: Option<&str>) -> &'a str {
    if let Some(default) = default_url {
        if let Some(found) = urls.iter().find(|u| u.as_str() == default) {
            return found;
        }
        warn!(
            default_url = default,
            "default URL is not a configured candidate, using the first URL"
        );
    }
    &urls[0]
}
