use vista_config::SandboxConfig;

/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load (mutually exclusive with `html`).
    pub url: Option<String>,
    /// Initial HTML content to render (mutually exclusive with `url`).
    pub html: Option<String>,
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    pub devtools: bool,
    pub user_agent: Option<String>,
    pub clipboard: bool,
    pub autoplay: bool,
    /// Scripts injected into every document before page scripts run.
    pub init_scripts: Vec<&'static str>,
    /// Enforce the navigation allowlist.
    pub restrict_navigation: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: None,
            clipboard: false,
            autoplay: false,
            init_scripts: Vec::new(),
            restrict_navigation: true,
        }
    }
}

impl WebViewConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Create a config that renders inline HTML.
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Default::default()
        }
    }

    /// Apply the `[sandbox]` section of the user configuration.
    pub fn sandboxed(mut self, sandbox: &SandboxConfig) -> Self {
        self.user_agent = sandbox.user_agent.clone();
        self.devtools = sandbox.devtools;
        self.autoplay = sandbox.autoplay;
        self.clipboard = sandbox.clipboard;
        self
    }

    pub fn with_init_script(mut self, script: &'static str) -> Self {
        self.init_scripts.push(script);
        self
    }

    pub fn transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sandbox_section_is_applied() {
        let sandbox = SandboxConfig {
            user_agent: Some("Vista/1".into()),
            devtools: true,
            autoplay: true,
            clipboard: false,
        };
        let config = WebViewConfig::with_url("about:blank").sandboxed(&sandbox);
        assert_eq!(config.user_agent.as_deref(), Some("Vista/1"));
        assert!(config.devtools);
        assert!(config.autoplay);
        assert!(!config.clipboard);
        assert!(config.restrict_navigation);
    }

    #[test]
    fn init_scripts_accumulate_in_order() {
        let config = WebViewConfig::with_html("<p></p>")
            .with_init_script("a")
            .with_init_script("b");
        assert_eq!(config.init_scripts, vec!["a", "b"]);
        assert!(config.url.is_none());
    }
}
