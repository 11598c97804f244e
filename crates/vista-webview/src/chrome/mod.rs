//! The chrome panel: toolbar, URL selector and loading overlay.
//!
//! Rendered as inline HTML in a transparent WebView stacked over the
//! content sandbox. The panel holds no navigation state of its own; it
//! draws whatever `ChromeView` the app last sent as `chrome_state`.

mod script;
mod theme;

pub use script::CHROME_SCRIPT;
pub use theme::{css_root, palette, BASE_CSS};

use vista_config::{ChromeConfig, ChromeTheme};

const BODY: &str = r#"<div id="toolbar">
<button id="back" title="Back">&#8592;</button>
<button id="forward" title="Forward">&#8594;</button>
<button id="refresh" title="Refresh">&#8635;</button>
<div id="url"><div class="spinner"></div><span id="url-text"></span></div>
<button id="external" title="Open in new window">&#8599;</button>
</div>
<div id="selector"></div>
<div id="overlay"><div class="spinner"></div><div id="loading-text"></div></div>"#;

#[derive(Debug, Clone)]
pub struct ChromePanel {
    pub theme: ChromeTheme,
    pub toolbar_height: u32,
    pub selector_height: u32,
    pub loading_text: String,
}

impl ChromePanel {
    pub fn from_config(config: &ChromeConfig) -> Self {
        Self {
            theme: config.theme,
            toolbar_height: config.toolbar_height,
            selector_height: config.selector_height,
            loading_text: config.loading_text.clone(),
        }
    }

    /// Height of the toolbar strip, selector row included when visible.
    pub fn height(&self, selector_visible: bool) -> u32 {
        if selector_visible {
            self.toolbar_height + self.selector_height
        } else {
            self.toolbar_height
        }
    }

    /// The complete panel document.
    pub fn html(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html data-theme=\"{theme}\">\n<head>\n<meta charset=\"utf-8\">\n\
             <style>\n{root}\n{base}</style>\n</head>\n<body>\n{body}\n\
             <script>\nvar LOADING_TEXT = {text};\n{script}</script>\n</body>\n</html>\n",
            theme = self.theme.as_str(),
            root = css_root(self.theme, self.toolbar_height, self.selector_height),
            base = BASE_CSS,
            body = BODY,
            text = script_string(&self.loading_text),
            script = CHROME_SCRIPT,
        )
    }
}

/// A JS string literal that cannot close the surrounding `<script>`.
fn script_string(text: &str) -> String {
    serde_json::to_string(text)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace('<', "\\u003c")
}
