//! Chrome view model: what the toolbar, selector and overlay display.
//!
//! Rendering is owned by the host's presentation layer; this module only
//! projects session state into a serialisable snapshot.

use serde::Serialize;

use crate::sandbox::{HostEnvironment, NavigationSandbox};
use crate::widget::EmbeddedBrowserWidget;

/// One entry of the tab-style URL selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlTab {
    pub url: String,
    pub label: String,
    pub active: bool,
}

/// Snapshot of everything the chrome needs to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChromeView {
    /// Text of the URL display.
    pub url: String,
    pub back_enabled: bool,
    pub forward_enabled: bool,
    /// Drives both the toolbar spinner and the content overlay.
    pub loading: bool,
    /// Empty unless the selector is visible.
    pub tabs: Vec<UrlTab>,
    /// CSS lengths of the content area.
    pub width: String,
    pub height: String,
}

impl ChromeView {
    pub fn of<S, H>(widget: &EmbeddedBrowserWidget<S, H>) -> Self
    where
        S: NavigationSandbox,
        H: HostEnvironment,
    {
        let state = widget.state();
        let config = widget.config();

        let tabs = if config.selector_visible() {
            config
                .urls()
                .iter()
                .enumerate()
                .map(|(i, url)| UrlTab {
                    url: url.clone(),
                    label: display_label(url),
                    active: i == widget.selected_index(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            url: state.current_url.clone(),
            back_enabled: state.can_go_back,
            forward_enabled: state.can_go_forward,
            loading: state.is_loading,
            tabs,
            width: config.width.to_css(),
            height: config.height.to_css(),
        }
    }
}

/// Short label for a well-formed absolute URL: host without `www.`, plus
/// the path when it is not the root. Falls back to the input unchanged.
pub fn display_label(url: &str) -> String {
    let Ok(parsed) = url::Url::parse(url) else {
        return url.to_string();
    };
    let Some(host) = parsed.host_str() else {
        return url.to_string();
    };

    let host = host.strip_prefix("www.").unwrap_or(host);
    let mut label = match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };

    let path = parsed.path().trim_end_matches('/');
    if !path.is_empty() {
        label.push_str(path);
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidgetConfig;
    use crate::sandbox::{LoadCompletion, LoadToken};
    use vista_common::{AccessDenied, Dimension};

    struct StaticSandbox(usize);

    impl NavigationSandbox for StaticSandbox {
        fn load(&mut self, _url: &str, _token: LoadToken) -> Result<(), AccessDenied> {
            Ok(())
        }
        fn step_back(&mut self) -> Result<(), AccessDenied> {
            Ok(())
        }
        fn step_forward(&mut self) -> Result<(), AccessDenied> {
            Ok(())
        }
        fn reload_current(&mut self, _token: LoadToken) -> Result<(), AccessDenied> {
            Ok(())
        }
        fn query_history_length(&self) -> Result<usize, AccessDenied> {
            Ok(self.0)
        }
    }

    struct NoHost;

    impl HostEnvironment for NoHost {
        fn open_in_new_context(&self, _url: &str) {}
    }

    fn urls() -> Vec<String> {
        vec![
            "https://www.a.test/".into(),
            "https://b.test:8443/docs/".into(),
        ]
    }

    #[test]
    fn labels_strip_www_and_root_path() {
        assert_eq!(display_label("https://www.a.test/"), "a.test");
        assert_eq!(display_label("https://b.test:8443/docs/"), "b.test:8443/docs");
        assert_eq!(display_label("http://c.test/x/y?q=1#f"), "c.test/x/y");
    }

    #[test]
    fn labels_fall_back_to_input() {
        assert_eq!(display_label("not a url"), "not a url");
        assert_eq!(display_label("about:blank"), "about:blank");
    }

    #[test]
    fn view_reflects_loading_mount() {
        let config = WidgetConfig::new(urls(), None).unwrap();
        let widget = EmbeddedBrowserWidget::mount(config, StaticSandbox(1), NoHost);
        let view = ChromeView::of(&widget);

        assert_eq!(view.url, "https://www.a.test/");
        assert!(view.loading);
        assert!(!view.back_enabled);
        assert!(!view.forward_enabled);
        assert_eq!(view.width, "100%");
        assert_eq!(view.tabs.len(), 2);
        assert!(view.tabs[0].active);
        assert!(!view.tabs[1].active);
        assert_eq!(view.tabs[1].label, "b.test:8443/docs");
    }

    #[test]
    fn view_tracks_selection_and_history() {
        let config = WidgetConfig::new(urls(), None)
            .unwrap()
            .with_dimensions(Dimension::Percent(100.0), Dimension::Pixels(384.0));
        let mut widget = EmbeddedBrowserWidget::mount(config, StaticSandbox(2), NoHost);
        widget.select_url("https://b.test:8443/docs/");
        let token = widget.latest_token();
        widget.on_sandbox_load_complete(LoadCompletion::Requested(token));

        let view = ChromeView::of(&widget);
        assert!(!view.loading);
        assert!(view.back_enabled);
        assert!(view.tabs[1].active);
        assert_eq!(view.height, "384px");
    }

    #[test]
    fn hidden_selector_has_no_tabs() {
        let config = WidgetConfig::new(urls(), None)
            .unwrap()
            .with_url_selector(false);
        let widget = EmbeddedBrowserWidget::mount(config, StaticSandbox(1), NoHost);
        assert!(ChromeView::of(&widget).tabs.is_empty());
    }

    #[test]
    fn view_serializes_for_ipc() {
        let config = WidgetConfig::new(urls(), None).unwrap();
        let widget = EmbeddedBrowserWidget::mount(config, StaticSandbox(1), NoHost);
        let json = serde_json::to_value(ChromeView::of(&widget)).unwrap();
        assert_eq!(json["loading"], true);
        assert_eq!(json["tabs"][0]["label"], "a.test");
    }
}
