//! Tests for the full validation pipeline.

use super::*;
use vista_common::Dimension;

#[test]
fn default_config_validates() {
    assert!(validate(&VistaConfig::default()).is_ok());
}

#[test]
fn catches_empty_url_list() {
    let mut config = VistaConfig::default();
    config.preview.urls.clear();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("preview.urls must not be empty"));
}

#[test]
fn catches_relative_url() {
    let mut config = VistaConfig::default();
    config.preview.urls.push("/relative".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("preview.urls[1]"));
}

#[test]
fn catches_duplicate_url() {
    let mut config = VistaConfig::default();
    config.preview.urls = vec!["https://a.test/".into(), "https://a.test/".into()];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("listed twice"));
}

#[test]
fn default_url_outside_list_is_allowed() {
    let mut config = VistaConfig::default();
    config.preview.default_url = Some("https://elsewhere.test/".into());
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_malformed_default_url() {
    let mut config = VistaConfig::default();
    config.preview.default_url = Some("not a url".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("preview.default_url"));
}

#[test]
fn catches_bad_dimensions() {
    let mut config = VistaConfig::default();
    config.preview.width = Dimension::Percent(150.0);
    config.preview.height = Dimension::Pixels(0.0);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("preview.width"));
    assert!(err.contains("preview.height"));
}

#[test]
fn catches_toolbar_height_out_of_range() {
    let mut config = VistaConfig::default();
    config.chrome.toolbar_height = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chrome.toolbar_height"));
}

#[test]
fn catches_window_too_small() {
    let mut config = VistaConfig::default();
    config.window.width = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = VistaConfig::default();
    config.preview.urls.clear();
    config.window.height = 10;
    config.chrome.selector_height = 200;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("preview.urls"));
    assert!(err.contains("window.height"));
    assert!(err.contains("chrome.selector_height"));
}
