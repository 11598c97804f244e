//! Chrome and window size validation.

use crate::schema::VistaConfig;

use super::helpers::validate_range;

pub(crate) fn validate_chrome(errors: &mut Vec<String>, config: &VistaConfig) {
    validate_range(
        errors,
        "chrome.toolbar_height",
        config.chrome.toolbar_height,
        32,
        96,
    );
    validate_range(
        errors,
        "chrome.selector_height",
        config.chrome.selector_height,
        24,
        64,
    );
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &VistaConfig) {
    validate_range(errors, "window.width", config.window.width, 320, 7680);
    validate_range(errors, "window.height", config.window.height, 240, 4320);
}
