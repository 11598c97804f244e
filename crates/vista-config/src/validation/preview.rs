//! Preview target validation: URL list shape and dimensions.

use std::collections::HashSet;

use crate::schema::VistaConfig;

use super::helpers::validate_dimension;

/// Whether `candidate` is an absolute `http`/`https` URL with a host.
pub fn is_web_url(candidate: &str) -> bool {
    url::Url::parse(candidate)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
        .unwrap_or(false)
}

pub(crate) fn validate_preview(errors: &mut Vec<String>, config: &VistaConfig) {
    let preview = &config.preview;

    if preview.urls.is_empty() {
        errors.push("preview.urls must not be empty".into());
    }

    let mut seen = HashSet::new();
    for (i, url) in preview.urls.iter().enumerate() {
        if !is_web_url(url) {
            errors.push(format!("preview.urls[{i}] = '{url}' is not an absolute http(s) URL"));
        }
        if !seen.insert(url.as_str()) {
            errors.push(format!("preview.urls[{i}] = '{url}' is listed twice"));
        }
    }

    if let Some(default) = &preview.default_url {
        if !is_web_url(default) {
            errors.push(format!(
                "preview.default_url = '{default}' is not an absolute http(s) URL"
            ));
        }
    }

    validate_dimension(errors, "preview.width", &preview.width);
    validate_dimension(errors, "preview.height", &preview.height);
}
