//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod layout;
mod preview;

#[cfg(test)]
mod tests;

pub use preview::is_web_url;

use crate::schema::VistaConfig;
use vista_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &VistaConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    preview::validate_preview(&mut errors, config);
    layout::validate_chrome(&mut errors, config);
    layout::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
