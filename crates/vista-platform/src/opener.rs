//! Opening URLs in the user's default browser.

use std::process::{Command, Stdio};

use tracing::{info, warn};
use url::Url;
use vista_common::PlatformError;
use vista_nav::HostEnvironment;

/// Opens URLs with the platform's default handler.
///
/// - macOS: `open <url>`
/// - Windows: `rundll32 url.dll,FileProtocolHandler <url>`
/// - Other Unix: `xdg-open <url>`
///
/// No shell sits between us and the handler, so the URL reaches it as one
/// argument. The child process is spawned and never waited on.
#[derive(Debug, Clone, Default)]
pub struct SystemOpener;

impl SystemOpener {
    pub fn new() -> Self {
        Self
    }

    /// Spawn the opener for `url`.
    pub fn open(&self, url: &str) -> Result<(), PlatformError> {
        let Some(target) = openable_url(url) else {
            return Err(PlatformError::OpenerError(format!(
                "refusing to open non-web URL '{url}'"
            )));
        };

        let mut command = opener_command(target.as_str());
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        command
            .spawn()
            .map(|_child| ())
            .map_err(|e| PlatformError::OpenerError(format!("failed to spawn opener: {e}")))
    }
}

impl HostEnvironment for SystemOpener {
    fn open_in_new_context(&self, url: &str) {
        match self.open(url) {
            Ok(()) => info!(url, "opened in default browser"),
            Err(e) => warn!(url, error = %e, "could not open URL externally"),
        }
    }
}

/// Parse `url` and accept it only as an `http(s)` URL with a host.
///
/// The opener receives the parsed URL's serialization, never the raw input.
fn openable_url(url: &str) -> Option<Url> {
    let parsed = Url::parse(url).ok()?;
    (matches!(parsed.scheme(), "http" | "https") && parsed.has_host()).then_some(parsed)
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("rundll32");
    command.args(["url.dll,FileProtocolHandler", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}
