use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("opener error: {0}")]
    OpenerError(String),
}

/// The sandbox refused a same-origin-restricted operation.
///
/// Raised when the embedded browsing context holds content whose origin
/// differs from the host's, or whose history cannot otherwise be reached.
/// Callers swallow it and keep their last known navigation state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("sandbox access denied: {reason}")]
pub struct AccessDenied {
    pub reason: String,
}

impl AccessDenied {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Denial caused by the loaded content's origin differing from the host's.
    pub fn cross_origin() -> Self {
        Self::new("cross-origin content")
    }
}

/// Fatal startup failures of the `vista` binary.
#[derive(Debug, thiserror::Error)]
pub enum VistaError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("window error: {0}")]
    Window(String),
}
