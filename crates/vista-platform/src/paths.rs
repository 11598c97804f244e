use std::fs;
use std::path::PathBuf;

use vista_common::PlatformError;

const APP_NAME: &str = "vista";

/// Returns the platform-specific configuration directory for Vista.
///
/// - macOS: `~/Library/Application Support/vista`
/// - Linux: `$XDG_CONFIG_HOME/vista` (defaults to `~/.config/vista`)
/// - Windows: `%APPDATA%\vista`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))
}

/// Returns the platform-specific data directory for Vista.
///
/// - macOS: `~/Library/Application Support/vista`
/// - Linux: `$XDG_DATA_HOME/vista` (defaults to `~/.local/share/vista`)
/// - Windows: `%APPDATA%\vista`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    dirs::data_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))
}

/// Located at `data_dir()/logs`.
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// Located at `log_dir()/crash-reports`.
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}

/// Creates all Vista directories if they do not already exist.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    for dir in [config_dir()?, data_dir()?, log_dir()?, crash_report_dir()?] {
        fs::create_dir_all(&dir).map_err(|e| {
            PlatformError::PathError(format!("failed to create {}: {e}", dir.display()))
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_ends_with_vista() {
        if let Ok(path) = config_dir() {
            assert!(path.ends_with("vista"), "got: {path:?}");
        }
    }

    #[test]
    fn log_dir_is_inside_data_dir() {
        if let (Ok(log), Ok(data)) = (log_dir(), data_dir()) {
            assert!(log.starts_with(&data), "log={log:?}, data={data:?}");
            assert_eq!(log.file_name().unwrap().to_str().unwrap(), "logs");
        }
    }

    #[test]
    fn crash_report_dir_is_inside_log_dir() {
        if let (Ok(crash), Ok(log)) = (crash_report_dir(), log_dir()) {
            assert!(crash.starts_with(&log));
            assert!(crash.ends_with("crash-reports"));
        }
    }
}
