mod app_state;
mod cli;

use std::path::Path;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use vista_common::{ConfigError, VistaError};
use vista_config::VistaConfig;
use vista_nav::WidgetConfig;

const DEFAULT_LOG_DIRECTIVE: &str = "vista=info";

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = vista_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- Vista crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("---------------------\n");

        default_hook(info);
    }));
}

/// Read the config file named on the command line, or the default one.
fn read_config(path: Option<&str>) -> Result<VistaConfig, ConfigError> {
    match path {
        Some(path) => vista_config::load_config_from(Path::new(path)),
        None => vista_config::load_config(),
    }
}

fn init_logging(directive: &str) {
    let filter = EnvFilter::from_default_env().add_directive(
        directive
            .parse()
            .unwrap_or_else(|_| Directive::from(tracing::Level::INFO)),
    );
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Logging starts after the config is read so its level can apply;
    // a load failure is reported once the subscriber is up.
    let loaded = read_config(args.config.as_deref());
    let config_level = loaded
        .as_ref()
        .map(|c| c.logging.level.directive())
        .unwrap_or(DEFAULT_LOG_DIRECTIVE);
    init_logging(args.log_level.as_deref().unwrap_or(config_level));

    tracing::info!("Vista v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }

    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        VistaConfig::default()
    });
    args.apply(&mut config);

    if let Err(e) = run(config) {
        tracing::error!("{e}");
        std::process::exit(exit_code(&e));
    }
    tracing::info!("Shutdown complete");
}

/// Validate the merged settings and drive the window until it closes.
fn run(config: VistaConfig) -> Result<(), VistaError> {
    vista_config::validation::validate(&config)?;
    let widget_config = WidgetConfig::from_config(&config)?;
    tracing::info!(
        urls = widget_config.urls().len(),
        initial = widget_config.initial_url(),
        theme = config.chrome.theme.as_str(),
        "Preview configured"
    );

    if let Err(e) = vista_platform::paths::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let event_loop = EventLoop::new()
        .map_err(|e| VistaError::Window(format!("failed to create event loop: {e}")))?;
    let mut app = app_state::VistaApp::new(config, widget_config);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| VistaError::Window(format!("event loop error: {e}")))?;
    app.finish()
}

/// Settings problems are usage errors; everything else is a runtime failure.
fn exit_code(err: &VistaError) -> i32 {
    match err {
        VistaError::Config(_) => 2,
        VistaError::WebView(_) | VistaError::Window(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_settings_exit_with_usage_code() {
        let mut config = VistaConfig::default();
        config.preview.urls = vec!["ftp://a.test/".into()];

        let err = run(config).unwrap_err();
        assert!(matches!(err, VistaError::Config(ConfigError::ValidationError(_))));
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn window_failures_exit_with_runtime_code() {
        assert_eq!(exit_code(&VistaError::Window("no display".into())), 1);
        assert_eq!(exit_code(&VistaError::WebView("build failed".into())), 1);
    }
}
