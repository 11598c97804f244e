use clap::{Parser, ValueEnum};

use vista_common::Dimension;
use vista_config::{ChromeTheme, VistaConfig};

/// Vista: preview websites in an embedded browser window.
#[derive(Parser, Debug)]
#[command(name = "vista", version, about)]
pub struct Args {
    /// Candidate URLs to preview. Replaces the configured list.
    pub urls: Vec<String>,

    /// URL to show first. Must be one of the candidates to take effect.
    #[arg(long)]
    pub default_url: Option<String>,

    /// Hide the URL selector row.
    #[arg(long)]
    pub no_selector: bool,

    /// Content width: pixels (`480`, `480px`) or percent (`100%`).
    #[arg(long)]
    pub width: Option<Dimension>,

    /// Content height: pixels (`480`, `480px`) or percent (`100%`).
    #[arg(long)]
    pub height: Option<Dimension>,

    /// Chrome theme.
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter override (e.g. `debug`, `vista=trace`).
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Plain,
    Outlined,
    Midnight,
}

impl From<ThemeArg> for ChromeTheme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Plain => Self::Plain,
            ThemeArg::Outlined => Self::Outlined,
            ThemeArg::Midnight => Self::Midnight,
        }
    }
}

impl Args {
    /// Layer command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut VistaConfig) {
        if !self.urls.is_empty() {
            config.preview.urls = self.urls.clone();
        }
        if let Some(url) = &self.default_url {
            config.preview.default_url = Some(url.clone());
        }
        if self.no_selector {
            config.preview.show_url_selector = false;
        }
        if let Some(width) = self.width {
            config.preview.width = width;
        }
        if let Some(height) = self.height {
            config.preview.height = height;
        }
        if let Some(theme) = self.theme {
            config.chrome.theme = theme.into();
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
