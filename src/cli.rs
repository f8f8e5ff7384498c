use clap::Parser;
use std::path::PathBuf;

use crate::app::settings::{self, Settings};
use crate::app::types::FieldStyle;
use crate::errors::SettingsError;
use crate::logging;

/// Terminal login screen.
#[derive(Parser, Debug, Default)]
#[command(name = "insta-login", version, about = "A terminal login screen")]
pub struct Cli {
    /// Settings file (defaults to the platform config directory).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Theme: `dark`, `light` or a path to a palette TOML file.
    #[arg(long, value_name = "NAME|PATH")]
    pub theme: Option<String>,

    /// Text field style.
    #[arg(long, value_enum)]
    pub style: Option<FieldStyle>,

    /// Log filter, e.g. `debug` or `insta_login=trace` (overrides RUST_LOG).
    #[arg(long, value_name = "FILTER", value_parser = logging::parse_log_filter)]
    pub log_level: Option<String>,

    /// Print the effective settings as TOML and exit.
    #[arg(long)]
    pub dump_config: bool,
}

impl Cli {
    /// Read the settings file named on the command line (or the default one).
    pub fn load_settings(&self) -> Result<Settings, SettingsError> {
        match &self.config {
            Some(path) => settings::load_settings_from(path),
            None => settings::load_settings(),
        }
    }

    /// Command-line flags take precedence over the file.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(style) = self.style {
            settings.field_style = style;
        }
        if let Some(theme) = &self.theme {
            settings.theme = theme.clone();
        }
    }
}
