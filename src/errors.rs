use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading settings, keybinds or themes.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in `{}`: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A keybind names a key this application does not know.
    #[error("unknown key name `{0}`")]
    UnknownKey(String),

    /// A keybind targets an action this application does not have.
    #[error("unknown keybind action `{0}`")]
    UnknownAction(String),

    #[error("theme error: {0}")]
    Theme(String),
}

/// Render a settings error as a short single-line message for the status line.
pub fn render_settings_error(err: &SettingsError) -> String {
    match err {
        SettingsError::Io { path, .. } => format!("Could not read {}", path.display()),
        SettingsError::Parse { path, .. } => format!("Invalid settings file {}", path.display()),
        other => other.to_string(),
    }
}
