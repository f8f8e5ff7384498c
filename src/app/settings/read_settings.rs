use std::fs;
use std::io;
use std::path::Path;

use super::config_dirs::default_settings_path;
use super::Settings;
use crate::errors::SettingsError;

/// Parse settings from TOML text. `origin` is only used in error messages.
pub fn parse_settings(text: &str, origin: &Path) -> Result<Settings, SettingsError> {
    toml::from_str(text).map_err(|source| SettingsError::Parse {
        path: origin.to_path_buf(),
        source,
    })
}

/// Load settings from `path`. A missing file yields the defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    match fs::read_to_string(path) {
        Ok(text) => {
            let settings = parse_settings(&text, path)?;
            tracing::debug!(path = %path.display(), "settings loaded");
            Ok(settings)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Settings::default())
        }
        Err(source) => Err(SettingsError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load settings from the platform config directory.
pub fn load_settings() -> Result<Settings, SettingsError> {
    match default_settings_path() {
        Some(path) => load_settings_from(&path),
        None => Ok(Settings::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::types::FieldStyle;
    use std::path::PathBuf;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let s = parse_settings("field_style = \"outlined\"", &PathBuf::from("x.toml")).unwrap();
        assert_eq!(s.field_style, FieldStyle::Outlined);
        assert_eq!(s.theme, "dark");
        assert_eq!(s.social_name, "Dave Johnson");
    }

    #[test]
    fn bad_style_is_a_parse_error() {
        let err = parse_settings("field_style = \"dotted\"", &PathBuf::from("x.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let s = load_settings_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(s, Settings::default());
    }
}
