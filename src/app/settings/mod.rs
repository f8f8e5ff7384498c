pub mod config_dirs;
pub mod keybinds;
pub mod read_settings;
pub mod runtime_keybinds;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::app::types::FieldStyle;

// Re-export commonly used types/functions for convenience
pub use config_dirs::{default_settings_path, project_config_dir, user_cache_dir};
pub use keybinds::*;
pub use read_settings::{load_settings, load_settings_from, parse_settings};

/// User preferences read from `settings.toml`.
///
/// Every field has a default so a partial (or missing) file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Filled fields with a visibility toggle, or outlined fields without.
    pub field_style: FieldStyle,
    /// `dark`, `light`, or a path to a palette TOML file.
    pub theme: String,
    /// Name shown in the "Continue as ..." social login line.
    pub social_name: String,
    /// Keybind overrides: action name to list of key names.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub keybinds: BTreeMap<String, Vec<String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            field_style: FieldStyle::Filled,
            theme: "dark".to_string(),
            social_name: "Dave Johnson".to_string(),
            keybinds: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Serialize back to TOML, as printed by `--dump-config`.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
