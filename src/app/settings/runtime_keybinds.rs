//! Keybind table consulted by the predicates in `keybinds.rs`.
//!
//! Defaults are built in; `settings.toml` may replace the keys bound to any
//! action. The table is installed once at start-up and read on every key.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard};

use once_cell::sync::Lazy;

use crate::errors::SettingsError;
use crate::input::KeyCode;

/// Action names understood by the keybind table.
pub const ACTIONS: &[&str] = &[
    "quit",
    "next_field",
    "prev_field",
    "toggle_visibility",
    "switch_style",
    "enter",
    "backspace",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keybinds {
    map: HashMap<&'static str, Vec<KeyCode>>,
}

impl Default for Keybinds {
    fn default() -> Self {
        let mut map = HashMap::new();
        map.insert("quit", vec![KeyCode::Esc]);
        map.insert("next_field", vec![KeyCode::Tab, KeyCode::Down]);
        map.insert("prev_field", vec![KeyCode::BackTab, KeyCode::Up]);
        map.insert("toggle_visibility", vec![KeyCode::F(2)]);
        map.insert("switch_style", vec![KeyCode::F(3)]);
        map.insert("enter", vec![KeyCode::Enter]);
        map.insert("backspace", vec![KeyCode::Backspace]);
        Keybinds { map }
    }
}

impl Keybinds {
    /// Defaults with the given per-action overrides applied. An override
    /// replaces the default keys for that action entirely.
    pub fn from_overrides(overrides: &BTreeMap<String, Vec<String>>) -> Result<Self, SettingsError> {
        let mut kb = Keybinds::default();
        for (action, names) in overrides {
            let action = ACTIONS
                .iter()
                .copied()
                .find(|a| *a == action.as_str())
                .ok_or_else(|| SettingsError::UnknownAction(action.clone()))?;
            let codes = names
                .iter()
                .map(|n| parse_key(n))
                .collect::<Result<Vec<_>, _>>()?;
            kb.map.insert(action, codes);
        }
        Ok(kb)
    }

    pub fn is_bound(&self, action: &str, code: &KeyCode) -> bool {
        self.map.get(action).is_some_and(|codes| codes.contains(code))
    }
}

/// Parse a key name such as `esc`, `tab`, `f2` or a single character.
pub fn parse_key(name: &str) -> Result<KeyCode, SettingsError> {
    let lower = name.trim().to_ascii_lowercase();
    let code = match lower.as_str() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backtab" | "shift+tab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        other => {
            if let Some(n) = other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                if (1..=12).contains(&n) {
                    return Ok(KeyCode::F(n));
                }
            }
            let mut chars = name.trim().chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(SettingsError::UnknownKey(name.to_string())),
            }
        }
    };
    Ok(code)
}

static CURRENT: Lazy<RwLock<Keybinds>> = Lazy::new(|| RwLock::new(Keybinds::default()));

/// Read access to the installed keybinds.
pub fn get() -> RwLockReadGuard<'static, Keybinds> {
    CURRENT.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Replace the installed keybinds.
pub fn install(keybinds: Keybinds) {
    let mut g = CURRENT.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *g = keybinds;
}
