use serde::{Deserialize, Serialize};
use std::fmt;

/// Interactive element that currently receives key presses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    /// The close glyph in the header.
    Close,
    Identifier,
    Password,
    /// Show/hide control next to the password (filled style only).
    VisibilityToggle,
    Login,
}

impl Focus {
    /// True for the two text inputs.
    pub fn is_text_field(self) -> bool {
        matches!(self, Focus::Identifier | Focus::Password)
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Focus::Close => "close",
            Focus::Identifier => "identifier",
            Focus::Password => "password",
            Focus::VisibilityToggle => "visibility toggle",
            Focus::Login => "log in",
        };
        write!(f, "{}", s)
    }
}

/// Visual variant of the text fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FieldStyle {
    /// Background-filled fields with a password visibility toggle.
    #[default]
    Filled,
    /// Bordered fields without the toggle.
    Outlined,
}

impl FieldStyle {
    pub fn has_visibility_toggle(self) -> bool {
        self == FieldStyle::Filled
    }

    /// The other variant.
    pub fn switched(self) -> Self {
        match self {
            FieldStyle::Filled => FieldStyle::Outlined,
            FieldStyle::Outlined => FieldStyle::Filled,
        }
    }
}

impl fmt::Display for FieldStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldStyle::Filled => write!(f, "filled"),
            FieldStyle::Outlined => write!(f, "outlined"),
        }
    }
}
