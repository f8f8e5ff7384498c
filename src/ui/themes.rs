use ratatui::style::Color;
use serde::Deserialize;
use std::path::Path;

use crate::errors::SettingsError;

/// Base palette plus optional login-screen colour overrides.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub login: Option<LoginColors>,
}

/// Overrides read from the `[login]` table of a theme file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginColors {
    pub link_fg: Option<Color>,
    pub muted_fg: Option<Color>,
    pub button_bg: Option<Color>,
    pub field_bg: Option<Color>,
    pub password_fg: Option<Color>,
}

#[derive(Deserialize)]
struct Pal {
    bg: String,
    fg: String,
    accent: String,
}

#[derive(Deserialize, Default)]
struct LoginPal {
    link_fg: Option<String>,
    muted_fg: Option<String>,
    button_bg: Option<String>,
    field_bg: Option<String>,
    password_fg: Option<String>,
}

// Brand colours of the login screen.
pub const LINK_BLUE: Color = Color::Rgb(0x4E, 0xA8, 0xE9);
pub const MUTED_GRAY: Color = Color::Rgb(0xB5, 0xB5, 0xB5);
pub const PASSWORD_GRAY: Color = Color::Rgb(0xB2, 0xB2, 0xB2);

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(11, 12, 13),
            fg: Color::Gray,
            accent: LINK_BLUE,
            login: None,
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Blue,
            login: Some(LoginColors {
                field_bg: Some(Color::Rgb(0xF0, 0xF0, 0xF0)),
                password_fg: Some(Color::DarkGray),
                ..LoginColors::default()
            }),
        }
    }

    /// Parse a palette file. Colours must be `#rrggbb`; anything else is a
    /// `SettingsError::Theme` naming the offending value.
    pub fn from_toml(s: &str) -> Result<Self, SettingsError> {
        let bad_toml = |e: toml::de::Error| SettingsError::Theme(format!("invalid theme TOML: {}", e));
        let v: toml::Value = toml::from_str(s).map_err(bad_toml)?;
        let mut theme = match v.get("palette") {
            Some(p) => {
                let p: Pal = p.clone().try_into().map_err(bad_toml)?;
                Self {
                    bg: parse_hex(&p.bg)?,
                    fg: parse_hex(&p.fg)?,
                    accent: parse_hex(&p.accent)?,
                    login: None,
                }
            }
            None => Self::dark(),
        };
        if let Some(l) = v.get("login") {
            let l: LoginPal = l.clone().try_into().map_err(bad_toml)?;
            let hex = |o: Option<String>| o.as_deref().map(parse_hex).transpose();
            theme.login = Some(LoginColors {
                link_fg: hex(l.link_fg)?,
                muted_fg: hex(l.muted_fg)?,
                button_bg: hex(l.button_bg)?,
                field_bg: hex(l.field_bg)?,
                password_fg: hex(l.password_fg)?,
            });
        }
        Ok(theme)
    }

    /// Resolve the `theme` setting: a built-in name or a path to a TOML file.
    pub fn load(name: &str) -> Result<Self, SettingsError> {
        match name {
            "dark" => Ok(Self::dark()),
            "light" => Ok(Self::light()),
            path => {
                let path = Path::new(path);
                if !path.is_file() {
                    return Err(SettingsError::Theme(format!("no built-in theme or file named `{}`", name)));
                }
                let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_toml(&text).map_err(|e| match e {
                    SettingsError::Theme(msg) => SettingsError::Theme(format!("{}: {}", path.display(), msg)),
                    other => other,
                })
            }
        }
    }
}

/// `#rrggbb` (leading `#` optional) to an RGB colour.
fn parse_hex(s: &str) -> Result<Color, SettingsError> {
    let digits = s.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|h| u8::from_str_radix(h, 16).ok())
    };
    match (digits.len(), channel(0..2), channel(2..4), channel(4..6)) {
        (6, Some(r), Some(g), Some(b)) => Ok(Color::Rgb(r, g, b)),
        _ => Err(SettingsError::Theme(format!("invalid colour `{}`, expected #rrggbb", s))),
    }
}
