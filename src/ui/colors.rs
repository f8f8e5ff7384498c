use once_cell::sync::Lazy;
use ratatui::style::{Color, Modifier, Style};
use std::sync::RwLock;

use super::themes::{LoginColors, Theme, LINK_BLUE, MUTED_GRAY, PASSWORD_GRAY};

/// Concrete styles for every element of the login screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Colors {
	pub base_style: Style,
	pub field_style: Style,
	pub field_border_style: Style,
	pub field_focused_border_style: Style,
	pub placeholder_style: Style,
	pub identifier_style: Style,
	pub password_style: Style,
	pub toggle_style: Style,
	pub link_style: Style,
	pub muted_style: Style,
	pub button_style: Style,
	pub button_disabled_style: Style,
	pub focus_style: Style,
}

impl Colors {
	/// Derive runtime styles from a theme, applying `[login]` overrides.
	pub fn from_theme(theme: &Theme) -> Self {
		let login = theme.login.clone().unwrap_or_default();
		let LoginColors { link_fg, muted_fg, button_bg, field_bg, password_fg } = login;

		let link = link_fg.unwrap_or(LINK_BLUE);
		let muted = muted_fg.unwrap_or(MUTED_GRAY);
		let button_bg = button_bg.unwrap_or(Color::Blue);
		let field_bg = field_bg.unwrap_or(Color::Rgb(0x1C, 0x1D, 0x1F));
		let password_fg = password_fg.unwrap_or(PASSWORD_GRAY);

		Colors {
			base_style: Style::default().fg(theme.fg).bg(theme.bg),
			field_style: Style::default().fg(theme.fg).bg(field_bg),
			field_border_style: Style::default().fg(muted),
			field_focused_border_style: Style::default().fg(theme.accent),
			placeholder_style: Style::default().fg(Color::Gray),
			identifier_style: Style::default().fg(theme.fg),
			password_style: Style::default().fg(password_fg),
			toggle_style: Style::default().fg(muted),
			link_style: Style::default().fg(link).add_modifier(Modifier::BOLD),
			muted_style: Style::default().fg(muted),
			button_style: Style::default().fg(Color::White).bg(button_bg),
			button_disabled_style: Style::default().fg(muted).bg(field_bg),
			focus_style: Style::default().fg(theme.accent).add_modifier(Modifier::REVERSED),
		}
	}
}

static CURRENT: Lazy<RwLock<Colors>> = Lazy::new(|| RwLock::new(Colors::from_theme(&Theme::dark())));

/// Derive concrete runtime Styles from the provided Theme and store them.
pub fn set_from_theme(theme: &Theme) {
	let mut g = CURRENT.write().unwrap_or_else(|poisoned| poisoned.into_inner());
	*g = Colors::from_theme(theme);
}

pub fn current() -> Colors {
	CURRENT.read().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn login_overrides_win_over_brand_defaults() {
		let mut theme = Theme::dark();
		theme.login = Some(LoginColors { link_fg: Some(Color::Red), ..LoginColors::default() });
		let c = Colors::from_theme(&theme);
		assert_eq!(c.link_style.fg, Some(Color::Red));
		assert_eq!(c.password_style.fg, Some(PASSWORD_GRAY));
	}

	#[test]
	fn disabled_button_differs_from_enabled() {
		let c = Colors::from_theme(&Theme::dark());
		assert_ne!(c.button_style, c.button_disabled_style);
	}
}
