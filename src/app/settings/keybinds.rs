// Centralised keybind predicates for the login screen.
//
// Handlers ask `is_quit(&code)` rather than matching raw `KeyCode`s so the
// bindings can be overridden from `settings.toml`.

use crate::app::settings::runtime_keybinds;
use crate::input::KeyCode;

fn is_bound(action: &str, code: &KeyCode) -> bool {
	runtime_keybinds::get().is_bound(action, code)
}

pub fn is_quit(code: &KeyCode) -> bool {
	is_bound("quit", code)
}

pub fn is_next_field(code: &KeyCode) -> bool {
	is_bound("next_field", code)
}

pub fn is_prev_field(code: &KeyCode) -> bool {
	is_bound("prev_field", code)
}

pub fn is_toggle_visibility(code: &KeyCode) -> bool {
	is_bound("toggle_visibility", code)
}

pub fn is_switch_style(code: &KeyCode) -> bool {
	is_bound("switch_style", code)
}

pub fn is_enter(code: &KeyCode) -> bool {
	is_bound("enter", code)
}

pub fn is_backspace(code: &KeyCode) -> bool {
	is_bound("backspace", code)
}
