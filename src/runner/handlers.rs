//! Key handling: screen-wide bindings first, then the focused element.

pub mod buttons;
pub mod text_field;

pub use buttons::handle_button;
pub use text_field::handle_text_field;

use crate::app::settings::keybinds;
use crate::app::App;
use crate::input::{is_ctrl_c, KeyEvent, KeyEventKind};

/// Top-level key handler. Returns `Ok(true)` when the screen should close.
pub fn handle_key(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    // Some terminals report releases as well; act on presses only.
    if key.kind == KeyEventKind::Release {
        return Ok(false);
    }
    let code = key.code;

    if is_ctrl_c(&key) || keybinds::is_quit(&code) {
        tracing::debug!("quit key pressed");
        return Ok(true);
    }
    if keybinds::is_next_field(&code) {
        app.focus_next();
        tracing::trace!(focus = %app.focus, "focus moved");
        return Ok(false);
    }
    if keybinds::is_prev_field(&code) {
        app.focus_prev();
        tracing::trace!(focus = %app.focus, "focus moved");
        return Ok(false);
    }
    // The toggle works from anywhere, but only where the style shows one.
    if keybinds::is_toggle_visibility(&code) {
        if app.style.has_visibility_toggle() {
            app.form.toggle_visibility();
        }
        return Ok(false);
    }

    if keybinds::is_switch_style(&code) {
        app.set_style(app.style.switched());
        tracing::debug!(style = %app.style, "field style switched");
        return Ok(false);
    }

    if app.focus.is_text_field() {
        handle_text_field(app, key)
    } else {
        handle_button(app, key)
    }
}
