use crate::app::settings::keybinds;
use crate::app::App;
use crate::input::{is_printable_key, KeyCode, KeyEvent};

/// Keys while the identifier or password field has focus.
pub fn handle_text_field(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    if keybinds::is_enter(&key.code) {
        return Ok(app.activate());
    }
    if keybinds::is_backspace(&key.code) {
        app.delete_char();
    } else if is_printable_key(&key) {
        if let KeyCode::Char(c) = key.code {
            app.insert_char(c);
        }
    }
    Ok(false)
}
