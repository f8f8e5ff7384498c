use crate::app::settings::keybinds;
use crate::app::App;
use crate::input::{KeyCode, KeyEvent};

/// Keys while the close glyph, the visibility toggle or the login button has
/// focus. Enter and Space press the element.
pub fn handle_button(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    if keybinds::is_enter(&key.code) || key.code == KeyCode::Char(' ') {
        return Ok(app.activate());
    }
    Ok(false)
}
