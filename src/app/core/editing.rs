use super::*;
use unicode_segmentation::UnicodeSegmentation;

impl App {
    /// Append `c` to the focused text field. No-op on buttons.
    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            Focus::Identifier => {
                let mut value = self.form.identifier().to_string();
                value.push(c);
                self.form.set_identifier(value);
            }
            Focus::Password => {
                let mut value = self.form.password().to_string();
                value.push(c);
                self.form.set_password(value);
            }
            _ => {}
        }
    }

    /// Remove the last grapheme of the focused text field.
    pub fn delete_char(&mut self) {
        match self.focus {
            Focus::Identifier => {
                let value = pop_grapheme(self.form.identifier());
                self.form.set_identifier(value);
            }
            Focus::Password => {
                let value = pop_grapheme(self.form.password());
                self.form.set_password(value);
            }
            _ => {}
        }
    }

    /// Press Enter on the focused element.
    ///
    /// Returns `true` when the screen should close.
    pub fn activate(&mut self) -> bool {
        match self.focus {
            Focus::Close => {
                tracing::info!("close requested");
                return true;
            }
            Focus::Identifier => self.focus = Focus::Password,
            Focus::Password | Focus::Login => self.form.submit(),
            Focus::VisibilityToggle => self.form.toggle_visibility(),
        }
        false
    }
}

fn pop_grapheme(s: &str) -> String {
    match s.grapheme_indices(true).next_back() {
        Some((idx, _)) => s[..idx].to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_goes_to_focused_field() {
        let mut app = App::default();
        for c in "dave".chars() {
            app.insert_char(c);
        }
        app.focus = Focus::Password;
        app.insert_char('s');
        assert_eq!(app.form.identifier(), "dave");
        assert_eq!(app.form.password(), "s");
    }

    #[test]
    fn typing_on_button_is_ignored() {
        let mut app = App::default();
        app.focus = Focus::Login;
        app.insert_char('x');
        app.delete_char();
        assert_eq!(app.form.identifier(), "");
        assert_eq!(app.form.password(), "");
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        assert_eq!(pop_grapheme("cafe\u{301}"), "caf");
        assert_eq!(pop_grapheme("a"), "");
        assert_eq!(pop_grapheme(""), "");
    }

    #[test]
    fn enter_on_identifier_moves_to_password() {
        let mut app = App::default();
        assert!(!app.activate());
        assert_eq!(app.focus, Focus::Password);
    }

    #[test]
    fn enter_on_toggle_flips_visibility() {
        let mut app = App::default();
        app.focus = Focus::VisibilityToggle;
        app.activate();
        assert!(app.form.password_visible());
    }

    #[test]
    fn enter_on_close_requests_exit() {
        let mut app = App::default();
        app.focus = Focus::Close;
        assert!(app.activate());
    }
}
