use super::form::LoginForm;
use super::settings::Settings;
use super::types::{FieldStyle, Focus};

/// Screen-level state: the form controller plus which element has focus.
///
/// Holds no terminal or rendering handles so handlers and tests can drive it
/// directly. The UI reads it on every frame.
pub struct App {
    pub form: LoginForm,
    pub focus: Focus,
    pub style: FieldStyle,
    pub settings: Settings,
    /// One-line message shown in place of the key help, e.g. a settings
    /// problem found at start-up.
    pub status: Option<String>,
}

// submodules live in `src/app/core/`
mod editing;
mod navigation;

impl App {
    /// Fresh screen with an empty form and a no-op login action.
    pub fn new(settings: Settings) -> Self {
        Self::with_form(LoginForm::new(), settings)
    }

    /// Build the screen around an existing form, e.g. one carrying a real
    /// submit handler.
    pub fn with_form(form: LoginForm, settings: Settings) -> Self {
        App {
            form,
            focus: Focus::Identifier,
            style: settings.field_style,
            settings,
            status: None,
        }
    }

    /// Interactive elements in Tab order for the current field style.
    pub fn focus_ring(&self) -> &'static [Focus] {
        const FILLED: &[Focus] = &[
            Focus::Close,
            Focus::Identifier,
            Focus::Password,
            Focus::VisibilityToggle,
            Focus::Login,
        ];
        const OUTLINED: &[Focus] = &[
            Focus::Close,
            Focus::Identifier,
            Focus::Password,
            Focus::Login,
        ];
        if self.style.has_visibility_toggle() {
            FILLED
        } else {
            OUTLINED
        }
    }

    pub fn is_focused(&self, focus: Focus) -> bool {
        self.focus == focus
    }

    /// Switch field style for this session (bound to F3). Focus on the
    /// toggle moves back to the password field when the new style has none.
    pub fn set_style(&mut self, style: FieldStyle) {
        self.style = style;
        if !self.focus_ring().contains(&self.focus) {
            self.focus = Focus::Password;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new(Settings::default())
    }
}
