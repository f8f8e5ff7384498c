//! Turn command-line flags and the settings file into a ready `App`.
//!
//! Problems with the settings file, keybinds or theme never stop the screen
//! from opening: defaults are used and the problem is shown in the footer.

use crate::app::settings::runtime_keybinds::{self, Keybinds};
use crate::app::settings::Settings;
use crate::app::App;
use crate::cli::Cli;
use crate::errors::render_settings_error;
use crate::ui::{colors, Theme};

/// Effective settings for this run plus the first problem found, if any.
pub fn resolve_settings(cli: &Cli) -> (Settings, Option<String>) {
    let (mut settings, status) = match cli.load_settings() {
        Ok(s) => (s, None),
        Err(e) => {
            tracing::warn!(error = %e, "settings not loaded, using defaults");
            (Settings::default(), Some(render_settings_error(&e)))
        }
    };
    cli.apply_overrides(&mut settings);
    (settings, status)
}

/// Install keybinds and colours derived from `settings` into the runtime
/// tables. Returns a status message when either had to fall back.
pub fn install_runtime(settings: &Settings) -> Option<String> {
    let mut status = None;

    match Keybinds::from_overrides(&settings.keybinds) {
        Ok(kb) => runtime_keybinds::install(kb),
        Err(e) => {
            tracing::warn!(error = %e, "keybind overrides ignored");
            status = Some(render_settings_error(&e));
        }
    }

    match Theme::load(&settings.theme) {
        Ok(theme) => colors::set_from_theme(&theme),
        Err(e) => {
            tracing::warn!(error = %e, "theme not loaded, using dark");
            colors::set_from_theme(&Theme::dark());
            status.get_or_insert_with(|| render_settings_error(&e));
        }
    }

    status
}

/// Build the login screen for this run.
pub fn build_app(cli: &Cli) -> App {
    let (settings, load_status) = resolve_settings(cli);
    let runtime_status = install_runtime(&settings);
    let mut app = App::new(settings);
    app.status = load_status.or(runtime_status);
    app
}
