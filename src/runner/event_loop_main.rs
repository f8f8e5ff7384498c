use crate::app::App;
use crate::input::{poll, read_event, InputEvent};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal, Tui};
use crate::ui;

use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the login screen until the user closes it.
///
/// The terminal is restored even when drawing or input handling fails; the
/// first error is returned afterwards.
pub fn run_app(mut app: App) -> anyhow::Result<App> {
    let mut terminal = init_terminal()?;
    tracing::info!(style = %app.style, "login screen opened");

    let result = event_loop(&mut terminal, &mut app);

    restore_terminal(terminal)?;
    tracing::info!("login screen closed");
    result.map(|_| app)
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        if poll(POLL_INTERVAL)? {
            match read_event()? {
                InputEvent::Key(key) => {
                    if handlers::handle_key(app, key)? {
                        return Ok(());
                    }
                }
                InputEvent::Resize(w, h) => {
                    tracing::trace!(w, h, "terminal resized");
                }
                InputEvent::Other => {}
            }
        }
    }
}
