use insta_login::app::settings::Settings;
use insta_login::ui::{self, widgets, HIDE_LABEL, IDENTIFIER_PLACEHOLDER, PASSWORD_PLACEHOLDER, SHOW_LABEL};
use insta_login::{App, FieldStyle, Focus};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Draw `app` into an 80x30 buffer and return its rows as strings.
fn render_rows(app: &App) -> Vec<String> {
    let backend = TestBackend::new(80, 30);
    let mut term = Terminal::new(backend).unwrap();
    term.draw(|f| ui::ui(f, app)).unwrap();

    let buf = term.backend().buffer();
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            let mut row = String::new();
            for x in 0..area.width {
                if let Some(c) = buf.cell((x, y)) {
                    row.push_str(c.symbol());
                }
            }
            row
        })
        .collect()
}

fn screen(app: &App) -> String {
    render_rows(app).join("\n")
}

#[test]
fn empty_form_shows_placeholders_and_static_text() {
    let app = App::default();
    let s = screen(&app);
    assert!(s.contains(IDENTIFIER_PLACEHOLDER), "{s}");
    assert!(s.contains(PASSWORD_PLACEHOLDER), "{s}");
    assert!(s.contains(widgets::button::LOGIN_LABEL));
    assert!(s.contains("Forgot password?"));
    assert!(s.contains(" OR "));
    assert!(s.contains("Continue as Dave Johnson"));
    assert!(s.contains("Sign Up."));
    assert!(s.contains(widgets::header::CLOSE_GLYPH));
}

#[test]
fn password_is_masked_until_toggled() {
    let mut app = App::default();
    app.form.set_identifier("dave");
    app.form.set_password("secret");

    let s = screen(&app);
    assert!(s.contains("dave"));
    assert!(!s.contains("secret"));
    assert!(s.contains("\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"));
    assert!(s.contains(SHOW_LABEL));

    app.form.toggle_visibility();
    let s = screen(&app);
    assert!(s.contains("secret"));
    assert!(s.contains(HIDE_LABEL));
}

#[test]
fn outlined_style_draws_borders_and_no_toggle() {
    let settings = Settings { field_style: FieldStyle::Outlined, ..Settings::default() };
    let app = App::new(settings);
    let s = screen(&app);
    assert!(!s.contains(SHOW_LABEL));
    assert!(!s.contains(HIDE_LABEL));
    assert!(s.contains('\u{256D}'), "rounded border corner missing:\n{s}");
}

#[test]
fn social_name_comes_from_settings() {
    let settings = Settings { social_name: "Ada Lovelace".into(), ..Settings::default() };
    let s = screen(&App::new(settings));
    assert!(s.contains("Continue as Ada Lovelace"));
}

#[test]
fn status_replaces_help_line() {
    let mut app = App::default();
    assert!(screen(&app).contains("F2: show/hide"));
    app.status = Some("unknown key name `hyper`".into());
    let s = screen(&app);
    assert!(s.contains("unknown key name `hyper`"));
    assert!(!s.contains("F2: show/hide"));
}

#[test]
fn focused_login_button_is_marked() {
    let mut app = App::default();
    app.focus = Focus::Login;
    assert!(screen(&app).contains("\u{25B8} Log In \u{25C2}"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let app = App::default();
    let backend = TestBackend::new(10, 4);
    let mut term = Terminal::new(backend).unwrap();
    term.draw(|f| ui::ui(f, &app)).unwrap();
}

#[test]
fn focused_filled_field_is_highlighted() {
    use insta_login::ui::widgets::text_field::FOCUS_BAR;

    let mut app = App::default();
    assert_eq!(app.focus, Focus::Identifier);
    assert!(screen(&app).contains(FOCUS_BAR));

    app.focus = Focus::Close;
    assert!(!screen(&app).contains(FOCUS_BAR));
}
