use insta_login::app::settings::Settings;
use insta_login::input::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use insta_login::runner::handlers::handle_key;
use insta_login::{App, Credentials, FieldStyle, Focus, LoginForm};
use std::cell::Cell;
use std::rc::Rc;

fn press(app: &mut App, code: KeyCode) -> bool {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        assert!(!press(app, KeyCode::Char(c)));
    }
}

#[test]
fn typing_fills_identifier_then_password() {
    let mut app = App::default();
    type_str(&mut app, "dave");
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Password);
    type_str(&mut app, "secret");
    assert_eq!(app.form.identifier(), "dave");
    assert_eq!(app.form.password(), "secret");
    assert!(app.form.is_submit_enabled());
}

#[test]
fn backspace_edits_focused_field() {
    let mut app = App::default();
    type_str(&mut app, "davex");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.form.identifier(), "dave");
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.form.identifier(), "");
}

#[test]
fn f2_toggles_visibility_from_any_field() {
    let mut app = App::default();
    press(&mut app, KeyCode::F(2));
    assert!(app.form.password_visible());
    press(&mut app, KeyCode::F(2));
    assert!(!app.form.password_visible());
}

#[test]
fn outlined_style_ignores_toggle_key() {
    let settings = Settings { field_style: FieldStyle::Outlined, ..Settings::default() };
    let mut app = App::new(settings);
    press(&mut app, KeyCode::F(2));
    assert!(!app.form.password_visible());
}

#[test]
fn esc_and_ctrl_c_close_the_screen() {
    let mut app = App::default();
    assert!(press(&mut app, KeyCode::Esc));
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(handle_key(&mut app, ctrl_c).unwrap());
    assert_eq!(app.form.identifier(), "");
}

#[test]
fn enter_on_close_glyph_exits() {
    let mut app = App::default();
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus, Focus::Close);
    assert!(press(&mut app, KeyCode::Enter));
}

#[test]
fn key_release_is_ignored() {
    let mut app = App::default();
    let mut ev = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    ev.kind = KeyEventKind::Release;
    assert!(!handle_key(&mut app, ev).unwrap());
    assert_eq!(app.form.identifier(), "");
}

#[test]
fn enter_on_login_submits_only_when_enabled() {
    let count = Rc::new(Cell::new(0));
    let hits = Rc::clone(&count);
    let form = LoginForm::with_handler(move |_: &Credentials<'_>| hits.set(hits.get() + 1));
    let mut app = App::with_form(form, Settings::default());

    app.focus = Focus::Login;
    assert!(!press(&mut app, KeyCode::Enter));
    assert_eq!(count.get(), 0);

    app.focus = Focus::Identifier;
    type_str(&mut app, "dave");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.focus, Focus::Password);
    type_str(&mut app, "secret");
    press(&mut app, KeyCode::Enter);
    assert_eq!(count.get(), 1);

    app.focus = Focus::Login;
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(count.get(), 2);
    assert_eq!(app.form.password(), "secret");
}

#[test]
fn space_is_typed_into_fields() {
    let mut app = App::default();
    type_str(&mut app, "a b");
    assert_eq!(app.form.identifier(), "a b");
}

#[test]
fn f3_switches_field_style_and_back() {
    let mut app = App::default();
    app.focus = Focus::VisibilityToggle;
    assert!(!press(&mut app, KeyCode::F(3)));
    assert_eq!(app.style, FieldStyle::Outlined);
    assert_eq!(app.focus, Focus::Password);
    assert!(!app.focus_ring().contains(&Focus::VisibilityToggle));

    press(&mut app, KeyCode::F(3));
    assert_eq!(app.style, FieldStyle::Filled);
    assert!(app.focus_ring().contains(&Focus::VisibilityToggle));
    // the settings value is only the start-up default
    assert_eq!(app.settings.field_style, FieldStyle::Filled);
}
