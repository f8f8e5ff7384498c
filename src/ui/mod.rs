use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::app::form::MASK_CHAR;
use crate::app::{App, Focus};

pub mod colors;
pub mod themes;
pub mod widgets;

pub use themes::Theme;
use widgets::text_field::FieldView;

pub const IDENTIFIER_PLACEHOLDER: &str = "Phone number, username or email";
pub const PASSWORD_PLACEHOLDER: &str = "Password";
pub const SHOW_LABEL: &str = "[show]";
pub const HIDE_LABEL: &str = "[hide]";

/// Widest the form column grows on large terminals.
const BODY_WIDTH: u16 = 48;

/// Label of the visibility control: offers the action it performs.
pub fn toggle_label(password_visible: bool) -> &'static str {
    if password_visible {
        HIDE_LABEL
    } else {
        SHOW_LABEL
    }
}

/// Draw the whole login screen from `app`.
pub fn ui(f: &mut Frame, app: &App) {
    let colors = colors::current();
    let area = f.area();
    f.render_widget(Block::default().style(colors.base_style), area);

    // header (1), body (min), footer (3)
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(area);

    widgets::header::render(f, header, app.is_focused(Focus::Close));
    draw_body(f, body, app);
    widgets::footer::render(f, footer, app.status.as_deref());
}

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
    let [column] = Layout::horizontal([Constraint::Length(BODY_WIDTH.min(area.width.saturating_sub(2)))])
        .flex(Flex::Center)
        .areas(area);

    let [logo, _, identifier, _, password, _, forgot, _, button, _, divider, _, social] =
        Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(column);

    let colors = colors::current();
    let form = &app.form;

    widgets::links::render_logo(f, logo);

    let id_cursor = widgets::text_field::render(
        f,
        identifier,
        &FieldView {
            text: form.identifier(),
            placeholder: IDENTIFIER_PLACEHOLDER,
            text_style: colors.identifier_style,
            focused: app.is_focused(Focus::Identifier),
            style: app.style,
            trailing: None,
        },
    );

    let masked = form.masked_password(MASK_CHAR);
    let trailing = app
        .style
        .has_visibility_toggle()
        .then(|| (toggle_label(form.password_visible()), app.is_focused(Focus::VisibilityToggle)));
    let pw_cursor = widgets::text_field::render(
        f,
        password,
        &FieldView {
            text: &masked,
            placeholder: PASSWORD_PLACEHOLDER,
            text_style: colors.password_style,
            focused: app.is_focused(Focus::Password),
            style: app.style,
            trailing,
        },
    );

    widgets::links::render_forgot_password(f, forgot);
    widgets::button::render(f, button, form.is_submit_enabled(), app.is_focused(Focus::Login));
    widgets::divider::render(f, divider);
    widgets::links::render_social(f, social, &app.settings.social_name);

    if let Some(pos) = id_cursor.or(pw_cursor) {
        f.set_cursor_position(pos);
    }
}
