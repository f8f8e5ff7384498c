//! Static text rows: logo, "Forgot password?" and the social login line.

use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::colors::current as current_colors;

pub const LOGO: &str = "Instagram";

pub fn render_logo(f: &mut Frame, area: Rect) {
    let colors = current_colors();
    let style = colors.identifier_style.add_modifier(Modifier::BOLD | Modifier::ITALIC);
    let p = Paragraph::new(vec![Line::raw(""), Line::from(Span::styled(LOGO, style))])
        .alignment(Alignment::Center);
    f.render_widget(p, area);
}

pub fn render_forgot_password(f: &mut Frame, area: Rect) {
    let colors = current_colors();
    let p = Paragraph::new(Span::styled("Forgot password?", colors.link_style)).alignment(Alignment::Right);
    f.render_widget(p, area);
}

pub fn social_line(name: &str) -> String {
    format!("Continue as {}", name)
}

pub fn render_social(f: &mut Frame, area: Rect, name: &str) {
    let colors = current_colors();
    let line = Line::from(vec![
        Span::styled("[f] ", colors.link_style),
        Span::styled(social_line(name), colors.link_style),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
