use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::Span,
    widgets::{Block, Padding, Paragraph},
    Frame,
};

use crate::ui::colors::current as current_colors;

pub const LOGIN_LABEL: &str = "Log In";

/// The login button. Disabled buttons are drawn dimmed; focus adds a marker.
pub fn render(f: &mut Frame, area: Rect, enabled: bool, focused: bool) {
    let colors = current_colors();
    let mut style = if enabled { colors.button_style } else { colors.button_disabled_style };
    if focused {
        style = style.add_modifier(Modifier::BOLD);
    }
    let label = if focused {
        format!("\u{25B8} {} \u{25C2}", LOGIN_LABEL)
    } else {
        LOGIN_LABEL.to_string()
    };
    let block = Block::default().style(style).padding(Padding::top(area.height.saturating_sub(1) / 2));
    let p = Paragraph::new(Span::styled(label, style)).alignment(Alignment::Center).block(block);
    f.render_widget(p, area);
}
