use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::colors::current as current_colors;

pub const HELP: &str = "Tab/Shift+Tab: move  F2: show/hide  F3: style  Enter: select  Esc: close";

/// Divider, the sign-up prompt and a help/status line.
pub fn render(f: &mut Frame, area: Rect, status: Option<&str>) {
    let colors = current_colors();
    let [rule, signup, help] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    f.render_widget(Block::default().borders(Borders::TOP).border_style(colors.muted_style), rule);

    let line = Line::from(vec![
        Span::styled("Don't have an account? ", colors.muted_style.add_modifier(ratatui::style::Modifier::BOLD)),
        Span::styled("Sign Up.", colors.link_style),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), signup);

    let text = status.unwrap_or(HELP);
    f.render_widget(
        Paragraph::new(Span::styled(text, colors.muted_style)).alignment(Alignment::Center),
        help,
    );
}
