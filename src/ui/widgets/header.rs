use ratatui::{layout::{Alignment, Rect}, text::Span, widgets::Paragraph, Frame};

use crate::ui::colors::current as current_colors;

pub const CLOSE_GLYPH: &str = "\u{2715}";

/// Close glyph pinned to the top-right corner.
pub fn render(f: &mut Frame, area: Rect, focused: bool) {
    let colors = current_colors();
    let style = if focused { colors.focus_style } else { colors.muted_style };
    let p = Paragraph::new(Span::styled(format!(" {} ", CLOSE_GLYPH), style)).alignment(Alignment::Right);
    f.render_widget(p, area);
}
