use ratatui::{layout::Rect, text::Span, widgets::Paragraph, Frame};

use crate::ui::colors::current as current_colors;

/// `──── OR ────` filling `width` columns. Labels wider than the row are
/// returned unpadded.
pub fn divider_line(width: usize, label: &str) -> String {
    let label = format!(" {} ", label);
    let label_w = label.chars().count();
    if width <= label_w {
        return label.trim().to_string();
    }
    let rest = width - label_w;
    let left = rest / 2;
    let right = rest - left;
    format!("{}{}{}", "\u{2500}".repeat(left), label, "\u{2500}".repeat(right))
}

pub fn render(f: &mut Frame, area: Rect) {
    let colors = current_colors();
    let text = divider_line(area.width as usize, "OR");
    f.render_widget(Paragraph::new(Span::styled(text, colors.muted_style)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divider_fills_width() {
        let s = divider_line(20, "OR");
        assert_eq!(s.chars().count(), 20);
        assert!(s.contains(" OR "));
    }

    #[test]
    fn narrow_divider_keeps_label() {
        assert_eq!(divider_line(2, "OR"), "OR");
    }
}
