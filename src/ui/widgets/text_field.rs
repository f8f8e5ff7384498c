use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
    Frame,
};
use unicode_segmentation::UnicodeSegmentation;

use crate::app::types::FieldStyle;
use crate::ui::colors::current as current_colors;

/// What to draw for one text input.
pub struct FieldView<'a> {
    /// Text as displayed (already masked for passwords).
    pub text: &'a str,
    pub placeholder: &'a str,
    pub text_style: Style,
    pub focused: bool,
    pub style: FieldStyle,
    /// Trailing control label, e.g. `[show]`.
    pub trailing: Option<(&'a str, bool)>,
}

/// Longest suffix of `text` that fits in `width` columns, so the end of the
/// input (where typing happens) stays visible.
pub fn visible_tail(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (idx, g) in text.grapheme_indices(true).rev() {
        let w = Span::raw(g).width();
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

/// Draw the field and return where the cursor belongs when it has focus.
pub fn render(f: &mut Frame, area: Rect, view: &FieldView<'_>) -> Option<Position> {
    let colors = current_colors();
    let block = match view.style {
        // Focus shows as an accent bar in the left padding column.
        FieldStyle::Filled if view.focused => Block::default()
            .borders(Borders::LEFT)
            .border_type(BorderType::Thick)
            .border_style(colors.field_focused_border_style)
            .style(colors.field_style)
            .padding(Padding::new(0, 1, area.height.saturating_sub(1) / 2, 0)),
        FieldStyle::Filled => Block::default()
            .style(colors.field_style)
            .padding(Padding::new(1, 1, area.height.saturating_sub(1) / 2, 0)),
        FieldStyle::Outlined => Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(if view.focused {
                colors.field_focused_border_style
            } else {
                colors.field_border_style
            })
            .padding(Padding::horizontal(1)),
    };
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (text_area, trailing_area) = match view.trailing {
        Some((label, _)) => {
            let w = Span::raw(label).width() as u16;
            let [t, c] = Layout::horizontal([Constraint::Min(1), Constraint::Length(w)]).areas(inner);
            (t, Some(c))
        }
        None => (inner, None),
    };

    let shown = visible_tail(view.text, text_area.width.saturating_sub(1) as usize);
    let span = if view.text.is_empty() {
        Span::styled(view.placeholder, colors.placeholder_style)
    } else {
        Span::styled(shown, view.text_style)
    };
    f.render_widget(Paragraph::new(span), text_area);

    if let (Some((label, focused)), Some(r)) = (view.trailing, trailing_area) {
        let style = if focused { colors.focus_style } else { colors.toggle_style };
        f.render_widget(Paragraph::new(Span::styled(label, style)), r);
    }

    if view.focused && text_area.height > 0 {
        let x = text_area.x + Span::raw(shown).width() as u16;
        Some(Position::new(x.min(text_area.right().saturating_sub(1)), text_area.y))
    } else {
        None
    }
}

/// Thick bar drawn beside a focused filled field.
pub const FOCUS_BAR: &str = "\u{2503}";

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn first_column(view: &FieldView<'_>) -> Vec<String> {
        let mut term = Terminal::new(TestBackend::new(20, 3)).unwrap();
        term.draw(|f| {
            let area = f.area();
            render(f, area, view);
        })
        .unwrap();
        let buf = term.backend().buffer();
        (0..3)
            .map(|y| buf.cell((0, y)).map(|c| c.symbol().to_string()).unwrap_or_default())
            .collect()
    }

    fn filled(focused: bool) -> FieldView<'static> {
        FieldView {
            text: "dave",
            placeholder: "",
            text_style: Style::default(),
            focused,
            style: FieldStyle::Filled,
            trailing: None,
        }
    }

    #[test]
    fn focused_filled_field_has_accent_bar() {
        assert_eq!(first_column(&filled(true)), vec![FOCUS_BAR; 3]);
        assert!(first_column(&filled(false)).iter().all(|s| s == " "));
    }

    #[test]
    fn focused_filled_field_keeps_text_column() {
        let mut term = Terminal::new(TestBackend::new(20, 3)).unwrap();
        let mut cursors = Vec::new();
        for focused in [false, true] {
            term.draw(|f| {
                let area = f.area();
                cursors.push(render(f, area, &filled(focused)));
            })
            .unwrap();
        }
        assert_eq!(cursors, vec![None, Some(Position::new(5, 1))]);
        let row: String = (0..20)
            .map(|x| term.backend().buffer().cell((x, 1)).map(|c| c.symbol().to_string()).unwrap_or_default())
            .collect();
        assert!(row.starts_with(&format!("{}dave", FOCUS_BAR)), "{row}");
    }

    #[test]
    fn short_text_is_shown_whole() {
        assert_eq!(visible_tail("dave", 10), "dave");
    }

    #[test]
    fn long_text_keeps_the_end() {
        assert_eq!(visible_tail("abcdefgh", 3), "fgh");
        assert_eq!(visible_tail("abc", 0), "");
    }

    #[test]
    fn wide_graphemes_count_double() {
        assert_eq!(visible_tail("ab\u{4F60}\u{597D}", 4), "\u{4F60}\u{597D}");
        assert_eq!(visible_tail("ab\u{4F60}\u{597D}", 3), "\u{597D}");
    }
}
