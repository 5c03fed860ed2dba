use std::time::Instant;

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::field::{FloatingTextField, LabelLayout};

/// Rows a field occupies: top border (floated label), input row, bottom border.
pub const FIELD_HEIGHT: u16 = 3;

const IDLE_BORDER: Color = Color::DarkGray;
const INVALID_BORDER: Color = Color::Red;

/// Draws `field` into `area` and returns where the cursor belongs while it is focused.
pub fn render_field(
    frame: &mut Frame<'_>,
    area: Rect,
    field: &FloatingTextField,
    now: Instant,
) -> Option<Position> {
    paint_field(frame.buffer_mut(), area, field, now)
}

pub(crate) fn paint_field(
    buf: &mut Buffer,
    area: Rect,
    field: &FloatingTextField,
    now: Instant,
) -> Option<Position> {
    if area.width < 3 || area.height < FIELD_HEIGHT {
        return None;
    }
    let area = Rect {
        height: FIELD_HEIGHT,
        ..area
    };

    let flagged = field.has_validator() && !field.text().is_empty() && !field.is_valid();
    let border = if flagged {
        INVALID_BORDER
    } else if field.is_focused() {
        field.label_color()
    } else {
        IDLE_BORDER
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    if flagged && let Some(hint) = field.invalid_hint() {
        block = block.title_bottom(Line::styled(
            format!(" {hint} "),
            Style::default().fg(INVALID_BORDER),
        ));
    }
    if field.is_focused()
        && let Some(keyboard) = field.keyboard_hint().label()
    {
        block = block.title_bottom(
            Line::styled(format!(" {keyboard} "), Style::default().fg(IDLE_BORDER))
                .right_aligned(),
        );
    }
    let inner = block.inner(area);
    block.render(area, buf);

    let display = field.display_text();
    let width = inner.width as usize;
    // A focused field keeps its last column free for the caret.
    let room = if field.is_focused() {
        width.saturating_sub(1)
    } else {
        width
    };
    let visible = visible_tail(&display, room);
    Paragraph::new(visible).render(inner, buf);

    paint_label(buf, area, inner, field, now);

    field
        .is_focused()
        .then(|| Position::new(inner.x + visible.width() as u16, inner.y))
}

fn paint_label(buf: &mut Buffer, area: Rect, inner: Rect, field: &FloatingTextField, now: Instant) {
    let placeholder = field.placeholder();
    if placeholder.is_empty() {
        return;
    }
    let style = Style::default().fg(field.label_color());
    // Cells cannot shrink, so the floated scale is expressed as a padded title on the border.
    let layout = if field.text().is_empty() {
        field.label_frame(now).nearest_layout()
    } else {
        LabelLayout::Floated
    };
    match layout {
        LabelLayout::Floated => {
            let text = format!(" {placeholder} ");
            let max = area.width.saturating_sub(2) as usize;
            buf.set_stringn(area.x + 1, area.y, text, max, style);
        }
        LabelLayout::Inline => {
            buf.set_stringn(inner.x, inner.y, placeholder, inner.width as usize, style);
        }
    }
}

/// Longest suffix of `text` fitting in `width` columns, so the caret end stays visible.
fn visible_tail(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }
    let mut used = 0usize;
    let mut start = text.len();
    for (index, ch) in text.char_indices().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        used += ch_width;
        start = index;
    }
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(visible_tail("hello", 10), "hello");
        assert_eq!(visible_tail("", 0), "");
    }

    #[test]
    fn long_text_keeps_the_end() {
        assert_eq!(visible_tail("abcdefgh", 3), "fgh");
        assert_eq!(visible_tail("abc", 0), "");
    }

    #[test]
    fn wide_characters_are_not_split() {
        assert_eq!(visible_tail("日本語", 5), "本語");
    }
}
