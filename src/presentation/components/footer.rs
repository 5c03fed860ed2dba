use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use textwrap::wrap;

use super::super::view::UiContext;

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(area);

    let actions = ctx.help.unwrap_or(" ");
    let width = rows[0].width.max(8) as usize;
    let action_lines: Vec<Line<'_>> = wrap(&format!("Actions: {actions}"), width)
        .into_iter()
        .map(|segment| Line::styled(segment.into_owned(), Style::default().fg(Color::Yellow)))
        .collect();
    frame.render_widget(Paragraph::new(action_lines), rows[0]);

    let form = ctx.form_state;
    let mut status = ctx.status_message.to_string();
    if form.is_dirty() {
        status.push_str(" • unsaved changes");
    }
    if let Some(field) = form.focused_field() {
        status.push_str(" • focus: ");
        status.push_str(field.placeholder());
    }
    if status.trim().is_empty() {
        status = "Ready".to_string();
    }

    let invalid = form.invalid_count();
    let badge = if invalid > 0 {
        Span::styled(
            format!("[! {invalid}]"),
            Style::default().fg(Color::Red).bg(Color::Black),
        )
    } else {
        Span::styled("[ok]", Style::default().fg(Color::Green))
    };

    let status_widget = Paragraph::new(Line::from(vec![
        Span::raw("Status: "),
        Span::raw(status),
        Span::raw(" "),
        badge,
    ]))
    .block(Block::default().borders(Borders::NONE));
    frame.render_widget(status_widget, rows[1]);
}
