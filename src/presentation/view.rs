use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

use crate::form::FormState;

use super::{
    components::render_footer,
    field::{FIELD_HEIGHT, render_field},
};

pub struct UiContext<'a> {
    pub form_state: &'a FormState,
    pub status_message: &'a str,
    pub help: Option<&'a str>,
    pub now: Instant,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(FIELD_HEIGHT + 2), Constraint::Length(3)])
        .split(frame.area());

    render_body(frame, chunks[0], &ctx);
    render_footer(frame, chunks[1], &ctx);
}

fn render_body(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let form = ctx.form_state;
    let mut block = Block::default().borders(Borders::ALL);
    if let Some(title) = &form.title {
        block = block.title(title.clone());
    }

    if form.is_empty() {
        frame.render_widget(Paragraph::new("No fields to edit").block(block), area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); form.fields().len()];
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (field, row) in form.fields().iter().zip(rows.iter()) {
        if let Some(cursor) = render_field(frame, *row, field, ctx.now) {
            frame.set_cursor_position(cursor);
        }
    }
}
