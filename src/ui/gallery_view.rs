//! Paged image list.

use crate::ui::app::App;
use crate::ui::layout::scroll_offset;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const THUMB_WIDTH: u32 = 300;
const THUMB_HEIGHT: u32 = 200;

pub fn render_gallery(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.gallery();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .title(" Photos ");

    let mut lines = Vec::new();
    if let Some(error) = &state.error {
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(STATUS_ERROR),
        )));
        lines.push(Line::from(""));
    }

    if state.images.is_empty() {
        let message = if state.is_loading {
            " Loading images..."
        } else {
            " No images on this page."
        };
        lines.push(Line::from(Span::styled(message, Style::default().fg(MUTED_TEXT))));
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    let visible_rows = area.height.saturating_sub(2) as usize;
    let visible_rows = visible_rows.saturating_sub(lines.len());
    let offset = scroll_offset(app.cursor(), visible_rows);
    let author_width = state
        .images
        .iter()
        .map(|image| image.author.chars().count())
        .max()
        .unwrap_or(0);

    for (idx, image) in state.images.iter().enumerate().skip(offset).take(visible_rows) {
        let mut line = Line::from(vec![
            Span::styled(format!(" {:>4}  ", image.id), Style::default().fg(MUTED_TEXT)),
            Span::styled(
                format!("{:<width$}", image.author, width = author_width),
                Style::default().fg(HEADER_TEXT),
            ),
            Span::styled(
                format!("  {:>5}×{:<5}  ", image.width, image.height),
                Style::default().fg(MUTED_TEXT),
            ),
            Span::styled(
                image.thumbnail_url(THUMB_WIDTH, THUMB_HEIGHT),
                Style::default().fg(MUTED_TEXT),
            ),
        ]);
        if idx == app.cursor() {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
