//! Single-image detail panel.

use crate::api::Image;
use crate::ui::app::App;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const PREVIEW_WIDTH: u32 = 1200;
const PREVIEW_HEIGHT: u32 = 800;

pub fn render_detail(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .title(Span::styled(" Image details ", Style::default().fg(ACCENT)));

    let lines = match app.detail_image() {
        Some(image) => detail_lines(image),
        None => vec![Line::from(Span::styled(
            " Image not found",
            Style::default().fg(STATUS_ERROR),
        ))],
    };

    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

fn detail_lines(image: &Image) -> Vec<Line<'static>> {
    vec![
        field("Author", image.author.clone()),
        field("ID", image.id.clone()),
        field(
            "Dimensions",
            format!(
                "{} × {} px (ratio {:.2})",
                image.width,
                image.height,
                image.aspect_ratio()
            ),
        ),
        Line::from(""),
        field("Source", image.url.clone()),
        field("Download", image.download_url.clone()),
        field("Preview", image.thumbnail_url(PREVIEW_WIDTH, PREVIEW_HEIGHT)),
    ]
}

fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {:<11}", label), Style::default().fg(MUTED_TEXT)),
        Span::styled(value, Style::default().fg(HEADER_TEXT)),
    ])
}
