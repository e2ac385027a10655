use crate::gallery::{GalleryState, PaginationInfo};
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_LOADING, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(
        &self,
        state: &GalleryState,
        pagination: PaginationInfo,
        command_error: Option<&str>,
        spinner: char,
    ) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (status_text, status_color) = status_label(state, command_error, spinner);

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Picsum Gallery",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("Page {} / {}", pagination.current_page, pagination.total_pages),
                text_style,
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} images", state.images.len()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status_text, Style::default().fg(status_color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn status_label(
    state: &GalleryState,
    command_error: Option<&str>,
    spinner: char,
) -> (String, ratatui::style::Color) {
    if state.is_loading {
        (format!("{} Loading...", spinner), STATUS_LOADING)
    } else if let Some(error) = &state.error {
        (format!("Error: {}", error), STATUS_ERROR)
    } else if let Some(error) = command_error {
        (format!("Command dropped: {}", error), STATUS_ERROR)
    } else {
        ("Ready".to_string(), STATUS_OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_wins_over_error() {
        let state = GalleryState {
            is_loading: true,
            error: Some("stale".to_string()),
            ..GalleryState::default()
        };
        assert_eq!(status_label(&state, None, '|').0, "| Loading...");
    }

    #[test]
    fn error_is_shown() {
        let state = GalleryState {
            error: Some("Failed to fetch images".to_string()),
            ..GalleryState::default()
        };
        assert_eq!(
            status_label(&state, Some("channel full"), '|').0,
            "Error: Failed to fetch images"
        );
    }

    #[test]
    fn dropped_command_is_shown() {
        let (text, color) =
            status_label(&GalleryState::default(), Some("no available capacity"), '|');
        assert_eq!(text, "Command dropped: no available capacity");
        assert_eq!(color, STATUS_ERROR);
    }

    #[test]
    fn ready_without_errors() {
        assert_eq!(status_label(&GalleryState::default(), None, '|').0, "Ready");
    }
}
