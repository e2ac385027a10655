use crate::ui::app::{App, View};
use crate::ui::detail_view::render_detail;
use crate::ui::footer::Footer;
use crate::ui::gallery_view::render_gallery;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(
        Header::new().widget(
            app.gallery(),
            app.pagination_info(),
            app.last_command_error(),
            app.spinner(),
        ),
        header,
    );

    frame.render_widget(Clear, body);
    match app.view() {
        View::Gallery => render_gallery(frame, app, body),
        View::Detail { .. } => render_detail(frame, app, body),
    }

    frame.render_widget(Footer::new().widget(app.view(), footer), footer);
}
