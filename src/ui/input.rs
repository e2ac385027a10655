use crate::ui::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || key.code == KeyCode::Char('q') {
        app.request_quit();
        return;
    }

    match app.view() {
        View::Gallery => handle_gallery_key(app, key),
        View::Detail { .. } => handle_detail_key(app, key),
    }
}

fn handle_gallery_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Right | KeyCode::Char('n') => {
            app.request_next_page();
        }
        KeyCode::Left | KeyCode::Char('p') => {
            app.request_previous_page();
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::PageUp => app.move_cursor(-10),
        KeyCode::PageDown => app.move_cursor(10),
        KeyCode::Enter => {
            app.open_detail();
        }
        KeyCode::Char('r') => {
            app.request_refresh();
        }
        KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Backspace | KeyCode::Left) {
        app.close_detail();
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
