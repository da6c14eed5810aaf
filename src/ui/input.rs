//! Keyboard routing.
//!
//! Maps key presses onto session actions. When the file browser
//! dialog is open it captures navigation keys; otherwise keys act on
//! the preview and summary panes.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.request_quit();
        return;
    }

    if app.browser().is_visible() {
        match key.code {
            KeyCode::Up => app.browser_move(-1),
            KeyCode::Down => app.browser_move(1),
            KeyCode::Enter => app.browser_confirm(),
            KeyCode::Esc => app.browser_close(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('o') => app.open_browser(),
        KeyCode::Char('s') => app.summarize(),
        KeyCode::Char('c') => app.copy_summary(),
        KeyCode::Left => app.change_page(-1),
        KeyCode::Right => app.change_page(1),
        KeyCode::Char('+') | KeyCode::Char('=') => app.zoom_in(),
        KeyCode::Char('-') => app.zoom_out(),
        KeyCode::Up => app.scroll_text(-1),
        KeyCode::Down => app.scroll_text(1),
        KeyCode::PageUp => app.scroll_text(-10),
        KeyCode::PageDown => app.scroll_text(10),
        _ => {}
    }
}
