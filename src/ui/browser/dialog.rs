//! Rendering for the file browser dialog.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER, TEXT_SECONDARY};

use super::state::BrowserState;

pub fn render_browser_dialog(frame: &mut Frame<'_>, state: &BrowserState) {
    let BrowserState::Visible {
        dir,
        entries,
        cursor,
    } = state
    else {
        return;
    };

    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let visible_rows = area.height.saturating_sub(2) as usize;
    // Keep the cursor on screen.
    let offset = cursor.saturating_sub(visible_rows.saturating_sub(1));

    let lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows)
        .map(|(index, entry)| {
            let marker = if entry.is_dir { "/" } else { "" };
            let style = if index == *cursor {
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else if entry.is_dir {
                Style::default().fg(ACCENT)
            } else {
                Style::default().fg(TEXT_SECONDARY)
            };
            Line::from(Span::styled(format!(" {}{}", entry.name, marker), style))
        })
        .collect();

    let title = format!(" Open file: {} ", dir.display());
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        area,
    );
}
