//! Header band: application name plus the selected file's meta line.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::document::format_byte_size;
use crate::ui::app::App;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, TEXT_SECONDARY};

pub fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        " sumview ",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )];

    if let Some(document) = app.document() {
        spans.push(Span::styled("| ", Style::default().fg(HEADER_SEPARATOR)));
        spans.push(Span::styled(
            document.name.clone(),
            Style::default().fg(HEADER_TEXT),
        ));
        spans.push(Span::styled(
            format!("  {}", format_byte_size(document.byte_size)),
            Style::default().fg(TEXT_SECONDARY),
        ));
        if !document.mime_hint.is_empty() {
            spans.push(Span::styled(
                format!("  {}", document.mime_hint),
                Style::default().fg(TEXT_SECONDARY),
            ));
        }
    } else {
        spans.push(Span::styled(
            "| no file selected",
            Style::default().fg(TEXT_SECONDARY),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}
