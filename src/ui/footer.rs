//! Footer band: key hints, dimmed when the action is unavailable.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::preview::PreviewState;
use crate::ui::app::App;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, TEXT_SECONDARY};

fn hint<'a>(keys: &'a str, label: &'a str, enabled: bool) -> Vec<Span<'a>> {
    let key_style = if enabled {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT).add_modifier(Modifier::DIM)
    };
    let label_style = if enabled {
        Style::default().fg(TEXT_SECONDARY)
    } else {
        Style::default().fg(TEXT_SECONDARY).add_modifier(Modifier::DIM)
    };
    vec![
        Span::styled(keys, key_style),
        Span::styled(format!(" {}", label), label_style),
    ]
}

pub fn render_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let in_flight = app.request().is_in_flight();
    let preview = app.preview();
    let has_summary = app.request().summary().is_some();

    // Prev/next disable independently at their respective edges.
    let groups: Vec<Vec<Span>> = vec![
        hint("o", "open", !in_flight),
        hint("s", "summarize", app.document().is_some() && !in_flight),
        hint("←", "prev", preview.can_page_back()),
        hint("→", "next", preview.can_page_forward()),
        hint("+/-", "zoom", preview.is_pdf()),
        hint("c", "copy", has_summary),
        hint("q", "quit", true),
    ];

    let mut spans = vec![Span::raw(" ")];
    for (index, group) in groups.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled("  |  ", Style::default().fg(HEADER_SEPARATOR)));
        }
        spans.extend(group);
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
