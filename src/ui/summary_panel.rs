//! Summary pane: one rendering per request state.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::clipboard::{normalize_rendered, CopyOutcome};
use crate::summarize::RequestState;
use crate::ui::app::App;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, STATUS_ERROR, STATUS_OK, TEXT_SECONDARY};

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

pub fn render_summary(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mut block = Block::default()
        .title(" Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if let Some(outcome) = app.copy_feedback() {
        let (label, color) = match outcome {
            CopyOutcome::Copied => (" Copied ", STATUS_OK),
            CopyOutcome::Failed => (" Copy failed ", STATUS_ERROR),
        };
        block = block.title_bottom(
            Line::from(Span::styled(
                label,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .right_aligned(),
        );
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = match app.request() {
        RequestState::Idle => Paragraph::new(Line::from(Span::styled(
            "Press s to summarize the selected file",
            Style::default().fg(TEXT_SECONDARY),
        ))),

        RequestState::InFlight => {
            let spinner = SPINNER_FRAMES[app.spinner_tick() as usize % SPINNER_FRAMES.len()];
            Paragraph::new(Line::from(vec![
                Span::styled(spinner, Style::default().fg(ACCENT)),
                Span::styled(" Summarizing...", Style::default().fg(TEXT_SECONDARY)),
            ]))
        }

        RequestState::Succeeded { summary } => {
            let text = normalize_rendered(summary);
            let mut lines: Vec<Line> = text.lines().map(|l| Line::from(l.to_string())).collect();
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "c: copy as plain text",
                Style::default().fg(TEXT_SECONDARY).add_modifier(Modifier::DIM),
            )));
            Paragraph::new(lines).wrap(Wrap { trim: false })
        }

        RequestState::Failed { message } => Paragraph::new(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(STATUS_ERROR),
        )))
        .wrap(Wrap { trim: false }),
    };

    frame.render_widget(paragraph, inner);
}
