//! Preview pane: one rendering per preview variant.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use ratatui_image::StatefulImage;

use crate::preview::PreviewState;
use crate::ui::app::App;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, STATUS_ERROR, STATUS_WARN, TEXT_SECONDARY};

fn pane_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn placeholder(frame: &mut Frame<'_>, area: Rect, message: &str, style: Style) {
    let block = pane_block("Preview");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let vertical_pad = inner.height / 2;
    let mut lines = vec![Line::default(); vertical_pad as usize];
    lines.push(Line::from(Span::styled(message.to_string(), style)).centered());
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

pub fn render_preview(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    // Snapshot what the variants need before taking the mutable
    // protocol borrow.
    let preview = app.preview().clone();
    let scroll = app.text_scroll();

    match preview {
        PreviewState::Empty => placeholder(
            frame,
            area,
            "Press o to open a file",
            Style::default().fg(TEXT_SECONDARY),
        ),

        PreviewState::Loading => placeholder(
            frame,
            area,
            "Loading preview...",
            Style::default().fg(TEXT_SECONDARY),
        ),

        PreviewState::Unsupported => placeholder(
            frame,
            area,
            "Preview not available for this file type",
            Style::default().fg(STATUS_WARN),
        ),

        PreviewState::Error { message } => placeholder(
            frame,
            area,
            &message,
            Style::default().fg(STATUS_ERROR),
        ),

        PreviewState::Pdf {
            page_count,
            current_page,
            scale,
        } => {
            let status = format!(
                " Page {}/{}  zoom {:.1}x ",
                current_page, page_count, scale
            );
            let block = pane_block("Preview").title_bottom(
                Line::from(Span::styled(status, Style::default().fg(ACCENT))).right_aligned(),
            );
            let inner = block.inner(area);
            frame.render_widget(block, area);
            if let Some(protocol) = app.page_protocol_mut() {
                frame.render_stateful_widget(StatefulImage::default(), inner, protocol);
            } else {
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        "Rendering page...",
                        Style::default().fg(TEXT_SECONDARY),
                    ))),
                    inner,
                );
            }
        }

        PreviewState::Text {
            content,
            char_count,
            line_count,
        } => {
            let meta = format!(" {} chars  {} lines ", char_count, line_count);
            let block = pane_block("Preview").title_bottom(
                Line::from(Span::styled(
                    meta,
                    Style::default().fg(TEXT_SECONDARY).add_modifier(Modifier::DIM),
                ))
                .right_aligned(),
            );
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(
                Paragraph::new(content).scroll((scroll, 0)),
                inner,
            );
        }
    }
}
