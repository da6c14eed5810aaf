//! Frame composition.

use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::browser::render_browser_dialog;
use crate::ui::footer::render_footer;
use crate::ui::header::render_header;
use crate::ui::layout::{body_panes, layout_regions};
use crate::ui::preview_panel::render_preview;
use crate::ui::summary_panel::render_summary;

pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let (header, body, footer) = layout_regions(frame.area());
    let (preview_pane, summary_pane) = body_panes(body);

    render_header(frame, app, header);
    render_preview(frame, app, preview_pane);
    render_summary(frame, app, summary_pane);
    render_footer(frame, app, footer);

    // Dialog draws over everything else.
    render_browser_dialog(frame, app.browser());
}
